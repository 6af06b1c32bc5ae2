pub mod repository;
pub mod sqlite;

pub use repository::*;
pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The storage medium cannot be opened or used. Fatal for the
    /// operation: surfaced to the caller, never retried internally.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    /// Another doctor already holds this id number (natural key).
    /// The record stored first is retained.
    #[error("A doctor with id number {id_number} already exists")]
    DuplicateKey { id_number: String },

    #[error("Doctor not found: id {id}")]
    NotFound { id: i64 },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
}
