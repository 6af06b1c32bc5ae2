//! Shared application state.
//!
//! `AppState` is the single object the desktop shell manages: it owns
//! the doctor repository and serializes access behind a mutex. Built
//! once at startup; nothing in the crate reaches for a global.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use crate::config;
use crate::db::{DatabaseError, DoctorRepository};

pub struct AppState {
    doctors: Mutex<DoctorRepository>,
}

impl AppState {
    /// Open the registry at its configured location, creating the app
    /// data directory on first run.
    pub fn open() -> Result<Self, CoreError> {
        fs::create_dir_all(config::app_data_dir())?;
        let path = config::database_path();
        tracing::info!("Opening doctor registry at {}", path.display());
        let repo = DoctorRepository::open(&path)?;
        Ok(Self {
            doctors: Mutex::new(repo),
        })
    }

    /// Open the registry at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, CoreError> {
        let repo = DoctorRepository::open(path)?;
        Ok(Self {
            doctors: Mutex::new(repo),
        })
    }

    /// In-memory state (for testing).
    pub fn open_in_memory() -> Result<Self, CoreError> {
        let repo = DoctorRepository::open_in_memory()?;
        Ok(Self {
            doctors: Mutex::new(repo),
        })
    }

    /// Acquire the repository lock. Callers hold the guard for one
    /// operation and drop it before handing control back to the UI.
    pub fn doctors(&self) -> Result<MutexGuard<'_, DoctorRepository>, CoreError> {
        self.doctors.lock().map_err(|_| CoreError::LockPoisoned)
    }
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
