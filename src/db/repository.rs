//! Doctor registry — the single persisted entity of the roster app.
//!
//! `DoctorRepository` owns the SQLite connection and is handed to
//! callers explicitly (the shell keeps one instance in its managed
//! state). Business validation lives in `crate::validation`; this layer
//! is plain storage: every operation is one short-lived statement,
//! committed before the call returns.

use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use super::{sqlite, DatabaseError};
use crate::models::enums::DoctorGroup;
use crate::models::{Doctor, NewDoctor};

pub struct DoctorRepository {
    conn: Connection,
}

impl DoctorRepository {
    /// Open (or create) the registry at the given path and bring its
    /// schema up to date.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        let conn = sqlite::open_database(path)?;
        Ok(Self { conn })
    }

    /// Open an in-memory registry (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = sqlite::open_memory_database()?;
        Ok(Self { conn })
    }

    /// Insert a new doctor and return the store-assigned id.
    ///
    /// A missing group defaults to urgencias, so payloads written
    /// before groups existed land where group queries expect them.
    pub fn insert(&self, doctor: &NewDoctor) -> Result<i64, DatabaseError> {
        let group = doctor.group.clone().unwrap_or_default();
        let result = self.conn.execute(
            "INSERT INTO doctors (name, id_number, birth_date, has_specialty, specialty, staff_group, email)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                doctor.name,
                doctor.id_number,
                doctor.birth_date.to_string(),
                doctor.has_specialty as i32,
                doctor.specialty,
                group.as_str(),
                doctor.email,
            ],
        );

        match result {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                tracing::debug!("Registered doctor id={id}");
                Ok(id)
            }
            Err(e) if is_unique_violation(&e) => Err(DatabaseError::DuplicateKey {
                id_number: doctor.id_number.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// All registered doctors, in insertion order.
    pub fn get_all(&self) -> Result<Vec<Doctor>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, id_number, birth_date, has_specialty, specialty, staff_group, email
             FROM doctors ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(DoctorRow {
                id: row.get(0)?,
                name: row.get(1)?,
                id_number: row.get(2)?,
                birth_date: row.get(3)?,
                has_specialty: row.get(4)?,
                specialty: row.get(5)?,
                staff_group: row.get(6)?,
                email: row.get(7)?,
            })
        })?;

        let mut doctors = Vec::new();
        for row in rows {
            doctors.push(doctor_from_row(row?)?);
        }
        Ok(doctors)
    }

    /// Look up a doctor by national id number (the natural key).
    pub fn get_by_id_number(&self, id_number: &str) -> Result<Option<Doctor>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, id_number, birth_date, has_specialty, specialty, staff_group, email
             FROM doctors WHERE id_number = ?1",
        )?;

        let result = stmt.query_row(params![id_number], |row| {
            Ok(DoctorRow {
                id: row.get(0)?,
                name: row.get(1)?,
                id_number: row.get(2)?,
                birth_date: row.get(3)?,
                has_specialty: row.get(4)?,
                specialty: row.get(5)?,
                staff_group: row.get(6)?,
                email: row.get(7)?,
            })
        });

        match result {
            Ok(row) => Ok(Some(doctor_from_row(row)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Doctors belonging to one staff group, in insertion order.
    pub fn get_by_group(&self, group: DoctorGroup) -> Result<Vec<Doctor>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, id_number, birth_date, has_specialty, specialty, staff_group, email
             FROM doctors WHERE staff_group = ?1 ORDER BY id",
        )?;

        let rows = stmt.query_map(params![group.as_str()], |row| {
            Ok(DoctorRow {
                id: row.get(0)?,
                name: row.get(1)?,
                id_number: row.get(2)?,
                birth_date: row.get(3)?,
                has_specialty: row.get(4)?,
                specialty: row.get(5)?,
                staff_group: row.get(6)?,
                email: row.get(7)?,
            })
        })?;

        let mut doctors = Vec::new();
        for row in rows {
            doctors.push(doctor_from_row(row?)?);
        }
        Ok(doctors)
    }

    /// Doctors with a registered specialty, in insertion order.
    pub fn get_specialists(&self) -> Result<Vec<Doctor>, DatabaseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, id_number, birth_date, has_specialty, specialty, staff_group, email
             FROM doctors WHERE has_specialty = 1 ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(DoctorRow {
                id: row.get(0)?,
                name: row.get(1)?,
                id_number: row.get(2)?,
                birth_date: row.get(3)?,
                has_specialty: row.get(4)?,
                specialty: row.get(5)?,
                staff_group: row.get(6)?,
                email: row.get(7)?,
            })
        })?;

        let mut doctors = Vec::new();
        for row in rows {
            doctors.push(doctor_from_row(row?)?);
        }
        Ok(doctors)
    }

    /// Replace the stored record with `doctor`, matched by id. Whole
    /// record, no partial patch: absent optional fields clear.
    pub fn update(&self, doctor: &Doctor) -> Result<(), DatabaseError> {
        let result = self.conn.execute(
            "UPDATE doctors SET name = ?2, id_number = ?3, birth_date = ?4,
             has_specialty = ?5, specialty = ?6, staff_group = ?7, email = ?8
             WHERE id = ?1",
            params![
                doctor.id,
                doctor.name,
                doctor.id_number,
                doctor.birth_date.to_string(),
                doctor.has_specialty as i32,
                doctor.specialty,
                doctor.group.as_str(),
                doctor.email,
            ],
        );

        match result {
            Ok(0) => Err(DatabaseError::NotFound { id: doctor.id }),
            Ok(_) => {
                tracing::debug!("Updated doctor id={}", doctor.id);
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => Err(DatabaseError::DuplicateKey {
                id_number: doctor.id_number.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a doctor by id. Deleting an absent id is reported as
    /// `NotFound` so a stale view can tell the caller to refresh.
    pub fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let rows = self
            .conn
            .execute("DELETE FROM doctors WHERE id = ?1", params![id])?;
        if rows == 0 {
            return Err(DatabaseError::NotFound { id });
        }
        tracing::debug!("Deleted doctor id={id}");
        Ok(())
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

// Internal row type for Doctor mapping
struct DoctorRow {
    id: i64,
    name: String,
    id_number: String,
    birth_date: String,
    has_specialty: i32,
    specialty: Option<String>,
    staff_group: String,
    email: String,
}

fn doctor_from_row(row: DoctorRow) -> Result<Doctor, DatabaseError> {
    Ok(Doctor {
        id: row.id,
        name: row.name,
        id_number: row.id_number,
        birth_date: NaiveDate::parse_from_str(&row.birth_date, "%Y-%m-%d")
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        has_specialty: row.has_specialty != 0,
        specialty: row.specialty,
        group: DoctorGroup::from_str(&row.staff_group)?,
        email: row.email,
    })
}
