//! Caller-side business rules for doctor records.
//!
//! The repository stores whatever it is given; the rules about what a
//! well-formed record looks like live here, next to the forms that
//! collect the input. Rejections are recoverable: the shell shows the
//! message beside the offending field.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use thiserror::Error;

use crate::models::{Doctor, NewDoctor};

/// Specialties offered in the registration form dropdown.
pub const SPECIALTIES: &[&str] = &[
    "Hematología",
    "Medicina Interna",
    "Oncología",
    "DYCP",
    "Cirugía",
];

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Required { field: &'static str },
    #[error("Invalid email address: {value}")]
    InvalidEmail { value: String },
    #[error("Specialty is required when the specialist flag is set")]
    MissingSpecialty,
    #[error("Birth date {date} lies in the future")]
    FutureBirthDate { date: NaiveDate },
}

/// Check a registration payload before it reaches the repository.
pub fn validate_new_doctor(doctor: &NewDoctor) -> Result<(), ValidationError> {
    validate_fields(
        &doctor.name,
        &doctor.id_number,
        &doctor.email,
        doctor.birth_date,
        doctor.has_specialty,
        doctor.specialty.as_deref(),
    )
}

/// Check an edited record before it is written back.
pub fn validate_doctor(doctor: &Doctor) -> Result<(), ValidationError> {
    validate_fields(
        &doctor.name,
        &doctor.id_number,
        &doctor.email,
        doctor.birth_date,
        doctor.has_specialty,
        doctor.specialty.as_deref(),
    )
}

fn validate_fields(
    name: &str,
    id_number: &str,
    email: &str,
    birth_date: NaiveDate,
    has_specialty: bool,
    specialty: Option<&str>,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    if id_number.trim().is_empty() {
        return Err(ValidationError::Required { field: "idNumber" });
    }
    if email.trim().is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail {
            value: email.into(),
        });
    }
    if birth_date > Local::now().date_naive() {
        return Err(ValidationError::FutureBirthDate { date: birth_date });
    }
    if has_specialty && specialty.map_or(true, |s| s.trim().is_empty()) {
        return Err(ValidationError::MissingSpecialty);
    }
    Ok(())
}

/// Whether a specialty is one the form offers. Advisory only: the rest
/// of the app accepts free text here.
pub fn known_specialty(specialty: &str) -> bool {
    SPECIALTIES.contains(&specialty)
}
