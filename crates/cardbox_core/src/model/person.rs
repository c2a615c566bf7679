//! Person domain record.
//!
//! # Responsibility
//! - Hold one contact's identity fields plus the appointment-date value.
//! - Validate field shapes on every store write path.
//!
//! # Invariants
//! - Equality is value-based: two persons are equal iff all fields match.
//! - The appointment date stays string-typed; the core treats it as an
//!   opaque calendar value and only tokenizes it for keyword search.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{Alphabetic}\d][\p{Alphabetic}\d ]*$").expect("valid name regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("valid email regex"));

/// Validation error for person field shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    /// Name is blank or starts with a non-alphanumeric character.
    InvalidName(String),
    /// Phone must be at least 3 digits and contain only digits.
    InvalidPhone(String),
    /// Email must contain a single-token local part and domain.
    InvalidEmail(String),
    /// Address must not be blank.
    BlankAddress,
    /// Appointment date must not be blank.
    BlankAppointmentDate,
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(
                f,
                "invalid name `{value}`: names start alphanumeric and contain only alphanumerics and spaces"
            ),
            Self::InvalidPhone(value) => {
                write!(f, "invalid phone `{value}`: expected at least 3 digits")
            }
            Self::InvalidEmail(value) => write!(f, "invalid email `{value}`"),
            Self::BlankAddress => write!(f, "address cannot be blank"),
            Self::BlankAppointmentDate => write!(f, "appointment date cannot be blank"),
        }
    }
}

impl Error for PersonValidationError {}

/// Canonical contact record.
///
/// Contact fields other than the appointment date are opaque to the core:
/// the store only ever compares them for value equality. Serde derives keep
/// the wire shape stable for the external load/save collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// String-typed calendar value, e.g. `"12-2024 urgent"`.
    pub appointment_date: String,
}

impl Person {
    /// Creates a person record from raw field values.
    ///
    /// Shape rules are checked separately via [`Person::validate`], which
    /// store write paths call before mutating any collection.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        appointment_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            appointment_date: appointment_date.into(),
        }
    }

    /// Checks all field shape rules.
    ///
    /// # Errors
    /// Returns the first violated rule in field order.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if !NAME_RE.is_match(&self.name) {
            return Err(PersonValidationError::InvalidName(self.name.clone()));
        }
        if !PHONE_RE.is_match(&self.phone) {
            return Err(PersonValidationError::InvalidPhone(self.phone.clone()));
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(PersonValidationError::InvalidEmail(self.email.clone()));
        }
        if self.address.trim().is_empty() {
            return Err(PersonValidationError::BlankAddress);
        }
        if self.appointment_date.trim().is_empty() {
            return Err(PersonValidationError::BlankAppointmentDate);
        }
        Ok(())
    }

    /// Builds the edited successor of this person with a new appointment
    /// date, leaving `self` untouched.
    pub fn with_appointment_date(&self, appointment_date: impl Into<String>) -> Self {
        Self {
            appointment_date: appointment_date.into(),
            ..self.clone()
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (appt: {})", self.name, self.appointment_date)
    }
}
