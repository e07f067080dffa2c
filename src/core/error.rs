// Centralized error handling for the portal controller

use std::fmt;
use thiserror::Error;

/// Form fields an intent payload can be missing or have malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    Subject,
    Date,
    /// The loaded student list an attendance save applies to
    Roster,
    LeaveType,
    FromDate,
    ToDate,
    Reason,
    Coverage,
    MaterialType,
    Name,
    File,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::Subject => "subject",
            Field::Date => "date",
            Field::Roster => "roster",
            Field::LeaveType => "leave_type",
            Field::FromDate => "from_date",
            Field::ToDate => "to_date",
            Field::Reason => "reason",
            Field::Coverage => "coverage",
            Field::MaterialType => "material_type",
            Field::Name => "name",
            Field::File => "file",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejections produced by the form validators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: Field },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: Field },

    #[error("End date is before start date")]
    InvalidDateRange,

    #[error("No attendance marked")]
    NoRecordsMarked,
}

impl ValidationError {
    pub fn missing(field: Field) -> Self {
        ValidationError::MissingField { field }
    }

    /// Message shown to the user when this error is surfaced
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } => match field {
                Field::Email | Field::Password => "Please fill in all fields",
                Field::Subject => "Please select a subject",
                Field::Date => "Please select a date",
                Field::Roster => "Please load students first",
                _ => "Please fill in all required fields",
            },
            ValidationError::InvalidFormat { field: Field::Email } => "Invalid email format",
            ValidationError::InvalidFormat { .. } => "Invalid input format",
            ValidationError::InvalidDateRange => "End date must be after start date",
            ValidationError::NoRecordsMarked => "Please mark attendance for at least one student",
        }
    }
}

/// What kind of record a lookup was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Subject,
    Material,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Subject => f.write_str("subject"),
            RecordKind::Material => f.write_str("material"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unknown {kind}: {id}")]
    NotFound { kind: RecordKind, id: String },
}

impl StoreError {
    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::NotFound {
                kind: RecordKind::Subject,
                ..
            } => "Selected subject is not available",
            StoreError::NotFound {
                kind: RecordKind::Material,
                ..
            } => "Material not found",
        }
    }
}

/// Any failure of an intent handler
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntentError {
    pub fn user_message(&self) -> &'static str {
        match self {
            IntentError::Validation(e) => e.user_message(),
            IntentError::Store(e) => e.user_message(),
        }
    }
}
