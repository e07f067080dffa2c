use crate::core::error::{Field, ValidationError};
use crate::models::attendance::{AttendanceKey, AttendanceMark, AttendanceRecord, AttendanceSheet};
use crate::models::leave::LeaveType;
use crate::models::material::{FileMeta, MaterialType};
use crate::utils::time::day_count;
use chrono::NaiveDate;
use serde::Deserialize;

type Result<T> = std::result::Result<T, ValidationError>;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required_text(value: &str, field: Field) -> Result<String> {
    if is_blank(value) {
        return Err(ValidationError::missing(field));
    }
    Ok(value.trim().to_string())
}

fn required<T>(value: Option<T>, field: Field) -> Result<T> {
    value.ok_or(ValidationError::missing(field))
}

/// Login form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the normalized email. The password is only checked for presence.
    pub fn validate(&self) -> Result<String> {
        let email = required_text(&self.email, Field::Email)?;

        if is_blank(&self.password) {
            return Err(ValidationError::missing(Field::Password));
        }

        if !email.contains('@') {
            return Err(ValidationError::InvalidFormat { field: Field::Email });
        }

        Ok(email)
    }
}

/// Subject and date selection for loading the roster
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceQuery {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl AttendanceQuery {
    pub fn new(subject: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            subject: subject.into(),
            date,
        }
    }

    pub fn validate(&self) -> Result<AttendanceKey> {
        let subject = required_text(&self.subject, Field::Subject)?;
        let date = required(self.date, Field::Date)?;

        Ok(AttendanceKey::new(subject, date))
    }
}

/// Attendance ready to store under `key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAttendance {
    pub key: AttendanceKey,
    pub records: Vec<AttendanceRecord>,
}

/// Build the record set to store from the marks on the loaded sheet.
///
/// Only students on the sheet's roster count, in roster order; unmarked rows
/// are skipped. Marks for roll numbers not on the roster are ignored.
pub fn validate_attendance_marks(
    sheet: Option<&AttendanceSheet>,
    marks: &[AttendanceMark],
) -> Result<ValidatedAttendance> {
    let sheet = sheet.ok_or(ValidationError::missing(Field::Roster))?;

    let records: Vec<AttendanceRecord> = sheet
        .roster
        .iter()
        .filter_map(|student| {
            marks
                .iter()
                .rev()
                .find(|mark| mark.roll_number == student.roll_number)
                .and_then(|mark| mark.status)
                .map(|status| AttendanceRecord {
                    roll_number: student.roll_number.clone(),
                    student_name: student.name.clone(),
                    status,
                })
        })
        .collect();

    if records.is_empty() {
        return Err(ValidationError::NoRecordsMarked);
    }

    Ok(ValidatedAttendance {
        key: sheet.key.clone(),
        records,
    })
}

/// Leave application form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveForm {
    #[serde(default)]
    pub leave_type: Option<LeaveType>,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub coverage: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLeave {
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub days: i64,
    pub reason: String,
    pub coverage: String,
}

impl LeaveForm {
    pub fn validate(&self) -> Result<ValidatedLeave> {
        let leave_type = required(self.leave_type, Field::LeaveType)?;
        let from_date = required(self.from_date, Field::FromDate)?;
        let to_date = required(self.to_date, Field::ToDate)?;
        let reason = required_text(&self.reason, Field::Reason)?;
        let coverage = required_text(&self.coverage, Field::Coverage)?;

        let days = day_count(from_date, to_date)?;

        Ok(ValidatedLeave {
            leave_type,
            from_date,
            to_date,
            days,
            reason,
            coverage,
        })
    }
}

/// Material upload form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadForm {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub material_type: Option<MaterialType>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub file: Option<FileMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUpload {
    pub subject_id: String,
    pub material_type: MaterialType,
    pub name: String,
    pub file_name: String,
    pub description: String,
}

impl UploadForm {
    pub fn validate(&self) -> Result<ValidatedUpload> {
        let subject_id = required_text(&self.subject, Field::Subject)?;
        let material_type = required(self.material_type, Field::MaterialType)?;
        let name = required_text(&self.name, Field::Name)?;
        let file = self
            .file
            .as_ref()
            .filter(|file| !is_blank(&file.name))
            .ok_or(ValidationError::missing(Field::File))?;

        Ok(ValidatedUpload {
            subject_id,
            material_type,
            name,
            file_name: file.name.clone(),
            description: self.description.trim().to_string(),
        })
    }
}
