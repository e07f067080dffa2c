use crate::models::catalog::Student;
use crate::utils::time::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// Stored attendance of one student for one class
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub roll_number: String,
    pub student_name: String,
    pub status: AttendanceStatus,
}

/// Identifies one class meeting: a subject on a date
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendanceKey {
    pub subject_id: String,
    pub date: NaiveDate,
}

impl AttendanceKey {
    pub fn new(subject_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            subject_id: subject_id.into(),
            date,
        }
    }
}

impl fmt::Display for AttendanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.subject_id, self.date)
    }
}

/// A row of the attendance table as submitted by the view.
/// `status` is `None` when neither option was ticked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceMark {
    pub roll_number: String,
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}

impl AttendanceMark {
    pub fn new(roll_number: impl Into<String>, status: Option<AttendanceStatus>) -> Self {
        Self {
            roll_number: roll_number.into(),
            status,
        }
    }
}

/// The roster currently loaded for marking
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttendanceSheet {
    pub key: AttendanceKey,
    pub subject_name: String,
    pub roster: Vec<Student>,
}

impl AttendanceSheet {
    /// Heading shown above the table, e.g. `Class: Data Structures | Date: 15-01-2026`
    pub fn header(&self) -> String {
        format!(
            "Class: {} | Date: {}",
            self.subject_name,
            format_date(self.key.date)
        )
    }
}
