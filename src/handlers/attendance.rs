use crate::core::error::{IntentError, RecordKind, StoreError};
use crate::core::portal::Portal;
use crate::models::attendance::{AttendanceKey, AttendanceMark, AttendanceRecord, AttendanceSheet};
use crate::models::event::PortalEvent;
use crate::validation::forms::{validate_attendance_marks, AttendanceQuery};
use tracing::info;

impl Portal {
    /// Load the roster for a subject and date so it can be marked
    pub fn load_attendance(&mut self, query: &AttendanceQuery) -> Result<AttendanceSheet, IntentError> {
        self.begin("load_attendance");

        let key = query
            .validate()
            .or_else(|e| self.reject("load_attendance", e))?;

        let subject_name = match self.state.config.subject(&key.subject_id) {
            Some(subject) => subject.name.clone(),
            None => {
                let err = StoreError::not_found(RecordKind::Subject, key.subject_id.as_str());
                return self.reject("load_attendance", err);
            }
        };

        let sheet = AttendanceSheet {
            key,
            subject_name,
            roster: self.state.config.students.clone(),
        };

        info!(
            key = %sheet.key,
            students = sheet.roster.len(),
            "Attendance roster loaded"
        );
        self.state.attendance_sheet = Some(sheet.clone());

        self.accept("Student list loaded successfully");
        Ok(sheet)
    }

    /// Save the marks for the loaded roster, replacing anything saved
    /// earlier for the same subject and date. Returns the number stored.
    pub fn save_attendance(&mut self, marks: &[AttendanceMark]) -> Result<usize, IntentError> {
        self.begin("save_attendance");

        let validated = validate_attendance_marks(self.state.attendance_sheet.as_ref(), marks)
            .or_else(|e| self.reject("save_attendance", e))?;

        let key = validated.key;
        let count = validated.records.len();
        let replaced = self.state.attendance.save(key.clone(), validated.records);

        info!(
            key = %key,
            count,
            replaced = ?replaced.as_ref().map(Vec::len),
            "Attendance saved"
        );
        self.emit(PortalEvent::AttendanceSaved { key, count });

        self.accept(format!("Attendance saved for {} students", count));
        Ok(count)
    }

    pub fn attendance_sheet(&self) -> Option<&AttendanceSheet> {
        self.state.attendance_sheet.as_ref()
    }

    pub fn saved_attendance(&self, key: &AttendanceKey) -> Option<Vec<AttendanceRecord>> {
        self.state.attendance.get(key)
    }
}
