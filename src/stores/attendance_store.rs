use crate::models::attendance::{AttendanceKey, AttendanceRecord};
use dashmap::DashMap;

/// In-memory attendance, one record set per class meeting
pub struct AttendanceStore {
    sessions: DashMap<AttendanceKey, Vec<AttendanceRecord>>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Store the record set for `key`, replacing any earlier set wholesale.
    /// Returns the replaced set if there was one.
    pub fn save(
        &self,
        key: AttendanceKey,
        records: Vec<AttendanceRecord>,
    ) -> Option<Vec<AttendanceRecord>> {
        self.sessions.insert(key, records)
    }

    pub fn get(&self, key: &AttendanceKey) -> Option<Vec<AttendanceRecord>> {
        self.sessions.get(key).map(|entry| entry.value().clone())
    }

    /// Number of class meetings with saved attendance
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for AttendanceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::AttendanceStatus;
    use chrono::NaiveDate;

    fn key(subject: &str, day: u32) -> AttendanceKey {
        AttendanceKey::new(subject, NaiveDate::from_ymd_opt(2026, 1, day).unwrap())
    }

    fn record(roll: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            roll_number: roll.to_string(),
            student_name: format!("Student {}", roll),
            status,
        }
    }

    #[test]
    fn test_save_and_get() {
        let store = AttendanceStore::new();
        assert!(store.is_empty());

        let previous = store.save(key("CS201", 15), vec![record("1", AttendanceStatus::Present)]);

        assert!(previous.is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key("CS201", 15)).unwrap().len(), 1);
    }

    #[test]
    fn test_resave_replaces_instead_of_appending() {
        let store = AttendanceStore::new();

        store.save(
            key("CS201", 15),
            vec![
                record("1", AttendanceStatus::Present),
                record("2", AttendanceStatus::Present),
                record("3", AttendanceStatus::Absent),
            ],
        );
        let previous = store.save(key("CS201", 15), vec![record("2", AttendanceStatus::Absent)]);

        assert_eq!(previous.unwrap().len(), 3);
        let stored = store.get(&key("CS201", 15)).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].roll_number, "2");
        assert_eq!(stored[0].status, AttendanceStatus::Absent);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_keys_are_distinct_per_subject_and_date() {
        let store = AttendanceStore::new();

        store.save(key("CS201", 15), vec![record("1", AttendanceStatus::Present)]);
        store.save(key("CS201", 16), vec![record("1", AttendanceStatus::Absent)]);
        store.save(key("MA101", 15), vec![record("1", AttendanceStatus::Absent)]);

        assert_eq!(store.len(), 3);
        assert_eq!(
            store.get(&key("CS201", 15)).unwrap()[0].status,
            AttendanceStatus::Present
        );
        assert!(store.get(&key("MA101", 16)).is_none());
    }
}
