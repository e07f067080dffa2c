use crate::models::leave::LeaveRequest;
use std::sync::{Mutex, PoisonError};

/// Append-only log of leave requests, kept in submission order
pub struct LeaveStore {
    requests: Mutex<Vec<LeaveRequest>>,
}

impl LeaveStore {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn append(&self, request: LeaveRequest) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
    }

    /// All requests, most recent first
    pub fn history(&self) -> Vec<LeaveRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<LeaveRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|request| request.id == id)
            .cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LeaveStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::leave::{LeaveStatus, LeaveType};
    use chrono::NaiveDate;

    fn request(id: &str) -> LeaveRequest {
        let day = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        LeaveRequest {
            id: id.to_string(),
            leave_type: LeaveType::Sick,
            from_date: day,
            to_date: day,
            reason: "Flu".to_string(),
            coverage: "Dr. Patel".to_string(),
            status: LeaveStatus::Pending,
            submitted_date: day,
        }
    }

    #[test]
    fn test_history_is_newest_first() {
        let store = LeaveStore::new();
        store.append(request("LRQ-A"));
        store.append(request("LRQ-B"));
        store.append(request("LRQ-C"));

        let ids: Vec<String> = store.history().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["LRQ-C", "LRQ-B", "LRQ-A"]);
    }

    #[test]
    fn test_get_and_contains() {
        let store = LeaveStore::new();
        assert!(store.is_empty());

        store.append(request("LRQ-A"));

        assert_eq!(store.len(), 1);
        assert!(store.contains("LRQ-A"));
        assert!(!store.contains("LRQ-Z"));
        assert_eq!(store.get("LRQ-A").unwrap().reason, "Flu");
    }
}
