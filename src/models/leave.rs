use crate::utils::text::capitalize;
use crate::utils::time::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Casual,
    Sick,
    Earned,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Casual => "casual",
            LeaveType::Sick => "sick",
            LeaveType::Earned => "earned",
        }
    }
}

/// Approval state; only an external approver moves a request out of `Pending`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    /// Who covers classes during the absence. Empty only on seeded history.
    pub coverage: String,
    pub status: LeaveStatus,
    pub submitted_date: NaiveDate,
}

/// Render-ready summary of one leave request
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeaveHistoryEntry {
    pub id: String,
    pub title: String,
    pub status: LeaveStatus,
    pub status_label: String,
    pub period: String,
    pub days: i64,
    pub reason: String,
}

impl LeaveRequest {
    /// Inclusive length of the leave in days.
    ///
    /// Stored requests always satisfy `to_date >= from_date`; both seeding
    /// and the leave form validator enforce it.
    pub fn days(&self) -> i64 {
        debug_assert!(self.to_date >= self.from_date, "inverted leave range on {}", self.id);
        (self.to_date - self.from_date).num_days() + 1
    }

    pub fn history_entry(&self) -> LeaveHistoryEntry {
        let days = self.days();

        LeaveHistoryEntry {
            id: self.id.clone(),
            title: format!("{} Leave", capitalize(self.leave_type.as_str())),
            status: self.status,
            status_label: capitalize(self.status.as_str()),
            period: format!(
                "{} to {} ({} days)",
                format_date(self.from_date),
                format_date(self.to_date),
                days
            ),
            days,
            reason: self.reason.clone(),
        }
    }
}
