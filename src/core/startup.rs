use crate::core::state::AppState;
use crate::models::leave::{LeaveRequest, LeaveStatus, LeaveType};
use chrono::NaiveDate;
use tracing::info;

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Demonstration history, oldest submission first
pub fn demo_leave_requests() -> Vec<LeaveRequest> {
    let seeds = [
        (
            "LRQ-003",
            LeaveType::Earned,
            date(2026, 1, 10),
            date(2026, 1, 14),
            "Vacation",
            LeaveStatus::Rejected,
            date(2026, 1, 5),
        ),
        (
            "LRQ-001",
            LeaveType::Casual,
            date(2026, 1, 15),
            date(2026, 1, 17),
            "Family function",
            LeaveStatus::Approved,
            date(2026, 1, 10),
        ),
        (
            "LRQ-002",
            LeaveType::Sick,
            date(2026, 1, 25),
            date(2026, 1, 26),
            "Medical appointment",
            LeaveStatus::Pending,
            date(2026, 1, 23),
        ),
    ];

    seeds
        .into_iter()
        .filter_map(|(id, leave_type, from, to, reason, status, submitted)| {
            Some(LeaveRequest {
                id: id.to_string(),
                leave_type,
                from_date: from?,
                to_date: to?,
                reason: reason.to_string(),
                coverage: String::new(),
                status,
                submitted_date: submitted?,
            })
        })
        .collect()
}

// this runs once when the portal is created
pub fn seed_state(state: &AppState) {
    if !state.config.portal.seed_demo_leaves {
        return;
    }

    for request in demo_leave_requests() {
        state.leaves.append(request);
    }

    info!(leave_requests = state.leaves.len(), "Seeded demonstration leave history");
}
