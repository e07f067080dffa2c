use crate::core::error::IntentError;
use crate::core::portal::Portal;
use crate::models::event::PortalEvent;
use crate::models::leave::{LeaveHistoryEntry, LeaveRequest, LeaveStatus};
use crate::utils::ids::{generate_unique_id, LEAVE_PREFIX};
use crate::utils::time::{day_count, today};
use crate::validation::forms::LeaveForm;
use chrono::NaiveDate;
use tracing::info;

impl Portal {
    /// File a new leave request. It starts out `Pending`.
    pub fn submit_leave(&mut self, form: &LeaveForm) -> Result<LeaveRequest, IntentError> {
        self.begin("submit_leave");

        let leave = form
            .validate()
            .or_else(|e| self.reject("submit_leave", e))?;

        let leaves = &self.state.leaves;
        let request = LeaveRequest {
            id: generate_unique_id(LEAVE_PREFIX, |id| leaves.contains(id)),
            leave_type: leave.leave_type,
            from_date: leave.from_date,
            to_date: leave.to_date,
            reason: leave.reason,
            coverage: leave.coverage,
            status: LeaveStatus::Pending,
            submitted_date: today(),
        };

        self.state.leaves.append(request.clone());
        info!(
            id = %request.id,
            leave_type = request.leave_type.as_str(),
            days = leave.days,
            "Leave request submitted"
        );
        self.emit(PortalEvent::LeaveAdded(request.clone()));

        self.accept("Leave request submitted successfully");
        Ok(request)
    }

    /// Day count shown while the form is being filled in.
    ///
    /// `Ok(None)` until both dates are picked; an inverted range is reported
    /// to the user as an error.
    pub fn preview_leave_days(
        &mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Option<i64>, IntentError> {
        self.begin("preview_leave_days");

        let (Some(from), Some(to)) = (from, to) else {
            self.accepted();
            return Ok(None);
        };

        let days = day_count(from, to).or_else(|e| self.reject("preview_leave_days", e))?;

        self.accepted();
        Ok(Some(days))
    }

    /// Leave history, most recent first
    pub fn leave_history(&self) -> Vec<LeaveHistoryEntry> {
        self.state
            .leaves
            .history()
            .iter()
            .map(LeaveRequest::history_entry)
            .collect()
    }
}
