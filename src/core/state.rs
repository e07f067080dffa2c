// Application state (AppState)

use crate::core::config::Config;
use crate::metrics::collector::Metrics;
use crate::models::attendance::AttendanceSheet;
use crate::models::navigation::NavigationState;
use crate::models::session::Session;
use crate::stores::{
    attendance_store::AttendanceStore, leave_store::LeaveStore, material_store::MaterialStore,
};
use std::sync::Arc;

/// Everything the portal remembers for the lifetime of the process.
///
/// Owned by a single `Portal`; stores are behind `Arc` so a view layer can
/// hold read handles to them.
pub struct AppState {
    /// Login state
    pub session: Session,

    /// Active page and tab
    pub navigation: NavigationState,

    /// Roster currently loaded for marking, if any
    pub attendance_sheet: Option<AttendanceSheet>,

    /// Saved attendance per subject and date
    pub attendance: Arc<AttendanceStore>,

    /// Leave request history
    pub leaves: Arc<LeaveStore>,

    /// Uploaded course materials
    pub materials: Arc<MaterialStore>,

    /// Intent counters
    pub metrics: Arc<Metrics>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            session: Session::default(),
            navigation: NavigationState::default(),
            attendance_sheet: None,
            attendance: Arc::new(AttendanceStore::new()),
            leaves: Arc::new(LeaveStore::new()),
            materials: Arc::new(MaterialStore::new()),
            metrics: Arc::new(Metrics::new()),
            config: Arc::new(config),
        }
    }
}
