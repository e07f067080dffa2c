use crate::models::attendance::AttendanceKey;
use crate::models::leave::LeaveRequest;
use crate::models::material::Material;
use crate::models::navigation::NavigationState;
use crate::models::notice::Notice;
use crate::models::session::Session;
use serde::Serialize;

/// Everything the controller reports back to the view layer
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PortalEvent {
    Notify(Notice),
    SessionChanged(Session),
    NavigationChanged(NavigationState),
    AttendanceSaved { key: AttendanceKey, count: usize },
    LeaveAdded(LeaveRequest),
    MaterialAdded(Material),
    MaterialRemoved { id: String },
}

impl PortalEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PortalEvent::Notify(_) => "notify",
            PortalEvent::SessionChanged(_) => "session_changed",
            PortalEvent::NavigationChanged(_) => "navigation_changed",
            PortalEvent::AttendanceSaved { .. } => "attendance_saved",
            PortalEvent::LeaveAdded(_) => "leave_added",
            PortalEvent::MaterialAdded(_) => "material_added",
            PortalEvent::MaterialRemoved { .. } => "material_removed",
        }
    }
}
