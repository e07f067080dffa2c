pub mod attendance_store;
pub mod leave_store;
pub mod material_store;
