pub mod attendance;
pub mod leave;
pub mod materials;
pub mod navigation;
pub mod session;
