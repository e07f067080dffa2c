pub mod attendance;
pub mod catalog;
pub mod event;
pub mod leave;
pub mod material;
pub mod navigation;
pub mod notice;
pub mod session;
