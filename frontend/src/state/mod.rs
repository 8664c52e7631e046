pub mod attendance;
pub mod auth;
