mod attendance;
mod auth;
pub mod client;
mod departements;
mod employees;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
