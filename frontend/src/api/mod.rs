mod auth;
mod chat;
pub mod client;
mod requests;
pub mod types;

pub use client::*;
pub use requests::ReviewDecision;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
