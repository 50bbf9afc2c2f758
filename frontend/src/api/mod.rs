mod auth;
pub mod client;
mod logs;
mod processes;
pub mod types;

pub use client::*;
pub use logs::LOG_WINDOW_LIMIT;
pub use types::*;
