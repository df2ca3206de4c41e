//! Application layer - Command handlers and startup wiring.

mod context;
pub mod handlers;

pub use context::AppContext;
