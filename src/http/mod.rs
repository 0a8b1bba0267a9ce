//! HTTP surface: routing, handlers and the shared directory state.

pub mod handlers;
pub mod server;
pub mod state;

pub use server::Server;
pub use state::AppState;
