//! Web server module
//!
//! Provides the HTTP API surface consumed by the front end.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
