//! Web layer for the transit network router.
//!
//! Provides HTTP endpoints for listing stations and planning routes
//! over the rule-adjusted network.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
