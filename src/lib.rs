pub mod addr;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod state;

use axum::{Router, routing::get};
use std::sync::Arc;

pub use error::AdmissionError;
pub use models::RemoteAddr;
pub use rate_limit::{RateLimiter, WindowSnapshot};
pub use state::Visitor;

// Main router - every path goes through the gate chain.
// Needs into_make_service_with_connect_info::<RemoteAddr>() to see the peer.
pub fn app(visitor: Arc<Visitor>) -> Router {
    Router::new()
        .fallback(handlers::serve_handler)
        .with_state(visitor)
}

// Operational router, bound to its own port
pub fn ops_app(visitor: Arc<Visitor>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(visitor)
}
