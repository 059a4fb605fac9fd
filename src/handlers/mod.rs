mod health;
mod metrics;
mod serve;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use serve::serve_handler;
