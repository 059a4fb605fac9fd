use axum::{Json, extract::State};
use std::sync::Arc;

use crate::models::{HealthResponse, WindowInfo};
use crate::state::Visitor;

pub async fn health_handler(State(visitor): State<Arc<Visitor>>) -> Json<HealthResponse> {
    let window = visitor.limiter().snapshot();
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        last_seen: visitor.last_seen().to_rfc3339(),
        window: WindowInfo {
            count: window.count,
            limit: window.limit,
        },
    })
}
