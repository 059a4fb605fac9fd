use axum::{
    extract::{ConnectInfo, Request, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::metrics::{ADMITTED_TOTAL, REJECTED_TOTAL, REQUEST_TOTAL};
use crate::models::RemoteAddr;
use crate::state::Visitor;

// Catch-all handler: every path and method lands here
pub async fn serve_handler(State(visitor): State<Arc<Visitor>>, req: Request) -> Response {
    REQUEST_TOTAL.inc();

    // no connect info means we can't tell where it came from
    let remote = req
        .extensions()
        .get::<ConnectInfo<RemoteAddr>>()
        .map(|ConnectInfo(addr)| addr.0.as_str())
        .unwrap_or_default();

    match visitor.admit(req.method(), remote) {
        Ok(()) => {
            ADMITTED_TOTAL.inc();
            tracing::trace!(remote, "request admitted");
            visitor.body().to_string().into_response()
        }
        Err(rejection) => {
            REJECTED_TOTAL.with_label_values(&[rejection.reason()]).inc();
            tracing::debug!(remote, method = %req.method(), reason = rejection.reason(), "request rejected");
            rejection.into_response()
        }
    }
}
