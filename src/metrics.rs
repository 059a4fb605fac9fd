use lazy_static::lazy_static;
use prometheus::{IntCounter, IntCounterVec, register_int_counter, register_int_counter_vec};

lazy_static! {
    pub static ref REQUEST_TOTAL: IntCounter =
        register_int_counter!("gatekeeper_requests_total", "Total number of requests").unwrap();
    pub static ref ADMITTED_TOTAL: IntCounter =
        register_int_counter!("gatekeeper_admitted_total", "Requests served with the static body")
            .unwrap();
    pub static ref REJECTED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "gatekeeper_rejected_total",
        "Rejected requests by reason",
        &["reason"]
    )
    .unwrap();
}
