use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

// Why a request was not served - each variant has its own status and body
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionError {
    // anything other than GET
    #[error("Only GET requests are allowed")]
    MethodNotAllowed,

    // no host:port structure
    #[error("Bad Request")]
    MalformedAddress,

    // not representable as IPv4
    #[error("IPv4 only")]
    NotIpv4,

    // window quota used up
    #[error("Too Many Requests")]
    TooManyRequests,
}

impl AdmissionError {
    pub fn status(&self) -> StatusCode {
        match self {
            AdmissionError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AdmissionError::MalformedAddress | AdmissionError::NotIpv4 => StatusCode::BAD_REQUEST,
            AdmissionError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    // label used for the rejected_total metric
    pub fn reason(&self) -> &'static str {
        match self {
            AdmissionError::MethodNotAllowed => "method",
            AdmissionError::MalformedAddress => "bad_address",
            AdmissionError::NotIpv4 => "not_ipv4",
            AdmissionError::TooManyRequests => "rate_limited",
        }
    }
}

impl IntoResponse for AdmissionError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
