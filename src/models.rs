use axum::serve::IncomingStream;
use axum::extract::connect_info::Connected;
use serde::Serialize;
use tokio::net::TcpListener;

// Peer address as the raw "host:port" string the connection reported.
// Kept as text so the admission pipeline does its own parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAddr(pub String);

impl Connected<IncomingStream<'_, TcpListener>> for RemoteAddr {
    fn connect_info(stream: IncomingStream<'_, TcpListener>) -> Self {
        RemoteAddr(stream.remote_addr().to_string())
    }
}

// Health endpoint response format
#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub last_seen: String,
    pub window: WindowInfo,
}

#[derive(Serialize, Debug)]
pub struct WindowInfo {
    pub count: u32,
    pub limit: u32,
}
