use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

// Why a remote address could not be split into host and port
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    #[error("missing port in address {0:?}")]
    MissingPort(String),

    #[error("too many colons in address {0:?}")]
    TooManyColons(String),

    #[error("unexpected '[' or ']' in address {0:?}")]
    UnexpectedBracket(String),
}

// Split "host:port" or "[host]:port"; brackets are stripped, port may be empty
pub fn split_host_port(addr: &str) -> Result<(&str, &str), AddrError> {
    let missing_port = || AddrError::MissingPort(addr.to_string());

    let (host, port) = if let Some(rest) = addr.strip_prefix('[') {
        let end = rest
            .find(']')
            .ok_or_else(|| AddrError::UnexpectedBracket(addr.to_string()))?;
        let host = &rest[..end];
        let port = rest[end + 1..].strip_prefix(':').ok_or_else(|| {
            if rest[end + 1..].is_empty() {
                missing_port()
            } else {
                AddrError::TooManyColons(addr.to_string())
            }
        })?;
        // the colon after ']' has to be the last one
        if port.contains(':') {
            return Err(AddrError::TooManyColons(addr.to_string()));
        }
        (host, port)
    } else {
        let (host, port) = addr.rsplit_once(':').ok_or_else(missing_port)?;
        if host.contains(':') {
            return Err(AddrError::TooManyColons(addr.to_string()));
        }
        (host, port)
    };

    if host.contains(['[', ']']) || port.contains(['[', ']']) {
        return Err(AddrError::UnexpectedBracket(addr.to_string()));
    }

    Ok((host, port))
}

// IPv4 view of a host, if it has one (plain v4 or v4-mapped v6)
pub fn as_ipv4(host: &str) -> Option<Ipv4Addr> {
    match host.parse::<IpAddr>().ok()? {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped(),
    }
}
