//! Outbound request construction
//!
//! A request is a fixed host plus a target made of the configured path
//! prefix followed by the percent-encoded status line.

use super::config::ReporterConfig;
use super::encode::EncodedMessage;
use heapless::String;

/// Maximum request target length in bytes
pub const REQUEST_TARGET_CAPACITY: usize = 511;

/// Bounded request target (path and query)
pub type RequestTarget = String<REQUEST_TARGET_CAPACITY>;

/// Request ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    /// Remote host name
    pub host: &'static str,
    /// Path prefix followed by the encoded message
    pub target: RequestTarget,
    /// True if the encoded message or the target was cut short
    pub truncated: bool,
}

/// Concatenate `parts` into a bounded string, stopping at capacity
///
/// Returns true if anything was dropped.
fn push_bounded<const N: usize>(out: &mut String<N>, parts: &[&str]) -> bool {
    for part in parts {
        for ch in part.chars() {
            if out.push(ch).is_err() {
                return true;
            }
        }
    }
    false
}

/// Build the request target for an already-encoded message
pub fn build_target(path_prefix: &str, encoded: &str) -> (RequestTarget, bool) {
    let mut target = RequestTarget::new();
    let truncated = push_bounded(&mut target, &[path_prefix, encoded]);
    (target, truncated)
}

/// Encode `message` and compose the outbound request for it
///
/// # Examples
///
/// ```
/// use pico_joystick_core::report::{compose_request, ReporterConfig};
///
/// let config = ReporterConfig::new("example.com", "/msg?m=");
/// let request = compose_request(&config, "hi there");
/// assert_eq!(request.host, "example.com");
/// assert_eq!(request.target.as_str(), "/msg?m=hi%20there");
/// ```
pub fn compose_request(config: &ReporterConfig, message: &str) -> OutboundRequest {
    let encoded = EncodedMessage::encode(message);
    let (target, target_truncated) = build_target(config.path_prefix, encoded.as_str());
    OutboundRequest {
        host: config.host,
        target,
        truncated: encoded.is_truncated() || target_truncated,
    }
}

/// Build an absolute `https://` URL from a host and a target
///
/// Returns `None` if the URL does not fit in `N` bytes.
pub fn https_url<const N: usize>(host: &str, target: &str) -> Option<String<N>> {
    let mut url = String::new();
    if push_bounded(&mut url, &["https://", host, target]) {
        None
    } else {
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::encode::ENCODED_BUFFER_SIZE;

    #[test]
    fn test_build_target_concatenates() {
        let (target, truncated) = build_target("/mensagem?msg=", "abc%20d");
        assert_eq!(target.as_str(), "/mensagem?msg=abc%20d");
        assert!(!truncated);
    }

    #[test]
    fn test_build_target_truncates_at_capacity() {
        let long = [b'a'; ENCODED_BUFFER_SIZE];
        let long = core::str::from_utf8(&long).unwrap();
        let (target, truncated) = build_target("/p?m=", long);
        assert!(truncated);
        assert_eq!(target.len(), REQUEST_TARGET_CAPACITY);
        assert!(target.starts_with("/p?m=aaa"));
    }

    #[test]
    fn test_compose_request_default_endpoint() {
        let request = compose_request(
            &ReporterConfig::default(),
            "[ X: 5   Y: 5 ] | Southwest\n",
        );
        assert_eq!(request.host, "server-y824.onrender.com");
        assert_eq!(
            request.target.as_str(),
            "/mensagem?msg=%5B%20X%3A%205%20%20%20Y%3A%205%20%5D%20%7C%20Southwest%0A"
        );
        assert!(!request.truncated);
    }

    #[test]
    fn test_compose_request_flags_truncation() {
        let message = [b' '; 400];
        let message = core::str::from_utf8(&message).unwrap();
        let request = compose_request(&ReporterConfig::default(), message);
        assert!(request.truncated);
        assert!(request.target.len() <= REQUEST_TARGET_CAPACITY);
    }

    #[test]
    fn test_https_url() {
        let url: String<64> = https_url("example.com", "/a?b=c").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a?b=c");

        let too_small: Option<String<8>> = https_url("example.com", "/a");
        assert!(too_small.is_none());
    }
}
