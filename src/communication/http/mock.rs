//! Mock HTTP transport implementation for testing
//!
//! Records every request, counts TLS configurations created and freed, and
//! can be configured to fail or stall.

use super::{HttpTransport, TransportError};
use heapless::{String, Vec};
use pico_joystick_core::report::RequestTarget;

/// Maximum number of requests kept for inspection
pub const MAX_RECORDED_REQUESTS: usize = 16;

/// Request observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Host the request was sent to
    pub host: String<64>,
    /// Request target (path and query)
    pub target: RequestTarget,
}

/// TLS configuration handed out by the mock
#[derive(Debug, PartialEq, Eq)]
pub struct MockTls {
    /// Sequence number of this configuration
    pub id: u32,
}

/// Mock HTTP transport
///
/// Can be configured to:
/// - Return a specific status code
/// - Fail requests with a given error
/// - Fail TLS configuration creation
/// - Never complete a request (for cancellation tests)
#[derive(Debug)]
pub struct MockHttpTransport {
    requests: Vec<RecordedRequest, MAX_RECORDED_REQUESTS>,
    status: u16,
    error: Option<TransportError>,
    tls_failure: bool,
    stall: bool,
    tls_created: u32,
    tls_freed: u32,
}

impl MockHttpTransport {
    /// Create a mock that answers every request with 200
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
            status: 200,
            error: None,
            tls_failure: false,
            stall: false,
            tls_created: 0,
            tls_freed: 0,
        }
    }

    /// Set the status code returned by successful requests
    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Set error to return from request(), `None` to succeed again
    pub fn set_error(&mut self, error: Option<TransportError>) {
        self.error = error;
    }

    /// Make create_tls_config() fail
    pub fn set_tls_failure(&mut self, fail: bool) {
        self.tls_failure = fail;
    }

    /// Make request() never complete
    pub fn set_stall(&mut self, stall: bool) {
        self.stall = stall;
    }

    /// Requests observed so far (oldest first)
    pub fn requests(&self) -> &[RecordedRequest] {
        &self.requests
    }

    /// Number of TLS configurations created
    pub fn tls_created(&self) -> u32 {
        self.tls_created
    }

    /// Number of TLS configurations freed
    pub fn tls_freed(&self) -> u32 {
        self.tls_freed
    }

    /// TLS configurations created but not yet freed
    pub fn live_tls(&self) -> u32 {
        self.tls_created - self.tls_freed
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for MockHttpTransport {
    type TlsConfig = MockTls;

    fn create_tls_config(&mut self) -> Result<Self::TlsConfig, TransportError> {
        if self.tls_failure {
            return Err(TransportError::TlsSetup);
        }
        self.tls_created += 1;
        Ok(MockTls {
            id: self.tls_created,
        })
    }

    async fn request(
        &mut self,
        host: &str,
        target: &str,
        _tls: &mut Self::TlsConfig,
    ) -> Result<u16, TransportError> {
        let mut recorded = RecordedRequest {
            host: String::new(),
            target: RequestTarget::new(),
        };
        recorded
            .host
            .push_str(host)
            .map_err(|_| TransportError::InvalidRequest)?;
        recorded
            .target
            .push_str(target)
            .map_err(|_| TransportError::InvalidRequest)?;
        // Keep the first MAX_RECORDED_REQUESTS
        let _ = self.requests.push(recorded);

        if self.stall {
            core::future::pending::<()>().await;
        }

        match self.error {
            Some(error) => Err(error),
            None => Ok(self.status),
        }
    }

    fn free_tls_config(&mut self, _tls: Self::TlsConfig) {
        self.tls_freed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mut transport = MockHttpTransport::new();
        transport.set_status(204);

        let mut tls = transport.create_tls_config().unwrap();
        let status = transport
            .request("example.com", "/msg?m=hi", &mut tls)
            .await
            .unwrap();
        transport.free_tls_config(tls);

        assert_eq!(status, 204);
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(transport.requests()[0].host.as_str(), "example.com");
        assert_eq!(transport.requests()[0].target.as_str(), "/msg?m=hi");
    }

    #[test]
    fn test_mock_tls_ids_increase() {
        let mut transport = MockHttpTransport::new();
        let first = transport.create_tls_config().unwrap();
        let second = transport.create_tls_config().unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(transport.live_tls(), 2);
    }
}
