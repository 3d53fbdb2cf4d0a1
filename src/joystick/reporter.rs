//! Status reporting over HTTPS
//!
//! Turns a classified position into a status line and sends it as the
//! percent-encoded query of a GET request.

use crate::communication::http::{HttpTransport, TlsScope, TransportError};
use pico_joystick_core::direction::Direction;
use pico_joystick_core::position::Coordinate;
use pico_joystick_core::report::{compose_request, format_status, ReporterConfig};

/// Status codes treated as delivered
const SUCCESS_STATUS: core::ops::RangeInclusive<u16> = 200..=299;

/// Sends one status line per call
pub struct Reporter<T: HttpTransport> {
    transport: T,
    config: ReporterConfig,
}

impl<T: HttpTransport> Reporter<T> {
    /// Create a reporter for the endpoint in `config`
    pub fn new(transport: T, config: ReporterConfig) -> Self {
        Self { transport, config }
    }

    /// Format, encode and send the status for `coordinate`
    ///
    /// Only a 2xx response counts as delivered; any other status is returned
    /// as `TransportError::Status`. The TLS configuration used for the
    /// request is released before this returns, on success and on failure.
    pub async fn report(
        &mut self,
        coordinate: Coordinate,
        direction: Direction,
    ) -> Result<u16, TransportError> {
        let line = format_status(coordinate, direction);
        let request = compose_request(&self.config, &line);
        if request.truncated {
            crate::log_warn!("Request target truncated to {} bytes", request.target.len());
        }

        crate::log_info!("Sending: {}", line.as_str());

        let scope = TlsScope::acquire(&mut self.transport)?;
        let result = match scope.request(request.host, &request.target).await {
            Ok(status) if SUCCESS_STATUS.contains(&status) => Ok(status),
            Ok(status) => Err(TransportError::Status(status)),
            Err(e) => Err(e),
        };
        match result {
            Ok(status) => crate::log_info!("Response status: {}", status),
            Err(e) => crate::log_error!("Request failed: {}", e),
        }
        result
    }

    /// Endpoint this reporter sends to
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// Access the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the underlying transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::communication::http::mock::MockHttpTransport;

    fn reporter() -> Reporter<MockHttpTransport> {
        Reporter::new(MockHttpTransport::new(), ReporterConfig::default())
    }

    #[tokio::test]
    async fn test_report_sends_encoded_line() {
        let mut reporter = reporter();
        let status = reporter
            .report(Coordinate::new(20, 38), Direction::Northeast)
            .await;
        assert_eq!(status, Ok(200));

        let requests = reporter.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].host.as_str(), "server-y824.onrender.com");
        assert_eq!(
            requests[0].target.as_str(),
            "/mensagem?msg=%5B%20X%3A%2020%20%20%20Y%3A%2038%20%5D%20%7C%20Northeast%0A"
        );
    }

    #[tokio::test]
    async fn test_report_center_sends_blank_label() {
        let mut reporter = reporter();
        reporter
            .report(Coordinate::new(19, 19), Direction::Center)
            .await
            .unwrap();

        let target = &reporter.transport().requests()[0].target;
        assert!(target.ends_with("%7C%20%20%0A"));
    }

    #[tokio::test]
    async fn test_report_releases_tls_on_failure() {
        let mut reporter = reporter();
        reporter
            .transport_mut()
            .set_error(Some(TransportError::Timeout));

        let result = reporter
            .report(Coordinate::new(5, 5), Direction::Southwest)
            .await;
        assert_eq!(result, Err(TransportError::Timeout));
        assert_eq!(reporter.transport().tls_created(), 1);
        assert_eq!(reporter.transport().tls_freed(), 1);
    }

    #[tokio::test]
    async fn test_report_non_2xx_status_is_failure() {
        let mut reporter = reporter();
        reporter.transport_mut().set_status(500);

        let result = reporter
            .report(Coordinate::new(30, 30), Direction::Northeast)
            .await;
        assert_eq!(result, Err(TransportError::Status(500)));
        assert_eq!(reporter.transport().requests().len(), 1);
        assert_eq!(reporter.transport().live_tls(), 0);

        reporter.transport_mut().set_status(302);
        let result = reporter
            .report(Coordinate::new(30, 30), Direction::Northeast)
            .await;
        assert_eq!(result, Err(TransportError::Status(302)));
    }

    #[tokio::test]
    async fn test_report_any_2xx_status_is_success() {
        let mut reporter = reporter();
        reporter.transport_mut().set_status(204);

        let result = reporter
            .report(Coordinate::new(19, 30), Direction::North)
            .await;
        assert_eq!(result, Ok(204));
    }

    #[tokio::test]
    async fn test_report_tls_setup_failure_sends_nothing() {
        let mut reporter = reporter();
        reporter.transport_mut().set_tls_failure(true);

        let result = reporter
            .report(Coordinate::new(5, 5), Direction::Southwest)
            .await;
        assert_eq!(result, Err(TransportError::TlsSetup));
        assert!(reporter.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_report_uses_configured_endpoint() {
        let mut reporter = Reporter::new(
            MockHttpTransport::new(),
            ReporterConfig::new("example.com", "/log?m="),
        );
        reporter
            .report(Coordinate::new(30, 19), Direction::East)
            .await
            .unwrap();

        let request = &reporter.transport().requests()[0];
        assert_eq!(request.host.as_str(), "example.com");
        assert!(request.target.starts_with("/log?m=%5B%20X%3A%2030"));
        assert_eq!(reporter.config().host, "example.com");
    }
}
