//! HTTP Transport Abstraction
//!
//! The reporter talks to the network through [`HttpTransport`], so the same
//! report logic runs against the RP2040 WiFi stack on target and against
//! [`mock::MockHttpTransport`] on the host.
//!
//! # TLS Lifecycle
//!
//! Every request needs a fresh TLS configuration from the transport, and that
//! configuration must be handed back exactly once whatever happens to the
//! request. [`TlsScope`] owns the configuration for one request and returns
//! it in `Drop`:
//!
//! ```text
//! TlsScope::acquire ──► create_tls_config()
//!        │
//!        ▼
//! scope.request(host, target) ──► HttpTransport::request(..., &mut tls)
//!        │  (Ok, Err, or future dropped)
//!        ▼
//! Drop ──► free_tls_config(tls)
//! ```
//!
//! # Example Usage
//!
//! ```ignore
//! let scope = TlsScope::acquire(&mut transport)?;
//! let status = scope.request("example.com", "/msg?m=hi").await?;
//! ```

#[cfg(any(test, feature = "mock"))]
pub mod mock;

use core::fmt;

/// HTTPS client abstraction
///
/// # Implementation Guidelines
///
/// - `create_tls_config()` must not perform I/O; it only prepares the session
/// - `request()` performs a single GET and returns the response status code
/// - `free_tls_config()` must leave no key material or buffers behind
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// Per-request TLS configuration
    type TlsConfig;

    /// Prepare a single-use TLS configuration
    fn create_tls_config(&mut self) -> Result<Self::TlsConfig, TransportError>;

    /// Perform an HTTPS GET of `target` on `host`
    ///
    /// # Returns
    ///
    /// - `Ok(status)` - HTTP status code of the response, whatever its class
    /// - `Err(TransportError)` - request could not be completed
    async fn request(
        &mut self,
        host: &str,
        target: &str,
        tls: &mut Self::TlsConfig,
    ) -> Result<u16, TransportError>;

    /// Release a TLS configuration created by `create_tls_config()`
    fn free_tls_config(&mut self, tls: Self::TlsConfig);
}

/// Transport error types
///
/// Categorizes transport failures for appropriate error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum TransportError {
    /// Generic I/O error
    ///
    /// Examples: DNS failure, TCP connect failure, response parse failure
    IoError,

    /// Operation timed out
    Timeout,

    /// Connection closed by the peer or the network went away
    Disconnected,

    /// TLS configuration could not be created or the handshake failed
    TlsSetup,

    /// Request could not be built (bad URL, buffer too small)
    InvalidRequest,

    /// Server answered with a non-2xx status code
    Status(u16),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::IoError => write!(f, "I/O error"),
            TransportError::Timeout => write!(f, "Operation timed out"),
            TransportError::Disconnected => write!(f, "Transport disconnected"),
            TransportError::TlsSetup => write!(f, "TLS setup failed"),
            TransportError::InvalidRequest => write!(f, "Invalid request"),
            TransportError::Status(code) => write!(f, "HTTP status {}", code),
        }
    }
}

/// Single-use TLS configuration bound to a transport
///
/// Created with [`TlsScope::acquire`], consumed by [`TlsScope::request`].
/// The configuration is released when the scope is dropped, including when
/// the request future is dropped before completion.
pub struct TlsScope<'t, T: HttpTransport> {
    transport: &'t mut T,
    tls: Option<T::TlsConfig>,
}

impl<'t, T: HttpTransport> TlsScope<'t, T> {
    /// Create a TLS configuration on `transport`
    pub fn acquire(transport: &'t mut T) -> Result<Self, TransportError> {
        let tls = transport.create_tls_config()?;
        Ok(Self {
            transport,
            tls: Some(tls),
        })
    }

    /// Perform the request for which this configuration was created
    pub async fn request(mut self, host: &str, target: &str) -> Result<u16, TransportError> {
        let tls = self.tls.as_mut().ok_or(TransportError::TlsSetup)?;
        self.transport.request(host, target, tls).await
    }
}

impl<T: HttpTransport> Drop for TlsScope<'_, T> {
    fn drop(&mut self) {
        if let Some(tls) = self.tls.take() {
            self.transport.free_tls_config(tls);
        }
    }
}
