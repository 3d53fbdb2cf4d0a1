//! RP2040 HTTPS Transport
//!
//! Sends GET requests over embassy-net TCP with embedded-tls, via `reqwless`.
//!
//! # Memory Usage
//!
//! - TLS read/write record buffers: 2 x 16 KB
//! - TCP socket buffers: 2 x 4 KB
//! - Response buffer: 4 KB
//!
//! All buffers are statically allocated once; [`Rp2040HttpTransport::new`]
//! fails if called a second time.

use crate::communication::http::{HttpTransport, TransportError};
use crate::platform::{error::PlatformError, Result};
use embassy_net::{
    dns::DnsSocket,
    tcp::client::{TcpClient, TcpClientState},
    Stack,
};
use embassy_rp::clocks::RoscRng;
use embassy_time::{with_timeout, Duration};
use heapless::String;
use pico_joystick_core::report::https_url;
use rand_core::RngCore;
use reqwless::client::{HttpClient, TlsConfig, TlsVerify};
use reqwless::request::Method;
use static_cell::{ConstStaticCell, StaticCell};

/// TLS record buffer size (max TLS record plus overhead)
const TLS_BUFFER_SIZE: usize = 16_640;

/// TCP socket buffer size per direction
const TCP_BUFFER_SIZE: usize = 4096;

/// Response buffer size (headers and body)
const RX_BUFFER_SIZE: usize = 4096;

/// Longest absolute URL the transport builds
const URL_CAPACITY: usize = 600;

/// Time allowed for one complete request
const REQUEST_TIMEOUT_MS: u64 = 30_000;

type TcpState = TcpClientState<1, TCP_BUFFER_SIZE, TCP_BUFFER_SIZE>;

static TCP_STATE: StaticCell<TcpState> = StaticCell::new();
static TLS_READ: ConstStaticCell<[u8; TLS_BUFFER_SIZE]> = ConstStaticCell::new([0; TLS_BUFFER_SIZE]);
static TLS_WRITE: ConstStaticCell<[u8; TLS_BUFFER_SIZE]> = ConstStaticCell::new([0; TLS_BUFFER_SIZE]);
static RX_BUFFER: ConstStaticCell<[u8; RX_BUFFER_SIZE]> = ConstStaticCell::new([0; RX_BUFFER_SIZE]);

/// TLS session parameters for one request
pub struct TlsSession {
    seed: u64,
}

/// HTTPS transport over the WiFi network stack
///
/// Certificates are not verified (`TlsVerify::None`).
pub struct Rp2040HttpTransport {
    stack: Stack<'static>,
    tcp_state: &'static TcpState,
    tls_read: &'static mut [u8; TLS_BUFFER_SIZE],
    tls_write: &'static mut [u8; TLS_BUFFER_SIZE],
    rx: &'static mut [u8; RX_BUFFER_SIZE],
}

impl Rp2040HttpTransport {
    /// Create the transport on top of a configured network stack
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the static buffers
    /// were already claimed.
    pub fn new(stack: Stack<'static>) -> Result<Self> {
        let tcp_state = TCP_STATE
            .try_init(TcpState::new())
            .ok_or(PlatformError::ResourceUnavailable)?;
        let tls_read = TLS_READ
            .try_take()
            .ok_or(PlatformError::ResourceUnavailable)?;
        let tls_write = TLS_WRITE
            .try_take()
            .ok_or(PlatformError::ResourceUnavailable)?;
        let rx = RX_BUFFER
            .try_take()
            .ok_or(PlatformError::ResourceUnavailable)?;

        Ok(Self {
            stack,
            tcp_state,
            tls_read,
            tls_write,
            rx,
        })
    }
}

impl HttpTransport for Rp2040HttpTransport {
    type TlsConfig = TlsSession;

    fn create_tls_config(&mut self) -> core::result::Result<Self::TlsConfig, TransportError> {
        let mut rng = RoscRng;
        Ok(TlsSession {
            seed: rng.next_u64(),
        })
    }

    async fn request(
        &mut self,
        host: &str,
        target: &str,
        tls: &mut Self::TlsConfig,
    ) -> core::result::Result<u16, TransportError> {
        let url: String<URL_CAPACITY> =
            https_url(host, target).ok_or(TransportError::InvalidRequest)?;

        let client = TcpClient::new(self.stack, self.tcp_state);
        let dns = DnsSocket::new(self.stack);
        let config = TlsConfig::new(
            tls.seed,
            &mut self.tls_read[..],
            &mut self.tls_write[..],
            TlsVerify::None,
        );
        let mut http = HttpClient::new_with_tls(&client, &dns, config);
        let rx = &mut self.rx[..];

        let exchange = async {
            let mut request = http
                .request(Method::GET, url.as_str())
                .await
                .map_err(map_error)?;
            let response = request.send(rx).await.map_err(map_error)?;
            let status = response.status.0;

            for (name, value) in response.headers() {
                crate::log_debug!(
                    "{}: {}",
                    name,
                    core::str::from_utf8(value).unwrap_or("<binary>")
                );
            }

            let body = response.body().read_to_end().await.map_err(map_error)?;
            crate::log_debug!(
                "Body: {}",
                core::str::from_utf8(body).unwrap_or("<binary>")
            );

            Ok(status)
        };

        match with_timeout(Duration::from_millis(REQUEST_TIMEOUT_MS), exchange).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout),
        }
    }

    fn free_tls_config(&mut self, tls: Self::TlsConfig) {
        // Record buffers hold session keys and plaintext
        self.tls_read.fill(0);
        self.tls_write.fill(0);
        drop(tls);
    }
}

fn map_error(e: reqwless::Error) -> TransportError {
    crate::log_debug!("HTTP client error: {}", e);
    match e {
        reqwless::Error::Tls(_) => TransportError::TlsSetup,
        reqwless::Error::InvalidUrl(_) | reqwless::Error::BufferTooSmall => {
            TransportError::InvalidRequest
        }
        reqwless::Error::ConnectionAborted => TransportError::Disconnected,
        _ => TransportError::IoError,
    }
}
