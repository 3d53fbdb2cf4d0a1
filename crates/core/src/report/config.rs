//! Reporter endpoint configuration

/// Default report host
pub const DEFAULT_HOST: &str = "server-y824.onrender.com";

/// Default path prefix; the encoded message is appended to it
pub const DEFAULT_PATH_PREFIX: &str = "/mensagem?msg=";

/// Immutable endpoint configuration handed to the reporter at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Remote host name (TLS is always used)
    pub host: &'static str,
    /// Path and query prefix; the encoded status line is appended to it
    pub path_prefix: &'static str,
}

impl ReporterConfig {
    /// Create a configuration for a custom endpoint
    pub const fn new(host: &'static str, path_prefix: &'static str) -> Self {
        Self { host, path_prefix }
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PATH_PREFIX)
    }
}
