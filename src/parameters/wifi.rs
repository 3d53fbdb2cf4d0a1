//! WiFi Parameter Definitions
//!
//! # Parameters
//!
//! - `WIFI_SSID` - WiFi network name (max 32 chars)
//! - `WIFI_PASSWORD` - WiFi password (max 63 chars)
//!
//! # Security Note
//!
//! The password is compiled into the firmware binary and can be extracted
//! from it.

use heapless::String;

/// Maximum SSID length (IEEE 802.11 standard)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WiFi password length (WPA2 standard)
pub const MAX_PASSWORD_LEN: usize = 63;

/// Time allowed for joining the network
pub const CONNECT_TIMEOUT_MS: u64 = 10_000;

/// WiFi parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WifiParams {
    /// WiFi network SSID
    pub ssid: String<MAX_SSID_LEN>,
    /// WiFi password (WPA2)
    pub password: String<MAX_PASSWORD_LEN>,
}

impl WifiParams {
    /// Load WiFi parameters from the build-time environment
    pub fn from_env() -> Self {
        Self::from_values(env!("WIFI_SSID"), env!("WIFI_PASSWORD"))
    }

    /// Build parameters from string values
    ///
    /// Values that exceed their length limit are rejected and left empty, so
    /// an oversized SSID reads as "not configured".
    pub fn from_values(ssid: &str, password: &str) -> Self {
        Self {
            ssid: String::try_from(ssid).unwrap_or_default(),
            password: String::try_from(password).unwrap_or_default(),
        }
    }

    /// Check if WiFi is configured
    ///
    /// Returns true if SSID is not empty.
    pub fn is_configured(&self) -> bool {
        !self.ssid.is_empty()
    }
}
