//! RP2040 WiFi Network Configuration
//!
//! Provides WiFi initialization and network stack management for Pico W using
//! the CYW43439 WiFi chip and Embassy network stack.
//!
//! # WiFi Connection Flow
//!
//! ```text
//! 1. Load WiFi parameters (build-time environment)
//! 2. Initialize CYW43439 driver (PIO, DMA, firmware)
//! 3. Spawn driver and network tasks on Embassy executor
//! 4. Join WPA2 network with SSID/password (10s timeout)
//! 5. Wait for DHCP
//! 6. Return network stack and control handles
//! ```
//!
//! # Failure Strategy
//!
//! No retries. Every failure is reported to the caller, which logs it and
//! parks the firmware.
//!
//! # Example
//!
//! ```ignore
//! use pico_joystick::parameters::WifiParams;
//! use pico_joystick::platform::rp2040::network::{initialize_wifi, WifiConfig};
//!
//! let config = WifiConfig::from_params(&WifiParams::from_env());
//! let (stack, control) = initialize_wifi(spawner, config, parts).await?;
//! ```

use crate::parameters::wifi::{WifiParams, CONNECT_TIMEOUT_MS, MAX_PASSWORD_LEN, MAX_SSID_LEN};
use cyw43::{Control, JoinOptions};
use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_rp::{
    clocks::RoscRng,
    gpio::{Level, Output},
    peripherals::{DMA_CH0, PIN_23, PIN_24, PIN_25, PIN_29, PIO0},
    pio::Pio,
    Peri,
};
use embassy_time::{with_timeout, Duration};
use rand_core::RngCore;
use static_cell::StaticCell;

use super::Irqs;

/// DHCP lease timeout
const DHCP_TIMEOUT_MS: u64 = 30_000;

/// Number of sockets the network stack can hold (DHCP, DNS, TCP)
const STACK_SOCKETS: usize = 5;

/// WiFi configuration
#[derive(Debug, Clone, Default)]
pub struct WifiConfig {
    /// WiFi network SSID (max 32 chars)
    pub ssid: heapless::String<MAX_SSID_LEN>,
    /// WiFi password (WPA2, max 63 chars)
    pub password: heapless::String<MAX_PASSWORD_LEN>,
    /// Time allowed for joining the network
    pub connect_timeout_ms: u64,
}

impl WifiConfig {
    /// Create WiFi configuration from WiFi parameters
    pub fn from_params(params: &WifiParams) -> Self {
        Self {
            ssid: params.ssid.clone(),
            password: params.password.clone(),
            connect_timeout_ms: CONNECT_TIMEOUT_MS,
        }
    }

    /// Check if WiFi is configured
    ///
    /// Returns false if SSID is empty (skip WiFi initialization).
    pub fn is_configured(&self) -> bool {
        !self.ssid.is_empty()
    }
}

/// WiFi initialization error
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum NetworkError {
    /// WiFi not configured (empty SSID)
    NotConfigured,
    /// Driver or network stack could not be brought up
    InitFailed,
    /// Join failed or timed out
    ConnectionFailed,
    /// No DHCP lease within the timeout
    DhcpTimeout,
}

/// Pins and peripherals wired to the CYW43439
pub struct WifiParts {
    /// WL_ON (GPIO23)
    pub pwr: Peri<'static, PIN_23>,
    /// SPI chip select (GPIO25)
    pub cs: Peri<'static, PIN_25>,
    /// SPI data (GPIO24)
    pub dio: Peri<'static, PIN_24>,
    /// SPI clock (GPIO29)
    pub clk: Peri<'static, PIN_29>,
    /// PIO block driving the SPI bus
    pub pio: Peri<'static, PIO0>,
    /// DMA channel for the SPI bus
    pub dma: Peri<'static, DMA_CH0>,
}

type WifiSpi = PioSpi<'static, PIO0, 0, DMA_CH0>;

/// Initialize WiFi and network stack
///
/// # Returns
///
/// `Ok((Stack, &'static mut Control))` on success containing network stack and WiFi control handles
///
/// # Errors
///
/// - `NetworkError::NotConfigured` - Empty SSID in configuration
/// - `NetworkError::InitFailed` - Tasks could not be spawned or called twice
/// - `NetworkError::ConnectionFailed` - Join failed or timed out
/// - `NetworkError::DhcpTimeout` - No address assigned
pub async fn initialize_wifi(
    spawner: Spawner,
    config: WifiConfig,
    parts: WifiParts,
) -> Result<(Stack<'static>, &'static mut Control<'static>), NetworkError> {
    if !config.is_configured() {
        crate::log_warn!("WiFi not configured (empty SSID), skipping WiFi initialization");
        return Err(NetworkError::NotConfigured);
    }

    crate::log_info!("Initializing WiFi with SSID: {}", config.ssid.as_str());

    // 1. Load CYW43439 firmware
    let fw = include_bytes!("../../../cyw43-firmware/43439A0.bin");
    let clm = include_bytes!("../../../cyw43-firmware/43439A0_clm.bin");

    // 2. Initialize PIO for WiFi SPI communication
    let pwr = Output::new(parts.pwr, Level::Low);
    let cs = Output::new(parts.cs, Level::High);
    let mut pio = Pio::new(parts.pio, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        parts.dio,
        parts.clk,
        parts.dma,
    );

    // 3. Initialize CYW43 driver
    static STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = STATE
        .try_init(cyw43::State::new())
        .ok_or(NetworkError::InitFailed)?;
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;

    // 4. Spawn WiFi driver task
    spawner.spawn(wifi_task(runner).map_err(|_| NetworkError::InitFailed)?);

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;

    // 5. Create network stack
    let seed = RoscRng.next_u64();
    static RESOURCES: StaticCell<StackResources<STACK_SOCKETS>> = StaticCell::new();
    let resources = RESOURCES
        .try_init(StackResources::new())
        .ok_or(NetworkError::InitFailed)?;
    let (stack, runner) = embassy_net::new(
        net_device,
        NetConfig::dhcpv4(Default::default()),
        resources,
        seed,
    );

    // 6. Spawn network stack task
    spawner.spawn(net_task(runner).map_err(|_| NetworkError::InitFailed)?);

    // 7. Join WPA2 network
    crate::log_info!("Joining WiFi network ({} ms timeout)", config.connect_timeout_ms);
    let options = JoinOptions::new(config.password.as_bytes());
    match with_timeout(
        Duration::from_millis(config.connect_timeout_ms),
        control.join(config.ssid.as_str(), options),
    )
    .await
    {
        Ok(Ok(())) => crate::log_info!("WiFi joined"),
        Ok(Err(_)) => {
            crate::log_error!("WiFi connection failed");
            return Err(NetworkError::ConnectionFailed);
        }
        Err(_) => {
            crate::log_error!("WiFi connection timed out");
            return Err(NetworkError::ConnectionFailed);
        }
    }

    // 8. Wait for DHCP
    crate::log_info!("Waiting for DHCP...");
    if with_timeout(
        Duration::from_millis(DHCP_TIMEOUT_MS),
        stack.wait_config_up(),
    )
    .await
    .is_err()
    {
        crate::log_error!("DHCP timeout");
        return Err(NetworkError::DhcpTimeout);
    }

    if let Some(v4) = stack.config_v4() {
        crate::log_info!("DHCP IP configured: {}", v4.address);
    }

    static CONTROL: StaticCell<Control<'static>> = StaticCell::new();
    let control = CONTROL.try_init(control).ok_or(NetworkError::InitFailed)?;

    Ok((stack, control))
}

/// WiFi driver task
///
/// Runs the CYW43439 WiFi driver event loop.
#[embassy_executor::task]
async fn wifi_task(runner: cyw43::Runner<'static, Output<'static>, WifiSpi>) -> ! {
    runner.run().await
}

/// Network stack task
///
/// Runs the embassy-net network stack event loop.
#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}
