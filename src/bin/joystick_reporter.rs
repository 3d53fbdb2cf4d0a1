//! Joystick Direction Reporter
//!
//! Samples a two-axis analog joystick once per second, classifies the
//! deflection into a compass direction and reports it to a remote HTTPS
//! endpoint as a percent-encoded GET query.
//!
//! # Hardware Setup
//!
//! - Joystick VRx → GPIO 27 (ADC1)
//! - Joystick VRy → GPIO 26 (ADC0)
//! - Joystick SW → GPIO 6 (input, pull-up)
//!
//! # Usage
//!
//! ```bash
//! WIFI_SSID=MyNetwork WIFI_PASSWORD=secret \
//!     cargo build --release --target thumbv6m-none-eabi --features pico_w
//!
//! probe-rs run --chip RP2040 target/thumbv6m-none-eabi/release/joystick_reporter
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use pico_joystick::{
    joystick::{setup, JoystickConfig},
    log_error, log_info,
    parameters::{ReportParams, WifiParams},
    platform::rp2040::{
        network::{initialize_wifi, WifiConfig, WifiParts},
        AnalogParts, Rp2040HttpTransport, Rp2040Platform,
    },
};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    log_info!("pico_joystick reporter starting");

    let p = embassy_rp::init(Default::default());

    let wifi_parts = WifiParts {
        pwr: p.PIN_23,
        cs: p.PIN_25,
        dio: p.PIN_24,
        clk: p.PIN_29,
        pio: p.PIO0,
        dma: p.DMA_CH0,
    };
    let mut platform = Rp2040Platform::new(AnalogParts {
        adc: p.ADC,
        adc0: p.PIN_26,
        adc1: p.PIN_27,
    });
    if let Err(e) = platform.add_input(p.PIN_6.into()) {
        log_error!("Button setup failed: {}", e);
        park().await;
    }

    let wifi = WifiConfig::from_params(&WifiParams::from_env());
    let stack = match initialize_wifi(spawner, wifi, wifi_parts).await {
        Ok((stack, _control)) => stack,
        Err(e) => {
            log_error!("WiFi initialization failed: {}", e);
            park().await
        }
    };

    Timer::after(Duration::from_millis(1000)).await;
    log_info!("Wi-Fi connected");

    let transport = match Rp2040HttpTransport::new(stack) {
        Ok(transport) => transport,
        Err(e) => {
            log_error!("HTTP transport setup failed: {}", e);
            park().await
        }
    };

    let report = ReportParams::from_env();
    let config = JoystickConfig {
        interval_ms: report.interval_ms,
        ..JoystickConfig::default()
    };
    let mut app = match setup(&mut platform, &config, transport, report.reporter_config()) {
        Ok(app) => app,
        Err(e) => {
            log_error!("Joystick setup failed: {}", e);
            park().await
        }
    };

    log_info!("Reporting to https://{}", report.host);
    app.run().await
}

/// Halt after a fatal startup error
async fn park() -> ! {
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
