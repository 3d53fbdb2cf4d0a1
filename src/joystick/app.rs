//! Application wiring and control loop

use super::{Reporter, Sampler};
use crate::communication::http::{HttpTransport, TransportError};
use crate::platform::traits::{AdcChannel, GpioInterface, GpioMode, Platform, TimerInterface};
use crate::platform::Result;
use pico_joystick_core::direction::{classify, Direction};
use pico_joystick_core::position::Coordinate;
use pico_joystick_core::report::ReporterConfig;

/// Board wiring and loop cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoystickConfig {
    /// Horizontal axis (GPIO27)
    pub x_channel: AdcChannel,
    /// Vertical axis (GPIO26)
    pub y_channel: AdcChannel,
    /// Joystick push-button, active low
    pub button_pin: u8,
    /// Delay between reports in milliseconds
    pub interval_ms: u32,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            x_channel: AdcChannel::Adc1,
            y_channel: AdcChannel::Adc0,
            button_pin: 6,
            interval_ms: 1000,
        }
    }
}

/// Outcome of one sample-classify-report cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub coordinate: Coordinate,
    pub direction: Direction,
    pub result: core::result::Result<u16, TransportError>,
}

/// Counters returned by [`JoystickApp::run_cycles`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub sent: u32,
    pub failed: u32,
}

/// Periodic joystick reporter
pub struct JoystickApp<P: Platform, T: HttpTransport> {
    sampler: Sampler<P::Adc>,
    reporter: Reporter<T>,
    timer: P::Timer,
    button: P::Gpio,
    interval_ms: u32,
}

/// Claim the peripherals described by `config` and build the application
///
/// # Errors
///
/// Fails if the ADC or the button GPIO cannot be claimed from `platform`.
pub fn setup<P: Platform, T: HttpTransport>(
    platform: &mut P,
    config: &JoystickConfig,
    transport: T,
    reporter_config: ReporterConfig,
) -> Result<JoystickApp<P, T>> {
    let adc = platform.init_analog()?;
    let button = platform.init_digital_input(config.button_pin, GpioMode::InputPullUp)?;
    let timer = platform.create_timer();

    crate::log_info!(
        "Joystick on GPIO{}/GPIO{}, button on GPIO{}",
        config.x_channel.gpio(),
        config.y_channel.gpio(),
        config.button_pin
    );

    Ok(JoystickApp {
        sampler: Sampler::new(adc, config.x_channel, config.y_channel),
        reporter: Reporter::new(transport, reporter_config),
        timer,
        button,
        interval_ms: config.interval_ms,
    })
}

impl<P: Platform, T: HttpTransport> JoystickApp<P, T> {
    /// Run one sample-classify-report cycle
    ///
    /// Request failures (transport errors and non-2xx responses) are logged
    /// by the reporter and returned in the report; they never stop the loop.
    pub async fn step(&mut self) -> CycleReport {
        let coordinate = self.sampler.sample().await;
        let direction = classify(coordinate);
        crate::log_debug!(
            "x={} y={} button={}",
            coordinate.x,
            coordinate.y,
            self.button.is_low()
        );

        let result = self.reporter.report(coordinate, direction).await;
        CycleReport {
            coordinate,
            direction,
            result,
        }
    }

    /// Run `cycles` cycles, each followed by the report interval
    pub async fn run_cycles(&mut self, cycles: u32) -> CycleStats {
        let mut stats = CycleStats::default();
        for _ in 0..cycles {
            match self.step().await.result {
                Ok(_) => stats.sent += 1,
                Err(_) => stats.failed += 1,
            }
            self.timer.delay_ms(self.interval_ms).await;
        }
        stats
    }

    /// Run the control loop forever
    pub async fn run(&mut self) -> ! {
        crate::log_info!("Reporting every {} ms", self.interval_ms);
        loop {
            self.step().await;
            self.timer.delay_ms(self.interval_ms).await;
        }
    }

    /// True while the joystick button is held down
    pub fn button_pressed(&self) -> bool {
        self.button.is_low()
    }

    /// Access the sampler
    pub fn sampler_mut(&mut self) -> &mut Sampler<P::Adc> {
        &mut self.sampler
    }

    /// Access the reporter
    pub fn reporter(&self) -> &Reporter<T> {
        &self.reporter
    }

    /// Mutable access to the reporter
    pub fn reporter_mut(&mut self) -> &mut Reporter<T> {
        &mut self.reporter
    }

    /// Access the loop timer
    pub fn timer(&self) -> &P::Timer {
        &self.timer
    }
}
