//! Joystick position scaling
//!
//! Converts raw 12-bit ADC readings into a bounded bar position used by the
//! direction classifier.
//!
//! # Scaling
//!
//! ```text
//! scaled = raw * BAR_WIDTH / ADC_MAX      (integer division)
//!
//!    0 ..= 4095   ──►   0 ..= 40
//! ```

use core::fmt;

/// Upper bound of the scaled coordinate range (both axes)
pub const BAR_WIDTH: u16 = 40;

/// Maximum raw reading of the 12-bit ADC
pub const ADC_MAX: u16 = (1 << 12) - 1;

/// Scale a raw ADC reading to the bar range `[0, BAR_WIDTH]`
///
/// Readings above [`ADC_MAX`] are clamped first, so the result never leaves
/// the bar range even if a converter misreports.
///
/// # Examples
///
/// ```
/// use pico_joystick_core::position::scale;
///
/// assert_eq!(scale(0), 0);
/// assert_eq!(scale(2048), 20);
/// assert_eq!(scale(4095), 40);
/// ```
pub fn scale(raw: u16) -> u16 {
    let clamped = raw.min(ADC_MAX) as u32;
    (clamped * BAR_WIDTH as u32 / ADC_MAX as u32) as u16
}

/// Scaled joystick position
///
/// Both components lie in `[0, BAR_WIDTH]`. A fresh value is produced every
/// sampling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    /// Horizontal bar position
    pub x: u16,
    /// Vertical bar position
    pub y: u16,
}

impl Coordinate {
    /// Create a coordinate from already-scaled components
    ///
    /// Components are clamped to `BAR_WIDTH`.
    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x: x.min(BAR_WIDTH),
            y: y.min(BAR_WIDTH),
        }
    }

    /// Create a coordinate from raw ADC readings
    pub fn from_raw(raw_x: u16, raw_y: u16) -> Self {
        Self {
            x: scale(raw_x),
            y: scale(raw_y),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(scale(0), 0);
        assert_eq!(scale(ADC_MAX), BAR_WIDTH);
    }

    #[test]
    fn test_scale_midpoint() {
        // 2048 * 40 / 4095 = 20.005 -> 20
        assert_eq!(scale(2048), 20);
        // 2047 * 40 / 4095 = 19.995 -> 19
        assert_eq!(scale(2047), 19);
    }

    #[test]
    fn test_scale_clamps_overrange() {
        assert_eq!(scale(5000), BAR_WIDTH);
        assert_eq!(scale(u16::MAX), BAR_WIDTH);
    }

    #[test]
    fn test_scale_monotonic_full_range() {
        let mut previous = 0;
        for raw in 0..=ADC_MAX {
            let scaled = scale(raw);
            assert!(scaled <= BAR_WIDTH);
            assert!(scaled >= previous, "scale({}) decreased", raw);
            previous = scaled;
        }
    }

    #[test]
    fn test_coordinate_from_raw() {
        let coordinate = Coordinate::from_raw(2048, 4095);
        assert_eq!(coordinate, Coordinate { x: 20, y: 40 });
    }

    #[test]
    fn test_coordinate_new_clamps() {
        let coordinate = Coordinate::new(100, 7);
        assert_eq!(coordinate.x, BAR_WIDTH);
        assert_eq!(coordinate.y, 7);
    }
}
