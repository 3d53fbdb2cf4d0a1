//! Status line formatting

use crate::direction::Direction;
use crate::position::Coordinate;
use core::fmt::Write;
use heapless::String;

/// Maximum status line length in bytes
///
/// The longest line, two 2-digit coordinates and a 9-character label, is
/// 30 bytes, so formatting never truncates in practice.
pub const STATUS_LINE_CAPACITY: usize = 63;

/// Bounded status line
pub type StatusLine = String<STATUS_LINE_CAPACITY>;

/// Format the status line for a coordinate and its direction
///
/// Layout: `"[ X: {x}   Y: {y} ] | {label}\n"`. Output that does not fit in
/// [`STATUS_LINE_CAPACITY`] is truncated.
///
/// # Examples
///
/// ```
/// use pico_joystick_core::direction::Direction;
/// use pico_joystick_core::position::Coordinate;
/// use pico_joystick_core::report::format::format_status;
///
/// let line = format_status(Coordinate::new(5, 30), Direction::Northwest);
/// assert_eq!(line.as_str(), "[ X: 5   Y: 30 ] | Northwest\n");
/// ```
pub fn format_status(coordinate: Coordinate, direction: Direction) -> StatusLine {
    let mut line = StatusLine::new();
    let written = writeln!(
        line,
        "[ X: {}   Y: {} ] | {}",
        coordinate.x,
        coordinate.y,
        direction.label()
    );
    debug_assert!(written.is_ok(), "status line exceeds STATUS_LINE_CAPACITY");
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::classify;

    #[test]
    fn test_format_layout() {
        let line = format_status(Coordinate::new(20, 38), Direction::Northeast);
        assert_eq!(line.as_str(), "[ X: 20   Y: 38 ] | Northeast\n");
    }

    #[test]
    fn test_format_center_label_is_blank() {
        let coordinate = Coordinate::new(19, 19);
        let line = format_status(coordinate, classify(coordinate));
        assert_eq!(line.as_str(), "[ X: 19   Y: 19 ] |  \n");
    }

    #[test]
    fn test_format_longest_line_fits() {
        let line = format_status(Coordinate::new(40, 40), Direction::Northwest);
        assert!(line.ends_with('\n'));
        assert!(line.len() <= STATUS_LINE_CAPACITY);
    }

    #[test]
    fn test_format_every_label_fits_untruncated() {
        let coordinate = Coordinate::new(40, 40);
        for direction in Direction::ALL {
            let line = format_status(coordinate, direction);
            assert!(line.starts_with("[ X: 40   Y: 40 ] | "));
            assert!(line.ends_with('\n'));
            assert_eq!(line.len(), "[ X: 40   Y: 40 ] | \n".len() + direction.label().len());
        }
    }
}
