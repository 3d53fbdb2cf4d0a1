//! Compass direction classification
//!
//! Maps a [`Coordinate`] to one of eight compass directions or the neutral
//! center state. Each axis is bucketed independently:
//!
//! ```text
//!   0 ........ 18 | 19 | 20 ........ 39 | 40
//!        Low      |Cntr|      High      | Outside
//! ```
//!
//! The center value is an exact match and the high range stops at 39, so a
//! fully deflected axis (40) lands in `Outside` and the pair falls through to
//! [`Direction::Center`].

use crate::position::Coordinate;
use core::fmt;

/// Axis value treated as the resting position
pub const CENTER_VALUE: u16 = 19;

/// Largest axis value counted as a high deflection
pub const HIGH_MAX: u16 = 39;

/// Position of a single axis relative to the resting value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisBucket {
    /// Below the center value
    Low,
    /// Exactly the center value
    Center,
    /// Above the center value, up to `HIGH_MAX`
    High,
    /// Anything not covered by the other buckets
    Outside,
}

impl AxisBucket {
    /// Bucket a scaled axis value
    pub fn of(value: u16) -> Self {
        if value == CENTER_VALUE {
            AxisBucket::Center
        } else if value < CENTER_VALUE {
            AxisBucket::Low
        } else if value <= HIGH_MAX {
            AxisBucket::High
        } else {
            AxisBucket::Outside
        }
    }
}

/// Joystick deflection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
    /// Resting position or any unclassified coordinate
    Center,
}

impl Direction {
    /// All directions, in classification-table order
    pub const ALL: [Direction; 9] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::Southeast,
        Direction::Northeast,
        Direction::Northwest,
        Direction::Southwest,
        Direction::Center,
    ];

    /// Human-readable label used in status lines
    ///
    /// The center state is reported as a single blank.
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Northeast => "Northeast",
            Direction::Northwest => "Northwest",
            Direction::Southeast => "Southeast",
            Direction::Southwest => "Southwest",
            Direction::Center => " ",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a coordinate into a direction
///
/// Pure and total: every coordinate maps to exactly one direction.
///
/// # Examples
///
/// ```
/// use pico_joystick_core::direction::{classify, Direction};
/// use pico_joystick_core::position::Coordinate;
///
/// assert_eq!(classify(Coordinate::new(19, 30)), Direction::North);
/// assert_eq!(classify(Coordinate::new(19, 19)), Direction::Center);
/// ```
pub fn classify(coordinate: Coordinate) -> Direction {
    use AxisBucket::{Center, High, Low};

    match (AxisBucket::of(coordinate.x), AxisBucket::of(coordinate.y)) {
        (Center, High) => Direction::North,
        (Center, Low) => Direction::South,
        (Low, Center) => Direction::West,
        (High, Center) => Direction::East,
        (High, Low) => Direction::Southeast,
        (High, High) => Direction::Northeast,
        (Low, High) => Direction::Northwest,
        (Low, Low) => Direction::Southwest,
        _ => Direction::Center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::BAR_WIDTH;

    fn at(x: u16, y: u16) -> Direction {
        classify(Coordinate { x, y })
    }

    #[test]
    fn test_classify_reference_points() {
        assert_eq!(at(19, 30), Direction::North);
        assert_eq!(at(19, 5), Direction::South);
        assert_eq!(at(5, 19), Direction::West);
        assert_eq!(at(30, 19), Direction::East);
        assert_eq!(at(30, 5), Direction::Southeast);
        assert_eq!(at(30, 30), Direction::Northeast);
        assert_eq!(at(5, 30), Direction::Northwest);
        assert_eq!(at(5, 5), Direction::Southwest);
        assert_eq!(at(19, 19), Direction::Center);
        assert_eq!(at(19, 19).label(), " ");
    }

    #[test]
    fn test_axis_bucket_boundaries() {
        assert_eq!(AxisBucket::of(0), AxisBucket::Low);
        assert_eq!(AxisBucket::of(18), AxisBucket::Low);
        assert_eq!(AxisBucket::of(19), AxisBucket::Center);
        assert_eq!(AxisBucket::of(20), AxisBucket::High);
        assert_eq!(AxisBucket::of(39), AxisBucket::High);
        assert_eq!(AxisBucket::of(40), AxisBucket::Outside);
    }

    #[test]
    fn test_full_deflection_falls_through_to_center() {
        assert_eq!(at(40, 30), Direction::Center);
        assert_eq!(at(20, 40), Direction::Center);
        assert_eq!(at(40, 40), Direction::Center);
        assert_eq!(at(19, 40), Direction::Center);
    }

    #[test]
    fn test_classify_exhaustive_and_exclusive() {
        // Literal decision table rows, checked independently of `classify`
        let low = |v: u16| v < 19;
        let high = |v: u16| v > 19 && v <= 39;
        let center = |v: u16| v == 19;

        for x in 0..=BAR_WIDTH {
            for y in 0..=BAR_WIDTH {
                let matches = [
                    (center(x) && high(y), Direction::North),
                    (center(x) && low(y), Direction::South),
                    (low(x) && center(y), Direction::West),
                    (high(x) && center(y), Direction::East),
                    (high(x) && low(y), Direction::Southeast),
                    (high(x) && high(y), Direction::Northeast),
                    (low(x) && high(y), Direction::Northwest),
                    (low(x) && low(y), Direction::Southwest),
                ];

                let hits: usize = matches.iter().filter(|(hit, _)| *hit).count();
                assert!(hits <= 1, "({}, {}) matched {} rows", x, y, hits);

                let expected = matches
                    .iter()
                    .find(|(hit, _)| *hit)
                    .map(|(_, direction)| *direction)
                    .unwrap_or(Direction::Center);
                assert_eq!(at(x, y), expected, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_labels_are_distinct() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
