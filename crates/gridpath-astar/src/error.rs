use std::fmt;

use gridpath_core::Point;

/// Rejected input to [`find_path`](crate::find_path) and friends.
///
/// Every variant is the same kind of failure (the caller broke a
/// precondition); variants only carry what the message needs. Nothing is
/// searched once one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadInput {
    /// Map width below 1.
    WidthTooSmall(i32),
    /// Map height below 1.
    HeightTooSmall(i32),
    /// Start outside `[0, width) x [0, height)`.
    StartOutOfBounds { point: Point, width: i32, height: i32 },
    /// Target outside `[0, width) x [0, height)`.
    TargetOutOfBounds { point: Point, width: i32, height: i32 },
    /// Negative output capacity.
    NegativeCapacity(i32),
    /// More than `i32::MAX` cells.
    MapTooLarge { width: i32, height: i32 },
    /// Passability buffer length differs from `width * height`.
    MapSizeMismatch { expected: usize, actual: usize },
    /// Output capacity larger than the buffer handed in.
    CapacityExceedsBuffer { capacity: i32, len: usize },
    /// Start cell is impassable.
    StartBlocked(Point),
    /// Target cell is impassable.
    TargetBlocked(Point),
}

impl fmt::Display for BadInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WidthTooSmall(w) => write!(f, "map width must be greater than 0, got {w}"),
            Self::HeightTooSmall(h) => write!(f, "map height must be greater than 0, got {h}"),
            Self::StartOutOfBounds {
                point,
                width,
                height,
            } => write!(f, "start {point} lies outside the {width}x{height} map"),
            Self::TargetOutOfBounds {
                point,
                width,
                height,
            } => write!(f, "target {point} lies outside the {width}x{height} map"),
            Self::NegativeCapacity(c) => {
                write!(f, "output buffer size must not be negative, got {c}")
            }
            Self::MapTooLarge { width, height } => {
                write!(f, "map of {width}x{height} cells exceeds {} cells", i32::MAX)
            }
            Self::MapSizeMismatch { expected, actual } => {
                write!(f, "map buffer holds {actual} cells, expected {expected}")
            }
            Self::CapacityExceedsBuffer { capacity, len } => write!(
                f,
                "output buffer size {capacity} exceeds the {len} slots provided"
            ),
            Self::StartBlocked(p) => write!(f, "start {p} must be passable"),
            Self::TargetBlocked(p) => write!(f, "target {p} must be passable"),
        }
    }
}

impl std::error::Error for BadInput {}
