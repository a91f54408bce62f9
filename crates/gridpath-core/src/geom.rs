//! Geometry primitive: [`Point`].
//!
//! Coordinates follow screen conventions: X grows right, Y grows down, so
//! "up" is `y - 1`.

use std::fmt;

/// A 2D integer cell coordinate.
///
/// Points order x-major, then y, so they can key ordered maps and sets.
/// The default value is [`Point::UNSET`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Sentinel for "no cell" (-1, -1).
    pub const UNSET: Self = Self { x: -1, y: -1 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbours in search order: up, down, left, right.
    #[inline]
    pub const fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
        ]
    }

    /// Whether `other` is one cardinal step away.
    #[inline]
    pub fn is_adjacent_4(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::UNSET
    }
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn default_is_unset() {
        assert_eq!(Point::default(), Point::new(-1, -1));
        assert_eq!(Point::default(), Point::UNSET);
    }

    #[test]
    fn order_is_x_major() {
        let mut set = BTreeSet::new();
        set.insert(Point::new(1, 0));
        set.insert(Point::new(0, 5));
        set.insert(Point::new(0, 1));
        let pts: Vec<_> = set.into_iter().collect();
        assert_eq!(
            pts,
            vec![Point::new(0, 1), Point::new(0, 5), Point::new(1, 0)]
        );
    }

    #[test]
    fn neighbors_up_down_left_right() {
        let p = Point::new(3, 3);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(3, 2),
                Point::new(3, 4),
                Point::new(2, 3),
                Point::new(4, 3),
            ]
        );
    }

    #[test]
    fn adjacency() {
        let p = Point::new(2, 2);
        for n in p.neighbors_4() {
            assert!(p.is_adjacent_4(n));
        }
        assert!(!p.is_adjacent_4(p));
        assert!(!p.is_adjacent_4(Point::new(3, 3)));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(4, -1).to_string(), "(4, -1)");
    }
}
