//! Owned passability maps built from text.
//!
//! A [`PassMap`] stores one byte per cell in row-major order: `0` is
//! impassable, anything else is passable. Maps can be parsed from ASCII art:
//!
//! ```text
//! S..#
//! #.#.
//! #T..
//! ```
//!
//! `#` is a wall, `.` is floor, and `S` / `T` mark the start and target
//! cells (both floor).

use crate::geom::Point;
use std::fmt;

const WALL: char = '#';
const FLOOR: char = '.';
const START: char = 'S';
const TARGET: char = 'T';
const PATH: char = '*';

/// Start and target positions found while parsing a map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    pub start: Option<Point>,
    pub target: Option<Point>,
}

impl Markers {
    /// Both markers, or [`PassMapError::MissingMarker`] naming the first
    /// one absent.
    pub fn require(self) -> Result<(Point, Point), PassMapError> {
        let start = self.start.ok_or(PassMapError::MissingMarker(START))?;
        let target = self.target.ok_or(PassMapError::MissingMarker(TARGET))?;
        Ok((start, target))
    }
}

/// An owned row-major passability buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPassMap")
)]
pub struct PassMap {
    cells: Vec<u8>,
    width: i32,
    height: i32,
}

/// Unchecked wire form of [`PassMap`]; deserialization goes through
/// [`PassMap::from_cells`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPassMap {
    cells: Vec<u8>,
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPassMap> for PassMap {
    type Error = PassMapError;

    fn try_from(raw: RawPassMap) -> Result<Self, Self::Error> {
        PassMap::from_cells(raw.cells, raw.width, raw.height)
    }
}

impl PassMap {
    /// Wrap an existing buffer. Its length must equal `width * height`.
    pub fn from_cells(cells: Vec<u8>, width: i32, height: i32) -> Result<Self, PassMapError> {
        let expected = width.max(0) as usize * height.max(0) as usize;
        if cells.len() != expected {
            return Err(PassMapError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse ASCII art into a map, returning any `S` / `T` markers found.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, then
    /// every line must have the same width. Only `#`, `.`, `S` and `T` are
    /// accepted, and each marker may appear at most once.
    pub fn parse(s: &str) -> Result<(Self, Markers), PassMapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PassMapError::Empty);
        }

        let mut cells = Vec::with_capacity(s.len());
        let mut markers = Markers::default();
        let mut width: i32 = -1;
        let mut height: i32 = 0;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let mut x: i32 = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y);
                let passable = match ch {
                    WALL => 0,
                    FLOOR => 1,
                    START | TARGET => {
                        let slot = if ch == START {
                            &mut markers.start
                        } else {
                            &mut markers.target
                        };
                        if slot.is_some() {
                            return Err(PassMapError::DuplicateMarker { ch, pos });
                        }
                        *slot = Some(pos);
                        1
                    }
                    _ => return Err(PassMapError::InvalidChar { ch, pos }),
                };
                cells.push(passable);
                x += 1;
            }
            if width < 0 {
                width = x;
            } else if x != width {
                return Err(PassMapError::InconsistentSize {
                    line: y,
                    expected: width,
                    actual: x,
                });
            }
            height += 1;
        }

        Ok((
            Self {
                cells,
                width,
                height,
            },
            markers,
        ))
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The raw row-major buffer.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` is inside the map and passable.
    pub fn is_passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i] != 0)
    }

    /// Render the map as ASCII art with `path` drawn as `*` and the
    /// markers drawn on top.
    pub fn render(&self, path: &[Point], markers: Markers) -> String {
        let mut chars: Vec<char> = self
            .cells
            .iter()
            .map(|&c| if c == 0 { WALL } else { FLOOR })
            .collect();
        for &p in path {
            if let Some(i) = self.index(p) {
                chars[i] = PATH;
            }
        }
        for (p, ch) in [(markers.start, START), (markers.target, TARGET)] {
            if let Some(i) = p.and_then(|p| self.index(p)) {
                chars[i] = ch;
            }
        }

        let mut out = String::with_capacity(chars.len() + self.height.max(0) as usize);
        for row in chars.chunks(self.width.max(1) as usize) {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }
}

impl fmt::Display for PassMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[], Markers::default()))
    }
}

/// Errors that can occur when building a [`PassMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassMapError {
    /// The text contained no cells.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentSize {
        line: i32,
        expected: i32,
        actual: i32,
    },
    /// A character outside `#`, `.`, `S`, `T` was found.
    InvalidChar { ch: char, pos: Point },
    /// A required `S` or `T` marker is absent.
    MissingMarker(char),
    /// `S` or `T` appeared more than once.
    DuplicateMarker { ch: char, pos: Point },
    /// A raw buffer's length does not match the dimensions.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PassMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no cells"),
            Self::InconsistentSize {
                line,
                expected,
                actual,
            } => write!(
                f,
                "map: line {line} is {actual} cells wide, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "map: no \u{201c}{ch}\u{201d} marker"),
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "map: marker \u{201c}{ch}\u{201d} repeated at {pos}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "map: buffer holds {actual} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for PassMapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
S..#
#.#.
#T..";

    #[test]
    fn parse_size_and_cells() {
        let (m, _) = PassMap::parse(MAZE).unwrap();
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 3);
        assert_eq!(m.cells(), &[1, 1, 1, 0, 0, 1, 0, 1, 0, 1, 1, 1]);
    }

    #[test]
    fn parse_markers() {
        let (m, markers) = PassMap::parse(MAZE).unwrap();
        assert_eq!(markers.start, Some(Point::new(0, 0)));
        assert_eq!(markers.target, Some(Point::new(1, 2)));
        assert!(m.is_passable(Point::new(1, 2)));
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let (m, markers) = PassMap::parse("\n\n..\n.#\n\n").unwrap();
        assert_eq!((m.width(), m.height()), (2, 2));
        assert_eq!(markers, Markers::default());
    }

    #[test]
    fn parse_rejects_ragged_lines() {
        let err = PassMap::parse("...\n..").unwrap_err();
        assert_eq!(
            err,
            PassMapError::InconsistentSize {
                line: 1,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_char() {
        let err = PassMap::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            PassMapError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn parse_rejects_second_start() {
        let err = PassMap::parse("S.\n.S").unwrap_err();
        assert!(matches!(err, PassMapError::DuplicateMarker { ch: 'S', .. }));
    }

    #[test]
    fn require_both_markers() {
        let (_, markers) = PassMap::parse(MAZE).unwrap();
        assert_eq!(
            markers.require(),
            Ok((Point::new(0, 0), Point::new(1, 2)))
        );

        let (_, markers) = PassMap::parse("..\n.T").unwrap();
        assert_eq!(markers.require(), Err(PassMapError::MissingMarker('S')));

        let (_, markers) = PassMap::parse("S.\n..").unwrap();
        let err = markers.require().unwrap_err();
        assert_eq!(err, PassMapError::MissingMarker('T'));
        assert_eq!(err.to_string(), "map: no \u{201c}T\u{201d} marker");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(PassMap::parse("  \n ").unwrap_err(), PassMapError::Empty);
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(PassMap::from_cells(vec![1; 6], 3, 2).is_ok());
        let err = PassMap::from_cells(vec![1; 5], 3, 2).unwrap_err();
        assert_eq!(
            err,
            PassMapError::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn passability_queries() {
        let m = PassMap::from_cells(vec![1, 1, 1, 1, 1, 0], 3, 2).unwrap();
        assert!(m.is_passable(Point::new(0, 1)));
        assert!(!m.is_passable(Point::new(2, 1)));
        // out of bounds is never passable
        assert!(!m.is_passable(Point::new(5, 5)));
        assert!(!m.is_passable(Point::new(-1, 0)));
    }

    #[test]
    fn render_draws_path_under_markers() {
        let (m, markers) = PassMap::parse(MAZE).unwrap();
        let path = [Point::new(1, 0), Point::new(1, 1), Point::new(1, 2)];
        assert_eq!(m.render(&path, markers), "S*.#\n#*#.\n#T..\n");
        assert_eq!(m.to_string(), "...#\n#.#.\n#...\n");
    }

    #[test]
    fn error_messages() {
        let err = PassMapError::InvalidChar {
            ch: '?',
            pos: Point::new(2, 0),
        };
        assert_eq!(
            err.to_string(),
            "map contains invalid character \u{201c}?\u{201d} at (2, 0)"
        );
    }
}
