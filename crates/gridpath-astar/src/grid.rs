//! Read-only grid view over a row-major passability buffer.

use gridpath_core::{PassMap, Point};

use crate::BadInput;

/// Manhattan (L1) distance between two points.
///
/// With unit move costs and no diagonals this never overestimates the
/// remaining path length.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// A borrowed view over `width * height` passability bytes.
///
/// `0` is impassable, any other value is passable. The view never writes to
/// the buffer, so one buffer may back any number of concurrent searches.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    cells: &'a [u8],
    width: i32,
    height: i32,
}

impl<'a> Grid<'a> {
    /// Create a view, checking the dimensions against the buffer length.
    ///
    /// The cell count must fit in an `i32`, so that every row-major index
    /// and path length can be reported as one.
    pub fn new(cells: &'a [u8], width: i32, height: i32) -> Result<Self, BadInput> {
        if width < 1 {
            return Err(BadInput::WidthTooSmall(width));
        }
        if height < 1 {
            return Err(BadInput::HeightTooSmall(height));
        }
        if i64::from(width) * i64::from(height) > i64::from(i32::MAX) {
            return Err(BadInput::MapTooLarge { width, height });
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(BadInput::MapSizeMismatch {
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

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The underlying buffer.
    #[inline]
    pub fn cells(&self) -> &'a [u8] {
        self.cells
    }

    /// Whether `p` lies in `[0, width) x [0, height)`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` is in bounds and its byte is nonzero.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.in_bounds(p) && self.cells[self.index_of(p)] != 0
    }

    /// Row-major index of `p`.
    ///
    /// # Panics
    ///
    /// If `p` is out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> usize {
        assert!(self.in_bounds(p), "{p} is outside the grid");
        (p.y * self.width + p.x) as usize
    }

    /// Point at row-major index `idx`.
    ///
    /// # Panics
    ///
    /// If `idx >= width * height`.
    #[inline]
    pub fn coord_of(&self, idx: usize) -> Point {
        assert!(idx < self.cells.len(), "index {idx} is outside the grid");
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Append the passable cardinal neighbours of `p` to `buf`, in the
    /// order up, down, left, right. The caller clears `buf`.
    #[inline]
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
    }

    /// Admissible estimate of the path length from `a` to `b`.
    #[inline]
    pub fn heuristic(&self, a: Point, b: Point) -> i32 {
        manhattan(a, b)
    }
}

impl<'a> TryFrom<&'a PassMap> for Grid<'a> {
    type Error = BadInput;

    fn try_from(map: &'a PassMap) -> Result<Self, Self::Error> {
        Grid::new(map.cells(), map.width(), map.height())
    }
}
