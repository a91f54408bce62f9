//! Turning a [`PredecessorMap`] into a path.
//!
//! Paths are reported without the start cell and with the target cell, so
//! their length is the number of moves.

use gridpath_core::Point;

use crate::grid::Grid;
use crate::search::PredecessorMap;

/// Walks parents from the target back to (excluding) the start.
struct Backtrack<'m> {
    preds: &'m PredecessorMap,
    start: usize,
    current: usize,
    steps: usize,
    limit: usize,
}

impl<'m> Backtrack<'m> {
    fn new(grid: &Grid<'_>, preds: &'m PredecessorMap, start: Point, target: Point) -> Self {
        Self {
            preds,
            start: grid.index_of(start),
            current: grid.index_of(target),
            steps: 0,
            limit: grid.len(),
        }
    }
}

impl Iterator for Backtrack<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.current == self.start {
            return None;
        }
        let idx = self.current;
        self.steps += 1;
        assert!(
            self.steps <= self.limit,
            "predecessor chain longer than the grid"
        );
        self.current = self
            .preds
            .parent(idx)
            .unwrap_or_else(|| panic!("predecessor chain broken at index {idx}"));
        Some(idx)
    }
}

/// Number of moves from `start` to `target`, or `None` if `preds` is empty.
pub fn length(
    grid: &Grid<'_>,
    preds: &PredecessorMap,
    start: Point,
    target: Point,
) -> Option<usize> {
    if preds.is_empty() {
        return None;
    }
    Some(Backtrack::new(grid, preds, start, target).count())
}

/// Write the path's row-major indices into `out`, start-to-target order.
///
/// Returns the path length, or `None` if `preds` is empty. `out` is only
/// written when the whole path fits, and then only its first `length`
/// slots; otherwise it is left untouched and the length is still returned.
pub fn write_indices(
    grid: &Grid<'_>,
    preds: &PredecessorMap,
    start: Point,
    target: Point,
    out: &mut [i32],
) -> Option<usize> {
    let len = length(grid, preds, start, target)?;
    if len <= out.len() {
        // Second walk, filling from the back.
        let walk = Backtrack::new(grid, preds, start, target);
        for (slot, idx) in out[..len].iter_mut().rev().zip(walk) {
            *slot = idx as i32;
        }
    }
    Some(len)
}

/// The path as points, start excluded and target included, or `None` if
/// `preds` is empty.
pub fn points(
    grid: &Grid<'_>,
    preds: &PredecessorMap,
    start: Point,
    target: Point,
) -> Option<Vec<Point>> {
    if preds.is_empty() {
        return None;
    }
    let mut path: Vec<Point> = Backtrack::new(grid, preds, start, target)
        .map(|idx| grid.coord_of(idx))
        .collect();
    path.reverse();
    Some(path)
}
