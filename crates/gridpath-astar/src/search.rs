//! The A* search engine.
//!
//! Cost and predecessor bookkeeping live in flat arrays indexed by the
//! grid's row-major index, allocated fresh for every search.

use gridpath_core::Point;
use log::{debug, trace};

use crate::frontier::Frontier;
use crate::grid::Grid;

/// Cost of a cell the search has not reached.
pub const UNVISITED: i32 = i32::MAX;

const NO_PARENT: usize = usize::MAX;

/// For every reached cell, the cell it was most cheaply reached from.
///
/// Empty when the search did not reach its target. Following parents from
/// any reached cell ends at the start cell, which has no parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredecessorMap {
    parents: Vec<usize>,
}

impl PredecessorMap {
    /// Whether the map holds no path (the target was not reached).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Row-major index of the cell preceding `idx`, if it has one.
    #[inline]
    pub fn parent(&self, idx: usize) -> Option<usize> {
        match self.parents.get(idx) {
            Some(&p) if p != NO_PARENT => Some(p),
            _ => None,
        }
    }
}

/// Counters reported by [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Whether the target was reached.
    pub found: bool,
    /// Cells taken off the frontier and expanded (the target excluded).
    pub expanded: usize,
    /// Frontier insertions, the start included.
    pub pushes: u64,
}

/// Run A* from `start` to `target` and return the predecessor map.
///
/// See [`run`] for preconditions.
pub fn astar(grid: &Grid<'_>, start: Point, target: Point) -> PredecessorMap {
    run(grid, start, target).0
}

/// Run A* from `start` to `target`, also returning search counters.
///
/// Trusts its input: both endpoints must be passable cells of `grid` and
/// must differ. The caller is expected to have validated them.
pub fn run(grid: &Grid<'_>, start: Point, target: Point) -> (PredecessorMap, SearchStats) {
    debug_assert!(grid.is_passable(start), "start {start} not passable");
    debug_assert!(grid.is_passable(target), "target {target} not passable");
    debug_assert_ne!(start, target);

    debug!(
        "astar: {start} -> {target} on {}x{} grid",
        grid.width(),
        grid.height()
    );

    let mut costs = vec![UNVISITED; grid.len()];
    let mut parents = vec![NO_PARENT; grid.len()];
    let mut frontier = Frontier::with_capacity(grid.len());
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);
    let mut stats = SearchStats::default();

    costs[grid.index_of(start)] = 0;
    frontier.push(start, 0);

    let found = 'search: loop {
        let Some(current) = frontier.pop() else {
            break 'search false;
        };

        // Early exit: the first pop of the target carries its optimal cost.
        if current == target {
            break 'search true;
        }

        let ci = grid.index_of(current);
        let new_cost = costs[ci] + 1;
        stats.expanded += 1;
        trace!("astar: expand {current} at cost {}", costs[ci]);

        nbuf.clear();
        grid.neighbors(current, &mut nbuf);

        for &next in nbuf.iter() {
            let ni = grid.index_of(next);
            // UNVISITED is i32::MAX, so any reachable cost beats it.
            if new_cost >= costs[ni] {
                continue;
            }
            costs[ni] = new_cost;
            parents[ni] = ci;
            frontier.push(next, new_cost + grid.heuristic(next, target));
        }
    };

    stats.found = found;
    stats.pushes = frontier.pushes();
    debug!(
        "astar: {} after expanding {} cells ({} pushes, {} left queued)",
        if found { "found" } else { "no path" },
        stats.expanded,
        stats.pushes,
        frontier.len()
    );

    if !found {
        parents = Vec::new();
    }
    (PredecessorMap { parents }, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(grid: &Grid<'_>, preds: &PredecessorMap, target: Point) -> Vec<Point> {
        let mut out = vec![target];
        let mut idx = grid.index_of(target);
        while let Some(p) = preds.parent(idx) {
            out.push(grid.coord_of(p));
            idx = p;
        }
        out.reverse();
        out
    }

    #[test]
    fn open_2x2_goes_down_then_right() {
        let cells = [1; 4];
        let g = Grid::new(&cells, 2, 2).unwrap();
        let preds = astar(&g, Point::new(0, 0), Point::new(1, 1));
        assert_eq!(
            chain(&g, &preds, Point::new(1, 1)),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn unreachable_target_gives_empty_map() {
        let cells = [1, 0, 0, 1];
        let g = Grid::new(&cells, 2, 2).unwrap();
        let (preds, stats) = run(&g, Point::new(0, 0), Point::new(1, 1));
        assert!(preds.is_empty());
        assert!(!stats.found);
        assert_eq!(stats.expanded, 1);
        assert_eq!(stats.pushes, 1);
        assert_eq!(preds.parent(0), None);
    }

    #[test]
    fn start_has_no_parent() {
        let cells = [1; 12];
        let g = Grid::new(&cells, 4, 3).unwrap();
        let start = Point::new(2, 1);
        let preds = astar(&g, start, Point::new(0, 0));
        assert!(!preds.is_empty());
        assert_eq!(preds.parent(g.index_of(start)), None);
    }

    #[test]
    fn straight_corridor_expands_only_the_corridor() {
        // Heuristic is exact along an open row, so nothing off the row
        // gets expanded.
        let cells = [1; 10];
        let g = Grid::new(&cells, 10, 1).unwrap();
        let (preds, stats) = run(&g, Point::new(0, 0), Point::new(9, 0));
        assert!(stats.found);
        assert_eq!(stats.expanded, 9);
        assert_eq!(chain(&g, &preds, Point::new(9, 0)).len(), 10);
    }

    #[test]
    fn detour_around_wall() {
        // . # .
        // . # .
        // . . .
        let cells = [1, 0, 1, 1, 0, 1, 1, 1, 1];
        let g = Grid::new(&cells, 3, 3).unwrap();
        let preds = astar(&g, Point::new(0, 0), Point::new(2, 0));
        let path = chain(&g, &preds, Point::new(2, 0));
        assert_eq!(path.len(), 7);
        for w in path.windows(2) {
            assert!(w[0].is_adjacent_4(w[1]));
            assert!(g.is_passable(w[1]));
        }
    }

    #[test]
    fn early_exit_leaves_far_cells_unreached() {
        let cells = [1; 25];
        let g = Grid::new(&cells, 5, 5).unwrap();
        let preds = astar(&g, Point::new(0, 0), Point::new(1, 0));
        assert_eq!(preds.parent(g.index_of(Point::new(4, 4))), None);
    }
}
