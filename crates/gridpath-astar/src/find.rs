//! Validating entry points wrapping the search core.

use gridpath_core::Point;
use log::debug;

use crate::grid::Grid;
use crate::{BadInput, path, search};

/// Length reported by [`find_path`] when the target cannot be reached.
pub const NO_PATH: i32 = -1;

/// Find the shortest path from `(start_x, start_y)` to `(target_x, target_y)`
/// on a `width` x `height` row-major passability `map`.
///
/// Returns the number of moves, `0` when start and target coincide, or
/// [`NO_PATH`] when the target is unreachable. If the length is at most
/// `out_capacity`, `out[..length]` receives the row-major index of every
/// step after the start, ending with the target. Otherwise (and for `0` or
/// [`NO_PATH`]) `out` is left untouched. A zero capacity is valid and only
/// reports the length.
///
/// Input is checked in this order, failing on the first violation before
/// anything is searched: width, height, start, target, `out_capacity >= 0`,
/// `map.len() == width * height`, `out_capacity <= out.len()`, then start
/// and target passability.
#[allow(clippy::too_many_arguments)]
pub fn find_path(
    start_x: i32,
    start_y: i32,
    target_x: i32,
    target_y: i32,
    map: &[u8],
    width: i32,
    height: i32,
    out: &mut [i32],
    out_capacity: i32,
) -> Result<i32, BadInput> {
    let start = Point::new(start_x, start_y);
    let target = Point::new(target_x, target_y);

    let (grid, capacity) = validate(start, target, map, width, height, out.len(), out_capacity)
        .inspect_err(|e| debug!("find_path: rejected input: {e}"))?;

    if start == target {
        return Ok(0);
    }

    let preds = search::astar(&grid, start, target);
    let len = path::write_indices(&grid, &preds, start, target, &mut out[..capacity]);
    Ok(len.map_or(NO_PATH, |len| len as i32))
}

/// Find the shortest path from `start` to `target` as a list of points.
///
/// The path excludes `start` and includes `target`; it is empty when the two
/// coincide and `None` when the target is unreachable.
pub fn shortest_path(
    grid: &Grid<'_>,
    start: Point,
    target: Point,
) -> Result<Option<Vec<Point>>, BadInput> {
    check_endpoints(grid, start, target)
        .inspect_err(|e| debug!("shortest_path: rejected input: {e}"))?;

    if start == target {
        return Ok(Some(Vec::new()));
    }

    let preds = search::astar(grid, start, target);
    Ok(path::points(grid, &preds, start, target))
}

fn validate<'a>(
    start: Point,
    target: Point,
    map: &'a [u8],
    width: i32,
    height: i32,
    out_len: usize,
    out_capacity: i32,
) -> Result<(Grid<'a>, usize), BadInput> {
    if width < 1 {
        return Err(BadInput::WidthTooSmall(width));
    }
    if height < 1 {
        return Err(BadInput::HeightTooSmall(height));
    }
    let within = |p: Point| p.x >= 0 && p.x < width && p.y >= 0 && p.y < height;
    if !within(start) {
        return Err(BadInput::StartOutOfBounds {
            point: start,
            width,
            height,
        });
    }
    if !within(target) {
        return Err(BadInput::TargetOutOfBounds {
            point: target,
            width,
            height,
        });
    }
    if out_capacity < 0 {
        return Err(BadInput::NegativeCapacity(out_capacity));
    }

    let grid = Grid::new(map, width, height)?;

    let capacity = out_capacity as usize;
    if capacity > out_len {
        return Err(BadInput::CapacityExceedsBuffer {
            capacity: out_capacity,
            len: out_len,
        });
    }

    check_endpoints(&grid, start, target)?;
    Ok((grid, capacity))
}

fn check_endpoints(grid: &Grid<'_>, start: Point, target: Point) -> Result<(), BadInput> {
    let (width, height) = (grid.width(), grid.height());
    if !grid.in_bounds(start) {
        return Err(BadInput::StartOutOfBounds {
            point: start,
            width,
            height,
        });
    }
    if !grid.in_bounds(target) {
        return Err(BadInput::TargetOutOfBounds {
            point: target,
            width,
            height,
        });
    }
    if !grid.is_passable(start) {
        return Err(BadInput::StartBlocked(start));
    }
    if !grid.is_passable(target) {
        return Err(BadInput::TargetBlocked(target));
    }
    Ok(())
}
