//! A* shortest paths on 4-connected passability grids.
//!
//! The crate is split into a thin validating boundary and a
//! precondition-trusting core:
//!
//! - [`find_path`] / [`shortest_path`] validate their input and report
//!   [`BadInput`] on failure.
//! - [`Grid`] is a borrowed, read-only view over a row-major passability
//!   buffer.
//! - [`search::astar`] runs A* over a [`Grid`] using a [`Frontier`] and
//!   returns a [`PredecessorMap`].
//! - [`path::write_indices`] and [`path::points`] turn that map into output.
//!
//! Every move costs 1 and the heuristic is the Manhattan distance, so the
//! first time the target leaves the frontier its cost is optimal.

mod error;
mod find;
pub mod frontier;
pub mod grid;
pub mod path;
pub mod search;

pub use error::BadInput;
pub use find::{NO_PATH, find_path, shortest_path};
pub use frontier::Frontier;
pub use gridpath_core::Point;
pub use grid::{Grid, manhattan};
pub use search::{PredecessorMap, SearchStats};
