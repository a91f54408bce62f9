//! **gridpath-core** — core types for grid pathfinding.
//!
//! This crate provides the geometry primitive ([`Point`]) shared by the
//! *gridpath* crates, and an owned passability map ([`PassMap`]) that can be
//! parsed from ASCII art.

pub mod geom;
pub mod passmap;

pub use geom::Point;
pub use passmap::{Markers, PassMap, PassMapError};
