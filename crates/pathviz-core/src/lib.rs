//! **pathviz-core** — Grid model and shared types for the pathviz
//! shortest-path visualizer.
//!
//! This crate provides the foundational types used across the *pathviz*
//! workspace: grid coordinates and extents, the per-cell pathfinding record,
//! the [`Grid`] container with its wall/start/finish invariants, the
//! externally observable [`CellState`] read model, and the error taxonomy.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod state;

pub use cell::{Cell, UNREACHABLE};
pub use error::Error;
pub use geom::{Coord, Extent};
pub use grid::Grid;
pub use state::{CellEvent, CellState};
