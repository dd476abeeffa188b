//! The externally observable visual state of cells, and the per-cell
//! events the animation scheduler emits.

use crate::geom::Coord;

/// Visual state of one cell, as the rendering layer sees it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Default,
    Visited,
    ShortestPath,
    Start,
    Finish,
    Wall,
}

/// A single visual-state transition for one cell.
///
/// Playback emits these in deadline order; the rendering layer applies them
/// however it likes (the grid read model is updated before emission, so a
/// full redraw from [`Grid::state_at`](crate::Grid::state_at) is always
/// consistent with the event stream).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellEvent {
    pub at: Coord,
    pub state: CellState,
}
