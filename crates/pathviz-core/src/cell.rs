//! The [`Cell`] type — one grid position's pathfinding attributes.

use crate::geom::Coord;

/// Sentinel distance for a cell no search has discovered yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// Pathfinding state carried by every grid position.
///
/// Start/finish designation is not stored here: the grid owns the two
/// endpoint coordinates and derives those flags by comparison, so the
/// "exactly one of each" invariant cannot be violated cell-by-cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Impassable. Never true on the start or finish coordinate.
    pub wall: bool,
    /// Tentative cost from the start cell, [`UNREACHABLE`] until discovered.
    pub distance: i32,
    /// Set permanently once a search finalizes the cell.
    pub visited: bool,
    /// Back-reference to the predecessor on the best known path.
    pub previous: Option<Coord>,
    /// Set as shortest-path playback marks the cell.
    pub on_path: bool,
}

impl Cell {
    /// Reset everything a search run touches, keeping the wall flag.
    #[inline]
    pub fn clear_run_state(&mut self) {
        self.distance = UNREACHABLE;
        self.visited = false;
        self.previous = None;
        self.on_path = false;
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            wall: false,
            distance: UNREACHABLE,
            visited: false,
            previous: None,
            on_path: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_undiscovered() {
        let c = Cell::default();
        assert!(!c.wall);
        assert_eq!(c.distance, UNREACHABLE);
        assert!(!c.visited);
        assert_eq!(c.previous, None);
        assert!(!c.on_path);
    }

    #[test]
    fn clear_run_state_keeps_wall() {
        let mut c = Cell {
            wall: true,
            distance: 3,
            visited: true,
            previous: Some(Coord::new(1, 1)),
            on_path: true,
        };
        c.clear_run_state();
        assert!(c.wall);
        assert_eq!(c.distance, UNREACHABLE);
        assert!(!c.visited);
        assert_eq!(c.previous, None);
        assert!(!c.on_path);
    }
}
