//! The [`Grid`] type — an immutable-extent board of [`Cell`]s plus the
//! start/finish coordinates.
//!
//! The grid is owned exclusively by its session controller. Search runs
//! operate on an owned clone (copy-on-write snapshotting), so an in-flight
//! run can never alias the live, editable grid.

use crate::cell::Cell;
use crate::error::Error;
use crate::geom::{Coord, Extent};
use crate::state::CellState;

/// A 2-D board of pathfinding cells with exactly one start and one finish.
///
/// Invariants upheld by every operation:
/// - cell storage is row-major and matches the extent,
/// - start ≠ finish, both inside the extent,
/// - neither endpoint is ever a wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    extent: Extent,
    cells: Vec<Cell>,
    start: Coord,
    finish: Coord,
}

impl Grid {
    /// Create a grid of default cells with the given endpoints.
    ///
    /// Fails with [`Error::OutOfBounds`] if either endpoint lies outside the
    /// extent. The endpoints must be distinct.
    pub fn new(extent: Extent, start: Coord, finish: Coord) -> Result<Self, Error> {
        for at in [start, finish] {
            if !extent.contains(at) {
                return Err(Error::OutOfBounds { at });
            }
        }
        debug_assert!(start != finish, "start and finish must be distinct");
        Ok(Self {
            extent,
            cells: vec![Cell::default(); extent.len()],
            start,
            finish,
        })
    }

    /// The grid dimensions.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// The start coordinate.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The finish coordinate.
    #[inline]
    pub fn finish(&self) -> Coord {
        self.finish
    }

    /// Whether `at` lies inside the grid.
    #[inline]
    pub fn contains(&self, at: Coord) -> bool {
        self.extent.contains(at)
    }

    /// Whether `at` is the start coordinate.
    #[inline]
    pub fn is_start(&self, at: Coord) -> bool {
        at == self.start
    }

    /// Whether `at` is the finish coordinate.
    #[inline]
    pub fn is_finish(&self, at: Coord) -> bool {
        at == self.finish
    }

    /// The cell at `at`, or `None` outside the extent.
    #[inline]
    pub fn cell(&self, at: Coord) -> Option<&Cell> {
        self.extent.index(at).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `at`, or `None` outside the extent.
    #[inline]
    pub fn cell_mut(&mut self, at: Coord) -> Option<&mut Cell> {
        self.extent.index(at).map(move |i| &mut self.cells[i])
    }

    /// Whether `at` is inside the grid and not a wall.
    #[inline]
    pub fn is_open(&self, at: Coord) -> bool {
        self.cell(at).is_some_and(|c| !c.wall)
    }

    /// Flip the wall flag at `at`, returning the new state.
    ///
    /// Toggling the start or finish coordinate is a silent no-op (the
    /// endpoints are never walls); out-of-range coordinates fail with
    /// [`Error::OutOfBounds`].
    pub fn toggle_wall(&mut self, at: Coord) -> Result<bool, Error> {
        let Some(idx) = self.extent.index(at) else {
            return Err(Error::OutOfBounds { at });
        };
        if at == self.start || at == self.finish {
            return Ok(false);
        }
        let cell = &mut self.cells[idx];
        cell.wall = !cell.wall;
        Ok(cell.wall)
    }

    /// Set the wall flag at `at` outright. Same endpoint/bounds policy as
    /// [`toggle_wall`](Self::toggle_wall).
    pub fn set_wall(&mut self, at: Coord, wall: bool) -> Result<(), Error> {
        let Some(idx) = self.extent.index(at) else {
            return Err(Error::OutOfBounds { at });
        };
        if at == self.start || at == self.finish {
            return Ok(());
        }
        self.cells[idx].wall = wall;
        Ok(())
    }

    /// Return a fresh grid with all run state cleared and the wall layout
    /// preserved, start/finish flags recomputed from the current
    /// coordinates.
    ///
    /// Returns a new grid rather than mutating in place: a caller still
    /// holding the prior grid (an in-flight playback, for instance) is
    /// unaffected.
    pub fn reset_run_state(&self) -> Grid {
        let mut next = self.clone();
        for cell in &mut next.cells {
            cell.clear_run_state();
        }
        next
    }

    /// The visual read model for one cell.
    ///
    /// Endpoint markers win over playback markers; walls cannot carry
    /// playback markers at all. Out-of-range coordinates read as
    /// [`CellState::Default`].
    pub fn state_at(&self, at: Coord) -> CellState {
        if at == self.start {
            return CellState::Start;
        }
        if at == self.finish {
            return CellState::Finish;
        }
        match self.cell(at) {
            Some(c) if c.wall => CellState::Wall,
            Some(c) if c.on_path => CellState::ShortestPath,
            Some(c) if c.visited => CellState::Visited,
            _ => CellState::Default,
        }
    }

    /// Row-major iterator over `(Coord, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.extent.iter().zip(self.cells.iter())
    }
}
