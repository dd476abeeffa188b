//! The [`Session`] controller: pointer input, run orchestration, and
//! playback scheduling over a virtual clock.

use pathviz_core::{CellEvent, CellState, Coord, Error, Extent, Grid};
use pathviz_search::{Algorithm, reconstruct_path};
use rand::Rng;

use crate::mapgen;
use crate::mode::Mode;
use crate::schedule::TimedQueue;

/// Delay between consecutive visitation marks, in virtual milliseconds.
pub const VISIT_STEP_MS: u64 = 10;
/// Delay between consecutive shortest-path marks, in virtual milliseconds.
pub const PATH_STEP_MS: u64 = 50;

/// A scheduled playback task.
#[derive(Copy, Clone, Debug)]
enum Playback {
    Mark { at: Coord, state: CellState },
    Done,
}

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for creating a [`Session`].
#[derive(Copy, Clone, Debug)]
pub struct SessionConfig {
    pub extent: Extent,
    pub start: Coord,
    pub finish: Coord,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            extent: Extent::DEFAULT,
            start: Coord::new(10, 5),
            finish: Coord::new(10, 45),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The interactive visualizer session.
///
/// Owns the live grid exclusively. Search runs operate on an owned snapshot
/// and hand back coordinate sequences, so a mutation issued after a run
/// starts can never corrupt the in-flight result. Playback is cooperative:
/// [`advance`](Session::advance) drains every task due at the given virtual
/// time and returns the per-cell events for the rendering layer.
pub struct Session {
    grid: Grid,
    mode: Mode,
    dragging: bool,
    running: bool,
    now_ms: u64,
    queue: TimedQueue<Playback>,
}

impl Session {
    /// Create a session from a configuration.
    pub fn new(config: SessionConfig) -> Result<Self, Error> {
        Ok(Self {
            grid: Grid::new(config.extent, config.start, config.finish)?,
            mode: Mode::default(),
            dragging: false,
            running: false,
            now_ms: 0,
            queue: TimedQueue::new(),
        })
    }

    /// The live grid read model.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current edit mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the edit mode. Never happens implicitly.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Whether playback is in progress (pointer input is ignored).
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a wall-painting drag is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Deadline of the next pending playback task, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.next_due()
    }

    // -----------------------------------------------------------------------
    // Pointer input
    // -----------------------------------------------------------------------

    /// Pointer button pressed over `at`.
    pub fn pointer_down(&mut self, at: Coord) {
        if self.running {
            log::trace!("pointer-down at {at} ignored: playback in progress");
            return;
        }
        if !self.grid.contains(at) {
            log::debug!("pointer-down ignored: {}", Error::OutOfBounds { at });
            return;
        }
        match self.mode {
            Mode::PlacingStart => {
                if at == self.grid.finish() {
                    log::debug!("refusing to place the start on the finish cell");
                    return;
                }
                self.rebuild(at, self.grid.finish());
            }
            Mode::PlacingEnd => {
                if at == self.grid.start() {
                    log::debug!("refusing to place the finish on the start cell");
                    return;
                }
                self.rebuild(self.grid.start(), at);
            }
            Mode::DrawingWalls => {
                if let Err(err) = self.grid.toggle_wall(at) {
                    log::debug!("wall toggle failed: {err}");
                }
                self.dragging = true;
            }
        }
    }

    /// Pointer entered `at` with the button possibly held.
    ///
    /// Paints walls while dragging in [`Mode::DrawingWalls`]: each cell
    /// crossed is toggled once per entry.
    pub fn pointer_enter(&mut self, at: Coord) {
        if self.running || !self.dragging || self.mode != Mode::DrawingWalls {
            return;
        }
        if let Err(err) = self.grid.toggle_wall(at) {
            log::debug!("wall toggle failed: {err}");
        }
    }

    /// Pointer button released (anywhere).
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    // -----------------------------------------------------------------------
    // Runs and playback
    // -----------------------------------------------------------------------

    /// Run a search and schedule its playback. Returns immediately.
    ///
    /// A silent no-op (logged at debug) when playback is already running or
    /// the algorithm identifier is unknown.
    pub fn run_visualization(&mut self, algorithm: &str) {
        if self.running {
            log::debug!("run request ignored: {}", Error::AlreadyRunning);
            return;
        }
        let algorithm: Algorithm = match algorithm.parse() {
            Ok(algorithm) => algorithm,
            Err(err) => {
                log::debug!("run request ignored: {err}");
                return;
            }
        };

        let start = self.grid.start();
        let finish = self.grid.finish();
        let fresh = self.grid.reset_run_state();
        let mut working = fresh.clone();
        self.grid = fresh;

        let visited = algorithm.run(&mut working, start, finish);
        let mut path = reconstruct_path(&working, finish);
        if path.first() != Some(&start) {
            // No route; visitation still plays back.
            path.clear();
        }
        log::debug!(
            "{algorithm}: finalized {} cells, path length {}",
            visited.len(),
            path.len()
        );

        self.schedule_playback(&visited, &path, start, finish);
        self.running = true;
    }

    /// Advance the virtual clock to `now_ms`, apply every due playback task
    /// to the grid, and return the emitted per-cell events in order.
    ///
    /// The clock never moves backwards.
    pub fn advance(&mut self, now_ms: u64) -> Vec<CellEvent> {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
        let mut events = Vec::new();
        while let Some(task) = self.queue.pop_due(self.now_ms) {
            match task {
                Playback::Mark { at, state } => {
                    if let Some(cell) = self.grid.cell_mut(at) {
                        match state {
                            CellState::Visited => cell.visited = true,
                            CellState::ShortestPath => cell.on_path = true,
                            _ => {}
                        }
                    }
                    events.push(CellEvent { at, state });
                }
                Playback::Done => self.running = false,
            }
        }
        events
    }

    /// Cancel any running playback and reinitialize the grid, walls
    /// included, keeping the current endpoints.
    pub fn reset_grid(&mut self) {
        self.queue.clear();
        self.running = false;
        self.dragging = false;
        self.rebuild(self.grid.start(), self.grid.finish());
    }

    /// Scatter a random obstacle field (see [`mapgen::scatter_walls`]).
    /// Ignored while playback is running.
    pub fn scatter_walls<R: Rng>(&mut self, rng: &mut R, fill: f64) {
        if self.running {
            log::trace!("scatter ignored: playback in progress");
            return;
        }
        mapgen::scatter_walls(&mut self.grid, rng, fill);
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Replace the grid with a freshly allocated one, same extent.
    fn rebuild(&mut self, start: Coord, finish: Coord) {
        match Grid::new(self.grid.extent(), start, finish) {
            Ok(grid) => self.grid = grid,
            Err(err) => log::debug!("grid rebuild rejected: {err}"),
        }
    }

    /// Queue the playback of one completed run.
    ///
    /// Visitation marks land at `i × VISIT_STEP_MS`, path marks strictly
    /// after all of them at `PATH_STEP_MS` spacing, and a completion task
    /// one trailing `PATH_STEP_MS` after the final path slot. Start and
    /// finish keep their own markers: their slots count toward the timing
    /// but emit nothing.
    fn schedule_playback(&mut self, visited: &[Coord], path: &[Coord], start: Coord, finish: Coord) {
        let origin = self.now_ms;
        for (i, &at) in visited.iter().enumerate() {
            if at == start || at == finish {
                continue;
            }
            self.queue.push(
                Playback::Mark {
                    at,
                    state: CellState::Visited,
                },
                origin + VISIT_STEP_MS * i as u64,
            );
        }

        let path_origin = origin + VISIT_STEP_MS * visited.len() as u64;
        for (i, &at) in path.iter().enumerate() {
            if at == start || at == finish {
                continue;
            }
            self.queue.push(
                Playback::Mark {
                    at,
                    state: CellState::ShortestPath,
                },
                path_origin + PATH_STEP_MS * i as u64,
            );
        }

        // Always scheduled, so the running flag cannot leak when no route
        // exists.
        let done_at = path_origin + PATH_STEP_MS * path.len().max(1) as u64;
        self.queue.push(Playback::Done, done_at);
    }
}
