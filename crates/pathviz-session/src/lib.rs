//! **pathviz-session** — the interactive controller of the pathviz
//! visualizer.
//!
//! A [`Session`] owns the editable grid, translates raw pointer input into
//! grid mutations according to the current edit [`Mode`], and plays back
//! completed search runs as a deadline-ordered stream of per-cell visual
//! events. Playback runs on a virtual clock: callers feed elapsed
//! milliseconds into [`Session::advance`], which makes every timing
//! property deterministic under test.

pub mod mapgen;
pub mod mode;
pub mod schedule;
pub mod session;

pub use mapgen::{DEFAULT_WALL_FILL, scatter_walls};
pub use mode::Mode;
pub use schedule::TimedQueue;
pub use session::{Session, SessionConfig, PATH_STEP_MS, VISIT_STEP_MS};
