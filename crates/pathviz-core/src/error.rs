//! Error taxonomy shared across the workspace.
//!
//! All three conditions are recoverable: the session layer absorbs them as
//! no-ops so a running visualizer never crashes on bad input.

use thiserror::Error;

use crate::geom::Coord;

/// A recoverable pathviz error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A coordinate outside the grid extent reached an API boundary.
    #[error("coordinate {at} is outside the grid")]
    OutOfBounds { at: Coord },
    /// An algorithm identifier the run dispatcher does not recognize.
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
    /// A run was requested while playback is still in progress.
    #[error("a visualization run is already in progress")]
    AlreadyRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = Error::OutOfBounds {
            at: Coord::new(30, 2),
        };
        assert_eq!(err.to_string(), "coordinate (30, 2) is outside the grid");
        assert_eq!(
            Error::UnknownAlgorithm("astar".into()).to_string(),
            "unknown algorithm \"astar\""
        );
    }
}
