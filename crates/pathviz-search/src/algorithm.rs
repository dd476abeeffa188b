//! Algorithm selection and dispatch.

use std::fmt;
use std::str::FromStr;

use pathviz_core::{Coord, Error, Grid};

use crate::{bfs, dijkstra};

/// The search algorithm driving a visualization run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dijkstra,
}

impl Algorithm {
    /// The external identifier used by selection controls.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
        }
    }

    /// Run the algorithm on `grid`, returning the visitation sequence.
    pub fn run(self, grid: &mut Grid, start: Coord, finish: Coord) -> Vec<Coord> {
        match self {
            Self::Bfs => bfs(grid, start, finish),
            Self::Dijkstra => dijkstra(grid, start, finish),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "bfs" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            other => Err(Error::UnknownAlgorithm(other.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
