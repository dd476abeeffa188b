use pathviz_core::{Coord, Grid};

/// Walk `previous` back-references from `finish` and return the chain in
/// start→finish order.
///
/// If the finish cell was never reached the chain does not originate at the
/// start cell (for an untouched finish it is just `[finish]`). Callers must
/// treat any result whose first element is not the start as "no path
/// found", not as a route.
pub fn reconstruct_path(grid: &Grid, finish: Coord) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut current = Some(finish);
    while let Some(at) = current {
        path.push(at);
        // The searches never produce cycles; this bounds a malformed grid.
        if path.len() > grid.extent().len() {
            break;
        }
        current = grid.cell(at).and_then(|c| c.previous);
    }
    path.reverse();
    path
}
