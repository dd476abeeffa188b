use std::cmp::Reverse;
use std::collections::BinaryHeap;

use pathviz_core::{Coord, Grid};

/// Dijkstra's algorithm on the unit-weight grid graph.
///
/// The open set is a min-heap keyed by `(distance, row-major index)`, which
/// finalizes equal-distance candidates in row-major scan order — the same
/// order a full re-sort of the remaining cells would produce. The popped
/// cell is finalized, appended to the visitation sequence, and expanded;
/// the search returns as soon as the finish cell is finalized. Walls are
/// neither finalized nor relaxed, and cells left at unbounded distance
/// never enter the heap, so unreachable cells are excluded from the output.
pub fn dijkstra(grid: &mut Grid, start: Coord, finish: Coord) -> Vec<Coord> {
    let mut order = Vec::new();
    let extent = grid.extent();
    let Some(start_idx) = extent.index(start) else {
        return order;
    };
    if let Some(cell) = grid.cell_mut(start) {
        cell.distance = 0;
    }

    let mut open: BinaryHeap<Reverse<(i32, usize)>> = BinaryHeap::new();
    open.push(Reverse((0, start_idx)));

    while let Some(Reverse((dist, idx))) = open.pop() {
        let current = extent.coord(idx);
        {
            let Some(cell) = grid.cell_mut(current) else {
                continue;
            };
            // Stale heap entry: the cell was finalized (or relaxed further)
            // after this entry was pushed.
            if cell.visited || dist > cell.distance {
                continue;
            }
            cell.visited = true;
        }
        order.push(current);
        if current == finish {
            return order;
        }

        for n in current.neighbors4() {
            let Some(nidx) = extent.index(n) else {
                continue;
            };
            let Some(ncell) = grid.cell_mut(n) else {
                continue;
            };
            if ncell.wall || ncell.visited {
                continue;
            }
            let tentative = dist + 1;
            if tentative < ncell.distance {
                ncell.distance = tentative;
                ncell.previous = Some(current);
                open.push(Reverse((tentative, nidx)));
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bfs, manhattan};
    use pathviz_core::{Extent, UNREACHABLE};

    fn open_grid(rows: i32, cols: i32, start: Coord, finish: Coord) -> Grid {
        Grid::new(Extent::new(rows, cols), start, finish).unwrap()
    }

    #[test]
    fn ties_finalize_in_row_major_order() {
        let start = Coord::new(1, 1);
        let finish = Coord::new(2, 2);
        let mut g = open_grid(3, 3, start, finish);
        let order = dijkstra(&mut g, start, finish);
        assert_eq!(
            order,
            vec![
                // distance 0
                Coord::new(1, 1),
                // distance 1, row-major
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 1),
                // distance 2, row-major, stopping at the finish
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(2, 0),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn straight_row_distance_is_manhattan() {
        let start = Coord::new(10, 5);
        let finish = Coord::new(10, 45);
        let mut g = open_grid(27, 64, start, finish);
        let order = dijkstra(&mut g, start, finish);
        assert_eq!(order.last(), Some(&finish));
        assert_eq!(g.cell(finish).unwrap().distance, manhattan(start, finish));
    }

    #[test]
    fn agrees_with_bfs_on_every_distance() {
        let start = Coord::new(3, 1);
        let finish = Coord::new(8, 17);
        let walls = [
            Coord::new(2, 6),
            Coord::new(3, 6),
            Coord::new(4, 6),
            Coord::new(5, 6),
            Coord::new(6, 12),
            Coord::new(7, 12),
            Coord::new(8, 12),
            Coord::new(9, 12),
        ];

        let mut on_bfs = open_grid(12, 20, start, finish);
        let mut on_dijkstra = open_grid(12, 20, start, finish);
        for &w in &walls {
            on_bfs.set_wall(w, true).unwrap();
            on_dijkstra.set_wall(w, true).unwrap();
        }
        bfs(&mut on_bfs, start, finish);
        dijkstra(&mut on_dijkstra, start, finish);

        // BFS runs to the finish; every distance it settled must match
        // Dijkstra's. (Dijkstra stops at the finish too, so compare where
        // both finalized.)
        for at in on_bfs.extent() {
            let b = on_bfs.cell(at).unwrap();
            let d = on_dijkstra.cell(at).unwrap();
            if b.visited && d.visited {
                assert_eq!(b.distance, d.distance, "distance mismatch at {at}");
            }
        }
        assert_eq!(
            on_bfs.cell(finish).unwrap().distance,
            on_dijkstra.cell(finish).unwrap().distance
        );
    }

    #[test]
    fn unreachable_cells_never_appear() {
        let start = Coord::new(1, 1);
        let finish = Coord::new(1, 4);
        let mut g = open_grid(3, 6, start, finish);
        // Seal off everything right of column 2.
        for row in 0..3 {
            g.set_wall(Coord::new(row, 2), true).unwrap();
        }
        let order = dijkstra(&mut g, start, finish);
        assert!(!order.contains(&finish));
        assert!(order.iter().all(|&at| at.col < 2));
        assert_eq!(g.cell(finish).unwrap().distance, UNREACHABLE);
    }

    #[test]
    fn stops_immediately_when_finish_is_finalized() {
        let start = Coord::new(0, 0);
        let finish = Coord::new(0, 1);
        let mut g = open_grid(4, 4, start, finish);
        let order = dijkstra(&mut g, start, finish);
        assert_eq!(order, vec![start, finish]);
    }
}
