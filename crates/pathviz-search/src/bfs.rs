use std::collections::VecDeque;

use pathviz_core::{Coord, Grid};

/// Breadth-first search from `start` toward `finish`.
///
/// Each cell is discovered at most once: first discovery assigns its
/// distance and `previous` back-reference, marks it visited, and appends it
/// to the returned visitation sequence. Finalization order is therefore
/// enqueue order. The search stops early once the finish cell is dequeued;
/// walls and out-of-range neighbours are never expanded.
pub fn bfs(grid: &mut Grid, start: Coord, finish: Coord) -> Vec<Coord> {
    let mut order = Vec::new();
    let Some(cell) = grid.cell_mut(start) else {
        return order;
    };
    cell.distance = 0;
    cell.visited = true;
    order.push(start);

    let mut frontier: VecDeque<Coord> = VecDeque::new();
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        if current == finish {
            break;
        }
        let dist = match grid.cell(current) {
            Some(c) => c.distance,
            None => continue,
        };
        for n in current.neighbors4() {
            let Some(ncell) = grid.cell_mut(n) else {
                continue;
            };
            if ncell.wall || ncell.visited {
                continue;
            }
            ncell.distance = dist + 1;
            ncell.previous = Some(current);
            ncell.visited = true;
            order.push(n);
            frontier.push_back(n);
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manhattan;
    use pathviz_core::{Extent, UNREACHABLE};

    fn open_grid(rows: i32, cols: i32, start: Coord, finish: Coord) -> Grid {
        Grid::new(Extent::new(rows, cols), start, finish).unwrap()
    }

    #[test]
    fn straight_row_distance_is_manhattan() {
        let start = Coord::new(10, 5);
        let finish = Coord::new(10, 45);
        let mut g = open_grid(27, 64, start, finish);
        let order = bfs(&mut g, start, finish);

        assert_eq!(order.first(), Some(&start));
        assert_eq!(order.last(), Some(&finish));
        assert_eq!(g.cell(finish).unwrap().distance, 40);
        assert_eq!(g.cell(finish).unwrap().distance, manhattan(start, finish));
    }

    #[test]
    fn discovery_order_is_level_order() {
        let start = Coord::new(1, 1);
        let finish = Coord::new(2, 2);
        let mut g = open_grid(3, 3, start, finish);
        let order = bfs(&mut g, start, finish);
        assert_eq!(
            order,
            vec![
                Coord::new(1, 1),
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(2, 0),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn walls_are_never_entered() {
        let start = Coord::new(1, 0);
        let finish = Coord::new(1, 4);
        let mut g = open_grid(3, 5, start, finish);
        // Vertical barrier at column 2.
        for row in 0..3 {
            g.set_wall(Coord::new(row, 2), true).unwrap();
        }
        let order = bfs(&mut g, start, finish);
        assert!(order.iter().all(|&at| !g.cell(at).unwrap().wall));
        assert!(!order.contains(&finish));
        assert_eq!(g.cell(finish).unwrap().distance, UNREACHABLE);
    }

    #[test]
    fn barrier_with_gap_forces_detour() {
        let start = Coord::new(10, 5);
        let finish = Coord::new(10, 45);
        let mut g = open_grid(27, 64, start, finish);
        // Full-height wall at column 25, single gap at row 0.
        for row in 1..27 {
            g.set_wall(Coord::new(row, 25), true).unwrap();
        }
        let order = bfs(&mut g, start, finish);
        assert_eq!(order.last(), Some(&finish));
        // Direct horizontal distance plus the up-and-back vertical detour.
        assert_eq!(g.cell(finish).unwrap().distance, 40 + 2 * 10);
    }

    #[test]
    fn enclosed_start_reaches_nothing_else() {
        let start = Coord::new(5, 5);
        let finish = Coord::new(10, 10);
        let mut g = open_grid(27, 64, start, finish);
        for n in start.neighbors4() {
            g.set_wall(n, true).unwrap();
        }
        let order = bfs(&mut g, start, finish);
        assert_eq!(order, vec![start]);
    }
}
