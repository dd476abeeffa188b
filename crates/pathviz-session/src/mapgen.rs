//! Random obstacle fields.

use pathviz_core::Grid;
use rand::{Rng, RngExt};

/// Default wall density for scattered obstacle fields.
pub const DEFAULT_WALL_FILL: f64 = 0.3;

/// Re-roll every cell's wall flag with probability `fill`, leaving the
/// start and finish cells open. `fill` is clamped to `[0, 1]`.
pub fn scatter_walls<R: Rng>(grid: &mut Grid, rng: &mut R, fill: f64) {
    let fill = fill.clamp(0.0, 1.0);
    for at in grid.extent() {
        if grid.is_start(at) || grid.is_finish(at) {
            continue;
        }
        let wall = rng.random_bool(fill);
        grid.set_wall(at, wall).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{Coord, Extent};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid() -> Grid {
        Grid::new(Extent::new(8, 8), Coord::new(1, 1), Coord::new(6, 6)).unwrap()
    }

    #[test]
    fn zero_fill_leaves_the_grid_open() {
        let mut g = grid();
        let mut rng = StdRng::seed_from_u64(1);
        scatter_walls(&mut g, &mut rng, 0.0);
        assert!(g.iter().all(|(_, c)| !c.wall));
    }

    #[test]
    fn full_fill_walls_everything_but_the_endpoints() {
        let mut g = grid();
        let mut rng = StdRng::seed_from_u64(2);
        scatter_walls(&mut g, &mut rng, 1.0);
        for (at, cell) in g.iter() {
            if g.is_start(at) || g.is_finish(at) {
                assert!(!cell.wall);
            } else {
                assert!(cell.wall, "expected a wall at {at}");
            }
        }
    }

    #[test]
    fn rerolls_replace_the_previous_field() {
        let mut g = grid();
        let mut rng = StdRng::seed_from_u64(3);
        scatter_walls(&mut g, &mut rng, 1.0);
        scatter_walls(&mut g, &mut rng, 0.0);
        assert!(g.iter().all(|(_, c)| !c.wall));
    }
}
