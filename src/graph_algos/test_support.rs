//! Shared fixtures for the search tests.

use crate::geometry::Position;
use crate::grid::{Cell, DistanceMap, Grid, UNVISITED};
use rand::Rng;


pub(crate) fn grid_from(codes: &[Vec<i32>]) -> Grid {
    Grid::from_codes(codes).unwrap()
}

/// Start and goal of a grid that has exactly one of each
pub(crate) fn endpoints(grid: &Grid) -> (Position, Position) {
    let start = grid.positions_of(Cell::Start).next().unwrap();
    let goal = grid.positions_of(Cell::Goal).next().unwrap();
    (start, goal)
}

/// Random grid with one start, one goal and obstacles at the given density
pub(crate) fn random_grid<R: Rng>(rng: &mut R, rows: usize, cols: usize, density: f64) -> Grid {
    let mut codes: Vec<Vec<i32>> = (0..rows)
        .map(|_| (0..cols).map(|_| if rng.random_bool(density) { 1 } else { 0 }).collect())
        .collect();

    let start = (rng.random_range(0..rows), rng.random_range(0..cols));
    let mut goal = start;
    while goal == start {
        goal = (rng.random_range(0..rows), rng.random_range(0..cols));
    }
    codes[start.0][start.1] = 2;
    codes[goal.0][goal.1] = 3;

    grid_from(&codes)
}

/// Distances by repeated relaxation, independent of any queue discipline
/// With `obstacles_block` obstacles are never entered
pub(crate) fn reference_distances(grid: &Grid, sources: &[Position], obstacles_block: bool) -> DistanceMap {
    let mut distances = DistanceMap::for_grid(grid);
    for &source in sources {
        distances.set(source, 0);
    }

    let mut changed = true;
    while changed {
        changed = false;
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let pos = Position::new(row, col);
                if obstacles_block && grid.is_obstacle(pos) {
                    continue;
                }
                let best = grid.neighbors(pos)
                    .map(|n| distances.get(n))
                    .filter(|&d| d != UNVISITED)
                    .min();
                if let Some(best) = best {
                    let current = distances.get(pos);
                    if current == UNVISITED || best + 1 < current {
                        distances.set(pos, best + 1);
                        changed = true;
                    }
                }
            }
        }
    }
    distances
}

/// Path runs from start to goal in single 4-connected steps over passable cells
/// and never visits a cell twice
pub(crate) fn assert_valid_path(grid: &Grid, path: &[Position], start: Position, goal: Position) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for step in path.windows(2) {
        assert_eq!(step[0].manhattan(&step[1]), 1, "non adjacent step {:?} -> {:?}", step[0], step[1]);
    }
    for pos in path {
        assert!(!grid.is_obstacle(*pos), "path crosses obstacle at {pos:?}");
    }
    let mut seen = path.to_vec();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), path.len(), "path revisits a cell");
}
