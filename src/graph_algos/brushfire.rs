use crate::errors::Status;
use crate::geometry::Position;
use crate::grid::{DistanceMap, Grid};
use super::SearchOutcome;

use std::collections::VecDeque;
use log::debug;


/// Brushfire distance transform - breadth first expansion from every obstacle at once
///
/// All obstacles start at distance 0 and the fire spreads one ring per level, so each
/// free cell ends up with its 4-connected step count to the nearest obstacle.
/// Only the visited check gates expansion: obstacles are already at 0 when the fire
/// arrives, so packed obstacles form flat zero plateaus.
///
/// There is no goal and no path. With no obstacles nothing is seeded and every cell
/// stays unvisited, which is still a successful run.
pub fn brushfire(grid: &Grid, distances: &mut DistanceMap, status: Status) -> SearchOutcome {

    if let Err(error) = status {
        return SearchOutcome::failed(error);
    }

    let mut queue: VecDeque<Position> = grid.obstacles().collect();
    for &obstacle in &queue {
        distances.set(obstacle, 0);
    }
    let seeds = queue.len();

    while let Some(current) = queue.pop_front() {
        let next_distance = distances.get(current) + 1;

        for neighbor in grid.neighbors(current) {
            if !distances.is_unvisited(neighbor) {
                continue;
            }
            distances.set(neighbor, next_distance);
            queue.push_back(neighbor);
        }
    }

    debug!("brushfire: spread from {seeds} obstacle cells");
    SearchOutcome::no_path()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PathPlannerError;
    use crate::graph_algos::test_support::{grid_from, random_grid};
    use crate::grid::UNVISITED;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_brushfire_example_map() {
        let grid = grid_from(&[
            vec![2, 0, 0],
            vec![0, 1, 0],
            vec![0, 0, 3],
        ]);
        let mut distances = DistanceMap::for_grid(&grid);

        let outcome = brushfire(&grid, &mut distances, Ok(()));

        assert_eq!(outcome, SearchOutcome::no_path());
        assert_eq!(distances.to_rows(), vec![
            vec![2, 1, 2],
            vec![1, 0, 1],
            vec![2, 1, 2],
        ]);
    }

    #[test]
    fn test_brushfire_without_obstacles() {
        let grid = grid_from(&[
            vec![2, 0],
            vec![0, 3],
        ]);
        let mut distances = DistanceMap::for_grid(&grid);

        let outcome = brushfire(&grid, &mut distances, Ok(()));

        assert_eq!(outcome.status, Ok(()));
        assert!(distances.to_rows().iter().flatten().all(|&d| d == UNVISITED));
    }

    #[test]
    fn test_brushfire_obstacle_plateau() {
        let grid = grid_from(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        let mut distances = DistanceMap::for_grid(&grid);

        brushfire(&grid, &mut distances, Ok(()));

        assert_eq!(distances.to_rows(), vec![
            vec![2, 1, 1, 1, 2],
            vec![1, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 1],
            vec![2, 1, 1, 1, 2],
        ]);
    }

    #[test]
    fn test_brushfire_echoes_incoming_error() {
        let grid = grid_from(&[vec![1, 0]]);
        let mut distances = DistanceMap::for_grid(&grid);

        let outcome = brushfire(&grid, &mut distances, Err(PathPlannerError::NoGoalFound));

        assert_eq!(outcome, SearchOutcome::failed(PathPlannerError::NoGoalFound));
        assert_eq!(distances.get(Position::new(0, 0)), UNVISITED);
    }

    #[test]
    fn test_brushfire_matches_nearest_obstacle() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let grid = random_grid(&mut rng, 8, 13, 0.15);
            let obstacles: Vec<Position> = grid.obstacles().collect();
            let mut distances = DistanceMap::for_grid(&grid);

            brushfire(&grid, &mut distances, Ok(()));

            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let pos = Position::new(row, col);
                    // Nothing blocks the fire, so the nearest obstacle is the Manhattan-nearest one
                    let expected = obstacles.iter()
                        .map(|o| o.manhattan(&pos) as i32)
                        .min()
                        .unwrap_or(UNVISITED);
                    assert_eq!(distances.get(pos), expected, "at {pos:?}");
                }
            }
        }
    }
}
