use crate::errors::{PathPlannerError, Status};
use crate::geometry::Position;
use crate::grid::{DistanceMap, Grid, PredecessorMap};
use super::{shortest_path, SearchOutcome};

use std::collections::VecDeque;
use log::debug;


/// Wavefront planner - breadth first expansion from a single start cell
/// https://en.wikipedia.org/wiki/Breadth-first_search
///
/// Every cell gets the number of 4-connected steps it lies from the start, until the
/// goal is dequeued. Because the queue is FIFO all cells at distance d leave it before
/// any at d + 1, so the first time the goal comes out its distance is the shortest one.
/// Neighbors are expanded up, down, left, right which fixes the returned path among ties.
///
/// An incoming error status is echoed back without touching the distance map.
pub fn wavefront(grid: &Grid, distances: &mut DistanceMap, start: Position, goal: Position, status: Status) -> SearchOutcome {

    if let Err(error) = status {
        return SearchOutcome::failed(error);
    }

    let mut predecessors = PredecessorMap::for_grid(grid);
    let mut queue: VecDeque<Position> = VecDeque::new();

    distances.set(start, 0);
    queue.push_back(start);

    let mut path_length = None;

    while let Some(current) = queue.pop_front() {
        let current_distance = distances.get(current);

        if current == goal {
            path_length = Some(current_distance);
            break;
        }

        for neighbor in grid.neighbors(current) {
            // Obstacles block, visited cells already hold their shortest distance
            if grid.is_obstacle(neighbor) || !distances.is_unvisited(neighbor) {
                continue;
            }
            distances.set(neighbor, current_distance + 1);
            predecessors.insert(neighbor, current);
            queue.push_back(neighbor);
        }
    }

    let Some(path_length) = path_length else {
        debug!("wavefront: queue exhausted before reaching {goal:?}");
        return SearchOutcome::failed(PathPlannerError::NoPathFound);
    };

    match shortest_path(&predecessors, start, goal) {
        Ok(path) => {
            debug!("wavefront: reached {goal:?} in {path_length} steps");
            SearchOutcome::found(path, path_length as i64)
        }
        Err(error) => SearchOutcome::failed(error),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::test_support::{assert_valid_path, endpoints, grid_from, random_grid, reference_distances};
    use crate::grid::UNVISITED;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_wavefront_example_map() {
        let grid = grid_from(&[
            vec![2, 0, 0],
            vec![0, 1, 0],
            vec![0, 0, 3],
        ]);
        let (start, goal) = endpoints(&grid);
        let mut distances = DistanceMap::for_grid(&grid);

        let outcome = wavefront(&grid, &mut distances, start, goal, Ok(()));

        assert_eq!(outcome.status, Ok(()));
        assert_eq!(outcome.path_length, 4);
        assert_eq!(outcome.path, vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(2, 1),
            Position::new(2, 2),
        ]);
        assert_eq!(distances.to_rows(), vec![
            vec![0, 1, 2],
            vec![1, -1, 3],
            vec![2, 3, 4],
        ]);
    }

    #[test]
    fn test_wavefront_stops_at_goal() {
        // Goal is one step away, the far end of the corridor is never labelled
        let grid = grid_from(&[vec![2, 3, 0, 0, 0]]);
        let (start, goal) = endpoints(&grid);
        let mut distances = DistanceMap::for_grid(&grid);

        let outcome = wavefront(&grid, &mut distances, start, goal, Ok(()));

        assert_eq!(outcome.path_length, 1);
        assert_eq!(distances.get(Position::new(0, 4)), UNVISITED);
    }

    #[test]
    fn test_wavefront_handles_unreachable_goal() {
        let grid = grid_from(&[
            vec![2, 0, 1, 0],
            vec![0, 0, 1, 3],
        ]);
        let (start, goal) = endpoints(&grid);
        let mut distances = DistanceMap::for_grid(&grid);

        let outcome = wavefront(&grid, &mut distances, start, goal, Ok(()));

        assert_eq!(outcome.status, Err(PathPlannerError::NoPathFound));
        assert_eq!(outcome.path_length, -1);
        assert!(outcome.path.is_empty());
        // The start component was still fully labelled
        assert_eq!(distances.get(Position::new(1, 1)), 2);
        assert_eq!(distances.get(goal), UNVISITED);
    }

    #[test]
    fn test_wavefront_echoes_incoming_error() {
        let grid = grid_from(&[vec![2, 3]]);
        let (start, goal) = endpoints(&grid);
        let mut distances = DistanceMap::for_grid(&grid);

        let outcome = wavefront(&grid, &mut distances, start, goal, Err(PathPlannerError::MultipleStarts));

        assert_eq!(outcome, SearchOutcome::failed(PathPlannerError::MultipleStarts));
        assert_eq!(distances, DistanceMap::for_grid(&grid));
    }

    #[test]
    fn test_wavefront_matches_reference_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let grid = random_grid(&mut rng, 9, 11, 0.3);
            let (start, goal) = endpoints(&grid);
            let mut distances = DistanceMap::for_grid(&grid);

            let outcome = wavefront(&grid, &mut distances, start, goal, Ok(()));
            let expected = reference_distances(&grid, &[start], true).get(goal);

            if expected == UNVISITED {
                assert_eq!(outcome.status, Err(PathPlannerError::NoPathFound));
                assert_eq!(outcome.path_length, -1);
                assert!(outcome.path.is_empty());
            } else {
                assert_eq!(outcome.status, Ok(()));
                assert_eq!(outcome.path_length, expected as i64);
                assert_valid_path(&grid, &outcome.path, start, goal);
                assert_eq!(outcome.path.len() as i64, outcome.path_length + 1);
            }
        }
    }

    #[test]
    fn test_wavefront_is_repeatable() {
        let mut rng = StdRng::seed_from_u64(99);
        let grid = random_grid(&mut rng, 12, 12, 0.25);
        let (start, goal) = endpoints(&grid);

        let mut first_map = DistanceMap::for_grid(&grid);
        let mut second_map = DistanceMap::for_grid(&grid);
        let first = wavefront(&grid, &mut first_map, start, goal, Ok(()));
        let second = wavefront(&grid, &mut second_map, start, goal, Ok(()));

        assert_eq!(first, second);
        assert_eq!(first_map, second_map);
    }
}
