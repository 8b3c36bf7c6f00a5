use crate::errors::{PathPlannerError, Status};
use crate::collections::FxIndexMap;
use crate::geometry::Position;
use crate::grid::{DistanceMap, Grid, PredecessorMap};
use super::{shortest_path, SearchOutcome};

use std::{
    collections::BinaryHeap,
    cmp::Ordering,
    fmt,
    str::FromStr,
};
use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;



/// Estimate of the remaining distance to the goal
/// Both are admissible on a 4-connected unit cost grid, so A* stays optimal with either
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Manhattan, // |d_row| + |d_col|
    Airplane, // straight line
}

impl Heuristic {

    pub fn estimate(&self, from: &Position, to: &Position) -> f64 {
        match self {
            Heuristic::Manhattan => from.manhattan(to) as f64,
            Heuristic::Airplane => from.euclidean(to),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Airplane => "airplane",
        }
    }
}

impl FromStr for Heuristic {
    type Err = PathPlannerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "manhattan" => Ok(Heuristic::Manhattan),
            "airplane" => Ok(Heuristic::Airplane),
            other => Err(PathPlannerError::InvalidHeuristic(other.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Entry on the open list
/// Ordered by f_cost, then position, then cost - reversed so BinaryHeap pops the smallest
#[derive(Debug)]
struct Node {
    f_cost: f64, // Total cost = cost + h(n) aka estimated cost
    position: Position,
    cost: usize, // Cost to reach this node
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.total_cmp(&self.f_cost)
            .then_with(|| other.position.cmp(&self.position))
            .then_with(|| other.cost.cmp(&self.cost))
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Node {}


/// A* Algorithm with the heuristic picked by name
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// An incoming error is echoed first; an unknown heuristic name then fails with
/// `InvalidHeuristic` before any cell is touched.
pub fn a_star(grid: &Grid, distances: &mut DistanceMap, start: Position, goal: Position, heuristic: &str, status: Status) -> SearchOutcome {

    if let Err(error) = status {
        return SearchOutcome::failed(error);
    }

    match heuristic.parse::<Heuristic>() {
        Ok(heuristic) => a_star_with(grid, distances, start, goal, heuristic, Ok(())),
        Err(error) => SearchOutcome::failed(error),
    }
}


/// A* Algorithm
/// From the start cell, expand the open cell with the lowest estimated total cost until
/// the goal is popped. Each cell's distance map entry holds the best cost found so far.
///
/// Outdated entries stay in the heap when a cheaper route to their cell turns up; they
/// are recognised on pop by a cost above the recorded best and skipped.
pub fn a_star_with(grid: &Grid, distances: &mut DistanceMap, start: Position, goal: Position, heuristic: Heuristic, status: Status) -> SearchOutcome {

    if let Err(error) = status {
        return SearchOutcome::failed(error);
    }

    // Open List
    // Cells that need to be evaluated, implemented as priority queue
    let mut open_list: BinaryHeap<Node> = BinaryHeap::new();

    // Best known cost per reached cell
    let mut costs: FxIndexMap<Position, usize> = FxIndexMap::default();
    let mut predecessors = PredecessorMap::for_grid(grid);

    costs.insert(start, 0);
    distances.set(start, 0);
    open_list.push(Node {
        f_cost: heuristic.estimate(&start, &goal),
        position: start,
        cost: 0,
    });

    let mut path_length = None;
    let mut expanded = 0usize;

    while let Some(Node { position, cost, .. }) = open_list.pop() {

        // If cost of node from BinaryHeap is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if costs.get(&position).is_some_and(|&best| cost > best) {
            continue;
        }

        // Check if we've reached the goal
        if position == goal {
            path_length = Some(cost);
            break;
        }
        expanded += 1;

        for neighbor in grid.neighbors(position) {
            if grid.is_obstacle(neighbor) {
                continue;
            }

            // Every step costs one
            let new_cost = cost + 1;

            match costs.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    e.insert(new_cost);
                }
                Occupied(mut e) => {
                    if *e.get() > new_cost {
                        // We've found a better path to this neighbor
                        e.insert(new_cost);
                    } else {
                        // The existing path is better, do nothing
                        continue;
                    }
                }
            }

            distances.set(neighbor, new_cost as i32);
            predecessors.insert(neighbor, position);

            // Only add to the queue if we've found a better path
            open_list.push(Node {
                f_cost: new_cost as f64 + heuristic.estimate(&neighbor, &goal),
                position: neighbor,
                cost: new_cost,
            });
        }
    }

    let Some(path_length) = path_length else {
        debug!("a_star({heuristic}): open list exhausted after {expanded} expansions");
        return SearchOutcome::failed(PathPlannerError::NoPathFound);
    };

    match shortest_path(&predecessors, start, goal) {
        Ok(path) => {
            debug!("a_star({heuristic}): reached {goal:?} in {path_length} steps, {expanded} expansions");
            SearchOutcome::found(path, path_length as i64)
        }
        Err(error) => SearchOutcome::failed(error),
    }
}
