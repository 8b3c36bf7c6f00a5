use crate::errors::PathPlannerError;
use crate::geometry::Position;
use crate::grid::PredecessorMap;

/// Construct the shortest path by walking predecessors from the goal back to the start
/// Returns the ordered path as a vector of positions from start to goal, both included
/// A chain that breaks before reaching the start means the search recorded it wrong
pub fn shortest_path(predecessors: &PredecessorMap, start: Position, goal: Position) -> Result<Vec<Position>, PathPlannerError> {

    let mut path = Vec::new();
    let mut current = goal;

    // Trace back from goal to start
    while current != start {
        path.push(current);
        current = predecessors.get(current).ok_or(PathPlannerError::NoPathFound)?;
    }
    path.push(start);

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}
