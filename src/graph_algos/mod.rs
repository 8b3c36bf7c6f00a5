pub mod a_star;
pub mod brushfire;
pub mod wavefront;
mod shortest_path;

#[cfg(test)]
pub(crate) mod test_support;

pub use a_star::{a_star, a_star_with, Heuristic};
pub use brushfire::brushfire;
pub use wavefront::wavefront;
pub use shortest_path::shortest_path;

use crate::errors::{PathPlannerError, Status};
use crate::geometry::Position;


/// What a search hands back besides the distance map it filled in
/// path_length is -1 and path is empty when there is no path or the run failed
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub status: Status,
    pub path_length: i64,
    pub path: Vec<Position>,
}

impl SearchOutcome {

    /// Outcome of a run that found no path, or never searched
    pub fn failed(error: PathPlannerError) -> Self {
        Self {
            status: Err(error),
            path_length: -1,
            path: Vec::new(),
        }
    }

    /// Successful run without a path, e.g. a distance transform
    pub fn no_path() -> Self {
        Self {
            status: Ok(()),
            path_length: -1,
            path: Vec::new(),
        }
    }

    pub fn found(path: Vec<Position>, path_length: i64) -> Self {
        Self {
            status: Ok(()),
            path_length,
            path,
        }
    }
}
