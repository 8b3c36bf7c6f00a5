use std::fmt;


/// Outcome of a load or search stage - `Ok(())` is the success code 200
pub type Status = Result<(), PathPlannerError>;

/// Integer code reported for a successful run
pub const SUCCESS_CODE: i32 = 200;


/// Every way a run can fail, from loading the map to searching it
/// Each variant maps to a fixed status code, see `PathPlannerError::code`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPlannerError {
    InvalidHeuristic(String), // Unknown heuristic name given to A*
    NoStartFound, // Map has no start cell
    NoGoalFound, // Map has no goal cell
    NoPathFound, // Frontier exhausted without reaching the goal
    MultipleStarts, // Map has more than one start cell
    MultipleGoals, // Map has more than one goal cell
    MalformedMap(String), // Map file could not be parsed
    MapNotFound(String), // Map file does not exist
    Other(String),
}

impl PathPlannerError {

    /// Status code written to result files
    pub fn code(&self) -> i32 {
        match self {
            PathPlannerError::InvalidHeuristic(_) => 401,
            PathPlannerError::NoStartFound => 402,
            PathPlannerError::NoGoalFound => 403,
            PathPlannerError::NoPathFound => 404,
            PathPlannerError::MultipleStarts => 422,
            PathPlannerError::MultipleGoals => 433,
            PathPlannerError::MalformedMap(_) => 500,
            PathPlannerError::MapNotFound(_) => 504,
            PathPlannerError::Other(_) => 509,
        }
    }

    /// True when the error is raised before any search work happens
    /// Runs failing this way report zero time and memory
    pub fn is_pre_search(&self) -> bool {
        !matches!(self, PathPlannerError::NoPathFound)
    }
}

impl fmt::Display for PathPlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPlannerError::InvalidHeuristic(name) => write!(f, "invalid heuristic parameter: {name:?}"),
            PathPlannerError::NoStartFound => write!(f, "no start cell found"),
            PathPlannerError::NoGoalFound => write!(f, "no goal cell found"),
            PathPlannerError::NoPathFound => write!(f, "no path found"),
            PathPlannerError::MultipleStarts => write!(f, "more than one start cell"),
            PathPlannerError::MultipleGoals => write!(f, "more than one goal cell"),
            PathPlannerError::MalformedMap(reason) => write!(f, "malformed map: {reason}"),
            PathPlannerError::MapNotFound(path) => write!(f, "file not found: {path}"),
            PathPlannerError::Other(reason) => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for PathPlannerError {}


impl From<std::io::Error> for PathPlannerError {
    fn from(error: std::io::Error) -> Self {
        PathPlannerError::Other(error.to_string())
    }
}

impl From<serde_json::Error> for PathPlannerError {
    fn from(error: serde_json::Error) -> Self {
        PathPlannerError::MalformedMap(error.to_string())
    }
}


/// Integer code for a status, 200 on success
pub fn status_code(status: &Status) -> i32 {
    match status {
        Ok(()) => SUCCESS_CODE,
        Err(e) => e.code(),
    }
}
