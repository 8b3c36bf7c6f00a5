use num_traits::{Num, Signed, Float};
use serde::{Deserialize, Serialize};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


/// 4-connected moves as (row, column) offsets
/// The order is up, down, left, right - it decides which of several
/// equally short paths a search returns
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];


/// Cell on the grid
/// Ordering is lexicographic: row first, then column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of 4-connected steps between two positions on an open grid
    pub fn manhattan(&self, other: &Position) -> usize {
        manhattan_distance(
            self.row as i64, self.col as i64,
            other.row as i64, other.col as i64,
        ) as usize
    }

    /// Straight line distance
    pub fn euclidean(&self, other: &Position) -> f64 {
        euclidean(
            self.row as f64, self.col as f64,
            other.row as f64, other.col as f64,
        )
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<[usize; 2]> for Position {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Position> for [usize; 2] {
    fn from(position: Position) -> Self {
        [position.row, position.col]
    }
}
