use crate::errors::PathPlannerError;
use crate::geometry::{Position, DIRECTIONS};

use serde::{Deserialize, Deserializer, Serialize, Serializer};


/// Distance value of a cell no search has reached
pub const UNVISITED: i32 = -1;

/// Parent index of a cell without a predecessor
const NO_PARENT: usize = usize::MAX;


/// Cell codes as they appear in map files
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Free = 0,
    Obstacle = 1,
    Start = 2,
    Goal = 3,
}

impl Cell {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Cell {
    type Error = PathPlannerError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Free),
            1 => Ok(Cell::Obstacle),
            2 => Ok(Cell::Start),
            3 => Ok(Cell::Goal),
            other => Err(PathPlannerError::MalformedMap(format!("unknown cell code {other}"))),
        }
    }
}


/// Static occupancy grid, stored row-major
/// Searches only ever borrow it, so one grid can back many runs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {

    /// Build a grid from rows of cells
    /// Fails if there are no cells or the rows differ in length
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, PathPlannerError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(PathPlannerError::MalformedMap("map has no cells".to_string()));
        }
        if let Some(index) = rows.iter().position(|row| row.len() != cols) {
            return Err(PathPlannerError::MalformedMap(format!(
                "row {index} has {} cells, expected {cols}", rows[index].len()
            )));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a grid from integer cell codes
    pub fn from_codes(codes: &[Vec<i32>]) -> Result<Self, PathPlannerError> {
        let rows = codes.iter()
            .map(|row| row.iter().map(|&code| Cell::try_from(code)).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check signed coordinates against the grid bounds
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Cell at a position, None if out of bounds
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Out of bounds positions are not obstacles - callers check bounds first
    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Obstacle)
    }

    /// In-bounds 4-neighbors in the order up, down, left, right
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.iter().filter_map(move |&(d_row, d_col)| {
            let row = pos.row as isize + d_row;
            let col = pos.col as isize + d_col;
            self.in_bounds(row, col).then(|| Position::new(row as usize, col as usize))
        })
    }

    /// All positions holding a given cell code, row-major
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter()
            .enumerate()
            .filter(move |&(_, &c)| c == cell)
            .map(move |(i, _)| self.position(i))
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions_of(Cell::Obstacle)
    }

    /// Render as CSV - comma separated codes, one line per row
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: Vec<String> = row.iter().map(|c| c.code().to_string()).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    fn position(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }
}


/// Per-run distances, same shape as the grid
/// Starts at UNVISITED everywhere and is filled in by exactly one search
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistanceMap {
    cols: usize,
    values: Vec<i32>,
}

impl DistanceMap {

    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            values: vec![UNVISITED; rows * cols],
        }
    }

    /// Fresh map shaped like the grid
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    /// Build from explicit rows, e.g. when reading a result file back
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, PathPlannerError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|row| row.len() != cols) {
            return Err(PathPlannerError::MalformedMap("distance map rows differ in length".to_string()));
        }
        Ok(Self {
            cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        if self.cols == 0 { 0 } else { self.values.len() / self.cols }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Distance at a position, UNVISITED when out of bounds
    pub fn get(&self, pos: Position) -> i32 {
        self.index(pos).map(|i| self.values[i]).unwrap_or(UNVISITED)
    }

    pub fn set(&mut self, pos: Position, distance: i32) {
        if let Some(i) = self.index(pos) {
            self.values[i] = distance;
        }
    }

    pub fn is_unvisited(&self, pos: Position) -> bool {
        self.get(pos) == UNVISITED
    }

    /// Iterate row slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> {
        self.values.chunks(self.cols.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.iter_rows().map(<[i32]>::to_vec).collect()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.col < self.cols && pos.row < self.rows()).then(|| pos.row * self.cols + pos.col)
    }
}

impl Serialize for DistanceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}

impl<'de> Deserialize<'de> for DistanceMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<i32>>::deserialize(deserializer)?;
        DistanceMap::from_rows(rows).map_err(serde::de::Error::custom)
    }
}


/// Arena of parent links indexed by row * cols + col
/// Filled in while searching, never shrinks
#[derive(Clone, Debug)]
pub struct PredecessorMap {
    cols: usize,
    parents: Vec<usize>,
}

impl PredecessorMap {

    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            cols: grid.cols(),
            parents: vec![NO_PARENT; grid.rows() * grid.cols()],
        }
    }

    /// Record that `node` was reached from `parent`
    pub fn insert(&mut self, node: Position, parent: Position) {
        let node_index = node.row * self.cols + node.col;
        if node_index < self.parents.len() {
            self.parents[node_index] = parent.row * self.cols + parent.col;
        }
    }

    pub fn get(&self, node: Position) -> Option<Position> {
        if node.col >= self.cols {
            return None;
        }
        let parent = *self.parents.get(node.row * self.cols + node.col)?;
        (parent != NO_PARENT).then(|| Position::new(parent / self.cols, parent % self.cols))
    }
}
