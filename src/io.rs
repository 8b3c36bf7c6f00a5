use crate::errors::{PathPlannerError, Status};
use crate::geometry::Position;
use crate::grid::{Cell, DistanceMap, Grid};
use crate::report::{ReportFile, RunReport};
use crate::runner::Algorithm;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::warn;


/// Map as handed to the searches
/// On a failed load the grid and distance map are empty and status carries the reason
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedMap {
    pub grid: Grid,
    pub distances: DistanceMap,
    pub start: Option<Position>,
    pub goal: Option<Position>,
    pub status: Status,
}

impl LoadedMap {

    fn failed(error: PathPlannerError) -> Self {
        Self {
            grid: Grid::default(),
            distances: DistanceMap::default(),
            start: None,
            goal: None,
            status: Err(error),
        }
    }

    /// Fresh distance map for another run over the same grid
    pub fn fresh_distances(&self) -> DistanceMap {
        if self.status.is_ok() {
            DistanceMap::for_grid(&self.grid)
        } else {
            DistanceMap::default()
        }
    }
}


/// Read a CSV map file
pub fn load_map<P: AsRef<Path>>(path: P) -> LoadedMap {
    let path = path.as_ref();
    match read_text(path) {
        Ok(text) => parse_map(&text),
        Err(error) => {
            warn!("could not read map {}: {error}", path.display());
            LoadedMap::failed(error)
        }
    }
}

/// Read a CSV map file without requiring a start or goal cell
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid, PathPlannerError> {
    parse_grid(&read_text(path.as_ref())?)
}

fn read_text(path: &Path) -> Result<String, PathPlannerError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PathPlannerError::MapNotFound(path.display().to_string()),
        ErrorKind::InvalidData => PathPlannerError::MalformedMap(e.to_string()),
        _ => PathPlannerError::from(e),
    })
}


/// Parse CSV map text and locate the start and goal cells
pub fn parse_map(text: &str) -> LoadedMap {
    let grid = match parse_grid(text) {
        Ok(grid) => grid,
        Err(error) => {
            warn!("map rejected: {error}");
            return LoadedMap::failed(error);
        }
    };

    match locate_endpoints(&grid) {
        Ok((start, goal)) => LoadedMap {
            distances: DistanceMap::for_grid(&grid),
            grid,
            start: Some(start),
            goal: Some(goal),
            status: Ok(()),
        },
        Err(error) => {
            warn!("map rejected: {error}");
            LoadedMap::failed(error)
        }
    }
}


/// Parse comma separated cell codes, one row per line
pub fn parse_grid(text: &str) -> Result<Grid, PathPlannerError> {
    let mut rows: Vec<Vec<Cell>> = text.lines()
        .map(str::trim)
        .map(|line| {
            if line.is_empty() {
                return Ok(Vec::new());
            }
            line.split(',')
                .map(|field| {
                    let code: i32 = field.trim().parse()
                        .map_err(|_| PathPlannerError::MalformedMap(format!("invalid cell {:?}", field.trim())))?;
                    Cell::try_from(code)
                })
                .collect::<Result<Vec<Cell>, PathPlannerError>>()
        })
        .collect::<Result<_, _>>()?;

    // A trailing newline or two is not an extra row
    while rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }

    Grid::new(rows)
}


/// Find the single start and goal cell
/// Scans row-major, the first duplicate decides the error
fn locate_endpoints(grid: &Grid) -> Result<(Position, Position), PathPlannerError> {
    let mut start = None;
    let mut goal = None;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            match grid.cell(pos) {
                Some(Cell::Start) => {
                    if start.replace(pos).is_some() {
                        return Err(PathPlannerError::MultipleStarts);
                    }
                }
                Some(Cell::Goal) => {
                    if goal.replace(pos).is_some() {
                        return Err(PathPlannerError::MultipleGoals);
                    }
                }
                _ => {}
            }
        }
    }

    let start = start.ok_or(PathPlannerError::NoStartFound)?;
    let goal = goal.ok_or(PathPlannerError::NoGoalFound)?;
    Ok((start, goal))
}


/// Write a run report as pretty printed JSON
pub fn write_report<P: AsRef<Path>>(path: P, report: &RunReport) -> Result<(), PathPlannerError> {
    let json = serde_json::to_string_pretty(&report.to_file())?;
    fs::write(path, json)?;
    Ok(())
}


/// Write one `result_<label>.json` per run into `dir`, creating it if missing
/// Returns the written paths in run order
pub fn write_reports<P: AsRef<Path>>(
    dir: P,
    runs: &[(Algorithm, RunReport)],
) -> Result<Vec<PathBuf>, PathPlannerError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(runs.len());
    for (algorithm, report) in runs {
        let path = dir.join(format!("result_{}.json", algorithm.label()));
        write_report(&path, report)?;
        written.push(path);
    }
    Ok(written)
}


/// Read a result file written by `write_report`
pub fn read_report<P: AsRef<Path>>(path: P) -> Result<ReportFile, PathPlannerError> {
    let text = read_text(path.as_ref())?;
    Ok(serde_json::from_str(&text)?)
}


/// Export a grid as a CSV map file
pub fn write_map<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<(), PathPlannerError> {
    fs::write(path, grid.to_csv())?;
    Ok(())
}
