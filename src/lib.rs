//! Distance fields and shortest paths over 2D occupancy grids.
//!
//! Three searches share one grid model:
//!
//! - **Wavefront** ([`wavefront`]) - breadth first distances from the start, stopping at the goal
//! - **Brushfire** ([`brushfire`]) - distance from every cell to its nearest obstacle
//! - **A\*** ([`a_star`]) - best first search guided by a Manhattan or straight line estimate
//!
//! Each search fills a caller supplied [`DistanceMap`] and returns a [`SearchOutcome`].
//! Failures are carried as a [`Status`]; a search handed an error status returns it
//! untouched, so a bad map file flows through to the report without special cases.

pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod io;
pub mod report;
pub mod runner;
mod collections;

pub use errors::{PathPlannerError, Status};
pub use geometry::Position;
pub use graph_algos::{a_star, a_star_with, brushfire, wavefront, Heuristic, SearchOutcome};
pub use grid::{Cell, DistanceMap, Grid, UNVISITED};
pub use io::LoadedMap;
pub use report::{ReportFile, RunReport};
pub use runner::Algorithm;
