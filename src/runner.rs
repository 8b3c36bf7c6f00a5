use crate::graph_algos::{a_star, brushfire, wavefront, Heuristic};
use crate::io::LoadedMap;
use crate::report::{measure, RunReport};

use std::fmt;
use log::debug;


/// Which search to run over a loaded map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Wavefront,
    Brushfire,
    AStar(String), // heuristic name, checked by the search itself
}

impl Algorithm {

    /// Name used for result files
    pub fn label(&self) -> String {
        match self {
            Algorithm::Wavefront => "wavefront".to_string(),
            Algorithm::Brushfire => "brushfire".to_string(),
            Algorithm::AStar(heuristic) => format!("astar_{heuristic}"),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}


/// Run one search on a fresh distance map and wrap the result in a report
/// A failed load passes straight through the search, which echoes it back
pub fn run_algorithm(loaded: &LoadedMap, algorithm: &Algorithm) -> RunReport {
    let mut distances = loaded.fresh_distances();
    let status = loaded.status.clone();
    let start = loaded.start.unwrap_or_default();
    let goal = loaded.goal.unwrap_or_default();

    let measured = measure(|| match algorithm {
        Algorithm::Wavefront => wavefront(&loaded.grid, &mut distances, start, goal, status),
        Algorithm::Brushfire => brushfire(&loaded.grid, &mut distances, status),
        Algorithm::AStar(heuristic) => a_star(&loaded.grid, &mut distances, start, goal, heuristic, status),
    });

    let report = RunReport::from_outcome(distances, measured);
    debug!(
        "{algorithm}: status {} path length {} in {:.6}s",
        report.status_code(), report.path_length, report.elapsed_seconds
    );
    report
}


/// Every algorithm, A* once per heuristic, in a fixed order
pub fn all_algorithms() -> Vec<Algorithm> {
    vec![
        Algorithm::Wavefront,
        Algorithm::Brushfire,
        Algorithm::AStar(Heuristic::Manhattan.name().to_string()),
        Algorithm::AStar(Heuristic::Airplane.name().to_string()),
    ]
}

/// Run every algorithm over the same map, each on its own distance map
pub fn compare(loaded: &LoadedMap) -> Vec<(Algorithm, RunReport)> {
    all_algorithms()
        .into_iter()
        .map(|algorithm| {
            let report = run_algorithm(loaded, &algorithm);
            (algorithm, report)
        })
        .collect()
}
