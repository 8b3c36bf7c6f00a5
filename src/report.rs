//! Run reports and the instrumentation around a search.
//!
//! [`measure`] times a closure and records how far heap usage climbed while it ran.
//! Heap figures come from [`PeakAlloc`], which only counts when installed as the
//! process allocator:
//!
//! ```rust,ignore
//! #[global_allocator]
//! static ALLOCATOR: gridplan::report::PeakAlloc = gridplan::report::PeakAlloc;
//! ```
//!
//! Without it every measurement reports zero bytes.

use crate::errors::{status_code, Status};
use crate::geometry::Position;
use crate::graph_algos::SearchOutcome;
use crate::grid::DistanceMap;

use std::time::{Duration, Instant};
pub use peak_alloc::PeakAlloc;
use serde::{Deserialize, Serialize};


// The counters behind PeakAlloc are process wide, any handle reads them
static HEAP: PeakAlloc = PeakAlloc;


/// Value returned by a measured call plus what it cost
#[derive(Debug, Clone)]
pub struct Measured<T> {
    pub value: T,
    pub elapsed: Duration,
    pub peak_bytes: usize,
}

/// Run `f`, timing it and tracking peak heap growth above the usage at entry
///
/// The peak counter is shared by the whole process. Only one measured call may
/// be in flight at a time: each call resets the peak, so concurrent calls on
/// other threads would see each other's allocations and resets.
pub fn measure<T, F>(f: F) -> Measured<T>
where
    F: FnOnce() -> T,
{
    let baseline = HEAP.current_usage();
    HEAP.reset_peak_usage();
    let started = Instant::now();

    let value = f();

    let elapsed = started.elapsed();
    let peak_bytes = HEAP.peak_usage().saturating_sub(baseline);

    Measured { value, elapsed, peak_bytes }
}


/// Everything one algorithm run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub distance_map: DistanceMap,
    pub status: Status,
    pub path_length: i64,
    pub path: Vec<Position>,
    pub elapsed_seconds: f64,
    pub peak_memory_bytes: u64,
}

impl RunReport {

    /// Combine a measured search with the distance map it filled in
    /// Runs that failed before searching report no time or memory
    pub fn from_outcome(distance_map: DistanceMap, measured: Measured<SearchOutcome>) -> Self {
        let Measured { value: outcome, elapsed, peak_bytes } = measured;
        let searched = match &outcome.status {
            Ok(()) => true,
            Err(error) => !error.is_pre_search(),
        };
        let (elapsed_seconds, peak_memory_bytes) = if searched {
            (elapsed.as_secs_f64(), peak_bytes as u64)
        } else {
            (0.0, 0)
        };
        Self {
            distance_map,
            status: outcome.status,
            path_length: outcome.path_length,
            path: outcome.path,
            elapsed_seconds,
            peak_memory_bytes,
        }
    }

    /// Report of a run that never started
    pub fn inert(distance_map: DistanceMap, status: Status) -> Self {
        Self {
            distance_map,
            status,
            path_length: -1,
            path: Vec::new(),
            elapsed_seconds: 0.0,
            peak_memory_bytes: 0,
        }
    }

    pub fn status_code(&self) -> i32 {
        status_code(&self.status)
    }

    /// Peak memory in megabytes (10^6 bytes)
    pub fn memory_megabytes(&self) -> f64 {
        self.peak_memory_bytes as f64 / 1_000_000.0
    }

    /// Wire form written to result files
    pub fn to_file(&self) -> ReportFile {
        ReportFile {
            algorithm_map: self.distance_map.clone(),
            status_code: self.status_code(),
            path_length: self.path_length,
            path: self.path.clone(),
            computing_time: self.elapsed_seconds,
            memory_usage: self.memory_megabytes(),
        }
    }
}


/// JSON layout of a result file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFile {
    pub algorithm_map: DistanceMap,
    pub status_code: i32,
    pub path_length: i64,
    #[serde(default)]
    pub path: Vec<Position>,
    pub computing_time: f64, // seconds
    pub memory_usage: f64, // megabytes
}
