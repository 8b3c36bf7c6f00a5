use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use std::path::{Path, PathBuf};

use gridplan::io::{load_grid, load_map, read_report, write_map, write_report, write_reports};
use gridplan::report::PeakAlloc;
use gridplan::runner::{compare, run_algorithm, Algorithm};
use gridplan::RunReport;

#[global_allocator]
static ALLOCATOR: PeakAlloc = PeakAlloc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Breadth first search from the start cell to the goal
    Wavefront {
        /// CSV map to plan on
        map: PathBuf,
        /// JSON file to write the result to
        result: PathBuf,
    },
    /// Distance from every cell to the nearest obstacle
    Brushfire {
        map: PathBuf,
        result: PathBuf,
    },
    /// A* search from the start cell to the goal
    Astar {
        map: PathBuf,
        result: PathBuf,
        /// Distance estimate: `manhattan` or `airplane`
        heuristic: String,
    },
    /// Run every algorithm on one map, writing result_<name>.json files
    Compare {
        map: PathBuf,
        /// Directory for the result files, created if missing
        out_dir: PathBuf,
    },
    /// Re-write a map file in canonical CSV form
    Export {
        map: PathBuf,
        csv: PathBuf,
    },
    /// Print a summary of a result file
    Show {
        result: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    match args.command {
        Command::Wavefront { map, result } => run_single(&map, &result, Algorithm::Wavefront),
        Command::Brushfire { map, result } => run_single(&map, &result, Algorithm::Brushfire),
        Command::Astar { map, result, heuristic } => run_single(&map, &result, Algorithm::AStar(heuristic)),
        Command::Compare { map, out_dir } => run_compare(&map, &out_dir),
        Command::Export { map, csv } => export(&map, &csv),
        Command::Show { result } => show(&result),
    }
}

fn run_single(map: &Path, result: &Path, algorithm: Algorithm) -> Result<()> {
    let loaded = load_map(map);
    let report = run_algorithm(&loaded, &algorithm);
    log_summary(&algorithm, &report);

    write_report(result, &report)
        .with_context(|| format!("Failed to write result file: {}", result.display()))?;
    Ok(())
}

fn run_compare(map: &Path, out_dir: &Path) -> Result<()> {
    let loaded = load_map(map);
    let runs = compare(&loaded);
    for (algorithm, report) in &runs {
        log_summary(algorithm, report);
    }

    let written = write_reports(out_dir, &runs)
        .with_context(|| format!("Failed to write results to: {}", out_dir.display()))?;
    info!("wrote {} result files to {}", written.len(), out_dir.display());
    Ok(())
}

fn export(map: &Path, csv: &Path) -> Result<()> {
    // Start and goal are not required to export
    let grid = load_grid(map)
        .with_context(|| format!("Failed to load map: {}", map.display()))?;

    write_map(csv, &grid)
        .with_context(|| format!("Failed to write map file: {}", csv.display()))?;
    info!("exported {}x{} map to {}", grid.rows(), grid.cols(), csv.display());
    Ok(())
}

fn show(result: &Path) -> Result<()> {
    let report = read_report(result)
        .with_context(|| format!("Failed to read result file: {}", result.display()))?;

    println!("Status Code: {}", report.status_code);
    println!("Path Length: {}", report.path_length);
    println!("Path: {:?}", report.path.iter().map(|p| (p.row, p.col)).collect::<Vec<_>>());
    println!("Computing Time: {:.6} s", report.computing_time);
    println!("Memory Usage: {:.6} MB", report.memory_usage);
    for row in report.algorithm_map.iter_rows() {
        let line: Vec<String> = row.iter().map(|d| format!("{d:>3}")).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}

fn log_summary(algorithm: &Algorithm, report: &RunReport) {
    info!(
        "{algorithm}: status {} path length {} time {:.6}s memory {:.6}MB",
        report.status_code(),
        report.path_length,
        report.elapsed_seconds,
        report.memory_megabytes(),
    );
}
