mod export;
mod workload;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use enum_iterator::IntoEnumIterator;
use log::{info, warn};

use seeklab_core::metrics::Metrics;
use seeklab_core::policy::{PolicyKind, SchedulingPolicy};
use seeklab_core::schedulers::Direction;
use seeklab_core::track::{in_range, Track};

use export::AlgorithmResult;

/// Disk-arm scheduling simulator
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Comma or whitespace separated list of track requests
    #[arg(short, long)]
    requests: Option<String>,

    /// Path to CSV file with track requests (all numeric cells, in row order)
    #[arg(long)]
    requests_csv: Option<PathBuf>,

    /// Scheduling algorithm (FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK)
    #[arg(short, long, default_value = "FCFS")]
    algorithm: PolicyKind,

    /// Initial sweep direction for SCAN, C-SCAN, LOOK and C-LOOK
    #[arg(short, long, default_value = "up")]
    direction: Direction,

    /// Highest track of the disk (the domain is [0, disk-max])
    #[arg(long, default_value_t = 199)]
    disk_max: Track,

    /// Initial head position
    #[arg(long, default_value_t = 50)]
    head: Track,

    /// Reverse SCAN at the last serviced request instead of the boundary
    #[arg(long)]
    no_edge: bool,

    /// Charge the C-SCAN wraparound jump as head movement
    #[arg(long)]
    count_jump: bool,

    /// Run all six algorithms on the same inputs and print one summary line each
    #[arg(long)]
    compare: bool,

    /// Path to produced CSV file with the trace (seq,from,to,distance)
    #[arg(long)]
    trace_csv: Option<PathBuf>,

    /// Path to produced JSON file with per-algorithm metrics
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let workload = load_workload(args)?;
    if !in_range(args.head, args.disk_max) {
        return Err(format!(
            "head position {} is outside the track domain [0, {}]",
            args.head, args.disk_max
        ));
    }
    info!(
        "loaded {} requests, head at {}, disk max {}",
        workload.len(),
        args.head,
        args.disk_max
    );
    if args.compare {
        run_comparison(args, &workload)
    } else {
        run_single(args, &workload)
    }
}

fn load_workload(args: &Args) -> Result<Vec<Track>, String> {
    match (&args.requests, &args.requests_csv) {
        (Some(_), Some(_)) => Err("--requests and --requests-csv are mutually exclusive".to_string()),
        (Some(text), None) => workload::parse_text(text, args.disk_max),
        (None, Some(path)) => workload::load_csv(path, args.disk_max),
        (None, None) => Err("either --requests or --requests-csv is required".to_string()),
    }
}

fn run_single(args: &Args, workload: &[Track]) -> Result<(), String> {
    let policy = SchedulingPolicy::from_kind(args.algorithm, args.direction, !args.no_edge, args.count_jump);
    let trace = policy.simulate(workload, args.head, args.disk_max);
    let metrics = Metrics::from_trace(&trace);

    println!("{} trace:", args.algorithm);
    println!("{:>4}  {:>6}  {:>6}  {:>8}  request", "step", "from", "to", "distance");
    for (seq, step) in trace.steps.iter().enumerate() {
        let request = match step.served {
            Some(index) => format!("#{}", index),
            None => "-".to_string(),
        };
        println!(
            "{:>4}  {:>6}  {:>6}  {:>8}  {}",
            seq, step.from, step.to, step.distance, request
        );
    }
    println!(
        "total movement: {}, avg seek: {:.2}, served: {}",
        metrics.total_movement, metrics.avg_seek, metrics.served_count
    );

    if let Some(path) = &args.trace_csv {
        export::write_trace_csv(path, &trace)?;
        info!("trace written to {}", path.display());
    }
    if let Some(path) = &args.json {
        let results = [AlgorithmResult {
            algorithm: args.algorithm.name().to_string(),
            metrics,
        }];
        export::write_results_json(path, &results)?;
        info!("results written to {}", path.display());
    }
    Ok(())
}

fn run_comparison(args: &Args, workload: &[Track]) -> Result<(), String> {
    if args.trace_csv.is_some() {
        warn!("--trace-csv applies to single-algorithm runs only, skipping");
    }
    let mut results = Vec::new();
    for kind in PolicyKind::into_enum_iter() {
        let policy = SchedulingPolicy::from_kind(kind, args.direction, !args.no_edge, args.count_jump);
        let trace = policy.simulate(workload, args.head, args.disk_max);
        let metrics = Metrics::from_trace(&trace);
        println!(
            "{}: total={}, avg={:.2}, served={}",
            kind, metrics.total_movement, metrics.avg_seek, metrics.served_count
        );
        results.push(AlgorithmResult {
            algorithm: kind.name().to_string(),
            metrics,
        });
    }
    if let Some(path) = &args.json {
        export::write_results_json(path, &results)?;
        info!("results written to {}", path.display());
    }
    Ok(())
}
