use clap::{Parser, ValueEnum};
use npuzzle_solver::heuristics::{Heuristic, ManhattanDistance, MisplacedTiles};
use npuzzle_solver::solver::{solve_astar_bounded, SearchOutcome};
use npuzzle_solver::utils::instance_from_str;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicChoice {
    /// h1: number of tiles out of place
    Misplaced,
    /// h2: summed Manhattan distance of all tiles
    Manhattan,
}

impl HeuristicChoice {
    fn as_heuristic(self) -> &'static dyn Heuristic {
        match self {
            HeuristicChoice::Misplaced => &MisplacedTiles,
            HeuristicChoice::Manhattan => &ManhattanDistance,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Heuristic to drive the search
    #[clap(short = 'H', long, value_enum, default_value_t = HeuristicChoice::Manhattan)]
    heuristic: HeuristicChoice,

    /// Abort after expanding this many nodes
    #[clap(short, long)]
    max_nodes: Option<usize>,

    /// Path to the instance file: start grid, blank line, goal grid,
    /// one whitespace-separated row per line ('.' or 0 for the blank)
    instance_file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let content = fs::read_to_string(&args.instance_file)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", args.instance_file.display(), e));
    let (start, goal) = instance_from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid instance in {}: {}", args.instance_file.display(), e));

    println!("Loaded instance from {}\n", args.instance_file.display());
    println!("Start state:\n{}", start);
    println!("Goal state:\n{}", goal);

    let heuristic = args.heuristic.as_heuristic();
    let ceiling = args.max_nodes.unwrap_or(usize::MAX);
    println!("Searching with the {} heuristic...\n", heuristic.name());

    let clock = Instant::now();
    let report = solve_astar_bounded(&start, &goal, heuristic, ceiling)
        .unwrap_or_else(|e| panic!("Search setup failed: {}", e));
    let elapsed = clock.elapsed();

    match report.outcome {
        SearchOutcome::Found { path, cost } => {
            println!("Solution found: {} moves", cost);
            for (i, state) in path.iter().enumerate() {
                println!("Step {}:\n{}", i, state);
            }
            println!(
                "Expanded {} nodes in {:.4} seconds.",
                report.expanded,
                elapsed.as_secs_f64()
            );
        }
        SearchOutcome::Exhausted => {
            println!(
                "No solution exists: the goal is unreachable from this start \
                 ({} nodes expanded, {:.4} seconds).",
                report.expanded,
                elapsed.as_secs_f64()
            );
        }
        SearchOutcome::LimitReached => {
            println!(
                "Gave up after expanding {} nodes (ceiling {}), {:.4} seconds.",
                report.expanded,
                ceiling,
                elapsed.as_secs_f64()
            );
        }
    }
}
