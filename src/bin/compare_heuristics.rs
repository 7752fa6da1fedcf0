use clap::Parser;
use npuzzle_solver::engine::State;
use npuzzle_solver::heuristics::{Heuristic, ManhattanDistance, MisplacedTiles};
use npuzzle_solver::solver::{solve_astar, SearchOutcome};
use npuzzle_solver::utils::state_from_str_rows;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of additional seeded random instances to evaluate
    #[clap(short, long, default_value_t = 0)]
    random: usize,

    /// Base seed for random instance generation
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Random-walk length used to scramble random instances
    #[clap(long, default_value_t = 20)]
    scramble_moves: usize,

    /// Side length of random instances
    #[clap(long, default_value_t = 3)]
    size: usize,
}

/// The two fixed experiment instances from the original comparison study.
fn fixed_experiments() -> Vec<(String, State, State)> {
    let start_01 = state_from_str_rows(&["2 8 3", "1 6 4", "0 7 5"]).expect("valid fixture");
    let goal_01 = state_from_str_rows(&["1 2 3", "8 0 4", "7 6 5"]).expect("valid fixture");

    let start_02 = state_from_str_rows(&["7 2 4", "5 0 6", "8 3 1"]).expect("valid fixture");
    let goal_02 = State::solved(3);

    vec![
        ("Experiment 01".to_string(), start_01, goal_01),
        ("Experiment 02".to_string(), start_02, goal_02),
    ]
}

fn run_experiment(label: &str, start: &State, goal: &State) {
    println!("{}", label);
    println!("Start state:\n{}", start);
    println!("Goal state:\n{}", goal);

    let heuristics: [&dyn Heuristic; 2] = [&MisplacedTiles, &ManhattanDistance];
    let mut rows = Vec::new();

    for heuristic in heuristics {
        let clock = Instant::now();
        let report = solve_astar(start, goal, heuristic)
            .unwrap_or_else(|e| panic!("Search setup failed for {}: {}", label, e));
        let elapsed = clock.elapsed().as_secs_f64();

        let cost = match report.outcome {
            SearchOutcome::Found { cost, .. } => cost.to_string(),
            SearchOutcome::Exhausted => "unreachable".to_string(),
            // solve_astar never imposes a ceiling.
            SearchOutcome::LimitReached => unreachable!("unbounded search cannot hit a ceiling"),
        };
        rows.push((heuristic.name().to_string(), report.expanded, elapsed, cost));
    }

    println!(
        "{:<20} {:<15} {:<15} {:<15}",
        "Heuristic", "Expanded nodes", "Time (s)", "Cost"
    );
    for (name, expanded, elapsed, cost) in &rows {
        println!("{:<20} {:<15} {:<15.4} {:<15}", name, expanded, elapsed, cost);
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    for (label, start, goal) in fixed_experiments() {
        run_experiment(&label, &start, &goal);
    }

    if args.random > 0 {
        println!(
            "Evaluating {} random instances (size {}, {} scramble moves, base seed {})\n",
            args.random, args.size, args.scramble_moves, args.seed
        );
        let goal = State::solved(args.size);
        for i in 0..args.random {
            let seed = args.seed + i as u64;
            let start = goal.scrambled(args.scramble_moves, seed);
            run_experiment(&format!("Random instance (seed {})", seed), &start, &goal);
        }
    }
}
