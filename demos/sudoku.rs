use std::time::Duration;

use clap::Parser;
use revoco::{
    error::Result,
    solver::{
        engine::{BacktrackingSolver, SolveOutcome, SolverConfig},
        grid::Grid,
        heuristics::{value::ValueOrdering, variable::VariableOrdering},
        propagation::PropagationPolicy,
        stats::render_stats_table,
    },
};

/// Solve a 9x9 Sudoku with a configurable strategy stack.
#[derive(Parser, Debug)]
struct Args {
    /// 81 characters, row-major; digits 1-9 are givens, '0' or '.' blanks.
    /// Defaults to a classic puzzle when omitted.
    #[arg(long)]
    puzzle: Option<String>,

    #[arg(long, value_enum, default_value = "norvig")]
    propagation: PropagationPolicy,

    #[arg(long, value_enum, default_value = "minimum-remaining-values")]
    variable_order: VariableOrdering,

    #[arg(long, value_enum, default_value = "natural")]
    value_order: ValueOrdering,

    /// Wall-clock budget for the whole solve, in seconds.
    #[arg(long, default_value_t = 600)]
    budget_secs: u64,

    /// Emit the outcome as JSON instead of a rendered grid.
    #[arg(long)]
    json: bool,
}

const CLASSIC: &str = "\
    530070000\
    600195000\
    098000060\
    800060003\
    400803001\
    700020006\
    060000280\
    000419005\
    000080079";

fn parse_puzzle(text: &str) -> Result<Grid> {
    let cells = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .map(|c| match c {
            '.' => 0,
            digit => digit as i32 - '0' as i32,
        })
        .collect();
    Grid::new(3, 3, cells)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let puzzle = parse_puzzle(args.puzzle.as_deref().unwrap_or(CLASSIC))?;
    let config = SolverConfig {
        propagation: args.propagation,
        variable_ordering: args.variable_order,
        value_ordering: args.value_order,
    };

    let mut solver = BacktrackingSolver::new(&puzzle, config)?;
    let (outcome, stats) = solver.solve(Duration::from_secs(args.budget_secs))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).expect("outcome serialises")
        );
        return Ok(());
    }

    match outcome {
        SolveOutcome::Solved(solved) => {
            println!("Solution found!\n");
            println!("{}", solved);
        }
        SolveOutcome::Exhausted => println!("No solution exists under {:?}.", config.propagation),
        SolveOutcome::TimedOut => println!("Time budget exceeded."),
    }
    println!("{}", render_stats_table(&stats));
    Ok(())
}
