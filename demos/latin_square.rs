//! Solves a 6x6 grid with rectangular 2x3 blocks, showing that the engine is
//! not tied to square block shapes.

use std::time::Duration;

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

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let puzzle = Grid::new(
        2,
        3,
        vec![
            0, 0, 0, 0, 4, 0, //
            0, 0, 2, 0, 0, 6, //
            1, 0, 0, 0, 0, 4, //
            6, 0, 0, 0, 0, 2, //
            2, 0, 0, 5, 0, 0, //
            0, 5, 0, 0, 0, 0,
        ],
    )?;

    let config = SolverConfig {
        propagation: PropagationPolicy::NakedPairs,
        variable_ordering: VariableOrdering::MrvDegree,
        value_ordering: ValueOrdering::LeastConstraining,
    };

    println!("Puzzle:\n{}", puzzle);
    let mut solver = BacktrackingSolver::new(&puzzle, config)?;
    let (outcome, stats) = solver.solve(Duration::from_secs(600))?;

    match outcome {
        SolveOutcome::Solved(solved) => println!("Solved:\n{}", solved),
        other => println!("{:?}", other),
    }
    println!("{}", render_stats_table(&stats));
    Ok(())
}
