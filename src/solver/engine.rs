use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    error::Result,
    solver::{
        grid::Grid,
        heuristics::{value::ValueOrdering, variable::VariableOrdering},
        network::ConstraintNetwork,
        propagation::PropagationPolicy,
        stats::SearchStats,
        trail::Trail,
    },
};

/// The budget the original tooling hands a solve when the caller does not say
/// otherwise.
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(600);

/// Low-water mark for the remaining budget. A call entered with this much or
/// less left aborts upward with [`SolveOutcome::TimedOut`] before doing any
/// work.
pub const TIME_LOW_WATER: Duration = Duration::from_secs(1);

/// The three orthogonal strategy axes, resolved once at solver construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub propagation: PropagationPolicy,
    pub variable_ordering: VariableOrdering,
    pub value_ordering: ValueOrdering,
}

/// Terminal result of a solve. `Exhausted` means provably no solution under
/// the configured propagation; `TimedOut` is a budget abort and must never be
/// read as "no solution".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolveOutcome {
    Solved(Grid),
    Exhausted,
    TimedOut,
}

/// Signal threaded up the recursion. Distinct from [`SolveOutcome`] so the
/// solved grid is only extracted once at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchSignal {
    Solved,
    Exhausted,
    TimedOut,
}

/// The recursive backtracking driver.
///
/// Owns the network and the trail for one puzzle, so all mutable search state
/// is confined to a single explicit context rather than shared references.
/// Every speculative mutation goes through the trail; a failed candidate is
/// unwound to the marker placed for it before the next candidate is tried.
pub struct BacktrackingSolver {
    network: ConstraintNetwork,
    trail: Trail,
    config: SolverConfig,
    stats: SearchStats,
}

impl BacktrackingSolver {
    pub fn new(grid: &Grid, config: SolverConfig) -> Result<Self> {
        Ok(Self {
            network: ConstraintNetwork::from_grid(grid)?,
            trail: Trail::new(),
            config,
            stats: SearchStats::default(),
        })
    }

    pub fn network(&self) -> &ConstraintNetwork {
        &self.network
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Runs the search under the given wall-clock budget.
    pub fn solve(&mut self, budget: Duration) -> Result<(SolveOutcome, SearchStats)> {
        debug!(config = ?self.config, budget_secs = budget.as_secs(), "starting solve");
        let outcome = match self.search(budget)? {
            SearchSignal::Solved => SolveOutcome::Solved(self.network.to_grid()),
            SearchSignal::Exhausted => SolveOutcome::Exhausted,
            SearchSignal::TimedOut => SolveOutcome::TimedOut,
        };
        debug!(
            nodes = self.stats.nodes_visited,
            backtracks = self.stats.backtracks,
            "solve finished"
        );
        Ok((outcome, self.stats.clone()))
    }

    fn search(&mut self, time_left: Duration) -> Result<SearchSignal> {
        if time_left <= TIME_LOW_WATER {
            return Ok(SearchSignal::TimedOut);
        }
        let start = Instant::now();
        self.stats.nodes_visited += 1;

        let Some(id) = self.config.variable_ordering.select(&self.network) else {
            // No unassigned variable left. Propagation only ever runs after a
            // speculative assignment, so a grid given in full arrives here
            // unchecked; conflicting givens must not pass as a solution.
            return Ok(if self.network.is_consistent() {
                SearchSignal::Solved
            } else {
                SearchSignal::Exhausted
            });
        };
        trace!(cell = id, depth = self.trail.depth(), "branching");

        for value in self.config.value_ordering.order(&self.network, id) {
            self.trail.place_marker();
            self.trail.push(self.network.variable(id))?;
            self.network.variable_mut(id).assign(value);
            self.stats.assignments += 1;

            if self.propagate()? {
                let remaining = time_left.saturating_sub(start.elapsed());
                match self.search(remaining)? {
                    SearchSignal::TimedOut => {
                        // Unwind this edge too, so a timed-out solver still
                        // exposes the network it was handed.
                        self.trail.undo(&mut self.network)?;
                        return Ok(SearchSignal::TimedOut);
                    }
                    SearchSignal::Solved => return Ok(SearchSignal::Solved),
                    SearchSignal::Exhausted => {}
                }
            }

            self.trail.undo(&mut self.network)?;
            self.stats.backtracks += 1;
        }

        Ok(SearchSignal::Exhausted)
    }

    fn propagate(&mut self) -> Result<bool> {
        self.stats.propagation_calls += 1;
        let start = Instant::now();
        let consistent = self
            .config
            .propagation
            .propagate(&mut self.network, &mut self.trail);
        self.stats.propagation_micros += start.elapsed().as_micros() as u64;
        consistent
    }
}


#[cfg(test)]
mod prop_tests {
    use proptest::{
        prelude::*,
        strategy::{Just, NewTree, Strategy},
        test_runner::TestRunner,
    };
    use sudoku::Sudoku;

    use super::*;

    fn bytes_to_grid(bytes: &[u8; 81]) -> Grid {
        let cells = bytes.iter().map(|&b| b as i32).collect();
        Grid::new(3, 3, cells).unwrap()
    }

    #[derive(Debug, Clone)]
    struct GeneratedPuzzle;

    impl Strategy for GeneratedPuzzle {
        type Tree = <Just<(Grid, Grid)> as Strategy>::Tree;
        type Value = (Grid, Grid);

        fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
            let solved = Sudoku::generate_solved_with_rng(runner.rng());
            let puzzle = Sudoku::generate_with_symmetry_and_rng_from(
                solved,
                sudoku::Symmetry::None,
                runner.rng(),
            );
            Just((bytes_to_grid(&puzzle.to_bytes()), bytes_to_grid(&solved.to_bytes())))
                .new_tree(runner)
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn solves_generated_puzzles((puzzle, solution_key) in GeneratedPuzzle) {
            let cfg = SolverConfig {
                propagation: PropagationPolicy::Norvig,
                variable_ordering: VariableOrdering::MrvDegree,
                value_ordering: ValueOrdering::LeastConstraining,
            };
            let mut solver = BacktrackingSolver::new(&puzzle, cfg).unwrap();
            let (outcome, _) = solver.solve(DEFAULT_BUDGET).unwrap();
            let SolveOutcome::Solved(solved) = outcome else {
                panic!("generated puzzle not solved: {:?}", outcome);
            };
            // Generated puzzles have unique solutions, so the generator's key
            // is the only valid answer.
            prop_assert_eq!(solved, solution_key);
        }
    }
}
