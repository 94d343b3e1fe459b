//! Revoco is a trail-based backtracking solver for Latin-square grid puzzles:
//! classic 9x9 Sudoku and any NxN generalisation with p x q blocks.
//!
//! The engine is a chronological depth-first search over an explicitly owned
//! constraint network. Every speculative mutation is recorded on an undo
//! trail before it happens, so a failed branch rolls back to exactly the
//! state it started from. Three orthogonal strategy axes are chosen once at
//! setup:
//!
//! - **Propagation** ([`PropagationPolicy`]): baseline consistency checking,
//!   forward checking, Norvig's elimination-plus-singleton-placement, or
//!   naked-pair elimination.
//! - **Variable ordering** ([`VariableOrdering`]): first unassigned, minimum
//!   remaining values, or MRV with a degree tie-break.
//! - **Value ordering** ([`ValueOrdering`]): natural ascending order or least
//!   constraining value.
//!
//! [`PropagationPolicy`]: solver::propagation::PropagationPolicy
//! [`VariableOrdering`]: solver::heuristics::variable::VariableOrdering
//! [`ValueOrdering`]: solver::heuristics::value::ValueOrdering
//!
//! # Example: completing a 4x4 grid
//!
//! ```
//! use revoco::solver::engine::{BacktrackingSolver, SolverConfig, SolveOutcome, DEFAULT_BUDGET};
//! use revoco::solver::grid::Grid;
//! use revoco::solver::heuristics::variable::VariableOrdering;
//! use revoco::solver::propagation::PropagationPolicy;
//!
//! // 0 marks a blank cell; blocks are 2x2.
//! let puzzle = Grid::new(2, 2, vec![
//!     1, 2, 3, 4,
//!     3, 4, 1, 2,
//!     2, 1, 4, 3,
//!     0, 0, 0, 0,
//! ]).unwrap();
//!
//! let config = SolverConfig {
//!     propagation: PropagationPolicy::Norvig,
//!     variable_ordering: VariableOrdering::MinimumRemainingValues,
//!     ..SolverConfig::default()
//! };
//!
//! let mut solver = BacktrackingSolver::new(&puzzle, config).unwrap();
//! let (outcome, stats) = solver.solve(DEFAULT_BUDGET).unwrap();
//!
//! let SolveOutcome::Solved(solved) = outcome else { panic!("unsolved") };
//! assert_eq!(solved.get(3, 0), 4);
//! assert!(stats.nodes_visited >= 1);
//! ```
pub mod error;
pub mod solver;
