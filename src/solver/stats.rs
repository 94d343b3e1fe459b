use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters gathered over one solve.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Search-tree nodes entered, including the root.
    pub nodes_visited: u64,
    /// Trail rollbacks after a failed candidate value.
    pub backtracks: u64,
    /// Speculative assignments made by the driver (not by propagation).
    pub assignments: u64,
    /// Invocations of the configured propagation strategy.
    pub propagation_calls: u64,
    /// Wall-clock time spent inside propagation.
    pub propagation_micros: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Assignments"),
        Cell::new(&stats.assignments.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Propagation calls"),
        Cell::new(&stats.propagation_calls.to_string()),
    ]));
    let avg_micros = if stats.propagation_calls > 0 {
        stats.propagation_micros as f64 / stats.propagation_calls as f64
    } else {
        0.0
    };
    table.add_row(Row::new(vec![
        Cell::new("Propagation time / call (us)"),
        Cell::new(&format!("{:.2}", avg_micros)),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Propagation time total (ms)"),
        Cell::new(&format!("{:.2}", stats.propagation_micros as f64 / 1000.0)),
    ]));
    table.to_string()
}
