use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::solver::{network::ConstraintNetwork, variable::VariableId};

/// The order in which candidate values are tried for a chosen variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ValueOrdering {
    /// Ascending numeric order of the domain's current members.
    #[default]
    Natural,
    /// Least constraining value: ascending by the number of unassigned
    /// neighbours whose domain still admits the value, so the value that
    /// eliminates the fewest neighbour options is tried first. Ties keep
    /// ascending order.
    LeastConstraining,
}

impl ValueOrdering {
    pub fn order(self, network: &ConstraintNetwork, id: VariableId) -> Vec<i32> {
        let mut values = network.variable(id).domain().values().to_vec();
        if self == ValueOrdering::LeastConstraining {
            // sort_by_key is stable, so equally constraining values stay in
            // their ascending encounter order.
            values.sort_by_key(|&value| {
                network
                    .neighbours_of(id)
                    .iter()
                    .filter(|&&n| {
                        let neighbour = network.variable(n);
                        !neighbour.is_assigned() && neighbour.domain().contains(value)
                    })
                    .count()
            });
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::grid::Grid;

    fn network() -> ConstraintNetwork {
        ConstraintNetwork::from_grid(&Grid::empty(2, 2).unwrap()).unwrap()
    }

    #[test]
    fn natural_order_is_the_ascending_domain() {
        let mut network = network();
        network.variable_mut(0).remove_value(2);
        assert_eq!(ValueOrdering::Natural.order(&network, 0), vec![1, 3, 4]);
    }

    #[test]
    fn lcv_tries_the_least_constraining_value_first() {
        let mut network = network();
        // Shrink cell 0 to {1, 2, 3}.
        network.variable_mut(0).remove_value(4);
        // Cell 0's neighbours are 1, 2, 3, 4, 5, 8, 12. Arrange for 1 to be
        // admitted by two unassigned neighbours, 2 by one, and 3 by none.
        for value in [2, 3] {
            network.variable_mut(1).remove_value(value);
            network.variable_mut(2).remove_value(value);
        }
        for value in [1, 3] {
            network.variable_mut(3).remove_value(value);
        }
        for &n in &[4usize, 5, 8, 12] {
            for value in [1, 2, 3] {
                network.variable_mut(n).remove_value(value);
            }
        }
        assert_eq!(
            ValueOrdering::LeastConstraining.order(&network, 0),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn lcv_ignores_assigned_neighbours() {
        let mut network = network();
        network.variable_mut(1).assign(2);
        // Every unassigned neighbour still admits every value, so counts tie
        // and ascending order survives; the assigned neighbour's collapsed
        // domain must not bias the counts.
        assert_eq!(
            ValueOrdering::LeastConstraining.order(&network, 0),
            vec![1, 2, 3, 4]
        );
    }
}
