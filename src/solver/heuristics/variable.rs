use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::solver::{network::ConstraintNetwork, variable::VariableId};

/// How the driver picks the next variable to branch on. `None` from
/// [`select`](VariableOrdering::select) means every variable is assigned,
/// which is the search's success signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VariableOrdering {
    /// The first unassigned variable in the network's stored order.
    #[default]
    FirstUnassigned,
    /// Minimum remaining values: the unassigned variable with the smallest
    /// domain, first encountered wins ties. A fail-first strategy.
    MinimumRemainingValues,
    /// MRV with a degree tie-break: among the smallest-domain variables,
    /// prefer the one constraining the most unassigned neighbours.
    MrvDegree,
}

impl VariableOrdering {
    pub fn select(self, network: &ConstraintNetwork) -> Option<VariableId> {
        match self {
            VariableOrdering::FirstUnassigned => first_unassigned(network),
            VariableOrdering::MinimumRemainingValues => minimum_remaining_values(network),
            VariableOrdering::MrvDegree => mrv_with_degree(network),
        }
    }
}

fn unassigned(network: &ConstraintNetwork) -> impl Iterator<Item = VariableId> + '_ {
    network
        .variables()
        .iter()
        .filter(|v| v.is_changeable() && !v.is_assigned())
        .map(|v| v.id())
}

fn first_unassigned(network: &ConstraintNetwork) -> Option<VariableId> {
    unassigned(network).next()
}

fn minimum_remaining_values(network: &ConstraintNetwork) -> Option<VariableId> {
    // min_by_key keeps the first of several minima, which is exactly the
    // encounter-order tie-break.
    unassigned(network).min_by_key(|&id| network.variable(id).domain().len())
}

fn mrv_with_degree(network: &ConstraintNetwork) -> Option<VariableId> {
    let smallest = unassigned(network)
        .map(|id| network.variable(id).domain().len())
        .min()?;
    unassigned(network)
        .filter(|&id| network.variable(id).domain().len() == smallest)
        .min_by_key(|&id| std::cmp::Reverse(network.unassigned_neighbour_count(id)))
}
