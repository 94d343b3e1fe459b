//! Constraint-propagation strategies run after every speculative assignment.
//!
//! Each strategy reports `Ok(true)` when the network is still consistent and
//! `Ok(false)` for a puzzle-level dead end the driver recovers from by
//! rolling back the trail. `Err` is reserved for contract violations.

pub mod forward_checking;
pub mod naked_pairs;
pub mod norvig;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    solver::{network::ConstraintNetwork, trail::Trail, variable::VariableId},
};

/// The closed set of propagation strategies, resolved once at solver setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PropagationPolicy {
    /// Baseline: the whole-network consistency check only, no pruning.
    #[default]
    AssignmentsOnly,
    /// Eliminate each fresh assignment from its neighbours' domains.
    ForwardChecking,
    /// Forward checking plus singleton placement (only-legal-spot inference),
    /// iterated to a fixed point.
    Norvig,
    /// Norvig's two phases plus naked-pair elimination per constraint.
    NakedPairs,
}

impl PropagationPolicy {
    pub fn propagate(self, network: &mut ConstraintNetwork, trail: &mut Trail) -> Result<bool> {
        match self {
            PropagationPolicy::AssignmentsOnly => Ok(network.is_consistent()),
            PropagationPolicy::ForwardChecking => forward_checking::propagate(network, trail),
            PropagationPolicy::Norvig => norvig::propagate(network, trail),
            PropagationPolicy::NakedPairs => naked_pairs::propagate(network, trail),
        }
    }
}

/// Result of one pruning sweep: whether the network survived it, and whether
/// any domain or assignment changed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sweep {
    pub alive: bool,
    pub changed: bool,
}

impl Sweep {
    pub(crate) const DEAD: Sweep = Sweep {
        alive: false,
        changed: true,
    };
}

/// The elimination phase shared by every pruning strategy: for each source in
/// `sources` holding a not-yet-consumed assignment, strip that value from the
/// domains of its unassigned neighbours, pushing each before mutation. An
/// emptied domain kills the sweep. The source's modified flag is cleared
/// (under a trail snapshot) once consumed, keeping repeated calls idempotent.
pub(crate) fn eliminate_assigned(
    network: &mut ConstraintNetwork,
    trail: &mut Trail,
    sources: &[VariableId],
) -> Result<Sweep> {
    let mut changed = false;
    for &source in sources {
        let v = network.variable(source);
        if !v.is_modified() {
            continue;
        }
        let Some(value) = v.assignment() else {
            continue;
        };
        for neighbour in network.neighbours_of(source).to_vec() {
            let n = network.variable(neighbour);
            if n.is_assigned() || !n.domain().contains(value) {
                continue;
            }
            trail.push(n)?;
            let n = network.variable_mut(neighbour);
            n.remove_value(value);
            changed = true;
            if n.domain().is_empty() {
                return Ok(Sweep::DEAD);
            }
        }
        trail.push(network.variable(source))?;
        network.variable_mut(source).set_modified(false);
    }
    Ok(Sweep { alive: true, changed })
}

/// Norvig's second phase over one constraint: for every value `1..=N`, count
/// the members still admitting it. Zero admitting members means the value has
/// nowhere to go; exactly one unassigned admitting member gets the value
/// assigned (pushed first, marked modified so its own elimination cascades).
pub(crate) fn place_singletons(
    network: &mut ConstraintNetwork,
    trail: &mut Trail,
    members: &[VariableId],
) -> Result<Sweep> {
    let mut changed = false;
    for value in 1..=network.side() as i32 {
        let mut admitting = 0;
        let mut candidate = None;
        for &id in members {
            if network.variable(id).domain().contains(value) {
                admitting += 1;
                candidate = Some(id);
                if admitting == 2 {
                    break;
                }
            }
        }
        match (admitting, candidate) {
            (0, _) => return Ok(Sweep::DEAD),
            (1, Some(id)) if !network.variable(id).is_assigned() => {
                trail.push(network.variable(id))?;
                network.variable_mut(id).assign(value);
                changed = true;
            }
            _ => {}
        }
    }
    Ok(Sweep { alive: true, changed })
}
