use std::collections::BTreeMap;

use crate::{
    error::Result,
    solver::{
        network::ConstraintNetwork,
        propagation::{eliminate_assigned, place_singletons, Sweep},
        trail::Trail,
        variable::VariableId,
    },
};

/// The extended strategy: forward-checking elimination, naked-pair
/// elimination, then singleton placement, per constraint in the same order as
/// Norvig propagation, iterated to a fixed point. Strictly stronger than
/// forward checking alone.
pub(crate) fn propagate(network: &mut ConstraintNetwork, trail: &mut Trail) -> Result<bool> {
    loop {
        let mut changed = false;
        for index in 0..network.constraints().len() {
            let members = network.constraint(index).variables().to_vec();

            let sweep = eliminate_assigned(network, trail, &members)?;
            if !sweep.alive {
                return Ok(false);
            }
            changed |= sweep.changed;

            let sweep = eliminate_naked_pairs(network, trail, &members)?;
            if !sweep.alive {
                return Ok(false);
            }
            changed |= sweep.changed;

            let sweep = place_singletons(network, trail, &members)?;
            if !sweep.alive {
                return Ok(false);
            }
            changed |= sweep.changed;

            if !network.constraint(index).is_consistent(network.variables()) {
                return Ok(false);
            }
        }
        if !changed {
            break;
        }
    }
    Ok(network.is_consistent())
}

/// Naked pairs within one constraint: two unassigned members sharing an
/// identical two-value domain claim both values, so every other unassigned
/// member loses them. Three or more members locked to the same pair is an
/// immediate contradiction.
fn eliminate_naked_pairs(
    network: &mut ConstraintNetwork,
    trail: &mut Trail,
    members: &[VariableId],
) -> Result<Sweep> {
    let mut pairs: BTreeMap<(i32, i32), Vec<VariableId>> = BTreeMap::new();
    for &id in members {
        let v = network.variable(id);
        if v.is_assigned() || v.domain().len() != 2 {
            continue;
        }
        let values = v.domain().values();
        let group = pairs.entry((values[0], values[1])).or_default();
        group.push(id);
        if group.len() > 2 {
            return Ok(Sweep::DEAD);
        }
    }

    let mut changed = false;
    for ((low, high), ids) in &pairs {
        if ids.len() != 2 {
            continue;
        }
        for &id in members {
            if ids.contains(&id) || network.variable(id).is_assigned() {
                continue;
            }
            for value in [*low, *high] {
                if !network.variable(id).domain().contains(value) {
                    continue;
                }
                trail.push(network.variable(id))?;
                let v = network.variable_mut(id);
                v.remove_value(value);
                changed = true;
                if v.domain().is_empty() {
                    return Ok(Sweep::DEAD);
                }
            }
        }
    }
    Ok(Sweep { alive: true, changed })
}
