use crate::{
    error::Result,
    solver::{
        network::ConstraintNetwork,
        propagation::eliminate_assigned,
        trail::Trail,
        variable::VariableId,
    },
};

/// Forward checking: every variable holding a fresh assignment has that value
/// eliminated from its unassigned neighbours' domains. Reports the baseline
/// consistency check on success; an emptied domain aborts immediately.
pub(crate) fn propagate(network: &mut ConstraintNetwork, trail: &mut Trail) -> Result<bool> {
    let sources: Vec<VariableId> = (0..network.variables().len()).collect();
    let sweep = eliminate_assigned(network, trail, &sources)?;
    if !sweep.alive {
        return Ok(false);
    }
    Ok(network.is_consistent())
}
