use tracing::trace;

use crate::{
    error::Result,
    solver::{
        network::ConstraintNetwork,
        propagation::{eliminate_assigned, place_singletons},
        trail::Trail,
    },
};

/// Norvig's propagation: per constraint, assignment elimination followed by
/// singleton placement, iterated until neither phase changes anything. The
/// modified flag lets each pass skip already-consumed assignments, so the
/// outer loop only re-runs while fresh assignments keep appearing.
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
        trace!("norvig pass changed the network, running another");
    }
    Ok(network.is_consistent())
}
