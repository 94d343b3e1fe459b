use tracing::trace;

use crate::{
    error::{Result, SolverError},
    solver::{
        network::ConstraintNetwork,
        variable::{Variable, VariableId},
    },
};

/// The chronological undo log for speculative search mutations.
///
/// Each marker delimits the mutations of one search-tree edge. A variable is
/// pushed *before* it is mutated; `undo` pops the most recent marker and
/// restores every variable recorded under it, in reverse recording order, so
/// the network is bit-for-bit identical to its state when the marker was
/// placed. Pushing the same variable twice under one marker is fine: the
/// earlier (outermost) snapshot wins once both are unwound.
///
/// Calling `push` or `undo` with no outstanding marker is a driver bug, not
/// puzzle infeasibility, and surfaces as an error.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<(VariableId, Variable)>,
    markers: Vec<usize>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new undo boundary; subsequent pushes belong to it.
    pub fn place_marker(&mut self) {
        self.markers.push(self.entries.len());
    }

    /// Records the variable's current state as a restore point under the
    /// current marker. Must be called before the variable is mutated.
    pub fn push(&mut self, variable: &Variable) -> Result<()> {
        if self.markers.is_empty() {
            return Err(SolverError::PushWithoutMarker.into());
        }
        self.entries.push((variable.id(), variable.clone()));
        Ok(())
    }

    /// Pops the most recent marker, restoring every variable recorded under
    /// it to its snapshotted state in reverse order.
    pub fn undo(&mut self, network: &mut ConstraintNetwork) -> Result<()> {
        let boundary = self
            .markers
            .pop()
            .ok_or(SolverError::UndoWithoutMarker)?;
        trace!(
            restored = self.entries.len() - boundary,
            depth = self.markers.len(),
            "rolling back trail marker"
        );
        while self.entries.len() > boundary {
            // Unwrap is fine: the loop condition guarantees an entry exists.
            let (id, snapshot) = self.entries.pop().unwrap();
            network.restore_variable(id, snapshot);
        }
        Ok(())
    }

    /// The number of outstanding markers, i.e. the current search depth.
    pub fn depth(&self) -> usize {
        self.markers.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
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
    fn undo_restores_the_exact_pre_marker_state() {
        let mut network = network();
        let mut trail = Trail::new();
        let before = network.clone();

        trail.place_marker();
        trail.push(network.variable(0)).unwrap();
        network.variable_mut(0).assign(3);
        trail.push(network.variable(5)).unwrap();
        network.variable_mut(5).remove_value(3);
        network.variable_mut(5).remove_value(1);

        trail.undo(&mut network).unwrap();
        assert_eq!(network.variables(), before.variables());
        assert!(trail.is_empty());
        assert_eq!(trail.depth(), 0);
    }

    #[test]
    fn repeated_pushes_of_one_variable_unwind_to_the_oldest_snapshot() {
        let mut network = network();
        let mut trail = Trail::new();
        let before = network.variable(2).clone();

        trail.place_marker();
        trail.push(network.variable(2)).unwrap();
        network.variable_mut(2).remove_value(4);
        trail.push(network.variable(2)).unwrap();
        network.variable_mut(2).assign(1);

        trail.undo(&mut network).unwrap();
        assert_eq!(network.variable(2), &before);
    }

    #[test]
    fn nested_markers_unwind_one_edge_at_a_time() {
        let mut network = network();
        let mut trail = Trail::new();

        trail.place_marker();
        trail.push(network.variable(0)).unwrap();
        network.variable_mut(0).assign(1);
        let mid = network.clone();

        trail.place_marker();
        trail.push(network.variable(1)).unwrap();
        network.variable_mut(1).assign(2);
        assert_eq!(trail.depth(), 2);

        trail.undo(&mut network).unwrap();
        assert_eq!(network.variables(), mid.variables());
        assert_eq!(trail.depth(), 1);

        trail.undo(&mut network).unwrap();
        assert!(!network.variable(0).is_assigned());
    }

    #[test]
    fn undo_without_marker_is_a_contract_violation() {
        let mut network = network();
        let mut trail = Trail::new();
        assert!(trail.undo(&mut network).is_err());
    }

    #[test]
    fn push_without_marker_is_a_contract_violation() {
        let network = network();
        let mut trail = Trail::new();
        assert!(trail.push(network.variable(0)).is_err());
    }

    #[test]
    fn empty_marker_undo_is_a_no_op_on_the_network() {
        let mut network = network();
        let mut trail = Trail::new();
        let before = network.clone();

        trail.place_marker();
        trail.undo(&mut network).unwrap();
        assert_eq!(network.variables(), before.variables());
    }
}
