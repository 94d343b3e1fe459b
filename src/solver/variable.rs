use crate::solver::domain::Domain;

/// Index of a variable within its [`ConstraintNetwork`], stable for the
/// lifetime of the puzzle.
///
/// [`ConstraintNetwork`]: crate::solver::network::ConstraintNetwork
pub type VariableId = usize;

/// One grid cell under search: its candidate domain, an explicit assignment,
/// and the bookkeeping flags the propagation strategies rely on.
///
/// Assignment is a committed choice, not merely "domain of size one": a
/// domain can shrink to a single candidate without the search having branched
/// on it. The `modified` flag marks a variable whose assignment has not yet
/// been consumed by propagation; each strategy clears it exactly once
/// processed so repeated calls stay idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    id: VariableId,
    domain: Domain,
    assignment: Option<i32>,
    modified: bool,
    changeable: bool,
}

impl Variable {
    /// A blank cell with the full `1..=side` domain.
    pub fn unassigned(id: VariableId, side: usize) -> Self {
        Self {
            id,
            domain: Domain::full(side),
            assignment: None,
            modified: false,
            changeable: true,
        }
    }

    /// A given cell: assigned up front, never reassigned, and marked modified
    /// so the first propagation pass eliminates it from its neighbours.
    pub fn given(id: VariableId, value: i32) -> Self {
        Self {
            id,
            domain: Domain::singleton(value),
            assignment: Some(value),
            modified: true,
            changeable: false,
        }
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn assignment(&self) -> Option<i32> {
        self.assignment
    }

    pub fn is_assigned(&self) -> bool {
        self.assignment.is_some()
    }

    /// Commits `value`: collapses the domain and marks the variable modified
    /// so the next propagation call picks it up. The caller must have pushed
    /// this variable onto the trail first.
    pub fn assign(&mut self, value: i32) {
        self.domain = Domain::singleton(value);
        self.assignment = Some(value);
        self.modified = true;
    }

    /// Removes a candidate from the domain. Returns whether it was present.
    pub fn remove_value(&mut self, value: i32) -> bool {
        self.domain.remove(value)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// Whether the search may branch on this cell. Givens are not changeable.
    pub fn is_changeable(&self) -> bool {
        self.changeable
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_cell_starts_unassigned_and_clean() {
        let v = Variable::unassigned(0, 9);
        assert!(!v.is_assigned());
        assert!(!v.is_modified());
        assert!(v.is_changeable());
        assert_eq!(v.domain().len(), 9);
    }

    #[test]
    fn given_cell_is_fixed_and_pending_propagation() {
        let v = Variable::given(3, 5);
        assert_eq!(v.assignment(), Some(5));
        assert!(v.is_modified());
        assert!(!v.is_changeable());
        assert_eq!(v.domain().values(), &[5]);
    }

    #[test]
    fn assign_collapses_the_domain_and_sets_the_dirty_flag() {
        let mut v = Variable::unassigned(1, 4);
        v.assign(2);
        assert_eq!(v.assignment(), Some(2));
        assert_eq!(v.domain().values(), &[2]);
        assert!(v.is_modified());
    }
}
