use crate::solver::variable::{Variable, VariableId};

/// Where a constraint came from in the grid. Only used for diagnostics; the
/// propagation logic treats all three identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintScope {
    Row(usize),
    Column(usize),
    Block(usize),
}

/// An all-different group: a fixed, ordered list of variables whose assigned
/// values must be pairwise distinct. Constraints are built once from the
/// grid's row/column/block structure and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Constraint {
    scope: ConstraintScope,
    vars: Vec<VariableId>,
}

impl Constraint {
    pub fn new(scope: ConstraintScope, vars: Vec<VariableId>) -> Self {
        Self { scope, vars }
    }

    pub fn scope(&self) -> ConstraintScope {
        self.scope
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    pub fn contains(&self, id: VariableId) -> bool {
        self.vars.contains(&id)
    }

    /// Local consistency: no two assigned members share a value. Performs no
    /// propagation.
    pub fn is_consistent(&self, variables: &[Variable]) -> bool {
        for (i, &a) in self.vars.iter().enumerate() {
            let Some(value) = variables[a].assignment() else {
                continue;
            };
            for &b in &self.vars[i + 1..] {
                if variables[b].assignment() == Some(value) {
                    return false;
                }
            }
        }
        true
    }
}
