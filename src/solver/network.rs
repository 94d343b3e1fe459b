use std::collections::BTreeSet;

use crate::{
    error::Result,
    solver::{
        constraint::{Constraint, ConstraintScope},
        grid::Grid,
        variable::{Variable, VariableId},
    },
};

/// Owns every variable and constraint for one puzzle, plus the derived
/// neighbour relation.
///
/// Two variables are neighbours when they share at least one constraint. The
/// relation is computed once at build time and treated as immutable for the
/// puzzle's lifetime; only variable state (domains, assignments, flags)
/// changes during search, and every such change goes through the
/// [`Trail`](crate::solver::trail::Trail) first.
#[derive(Debug, Clone)]
pub struct ConstraintNetwork {
    side: usize,
    block_rows: usize,
    block_cols: usize,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    neighbours: Vec<Vec<VariableId>>,
}

impl ConstraintNetwork {
    /// Builds the network from a grid: one variable per cell, one
    /// all-different constraint per row, column, and block.
    pub fn from_grid(grid: &Grid) -> Result<Self> {
        let side = grid.side();
        let block_rows = grid.block_rows();
        let block_cols = grid.block_cols();

        let variables: Vec<Variable> = grid
            .cells()
            .iter()
            .enumerate()
            .map(|(id, &value)| {
                if value == 0 {
                    Variable::unassigned(id, side)
                } else {
                    Variable::given(id, value)
                }
            })
            .collect();

        let mut constraints = Vec::with_capacity(3 * side);
        for row in 0..side {
            let vars = (0..side).map(|col| row * side + col).collect();
            constraints.push(Constraint::new(ConstraintScope::Row(row), vars));
        }
        for col in 0..side {
            let vars = (0..side).map(|row| row * side + col).collect();
            constraints.push(Constraint::new(ConstraintScope::Column(col), vars));
        }
        let mut block = 0;
        for band in 0..side / block_rows {
            for stack in 0..side / block_cols {
                let mut vars = Vec::with_capacity(side);
                for r in 0..block_rows {
                    for c in 0..block_cols {
                        let row = band * block_rows + r;
                        let col = stack * block_cols + c;
                        vars.push(row * side + col);
                    }
                }
                constraints.push(Constraint::new(ConstraintScope::Block(block), vars));
                block += 1;
            }
        }

        let mut neighbour_sets: Vec<BTreeSet<VariableId>> = vec![BTreeSet::new(); variables.len()];
        for constraint in &constraints {
            for &a in constraint.variables() {
                for &b in constraint.variables() {
                    if a != b {
                        neighbour_sets[a].insert(b);
                    }
                }
            }
        }
        let neighbours = neighbour_sets
            .into_iter()
            .map(|set| set.into_iter().collect())
            .collect();

        Ok(Self {
            side,
            block_rows,
            block_cols,
            variables,
            constraints,
            neighbours,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn variable_mut(&mut self, id: VariableId) -> &mut Variable {
        &mut self.variables[id]
    }

    /// Overwrites a variable with a trail snapshot during rollback.
    pub(crate) fn restore_variable(&mut self, id: VariableId, snapshot: Variable) {
        self.variables[id] = snapshot;
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn constraint(&self, index: usize) -> &Constraint {
        &self.constraints[index]
    }

    /// All variables sharing a constraint with `id`, in ascending order.
    pub fn neighbours_of(&self, id: VariableId) -> &[VariableId] {
        &self.neighbours[id]
    }

    /// The number of unassigned neighbours of `id`, the degree measure used
    /// by the MRV tie-break and LCV heuristics.
    pub fn unassigned_neighbour_count(&self, id: VariableId) -> usize {
        self.neighbours[id]
            .iter()
            .filter(|&&n| !self.variables[n].is_assigned())
            .count()
    }

    /// Baseline consistency: every constraint is locally consistent. No
    /// propagation is performed.
    pub fn is_consistent(&self) -> bool {
        self.constraints
            .iter()
            .all(|c| c.is_consistent(&self.variables))
    }

    pub fn assigned_count(&self) -> usize {
        self.variables.iter().filter(|v| v.is_assigned()).count()
    }

    /// Exports current assignments as a grid; unassigned cells come out blank.
    pub fn to_grid(&self) -> Grid {
        let cells = self
            .variables
            .iter()
            .map(|v| v.assignment().unwrap_or(0))
            .collect();
        // The cells came from a validated grid, so rebuilding cannot fail.
        Grid::new(self.block_rows, self.block_cols, cells)
            .unwrap_or_else(|_| unreachable!("network state always maps back to a valid grid"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn four_grid() -> Grid {
        let cells = vec![
            1, 0, 0, 0, //
            0, 0, 0, 2, //
            0, 3, 0, 0, //
            0, 0, 4, 0,
        ];
        Grid::new(2, 2, cells).unwrap()
    }

    #[test]
    fn builds_rows_columns_and_blocks() {
        let network = ConstraintNetwork::from_grid(&four_grid()).unwrap();
        assert_eq!(network.constraints().len(), 12);
        assert_eq!(network.variables().len(), 16);

        let blocks: Vec<&Constraint> = network
            .constraints()
            .iter()
            .filter(|c| matches!(c.scope(), ConstraintScope::Block(_)))
            .collect();
        assert_eq!(blocks.len(), 4);
        // Top-left 2x2 block.
        assert_eq!(blocks[0].variables(), &[0, 1, 4, 5]);
    }

    #[test]
    fn non_square_blocks_tile_the_grid() {
        let grid = Grid::empty(2, 3).unwrap();
        let network = ConstraintNetwork::from_grid(&grid).unwrap();
        let blocks: Vec<&Constraint> = network
            .constraints()
            .iter()
            .filter(|c| matches!(c.scope(), ConstraintScope::Block(_)))
            .collect();
        assert_eq!(blocks.len(), 6);
        // First block spans rows 0..2, columns 0..3 of the 6x6 grid.
        assert_eq!(blocks[0].variables(), &[0, 1, 2, 6, 7, 8]);
    }

    #[test]
    fn neighbours_are_the_union_of_shared_constraints() {
        let network = ConstraintNetwork::from_grid(&four_grid()).unwrap();
        // Cell 0 shares row 0, column 0, and the top-left block.
        assert_eq!(network.neighbours_of(0), &[1, 2, 3, 4, 5, 8, 12]);
    }

    #[test]
    fn givens_arrive_assigned_and_modified() {
        let network = ConstraintNetwork::from_grid(&four_grid()).unwrap();
        assert_eq!(network.variable(0).assignment(), Some(1));
        assert!(network.variable(0).is_modified());
        assert!(!network.variable(0).is_changeable());
        assert!(!network.variable(1).is_assigned());
        assert_eq!(network.assigned_count(), 4);
    }

    #[test]
    fn grid_round_trips_through_the_network() {
        let grid = four_grid();
        let network = ConstraintNetwork::from_grid(&grid).unwrap();
        assert_eq!(network.to_grid(), grid);
    }

    #[test]
    fn baseline_consistency_spots_a_duplicate() {
        let mut network = ConstraintNetwork::from_grid(&four_grid()).unwrap();
        assert!(network.is_consistent());
        // Cell 1 is in the same row as the given 1 at cell 0.
        network.variable_mut(1).assign(1);
        assert!(!network.is_consistent());
    }
}
