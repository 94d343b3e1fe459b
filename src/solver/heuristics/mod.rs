//! Variable-selection and value-ordering heuristics for the search driver.
//!
//! Both axes are closed enums resolved once at solver setup. Selection and
//! ordering never mutate the network; the driver re-runs them at every node
//! because propagation shrinks domains between nodes.

pub mod value;
pub mod variable;
