pub mod constraint;
pub mod domain;
pub mod engine;
pub mod grid;
pub mod heuristics;
pub mod network;
pub mod propagation;
pub mod stats;
pub mod trail;
pub mod variable;
