//! Systems
//!
//! The round algorithm and the simulation that owns the roster.

pub mod round;

pub use round::{compute_reduction_modulus, Simulation};
