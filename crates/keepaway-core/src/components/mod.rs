//! Components
//!
//! The actor and the transform it applies.

pub mod actor;

pub use actor::*;
