//! Shared report and snapshot types for the keepaway simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for the simulation core and for anything that consumes
//! its output.

pub mod report;
pub mod snapshot;

// Re-export snapshot types
pub use snapshot::{generate_snapshot_id, ActorSnapshot, RoundSnapshot};

// Re-export report types
pub use report::{BusiestPair, InspectionReport};
