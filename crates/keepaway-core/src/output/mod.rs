//! Output
//!
//! Checkpoint recording and rendering of the final result.

pub mod checkpoints;
pub mod report;

pub use checkpoints::CheckpointRecorder;
pub use report::{ReportFormat, RunOutput};
