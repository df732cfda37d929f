//! Checkpoint Recording
//!
//! Keeps a snapshot of the roster every N completed rounds.

use keepaway_events::RoundSnapshot;

/// Collects periodic round snapshots during a run
#[derive(Debug, Clone, Default)]
pub struct CheckpointRecorder {
    interval: u64,
    snapshots: Vec<RoundSnapshot>,
}

impl CheckpointRecorder {
    /// An interval of 0 records nothing
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            snapshots: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.interval > 0
    }

    pub fn should_record(&self, completed_rounds: u64) -> bool {
        self.is_enabled() && completed_rounds > 0 && completed_rounds % self.interval == 0
    }

    pub fn record(&mut self, snapshot: RoundSnapshot) {
        tracing::info!(
            "Checkpoint after round {}: {} inspections, {} items in flight",
            snapshot.round,
            snapshot.total_inspections(),
            snapshot.items_in_flight()
        );
        self.snapshots.push(snapshot);
    }

    pub fn snapshots(&self) -> &[RoundSnapshot] {
        &self.snapshots
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn into_snapshots(self) -> Vec<RoundSnapshot> {
        self.snapshots
    }
}
