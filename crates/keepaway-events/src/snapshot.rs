//! Snapshot Types
//!
//! Serialization structs for the state of the roster at a round boundary.
//!
//! Snapshots are cheap summaries: they carry counters and queue lengths, never
//! the worry values themselves.

use serde::{Deserialize, Serialize};

/// Generates a snapshot ID for the given round number.
pub fn generate_snapshot_id(round: u64) -> String {
    format!("round_{:06}", round)
}

/// One actor at a round boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub actor_id: usize,
    /// Total values this actor has inspected since the start of the run
    pub inspections: u64,
    /// Values sitting in the actor's queue when the snapshot was taken
    #[serde(default)]
    pub held_items: usize,
}

impl ActorSnapshot {
    /// Creates a new ActorSnapshot.
    pub fn new(actor_id: usize, inspections: u64, held_items: usize) -> Self {
        Self {
            actor_id,
            inspections,
            held_items,
        }
    }
}

/// The whole roster after a completed round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub snapshot_id: String,
    /// Number of rounds completed when the snapshot was taken
    pub round: u64,
    pub actors: Vec<ActorSnapshot>,
}

impl RoundSnapshot {
    /// Creates a snapshot for the given round.
    pub fn new(round: u64, actors: Vec<ActorSnapshot>) -> Self {
        Self {
            snapshot_id: generate_snapshot_id(round),
            round,
            actors,
        }
    }

    /// Finds an actor by ID.
    pub fn find_actor(&self, actor_id: usize) -> Option<&ActorSnapshot> {
        self.actors.iter().find(|a| a.actor_id == actor_id)
    }

    /// Total number of values held across every queue.
    pub fn items_in_flight(&self) -> usize {
        self.actors.iter().map(|a| a.held_items).sum()
    }

    /// Total inspections across every actor.
    pub fn total_inspections(&self) -> u64 {
        self.actors.iter().map(|a| a.inspections).sum()
    }

    /// Serializes the snapshot to compact JSON (one JSONL line).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoundSnapshot {
        RoundSnapshot::new(
            20,
            vec![
                ActorSnapshot::new(0, 99, 5),
                ActorSnapshot::new(1, 97, 5),
                ActorSnapshot::new(2, 8, 0),
                ActorSnapshot::new(3, 103, 0),
            ],
        )
    }

    #[test]
    fn test_generate_snapshot_id() {
        assert_eq!(generate_snapshot_id(1), "round_000001");
        assert_eq!(generate_snapshot_id(10000), "round_010000");
    }

    #[test]
    fn test_round_snapshot_totals() {
        let snapshot = sample();

        assert_eq!(snapshot.snapshot_id, "round_000020");
        assert_eq!(snapshot.items_in_flight(), 10);
        assert_eq!(snapshot.total_inspections(), 307);
    }

    #[test]
    fn test_find_actor() {
        let snapshot = sample();

        assert_eq!(snapshot.find_actor(3).map(|a| a.inspections), Some(103));
        assert!(snapshot.find_actor(7).is_none());
    }

    #[test]
    fn test_held_items_defaults_when_missing() {
        let json = r#"{"actor_id":2,"inspections":8}"#;
        let actor: ActorSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(actor, ActorSnapshot::new(2, 8, 0));
    }

    #[test]
    fn test_snapshot_json_line() {
        let json = sample().to_json().unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains("round_000020"));
        assert_eq!(RoundSnapshot::from_json(&json).unwrap(), sample());
    }
}
