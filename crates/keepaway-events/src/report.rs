//! Final inspection report.
//!
//! The report is what a run hands to whoever prints or stores the result:
//! per-actor counts, the counts ranked ascending, and the two busiest actors
//! with the product of their counts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::snapshot::ActorSnapshot;

/// The two largest inspection counts and their product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusiestPair {
    pub first: u64,
    pub second: u64,
    pub product: u128,
}

impl BusiestPair {
    /// Picks the two largest values out of counts sorted ascending.
    ///
    /// Returns `None` when fewer than two counts are available.
    pub fn from_ranked(ranked: &[u64]) -> Option<Self> {
        match ranked {
            [.., second, first] => Some(Self {
                first: *first,
                second: *second,
                product: u128::from(*first) * u128::from(*second),
            }),
            _ => None,
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionReport {
    /// Rounds simulated before the report was taken
    pub rounds: u64,
    /// Per-actor counters in id order
    pub actors: Vec<ActorSnapshot>,
    /// Every inspection count, ascending
    pub ranked_counts: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub busiest: Option<BusiestPair>,
}

impl InspectionReport {
    /// Builds a report, ranking the counts and picking the busiest pair.
    pub fn new(rounds: u64, actors: Vec<ActorSnapshot>) -> Self {
        let mut ranked_counts: Vec<u64> = actors.iter().map(|a| a.inspections).collect();
        ranked_counts.sort_unstable();
        let busiest = BusiestPair::from_ranked(&ranked_counts);

        Self {
            rounds,
            actors,
            ranked_counts,
            busiest,
        }
    }

    /// Product of the two largest counts, if there are at least two actors.
    pub fn product(&self) -> Option<u128> {
        self.busiest.map(|pair| pair.product)
    }

    /// Serializes the report to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for InspectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for actor in &self.actors {
            writeln!(f, "Monkey {}: {}", actor.actor_id, actor.inspections)?;
        }
        match self.busiest {
            Some(pair) => write!(
                f,
                "{} and {} result: {}",
                pair.first, pair.second, pair.product
            ),
            None => write!(f, "fewer than two actors, no result"),
        }
    }
}
