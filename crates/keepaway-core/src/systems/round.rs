//! Round System
//!
//! Owns the roster and runs rounds over it. A round visits every actor in
//! ascending id order; each actor reduces, inspects and throws its whole queue
//! before the next actor starts, so a value thrown forward is handled again in
//! the same round.

use keepaway_events::{ActorSnapshot, InspectionReport, RoundSnapshot};

use crate::components::actor::{Actor, ActorId};
use crate::error::RosterError;
use crate::output::CheckpointRecorder;
use crate::setup::roster::{build_roster, validate_roster, ActorSpec};

/// The roster plus everything needed to advance it
#[derive(Debug, Clone)]
pub struct Simulation {
    actors: Vec<Actor>,
    reduction_modulus: u64,
    completed_rounds: u64,
}

impl Simulation {
    /// Take ownership of a roster, validating it and fixing the modulus
    pub fn new(actors: Vec<Actor>) -> Result<Self, RosterError> {
        validate_roster(&actors)?;
        let reduction_modulus = compute_reduction_modulus(&actors)?;

        Ok(Self {
            actors,
            reduction_modulus,
            completed_rounds: 0,
        })
    }

    /// Build straight from parsed definitions
    pub fn from_specs(specs: Vec<ActorSpec>) -> Result<Self, RosterError> {
        Self::new(build_roster(specs)?)
    }

    /// Product of every actor's divisor.
    ///
    /// A multiple of each divisor, so reducing by it never changes a
    /// divisibility test.
    pub fn reduction_modulus(&self) -> u64 {
        self.reduction_modulus
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn completed_rounds(&self) -> u64 {
        self.completed_rounds
    }

    /// Values held across every queue
    pub fn total_items(&self) -> usize {
        self.actors.iter().map(|a| a.items().len()).sum()
    }

    /// One sequential pass over the roster
    pub fn run_round(&mut self) {
        let modulus = self.reduction_modulus;

        for id in 0..self.actors.len() {
            let actor = &mut self.actors[id];
            actor.reduce_modulo(modulus);
            actor.apply_transform();
            let (divisible, rest) = actor.partition_by_divisor();
            let (true_target, false_target) = actor.targets();

            self.actors[true_target].receive(divisible);
            self.actors[false_target].receive(rest);
        }

        self.completed_rounds += 1;
        tracing::debug!(
            "Round {} complete, {} items in flight",
            self.completed_rounds,
            self.total_items()
        );
    }

    /// Run `rounds` rounds back to back
    pub fn run(&mut self, rounds: u64) {
        for _ in 0..rounds {
            self.run_round();
        }
    }

    /// Run `rounds` rounds, offering every completed round to the recorder
    pub fn run_with_checkpoints(&mut self, rounds: u64, recorder: &mut CheckpointRecorder) {
        for _ in 0..rounds {
            self.run_round();
            if recorder.should_record(self.completed_rounds) {
                recorder.record(self.snapshot());
            }
        }
    }

    /// Every inspection count, ascending
    pub fn ranked_counts(&self) -> Vec<u64> {
        let mut counts: Vec<u64> = self.actors.iter().map(Actor::inspections).collect();
        counts.sort_unstable();
        counts
    }

    /// Counters and queue lengths as of the last completed round
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::new(self.completed_rounds, self.actor_snapshots())
    }

    /// Final counters, ranked, with the busiest pair
    pub fn report(&self) -> InspectionReport {
        InspectionReport::new(self.completed_rounds, self.actor_snapshots())
    }

    fn actor_snapshots(&self) -> Vec<ActorSnapshot> {
        self.actors
            .iter()
            .map(|a| ActorSnapshot::new(a.id(), a.inspections(), a.items().len()))
            .collect()
    }
}

/// Product of all divisors, or an error if it does not fit in a `u64`
pub fn compute_reduction_modulus(actors: &[Actor]) -> Result<u64, RosterError> {
    actors
        .iter()
        .try_fold(1u64, |product, actor| product.checked_mul(actor.divisor()))
        .ok_or(RosterError::ModulusOverflow)
}
