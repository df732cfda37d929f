//! Roster Setup
//!
//! Turns parsed actor definitions into actors and checks that the roster is
//! consistent before anything is simulated.

use serde::{Deserialize, Serialize};

use crate::components::actor::{Actor, ActorId, Transform};
use crate::error::RosterError;

/// One actor as described by the input, before it joins a roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSpec {
    pub id: ActorId,
    /// Starting worry values, in queue order
    #[serde(default)]
    pub items: Vec<u64>,
    pub transform: Transform,
    pub divisor: u64,
    /// Receives values divisible by `divisor`
    pub if_true: ActorId,
    /// Receives everything else
    pub if_false: ActorId,
}

impl ActorSpec {
    pub fn into_actor(self) -> Actor {
        Actor::new(self.id, self.transform, self.divisor, self.if_true, self.if_false)
            .with_items(self.items)
    }
}

impl From<ActorSpec> for Actor {
    fn from(spec: ActorSpec) -> Self {
        spec.into_actor()
    }
}

/// Check ids, divisors and targets of a roster.
///
/// Ids must equal roster positions since targets are plain indices.
pub fn validate_roster(actors: &[Actor]) -> Result<(), RosterError> {
    if actors.is_empty() {
        return Err(RosterError::Empty);
    }

    let len = actors.len();
    for (position, actor) in actors.iter().enumerate() {
        if actor.id() != position {
            return Err(RosterError::IdMismatch {
                position,
                id: actor.id(),
            });
        }
        if actor.divisor() == 0 {
            return Err(RosterError::ZeroDivisor { actor: position });
        }

        let (true_target, false_target) = actor.targets();
        for target in [true_target, false_target] {
            if target >= len {
                return Err(RosterError::TargetOutOfRange {
                    actor: position,
                    target,
                    len,
                });
            }
            if target == position {
                return Err(RosterError::SelfTarget { actor: position });
            }
        }
    }

    Ok(())
}

/// Build and validate a roster from parsed definitions
pub fn build_roster(specs: Vec<ActorSpec>) -> Result<Vec<Actor>, RosterError> {
    let actors: Vec<Actor> = specs.into_iter().map(Actor::from).collect();
    validate_roster(&actors)?;
    Ok(actors)
}
