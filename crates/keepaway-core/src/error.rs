//! Error types
//!
//! Everything that can go wrong happens before the first round: reading the
//! settings file, reading the notes, or assembling the roster. A built
//! simulation never fails.

use thiserror::Error;

use crate::components::ActorId;

/// A roster that cannot be simulated
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("roster has no actors")]
    Empty,

    #[error("actor at position {position} has id {id}; ids must count up from 0")]
    IdMismatch { position: usize, id: ActorId },

    #[error("actor {actor} has a divisor of zero")]
    ZeroDivisor { actor: ActorId },

    #[error("actor {actor} throws to actor {target}, but the roster only has {len} actors")]
    TargetOutOfRange {
        actor: ActorId,
        target: ActorId,
        len: usize,
    },

    #[error("actor {actor} throws to itself")]
    SelfTarget { actor: ActorId },

    #[error("product of all divisors does not fit in 64 bits")]
    ModulusOverflow,
}

/// A line of the notes that could not be read
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct NotesError {
    /// 1-based line number in the notes text
    pub line: usize,
    pub reason: String,
}

impl NotesError {
    pub fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// Errors loading the run settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Any failure while preparing a run
#[derive(Debug, Error)]
pub enum KeepawayError {
    #[error("could not read notes {path}: {source}")]
    ReadNotes {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid notes: {0}")]
    Notes(#[from] NotesError),

    #[error("invalid roster: {0}")]
    Roster(#[from] RosterError),

    #[error("could not serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_error_messages() {
        let err = RosterError::TargetOutOfRange {
            actor: 1,
            target: 9,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "actor 1 throws to actor 9, but the roster only has 4 actors"
        );

        let err = RosterError::IdMismatch { position: 2, id: 5 };
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn test_notes_error_message() {
        let err = NotesError::new(3, "expected an operation");
        assert_eq!(err.to_string(), "line 3: expected an operation");
    }

    #[test]
    fn test_wrapped_errors() {
        let err: KeepawayError = RosterError::Empty.into();
        assert_eq!(err.to_string(), "invalid roster: roster has no actors");

        let err: KeepawayError = NotesError::new(1, "bad header").into();
        assert_eq!(err.to_string(), "invalid notes: line 1: bad header");
    }
}
