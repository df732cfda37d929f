//! Roster Setup
//!
//! Reading the notes and assembling a validated roster.

pub mod notes;
pub mod roster;

pub use notes::*;
pub use roster::*;
