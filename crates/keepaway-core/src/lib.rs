//! Keep-away simulation engine.
//!
//! A roster of actors passes worry values around for a fixed number of
//! rounds. Each actor inspects (transforms) everything it holds and throws
//! each value to one of two other actors by a divisibility test. The busiest
//! actors are reported at the end.
//!
//! ```text
//! notes text ──▶ ActorSpec ──▶ Simulation ──(N rounds)──▶ InspectionReport
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod setup;
pub mod systems;

pub use components::{Actor, ActorId, Transform, Worry};
pub use config::Config;
pub use error::{ConfigError, KeepawayError, NotesError, RosterError};
pub use output::{CheckpointRecorder, ReportFormat, RunOutput};
pub use setup::{build_roster, load_notes, parse_notes, ActorSpec};
pub use systems::Simulation;

/// Build a simulation from parsed definitions and run it to completion
pub fn simulate(
    specs: Vec<ActorSpec>,
    rounds: u64,
    checkpoint_interval: u64,
) -> Result<RunOutput, RosterError> {
    let mut simulation = Simulation::from_specs(specs)?;
    tracing::info!(
        "Simulating {} actors for {} rounds (reduction modulus {})",
        simulation.actors().len(),
        rounds,
        simulation.reduction_modulus()
    );

    let mut recorder = CheckpointRecorder::new(checkpoint_interval);
    simulation.run_with_checkpoints(rounds, &mut recorder);

    let report = simulation.report();
    if let Some(product) = report.product() {
        tracing::info!("Simulation complete after {} rounds, result {}", rounds, product);
    }

    Ok(RunOutput::new(report, recorder.into_snapshots()))
}
