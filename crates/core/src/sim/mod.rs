//! Simulation entry points and workload loading.
//!
//! Provides the loader that turns workload text into processes and the
//! `Simulator` facade that wires configuration, memory manager, and scheduler
//! together for a single run.

pub mod loader;

/// Configured simulator and the outcome of a run.
pub mod simulator;

pub use loader::Workload;
pub use simulator::{SimOutcome, Simulator};
