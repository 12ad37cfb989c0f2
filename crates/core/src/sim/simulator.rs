//! Simulator: owns the configuration and runs workloads against it.
//!
//! Each run builds a fresh memory manager and scheduler, so a `Simulator` can
//! be reused for several workloads without state leaking between them.

use tracing::info;

use crate::common::Result;
use crate::config::Config;
use crate::event::EventLog;
use crate::memory::MemoryManager;
use crate::sched::{FcfsScheduler, Process};
use crate::sim::loader::Workload;
use crate::stats::SimStats;

/// Everything a run produced.
#[derive(Debug)]
pub struct SimOutcome {
    /// Ordered event log.
    pub log: EventLog,
    /// Aggregate statistics.
    pub stats: SimStats,
    /// Frame table as the run left it.
    pub memory: MemoryManager,
}

/// Top-level simulator: validated configuration.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: Config,
}

impl Simulator {
    /// Creates a simulator from a configuration.
    ///
    /// # Errors
    ///
    /// [`SimError::Configuration`](crate::SimError::Configuration) if the memory geometry is unusable.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a simulator for a parsed workload.
    ///
    /// The workload's page size and frame count replace those in `config`.
    ///
    /// # Errors
    ///
    /// [`SimError::Configuration`](crate::SimError::Configuration) if the workload's geometry is unusable.
    pub fn for_workload(config: Config, workload: &Workload) -> Result<Self> {
        Self::new(config.with_memory(workload.page_size, workload.frame_count))
    }

    /// Runs `processes` in the given arrival order.
    ///
    /// # Errors
    ///
    /// [`SimError::MalformedInstruction`](crate::SimError::MalformedInstruction) or [`SimError::ClockOverflow`](crate::SimError::ClockOverflow) from
    /// dispatch; nothing of the partial run is returned.
    pub fn run(&self, processes: Vec<Process>) -> Result<SimOutcome> {
        let mut memory = MemoryManager::new(&self.config.memory, &self.config.timing)?;
        info!(
            page_size = memory.page_size(),
            frames = memory.frame_count(),
            writeback = ?self.config.timing.writeback,
            "memory configured"
        );
        let (log, stats) = FcfsScheduler::new(processes)
            .with_event_trace(self.config.general.trace_events)
            .run(&mut memory)?;
        Ok(SimOutcome { log, stats, memory })
    }

    /// Runs the processes of an already parsed workload.
    ///
    /// # Errors
    ///
    /// As [`Simulator::run`].
    pub fn run_workload(&self, workload: Workload) -> Result<SimOutcome> {
        self.run(workload.processes)
    }
}
