use pagesched_core::config::{Config, WritebackPolicy};
use pagesched_core::{Event, EventLog, Process, SimOutcome, Simulator};

use super::builder::ProcessBuilder;

/// Owns a configuration and the processes to run under it.
pub struct TestContext {
    pub config: Config,
    pub processes: Vec<Process>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("pagesched_core=debug")
            .try_init();

        Self {
            config: Config::default(),
            processes: Vec::new(),
        }
    }

    /// Sets page size and frame count.
    #[must_use]
    pub fn with_memory(mut self, page_size: u64, frame_count: usize) -> Self {
        self.config = self.config.with_memory(page_size, frame_count);
        self
    }

    /// Switches dirty writeback to overlap the following load.
    #[must_use]
    pub fn overlapped(mut self) -> Self {
        self.config.timing.writeback = WritebackPolicy::Overlapped;
        self
    }

    /// Appends a process; pids are assigned by the caller through the builder.
    #[must_use]
    pub fn process(mut self, builder: ProcessBuilder) -> Self {
        self.processes.push(builder.build());
        self
    }

    /// Runs all processes in insertion order.
    pub fn run(self) -> SimOutcome {
        Simulator::new(self.config)
            .expect("valid test configuration")
            .run(self.processes)
            .expect("run succeeds")
    }

    /// Runs and returns only the events.
    pub fn events(self) -> Vec<Event> {
        self.run().log.into_vec()
    }
}

/// Asserts that event start times never go backwards.
pub fn assert_monotonic(log: &EventLog) {
    let times: Vec<u64> = log.iter().map(Event::time).collect();
    assert!(
        times.windows(2).all(|w| w[0] <= w[1]),
        "event times went backwards: {times:?}"
    );
}
