//! Simulation statistics collection and reporting.
//!
//! This module tracks aggregate metrics for a run. It provides:
//! 1. **Scheduling:** Dispatches, sleeps, terminations, CPU busy time, and idle time.
//! 2. **Memory:** Reads, writes, hits, faults, evictions, and dirty writebacks.
//! 3. **Reporting:** A sectioned plain-text summary printed to stdout.

use std::time::Instant;

use crate::common::{AccessType, Tick};
use crate::memory::AccessOutcome;

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Clock value when the run finished.
    pub final_time: Tick,
    /// Events appended to the log.
    pub events: u64,

    /// Times a process was taken off the ready queue and given the CPU.
    pub dispatches: u64,
    /// `SLEEP` instructions executed.
    pub sleeps: u64,
    /// Processes that exhausted their instruction queue.
    pub terminated: u64,
    /// Time spent in `RUN` bursts.
    pub cpu_time: Tick,
    /// Time spent serving memory accesses.
    pub memory_time: Tick,
    /// Time skipped while every process was asleep.
    pub idle_time: Tick,
    /// `ALLOCATE`/`FREE` instructions passed through without effect.
    pub resource_passthrough: u64,

    /// `READ` accesses.
    pub reads: u64,
    /// `WRITE` accesses.
    pub writes: u64,
    /// Accesses to resident pages.
    pub page_hits: u64,
    /// Accesses that loaded a page.
    pub page_faults: u64,
    /// Faults that displaced a resident page.
    pub evictions: u64,
    /// Evictions of dirty pages.
    pub writebacks: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            final_time: 0,
            events: 0,
            dispatches: 0,
            sleeps: 0,
            terminated: 0,
            cpu_time: 0,
            memory_time: 0,
            idle_time: 0,
            resource_passthrough: 0,
            reads: 0,
            writes: 0,
            page_hits: 0,
            page_faults: 0,
            evictions: 0,
            writebacks: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"scheduling"`, `"memory"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "scheduling", "memory"];

impl SimStats {
    /// Records one memory access and how it was served.
    pub fn record_access(&mut self, access: AccessType, outcome: &AccessOutcome, cost: Tick) {
        match access {
            AccessType::Read => self.reads += 1,
            AccessType::Write => self.writes += 1,
        }
        match outcome {
            AccessOutcome::Hit => self.page_hits += 1,
            AccessOutcome::Miss { evicted } => {
                self.page_faults += 1;
                if let Some(victim) = evicted {
                    self.evictions += 1;
                    if victim.needs_writeback() {
                        self.writebacks += 1;
                    }
                }
            }
        }
        self.memory_time += cost;
    }

    /// Fraction of accesses that faulted, in percent.
    pub fn fault_rate(&self) -> f64 {
        let total = self.page_hits + self.page_faults;
        if total == 0 {
            0.0
        } else {
            100.0 * self.page_faults as f64 / total as f64
        }
    }

    /// Fraction of simulated time the CPU was not idle, in percent.
    pub fn utilization(&self) -> f64 {
        if self.final_time == 0 {
            0.0
        } else {
            100.0 * (self.final_time - self.idle_time) as f64 / self.final_time as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to print all sections.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();

        if want("summary") {
            println!("\n==========================================================");
            println!("FCFS / DEMAND PAGING SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_time                 {}", self.final_time);
            println!("sim_events               {}", self.events);
            println!("cpu_utilization          {:.2}%", self.utilization());
            println!("----------------------------------------------------------");
        }
        if want("scheduling") {
            println!("SCHEDULING");
            println!("  sched.dispatches       {}", self.dispatches);
            println!("  sched.sleeps           {}", self.sleeps);
            println!("  sched.terminated       {}", self.terminated);
            println!("  time.cpu               {}", self.cpu_time);
            println!("  time.memory            {}", self.memory_time);
            println!("  time.idle              {}", self.idle_time);
            println!("  op.resource_passthru   {}", self.resource_passthrough);
            println!("----------------------------------------------------------");
        }
        if want("memory") {
            println!("MEMORY");
            println!("  mem.reads              {}", self.reads);
            println!("  mem.writes             {}", self.writes);
            println!("  mem.hits               {}", self.page_hits);
            println!(
                "  mem.faults             {} ({:.2}%)",
                self.page_faults,
                self.fault_rate()
            );
            println!("  mem.evictions          {}", self.evictions);
            println!("  mem.writebacks         {}", self.writebacks);
        }
        println!("==========================================================");
    }
}
