//! The FCFS control loop.
//!
//! Each iteration either dispatches the front of the ready queue or, when the
//! ready queue is empty, wakes the earliest sleeper together with every other
//! sleeper sharing its exact wake time. Dispatch drains the process:
//! - `RUN d` emits `EXECUTE` and advances the clock by `d`.
//! - `SLEEP d` emits `WAIT`, parks the process until `now + d`, and ends the dispatch.
//! - `READ`/`WRITE` go to the memory manager, whose completion time becomes the clock.
//! - `ALLOCATE`/`FREE` pass through.

use std::collections::VecDeque;

use tracing::{debug, info, trace};

use super::clock::Clock;
use super::process::Process;
use super::wait_queue::WaitQueue;
use crate::common::{Result, SimError, Tick};
use crate::event::{Event, EventLog};
use crate::isa::{CpuInstruction, Instruction, InstructionType};
use crate::memory::MemoryManager;
use crate::stats::SimStats;

/// Runs `processes` to completion against `memory` and returns the event log.
///
/// # Errors
///
/// [`SimError::MalformedInstruction`] if an instruction's kind does not fit its
/// shape, or [`SimError::ClockOverflow`] if a duration or access would move the
/// clock past `Tick::MAX`. The run halts at that instruction.
pub fn run(processes: Vec<Process>, memory: &mut MemoryManager) -> Result<EventLog> {
    FcfsScheduler::new(processes)
        .run(memory)
        .map(|(log, _)| log)
}

/// Ready queue, wait queue, clock, and output of one run.
#[derive(Debug)]
pub struct FcfsScheduler {
    clock: Clock,
    ready: VecDeque<Process>,
    waiting: WaitQueue,
    log: EventLog,
    stats: SimStats,
    trace_events: bool,
}

impl FcfsScheduler {
    /// Seeds the ready queue with `processes` in the given order.
    pub fn new<I>(processes: I) -> Self
    where
        I: IntoIterator<Item = Process>,
    {
        Self {
            clock: Clock::new(),
            ready: processes.into_iter().collect(),
            waiting: WaitQueue::new(),
            log: EventLog::new(),
            stats: SimStats::default(),
            trace_events: false,
        }
    }

    /// Logs every appended event at debug level.
    #[must_use]
    pub fn with_event_trace(mut self, enabled: bool) -> Self {
        self.trace_events = enabled;
        self
    }

    /// Current simulated time.
    pub const fn now(&self) -> Tick {
        self.clock.now()
    }

    /// Processes ready to run, in dispatch order.
    pub fn ready(&self) -> impl Iterator<Item = &Process> + '_ {
        self.ready.iter()
    }

    /// Number of sleeping processes.
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    /// Events emitted so far.
    pub const fn log(&self) -> &EventLog {
        &self.log
    }

    /// True once both queues are empty.
    pub fn is_done(&self) -> bool {
        self.ready.is_empty() && self.waiting.is_empty()
    }

    /// Runs until both queues are empty.
    ///
    /// # Errors
    ///
    /// Any dispatch error from [`FcfsScheduler::step`]; the run stops there.
    pub fn run(mut self, memory: &mut MemoryManager) -> Result<(EventLog, SimStats)> {
        info!(processes = self.ready.len(), "simulation started");
        while self.step(memory)? {}
        self.stats.final_time = self.clock.now();
        self.stats.events = self.log.len() as u64;
        info!(
            time = self.stats.final_time,
            events = self.stats.events,
            faults = self.stats.page_faults,
            "simulation finished"
        );
        Ok((self.log, self.stats))
    }

    /// Performs one loop iteration: a wakeup or a dispatch.
    ///
    /// Returns `false` once there is nothing left to do.
    ///
    /// # Errors
    ///
    /// [`SimError::MalformedInstruction`] or [`SimError::ClockOverflow`] from the
    /// dispatched instruction.
    pub fn step(&mut self, memory: &mut MemoryManager) -> Result<bool> {
        if let Some(process) = self.ready.pop_front() {
            self.dispatch(process, memory)?;
            Ok(true)
        } else if !self.waiting.is_empty() {
            self.wake_next();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Moves the earliest sleeper, and every sleeper due at the same instant,
    /// to the back of the ready queue.
    fn wake_next(&mut self) {
        let Some(first) = self.waiting.pop() else {
            return;
        };
        let wake = first.wake;
        self.stats.idle_time += self.clock.advance_to(wake);
        debug!(pid = first.process.pid(), wake, now = self.clock.now(), "wake");
        self.ready.push_back(first.process);

        while let Some(entry) = self.waiting.pop_due_at(wake) {
            debug!(pid = entry.process.pid(), wake, "wake (same instant)");
            self.ready.push_back(entry.process);
        }
    }

    /// Gives the CPU to `process` until it sleeps or finishes.
    fn dispatch(&mut self, mut process: Process, memory: &mut MemoryManager) -> Result<()> {
        let pid = process.pid();
        self.stats.dispatches += 1;
        debug!(pid, now = self.clock.now(), remaining = process.remaining(), "dispatch");

        while let Some(inst) = process.next_instruction() {
            match inst {
                Instruction::Cpu(CpuInstruction {
                    kind: InstructionType::Run,
                    duration,
                }) => {
                    let (start, end) = self
                        .clock
                        .advance_by(duration)
                        .ok_or(SimError::ClockOverflow { pid })?;
                    self.stats.cpu_time += duration;
                    self.emit(Event::Execute { pid, start, end });
                }
                Instruction::Cpu(CpuInstruction {
                    kind: InstructionType::Sleep,
                    duration,
                }) => {
                    let start = self.clock.now();
                    let end = start
                        .checked_add(duration)
                        .ok_or(SimError::ClockOverflow { pid })?;
                    self.emit(Event::Wait { pid, start, end });
                    self.stats.sleeps += 1;
                    debug!(pid, wake = end, remaining = process.remaining(), "sleep");
                    self.waiting.push(end, process);
                    return Ok(());
                }
                Instruction::Memory(m) => {
                    let access = m
                        .access_type()
                        .ok_or(SimError::MalformedInstruction { pid, kind: m.kind })?;
                    let result = memory.access(pid, access, m.address, self.clock.now())?;
                    for event in result.events {
                        self.emit(event);
                    }
                    // Completion is never earlier than now, so the skipped span is the cost.
                    let cost = self.clock.advance_to(result.time);
                    self.stats.record_access(access, &result.outcome, cost);
                }
                Instruction::Resource(r)
                    if matches!(r.kind, InstructionType::Allocate | InstructionType::Free) =>
                {
                    trace!(pid, kind = %r.kind, resource = r.resource_id, "resource instruction passed through");
                    self.stats.resource_passthrough += 1;
                }
                other => {
                    return Err(SimError::MalformedInstruction {
                        pid,
                        kind: other.kind(),
                    });
                }
            }
        }

        self.stats.terminated += 1;
        debug!(pid, now = self.clock.now(), "terminated");
        Ok(())
    }

    fn emit(&mut self, event: Event) {
        if self.trace_events {
            debug!(%event, "event");
        }
        self.log.push(event);
    }
}
