//! # Scheduler Tests
//!
//! FCFS dispatch order, non-preemption, wakeup ordering, and fatal dispatch errors.

use pretty_assertions::assert_eq;
use rstest::rstest;

use pagesched_core::common::VirtAddr;
use pagesched_core::isa::{InstructionType, MemoryInstruction};
use pagesched_core::memory::MemoryManager;
use pagesched_core::sched::{self, FcfsScheduler};
use pagesched_core::{Event, Instruction, Process, SimError, Simulator, Workload};
use pagesched_core::config::Config;

use crate::common::builder::ProcessBuilder;
use crate::common::harness::{TestContext, assert_monotonic};

fn exec(pid: usize, start: u64, end: u64) -> Event {
    Event::Execute { pid, start, end }
}

fn wait(pid: usize, start: u64, end: u64) -> Event {
    Event::Wait { pid, start, end }
}

#[test]
fn dispatches_in_arrival_order() {
    let events = TestContext::new()
        .process(ProcessBuilder::new(0).run(3))
        .process(ProcessBuilder::new(1).run(2))
        .process(ProcessBuilder::new(2).run(1))
        .events();
    assert_eq!(events, vec![exec(0, 0, 3), exec(1, 3, 5), exec(2, 5, 6)]);
}

#[test]
fn process_keeps_cpu_until_it_sleeps() {
    let events = TestContext::new()
        .process(ProcessBuilder::new(0).run(1).run(1).sleep(2).run(1))
        .process(ProcessBuilder::new(1).run(4))
        .events();
    assert_eq!(
        events,
        vec![
            exec(0, 0, 1),
            exec(0, 1, 2),
            wait(0, 2, 4),
            exec(1, 2, 6),
            exec(0, 6, 7),
        ]
    );
}

#[test]
fn simultaneous_wakeups_resume_by_pid() {
    // pid 1 goes to sleep first but both wake at 5.
    let events = TestContext::new()
        .process(ProcessBuilder::new(1).sleep(5).run(1))
        .process(ProcessBuilder::new(0).sleep(5).run(1))
        .events();
    assert_eq!(
        events,
        vec![wait(1, 0, 5), wait(0, 0, 5), exec(0, 5, 6), exec(1, 6, 7)]
    );
}

#[test]
fn only_sleepers_due_at_the_earliest_time_wake_together() {
    let events = TestContext::new()
        .process(ProcessBuilder::new(0).sleep(2).run(10))
        .process(ProcessBuilder::new(1).sleep(5).run(1))
        .events();
    assert_eq!(
        events,
        vec![wait(0, 0, 2), wait(1, 0, 5), exec(0, 2, 12), exec(1, 12, 13)]
    );
}

#[test]
fn idle_cpu_jumps_to_next_wake() {
    let outcome = TestContext::new()
        .process(ProcessBuilder::new(0).sleep(10).run(1))
        .run();
    assert_eq!(outcome.log.as_slice(), &[wait(0, 0, 10), exec(0, 10, 11)]);
    assert_eq!(outcome.stats.idle_time, 10);
    assert_eq!(outcome.stats.final_time, 11);
}

#[test]
fn resource_instructions_pass_through() {
    let outcome = TestContext::new()
        .process(ProcessBuilder::new(0).allocate(1, 0).run(2).free(1, 0))
        .run();
    assert_eq!(outcome.log.as_slice(), &[exec(0, 0, 2)]);
    assert_eq!(outcome.stats.resource_passthrough, 2);
    assert_eq!(outcome.stats.terminated, 1);
}

#[test]
fn empty_process_terminates_silently() {
    let outcome = TestContext::new()
        .process(ProcessBuilder::new(0))
        .process(ProcessBuilder::new(1).run(1))
        .run();
    assert_eq!(outcome.log.as_slice(), &[exec(1, 0, 1)]);
    assert_eq!(outcome.stats.terminated, 2);
}

#[test]
fn no_processes_produce_empty_log() {
    let outcome = TestContext::new().run();
    assert!(outcome.log.is_empty());
    assert_eq!(outcome.log.render(), "0\n");
}

#[test]
fn memory_access_holds_the_cpu() {
    let events = TestContext::new()
        .process(ProcessBuilder::new(0).read(0).run(1))
        .process(ProcessBuilder::new(1).read(0))
        .events();
    assert_eq!(
        events,
        vec![
            Event::DiskToMemory { pid: 0, page: 0, frame: 0, time: 0 },
            Event::ReadMemory { pid: 0, frame: 0, time: 40 },
            exec(0, 60, 61),
            Event::ReadMemory { pid: 1, frame: 0, time: 61 },
        ]
    );
}

#[test]
fn mismatched_shape_is_fatal() {
    let bogus = Instruction::Memory(MemoryInstruction {
        kind: InstructionType::Run,
        address: VirtAddr(0),
    });
    let result = Simulator::new(Config::default())
        .unwrap()
        .run(vec![Process::new(2, [Instruction::run(1), bogus, Instruction::run(1)])]);
    assert!(matches!(
        result,
        Err(SimError::MalformedInstruction {
            pid: 2,
            kind: InstructionType::Run
        })
    ));
}

#[test]
fn stepping_exposes_queue_state() {
    let mut memory = MemoryManager::default();
    let mut sched = FcfsScheduler::new([
        ProcessBuilder::new(0).sleep(3).run(1).build(),
        ProcessBuilder::new(1).run(2).build(),
    ]);
    assert_eq!(sched.ready().count(), 2);

    assert!(sched.step(&mut memory).unwrap());
    assert_eq!(sched.waiting_count(), 1);
    assert_eq!(sched.ready().map(Process::pid).collect::<Vec<_>>(), vec![1]);

    assert!(sched.step(&mut memory).unwrap());
    assert_eq!(sched.now(), 2);
    assert_eq!(sched.ready().count(), 0);

    // Nothing is ready, so the clock jumps to the wake time.
    assert!(sched.step(&mut memory).unwrap());
    assert_eq!(sched.now(), 3);
    assert_eq!(sched.waiting_count(), 0);

    assert!(sched.step(&mut memory).unwrap());
    assert!(!sched.step(&mut memory).unwrap());
    assert!(sched.is_done());
    assert_monotonic(sched.log());
}

#[test]
fn free_run_returns_log() {
    let mut memory = MemoryManager::with_geometry(10, 1).unwrap();
    let log = sched::run(
        vec![ProcessBuilder::new(0).write(5).read(5).build()],
        &mut memory,
    )
    .unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(memory.is_dirty(0), Some(true));
}

#[rstest]
#[case::run_then_run("Run 18446744073709551615\nRun 1\n")]
#[case::run_then_sleep("Run 1\nSleep 18446744073709551615\n")]
#[case::run_then_read("Run 18446744073709551600\nRead 0\n")]
fn clock_overflow_halts_the_run(#[case] body: &str) {
    let text = format!("1\n0\n10 1\n2\n{body}");
    let workload = Workload::parse(&text, None).unwrap();
    let sim = Simulator::for_workload(Config::default(), &workload).unwrap();
    let result = sim.run_workload(workload);
    assert!(matches!(result, Err(SimError::ClockOverflow { pid: 0 })));
}

#[test]
fn run_reaching_the_last_tick_is_fine() {
    let outcome = TestContext::new()
        .process(ProcessBuilder::new(0).run(u64::MAX - 1).run(1))
        .run();
    assert_eq!(outcome.stats.final_time, u64::MAX);
}
