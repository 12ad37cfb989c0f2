//! # Statistics Tests
//!
//! Verifies default initialization and the counters accumulated by real runs.

use pagesched_core::stats::{STATS_SECTIONS, SimStats};

use crate::common::builder::ProcessBuilder;
use crate::common::harness::TestContext;

#[test]
fn default_stats_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.final_time, 0);
    assert_eq!(stats.events, 0);
    assert_eq!(stats.dispatches, 0);
    assert_eq!(stats.page_hits, 0);
    assert_eq!(stats.page_faults, 0);
    assert_eq!(stats.writebacks, 0);
    assert!(stats.fault_rate().abs() < f64::EPSILON);
}

#[test]
fn counts_memory_outcomes() {
    let stats = TestContext::new()
        .with_memory(10, 1)
        .process(ProcessBuilder::new(0).write(0).read(5).read(10))
        .run()
        .stats;
    assert_eq!((stats.reads, stats.writes), (2, 1));
    assert_eq!((stats.page_hits, stats.page_faults), (1, 2));
    assert_eq!((stats.evictions, stats.writebacks), (1, 1));
    // 60 + 20 + 100
    assert_eq!(stats.memory_time, 180);
    assert_eq!(stats.final_time, 180);
    assert!((stats.fault_rate() - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn counts_scheduling_activity() {
    let stats = TestContext::new()
        .process(ProcessBuilder::new(0).sleep(2).run(1))
        .process(ProcessBuilder::new(1).run(5))
        .run()
        .stats;
    assert_eq!(stats.dispatches, 3);
    assert_eq!(stats.sleeps, 1);
    assert_eq!(stats.terminated, 2);
    assert_eq!(stats.cpu_time, 6);
    assert_eq!(stats.idle_time, 0);
    assert_eq!(stats.final_time, 6);
    assert_eq!(stats.events, 3);
    assert!((stats.utilization() - 100.0).abs() < 1e-9);
}

#[test]
fn idle_time_lowers_utilization() {
    let stats = TestContext::new()
        .process(ProcessBuilder::new(0).run(5).sleep(5).run(10))
        .run()
        .stats;
    assert_eq!(stats.idle_time, 5);
    assert_eq!(stats.final_time, 20);
    assert!((stats.utilization() - 75.0).abs() < 1e-9);
}

#[test]
fn sections_are_printable() {
    let stats = TestContext::new()
        .process(ProcessBuilder::new(0).read(1))
        .run()
        .stats;
    let all: Vec<String> = STATS_SECTIONS.iter().map(ToString::to_string).collect();
    stats.print_sections(&all);
    stats.print_sections(&["memory".to_string()]);
    stats.print_sections(&[]);
}
