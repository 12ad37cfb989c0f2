//! Time-ordered set of sleeping processes.
//!
//! Entries are ordered by wake time, then pid. Pids are unique, so the order is
//! total and wakeups at the same instant come out in ascending pid order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::process::Process;
use crate::common::{Pid, Tick};

/// A sleeping process and the time it becomes ready.
#[derive(Debug)]
pub struct WaitEntry {
    /// Wake time.
    pub wake: Tick,
    /// Sleeping process.
    pub process: Process,
}

impl WaitEntry {
    fn key(&self) -> (Tick, Pid) {
        (self.wake, self.process.pid())
    }
}

impl PartialEq for WaitEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for WaitEntry {}

impl PartialOrd for WaitEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WaitEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-heap of sleeping processes.
#[derive(Debug, Default)]
pub struct WaitQueue {
    heap: BinaryHeap<Reverse<WaitEntry>>,
}

impl WaitQueue {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `process` to sleep until `wake`.
    pub fn push(&mut self, wake: Tick, process: Process) {
        self.heap.push(Reverse(WaitEntry { wake, process }));
    }

    /// Removes the earliest entry.
    pub fn pop(&mut self) -> Option<WaitEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Removes the earliest entry only if it wakes exactly at `wake`.
    pub fn pop_due_at(&mut self, wake: Tick) -> Option<WaitEntry> {
        if self.next_wake()? == wake {
            self.pop()
        } else {
            None
        }
    }

    /// Wake time of the earliest entry.
    pub fn next_wake(&self) -> Option<Tick> {
        self.heap.peek().map(|Reverse(entry)| entry.wake)
    }

    /// Number of sleeping processes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when nothing is sleeping.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
