//! Scheduling and memory events.
//!
//! The simulator's only output is an ordered, append-only [`EventLog`]. Each
//! [`Event`] renders as its mnemonic followed by its fields in declaration order,
//! for example `EXECUTE 0 0 5`, `WAIT 1 5 15`, `RM 2 3 10`, `DTM 0 7 2 12` or
//! `MTD 1 4 2 20`. A rendered log starts with the event count on its own line.

use std::fmt;
use std::slice;

use crate::common::{FrameId, PageNumber, Pid, Tick};

/// A single timestamped simulator event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// `EXECUTE pid start end`: the process held the CPU over `[start, end)`.
    Execute {
        /// Running process.
        pid: Pid,
        /// Burst start.
        start: Tick,
        /// Burst end.
        end: Tick,
    },
    /// `WAIT pid start end`: the process sleeps over `[start, end)`.
    Wait {
        /// Sleeping process.
        pid: Pid,
        /// Sleep start.
        start: Tick,
        /// Wake time.
        end: Tick,
    },
    /// `RM pid frame time`: read of a resident page.
    ReadMemory {
        /// Accessing process.
        pid: Pid,
        /// Frame holding the page.
        frame: FrameId,
        /// Access time.
        time: Tick,
    },
    /// `WM pid frame time`: write of a resident page.
    WriteMemory {
        /// Accessing process.
        pid: Pid,
        /// Frame holding the page.
        frame: FrameId,
        /// Access time.
        time: Tick,
    },
    /// `DTM pid page frame time`: page loaded from disk into a frame.
    DiskToMemory {
        /// Faulting process.
        pid: Pid,
        /// Page brought in.
        page: PageNumber,
        /// Destination frame.
        frame: FrameId,
        /// Load start.
        time: Tick,
    },
    /// `MTD pid page frame time`: dirty victim written back to disk.
    MemoryToDisk {
        /// Faulting process whose miss forced the eviction.
        pid: Pid,
        /// Evicted page.
        page: PageNumber,
        /// Frame being reclaimed.
        frame: FrameId,
        /// Writeback start.
        time: Tick,
    },
}

impl Event {
    /// Event mnemonic as rendered.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Execute { .. } => "EXECUTE",
            Self::Wait { .. } => "WAIT",
            Self::ReadMemory { .. } => "RM",
            Self::WriteMemory { .. } => "WM",
            Self::DiskToMemory { .. } => "DTM",
            Self::MemoryToDisk { .. } => "MTD",
        }
    }

    /// Process the event belongs to.
    pub const fn pid(&self) -> Pid {
        match *self {
            Self::Execute { pid, .. }
            | Self::Wait { pid, .. }
            | Self::ReadMemory { pid, .. }
            | Self::WriteMemory { pid, .. }
            | Self::DiskToMemory { pid, .. }
            | Self::MemoryToDisk { pid, .. } => pid,
        }
    }

    /// Time at which the event starts. Non-decreasing along a log.
    pub const fn time(&self) -> Tick {
        match *self {
            Self::Execute { start, .. } | Self::Wait { start, .. } => start,
            Self::ReadMemory { time, .. }
            | Self::WriteMemory { time, .. }
            | Self::DiskToMemory { time, .. }
            | Self::MemoryToDisk { time, .. } => time,
        }
    }

}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.mnemonic();
        match *self {
            Self::Execute { pid, start, end } | Self::Wait { pid, start, end } => {
                write!(f, "{name} {pid} {start} {end}")
            }
            Self::ReadMemory { pid, frame, time } | Self::WriteMemory { pid, frame, time } => {
                write!(f, "{name} {pid} {frame} {time}")
            }
            Self::DiskToMemory {
                pid,
                page,
                frame,
                time,
            }
            | Self::MemoryToDisk {
                pid,
                page,
                frame,
                time,
            } => write!(f, "{name} {pid} {page} {frame} {time}"),
        }
    }
}

/// Append-only, ordered event sequence.
///
/// Only the simulator appends; consumers get read-only access.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of events recorded.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in emission order.
    pub fn iter(&self) -> slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Events in emission order, as a slice.
    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    /// Consumes the log, returning the events.
    pub fn into_vec(self) -> Vec<Event> {
        self.events
    }

    /// Renders the count line followed by one line per event.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.events.len())?;
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
