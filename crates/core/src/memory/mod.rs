//! Demand-paged memory manager.
//!
//! A single frame pool is shared by every process. On each access the manager:
//! 1. **Hits:** Reports `RM`/`WM` at the current time and charges the hit latency.
//! 2. **Misses:** Takes the lowest free frame, or evicts the oldest resident page (FIFO),
//!    writing it back (`MTD`) if dirty before loading the new page (`DTM`).
//! 3. **Accounts Time:** Returns the time at which the access completes.
//!
//! Invariant: the free frames and the frames bound to resident pages partition
//! `[0, frame_count)` exactly.

/// Free frame tracking.
pub mod frames;

/// FIFO residency order.
pub mod fifo;

/// Page, resident page, and eviction records.
pub mod page;

use std::collections::{BTreeSet, HashMap};

use tracing::trace;

use crate::common::{AccessType, FrameId, PageNumber, Pid, Result, SimError, Tick, VirtAddr};
use crate::config::{MemoryConfig, TimingConfig, WritebackPolicy};
use crate::event::Event;

pub use fifo::FifoQueue;
pub use frames::FreeFrameList;
pub use page::{Eviction, Page, ResidentPage};

/// How an access was served.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was resident.
    Hit,
    /// The page was loaded into a frame, evicting `evicted` if the pool was full.
    Miss {
        /// Victim of the replacement, if any.
        evicted: Option<Eviction>,
    },
}

impl AccessOutcome {
    /// True for a hit.
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit)
    }

    /// True when a dirty victim was written back.
    pub fn wrote_back(&self) -> bool {
        matches!(self, Self::Miss { evicted: Some(e) } if e.needs_writeback())
    }
}

/// Result of a single memory access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessResult {
    /// Time at which the access completes.
    pub time: Tick,
    /// Events emitted by the access, in order.
    pub events: Vec<Event>,
    /// How the access was served.
    pub outcome: AccessOutcome,
}

/// Frame table, residency order, and free list for the shared pool.
#[derive(Clone, Debug)]
pub struct MemoryManager {
    page_size: u64,
    frame_count: usize,
    timing: TimingConfig,
    residency: FifoQueue,
    resident: HashMap<PageNumber, ResidentPage>,
    free: FreeFrameList,
}

impl MemoryManager {
    /// Creates a manager with an empty frame pool.
    ///
    /// Nothing is allocated per frame up front, so the frame count only bounds
    /// how many pages may become resident.
    ///
    /// # Errors
    ///
    /// [`SimError::Configuration`] if the page size or frame count is zero.
    pub fn new(memory: &MemoryConfig, timing: &TimingConfig) -> Result<Self> {
        memory.validate()?;
        Ok(Self {
            page_size: memory.page_size,
            frame_count: memory.frame_count,
            timing: timing.clone(),
            residency: FifoQueue::default(),
            resident: HashMap::new(),
            free: FreeFrameList::new(memory.frame_count),
        })
    }

    /// Creates a manager with the given geometry and the default cost model.
    ///
    /// # Errors
    ///
    /// [`SimError::Configuration`] if the page size or frame count is zero.
    pub fn with_geometry(page_size: u64, frame_count: usize) -> Result<Self> {
        let memory = MemoryConfig {
            page_size,
            frame_count,
            address_limit: None,
        };
        Self::new(&memory, &TimingConfig::default())
    }

    /// Page size in address units.
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Size of the frame pool.
    pub const fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Serves a read or write of `addr` by `pid`, starting at `now`.
    ///
    /// # Errors
    ///
    /// [`SimError::ClockOverflow`] if the access would complete past `Tick::MAX`.
    /// The frame table may already reflect the access when this is returned.
    pub fn access(
        &mut self,
        pid: Pid,
        access: AccessType,
        addr: VirtAddr,
        now: Tick,
    ) -> Result<AccessResult> {
        let later = |at: Tick, latency: Tick| {
            at.checked_add(latency)
                .ok_or(SimError::ClockOverflow { pid })
        };
        let number = addr.page_number(self.page_size);

        if let Some(entry) = self.resident.get_mut(&number) {
            let done = later(now, self.timing.hit_latency)?;
            if access.is_write() {
                entry.page.dirty = true;
            }
            let frame = entry.frame;
            trace!(pid, page = number, frame, "page hit");
            return Ok(AccessResult {
                time: done,
                events: vec![touch_event(pid, access, frame, now)],
                outcome: AccessOutcome::Hit,
            });
        }

        let mut events = Vec::with_capacity(4);
        let (frame, evicted) = self.acquire_frame();

        let mut load_start = now;
        if let Some(victim) = evicted {
            if victim.needs_writeback() {
                events.push(Event::MemoryToDisk {
                    pid,
                    page: victim.page.number,
                    frame,
                    time: now,
                });
                if self.timing.writeback == WritebackPolicy::Sequential {
                    load_start = later(load_start, self.timing.writeback_latency)?;
                }
            }
            trace!(
                pid,
                victim = victim.page.number,
                frame,
                dirty = victim.page.dirty,
                "evicted oldest page"
            );
        }

        let page = Page {
            number,
            dirty: access.is_write(),
        };
        let previous = self.resident.insert(number, ResidentPage { page, frame });
        debug_assert!(previous.is_none(), "page {number} loaded twice");
        self.residency.admit(number);
        debug_assert!(self.is_consistent());

        events.push(Event::DiskToMemory {
            pid,
            page: number,
            frame,
            time: load_start,
        });
        let access_time = later(load_start, self.timing.load_latency)?;
        events.push(touch_event(pid, access, frame, access_time));
        trace!(pid, page = number, frame, "page fault served");

        Ok(AccessResult {
            time: later(access_time, self.timing.hit_latency)?,
            events,
            outcome: AccessOutcome::Miss { evicted },
        })
    }

    /// Takes the lowest free frame, or reclaims the oldest resident page's frame.
    fn acquire_frame(&mut self) -> (FrameId, Option<Eviction>) {
        if let Some(frame) = self.free.allocate() {
            return (frame, None);
        }
        // The pool is full, so the residency queue is non-empty.
        let victim = self
            .residency
            .evict_oldest()
            .and_then(|number| self.resident.remove(&number));
        match victim {
            Some(ResidentPage { page, frame }) => (frame, Some(Eviction { page, frame })),
            None => unreachable!("frame pool exhausted with no resident pages"),
        }
    }

    /// Frame holding `page`, if resident.
    pub fn frame_of(&self, page: PageNumber) -> Option<FrameId> {
        self.resident.get(&page).map(|r| r.frame)
    }

    /// Dirty bit of `page`, if resident.
    pub fn is_dirty(&self, page: PageNumber) -> Option<bool> {
        self.resident.get(&page).map(|r| r.page.dirty)
    }

    /// Resident pages in eviction order (oldest first).
    pub fn resident_pages(&self) -> Vec<ResidentPage> {
        self.residency
            .iter()
            .filter_map(|number| self.resident.get(&number).copied())
            .collect()
    }

    /// Number of resident pages.
    pub fn resident_count(&self) -> usize {
        self.residency.len()
    }

    /// Number of unused frames.
    pub const fn free_frame_count(&self) -> usize {
        self.free.free_count()
    }

    /// Checks that free and bound frames partition `[0, frame_count)` and that
    /// the residency order and frame table describe the same pages.
    ///
    /// Bound frames must be distinct, in range and not free; together with the
    /// counts adding up to `frame_count` that makes the two sets a partition.
    /// Cost is proportional to the resident set, not the pool.
    pub fn is_consistent(&self) -> bool {
        if self.residency.len() != self.resident.len()
            || self.resident.len().checked_add(self.free.free_count()) != Some(self.frame_count)
        {
            return false;
        }
        let mut bound = BTreeSet::new();
        self.residency.iter().all(|number| {
            self.resident.get(&number).is_some_and(|r| {
                r.page.number == number
                    && r.frame < self.frame_count
                    && !self.free.is_free(r.frame)
                    && bound.insert(r.frame)
            })
        })
    }
}

/// `RM` or `WM` for an access to `frame`.
fn touch_event(pid: Pid, access: AccessType, frame: FrameId, time: Tick) -> Event {
    match access {
        AccessType::Read => Event::ReadMemory { pid, frame, time },
        AccessType::Write => Event::WriteMemory { pid, frame, time },
    }
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self {
            page_size: MemoryConfig::default().page_size,
            frame_count: MemoryConfig::default().frame_count,
            timing: TimingConfig::default(),
            residency: FifoQueue::default(),
            resident: HashMap::new(),
            free: FreeFrameList::new(MemoryConfig::default().frame_count),
        }
    }
}
