//! Resident page records.

use crate::common::{FrameId, PageNumber};

/// A page of the shared address space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Page {
    /// `address / page_size`.
    pub number: PageNumber,
    /// Written since it was loaded.
    pub dirty: bool,
}

/// A page bound to the frame that holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResidentPage {
    /// The page.
    pub page: Page,
    /// Frame holding it.
    pub frame: FrameId,
}

/// A page removed from memory to make room for a faulting page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Eviction {
    /// Page that was evicted, with its dirty bit at eviction time.
    pub page: Page,
    /// Frame it occupied, now reused by the incoming page.
    pub frame: FrameId,
}

impl Eviction {
    /// True when the victim had to be written back.
    pub const fn needs_writeback(&self) -> bool {
        self.page.dirty
    }
}
