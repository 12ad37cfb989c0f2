//! Memory Access Types.
//!
//! This module defines the classification of memory accesses issued by memory
//! instructions. The access type decides:
//! 1. **Event Kind:** Whether a hit or load is reported as `RM` or `WM`.
//! 2. **Dirty Tracking:** Writes mark the resident page dirty, forcing a writeback on eviction.
//! 3. **Statistics Tracking:** Reads and writes are counted separately.

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Data read access (`READ` instruction).
    Read,

    /// Data write access (`WRITE` instruction). Marks the page dirty.
    Write,
}

impl AccessType {
    /// Returns true if this access dirties the page it touches.
    #[inline(always)]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}
