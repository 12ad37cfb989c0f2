//! Address and identifier types.
//!
//! Simulated time, process ids, frame slots and page numbers are plain integers;
//! virtual addresses get a strong type so that page-number extraction always goes
//! through the configured page size.

/// Simulated time in abstract time units.
pub type Tick = u64;

/// Process identifier. Assigned by the loader in input order and unique per run.
pub type Pid = usize;

/// Physical frame slot, always in `[0, frame_count)`.
pub type FrameId = usize;

/// Virtual page number (`address / page_size`).
pub type PageNumber = u64;

/// A virtual address issued by a memory instruction.
///
/// The simulator uses a single shared frame pool, so two processes touching the
/// same address touch the same page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtAddr(pub u64);

impl VirtAddr {
    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Returns the page this address falls in.
    ///
    /// # Arguments
    ///
    /// * `page_size` - Page size in address units. Must be non-zero; the memory
    ///   manager rejects a zero page size at construction.
    #[inline(always)]
    pub const fn page_number(self, page_size: u64) -> PageNumber {
        self.0 / page_size
    }
}
