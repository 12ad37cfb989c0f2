//! Free frame tracking.
//!
//! Frames are never returned to the pool: an evicted page's frame goes straight
//! to the faulting page. The free frames are therefore always the suffix
//! `[next_unused, frame_count)`, and handing them out in order gives lowest id
//! first without materializing the pool. A frame count in the billions costs
//! nothing until the frames are touched.

use std::ops::Range;

use crate::common::FrameId;

/// Frames in `[0, frame_count)` that no page has claimed yet.
#[derive(Clone, Debug)]
pub struct FreeFrameList {
    next_unused: FrameId,
    frame_count: usize,
}

impl FreeFrameList {
    /// All frames in `[0, frame_count)` start free.
    pub const fn new(frame_count: usize) -> Self {
        Self {
            next_unused: 0,
            frame_count,
        }
    }

    /// Takes the lowest free frame, if any.
    pub const fn allocate(&mut self) -> Option<FrameId> {
        if self.next_unused < self.frame_count {
            let frame = self.next_unused;
            self.next_unused += 1;
            Some(frame)
        } else {
            None
        }
    }

    /// True if `frame` is in the pool and unused.
    pub const fn is_free(&self, frame: FrameId) -> bool {
        frame >= self.next_unused && frame < self.frame_count
    }

    /// Number of unused frames.
    pub const fn free_count(&self) -> usize {
        self.frame_count - self.next_unused
    }

    /// Unused frames in ascending order.
    pub const fn iter(&self) -> Range<FrameId> {
        self.next_unused..self.frame_count
    }
}
