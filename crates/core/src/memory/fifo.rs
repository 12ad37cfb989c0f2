//! First-In, First-Out residency order.
//!
//! Pages are queued in the order they were loaded and evicted from the front,
//! regardless of how recently they were accessed. Re-accessing a resident page
//! never moves it.
//!
//! # Performance
//!
//! - `admit()`: O(1)
//! - `evict_oldest()`: O(1)
//! - **Worst Case:** Workloads with strong temporal locality (may evict frequently-used pages)

use std::collections::VecDeque;

use crate::common::PageNumber;

/// Resident pages, oldest first.
#[derive(Clone, Debug, Default)]
pub struct FifoQueue {
    order: VecDeque<PageNumber>,
}

impl FifoQueue {
    /// Records a newly loaded page as the youngest.
    pub fn admit(&mut self, page: PageNumber) {
        self.order.push_back(page);
    }

    /// Removes and returns the longest-resident page.
    pub fn evict_oldest(&mut self) -> Option<PageNumber> {
        self.order.pop_front()
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when nothing is resident.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Pages in eviction order.
    pub fn iter(&self) -> impl Iterator<Item = PageNumber> + '_ {
        self.order.iter().copied()
    }
}
