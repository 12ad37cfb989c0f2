//! Global Simulator Constants.
//!
//! This module defines the default cost model and memory geometry. It includes:
//! 1. **Memory Constants:** Default page size and frame budget.
//! 2. **Cost Constants:** Time charged for page hits, page loads, and dirty writebacks.

/// Default page size in address units.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Default number of physical frames.
pub const DEFAULT_FRAME_COUNT: usize = 1;

/// Time charged for accessing a resident page.
pub const HIT_LATENCY: u64 = 20;

/// Time charged for loading a page from disk into a frame.
pub const LOAD_LATENCY: u64 = 40;

/// Time charged for writing a dirty victim page back to disk.
pub const WRITEBACK_LATENCY: u64 = 40;
