//! Common types used throughout the scheduling and paging simulator.
//!
//! This module provides the fundamental building blocks shared by the scheduler,
//! the memory manager, and the loader. It includes:
//! 1. **Address Types:** A strong type for virtual addresses and page-number extraction.
//! 2. **Constants:** Default cost model values shared by configuration and tests.
//! 3. **Memory Access:** The read/write classification of memory instructions.
//! 4. **Error Handling:** The crate-wide error enum and `Result` alias.

/// Address type definitions.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use addr::{FrameId, PageNumber, Pid, Tick, VirtAddr};
pub use data::AccessType;
pub use error::{Result, SimError};
