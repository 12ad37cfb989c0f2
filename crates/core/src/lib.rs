//! FCFS scheduling and demand-paging simulator library.
//!
//! This crate simulates a single CPU running several processes under a
//! non-preemptive First-Come-First-Served policy, coupled to a demand-paged
//! memory with a fixed frame budget and FIFO replacement:
//! 1. **Instructions:** `RUN`, `SLEEP`, `READ`, `WRITE`, and the reserved `ALLOCATE`/`FREE`.
//! 2. **Scheduling:** Ready queue, time-ordered wait queue, and a single global clock.
//! 3. **Memory:** Shared frame pool, FIFO eviction, dirty writeback accounting.
//! 4. **Output:** A deterministic, timestamped event log and run statistics.
//! 5. **Simulation:** Workload loader, configuration, and the `Simulator` facade.
//!
//! # Example
//!
//! ```
//! use pagesched_core::{Config, Instruction, Process, Simulator};
//!
//! let config = Config::default().with_memory(10, 1);
//! let sim = Simulator::new(config).unwrap();
//! let outcome = sim
//!     .run(vec![Process::new(0, [Instruction::read(5), Instruction::read(5)])])
//!     .unwrap();
//! assert_eq!(outcome.log.render(), "3\nDTM 0 0 0 0\nRM 0 0 40\nRM 0 0 60\n");
//! ```

/// Common types (addresses, ids, access types, errors).
pub mod common;
/// Simulator configuration (defaults, memory geometry, cost model).
pub mod config;
/// Scheduling and memory events and the event log.
pub mod event;
/// Workload instructions and the mnemonic table.
pub mod isa;
/// Demand-paged memory manager.
pub mod memory;
/// FCFS scheduler, processes, clock, and wait queue.
pub mod sched;
/// Workload loader and simulator facade.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Crate-wide error and result types.
pub use crate::common::{Result, SimError};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Event and ordered event log.
pub use crate::event::{Event, EventLog};
/// Tagged instruction type.
pub use crate::isa::{Instruction, InstructionType};
/// Shared frame pool.
pub use crate::memory::MemoryManager;
/// A process and its instruction queue.
pub use crate::sched::Process;
/// Top-level simulator and parsed workloads.
pub use crate::sim::{SimOutcome, Simulator, Workload};
