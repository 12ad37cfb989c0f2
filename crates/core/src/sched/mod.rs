//! FCFS scheduling.
//!
//! A single simulated CPU serves processes strictly in arrival order. A
//! dispatched process keeps the CPU until it sleeps or runs out of
//! instructions. Sleepers wait in a time-ordered queue and are woken only when
//! nothing is ready.
//!
//! # Components
//!
//! * `process`: Pid plus destructively consumed instruction queue.
//! * `clock`: The single global time authority.
//! * `wait_queue`: Sleepers ordered by wake time, then pid.
//! * `fcfs`: The control loop tying them to the memory manager.

/// The global simulated clock.
pub mod clock;

/// The FCFS control loop.
pub mod fcfs;

/// Simulated processes.
pub mod process;

/// Time-ordered queue of sleeping processes.
pub mod wait_queue;

pub use clock::Clock;
pub use fcfs::{FcfsScheduler, run};
pub use process::Process;
pub use wait_queue::{WaitEntry, WaitQueue};
