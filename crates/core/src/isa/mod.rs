//! Workload instruction set.
//!
//! Contains the closed set of instruction kinds, the three instruction shapes
//! that carry them, and the static mnemonic table used by the loader.
//!
//! # Shapes
//!
//! * `CpuInstruction`: `RUN` and `SLEEP`, carrying a duration.
//! * `ResourceInstruction`: `ALLOCATE` and `FREE`, carrying an instance count and a resource id.
//!   Reserved: parsed and queued, but passed through by the scheduler.
//! * `MemoryInstruction`: `READ` and `WRITE`, carrying a virtual address.

/// Instruction kinds, shapes, and the tagged `Instruction` sum type.
pub mod instruction;

/// Static mnemonic-to-kind lookup table.
pub mod mnemonic;

pub use instruction::{
    CpuInstruction, Instruction, InstructionType, MemoryInstruction, ResourceInstruction,
};
pub use mnemonic::MNEMONICS;
