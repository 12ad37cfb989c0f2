//! Instruction kinds and shapes.
//!
//! An [`Instruction`] is pure data: the scheduler dispatches on it by pattern
//! match. Each shape stores its [`InstructionType`] next to its operands, so a
//! shape carrying a kind it cannot represent (for example a `CpuInstruction`
//! tagged `READ`) is detected at dispatch and halts the run.

use std::fmt;

use crate::common::{AccessType, Tick, VirtAddr};

/// Closed set of instruction kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionType {
    /// Occupy the CPU for a duration.
    Run,
    /// Block for a duration, releasing the CPU.
    Sleep,
    /// Request resource instances (reserved).
    Allocate,
    /// Release resource instances (reserved).
    Free,
    /// Read a virtual address.
    Read,
    /// Write a virtual address.
    Write,
}

impl InstructionType {
    /// Number of numeric operands that follow the mnemonic in workload text.
    pub const fn operand_count(self) -> usize {
        match self {
            Self::Run | Self::Sleep | Self::Read | Self::Write => 1,
            Self::Allocate | Self::Free => 2,
        }
    }

    /// Canonical upper-case name, as used in the event log vocabulary.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Run => "RUN",
            Self::Sleep => "SLEEP",
            Self::Allocate => "ALLOCATE",
            Self::Free => "FREE",
            Self::Read => "READ",
            Self::Write => "WRITE",
        }
    }
}

impl fmt::Display for InstructionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `RUN` / `SLEEP` with a duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CpuInstruction {
    /// Either `Run` or `Sleep`.
    pub kind: InstructionType,
    /// Time units consumed (`Run`) or slept (`Sleep`).
    pub duration: Tick,
}

/// `ALLOCATE` / `FREE` of resource instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceInstruction {
    /// Either `Allocate` or `Free`.
    pub kind: InstructionType,
    /// Number of instances requested or released.
    pub count: u64,
    /// Resource type index.
    pub resource_id: usize,
}

/// `READ` / `WRITE` of a virtual address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryInstruction {
    /// Either `Read` or `Write`.
    pub kind: InstructionType,
    /// Address accessed.
    pub address: VirtAddr,
}

impl MemoryInstruction {
    /// Access type for this instruction, or `None` when the kind is not a memory kind.
    pub const fn access_type(&self) -> Option<AccessType> {
        match self.kind {
            InstructionType::Read => Some(AccessType::Read),
            InstructionType::Write => Some(AccessType::Write),
            _ => None,
        }
    }
}

/// A single workload instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// CPU burst or sleep.
    Cpu(CpuInstruction),
    /// Resource request or release.
    Resource(ResourceInstruction),
    /// Memory read or write.
    Memory(MemoryInstruction),
}

impl Instruction {
    /// `RUN d`.
    pub const fn run(duration: Tick) -> Self {
        Self::Cpu(CpuInstruction {
            kind: InstructionType::Run,
            duration,
        })
    }

    /// `SLEEP d`.
    pub const fn sleep(duration: Tick) -> Self {
        Self::Cpu(CpuInstruction {
            kind: InstructionType::Sleep,
            duration,
        })
    }

    /// `ALLOCATE count resource_id`.
    pub const fn allocate(count: u64, resource_id: usize) -> Self {
        Self::Resource(ResourceInstruction {
            kind: InstructionType::Allocate,
            count,
            resource_id,
        })
    }

    /// `FREE count resource_id`.
    pub const fn free(count: u64, resource_id: usize) -> Self {
        Self::Resource(ResourceInstruction {
            kind: InstructionType::Free,
            count,
            resource_id,
        })
    }

    /// `READ address`.
    pub const fn read(address: u64) -> Self {
        Self::Memory(MemoryInstruction {
            kind: InstructionType::Read,
            address: VirtAddr(address),
        })
    }

    /// `WRITE address`.
    pub const fn write(address: u64) -> Self {
        Self::Memory(MemoryInstruction {
            kind: InstructionType::Write,
            address: VirtAddr(address),
        })
    }

    /// Builds an instruction from a kind and its already-parsed operands.
    ///
    /// Returns `None` when the operand count does not match
    /// [`InstructionType::operand_count`].
    pub fn from_operands(kind: InstructionType, operands: &[u64]) -> Option<Self> {
        if operands.len() != kind.operand_count() {
            return None;
        }
        let inst = match kind {
            InstructionType::Run => Self::run(operands[0]),
            InstructionType::Sleep => Self::sleep(operands[0]),
            InstructionType::Read => Self::read(operands[0]),
            InstructionType::Write => Self::write(operands[0]),
            InstructionType::Allocate => Self::allocate(operands[0], operands[1] as usize),
            InstructionType::Free => Self::free(operands[0], operands[1] as usize),
        };
        Some(inst)
    }

    /// The kind carried by this instruction.
    pub const fn kind(&self) -> InstructionType {
        match self {
            Self::Cpu(c) => c.kind,
            Self::Resource(r) => r.kind,
            Self::Memory(m) => m.kind,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu(c) => write!(f, "{} {}", c.kind, c.duration),
            Self::Resource(r) => write!(f, "{} {} {}", r.kind, r.count, r.resource_id),
            Self::Memory(m) => write!(f, "{} {}", m.kind, m.address.val()),
        }
    }
}
