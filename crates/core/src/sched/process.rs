//! Simulated processes.
//!
//! A process is a pid plus a queue of instructions consumed front to back. The
//! queue only ever shrinks; a process whose queue is empty has terminated.

use std::collections::VecDeque;

use crate::common::Pid;
use crate::isa::Instruction;

/// A process and its remaining instructions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    pid: Pid,
    instructions: VecDeque<Instruction>,
}

impl Process {
    /// Creates a process with a fully populated instruction queue.
    pub fn new<I>(pid: Pid, instructions: I) -> Self
    where
        I: IntoIterator<Item = Instruction>,
    {
        Self {
            pid,
            instructions: instructions.into_iter().collect(),
        }
    }

    /// Process id.
    pub const fn pid(&self) -> Pid {
        self.pid
    }

    /// Removes and returns the next instruction.
    pub fn next_instruction(&mut self) -> Option<Instruction> {
        self.instructions.pop_front()
    }

    /// Number of instructions not yet executed.
    pub fn remaining(&self) -> usize {
        self.instructions.len()
    }

    /// Remaining instructions in execution order.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.instructions.iter()
    }
}
