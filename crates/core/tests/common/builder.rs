use pagesched_core::common::Pid;
use pagesched_core::{Instruction, Process};

/// Builds a process one instruction at a time.
///
/// ```ignore
/// let p = ProcessBuilder::new(0).run(3).sleep(4).run(2).build();
/// ```
#[derive(Debug, Default)]
pub struct ProcessBuilder {
    pid: Pid,
    instructions: Vec<Instruction>,
}

impl ProcessBuilder {
    pub fn new(pid: Pid) -> Self {
        Self {
            pid,
            instructions: Vec::new(),
        }
    }

    #[must_use]
    pub fn run(mut self, duration: u64) -> Self {
        self.instructions.push(Instruction::run(duration));
        self
    }

    #[must_use]
    pub fn sleep(mut self, duration: u64) -> Self {
        self.instructions.push(Instruction::sleep(duration));
        self
    }

    #[must_use]
    pub fn read(mut self, address: u64) -> Self {
        self.instructions.push(Instruction::read(address));
        self
    }

    #[must_use]
    pub fn write(mut self, address: u64) -> Self {
        self.instructions.push(Instruction::write(address));
        self
    }

    #[must_use]
    pub fn allocate(mut self, count: u64, resource: usize) -> Self {
        self.instructions.push(Instruction::allocate(count, resource));
        self
    }

    #[must_use]
    pub fn free(mut self, count: u64, resource: usize) -> Self {
        self.instructions.push(Instruction::free(count, resource));
        self
    }

    #[must_use]
    pub fn inst(mut self, inst: Instruction) -> Self {
        self.instructions.push(inst);
        self
    }

    pub fn build(self) -> Process {
        Process::new(self.pid, self.instructions)
    }
}
