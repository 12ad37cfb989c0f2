//! Workload Loader.
//!
//! This module turns workload text into typed processes. It performs:
//! 1. **Header parsing:** Process count, resource types, per-resource instance counts, page size, and frame count.
//! 2. **Instruction parsing:** One instruction per line, mnemonic first, looked up case-insensitively.
//! 3. **Validation:** Unknown mnemonics, wrong operand counts, out-of-range addresses and resource ids
//!    are rejected here so that the scheduler never re-validates.
//!
//! # Format
//!
//! ```text
//! 2              # processes
//! 1              # resource types
//! 3              # instances of each resource type
//! 10 2           # page size, frame count
//! 2              # instruction count of process 0
//! Run 5
//! Write 13
//! 1              # instruction count of process 1
//! Sleep 4
//! ```
//!
//! Blank lines are ignored. When there are no resource types the instance line
//! may be blank or omitted. Anything after `#` is not part of the format and is
//! shown here for illustration only.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{Result, SimError};
use crate::isa::{Instruction, InstructionType};
use crate::sched::Process;

/// A parsed workload: processes in arrival order plus the machine they run on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workload {
    /// Processes, pid = index.
    pub processes: Vec<Process>,
    /// Instance count of each resource type.
    pub resources: Vec<u64>,
    /// Page size in address units.
    pub page_size: u64,
    /// Number of physical frames.
    pub frame_count: usize,
}

impl Workload {
    /// Reads and parses a workload file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the workload text.
    /// * `address_limit` - Exclusive bound on memory instruction addresses, if any.
    ///
    /// # Errors
    ///
    /// [`SimError::Io`] if the file cannot be read, otherwise as [`Workload::parse`].
    pub fn from_file<P: AsRef<Path>>(path: P, address_limit: Option<u64>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content, address_limit)
    }

    /// Parses workload text.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidInstructionMnemonic`] for a mnemonic outside the table.
    /// - [`SimError::AddressOutOfRange`] for an address at or beyond `address_limit`.
    /// - [`SimError::Parse`] for anything else that does not fit the format.
    pub fn parse(content: &str, address_limit: Option<u64>) -> Result<Self> {
        let mut lines = Lines::new(content);

        let (line, n_processes) = lines.single::<usize>("process count")?;
        if n_processes == 0 {
            return Err(SimError::parse(line, "workload has no processes"));
        }
        let (_, n_resources) = lines.single::<usize>("resource type count")?;

        let resources = if n_resources == 0 {
            Vec::new()
        } else {
            let (line, text) = lines.next_required("resource instance counts")?;
            let counts = parse_numbers::<u64>(line, text, "resource instance count")?;
            if counts.len() != n_resources {
                return Err(SimError::parse(
                    line,
                    format!("expected {n_resources} resource instance counts, found {}", counts.len()),
                ));
            }
            counts
        };

        let (line, text) = lines.next_required("page size and frame count")?;
        let geometry = parse_numbers::<u64>(line, text, "memory geometry value")?;
        let &[page_size, frame_count] = geometry.as_slice() else {
            return Err(SimError::parse(line, "expected `<page size> <frame count>`"));
        };
        let frame_count = usize::try_from(frame_count)
            .map_err(|_| SimError::parse(line, format!("frame count {frame_count} too large")))?;

        // Counts come from the file; storage grows only with lines actually read.
        let mut processes = Vec::new();
        for pid in 0..n_processes {
            let (_, count) = lines.single::<usize>("instruction count")?;
            let mut instructions = Vec::new();
            for _ in 0..count {
                let (line, text) = lines.next_required("instruction")?;
                instructions.push(parse_instruction(line, text, n_resources, address_limit)?);
            }
            debug!(pid, instructions = instructions.len(), "loaded process");
            processes.push(Process::new(pid, instructions));
        }

        if let Some((line, _)) = lines.next() {
            return Err(SimError::parse(line, "unexpected content after the last process"));
        }

        Ok(Self {
            processes,
            resources,
            page_size,
            frame_count,
        })
    }

    /// Total number of queued instructions across all processes.
    pub fn instruction_count(&self) -> usize {
        self.processes.iter().map(Process::remaining).sum()
    }
}

/// Parses one instruction line.
fn parse_instruction(
    line: usize,
    text: &str,
    n_resources: usize,
    address_limit: Option<u64>,
) -> Result<Instruction> {
    let mut tokens = text.split_whitespace();
    let Some(mnemonic) = tokens.next() else {
        return Err(SimError::parse(line, "empty instruction"));
    };
    let kind = InstructionType::from_mnemonic(mnemonic).ok_or_else(|| {
        SimError::InvalidInstructionMnemonic {
            line,
            mnemonic: mnemonic.to_string(),
        }
    })?;

    let operands = tokens
        .map(|tok| parse_number::<u64>(line, tok, "operand"))
        .collect::<Result<Vec<_>>>()?;
    let inst = Instruction::from_operands(kind, &operands).ok_or_else(|| {
        SimError::parse(
            line,
            format!(
                "{kind} takes {} operand(s), found {}",
                kind.operand_count(),
                operands.len()
            ),
        )
    })?;

    match inst {
        Instruction::Memory(m) => {
            if let Some(limit) = address_limit {
                if m.address.val() >= limit {
                    return Err(SimError::AddressOutOfRange {
                        line,
                        address: m.address.val(),
                        limit,
                    });
                }
            }
        }
        Instruction::Resource(r) if r.resource_id >= n_resources => {
            return Err(SimError::parse(
                line,
                format!("resource id {} out of range ({n_resources} types)", r.resource_id),
            ));
        }
        _ => {}
    }
    Ok(inst)
}

fn parse_number<T: std::str::FromStr>(line: usize, token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| SimError::parse(line, format!("invalid {what}: `{token}`")))
}

fn parse_numbers<T: std::str::FromStr>(line: usize, text: &str, what: &str) -> Result<Vec<T>> {
    text.split_whitespace()
        .map(|tok| parse_number(line, tok, what))
        .collect()
}

/// Non-blank lines with 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last_line: usize,
}

impl<'a> Lines<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            inner: content.lines().enumerate(),
            last_line: 0,
        }
    }

    fn next_required(&mut self, what: &str) -> Result<(usize, &'a str)> {
        let eof = self.last_line + 1;
        self.next()
            .ok_or_else(|| SimError::parse(eof, format!("unexpected end of input, expected {what}")))
    }

    fn single<T: std::str::FromStr>(&mut self, what: &str) -> Result<(usize, T)> {
        let (line, text) = self.next_required(what)?;
        let mut tokens = text.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(tok), None) => Ok((line, parse_number(line, tok, what)?)),
            _ => Err(SimError::parse(line, format!("expected a single {what}"))),
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, text) in self.inner.by_ref() {
            self.last_line = idx + 1;
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some((idx + 1, trimmed));
            }
        }
        None
    }
}
