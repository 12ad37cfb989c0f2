//! Simulator error definitions.
//!
//! This module defines the single error type returned by the loader, the
//! configuration layer, and the scheduler. It covers:
//! 1. **Input Errors:** Unknown mnemonics, out-of-range addresses, and malformed workload text.
//! 2. **Configuration Errors:** Zero page size, zero frame count, and other invalid settings.
//! 3. **Fatal Dispatch Errors:** An instruction whose kind does not fit its shape, or a duration
//!    that would push the clock past `Tick::MAX`, halts the run.

use thiserror::Error;

use super::addr::Pid;
use crate::isa::InstructionType;

/// Errors produced while loading, configuring, or running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A workload line used a mnemonic outside the instruction table.
    #[error("line {line}: invalid instruction mnemonic `{mnemonic}`")]
    InvalidInstructionMnemonic {
        /// 1-based line number in the workload text (0 when not parsed from text).
        line: usize,
        /// The offending token.
        mnemonic: String,
    },

    /// A memory instruction addressed memory beyond the configured address limit.
    #[error("line {line}: address {address} out of range (limit {limit})")]
    AddressOutOfRange {
        /// 1-based line number in the workload text.
        line: usize,
        /// The offending address.
        address: u64,
        /// Exclusive upper bound on valid addresses.
        limit: u64,
    },

    /// The memory or timing configuration cannot drive a simulation.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An instruction reached dispatch with a kind its shape cannot carry.
    #[error("process {pid}: malformed {kind} instruction reached dispatch")]
    MalformedInstruction {
        /// Process that issued the instruction.
        pid: Pid,
        /// The instruction kind that could not be dispatched.
        kind: InstructionType,
    },

    /// A duration or latency would move the clock past the largest representable time.
    #[error("process {pid}: simulated clock overflowed")]
    ClockOverflow {
        /// Process whose instruction overflowed the clock.
        pid: Pid,
    },

    /// The workload text is structurally invalid.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number in the workload text.
        line: usize,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// Reading a workload or configuration file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A JSON configuration document failed to deserialize.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Builds a [`SimError::Parse`] for the given line.
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SimError>;
