//! Mnemonic lookup.
//!
//! Workload text names instructions by mnemonic (`Run`, `Sleep`, `Allocate`,
//! `Free`, `Read`, `Write`). Lookup is case-insensitive and unknown tokens are
//! an error, never a silently skipped line.

use std::str::FromStr;

use super::instruction::InstructionType;
use crate::common::SimError;

/// Mnemonic table, in canonical spelling.
pub const MNEMONICS: &[(&str, InstructionType)] = &[
    ("Run", InstructionType::Run),
    ("Sleep", InstructionType::Sleep),
    ("Allocate", InstructionType::Allocate),
    ("Free", InstructionType::Free),
    ("Read", InstructionType::Read),
    ("Write", InstructionType::Write),
];

impl InstructionType {
    /// Looks up a mnemonic, ignoring ASCII case.
    pub fn from_mnemonic(token: &str) -> Option<Self> {
        MNEMONICS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
            .map(|&(_, kind)| kind)
    }
}

impl FromStr for InstructionType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(s).ok_or_else(|| SimError::InvalidInstructionMnemonic {
            line: 0,
            mnemonic: s.to_string(),
        })
    }
}
