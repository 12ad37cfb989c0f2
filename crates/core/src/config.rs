//! Configuration system for the scheduling and paging simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! a run. It provides:
//! 1. **Defaults:** Baseline memory geometry and cost model.
//! 2. **Structures:** Hierarchical config for general, memory, and timing settings.
//! 3. **Enums:** The writeback overlap policy used on a miss that evicts a dirty page.
//!
//! Configuration is supplied as JSON or built with `Config::default()`. Workload
//! files carry their own page size and frame count, which override `memory`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Result, SimError};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Page size in address units.
    pub const PAGE_SIZE: u64 = constants::DEFAULT_PAGE_SIZE;

    /// Number of physical frames in the shared pool.
    pub const FRAME_COUNT: usize = constants::DEFAULT_FRAME_COUNT;

    /// Cost of touching a resident page.
    pub const HIT_LATENCY: u64 = constants::HIT_LATENCY;

    /// Cost of bringing a page from disk into a frame.
    pub const LOAD_LATENCY: u64 = constants::LOAD_LATENCY;

    /// Cost of writing a dirty victim back to disk.
    pub const WRITEBACK_LATENCY: u64 = constants::WRITEBACK_LATENCY;
}

/// How a dirty-victim writeback overlaps the page load that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum WritebackPolicy {
    /// Writeback completes before the load starts.
    ///
    /// `MTD` at `t`, `DTM` at `t + writeback`, access at `t + writeback + load`.
    /// A miss with writeback costs `writeback + load + hit` (100 with defaults).
    #[default]
    Sequential,
    /// Writeback and load proceed together.
    ///
    /// `MTD` and `DTM` both at `t`, access at `t + load`.
    /// A miss with writeback costs the same as a clean miss (60 with defaults).
    Overlapped,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use pagesched_core::config::{Config, WritebackPolicy};
///
/// let json = r#"{
///     "general": { "trace_events": true },
///     "memory": { "page_size": 100, "frame_count": 4, "address_limit": 4096 },
///     "timing": { "writeback": "Overlapped" }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_events);
/// assert_eq!(config.memory.frame_count, 4);
/// assert_eq!(config.timing.hit_latency, 20);
/// assert_eq!(config.timing.writeback, WritebackPolicy::Overlapped);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory geometry
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Cost model
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// [`SimError::Json`] for a malformed document, [`SimError::Configuration`]
    /// if it does not pass [`Config::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`SimError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json_str`].
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Returns a copy with the memory geometry replaced.
    #[must_use]
    pub fn with_memory(mut self, page_size: u64, frame_count: usize) -> Self {
        self.memory.page_size = page_size;
        self.memory.frame_count = frame_count;
        self
    }

    /// Checks that the configuration can drive a simulation.
    ///
    /// # Errors
    ///
    /// [`SimError::Configuration`] for a zero page size, zero frame count, or
    /// zero address limit.
    pub fn validate(&self) -> Result<()> {
        self.memory.validate()
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every emitted event at debug level as it is appended
    #[serde(default)]
    pub trace_events: bool,
}

/// Memory geometry of the shared frame pool.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Page size in address units
    #[serde(default = "MemoryConfig::default_page_size")]
    pub page_size: u64,

    /// Number of physical frames
    #[serde(default = "MemoryConfig::default_frame_count")]
    pub frame_count: usize,

    /// Exclusive upper bound on addresses accepted by the loader (unbounded when absent)
    #[serde(default)]
    pub address_limit: Option<u64>,
}

impl MemoryConfig {
    /// Returns the default page size.
    const fn default_page_size() -> u64 {
        defaults::PAGE_SIZE
    }

    /// Returns the default frame count.
    const fn default_frame_count() -> usize {
        defaults::FRAME_COUNT
    }

    /// Checks the geometry.
    ///
    /// # Errors
    ///
    /// [`SimError::Configuration`] for a zero page size, zero frame count, or
    /// zero address limit.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(SimError::Configuration("page size must be non-zero".into()));
        }
        if self.frame_count == 0 {
            return Err(SimError::Configuration("frame count must be non-zero".into()));
        }
        if self.address_limit == Some(0) {
            return Err(SimError::Configuration(
                "address limit must be non-zero when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::PAGE_SIZE,
            frame_count: defaults::FRAME_COUNT,
            address_limit: None,
        }
    }
}

/// Cost model for memory accesses.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// Cost of an access to a resident page
    #[serde(default = "TimingConfig::default_hit_latency")]
    pub hit_latency: u64,

    /// Cost of loading a page into a frame
    #[serde(default = "TimingConfig::default_load_latency")]
    pub load_latency: u64,

    /// Cost of writing back a dirty victim
    #[serde(default = "TimingConfig::default_writeback_latency")]
    pub writeback_latency: u64,

    /// Overlap between writeback and the following load
    #[serde(default)]
    pub writeback: WritebackPolicy,
}

impl TimingConfig {
    /// Returns the default hit latency.
    const fn default_hit_latency() -> u64 {
        defaults::HIT_LATENCY
    }

    /// Returns the default load latency.
    const fn default_load_latency() -> u64 {
        defaults::LOAD_LATENCY
    }

    /// Returns the default writeback latency.
    const fn default_writeback_latency() -> u64 {
        defaults::WRITEBACK_LATENCY
    }

    /// Total cost of a miss, with or without a dirty writeback.
    ///
    /// Saturates at `u64::MAX`; a run that actually reaches it stops with
    /// [`SimError::ClockOverflow`].
    pub const fn miss_cost(&self, writeback: bool) -> u64 {
        let base = self.load_latency.saturating_add(self.hit_latency);
        match (writeback, self.writeback) {
            (true, WritebackPolicy::Sequential) => self.writeback_latency.saturating_add(base),
            _ => base,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            hit_latency: defaults::HIT_LATENCY,
            load_latency: defaults::LOAD_LATENCY,
            writeback_latency: defaults::WRITEBACK_LATENCY,
            writeback: WritebackPolicy::default(),
        }
    }
}
