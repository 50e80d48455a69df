//! Sync mode for disk store appends.

use serde::{Deserialize, Serialize};

/// Controls when appended log records are forced to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// fsync after every append. Nothing acknowledged is lost on crash.
    Always,

    /// Leave flushing to the OS. A crash may lose the most recent
    /// appends; replay discards any torn tail.
    #[default]
    Buffered,
}

impl SyncMode {
    /// Check if every append must be followed by an fsync.
    pub fn requires_immediate_fsync(&self) -> bool {
        matches!(self, SyncMode::Always)
    }

    /// Human-readable description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            SyncMode::Always => "fsync every append (safest, slowest)",
            SyncMode::Buffered => "OS-buffered appends (fast, may lose recent writes)",
        }
    }
}
