//! Output format types for formatting results

use serde::{Deserialize, Serialize};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Human-readable table output
    #[default]
    Table,
    /// Pretty-printed JSON output
    Json,
}

impl OutputFormat {
    /// The `--json` switch wins over a requested format
    pub fn with_json_flag(self, json: bool) -> Self {
        if json {
            Self::Json
        } else {
            self
        }
    }

    /// Check if format is machine-readable
    pub fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}
