//! Common types and utilities for dylext commands.

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DylextError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How `highlight` prints its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line: `line:start-end<TAB>category<TAB>text`
    #[default]
    Text,
    /// Structured token report
    Json,
    /// The source itself, colored with SGR escapes
    Ansi,
}

impl OutputFormat {
    /// The format's name as written in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Ansi => "ansi",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Input
// ============================================================================

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Reads a whole source file, or standard input for `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    if !path.is_file() {
        return Err(DylextError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    std::fs::read_to_string(path).map_err(|e| {
        DylextError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
    })
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes.
pub mod error_messages {
    /// Error when input path is missing or not a regular file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when a file would be overwritten without `--force`.
    pub const OUTPUT_FILE_EXISTS: &str = "Output file already exists:";

    /// Error when standard input is named more than once.
    pub const STDIN_REPEATED: &str = "Standard input can only be read once";
}
