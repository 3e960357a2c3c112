//! Output format selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `export NAME="value"` lines, for `eval`
    Bash,
    /// A JSON document
    Json,
    /// `"name"="value"` lines
    #[default]
    Text,
}

impl OutputFormat {
    /// All formats, in the order shown in help text.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Bash, OutputFormat::Json, OutputFormat::Text];

    /// Lowercase name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Bash => "bash",
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bash" => Ok(OutputFormat::Bash),
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}
