//! Configuration structures for easymotion settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Jump settings
    #[serde(default)]
    pub jump: JumpSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Jump settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpSettings {
    /// Label characters, in assignment order
    #[serde(default = "default_placeholder_chars")]
    pub placeholder_chars: String,

    /// Highlight style for offered labels
    #[serde(default = "default_jump_target_scope")]
    pub jump_target_scope: String,

    /// Historically, `true` here makes matching ignore case; kept as is so
    /// existing settings files behave the same.
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional, memory only when unset)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Entries kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_placeholder_chars() -> String {
    defaults::PLACEHOLDER_CHARS.to_string()
}

fn default_jump_target_scope() -> String {
    defaults::JUMP_TARGET_SCOPE.to_string()
}

fn default_case_sensitive() -> bool {
    defaults::CASE_SENSITIVE
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::LOG_MAX_ENTRIES
}

/// Jump keys that sit at top level in the flat legacy layout.
pub const LEGACY_JUMP_KEYS: [&str; 3] = ["placeholder_chars", "jump_target_scope", "case_sensitive"];

impl Default for JumpSettings {
    fn default() -> Self {
        Self {
            placeholder_chars: default_placeholder_chars(),
            jump_target_scope: default_jump_target_scope(),
            case_sensitive: default_case_sensitive(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
