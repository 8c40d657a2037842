//! Configuration management for easymotion.
//!
//! Settings live in a TOML file under the XDG config directory. The file is
//! created with defaults on first run, completed with defaults when keys
//! are missing, and migrated from the flat legacy layout when found.

mod settings;
mod xdg;

pub use settings::{Config, JumpSettings, LoggingSettings, LEGACY_JUMP_KEYS};
pub use xdg::get_config_dir;

use anyhow::{bail, Context, Result};
use easymotion_logger::LogLevel;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    /// Lowercase letters, digits, uppercase letters.
    pub const PLACEHOLDER_CHARS: &str =
        "abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    pub const JUMP_TARGET_SCOPE: &str = "string";
    pub const CASE_SENSITIVE: bool = true;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const LOG_MAX_ENTRIES: usize = 1000;
}

impl Config {
    /// Load configuration from the XDG config file.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// On first run, creates the file with default values.
    /// Auto-completes missing keys with default values.
    /// Migrates the legacy flat format.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let (config, migrated) = Self::parse(&original_content)?;
        config.validate()?;

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;
        if migrated || original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Parse and validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        let (config, _) = Self::parse(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse either layout. The flag is set when legacy top-level keys were
    /// found and moved under `[jump]`. Keys already in `[jump]` win.
    fn parse(content: &str) -> Result<(Config, bool)> {
        let mut table: toml::Table = toml::from_str(content)?;
        let legacy: Vec<(&str, toml::Value)> = LEGACY_JUMP_KEYS
            .iter()
            .filter_map(|key| table.remove(*key).map(|value| (*key, value)))
            .collect();
        let migrated = !legacy.is_empty();

        if migrated {
            let jump = table
                .entry("jump")
                .or_insert_with(|| toml::Value::Table(toml::Table::new()));
            let Some(jump) = jump.as_table_mut() else {
                bail!("jump must be a table");
            };
            for (key, value) in legacy {
                jump.entry(key).or_insert(value);
            }
        }

        let config = toml::Value::Table(table).try_into::<Config>()?;
        Ok((config, migrated))
    }

    /// Reject settings the jump engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        let chars = &self.jump.placeholder_chars;
        if chars.is_empty() {
            bail!("jump.placeholder_chars must not be empty");
        }
        let mut seen = HashSet::new();
        for ch in chars.chars() {
            if !seen.insert(ch) {
                bail!("jump.placeholder_chars repeats {:?}", ch);
            }
        }

        self.logging.level()?;
        Ok(())
    }
}

impl LoggingSettings {
    /// Parsed minimum level.
    pub fn level(&self) -> Result<LogLevel> {
        self.min_level
            .parse()
            .map_err(|e: String| anyhow::anyhow!("logging.min_level: {}", e))
    }
}
