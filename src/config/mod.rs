//! TOML-based batch configuration.
//!
//! Example configuration:
//! ```toml
//! levels = 4
//! total_cost = 33
//! error_cost = 26
//! diffs = [0, 4, 8]
//! error_kinds = ["attribute_unknown", "aggregate_unknown", "group_unknown"]
//! repetitions = 100
//! tries_limit = 1000
//! base_columns = 5
//! seed = 42
//!
//! [generator]
//! alias_strategy = "fresh_word"
//! dedup_scope = "global"
//! exclude_group_keys = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::chain::ErrorKind;
use crate::shape::GenOptions;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Error-kind selector as written in configuration files.
///
/// `None` requests no-error control rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSetting {
    None,
    AttributeUnknown,
    AggregateUnknown,
    GroupUnknown,
}

impl ErrorSetting {
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ErrorSetting::None => None,
            ErrorSetting::AttributeUnknown => Some(ErrorKind::AttributeUnknown),
            ErrorSetting::AggregateUnknown => Some(ErrorKind::AggregateUnknown),
            ErrorSetting::GroupUnknown => Some(ErrorKind::GroupUnknown),
        }
    }
}

/// Batch-run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Chain levels excluding the base.
    pub levels: usize,
    /// Target CTE structural cost before injection.
    pub total_cost: u32,
    /// Structural-cost position of the injected error.
    pub error_cost: u32,
    /// Target information-difference values.
    pub diffs: Vec<i64>,
    /// Error categories to generate (including `none` for control rows).
    pub error_kinds: Vec<ErrorSetting>,
    /// Accepted rows wanted per (kind, diff) combination.
    pub repetitions: usize,
    /// Attempt cap per combination.
    pub tries_limit: usize,
    /// Columns of the synthetic base table.
    pub base_columns: u32,
    /// RNG seed; omit for an OS-entropy seed.
    pub seed: Option<u64>,
    /// Chain-generator variant knobs.
    pub generator: GenOptions,
}

impl Default for Settings {
    fn default() -> Self {
        // Main-experiment parameters.
        Self {
            levels: 4,
            total_cost: 33,
            error_cost: 26,
            diffs: vec![0, 4, 8],
            error_kinds: vec![
                ErrorSetting::AttributeUnknown,
                ErrorSetting::AggregateUnknown,
                ErrorSetting::GroupUnknown,
            ],
            repetitions: 100,
            tries_limit: 1000,
            base_columns: 5,
            seed: None,
            generator: GenOptions::default(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file and validate them.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject configurations the generator cannot run.
    ///
    /// These are the only conditions that abort a run; everything else is
    /// handled as per-attempt retry inside the batch loop.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.levels == 0 {
            return Err(SettingsError::InvalidConfig(
                "levels must be at least 1".into(),
            ));
        }
        if self.base_columns == 0 {
            return Err(SettingsError::InvalidConfig(
                "base_columns must be at least 1".into(),
            ));
        }
        if self.total_cost <= self.base_columns {
            return Err(SettingsError::InvalidConfig(format!(
                "total_cost ({}) must exceed base_columns ({})",
                self.total_cost, self.base_columns
            )));
        }
        if self.repetitions == 0 {
            return Err(SettingsError::InvalidConfig(
                "repetitions must be at least 1".into(),
            ));
        }
        if self.tries_limit == 0 {
            return Err(SettingsError::InvalidConfig(
                "tries_limit must be at least 1".into(),
            ));
        }
        if self.diffs.is_empty() {
            return Err(SettingsError::InvalidConfig(
                "diffs must name at least one target".into(),
            ));
        }
        if self.error_kinds.is_empty() {
            return Err(SettingsError::InvalidConfig(
                "error_kinds must name at least one entry".into(),
            ));
        }
        let wants_errors = self.error_kinds.iter().any(|k| k.kind().is_some());
        if wants_errors && self.error_cost == 0 {
            return Err(SettingsError::InvalidConfig(
                "error_cost must be at least 1 when error kinds are requested".into(),
            ));
        }
        Ok(())
    }
}
