//! Rule configuration.
//!
//! The engine supports two variants of play: the full game (alternating
//! marks, win detection) and the single-mark board where X fills every
//! square and no winner is ever declared.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the mark to move changes after each accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkPolicy {
    /// X and O take turns.
    #[default]
    Alternating,
    /// X places every mark.
    Fixed,
}

/// Rules applied by a [`GameEngine`](crate::GameEngine).
///
/// Loads from TOML; missing keys take their defaults.
///
/// ```toml
/// mark_policy = "fixed"
/// win_detection = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct RuleSet {
    /// Mark policy.
    #[serde(default)]
    mark_policy: MarkPolicy,

    /// Whether completed lines set a winner.
    #[serde(default = "default_win_detection")]
    win_detection: bool,
}

fn default_win_detection() -> bool {
    true
}

impl RuleSet {
    /// Creates a rule set.
    pub fn new(mark_policy: MarkPolicy, win_detection: bool) -> Self {
        Self {
            mark_policy,
            win_detection,
        }
    }

    /// Alternating marks with win detection.
    pub fn canonical() -> Self {
        Self::new(MarkPolicy::Alternating, default_win_detection())
    }

    /// X only, no win detection.
    pub fn single_mark() -> Self {
        Self::new(MarkPolicy::Fixed, false)
    }

    /// True for the canonical rules, where every game invariant applies.
    pub fn is_canonical(&self) -> bool {
        *self == Self::canonical()
    }

    /// Parses rules from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let rules: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse rules: {}", e)))?;
        debug!(?rules, "Parsed rules");
        Ok(rules)
    }

    /// Loads rules from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading rules from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read rules file: {}", e)))?;

        let rules = Self::from_toml_str(&content)?;
        info!(
            mark_policy = ?rules.mark_policy,
            win_detection = rules.win_detection,
            "Rules loaded successfully"
        );
        Ok(rules)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
