use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ui::score::SEED_SCORE;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub recorder: RecorderConfig,
}

/// Store bootstrap settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Score the store starts from (default: 2).
    #[serde(default = "default_seed")]
    pub seed: i64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse clicks on the controls (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Action log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecorderConfig {
    /// JSON-lines file every dispatched action is appended to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_seed() -> i64 {
    SEED_SCORE
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}
