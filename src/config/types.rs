use serde::{Deserialize, Serialize};

use crate::selector::EqualityMode;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// Logging settings. `VIEWBIND_LOG` overrides `filter` at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Number of dispatched actions kept in the store's log (default: 64).
    #[serde(default = "default_action_log_capacity")]
    pub action_log_capacity: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// How memoized selectors compare their inputs (default: structural).
    #[serde(default)]
    pub equality: EqualityMode,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_action_log_capacity() -> usize {
    64
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            action_log_capacity: default_action_log_capacity(),
        }
    }
}
