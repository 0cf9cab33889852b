//! Plugin configuration
//!
//! Read from `plugins.dash-shield` in the host's Tauri config.

use crate::shield::CHANNEL_NAME;
use serde::{Deserialize, Serialize};

/// Configuration for the shield plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShieldConfig {
    /// Channel label shown in logs and tracing spans. Routing is fixed by
    /// the plugin name, so changing it does not move the channel.
    pub channel: String,

    /// Labels of the windows to track. Empty tracks every window.
    pub windows: Vec<String>,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            channel: CHANNEL_NAME.to_string(),
            windows: Vec::new(),
        }
    }
}

impl ShieldConfig {
    /// Whether the window with `label` should be attached
    pub fn tracks(&self, label: &str) -> bool {
        self.windows.is_empty() || self.windows.iter().any(|w| w == label)
    }
}
