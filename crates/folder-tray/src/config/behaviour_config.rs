use crate::config::default_notify_on_launch_failure;

use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Show a desktop notification when a folder cannot be opened.
    #[serde(default = "default_notify_on_launch_failure")]
    pub notify_on_launch_failure: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            notify_on_launch_failure: default_notify_on_launch_failure(),
        }
    }
}
