use serde::{Deserialize, Serialize};

/// External program overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Editor program used by "Open in Code" on every platform
    /// (None = the platform default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}
