//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Seed the in-memory stores with demo data at start-up
    #[serde(default = "default_true")]
    pub use_mock_data: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            use_mock_data: true,
            verbose_errors: false,
            enable_tracing: true,
        }
    }
}

fn default_true() -> bool {
    true
}
