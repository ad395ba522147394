//! Campaign configuration.

use serde::{Deserialize, Serialize};

/// Default cap on hand-offs within a single advance.
pub const DEFAULT_MAX_HAND_OFFS: usize = 32;

/// Tunables for a campaign. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// How many times a single advance may hand off to a new adventure
    /// before failing with `HandOffLimitExceeded`.
    pub max_hand_offs: usize,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            max_hand_offs: DEFAULT_MAX_HAND_OFFS,
        }
    }
}
