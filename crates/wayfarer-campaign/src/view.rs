//! Read-only snapshot of a campaign.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Read-only view of a campaign's current position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignView {
    /// The campaign identifier.
    pub campaign_id: Uuid,
    /// Name of the active adventure.
    pub adventure: String,
    /// Name of the active challenge.
    pub challenge: String,
    /// Time of the most recent advance attempt, if any.
    pub last_update: Option<DateTime<Utc>>,
    /// Whether the adventure has finished.
    pub finished: bool,
}
