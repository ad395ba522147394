//! Campaign error types.

use thiserror::Error;

/// Failures raised while advancing a Campaign.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampaignError {
    /// The input did not satisfy the active challenge. The Campaign is left
    /// exactly as it was, so the caller can re-prompt and try again.
    #[error("input failed the {challenge} challenge")]
    ChallengeFailed {
        /// Name of the challenge that rejected the input.
        challenge: String,
    },

    /// An adventure produced a result outside the accepted shapes.
    #[error("adventure {adventure} yielded an invalid result: {description}")]
    InvalidResult {
        /// Name of the offending adventure.
        adventure: String,
        /// What was wrong with the result.
        description: String,
    },

    /// A single advance handed off between adventures more often than allowed.
    #[error("hand-off limit of {limit} exceeded within a single advance")]
    HandOffLimitExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// The campaign's adventure has finished; nothing is left to advance.
    #[error("campaign has already finished")]
    Finished,
}

impl CampaignError {
    /// Whether the caller may retry the same campaign with different input.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ChallengeFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_challenge_failed_is_recoverable() {
        assert!(
            CampaignError::ChallengeFailed {
                challenge: "numeric".into()
            }
            .is_recoverable()
        );
        assert!(
            !CampaignError::InvalidResult {
                adventure: "greeter".into(),
                description: "empty output".into(),
            }
            .is_recoverable()
        );
        assert!(!CampaignError::HandOffLimitExceeded { limit: 4 }.is_recoverable());
        assert!(!CampaignError::Finished.is_recoverable());
    }

    #[test]
    fn test_challenge_failed_message_names_the_challenge() {
        let err = CampaignError::ChallengeFailed {
            challenge: "numeric".into(),
        };
        assert_eq!(err.to_string(), "input failed the numeric challenge");
    }
}
