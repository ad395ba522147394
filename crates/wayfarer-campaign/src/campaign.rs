//! The Campaign state machine.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use wayfarer_core::adventure::Adventure;
use wayfarer_core::challenge::{AcceptAll, Challenge};
use wayfarer_core::clock::{Clock, SystemClock};
use wayfarer_core::error::CampaignError;
use wayfarer_core::outcome::Outcome;

use crate::config::CampaignConfig;
use crate::view::CampaignView;

/// Owns the active adventure and challenge of one dialog and drives them one
/// input at a time.
///
/// A campaign is single-threaded: callers that serve many dialogs keep one
/// campaign per dialog and serialize access to each.
pub struct Campaign<I, O> {
    id: Uuid,
    adventure: Box<dyn Adventure<I, O>>,
    challenge: Box<dyn Challenge<I>>,
    last_update: Option<DateTime<Utc>>,
    finished: bool,
    config: CampaignConfig,
    clock: Arc<dyn Clock>,
}

impl<I, O> Campaign<I, O> {
    /// Creates a campaign around `start` without priming it.
    ///
    /// Prefer [`Campaign::create`], which also collects the adventure's
    /// opening output.
    #[must_use]
    pub fn new(start: impl Adventure<I, O> + 'static) -> Self {
        Self::with_config(
            Box::new(start),
            CampaignConfig::default(),
            Arc::new(SystemClock),
        )
    }

    /// Creates an unprimed campaign with explicit configuration and clock.
    #[must_use]
    pub fn with_config(
        start: Box<dyn Adventure<I, O>>,
        config: CampaignConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            adventure: start,
            challenge: Box::new(AcceptAll),
            last_update: None,
            finished: false,
            config,
            clock,
        }
    }

    /// Creates a campaign around `start` and advances it once with no input,
    /// returning the campaign together with the adventure's opening output.
    ///
    /// # Errors
    ///
    /// Returns any error the priming advance produces; see [`Campaign::advance`].
    pub fn create(start: impl Adventure<I, O> + 'static) -> Result<(Self, Vec<O>), CampaignError> {
        Self::create_with(
            Box::new(start),
            CampaignConfig::default(),
            Arc::new(SystemClock),
        )
    }

    /// Like [`Campaign::create`], with explicit configuration and clock.
    ///
    /// # Errors
    ///
    /// Returns any error the priming advance produces; see [`Campaign::advance`].
    pub fn create_with(
        start: Box<dyn Adventure<I, O>>,
        config: CampaignConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<(Self, Vec<O>), CampaignError> {
        let mut campaign = Self::with_config(start, config, clock);
        let output = campaign.advance(None)?;
        info!(campaign_id = %campaign.id, adventure = campaign.adventure.name(), "campaign created");
        Ok((campaign, output))
    }

    /// Drives the dialog forward by one input and returns the items it emits.
    ///
    /// The activity timestamp is refreshed before validation, so rejected
    /// input still counts as activity. When the adventure hands off, the same
    /// input is validated against the current challenge and delivered to the
    /// new adventure before this call returns.
    ///
    /// # Errors
    ///
    /// - `ChallengeFailed` if the active challenge rejects `input`; nothing
    ///   else changes and the caller may retry.
    /// - `InvalidResult` if an adventure emits an empty output collection.
    /// - `HandOffLimitExceeded` if the adventures hand off more than
    ///   `max_hand_offs` times within this call.
    /// - `Finished` if the adventure has already finished.
    ///
    /// Hand-offs performed before a failure are not rolled back.
    #[instrument(skip_all, fields(campaign_id = %self.id))]
    pub fn advance(&mut self, input: Option<&I>) -> Result<Vec<O>, CampaignError> {
        let mut hand_offs = 0;
        loop {
            self.last_update = Some(self.clock.now());

            if self.finished {
                return Err(CampaignError::Finished);
            }

            if !self.challenge.filter(input) {
                warn!(challenge = self.challenge.name(), "input rejected");
                return Err(CampaignError::ChallengeFailed {
                    challenge: self.challenge.name().to_owned(),
                });
            }

            let outcome = self.adventure.resume(input);
            debug!(
                adventure = self.adventure.name(),
                outcome = outcome.kind(),
                "adventure resumed"
            );

            let output = match outcome {
                Outcome::NewAdventure(next) => {
                    self.hand_off(next);
                    hand_offs += 1;
                    if hand_offs > self.config.max_hand_offs {
                        warn!(limit = self.config.max_hand_offs, "hand-off limit exceeded");
                        return Err(CampaignError::HandOffLimitExceeded {
                            limit: self.config.max_hand_offs,
                        });
                    }
                    continue;
                }
                Outcome::NewChallenge(challenge) => {
                    self.replace_challenge(challenge);
                    Vec::new()
                }
                Outcome::Empty => Vec::new(),
                Outcome::Output(items) => {
                    self.ensure_not_empty(&items, "output")?;
                    items
                }
                Outcome::ChallengeAndOutput(challenge, items) => {
                    self.ensure_not_empty(&items, "challenge_and_output")?;
                    self.replace_challenge(challenge);
                    items
                }
                Outcome::Finished => {
                    self.adventure.dispose();
                    self.finished = true;
                    info!(adventure = self.adventure.name(), "adventure finished");
                    Vec::new()
                }
            };

            return Ok(output);
        }
    }

    fn hand_off(&mut self, next: Box<dyn Adventure<I, O>>) {
        debug!(
            from = self.adventure.name(),
            to = next.name(),
            "handing off to new adventure"
        );
        let mut previous = std::mem::replace(&mut self.adventure, next);
        previous.dispose();
    }

    fn replace_challenge(&mut self, challenge: Box<dyn Challenge<I>>) {
        debug!(
            from = self.challenge.name(),
            to = challenge.name(),
            "replacing challenge"
        );
        self.challenge = challenge;
    }

    fn ensure_not_empty(&self, items: &[O], kind: &str) -> Result<(), CampaignError> {
        if items.is_empty() {
            let adventure = self.adventure.name().to_owned();
            warn!(%adventure, kind, "adventure yielded an empty output collection");
            return Err(CampaignError::InvalidResult {
                adventure,
                description: format!("{kind} with an empty output collection"),
            });
        }
        Ok(())
    }

    /// Returns the campaign identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the active adventure.
    #[must_use]
    pub fn adventure(&self) -> &dyn Adventure<I, O> {
        &*self.adventure
    }

    /// Returns the challenge gating the next input.
    #[must_use]
    pub fn challenge(&self) -> &dyn Challenge<I> {
        &*self.challenge
    }

    /// Returns the time of the most recent advance attempt.
    #[must_use]
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    /// Whether the adventure has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the configuration this campaign runs with.
    #[must_use]
    pub fn config(&self) -> &CampaignConfig {
        &self.config
    }

    /// Returns a read-only snapshot of the campaign.
    #[must_use]
    pub fn view(&self) -> CampaignView {
        CampaignView {
            campaign_id: self.id,
            adventure: self.adventure.name().to_owned(),
            challenge: self.challenge.name().to_owned(),
            last_update: self.last_update,
            finished: self.finished,
        }
    }
}

impl<I, O> fmt::Debug for Campaign<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Campaign")
            .field("id", &self.id)
            .field("adventure", &self.adventure.name())
            .field("challenge", &self.challenge.name())
            .field("last_update", &self.last_update)
            .field("finished", &self.finished)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
