//! REPL configuration read from the environment.

use std::str::FromStr;

use wayfarer_campaign::CampaignConfig;

use crate::error::ReplError;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Plain,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ReplError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(ReplError::Config(format!(
                "WAYFARER_LOG_FORMAT must be plain or json, got {other:?}"
            ))),
        }
    }
}

/// Settings for one REPL session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplConfig {
    /// Configuration handed to the campaign.
    pub campaign: CampaignConfig,
    /// Log output format.
    pub log_format: LogFormat,
}

impl ReplConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ReplError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ReplError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; unset keys keep defaults.
    ///
    /// # Errors
    ///
    /// Returns `ReplError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ReplError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("WAYFARER_MAX_HAND_OFFS") {
            config.campaign.max_hand_offs = raw.trim().parse().map_err(|e| {
                ReplError::Config(format!("WAYFARER_MAX_HAND_OFFS must be a valid usize: {e}"))
            })?;
        }

        if let Some(raw) = lookup("WAYFARER_LOG_FORMAT") {
            config.log_format = raw.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use wayfarer_campaign::config::DEFAULT_MAX_HAND_OFFS;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_unset_variables_keep_defaults() {
        let config = ReplConfig::from_lookup(lookup_in(&[])).unwrap();

        assert_eq!(config.campaign.max_hand_offs, DEFAULT_MAX_HAND_OFFS);
        assert_eq!(config.log_format, LogFormat::Plain);
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = ReplConfig::from_lookup(lookup_in(&[
            ("WAYFARER_MAX_HAND_OFFS", "4"),
            ("WAYFARER_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.campaign.max_hand_offs, 4);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_hand_off_limit_is_a_config_error() {
        let result = ReplConfig::from_lookup(lookup_in(&[("WAYFARER_MAX_HAND_OFFS", "many")]));

        match result {
            Err(ReplError::Config(message)) => {
                assert!(message.contains("WAYFARER_MAX_HAND_OFFS"));
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_log_format_is_a_config_error() {
        let result = ReplConfig::from_lookup(lookup_in(&[("WAYFARER_LOG_FORMAT", "xml")]));

        assert!(matches!(result, Err(ReplError::Config(_))));
    }
}
