//! Session configuration

use serde::{Deserialize, Serialize};

/// Names of the keys session state is stored under
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    pub player_score: String,
    pub computer_score: String,
    pub choices: String,
    pub celebrate: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            player_score: "playerScore".to_string(),
            computer_score: "computerScore".to_string(),
            choices: "choiceArray".to_string(),
            celebrate: "celebrate".to_string(),
        }
    }
}

/// Configuration for a `SessionController`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    pub keys: StorageKeys,
    /// Seed for the computer's RNG; hosts pick one when absent
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Parse from JSON. Blank input yields the defaults; missing fields are defaulted.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.player_score, "playerScore");
        assert_eq!(keys.computer_score, "computerScore");
        assert_eq!(keys.choices, "choiceArray");
        assert_eq!(keys.celebrate, "celebrate");
    }

    #[test]
    fn test_blank_json_is_default() {
        assert_eq!(SessionConfig::from_json("").unwrap(), SessionConfig::default());
        assert_eq!(SessionConfig::from_json("  \n").unwrap(), SessionConfig::default());
        assert_eq!(SessionConfig::from_json("{}").unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SessionConfig::from_json(r#"{"seed": 9, "keys": {"celebrate": "rps.celebrate"}}"#)
            .unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.keys.celebrate, "rps.celebrate");
        assert_eq!(config.keys.player_score, "playerScore");
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(SessionConfig::from_json("{seed:").is_err());
    }
}
