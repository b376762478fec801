//! Component configuration: where assets live and how invalid goals display.
//!
//! # Design
//! - Every field has a default so an empty JSON object is a valid document.
//! - Unknown fields are rejected to surface typos in host pages early.
//! - Validation happens during deserialisation; a loaded config is always usable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::assets::AssetRoot;

/// Errors produced while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The asset root was empty after trimming.
    #[error("asset root must not be empty")]
    EmptyAssetRoot,
    /// The JSON document could not be parsed.
    #[error("invalid component configuration")]
    Json {
        /// Underlying serde error.
        #[from]
        source: serde_json::Error,
    },
}

/// What to show when the goal identifier cannot be resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidGoalPolicy {
    /// Keep whatever was last resolved (or nothing on first render).
    #[default]
    Retain,
    /// Clear the image and render a neutral placeholder block.
    Placeholder,
}

/// Configuration shared by every component instance on a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SdgConfig {
    /// Prefix for the 19 asset files.
    pub asset_root: AssetRoot,
    /// Display policy for unresolvable goal identifiers.
    pub invalid_goal: InvalidGoalPolicy,
}

impl SdgConfig {
    /// Parse a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the document is malformed, has unknown
    /// fields, or carries an empty asset root.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn empty_document_yields_defaults() -> TestResult {
        let config = SdgConfig::from_json("{}")?;
        assert_eq!(config, SdgConfig::default());
        assert_eq!(config.asset_root.as_str(), "lib/svgs/");
        assert_eq!(config.invalid_goal, InvalidGoalPolicy::Retain);
        Ok(())
    }

    #[test]
    fn fields_are_parsed_and_normalised() -> TestResult {
        let config = SdgConfig::from_json(
            r#"{ "asset_root": "/static/sdg", "invalid_goal": "placeholder" }"#,
        )?;
        assert_eq!(config.asset_root.as_str(), "/static/sdg/");
        assert_eq!(config.invalid_goal, InvalidGoalPolicy::Placeholder);
        Ok(())
    }

    #[test]
    fn invalid_documents_are_rejected() {
        for raw in [
            r#"{ "asset_root": "  " }"#,
            r#"{ "asset_rot": "x/" }"#,
            r#"{ "invalid_goal": "explode" }"#,
            "not json",
        ] {
            let result = SdgConfig::from_json(raw);
            assert!(
                matches!(result, Err(ConfigError::Json { .. })),
                "expected Json error for {raw}, got {result:?}"
            );
        }
    }
}
