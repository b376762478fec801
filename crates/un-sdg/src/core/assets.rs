//! Logical asset keys and their resolution against an asset root.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::config::ConfigError;
use super::registry::GoalNumber;

/// Asset root used when no configuration is supplied.
pub const DEFAULT_ASSET_ROOT: &str = "lib/svgs/";

/// One of the 19 addressable images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKey {
    /// Per-goal icon (`goal-{n}.svg`).
    Goal(GoalNumber),
    /// Composite image of every goal.
    All,
    /// Circular badge.
    Circle,
}

impl AssetKey {
    /// Every asset key: goals in order, then `all`, then `circle`.
    #[must_use]
    pub fn all() -> Vec<Self> {
        GoalNumber::all()
            .map(Self::Goal)
            .chain([Self::All, Self::Circle])
            .collect()
    }

    /// Logical key without extension (`goal-3`, `all`, `circle`).
    #[must_use]
    pub fn key(self) -> String {
        match self {
            Self::Goal(number) => format!("goal-{number}"),
            Self::All => "all".to_string(),
            Self::Circle => "circle".to_string(),
        }
    }

    /// File name inside the asset root.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.{}", self.key(), self.extension())
    }

    /// File extension; only the circle badge is a raster image.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Circle => "png",
            Self::Goal(_) | Self::All => "svg",
        }
    }
}

impl Display for AssetKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.key())
    }
}

/// URL prefix the asset file names are joined to. Always ends with `/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetRoot(String);

impl AssetRoot {
    /// Build a root, appending a trailing `/` when missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAssetRoot`] for empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyAssetRoot);
        }
        let mut root = trimmed.to_string();
        if !root.ends_with('/') {
            root.push('/');
        }
        Ok(Self(root))
    }

    /// Resolve an asset key to its URL.
    #[must_use]
    pub fn url_for(&self, key: AssetKey) -> String {
        format!("{}{}", self.0, key.file_name())
    }

    /// The normalised prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AssetRoot {
    fn default() -> Self {
        Self(DEFAULT_ASSET_ROOT.to_string())
    }
}

impl TryFrom<String> for AssetRoot {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssetRoot> for String {
    fn from(root: AssetRoot) -> Self {
        root.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nineteen_keys_with_expected_file_names() {
        let keys = AssetKey::all();
        assert_eq!(keys.len(), 19);
        let names: Vec<String> = keys.iter().map(|key| key.file_name()).collect();
        assert_eq!(names[0], "goal-1.svg");
        assert_eq!(names[16], "goal-17.svg");
        assert_eq!(names[17], "all.svg");
        assert_eq!(names[18], "circle.png");
    }

    #[test]
    fn asset_root_normalises_trailing_slash() -> Result<(), ConfigError> {
        let root = AssetRoot::new(" https://cdn.example.org/sdg ")?;
        assert_eq!(root.as_str(), "https://cdn.example.org/sdg/");
        assert_eq!(
            root.url_for(AssetKey::Circle),
            "https://cdn.example.org/sdg/circle.png"
        );
        assert_eq!(AssetRoot::new("assets/")?.as_str(), "assets/");
        Ok(())
    }

    #[test]
    fn empty_asset_root_is_rejected() {
        assert!(matches!(
            AssetRoot::new("   "),
            Err(ConfigError::EmptyAssetRoot)
        ));
    }

    #[test]
    fn default_root_matches_bundled_layout() {
        let url = AssetRoot::default().url_for(AssetKey::All);
        assert_eq!(url, "lib/svgs/all.svg");
    }
}
