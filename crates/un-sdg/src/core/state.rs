//! Per-instance component state with explicit goal change detection.
//!
//! # Design
//! - Inputs from the host are applied first, then the goal is resolved at most once.
//! - The image and alt text are only ever written together from one [`Resolution`].
//! - Resolution runs on the first update and afterwards only when the goal or the
//!   configured asset root changes.

use super::assets::AssetRoot;
use super::config::{InvalidGoalPolicy, SdgConfig};
use super::selector::{Resolution, resolve};

/// Goal identifier used before the host supplies one.
pub const DEFAULT_GOAL: &str = "1";

/// Inputs a host sets on the component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SdgInputs {
    /// Goal identifier (`"1"`..`"17"`, `"all"`, `"circle"`).
    pub goal: String,
    /// Alt text override; empty means none.
    pub label: String,
    /// Render a color swatch instead of the image.
    pub color_only: bool,
    /// Externally written alt text.
    pub alt: Option<String>,
}

impl Default for SdgInputs {
    fn default() -> Self {
        Self {
            goal: DEFAULT_GOAL.to_string(),
            label: String::new(),
            color_only: false,
            alt: None,
        }
    }
}

/// Outcome of applying one batch of inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalUpdate {
    /// The goal did not change; the selector was not consulted.
    Unchanged,
    /// The goal changed and resolved to a new image.
    Resolved,
    /// The goal changed but could not be resolved.
    Unresolved,
}

/// State owned by one component instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentState {
    goal_id: String,
    label: String,
    color_only: bool,
    alt_text: Option<String>,
    resolved_image: Option<String>,
    last_alt_input: Option<String>,
    resolved_root: Option<AssetRoot>,
    pending: bool,
}

impl Default for ComponentState {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentState {
    /// Fresh state with the default goal marked for resolution.
    #[must_use]
    pub fn new() -> Self {
        Self {
            goal_id: DEFAULT_GOAL.to_string(),
            label: String::new(),
            color_only: false,
            alt_text: None,
            resolved_image: None,
            last_alt_input: None,
            resolved_root: None,
            pending: true,
        }
    }

    /// Apply host inputs and re-resolve the goal if it or the asset root changed.
    pub fn apply(&mut self, inputs: &SdgInputs, config: &SdgConfig) -> GoalUpdate {
        self.label.clone_from(&inputs.label);
        self.color_only = inputs.color_only;
        if inputs.alt != self.last_alt_input {
            self.last_alt_input.clone_from(&inputs.alt);
            self.alt_text.clone_from(&inputs.alt);
        }
        if inputs.goal != self.goal_id {
            self.goal_id.clone_from(&inputs.goal);
            self.pending = true;
        }
        if self.resolved_root.as_ref() != Some(&config.asset_root) {
            self.resolved_root = Some(config.asset_root.clone());
            self.pending = true;
        }
        if !self.pending {
            return GoalUpdate::Unchanged;
        }
        self.pending = false;
        match resolve(&self.goal_id, &config.asset_root) {
            Some(resolution) => {
                self.store(Some(resolution));
                GoalUpdate::Resolved
            }
            None => {
                if config.invalid_goal == InvalidGoalPolicy::Placeholder {
                    self.store(None);
                }
                GoalUpdate::Unresolved
            }
        }
    }

    fn store(&mut self, resolution: Option<Resolution>) {
        match resolution {
            Some(Resolution { image, alt_text }) => {
                self.resolved_image = Some(image);
                self.alt_text = Some(alt_text);
            }
            None => {
                self.resolved_image = None;
                self.alt_text = None;
            }
        }
    }

    /// Current goal identifier.
    #[must_use]
    pub fn goal_id(&self) -> &str {
        &self.goal_id
    }

    /// Current label override.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether color-swatch mode is requested.
    #[must_use]
    pub const fn color_only(&self) -> bool {
        self.color_only
    }

    /// Alt text from the last resolution or external write.
    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    /// Image URL from the last successful resolution.
    #[must_use]
    pub fn resolved_image(&self) -> Option<&str> {
        self.resolved_image.as_deref()
    }

    /// Text announced for the image: the label when set, else the alt text.
    #[must_use]
    pub fn accessible_text(&self) -> Option<&str> {
        if self.label.is_empty() {
            self.alt_text()
        } else {
            Some(&self.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ConfigError;

    fn inputs(goal: &str) -> SdgInputs {
        SdgInputs {
            goal: goal.to_string(),
            ..SdgInputs::default()
        }
    }

    #[test]
    fn new_state_matches_documented_defaults() {
        let state = ComponentState::new();
        assert_eq!(state.goal_id(), "1");
        assert_eq!(state.label(), "");
        assert!(!state.color_only());
        assert_eq!(state.alt_text(), None);
        assert_eq!(state.resolved_image(), None);
    }

    #[test]
    fn first_apply_resolves_default_goal() {
        let mut state = ComponentState::new();
        let update = state.apply(&SdgInputs::default(), &SdgConfig::default());
        assert_eq!(update, GoalUpdate::Resolved);
        assert_eq!(state.alt_text(), Some("Goal 1: No Poverty"));
        assert_eq!(state.resolved_image(), Some("lib/svgs/goal-1.svg"));
    }

    #[test]
    fn unchanged_goal_skips_resolution() {
        let config = SdgConfig::default();
        let mut state = ComponentState::new();
        state.apply(&inputs("4"), &config);
        let update = state.apply(
            &SdgInputs {
                label: "Education".to_string(),
                ..inputs("4")
            },
            &config,
        );
        assert_eq!(update, GoalUpdate::Unchanged);
        assert_eq!(state.accessible_text(), Some("Education"));
    }

    #[test]
    fn invalid_goals_retain_previous_resolution() {
        let config = SdgConfig::default();
        let mut state = ComponentState::new();
        state.apply(&inputs("5"), &config);
        let before = (
            state.resolved_image().map(str::to_string),
            state.alt_text().map(str::to_string),
        );
        for raw in ["0", "18", "abc"] {
            assert_eq!(state.apply(&inputs(raw), &config), GoalUpdate::Unresolved);
            assert_eq!(state.goal_id(), raw);
            let after = (
                state.resolved_image().map(str::to_string),
                state.alt_text().map(str::to_string),
            );
            assert_eq!(after, before, "{raw}");
        }
    }

    #[test]
    fn invalid_first_goal_shows_nothing() {
        let mut state = ComponentState::new();
        state.apply(&inputs("zero"), &SdgConfig::default());
        assert_eq!(state.resolved_image(), None);
        assert_eq!(state.alt_text(), None);
    }

    #[test]
    fn goal_change_updates_image_and_alt_together() {
        let config = SdgConfig::default();
        let mut state = ComponentState::new();
        state.apply(&inputs("3"), &config);
        assert_eq!(state.resolved_image(), Some("lib/svgs/goal-3.svg"));
        assert_eq!(state.alt_text(), Some("Goal 3: Good Health and Well-being"));

        state.apply(&inputs("9"), &config);
        assert_eq!(state.resolved_image(), Some("lib/svgs/goal-9.svg"));
        assert_eq!(
            state.alt_text(),
            Some("Goal 9: Industry, Innovation and Infrastructure")
        );
    }

    #[test]
    fn label_overrides_accessible_text_for_any_goal() {
        let config = SdgConfig::default();
        let mut state = ComponentState::new();
        for goal in ["2", "all", "circle", "nope"] {
            state.apply(
                &SdgInputs {
                    label: "Our focus".to_string(),
                    ..inputs(goal)
                },
                &config,
            );
            assert_eq!(state.accessible_text(), Some("Our focus"), "{goal}");
        }
    }

    #[test]
    fn written_alt_holds_until_next_goal_change() {
        let config = SdgConfig::default();
        let mut state = ComponentState::new();
        state.apply(&inputs("13"), &config);

        let written = SdgInputs {
            alt: Some("Custom".to_string()),
            ..inputs("13")
        };
        state.apply(&written, &config);
        assert_eq!(state.alt_text(), Some("Custom"));
        state.apply(&written, &config);
        assert_eq!(state.alt_text(), Some("Custom"));

        state.apply(
            &SdgInputs {
                alt: Some("Custom".to_string()),
                ..inputs("14")
            },
            &config,
        );
        assert_eq!(state.alt_text(), Some("Goal 14: Life Below Water"));
    }

    #[test]
    fn asset_root_change_re_resolves_current_goal() -> Result<(), ConfigError> {
        let mut state = ComponentState::new();
        state.apply(&inputs("1"), &SdgConfig::default());
        assert_eq!(state.resolved_image(), Some("lib/svgs/goal-1.svg"));

        let moved = SdgConfig {
            asset_root: AssetRoot::new("https://cdn.example.org/sdg")?,
            ..SdgConfig::default()
        };
        assert_eq!(state.apply(&inputs("1"), &moved), GoalUpdate::Resolved);
        assert_eq!(
            state.resolved_image(),
            Some("https://cdn.example.org/sdg/goal-1.svg")
        );
        assert_eq!(state.alt_text(), Some("Goal 1: No Poverty"));
        assert_eq!(state.apply(&inputs("1"), &moved), GoalUpdate::Unchanged);
        Ok(())
    }

    #[test]
    fn placeholder_policy_clears_resolution() {
        let config = SdgConfig {
            invalid_goal: InvalidGoalPolicy::Placeholder,
            ..SdgConfig::default()
        };
        let mut state = ComponentState::new();
        state.apply(&inputs("all"), &config);
        assert_eq!(state.apply(&inputs("42"), &config), GoalUpdate::Unresolved);
        assert_eq!(state.resolved_image(), None);
        assert_eq!(state.alt_text(), None);
    }
}
