//! DOM-free description of what the component displays.

use super::config::{InvalidGoalPolicy, SdgConfig};
use super::selector::{GoalId, goal_number};
use super::state::ComponentState;

/// Browser loading hint for the image element.
pub const IMAGE_LOADING: &str = "lazy";
/// Browser fetch priority hint for the image element.
pub const IMAGE_FETCH_PRIORITY: &str = "low";

/// Observable display mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Flat color swatch.
    Color,
    /// Image element.
    Image,
    /// Neutral block for unresolvable goals under the placeholder policy.
    Placeholder,
}

/// Output of one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedOutput {
    /// Container-filling block in the goal color.
    Swatch {
        /// Hex background color.
        color: &'static str,
    },
    /// Lazily loaded, low-priority image.
    Image {
        /// Image URL; absent until a goal has resolved.
        src: Option<String>,
        /// Accessible text: the label when set, else the alt text.
        alt: Option<String>,
    },
    /// Neutral block standing in for an unresolvable goal.
    Placeholder {
        /// Accessible label, when the host supplied one.
        label: Option<String>,
    },
}

impl RenderedOutput {
    /// Display mode of this output.
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        match self {
            Self::Swatch { .. } => DisplayMode::Color,
            Self::Image { .. } => DisplayMode::Image,
            Self::Placeholder { .. } => DisplayMode::Placeholder,
        }
    }
}

/// Select the output for the current state.
///
/// Color-only mode with an invalid goal falls through to the image branch.
#[must_use]
pub fn render(state: &ComponentState, config: &SdgConfig) -> RenderedOutput {
    if state.color_only()
        && let Ok(number) = goal_number(state.goal_id())
    {
        return RenderedOutput::Swatch {
            color: number.color(),
        };
    }
    if config.invalid_goal == InvalidGoalPolicy::Placeholder
        && GoalId::parse(state.goal_id()).is_err()
    {
        let label = (!state.label().is_empty()).then(|| state.label().to_string());
        return RenderedOutput::Placeholder { label };
    }
    RenderedOutput::Image {
        src: state.resolved_image().map(str::to_string),
        alt: state.accessible_text().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::SdgInputs;

    fn rendered(inputs: &[SdgInputs], config: &SdgConfig) -> RenderedOutput {
        let mut state = ComponentState::new();
        for input in inputs {
            state.apply(input, config);
        }
        render(&state, config)
    }

    fn input(goal: &str, color_only: bool) -> SdgInputs {
        SdgInputs {
            goal: goal.to_string(),
            color_only,
            ..SdgInputs::default()
        }
    }

    #[test]
    fn color_only_valid_goal_renders_swatch() {
        let output = rendered(&[input("6", true)], &SdgConfig::default());
        assert_eq!(output, RenderedOutput::Swatch { color: "#26bde2" });
        assert_eq!(output.mode(), DisplayMode::Color);
    }

    #[test]
    fn color_only_uses_numeric_prefix() {
        let output = rendered(&[input("16th", true)], &SdgConfig::default());
        assert_eq!(output, RenderedOutput::Swatch { color: "#00689d" });
    }

    #[test]
    fn color_only_invalid_goal_falls_through_to_image() {
        let config = SdgConfig::default();
        let output = rendered(&[input("2", false), input("99", true)], &config);
        assert_eq!(
            output,
            RenderedOutput::Image {
                src: Some("lib/svgs/goal-2.svg".to_string()),
                alt: Some("Goal 2: Zero Hunger".to_string()),
            }
        );
    }

    #[test]
    fn color_only_literals_render_images() {
        let output = rendered(&[input("circle", true)], &SdgConfig::default());
        assert_eq!(output.mode(), DisplayMode::Image);
    }

    #[test]
    fn image_prefers_label_over_alt() {
        let labelled = SdgInputs {
            label: "Water".to_string(),
            ..input("6", false)
        };
        let output = rendered(&[labelled], &SdgConfig::default());
        assert_eq!(
            output,
            RenderedOutput::Image {
                src: Some("lib/svgs/goal-6.svg".to_string()),
                alt: Some("Water".to_string()),
            }
        );
    }

    #[test]
    fn unresolved_first_render_has_no_source() {
        let output = rendered(&[input("abc", false)], &SdgConfig::default());
        assert_eq!(
            output,
            RenderedOutput::Image {
                src: None,
                alt: None
            }
        );
    }

    #[test]
    fn placeholder_policy_replaces_invalid_image() {
        let config = SdgConfig {
            invalid_goal: InvalidGoalPolicy::Placeholder,
            ..SdgConfig::default()
        };
        let output = rendered(&[input("3", false), input("99", true)], &config);
        assert_eq!(output, RenderedOutput::Placeholder { label: None });
        let output = rendered(&[input("all", false)], &config);
        assert_eq!(output.mode(), DisplayMode::Image);
    }
}
