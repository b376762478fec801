//! Mapping from `<un-sdg>` element attributes to component inputs.

use super::state::{DEFAULT_GOAL, SdgInputs};

/// Custom element tag upgraded by the host mount.
pub const ELEMENT_TAG: &str = "un-sdg";
/// `goal` attribute.
pub const GOAL_ATTR: &str = "goal";
/// `label` attribute.
pub const LABEL_ATTR: &str = "label";
/// Boolean `color-only` attribute.
pub const COLOR_ONLY_ATTR: &str = "color-only";
/// `alt` attribute.
pub const ALT_ATTR: &str = "alt";

/// Attributes observed for changes after mount.
pub const OBSERVED_ATTRIBUTES: [&str; 4] = [GOAL_ATTR, LABEL_ATTR, COLOR_ONLY_ATTR, ALT_ATTR];

/// Read inputs when the element is first upgraded; a missing `goal` means the default.
pub fn initial_inputs<F>(lookup: F) -> SdgInputs
where
    F: Fn(&str) -> Option<String>,
{
    read(&lookup, DEFAULT_GOAL)
}

/// Read inputs after an attribute mutation; a removed `goal` reads as empty.
pub fn updated_inputs<F>(lookup: F) -> SdgInputs
where
    F: Fn(&str) -> Option<String>,
{
    read(&lookup, "")
}

fn read<F>(lookup: &F, missing_goal: &str) -> SdgInputs
where
    F: Fn(&str) -> Option<String>,
{
    SdgInputs {
        goal: lookup(GOAL_ATTR).unwrap_or_else(|| missing_goal.to_string()),
        label: lookup(LABEL_ATTR).unwrap_or_default(),
        // Boolean attribute: presence is true whatever the value.
        color_only: lookup(COLOR_ONLY_ATTR).is_some(),
        alt: lookup(ALT_ATTR),
    }
}

/// Script-visible properties defined on each upgraded `<un-sdg>` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostProperty {
    /// `goal`, reflected to the `goal` attribute.
    Goal,
    /// `label`, backed by the `label` attribute.
    Label,
    /// `colorOnly`, reflected to the boolean `color-only` attribute.
    ColorOnly,
    /// `alt`: reads the resolved alt text, writes the `alt` attribute.
    Alt,
}

/// A property value crossing the script boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyValue {
    /// String-typed value; `None` stands for `null` or `undefined`.
    Text(Option<String>),
    /// Boolean-typed value.
    Flag(bool),
}

/// Attribute change that carries a property write to the element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeWrite {
    /// Set the attribute to this value.
    Set(String),
    /// Remove the attribute.
    Remove,
}

impl HostProperty {
    /// Every property, in definition order.
    pub const ALL: [Self; 4] = [Self::Goal, Self::Label, Self::ColorOnly, Self::Alt];

    /// Property name as seen from script.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::Label => "label",
            Self::ColorOnly => "colorOnly",
            Self::Alt => "alt",
        }
    }

    /// Attribute the property is carried by.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Goal => GOAL_ATTR,
            Self::Label => LABEL_ATTR,
            Self::ColorOnly => COLOR_ONLY_ATTR,
            Self::Alt => ALT_ATTR,
        }
    }

    /// Whether script values are coerced to booleans.
    #[must_use]
    pub const fn is_flag(self) -> bool {
        matches!(self, Self::ColorOnly)
    }

    /// Current value given the live inputs and the resolved alt text.
    #[must_use]
    pub fn read(self, inputs: &SdgInputs, resolved_alt: Option<&str>) -> PropertyValue {
        match self {
            Self::Goal => PropertyValue::Text(Some(inputs.goal.clone())),
            Self::Label => PropertyValue::Text(Some(inputs.label.clone())),
            Self::ColorOnly => PropertyValue::Flag(inputs.color_only),
            Self::Alt => PropertyValue::Text(resolved_alt.map(str::to_string)),
        }
    }

    /// Fold a script write into `inputs` and return the attribute change to mirror it.
    pub fn write(self, inputs: &mut SdgInputs, value: PropertyValue) -> AttributeWrite {
        if self.is_flag() {
            let on = value.into_flag();
            inputs.color_only = on;
            return if on {
                AttributeWrite::Set(String::new())
            } else {
                AttributeWrite::Remove
            };
        }
        let text = value.into_text();
        match self {
            Self::Goal => inputs.goal = text.clone().unwrap_or_default(),
            Self::Label => inputs.label = text.clone().unwrap_or_default(),
            Self::Alt => inputs.alt.clone_from(&text),
            Self::ColorOnly => {}
        }
        text.map_or(AttributeWrite::Remove, AttributeWrite::Set)
    }
}

impl PropertyValue {
    fn into_flag(self) -> bool {
        match self {
            Self::Flag(on) => on,
            Self::Text(text) => text.is_some_and(|text| !text.is_empty()),
        }
    }

    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => text,
            Self::Flag(on) => Some(on.to_string()),
        }
    }
}
