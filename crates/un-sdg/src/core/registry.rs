//! Canonical Sustainable Development Goal table.
//!
//! The names and hex colors are part of the public contract: hosts match on the
//! exact color values and the names appear verbatim in alt text.

use std::fmt::{self, Display, Formatter};

/// Number of goals in the registry.
pub const GOAL_COUNT: u8 = 17;

/// A single goal with its display name and brand color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalEntry {
    /// Display name used in alt text.
    pub name: &'static str,
    /// Hex RGB color, lowercase with a leading `#`.
    pub color: &'static str,
}

/// Ordered goal table; index 0 is goal 1.
pub const GOALS: [GoalEntry; GOAL_COUNT as usize] = [
    GoalEntry {
        name: "No Poverty",
        color: "#e5243b",
    },
    GoalEntry {
        name: "Zero Hunger",
        color: "#dda63a",
    },
    GoalEntry {
        name: "Good Health and Well-being",
        color: "#4c9f38",
    },
    GoalEntry {
        name: "Quality Education",
        color: "#c5192d",
    },
    GoalEntry {
        name: "Gender Equality",
        color: "#ff3a21",
    },
    GoalEntry {
        name: "Clean Water and Sanitation",
        color: "#26bde2",
    },
    GoalEntry {
        name: "Affordable and Clean Energy",
        color: "#fcc30b",
    },
    GoalEntry {
        name: "Decent Work and Economic Growth",
        color: "#a21942",
    },
    GoalEntry {
        name: "Industry, Innovation and Infrastructure",
        color: "#fd6925",
    },
    GoalEntry {
        name: "Reduced Inequalities",
        color: "#dd1367",
    },
    GoalEntry {
        name: "Sustainable Cities and Communities",
        color: "#fd9d24",
    },
    GoalEntry {
        name: "Responsible Consumption and Production",
        color: "#bf8b2e",
    },
    GoalEntry {
        name: "Climate Action",
        color: "#3f7e44",
    },
    GoalEntry {
        name: "Life Below Water",
        color: "#0a97d9",
    },
    GoalEntry {
        name: "Life on Land",
        color: "#56c02b",
    },
    GoalEntry {
        name: "Peace, Justice and Strong Institutions",
        color: "#00689d",
    },
    GoalEntry {
        name: "Partnerships for the Goals",
        color: "#19486a",
    },
];

/// A goal number guaranteed to be within `1..=17`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GoalNumber(u8);

impl GoalNumber {
    /// Validate a raw goal number.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= GOAL_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Validate a wide integer, as produced by lenient parsing.
    #[must_use]
    pub fn from_i64(value: i64) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::new)
    }

    /// The 1-based goal number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Registry entry for this goal.
    #[must_use]
    pub const fn entry(self) -> GoalEntry {
        GOALS[(self.0 - 1) as usize]
    }

    /// Display name for this goal.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.entry().name
    }

    /// Hex color for this goal.
    #[must_use]
    pub const fn color(self) -> &'static str {
        self.entry().color
    }

    /// Every goal in registry order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=GOAL_COUNT).map(Self)
    }
}

impl Display for GoalNumber {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_holds_seventeen_goals_in_order() {
        assert_eq!(GOALS.len(), 17);
        assert_eq!(GOALS[0].name, "No Poverty");
        assert_eq!(GOALS[16].name, "Partnerships for the Goals");
        let numbers: Vec<u8> = GoalNumber::all().map(GoalNumber::get).collect();
        assert_eq!(numbers, (1..=17).collect::<Vec<_>>());
    }

    #[test]
    fn colors_are_lowercase_hex() {
        for entry in &GOALS {
            assert_eq!(entry.color.len(), 7, "{}", entry.name);
            assert!(entry.color.starts_with('#'));
            assert!(
                entry.color[1..]
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            );
        }
    }

    #[test]
    fn goal_number_bounds() {
        assert!(GoalNumber::new(0).is_none());
        assert!(GoalNumber::new(18).is_none());
        assert_eq!(GoalNumber::from_i64(-1), None);
        assert_eq!(GoalNumber::from_i64(300), None);
        let six = GoalNumber::new(6).map(GoalNumber::color);
        assert_eq!(six, Some("#26bde2"));
        assert_eq!(
            GoalNumber::new(9).map(GoalNumber::name),
            Some("Industry, Innovation and Infrastructure")
        );
    }
}
