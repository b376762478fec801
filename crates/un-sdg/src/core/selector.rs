//! Goal identifier parsing and image/alt-text resolution.

use thiserror::Error;

use super::assets::{AssetKey, AssetRoot};
use super::registry::GoalNumber;

/// Alt text for the composite image.
pub const ALL_GOALS_ALT: &str = "All Sustainable Development Goals";
/// Alt text for the circular badge.
pub const CIRCLE_ALT: &str = "Sustainable Development Goals Circle";

/// Reasons a goal identifier cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalIdError {
    /// No leading decimal digits were found.
    #[error("goal identifier is not numeric")]
    NotNumeric,
    /// Digits parsed but fall outside `1..=17`.
    #[error("goal number {0} is outside 1..=17")]
    OutOfRange(i64),
}

/// A resolvable goal identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalId {
    /// The literal `all`.
    All,
    /// The literal `circle`.
    Circle,
    /// A numbered goal.
    Goal(GoalNumber),
}

impl GoalId {
    /// Parse an identifier. Numbers use leading-prefix semantics, so `"3x"` is goal 3.
    ///
    /// # Errors
    ///
    /// Returns [`GoalIdError`] when the input is neither a literal nor a number in range.
    pub fn parse(raw: &str) -> Result<Self, GoalIdError> {
        match raw {
            "all" => Ok(Self::All),
            "circle" => Ok(Self::Circle),
            other => goal_number(other).map(Self::Goal),
        }
    }

    /// Asset displayed for this identifier.
    #[must_use]
    pub const fn asset(self) -> AssetKey {
        match self {
            Self::All => AssetKey::All,
            Self::Circle => AssetKey::Circle,
            Self::Goal(number) => AssetKey::Goal(number),
        }
    }

    /// Accessible description for this identifier.
    #[must_use]
    pub fn alt_text(self) -> String {
        match self {
            Self::All => ALL_GOALS_ALT.to_string(),
            Self::Circle => CIRCLE_ALT.to_string(),
            Self::Goal(number) => format!("Goal {number}: {}", number.name()),
        }
    }
}

/// Image URL and alt text resolved from one identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved image URL.
    pub image: String,
    /// Alt text matching `image`.
    pub alt_text: String,
}

/// Resolve an identifier, or `None` when it cannot be resolved.
///
/// Unresolvable identifiers are expected input and never surface as errors.
#[must_use]
pub fn resolve(raw: &str, assets: &AssetRoot) -> Option<Resolution> {
    match GoalId::parse(raw) {
        Ok(goal) => {
            let resolution = Resolution {
                image: assets.url_for(goal.asset()),
                alt_text: goal.alt_text(),
            };
            tracing::trace!(goal = raw, image = %resolution.image, "resolved goal");
            Some(resolution)
        }
        Err(error) => {
            tracing::debug!(goal = raw, %error, "ignoring unresolvable goal");
            None
        }
    }
}

/// Parse a goal number with leading-prefix semantics.
///
/// # Errors
///
/// Returns [`GoalIdError`] when no digits lead the input or the value is out of range.
pub fn goal_number(raw: &str) -> Result<GoalNumber, GoalIdError> {
    let value = parse_leading_int(raw).ok_or(GoalIdError::NotNumeric)?;
    GoalNumber::from_i64(value).ok_or(GoalIdError::OutOfRange(value))
}

const BYTE_ORDER_MARK: char = '\u{feff}';

// Skips leading whitespace and byte order marks, accepts one sign, then reads
// digits until the first non-digit. Overflow saturates so huge inputs stay out
// of range.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut seen = false;
    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }
    seen.then_some(if negative { -value } else { value })
}
