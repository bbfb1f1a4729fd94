use rust_decimal::Decimal;

use super::parse_points;

/// A pick stored as free text, e.g. "Josh Allen - 5" or "Chiefs - 3 points".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyPick {
    Parsed { label: String, points: Decimal },
    /// Worth nothing and never correct; the raw text is kept for display.
    Unparsed { raw: String },
}

impl LegacyPick {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Parsed { label, .. } => Some(label),
            Self::Unparsed { .. } => None,
        }
    }

    pub fn points(&self) -> Decimal {
        match self {
            Self::Parsed { points, .. } => *points,
            Self::Unparsed { .. } => Decimal::ZERO,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed { .. })
    }
}

/// Splits on the last `-`, so hyphenated names like "Amon-Ra St. Brown - 9"
/// keep their label. The points are the first word after the separator and
/// may be fractional ("5.0 points").
/// Never fails: anything that does not fit comes back as `Unparsed`.
pub fn parse_legacy_pick(raw: &str) -> LegacyPick {
    let unparsed = || LegacyPick::Unparsed {
        raw: raw.to_string(),
    };

    let Some((label, rest)) = raw.rsplit_once('-') else {
        return unparsed();
    };
    let label = label.trim();
    if label.is_empty() {
        return unparsed();
    }

    match rest.split_whitespace().next().and_then(parse_points) {
        Some(points) => LegacyPick::Parsed {
            label: label.to_string(),
            points,
        },
        _ => unparsed(),
    }
}
