use rust_decimal::Decimal;

use super::Category;

/// A pick from a closed scoring period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalPick {
    pub user_name: String,
    pub category: Category,
    pub value: PickValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickValue {
    /// Free text in the old "label - points" form, graded after parsing.
    Legacy(String),
    Structured { selection: String, points: Decimal },
}

impl HistoricalPick {
    pub fn legacy(user_name: impl Into<String>, category: Category, raw: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            category,
            value: PickValue::Legacy(raw.into()),
        }
    }

    pub fn structured(
        user_name: impl Into<String>,
        category: Category,
        selection: impl Into<String>,
        points: impl Into<Decimal>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            category,
            value: PickValue::Structured {
                selection: selection.into(),
                points: points.into(),
            },
        }
    }
}
