use std::collections::BTreeMap;

use super::Category;

/// What actually happened in a category. Some categories accept several
/// answers, e.g. any of a handful of long-shot teams making the playoffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Single(String),
    AnyOf(Vec<String>),
}

impl Outcome {
    pub fn any_of<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(labels.into_iter().map(Into::into).collect())
    }

    /// Trimmed, case-insensitive comparison against every accepted label.
    pub fn matches(&self, predicted: &str) -> bool {
        let predicted = predicted.trim().to_lowercase();
        match self {
            Self::Single(label) => label.trim().to_lowercase() == predicted,
            Self::AnyOf(labels) => labels
                .iter()
                .any(|label| label.trim().to_lowercase() == predicted),
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::Single(label) => vec![label.as_str()],
            Self::AnyOf(labels) => labels.iter().map(String::as_str).collect(),
        }
    }

    /// Adds another accepted label, turning a single answer into a set.
    pub fn push(&mut self, label: String) {
        match self {
            Self::Single(existing) => {
                *self = Self::AnyOf(vec![std::mem::take(existing), label]);
            }
            Self::AnyOf(labels) => labels.push(label),
        }
    }
}

pub type OutcomeMap = BTreeMap<Category, Outcome>;
