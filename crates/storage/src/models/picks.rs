use std::collections::BTreeMap;

use super::Category;

/// The choices a user made on the form, one optional label per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Picks {
    selections: BTreeMap<Category, String>,
}

impl Picks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `selection` for `category`. A blank label clears the pick.
    pub fn set(&mut self, category: Category, selection: impl Into<String>) {
        let selection = selection.into();
        let selection = selection.trim();
        if selection.is_empty() {
            self.selections.remove(&category);
        } else {
            self.selections.insert(category, selection.to_string());
        }
    }

    pub fn with(mut self, category: Category, selection: impl Into<String>) -> Self {
        self.set(category, selection);
        self
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        self.selections.get(&category).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.selections.iter().map(|(c, s)| (*c, s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Categories from `required` that have no pick yet, in the given order.
    pub fn missing(&self, required: &[Category]) -> Vec<Category> {
        required
            .iter()
            .copied()
            .filter(|c| self.get(*c).is_none())
            .collect()
    }
}
