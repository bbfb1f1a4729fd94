use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Category;

/// One eligible pick in a category and what it is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryEntry {
    pub selection: String,
    pub points: Decimal,
}

impl CategoryEntry {
    pub fn new(selection: impl Into<String>, points: impl Into<Decimal>) -> Self {
        Self {
            selection: selection.into(),
            points: points.into(),
        }
    }

    /// The "label - N points" token shown next to each option.
    pub fn display_option(&self) -> String {
        format!("{} - {} points", self.selection, self.points)
    }
}

/// The entries of one category, kept sorted by points and then by label so
/// the safer picks come first.
#[derive(Debug, Clone)]
pub struct Catalog {
    category: Category,
    entries: Vec<CategoryEntry>,
}

impl Catalog {
    pub fn new(category: Category, mut entries: Vec<CategoryEntry>) -> Self {
        entries.sort_by(|a, b| {
            a.points
                .cmp(&b.points)
                .then_with(|| a.selection.cmp(&b.selection))
        });
        Self { category, entries }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn find(&self, selection: &str) -> Option<&CategoryEntry> {
        self.entries.iter().find(|e| e.selection == selection)
    }

    pub fn display_options(&self) -> Vec<String> {
        self.entries.iter().map(CategoryEntry::display_option).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_sorted_by_points_then_label() {
        let catalog = Catalog::new(
            Category::AfcWinner,
            vec![
                CategoryEntry::new("Steelers", 12),
                CategoryEntry::new("Chiefs", 3),
                CategoryEntry::new("Bills", 3),
                CategoryEntry::new("Broncos", 8),
            ],
        );

        let labels: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|e| e.selection.as_str())
            .collect();
        assert_eq!(labels, vec!["Bills", "Chiefs", "Broncos", "Steelers"]);
    }

    #[test]
    fn test_find_is_exact() {
        let catalog = Catalog::new(Category::Mvp, vec![CategoryEntry::new("Josh Allen", 5)]);

        assert_eq!(catalog.find("Josh Allen").map(|e| e.points), Some(Decimal::from(5)));
        assert!(catalog.find("josh allen").is_none());
        assert!(catalog.find("Lamar Jackson").is_none());
    }

    #[test]
    fn test_display_options() {
        let catalog = Catalog::new(
            Category::NfcWinner,
            vec![CategoryEntry::new("Lions", 4), CategoryEntry::new("Eagles", 4)],
        );

        assert_eq!(
            catalog.display_options(),
            vec!["Eagles - 4 points", "Lions - 4 points"]
        );
    }

    #[test]
    fn test_fractional_points_sort_and_display() {
        let catalog = Catalog::new(
            Category::DarkHorse,
            vec![
                CategoryEntry::new("Broncos", 3),
                CategoryEntry::new("Steelers", Decimal::new(25, 1)),
            ],
        );

        assert_eq!(
            catalog.display_options(),
            vec!["Steelers - 2.5 points", "Broncos - 3 points"]
        );
    }
}
