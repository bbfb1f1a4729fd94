use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};

use crate::error::{Result, StorageError};
use crate::models::{Catalog, Category, CategoryEntry, parse_points};

/// Reads one `<slug>.csv` table per category from a directory.
pub struct CatalogRepository {
    dir: PathBuf,
}

impl CatalogRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, category: Category) -> PathBuf {
        self.dir.join(format!("{}.csv", category.as_str()))
    }

    pub fn load(&self, category: Category) -> Result<Catalog> {
        let path = self.path_for(category);
        if !path.is_file() {
            return Err(StorageError::NotFound(format!(
                "catalog for {} ({})",
                category,
                path.display()
            )));
        }

        let entries = read_entries(&path).map_err(|cause| {
            StorageError::NotFound(format!(
                "catalog for {} is malformed ({}): {}",
                category,
                path.display(),
                cause
            ))
        })?;

        debug!("Loaded {} entries for {}", entries.len(), category);
        Ok(Catalog::new(category, entries))
    }

    /// Loads every category on its own; one broken table does not stop the
    /// others from loading.
    pub fn load_all(&self, categories: &[Category]) -> CatalogSet {
        let mut set = CatalogSet::default();

        for &category in categories {
            match self.load(category) {
                Ok(catalog) => {
                    set.catalogs.insert(category, catalog);
                }
                Err(e) => {
                    warn!("Skipping category {}: {}", category, e);
                    set.failures.push((category, e.to_string()));
                }
            }
        }

        set
    }
}

fn read_entries(path: &Path) -> std::result::Result<Vec<CategoryEntry>, String> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| e.to_string())?;

    let headers = reader.headers().map_err(|e| e.to_string())?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("missing '{}' column", name))
    };
    let selection_idx = column("selection")?;
    let points_idx = column("points")?;

    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| e.to_string())?;
        let selection = record.get(selection_idx).unwrap_or_default();
        if selection.is_empty() {
            continue;
        }
        if !seen.insert(selection.to_string()) {
            return Err(format!("row {}: '{}' is listed more than once", line + 2, selection));
        }
        let raw_points = record.get(points_idx).unwrap_or_default();
        let points = parse_points(raw_points).ok_or_else(|| {
            format!(
                "row {}: points '{}' for '{}' is not a non-negative number",
                line + 2,
                raw_points,
                selection
            )
        })?;
        entries.push(CategoryEntry::new(selection, points));
    }

    Ok(entries)
}

/// The catalogs that loaded for a scoring period, plus the ones that did not.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    catalogs: BTreeMap<Category, Catalog>,
    failures: Vec<(Category, String)>,
}

impl CatalogSet {
    pub fn from_catalogs(catalogs: impl IntoIterator<Item = Catalog>) -> Self {
        Self {
            catalogs: catalogs.into_iter().map(|c| (c.category(), c)).collect(),
            failures: Vec::new(),
        }
    }

    pub fn get(&self, category: Category) -> Result<&Catalog> {
        self.catalogs
            .get(&category)
            .ok_or_else(|| StorageError::NotFound(format!("catalog for {}", category)))
    }

    pub fn categories(&self) -> Vec<Category> {
        self.catalogs.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.values()
    }

    pub fn failures(&self) -> &[(Category, String)] {
        &self.failures
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Decimal;
    use std::fs;
    use tempfile::TempDir;

    fn write_table(dir: &TempDir, category: Category, contents: &str) {
        fs::write(dir.path().join(format!("{}.csv", category.as_str())), contents).unwrap();
    }

    #[test]
    fn test_load_sorts_by_points_then_label() {
        let dir = TempDir::new().unwrap();
        write_table(
            &dir,
            Category::AfcWinner,
            "selection,points\nSteelers,12\nChiefs,3\nBills,3\nRavens,5\nBroncos,5\n",
        );

        let catalog = CatalogRepository::new(dir.path())
            .load(Category::AfcWinner)
            .unwrap();

        let entries = catalog.entries();
        assert_eq!(entries.len(), 5);
        for pair in entries.windows(2) {
            assert!(pair[0].points <= pair[1].points);
            if pair[0].points == pair[1].points {
                assert!(pair[0].selection <= pair[1].selection);
            }
        }
        assert_eq!(entries[0].selection, "Bills");
        assert_eq!(entries[4].selection, "Steelers");
    }

    #[test]
    fn test_extra_columns_and_whitespace_are_tolerated() {
        let dir = TempDir::new().unwrap();
        write_table(
            &dir,
            Category::Mvp,
            "team, selection , points\nBUF, Josh Allen , 5\nBAL,Lamar Jackson,6\n",
        );

        let catalog = CatalogRepository::new(dir.path()).load(Category::Mvp).unwrap();

        assert_eq!(catalog.find("Josh Allen").map(|e| e.points), Some(Decimal::from(5)));
    }

    #[test]
    fn test_missing_table_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = CatalogRepository::new(dir.path()).load(Category::NfcWinner);

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_missing_column_is_not_found() {
        let dir = TempDir::new().unwrap();
        write_table(&dir, Category::NfcWinner, "team,odds\nLions,4\n");

        let result = CatalogRepository::new(dir.path()).load(Category::NfcWinner);

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_non_numeric_points_is_not_found() {
        let dir = TempDir::new().unwrap();
        write_table(&dir, Category::NfcWinner, "selection,points\nLions,four\n");

        let result = CatalogRepository::new(dir.path()).load(Category::NfcWinner);

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_fractional_points_accepted() {
        let dir = TempDir::new().unwrap();
        write_table(
            &dir,
            Category::DarkHorse,
            "selection,points\nBroncos,3.0\nSteelers,2.5\n",
        );

        let catalog = CatalogRepository::new(dir.path())
            .load(Category::DarkHorse)
            .unwrap();

        assert_eq!(catalog.entries()[0].selection, "Steelers");
        assert_eq!(catalog.entries()[0].points, Decimal::new(25, 1));
        assert_eq!(catalog.find("Broncos").map(|e| e.points), Some(Decimal::from(3)));
    }

    #[test]
    fn test_negative_points_is_not_found() {
        let dir = TempDir::new().unwrap();
        write_table(&dir, Category::NfcWinner, "selection,points\nLions,-4\n");

        let result = CatalogRepository::new(dir.path()).load(Category::NfcWinner);

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_duplicate_label_is_not_found() {
        let dir = TempDir::new().unwrap();
        write_table(
            &dir,
            Category::AfcWinner,
            "selection,points\nChiefs,3\nSteelers,12\nChiefs,1\n",
        );

        let result = CatalogRepository::new(dir.path()).load(Category::AfcWinner);

        assert!(matches!(result, Err(StorageError::NotFound(ref msg)) if msg.contains("more than once")));
    }

    #[test]
    fn test_load_all_isolates_failures() {
        let dir = TempDir::new().unwrap();
        write_table(&dir, Category::AfcWinner, "selection,points\nChiefs,3\n");
        write_table(&dir, Category::NfcWinner, "name,points\nLions,4\n");

        let set = CatalogRepository::new(dir.path()).load_all(&[
            Category::AfcWinner,
            Category::NfcWinner,
            Category::Mvp,
        ]);

        assert_eq!(set.categories(), vec![Category::AfcWinner]);
        assert_eq!(set.failures().len(), 2);
        assert!(set.get(Category::NfcWinner).is_err());
    }
}
