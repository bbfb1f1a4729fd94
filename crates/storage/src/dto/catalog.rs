use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Catalog, Category, CategoryEntry};

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub category: Category,
    pub display_name: String,
    pub entries: Vec<CategoryEntry>,
    /// "label - N points", in the same order as `entries`.
    pub options: Vec<String>,
}

impl From<&Catalog> for CatalogResponse {
    fn from(catalog: &Catalog) -> Self {
        Self {
            category: catalog.category(),
            display_name: catalog.category().display_name().to_string(),
            entries: catalog.entries().to_vec(),
            options: catalog.display_options(),
        }
    }
}
