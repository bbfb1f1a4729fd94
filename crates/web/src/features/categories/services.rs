use storage::{CatalogSet, dto::catalog::CatalogResponse, error::Result, models::Category};

/// Every category that loaded, in category order
pub fn list_catalogs(catalogs: &CatalogSet) -> Vec<CatalogResponse> {
    catalogs.iter().map(CatalogResponse::from).collect()
}

/// One loaded category
pub fn get_catalog(catalogs: &CatalogSet, category: Category) -> Result<CatalogResponse> {
    catalogs.get(category).map(CatalogResponse::from)
}
