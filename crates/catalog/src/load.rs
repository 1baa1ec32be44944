use chrono::Utc;

use crate::catalog::Catalog;
use crate::source::{CatalogError, CatalogSource};

/// Shown in the product panel while the fetch is in flight.
pub const CATALOG_LOADING_MESSAGE: &str = "Carregando produtos...";

/// Shown in place of the product grid when the fetch fails.
pub const CATALOG_ERROR_MESSAGE: &str = "Erro ao carregar produtos. Tente novamente mais tarde.";

/// Outcome of the single startup fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLoad {
    Loaded(Catalog),
    Failed(CatalogError),
}

impl CatalogLoad {
    /// The snapshot to install: empty on failure.
    pub fn into_catalog(self) -> Catalog {
        match self {
            CatalogLoad::Loaded(catalog) => catalog,
            CatalogLoad::Failed(_) => Catalog::empty(),
        }
    }

    /// Message for the product panel, if the load failed.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            CatalogLoad::Loaded(_) => None,
            CatalogLoad::Failed(_) => Some(CATALOG_ERROR_MESSAGE),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogLoad::Loaded(_))
    }
}

/// Fetch the catalog once. Errors are logged and folded into [`CatalogLoad::Failed`].
pub async fn load_catalog<S>(source: &S) -> CatalogLoad
where
    S: CatalogSource + ?Sized,
{
    match source.fetch_products().await {
        Ok(products) => {
            let catalog = Catalog::from_products(products, Utc::now());
            tracing::info!(products = catalog.len(), "catalog loaded");
            CatalogLoad::Loaded(catalog)
        }
        Err(error) => {
            tracing::error!(%error, "failed to load catalog");
            CatalogLoad::Failed(error)
        }
    }
}
