//! Product catalog: records, the in-memory snapshot, and the remote loader.
//!
//! The catalog is fetched once per page load. Failures never propagate past
//! [`load_catalog`]; they become an empty snapshot plus a message for the
//! product panel.

pub mod catalog;
pub mod load;
pub mod product;
pub mod source;

pub use catalog::Catalog;
pub use load::{CATALOG_ERROR_MESSAGE, CATALOG_LOADING_MESSAGE, CatalogLoad, load_catalog};
pub use product::{Product, ProductRecord, ProductsResponse};
pub use source::{
    CatalogError, CatalogSource, DEFAULT_CATALOG_URL, DEFAULT_PAGE_SIZE, HttpCatalogSource,
    InMemoryCatalogSource,
};
