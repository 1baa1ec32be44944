//! Where catalog products come from.

use async_trait::async_trait;
use thiserror::Error;

use storefront_core::DomainError;

use crate::product::{Product, ProductRecord, ProductsResponse};

pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";
pub const DEFAULT_PAGE_SIZE: u32 = 30;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Source of catalog products.
///
/// Browser futures are not `Send`, so the wasm build drops that bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Fetches `GET {base_url}/products?limit={page_size}` once per call.
///
/// No retry and no timeout: a hung request leaves the loading message up.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>, page_size: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            page_size,
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/products?limit={}",
            self.base_url.trim_end_matches('/'),
            self.page_size
        )
    }
}

impl Default for HttpCatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL, DEFAULT_PAGE_SIZE)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.endpoint();
        tracing::debug!(%url, "fetching catalog");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CatalogError::Status(resp.status().as_u16()));
        }

        let body: ProductsResponse = resp
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        into_products(body.products)
    }
}

/// Fixed product list (or fixed failure); used by tests and offline demos.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogSource {
    result: Result<Vec<ProductRecord>, CatalogError>,
}

impl InMemoryCatalogSource {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self { result: Ok(records) }
    }

    pub fn failing(error: CatalogError) -> Self {
        Self { result: Err(error) }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CatalogSource for InMemoryCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        match &self.result {
            Ok(records) => into_products(records.clone()),
            Err(e) => Err(e.clone()),
        }
    }
}

// One bad record rejects the whole response.
fn into_products(records: Vec<ProductRecord>) -> Result<Vec<Product>, CatalogError> {
    records
        .into_iter()
        .map(|r| Product::try_from(r).map_err(CatalogError::from))
        .collect()
}
