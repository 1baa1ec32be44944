//! Native startup: config from the environment, tracing, one catalog fetch.

use anyhow::Context;

use storefront_catalog::HttpCatalogSource;

use crate::config::StorefrontConfig;
use crate::controller::Storefront;

/// Build a controller with its catalog loaded (or failed, with the error
/// message installed). Only configuration problems are returned as errors.
pub async fn bootstrap() -> anyhow::Result<Storefront> {
    storefront_observability::init();

    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    Ok(bootstrap_with(config).await)
}

pub async fn bootstrap_with(config: StorefrontConfig) -> Storefront {
    let source = HttpCatalogSource::new(config.catalog_url.clone(), config.page_size);
    tracing::info!(endpoint = %source.endpoint(), "starting storefront");

    let mut storefront = Storefront::new(config);
    storefront.load_catalog(&source).await;
    storefront
}
