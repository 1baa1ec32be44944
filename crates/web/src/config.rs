//! Storefront configuration.
//!
//! There is no config file. Defaults match the public demo endpoints; native
//! builds may override a few of them from the environment.

use thiserror::Error;

use storefront_catalog::{DEFAULT_CATALOG_URL, DEFAULT_PAGE_SIZE};
use storefront_checkout::PixConfig;

pub const ENV_CATALOG_URL: &str = "STOREFRONT_CATALOG_URL";
pub const ENV_PAGE_SIZE: &str = "STOREFRONT_PAGE_SIZE";
pub const ENV_PIX_KEY: &str = "STOREFRONT_PIX_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Base URL of the catalog API (`/products` is appended).
    pub catalog_url: String,
    /// Products requested in the single catalog fetch.
    pub page_size: u32,
    pub pix: PixConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            pix: PixConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by `STOREFRONT_*` environment variables.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_CATALOG_URL) {
            config.catalog_url = non_empty(ENV_CATALOG_URL, url)?;
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            config.page_size = match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: ENV_PAGE_SIZE,
                        value: raw,
                    });
                }
            };
        }

        if let Some(key) = lookup(ENV_PIX_KEY) {
            config.pix.key = non_empty(ENV_PIX_KEY, key)?;
        }

        Ok(config)
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_match_demo_endpoints() {
        let config = StorefrontConfig::default();
        assert_eq!(config.catalog_url, "https://dummyjson.com");
        assert_eq!(config.page_size, 30);
        assert_eq!(config.pix.key, "suachavepix@exemplo.com");
        assert_eq!(config.pix.qr_size, 200);
    }

    #[test]
    fn env_overrides_apply() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            (ENV_CATALOG_URL, "http://localhost:9000"),
            (ENV_PAGE_SIZE, " 12 "),
            (ENV_PIX_KEY, "loja@pix.example"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_url, "http://localhost:9000");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.pix.key, "loja@pix.example");
        assert_eq!(config.pix.merchant_name, "Impacto Cell");
    }

    #[test]
    fn invalid_page_size_is_rejected() {
        for bad in ["0", "-3", "lots"] {
            let err =
                StorefrontConfig::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidNumber { var: ENV_PAGE_SIZE, .. }));
        }
    }

    #[test]
    fn blank_values_are_rejected() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[(ENV_PIX_KEY, "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty { var: ENV_PIX_KEY });
    }
}
