use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, Entity, Money, ProductId};

/// Wire shape of the catalog endpoint: `{ "products": [...], ... }`.
///
/// Pagination fields (`total`, `skip`, `limit`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductRecord>,
}

/// One product as the remote API sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
}

/// Catalog product. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    title: String,
    description: String,
    thumbnail: String,
    price: Money,
    rating: f64,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
        price: Money,
        rating: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            thumbnail: thumbnail.into(),
            price,
            rating,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let price = Money::from_decimal(record.price)
            .map_err(|e| DomainError::validation(format!("product {}: {e}", record.id)))?;

        if record.title.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: title cannot be empty",
                record.id
            )));
        }

        let rating = if record.rating.is_finite() { record.rating } else { 0.0 };

        Ok(Self {
            id: ProductId::new(record.id),
            title: record.title,
            description: record.description,
            thumbnail: record.thumbnail,
            price,
            rating,
        })
    }
}
