//! Product catalog wire types

use crate::error::CatalogError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One entry of the product catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub images: Vec<String>,
    pub thumbnail: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub stock: Option<u32>,
}

impl ProductSummary {
    /// The image to display: the first gallery image, else the thumbnail
    #[must_use]
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map_or(self.thumbnail.as_str(), String::as_str)
    }

    /// Price as rendered on a product card
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${}", self.price.normalize())
    }
}

/// Response envelope of the products endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub products: Vec<ProductSummary>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

impl CatalogPage {
    /// Decode and validate a response body
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] if the body is not a products page or
    /// violates [`CatalogPage::validate`]
    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        let page: Self = serde_json::from_str(body)?;
        page.validate()?;
        Ok(page)
    }

    /// Reject pages with negative prices or repeated identifiers
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] describing the first violation
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.products.len());
        for product in &self.products {
            if product.price.is_sign_negative() && !product.price.is_zero() {
                return Err(CatalogError::decode(format!(
                    "product {} has negative price {}",
                    product.id, product.price
                )));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::decode(format!(
                    "product id {} appears more than once",
                    product.id
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn into_products(self) -> Vec<ProductSummary> {
        self.products
    }
}

/// Address of the products endpoint for a page of `limit` entries
#[must_use]
pub fn products_url(base_url: &str, limit: u32) -> String {
    format!("{}/products?limit={limit}", base_url.trim_end_matches('/'))
}
