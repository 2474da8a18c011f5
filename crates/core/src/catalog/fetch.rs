//! Bounded catalog fetch

use super::product::{CatalogPage, ProductSummary};
use crate::config::CatalogConfig;
use crate::delay::{Delay, with_timeout};
use crate::error::CatalogError;
use async_trait::async_trait;
use tracing::{info, warn};

/// Where product pages come from
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch one page of at most `limit` products
    async fn fetch_page(&self, limit: u32) -> Result<CatalogPage, CatalogError>;
}

/// Fetch the catalog, giving up once `config.timeout_ms` has elapsed.
///
/// A source may also report [`CatalogError::Timeout`] on its own; that marker
/// is passed through unchanged.
///
/// # Errors
///
/// Returns [`CatalogError::Timeout`] if the wait elapses first, or the
/// source's own error otherwise
pub async fn fetch_catalog<S, D>(
    source: &S,
    delay: &D,
    config: &CatalogConfig,
) -> Result<Vec<ProductSummary>, CatalogError>
where
    S: CatalogSource + ?Sized,
    D: Delay + ?Sized,
{
    let outcome = with_timeout(delay, config.timeout(), source.fetch_page(config.page_size)).await;

    match outcome {
        Some(Ok(page)) => {
            let products = page.into_products();
            info!(count = products.len(), "catalog loaded");
            Ok(products)
        }
        Some(Err(err)) => {
            warn!(%err, "catalog fetch failed");
            Err(err)
        }
        None => {
            let err = CatalogError::Timeout {
                timeout_ms: config.timeout_ms,
            };
            warn!(%err, "catalog fetch failed");
            Err(err)
        }
    }
}
