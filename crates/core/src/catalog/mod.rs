//! Product catalog: wire types, load state and the bounded fetch

mod fetch;
mod product;
mod state;

pub use fetch::{CatalogSource, fetch_catalog};
pub use product::{CatalogPage, ProductSummary, products_url};
pub use state::{AttemptTicket, CatalogLoadState, CatalogSession};
