//! Remote catalog access.
//!
//! The catalog is read in two round trips per page: `get_ids` for the page's
//! identifiers, then `get_items` for those identifiers. [`CatalogProvider`]
//! abstracts the transport; [`CatalogClient`] is the HTTP implementation.

pub mod auth;
pub mod client;
pub mod error;
pub mod wire;

use std::collections::HashSet;
use std::future::Future;

use crate::types::{Page, Product, ProductId};

pub use auth::{AUTH_HEADER, AuthToken, compute_auth_token};
pub use client::CatalogClient;
pub use error::ApiError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Keep the first product seen for each identifier, preserving order
pub fn dedupe_by_id(products: Vec<Product>) -> Vec<Product> {
    let mut seen: HashSet<ProductId> = HashSet::with_capacity(products.len());
    products
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}

/// Common interface for catalog backends
pub trait CatalogProvider: Send + Sync {
    /// List identifiers in `[offset, offset + limit)`
    fn list_ids(
        &self,
        offset: usize,
        limit: usize,
    ) -> impl Future<Output = ApiResult<Vec<ProductId>>> + Send;

    /// Fetch the items for `ids`, exactly as the server returns them
    fn get_items(&self, ids: &[ProductId]) -> impl Future<Output = ApiResult<Vec<Product>>> + Send;

    /// List identifiers, degrading to an empty list on failure
    fn list_identifiers(
        &self,
        offset: usize,
        limit: usize,
    ) -> impl Future<Output = Vec<ProductId>> + Send {
        async move {
            match self.list_ids(offset, limit).await {
                Ok(ids) => ids,
                Err(e) => {
                    tracing::warn!(
                        status = ?e.status,
                        body = e.body.as_deref().unwrap_or(""),
                        "Error fetching product IDs: {}",
                        e.message
                    );
                    vec![]
                }
            }
        }
    }

    /// Fetch items deduplicated by id, degrading to an empty list on failure
    fn fetch_items_by_ids(&self, ids: &[ProductId]) -> impl Future<Output = Vec<Product>> + Send {
        async move {
            match self.get_items(ids).await {
                Ok(items) => dedupe_by_id(items),
                Err(e) => {
                    tracing::warn!(
                        status = ?e.status,
                        body = e.body.as_deref().unwrap_or(""),
                        "Error fetching product details: {}",
                        e.message
                    );
                    vec![]
                }
            }
        }
    }

    /// Both round trips for one page
    fn fetch_page(&self, page: Page) -> impl Future<Output = Vec<Product>> + Send {
        async move {
            let ids = self.list_identifiers(page.offset(), page.limit()).await;
            tracing::debug!(page = page.number(), ids = ids.len(), "fetched page identifiers");
            self.fetch_items_by_ids(&ids).await
        }
    }
}
