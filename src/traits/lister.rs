use async_trait::async_trait;

use crate::error::Result;
use crate::models::types::{FetchOutcome, ProductEntry, ReportId};

/// Source of the current product listing.
#[async_trait]
pub trait ProductLister: Send + Sync {
    /// Returns the listed products in the order the service reports them.
    async fn list_products(&self) -> Result<Vec<ProductEntry>>;
}

/// Fetches one product and decides whether it is a summary.
#[async_trait]
pub trait ProductFetcher: Send + Sync {
    async fn fetch_product(&self, id: &ReportId) -> Result<FetchOutcome>;
}
