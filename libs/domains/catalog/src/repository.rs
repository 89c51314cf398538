use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::filter::FilterSpec;
use crate::models::Product;
use crate::sort::SortPlan;

/// Store interface required by the catalog query executor.
///
/// The three operations are independent read-only queries. They are not
/// guaranteed to observe an identical snapshot of the collection when
/// writes happen concurrently; facets and the returned page may reflect
/// slightly different moments, an accepted weak-consistency trade-off.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetch one page of products matching the filter, ordered by the
    /// sort plan.
    async fn find_page(
        &self,
        filter: &FilterSpec,
        sort: &SortPlan,
        skip: u64,
        limit: i64,
    ) -> CatalogResult<Vec<Product>>;

    /// Count all products matching the filter.
    async fn count_matching(&self, filter: &FilterSpec) -> CatalogResult<u64>;

    /// Full scan of active products, used for facet aggregation.
    async fn scan_active(&self) -> CatalogResult<Vec<Product>>;
}
