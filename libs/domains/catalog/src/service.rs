//! Catalog query executor - orchestration layer.

use std::sync::Arc;

use tracing::instrument;

use crate::error::CatalogResult;
use crate::facets;
use crate::filter::FilterSpec;
use crate::models::{CatalogPage, CatalogQuery, Pagination};
use crate::repository::CatalogRepository;
use crate::sort::SortPlan;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 20;

/// Executes catalog queries against a store.
///
/// One request is one unit of work: build the filter spec, resolve the
/// sort, then issue the page fetch, the match count and the full active
/// scan concurrently. The scan feeds facet aggregation independently of
/// the current filter. Any store failure fails the whole request; there
/// are no retries and no partial results.
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, query))]
    pub async fn query_catalog(&self, query: CatalogQuery) -> CatalogResult<CatalogPage> {
        let filter = FilterSpec::from_query(&query);
        let sort = SortPlan::resolve(query.sort_by.as_deref(), query.sort_order.as_deref());

        let page = positive_or(query.page.as_deref(), DEFAULT_PAGE);
        let limit = positive_or(query.limit.as_deref(), DEFAULT_LIMIT);
        // Saturate so an absurdly large page lands past the data
        // instead of overflowing.
        let skip = (page - 1).saturating_mul(limit).max(0) as u64;

        let (items, total, active) = tokio::try_join!(
            self.repository.find_page(&filter, &sort, skip, limit),
            self.repository.count_matching(&filter),
            self.repository.scan_active(),
        )?;

        tracing::debug!(
            total,
            returned = items.len(),
            active = active.len(),
            "Catalog query executed"
        );

        Ok(CatalogPage {
            items,
            pagination: Pagination::new(page, limit, total),
            facets: facets::aggregate(&active),
        })
    }
}

impl<R: CatalogRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Parse a positive integer parameter, falling back to a default on
/// anything invalid or below 1.
fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}
