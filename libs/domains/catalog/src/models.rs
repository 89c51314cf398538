use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::facets::FacetSummary;

/// Catalog product as stored in MongoDB (camelCase document fields).
///
/// The catalog is read-only to this domain: products are written by an
/// external process. `price` and `stock` are always present and
/// non-negative on active products; the descriptive fields may be absent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name; also drives category classification
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Price, non-negative
    pub price: f64,
    /// Units in stock, non-negative
    pub stock: i64,
    /// Weight label, e.g. "250 g"; not guaranteed numeric-parseable
    #[serde(default)]
    pub weight: Option<String>,
    /// Numeric weight precomputed at write time, used for weight sorting
    #[serde(default)]
    pub weight_numeric: Option<f64>,
    #[serde(default)]
    pub purity: Option<String>,
    #[serde(default)]
    pub placement: Option<String>,
    /// View counter, used only as a popularity sort key
    #[serde(default)]
    pub views: i64,
    /// Whether the product is available for display
    pub is_active: bool,
    /// Creation timestamp, stored as a native BSON date
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// Raw catalog query parameters as supplied by the client.
///
/// Every field is optional and loosely typed on purpose: parsing happens
/// in [`crate::filter::FilterSpec`] with a best-effort policy, so a
/// malformed value can never reject the request. The multi-valued fields
/// accept a repeated key (`?purity=999.9&purity=916`) or a single value.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(default, rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// Page number, >= 1 (defaults to 1 on invalid input)
    pub page: Option<String>,
    /// Page size, >= 1 (defaults to 20 on invalid input)
    pub limit: Option<String>,
    /// Case-insensitive substring search over name/description/brand/manufacturer
    pub search: Option<String>,
    /// `all`, `bars` or `coins`; anything else is ignored
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_stock: Option<String>,
    pub max_stock: Option<String>,
    /// `in-stock`, `out-of-stock`, `low-stock` or `high-stock`;
    /// overrides minStock/maxStock when recognized
    pub stock_status: Option<String>,
    pub weight: Vec<String>,
    pub purity: Vec<String>,
    pub brand: Vec<String>,
    pub manufacturer: Vec<String>,
    pub placement: Vec<String>,
    /// Inclusive lower bound, from 00:00:00 of the given date
    pub date_from: Option<String>,
    /// Inclusive upper bound, through 23:59:59.999 of the given date
    pub date_to: Option<String>,
    /// `createdAt` (default), `price`, `stock`, `weight`, `name`,
    /// `popularity`, or a literal field name
    pub sort_by: Option<String>,
    /// `asc` for ascending; anything else sorts descending
    pub sort_order: Option<String>,
}

/// Pagination metadata attached to every catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    /// Count of documents matching the active filter
    pub total: u64,
    /// ceil(total / limit)
    pub pages: u64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            pages: total.div_ceil(limit as u64),
        }
    }
}

/// One page of catalog results plus facet metadata.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub pagination: Pagination,
    pub facets: FacetSummary,
}

/// Minimal active product for in-crate tests.
#[cfg(test)]
pub(crate) fn sample_product(name: &str) -> Product {
    Product {
        id: Uuid::now_v7(),
        name: name.to_string(),
        description: None,
        brand: None,
        manufacturer: None,
        price: 100.0,
        stock: 10,
        weight: None,
        weight_numeric: None,
        purity: None,
        placement: None,
        views: 0,
        is_active: true,
        created_at: Utc::now(),
    }
}
