//! MongoDB implementation of the catalog repository.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, Document, doc},
    options::FindOptions,
};
use tracing::instrument;

use crate::error::CatalogResult;
use crate::filter::{FilterSpec, NumericRange, StockFilter, StockStatus};
use crate::models::Product;
use crate::repository::CatalogRepository;
use crate::sort::{SortOrder, SortPlan};

const DEFAULT_COLLECTION: &str = "goldCatalog";

/// MongoDB-backed catalog store.
pub struct MongoCatalogRepository {
    collection: Collection<Product>,
}

impl MongoCatalogRepository {
    /// Create a repository over the default `goldCatalog` collection.
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    /// Create a repository over a custom collection name.
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Product>(collection_name),
        }
    }

    /// Translate a filter spec into a MongoDB filter document.
    ///
    /// Substring predicates become case-insensitive regexes with the
    /// user text escaped, so metacharacters match literally.
    fn build_filter(spec: &FilterSpec) -> Document {
        let mut filter = doc! { "isActive": true };

        if let Some(ref term) = spec.search {
            let pattern = substring_match(term);
            filter.insert(
                "$or",
                vec![
                    doc! { "name": pattern.clone() },
                    doc! { "description": pattern.clone() },
                    doc! { "brand": pattern.clone() },
                    doc! { "manufacturer": pattern },
                ],
            );
        }

        if let Some(keyword) = spec.category_keyword {
            filter.insert("name", substring_match(keyword));
        }

        if let Some(range) = range_doc(&spec.price) {
            filter.insert("price", range);
        }

        match spec.stock {
            StockFilter::Unconstrained => {}
            StockFilter::Range(ref range) => {
                if let Some(range) = range_doc(range) {
                    filter.insert("stock", range);
                }
            }
            StockFilter::Status(status) => {
                filter.insert("stock", stock_status_bson(status));
            }
        }

        for (field, values) in [
            ("weight", &spec.weight),
            ("purity", &spec.purity),
            ("brand", &spec.brand),
            ("manufacturer", &spec.manufacturer),
            ("placement", &spec.placement),
        ] {
            if !values.is_empty() {
                filter.insert(field, doc! { "$in": values.clone() });
            }
        }

        if spec.created.is_bounded() {
            let mut range = doc! {};
            if let Some(from) = spec.created.from {
                range.insert("$gte", mongodb::bson::DateTime::from_chrono(from));
            }
            if let Some(to) = spec.created.to {
                range.insert("$lte", mongodb::bson::DateTime::from_chrono(to));
            }
            filter.insert("createdAt", range);
        }

        filter
    }

    /// Translate a sort plan into a MongoDB sort document.
    fn build_sort(plan: &SortPlan) -> Document {
        let mut sort = Document::new();
        for key in &plan.keys {
            let direction = match key.order {
                SortOrder::Asc => 1,
                SortOrder::Desc => -1,
            };
            sort.insert(key.field.as_str(), direction);
        }
        sort
    }
}

fn substring_match(text: &str) -> Document {
    doc! { "$regex": regex::escape(text), "$options": "i" }
}

fn range_doc(range: &NumericRange) -> Option<Document> {
    if !range.is_bounded() {
        return None;
    }
    let mut bounds = doc! {};
    if let Some(min) = range.min {
        bounds.insert("$gte", min);
    }
    if let Some(max) = range.max {
        bounds.insert("$lte", max);
    }
    Some(bounds)
}

fn stock_status_bson(status: StockStatus) -> Bson {
    match status {
        StockStatus::InStock => doc! { "$gt": 0 }.into(),
        StockStatus::OutOfStock => Bson::Int64(0),
        StockStatus::LowStock => doc! { "$gt": 0, "$lte": 10 }.into(),
        StockStatus::HighStock => doc! { "$gt": 50 }.into(),
    }
}

#[async_trait]
impl CatalogRepository for MongoCatalogRepository {
    #[instrument(skip(self, filter, sort))]
    async fn find_page(
        &self,
        filter: &FilterSpec,
        sort: &SortPlan,
        skip: u64,
        limit: i64,
    ) -> CatalogResult<Vec<Product>> {
        let options = FindOptions::builder()
            .sort(Self::build_sort(sort))
            .skip(skip)
            .limit(limit)
            .build();

        let cursor = self
            .collection
            .find(Self::build_filter(filter))
            .with_options(options)
            .await?;
        let products = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self, filter))]
    async fn count_matching(&self, filter: &FilterSpec) -> CatalogResult<u64> {
        let count = self
            .collection
            .count_documents(Self::build_filter(filter))
            .await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn scan_active(&self) -> CatalogResult<Vec<Product>> {
        let cursor = self.collection.find(doc! { "isActive": true }).await?;
        let products = cursor.try_collect().await?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogQuery;

    fn spec(query: CatalogQuery) -> FilterSpec {
        FilterSpec::from_query(&query)
    }

    #[test]
    fn test_filter_always_restricts_to_active() {
        let filter = MongoCatalogRepository::build_filter(&FilterSpec::default());
        assert_eq!(filter, doc! { "isActive": true });
    }

    #[test]
    fn test_search_ors_over_four_fields() {
        let filter = MongoCatalogRepository::build_filter(&spec(CatalogQuery {
            search: Some("pamp".to_string()),
            ..Default::default()
        }));
        let or = filter.get_array("$or").unwrap();
        assert_eq!(or.len(), 4);
        let first = or[0].as_document().unwrap();
        assert_eq!(
            first.get_document("name").unwrap(),
            &doc! { "$regex": "pamp", "$options": "i" }
        );
    }

    #[test]
    fn test_search_escapes_regex_metacharacters() {
        let filter = MongoCatalogRepository::build_filter(&spec(CatalogQuery {
            search: Some("1.5g (bar)".to_string()),
            ..Default::default()
        }));
        let or = filter.get_array("$or").unwrap();
        let name = or[0].as_document().unwrap().get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), r"1\.5g \(bar\)");
    }

    #[test]
    fn test_category_constrains_name() {
        let filter = MongoCatalogRepository::build_filter(&spec(CatalogQuery {
            category: Some("bars".to_string()),
            ..Default::default()
        }));
        assert_eq!(
            filter.get_document("name").unwrap(),
            &doc! { "$regex": "bar", "$options": "i" }
        );
    }

    #[test]
    fn test_asymmetric_price_range() {
        let filter = MongoCatalogRepository::build_filter(&spec(CatalogQuery {
            min_price: Some("250".to_string()),
            ..Default::default()
        }));
        assert_eq!(
            filter.get_document("price").unwrap(),
            &doc! { "$gte": 250.0 }
        );
    }

    #[test]
    fn test_stock_status_documents() {
        for (status, expected) in [
            ("in-stock", Bson::from(doc! { "$gt": 0 })),
            ("out-of-stock", Bson::Int64(0)),
            ("low-stock", Bson::from(doc! { "$gt": 0, "$lte": 10 })),
            ("high-stock", Bson::from(doc! { "$gt": 50 })),
        ] {
            let filter = MongoCatalogRepository::build_filter(&spec(CatalogQuery {
                stock_status: Some(status.to_string()),
                ..Default::default()
            }));
            assert_eq!(filter.get("stock").unwrap(), &expected, "status={status}");
        }
    }

    #[test]
    fn test_stock_status_replaces_range_in_document() {
        let filter = MongoCatalogRepository::build_filter(&spec(CatalogQuery {
            min_stock: Some("5".to_string()),
            max_stock: Some("500".to_string()),
            stock_status: Some("low-stock".to_string()),
            ..Default::default()
        }));
        assert_eq!(
            filter.get("stock").unwrap(),
            &Bson::from(doc! { "$gt": 0, "$lte": 10 })
        );
    }

    #[test]
    fn test_membership_sets_use_in() {
        let filter = MongoCatalogRepository::build_filter(&spec(CatalogQuery {
            purity: vec!["999.9".to_string(), "916".to_string()],
            ..Default::default()
        }));
        assert_eq!(
            filter.get_document("purity").unwrap(),
            &doc! { "$in": ["999.9", "916"] }
        );
    }

    #[test]
    fn test_date_window_is_inclusive_through_end_of_day() {
        let filter = MongoCatalogRepository::build_filter(&spec(CatalogQuery {
            date_from: Some("2024-01-10".to_string()),
            date_to: Some("2024-01-15".to_string()),
            ..Default::default()
        }));
        let created = filter.get_document("createdAt").unwrap();
        let from = created.get_datetime("$gte").unwrap().to_chrono();
        let to = created.get_datetime("$lte").unwrap().to_chrono();
        assert_eq!(from.to_rfc3339(), "2024-01-10T00:00:00+00:00");
        assert_eq!(to.to_rfc3339(), "2024-01-15T23:59:59.999+00:00");
    }

    #[test]
    fn test_sort_document_preserves_key_order() {
        let plan = SortPlan::resolve(Some("popularity"), Some("asc"));
        let sort = MongoCatalogRepository::build_sort(&plan);
        let keys: Vec<_> = sort.keys().collect();
        assert_eq!(keys, vec!["views", "createdAt"]);
        assert_eq!(sort.get_i32("views").unwrap(), 1);
        assert_eq!(sort.get_i32("createdAt").unwrap(), -1);
    }
}
