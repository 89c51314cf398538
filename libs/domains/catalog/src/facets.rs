//! Facet aggregation.
//!
//! A single pass over the full active product set (unfiltered by the
//! current request) folds into one accumulator: weight labels grouped
//! by category, running min/max of price, stock and numeric weight, and
//! distinct purity/brand/manufacturer/placement values. Facet options
//! deliberately describe "everything available" rather than "what
//! remains after narrowing".

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use crate::category::Category;
use crate::models::Product;

/// One display category with the weight labels observed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryGroup {
    pub name: String,
    pub subcategories: Vec<String>,
}

/// Facet metadata describing the navigable filter space.
///
/// Recomputed from the full active product set on every query; has no
/// identity beyond the response it is attached to. With no active
/// products, every numeric bound collapses to 0 (never infinity) and
/// all sets are empty.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacetSummary {
    pub categories: Vec<CategoryGroup>,
    pub min_price: f64,
    pub max_price: f64,
    pub min_stock: i64,
    pub max_stock: i64,
    pub min_weight: f64,
    pub max_weight: f64,
    /// Lexicographically sorted distinct values
    pub purity: Vec<String>,
    pub brands: Vec<String>,
    pub manufacturers: Vec<String>,
    pub placements: Vec<String>,
}

/// Fold the active product set into a facet summary.
pub fn aggregate(products: &[Product]) -> FacetSummary {
    products
        .iter()
        .fold(FacetAccumulator::default(), FacetAccumulator::observe)
        .finish()
}

#[derive(Debug, Default)]
struct FacetAccumulator {
    categories: BTreeMap<Category, BTreeSet<String>>,
    min_price: Option<f64>,
    max_price: f64,
    min_stock: Option<i64>,
    max_stock: i64,
    min_weight: Option<f64>,
    max_weight: f64,
    purity: BTreeSet<String>,
    brands: BTreeSet<String>,
    manufacturers: BTreeSet<String>,
    placements: BTreeSet<String>,
}

impl FacetAccumulator {
    fn observe(mut self, product: &Product) -> Self {
        let weights = self
            .categories
            .entry(Category::classify(&product.name))
            .or_default();
        if let Some(ref weight) = product.weight {
            weights.insert(weight.clone());
        }

        self.min_price = Some(self.min_price.map_or(product.price, |m| m.min(product.price)));
        self.max_price = self.max_price.max(product.price);
        self.min_stock = Some(self.min_stock.map_or(product.stock, |m| m.min(product.stock)));
        self.max_stock = self.max_stock.max(product.stock);

        // Every product contributes a weight number; absent or
        // unparseable labels count as 0.
        let weight = product.weight.as_deref().map_or(0.0, leading_number);
        self.min_weight = Some(self.min_weight.map_or(weight, |m| m.min(weight)));
        self.max_weight = self.max_weight.max(weight);

        insert_present(&mut self.purity, product.purity.as_deref());
        insert_present(&mut self.brands, product.brand.as_deref());
        insert_present(&mut self.manufacturers, product.manufacturer.as_deref());
        insert_present(&mut self.placements, product.placement.as_deref());
        self
    }

    fn finish(self) -> FacetSummary {
        FacetSummary {
            categories: self
                .categories
                .into_iter()
                .map(|(category, weights)| CategoryGroup {
                    name: category.label().to_string(),
                    subcategories: weights.into_iter().collect(),
                })
                .collect(),
            min_price: self.min_price.unwrap_or(0.0),
            max_price: self.max_price,
            min_stock: self.min_stock.unwrap_or(0),
            max_stock: self.max_stock,
            min_weight: self.min_weight.unwrap_or(0.0),
            max_weight: self.max_weight,
            purity: self.purity.into_iter().collect(),
            brands: self.brands.into_iter().collect(),
            manufacturers: self.manufacturers.into_iter().collect(),
            placements: self.placements.into_iter().collect(),
        }
    }
}

fn insert_present(set: &mut BTreeSet<String>, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        set.insert(value.to_string());
    }
}

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?").unwrap());

/// Parse the leading decimal of a weight label ("250 g" -> 250.0),
/// defaulting to 0 when no number leads the string.
fn leading_number(label: &str) -> f64 {
    LEADING_NUMBER
        .find(label.trim_start())
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}
