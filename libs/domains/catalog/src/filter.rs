//! Filter specification building.
//!
//! Translates the loosely-typed [`CatalogQuery`] into a normalized,
//! typed [`FilterSpec`]. The builder never fails: malformed or
//! unrecognized values silently degrade to "no constraint for that
//! dimension". Callers get best-effort filtering, not rejection.
//!
//! Dimensions compose by logical AND; multi-valued dimensions compose
//! internally by logical OR. Each dimension contributes at most one
//! predicate.

use chrono::{DateTime, NaiveDate, Utc};
use strum::EnumString;

use crate::category::{BAR_KEYWORD, COIN_KEYWORD};
use crate::models::CatalogQuery;

/// Optional numeric range; either bound may be absent independently.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Named stock availability buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum StockStatus {
    /// stock > 0
    InStock,
    /// stock == 0
    OutOfStock,
    /// 0 < stock <= 10
    LowStock,
    /// stock > 50
    HighStock,
}

/// Stock predicate. A recognized status fully replaces any explicit
/// min/max range (last-applied-wins).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StockFilter {
    #[default]
    Unconstrained,
    Range(NumericRange),
    Status(StockStatus),
}

/// Inclusive creation-date window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn is_bounded(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

/// Normalized conjunction of predicates over the product collection.
///
/// `activeOnly` is implicit: every query is restricted to active
/// products regardless of parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring OR over name/description/brand/manufacturer
    pub search: Option<String>,
    /// Name keyword constraint derived from the `category` parameter
    pub category_keyword: Option<&'static str>,
    pub price: NumericRange,
    pub stock: StockFilter,
    pub weight: Vec<String>,
    pub purity: Vec<String>,
    pub brand: Vec<String>,
    pub manufacturer: Vec<String>,
    pub placement: Vec<String>,
    pub created: DateRange,
}

impl FilterSpec {
    /// Build a filter spec from raw query parameters.
    pub fn from_query(query: &CatalogQuery) -> Self {
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let category_keyword = query
            .category
            .as_deref()
            .map(str::to_lowercase)
            .and_then(|category| match category.as_str() {
                "bars" => Some(BAR_KEYWORD),
                "coins" => Some(COIN_KEYWORD),
                // "all" and unrecognized values mean no constraint
                _ => None,
            });

        let price = NumericRange {
            min: parse_number(query.min_price.as_deref()),
            max: parse_number(query.max_price.as_deref()),
        };

        // Explicit range first, then a recognized status overrides it.
        let stock_range = NumericRange {
            min: parse_number(query.min_stock.as_deref()),
            max: parse_number(query.max_stock.as_deref()),
        };
        let mut stock = if stock_range.is_bounded() {
            StockFilter::Range(stock_range)
        } else {
            StockFilter::Unconstrained
        };
        if let Some(status) = query
            .stock_status
            .as_deref()
            .and_then(|s| s.trim().parse::<StockStatus>().ok())
        {
            stock = StockFilter::Status(status);
        }

        let created = DateRange {
            from: parse_date_from(query.date_from.as_deref()),
            to: parse_date_to(query.date_to.as_deref()),
        };

        Self {
            search,
            category_keyword,
            price,
            stock,
            weight: non_empty_values(&query.weight),
            purity: non_empty_values(&query.purity),
            brand: non_empty_values(&query.brand),
            manufacturer: non_empty_values(&query.manufacturer),
            placement: non_empty_values(&query.placement),
            created,
        }
    }
}

/// Best-effort numeric parse; invalid or absent values become `None`.
fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Drop empty entries; an empty resulting set means no constraint.
fn non_empty_values(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .collect()
}

/// Lower bound: a bare date starts at 00:00:00 UTC; a full timestamp is
/// used as given.
fn parse_date_from(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Upper bound: a bare date is extended through 23:59:59.999 UTC so a
/// date-only value never truncates to midnight.
fn parse_date_to(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_milli_opt(23, 59, 59, 999)?.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn query() -> CatalogQuery {
        CatalogQuery::default()
    }

    #[test]
    fn test_empty_query_has_no_constraints() {
        let spec = FilterSpec::from_query(&query());
        assert_eq!(spec, FilterSpec::default());
    }

    #[test]
    fn test_search_is_trimmed() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            search: Some("  krugerrand  ".to_string()),
            ..query()
        });
        assert_eq!(spec.search.as_deref(), Some("krugerrand"));
    }

    #[test]
    fn test_blank_search_is_dropped() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            search: Some("   ".to_string()),
            ..query()
        });
        assert_eq!(spec.search, None);
    }

    #[test]
    fn test_category_maps_to_name_keyword() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            category: Some("Bars".to_string()),
            ..query()
        });
        assert_eq!(spec.category_keyword, Some("bar"));

        let spec = FilterSpec::from_query(&CatalogQuery {
            category: Some("coins".to_string()),
            ..query()
        });
        assert_eq!(spec.category_keyword, Some("coin"));
    }

    #[test]
    fn test_category_all_and_unknown_are_ignored() {
        for value in ["all", "jewellery", ""] {
            let spec = FilterSpec::from_query(&CatalogQuery {
                category: Some(value.to_string()),
                ..query()
            });
            assert_eq!(spec.category_keyword, None, "category={value:?}");
        }
    }

    #[test]
    fn test_price_bounds_parse_independently() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            min_price: Some("100.5".to_string()),
            max_price: Some("not-a-number".to_string()),
            ..query()
        });
        assert_eq!(spec.price.min, Some(100.5));
        assert_eq!(spec.price.max, None);
    }

    #[test]
    fn test_stock_status_parses_kebab_case() {
        for (raw, expected) in [
            ("in-stock", StockStatus::InStock),
            ("out-of-stock", StockStatus::OutOfStock),
            ("low-stock", StockStatus::LowStock),
            ("high-stock", StockStatus::HighStock),
        ] {
            assert_eq!(raw.parse::<StockStatus>().unwrap(), expected);
        }
    }

    #[test]
    fn test_stock_status_overrides_explicit_range() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            min_stock: Some("5".to_string()),
            max_stock: Some("100".to_string()),
            stock_status: Some("low-stock".to_string()),
            ..query()
        });
        assert_eq!(spec.stock, StockFilter::Status(StockStatus::LowStock));
    }

    #[test]
    fn test_unknown_stock_status_keeps_range() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            min_stock: Some("5".to_string()),
            stock_status: Some("backordered".to_string()),
            ..query()
        });
        assert_eq!(
            spec.stock,
            StockFilter::Range(NumericRange {
                min: Some(5.0),
                max: None,
            })
        );
    }

    #[test]
    fn test_multi_values_drop_empty_entries() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            purity: vec!["999.9".to_string(), "".to_string(), "916".to_string()],
            ..query()
        });
        assert_eq!(spec.purity, vec!["999.9", "916"]);
    }

    #[test]
    fn test_all_empty_values_mean_no_constraint() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            brand: vec!["".to_string(), "  ".to_string()],
            ..query()
        });
        assert!(spec.brand.is_empty());
    }

    #[test]
    fn test_date_from_starts_at_midnight() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            date_from: Some("2024-01-15".to_string()),
            ..query()
        });
        assert_eq!(
            spec.created.from,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_date_to_extends_to_end_of_day() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            date_to: Some("2024-01-15".to_string()),
            ..query()
        });
        let to = spec.created.to.unwrap();
        // Includes a product created at 23:59:59.000 of the same day
        assert!(to >= Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 59).unwrap());
        // Excludes anything from the next day
        assert!(to < Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_malformed_dates_are_dropped() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            date_from: Some("yesterday".to_string()),
            date_to: Some("15/01/2024".to_string()),
            ..query()
        });
        assert_eq!(spec.created, DateRange::default());
    }

    #[test]
    fn test_rfc3339_timestamps_pass_through() {
        let spec = FilterSpec::from_query(&CatalogQuery {
            date_from: Some("2024-01-15T12:30:00Z".to_string()),
            ..query()
        });
        assert_eq!(
            spec.created.from,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap())
        );
    }
}
