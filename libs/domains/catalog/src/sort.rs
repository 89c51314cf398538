//! Sort resolution.
//!
//! Maps a requested sort key and direction onto an ordered list of
//! (field, direction) pairs the store can apply. Unknown `sortBy`
//! values pass through literally as field-name sorts, matching the
//! permissive philosophy of the filter builder; the resolver does not
//! verify that such a field exists or is sortable.

/// Sort direction. Only the literal `asc` sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// A single (field, direction) sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub order: SortOrder,
}

impl SortKey {
    fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

/// Deterministic ordering resolved from the request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPlan {
    pub keys: Vec<SortKey>,
}

impl SortPlan {
    /// Resolve `sortBy`/`sortOrder` into a sort plan.
    ///
    /// `weight` sorts on the precomputed numeric weight field rather
    /// than the raw label. `popularity` sorts on views in the requested
    /// direction with a fixed `createdAt` descending tie-break,
    /// regardless of direction.
    pub fn resolve(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let order = SortOrder::from_param(sort_order);
        let keys = match sort_by.unwrap_or("createdAt") {
            "price" => vec![SortKey::new("price", order)],
            "stock" => vec![SortKey::new("stock", order)],
            "weight" => vec![SortKey::new("weightNumeric", order)],
            "name" => vec![SortKey::new("name", order)],
            "popularity" => vec![
                SortKey::new("views", order),
                SortKey::new("createdAt", SortOrder::Desc),
            ],
            other => vec![SortKey::new(other, order)],
        };
        Self { keys }
    }
}
