//! Catalog Domain
//!
//! Faceted catalog query engine over a MongoDB product collection:
//! loosely-typed client parameters become a normalized filter spec, a
//! sorted and paginated page is fetched against it, and facet metadata
//! (distinct values, numeric ranges) is aggregated from the full active
//! dataset on every request.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoint
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← query orchestration (filter + sort + facets)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← products, filter spec, facets
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{CatalogService, MongoCatalogRepository, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("gold");
//!
//! let repository = MongoCatalogRepository::new(db);
//! let service = CatalogService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod error;
pub mod facets;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod sort;

// Re-export commonly used types
pub use category::Category;
pub use error::{CatalogError, CatalogResult};
pub use facets::FacetSummary;
pub use filter::{FilterSpec, StockStatus};
pub use handlers::ApiDoc;
pub use models::{CatalogPage, CatalogQuery, Pagination, Product};
pub use crate::mongodb::MongoCatalogRepository;
pub use repository::CatalogRepository;
pub use service::CatalogService;
pub use sort::{SortOrder, SortPlan};
