//! Wires the catalog domain to HTTP routes.

use axum::Router;
use domain_catalog::{CatalogService, MongoCatalogRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoCatalogRepository::new(state.db.clone());
    let service = CatalogService::new(repository);
    handlers::router(service)
}
