//! HTTP surface of the catalog domain.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use axum_extra::extract::Query;
use utoipa::OpenApi;

use crate::error::{CatalogResult, ErrorResponse};
use crate::facets::{CategoryGroup, FacetSummary};
use crate::models::{CatalogPage, CatalogQuery, Pagination, Product};
use crate::repository::CatalogRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(query_catalog),
    components(schemas(
        Product,
        CatalogPage,
        Pagination,
        FacetSummary,
        CategoryGroup,
        ErrorResponse
    )),
    tags(
        (name = "Catalog", description = "Faceted catalog retrieval (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the catalog router.
pub fn router<R: CatalogRepository + 'static>(service: CatalogService<R>) -> Router {
    Router::new()
        .route("/", get(query_catalog::<R>))
        .with_state(Arc::new(service))
}

/// Query the catalog with filters, sorting, pagination and facets.
///
/// Malformed parameter values never reject the request; they degrade to
/// "no constraint". The only error surface is a failing store.
#[utoipa::path(
    get,
    path = "",
    tag = "Catalog",
    params(CatalogQuery),
    responses(
        (status = 200, description = "One page of products with pagination and facet metadata", body = CatalogPage),
        (status = 500, description = "Catalog store unreachable or query rejected", body = ErrorResponse)
    )
)]
async fn query_catalog<R: CatalogRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(query): Query<CatalogQuery>,
) -> CatalogResult<Json<CatalogPage>> {
    let page = service.query_catalog(query).await?;
    Ok(Json(page))
}
