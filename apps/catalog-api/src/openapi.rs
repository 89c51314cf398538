//! OpenAPI documentation configuration.

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gold Catalog API",
        version = "0.1.0",
        description = "Faceted catalog retrieval over MongoDB"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/catalog", api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "Catalog", description = "Faceted catalog retrieval (MongoDB)")
    )
)]
pub struct ApiDoc;
