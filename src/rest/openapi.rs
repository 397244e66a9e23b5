//! OpenAPI specification builder using utoipa.

use utoipa::OpenApi;

use crate::rest::dto::{
    CardResponse, CategoryResponse, ComponentResponse, DetailResponse, HealthResponse,
    PageResponse, ReferenceResponse, SidebarEntryResponse, StatusResponse, TabResponse,
};
use crate::rest::error::ErrorResponse;

/// OpenAPI documentation for the compkit REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "compkit API",
        description = "Read-only API for browsing the backend component catalog.",
        license(name = "MIT")
    ),
    paths(
        // Health endpoints
        crate::rest::routes::health::health,
        crate::rest::routes::health::status,
        // Catalog endpoints
        crate::rest::routes::catalog::list_categories,
        crate::rest::routes::catalog::category_components,
        crate::rest::routes::catalog::page,
        crate::rest::routes::catalog::detail,
    ),
    components(
        schemas(
            HealthResponse,
            StatusResponse,
            CategoryResponse,
            ComponentResponse,
            CardResponse,
            SidebarEntryResponse,
            PageResponse,
            TabResponse,
            ReferenceResponse,
            DetailResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check and status endpoints"),
        (name = "Catalog", description = "Category pages and component details"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI specification as a JSON string
    pub fn json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::openapi())
    }
}
