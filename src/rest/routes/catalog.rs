//! Catalog browsing endpoints.
//!
//! Each request builds its own `SelectionController` from the query string,
//! so the server holds no per-client state.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::navigation::RequestParams;
use crate::presentation::{overview, present, present_detail, sidebar};
use crate::rest::dto::{
    CategoryResponse, ComponentResponse, DetailResponse, PageQuery, PageResponse,
};
use crate::rest::error::ApiError;
use crate::rest::state::ApiState;
use crate::selection::SelectionController;

/// List all categories in display order
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Catalog",
    responses(
        (status = 200, description = "Categories with component counts", body = Vec<CategoryResponse>)
    )
)]
pub async fn list_categories(State(state): State<ApiState>) -> Json<Vec<CategoryResponse>> {
    let catalog = &state.catalog;
    let categories = overview(catalog)
        .into_iter()
        .zip(catalog.categories())
        .map(|(tile, category)| CategoryResponse::from_tile(tile, category))
        .collect();

    Json(categories)
}

/// Raw sub-components of one category
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}/components",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Sub-components in catalog order, empty for an unknown category", body = Vec<ComponentResponse>)
    )
)]
pub async fn category_components(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Json<Vec<ComponentResponse>> {
    Json(
        state
            .catalog
            .sub_components(&id)
            .iter()
            .map(ComponentResponse::from)
            .collect(),
    )
}

/// Render the components page for a category and search text
#[utoipa::path(
    get,
    path = "/api/v1/components",
    tag = "Catalog",
    params(PageQuery),
    responses(
        (status = 200, description = "Rendered category page", body = PageResponse)
    )
)]
pub async fn page(
    State(state): State<ApiState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<PageResponse>, ApiError> {
    let navigator = RequestParams::new(params.component.clone());
    let mut controller = SelectionController::new(state.catalog.clone());
    controller.mount_from(&navigator);
    controller.set_query(params.q.unwrap_or_default());

    let Some(selection) = controller.state() else {
        return Err(ApiError::InternalError(
            "Selection was not initialized".to_string(),
        ));
    };

    let param_corrected =
        params.component.as_deref() != Some(selection.active_category.as_str());
    if param_corrected {
        debug!(
            requested = ?params.component,
            resolved = %selection.active_category,
            "Corrected component parameter"
        );
    }

    let view = present(&state.catalog, &selection);
    let entries = sidebar(&state.catalog, &selection.active_category);

    Ok(Json(PageResponse::from_view(&view, entries, param_corrected)))
}

/// Detail page for one sub-component
#[utoipa::path(
    get,
    path = "/api/v1/components/{category}/{id}",
    tag = "Catalog",
    params(
        ("category" = String, Path, description = "Category id"),
        ("id" = String, Path, description = "Sub-component id")
    ),
    responses(
        (status = 200, description = "Detail page, available or coming soon", body = DetailResponse),
        (status = 404, description = "Unknown category or sub-component")
    )
)]
pub async fn detail(
    State(state): State<ApiState>,
    Path((category, id)): Path<(String, String)>,
) -> Result<Json<DetailResponse>, ApiError> {
    let view = present_detail(&state.catalog, &category, &id).ok_or_else(|| {
        ApiError::NotFound(format!("Component '{}/{}' not found", category, id))
    })?;

    Ok(Json(DetailResponse::from(&view)))
}
