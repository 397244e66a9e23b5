//! Data Transfer Objects for the REST API.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// Note: ToSchema is derived on all DTOs for OpenAPI documentation generation

use crate::catalog::{Category, SubComponentRecord};
use crate::presentation::{
    CatalogView, ComponentCard, DetailStatus, DetailView, OverviewTile, SidebarEntry,
};

// =============================================================================
// Health DTOs
// =============================================================================

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Service status with catalog info
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub category_count: usize,
    pub component_count: usize,
    pub default_category: String,
}

// =============================================================================
// Catalog DTOs
// =============================================================================

/// Category summary for the overview grid
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub href: String,
    pub component_count: usize,
}

impl CategoryResponse {
    pub fn from_tile(tile: OverviewTile, category: &Category) -> Self {
        Self {
            id: tile.id,
            name: tile.name,
            summary: tile.summary,
            highlights: category.highlights.clone(),
            href: tile.href,
            component_count: tile.count,
        }
    }
}

/// A raw catalog record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl From<&SubComponentRecord> for ComponentResponse {
    fn from(record: &SubComponentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            tags: record.tags.clone(),
        }
    }
}

/// A component card on a category page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CardResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub tag_line: String,
    pub href: String,
    pub has_detail: bool,
}

impl From<ComponentCard> for CardResponse {
    fn from(card: ComponentCard) -> Self {
        Self {
            id: card.id,
            name: card.name,
            description: card.description,
            tags: card.tags,
            tag_line: card.tag_line,
            href: card.href,
            has_detail: card.has_detail,
        }
    }
}

/// A sidebar link
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SidebarEntryResponse {
    pub id: String,
    pub name: String,
    pub href: String,
    pub is_active: bool,
    pub count: usize,
}

impl From<SidebarEntry> for SidebarEntryResponse {
    fn from(entry: SidebarEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            href: entry.href,
            is_active: entry.is_active,
            count: entry.count,
        }
    }
}

/// Query string of the components page
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Active category id; unknown or missing ids fall back to the default
    pub component: Option<String>,
    /// Free-text search over name, description, and tags
    pub q: Option<String>,
}

/// Rendered components page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageResponse {
    /// Resolved category id
    pub component: String,
    /// Canonical location for this page; clients replace their URL with it
    pub location: String,
    /// True when the requested category was unknown and the default was used
    pub param_corrected: bool,
    pub title: String,
    pub subtitle: String,
    pub highlights: Vec<String>,
    pub query: String,
    pub sidebar: Vec<SidebarEntryResponse>,
    pub cards: Vec<CardResponse>,
    pub total: usize,
    pub is_empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl PageResponse {
    pub fn from_view(
        view: &CatalogView<'_>,
        sidebar: Vec<SidebarEntry>,
        param_corrected: bool,
    ) -> Self {
        Self {
            component: view.category.id.clone(),
            location: view.location().href(),
            param_corrected,
            title: view.title.clone(),
            subtitle: view.subtitle.clone(),
            highlights: view.category.highlights.clone(),
            query: view.query.clone(),
            sidebar: sidebar.into_iter().map(SidebarEntryResponse::from).collect(),
            cards: view.cards().into_iter().map(CardResponse::from).collect(),
            total: view.total(),
            is_empty: view.is_empty,
            empty_message: view.empty_message().map(str::to_string),
        }
    }
}

/// A code tab label on a detail page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TabResponse {
    pub id: String,
    pub label: String,
}

/// Reference block (routes, socket events) on a detail page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReferenceResponse {
    pub label: String,
    pub lines: Vec<String>,
}

/// Rendered detail page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DetailResponse {
    pub category: String,
    pub category_name: String,
    pub id: String,
    pub name: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub breadcrumb: Vec<String>,
    /// "available" or "coming_soon"
    pub status: String,
    pub back_href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install: Option<String>,
    #[serde(default)]
    pub tabs: Vec<TabResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<ReferenceResponse>,
}

impl From<&DetailView<'_>> for DetailResponse {
    fn from(view: &DetailView<'_>) -> Self {
        let (status, install, tabs, reference) = match view.status {
            DetailStatus::Available(detail) => (
                "available",
                Some(detail.install.clone()),
                detail
                    .tabs
                    .iter()
                    .map(|t| TabResponse {
                        id: t.id.clone(),
                        label: t.label.clone(),
                    })
                    .collect(),
                Some(ReferenceResponse {
                    label: detail.reference.label.clone(),
                    lines: detail.reference.lines.clone(),
                }),
            ),
            DetailStatus::ComingSoon => ("coming_soon", None, Vec::new(), None),
        };

        Self {
            category: view.category.id.clone(),
            category_name: view.category.display_name.clone(),
            id: view.record.id.clone(),
            name: view.record.name.clone(),
            summary: view.summary().to_string(),
            tags: view.record.tags.clone(),
            breadcrumb: view.breadcrumb.clone(),
            status: status.to_string(),
            back_href: view.back_href.clone(),
            install,
            tabs,
            reference,
        }
    }
}
