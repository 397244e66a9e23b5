//! Presentation adapter: turns catalog + selection into display records.
//!
//! Every function here is pure. The same inputs always produce the same
//! view, which keeps re-renders cheap to compare and easy to test.

use serde::Serialize;

use crate::catalog::{Catalog, Category, SnippetDetail, SubComponentRecord};
use crate::filter;
use crate::navigation::Location;
use crate::selection::SelectionState;

/// Suffix appended to the category name in page titles
pub const TITLE_SUFFIX: &str = "Components";
/// Separator used when rendering a tag list as one line
pub const TAG_SEPARATOR: &str = " · ";

const NO_MATCHES_MESSAGE: &str = "No components found matching your search.";
const EMPTY_CATEGORY_MESSAGE: &str = "No components in this category yet.";

/// Rendered state of a category page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    pub category: &'a Category,
    pub title: String,
    pub subtitle: String,
    pub query: String,
    pub visible: Vec<&'a SubComponentRecord>,
    pub is_empty: bool,
    catalog: &'a Catalog,
}

/// One clickable entry in the component grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub tag_line: String,
    pub href: String,
    pub has_detail: bool,
}

/// One category link in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    pub id: String,
    pub name: String,
    pub href: String,
    pub is_active: bool,
    pub count: usize,
}

/// One tile on the landing overview grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewTile {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub href: String,
    pub count: usize,
}

/// Whether a sub-component has published detail content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailStatus<'a> {
    Available(&'a SnippetDetail),
    ComingSoon,
}

/// Rendered state of a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub category: &'a Category,
    pub record: &'a SubComponentRecord,
    pub breadcrumb: Vec<String>,
    pub status: DetailStatus<'a>,
    pub back_href: String,
}

/// Build the category page for a selection.
///
/// An unknown `active_category` resolves to the default category, matching
/// how navigation parameters are treated.
pub fn present<'a>(catalog: &'a Catalog, state: &SelectionState) -> CatalogView<'a> {
    let category = catalog.resolve(Some(&state.active_category));
    let visible = filter::filter(catalog.sub_components(&category.id), &state.query);

    CatalogView {
        category,
        title: title_for(category),
        subtitle: format!(
            "Production-ready {} components",
            category.display_name.to_lowercase()
        ),
        query: state.query.clone(),
        is_empty: visible.is_empty(),
        visible,
        catalog,
    }
}

/// "<display name> Components"
pub fn title_for(category: &Category) -> String {
    format!("{} {}", category.display_name, TITLE_SUFFIX)
}

impl CatalogView<'_> {
    /// Cards for the visible records, in order
    pub fn cards(&self) -> Vec<ComponentCard> {
        self.visible
            .iter()
            .map(|record| card_for(self.catalog, &self.category.id, record))
            .collect()
    }

    /// Empty-state text, `None` when something is visible
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.is_empty {
            None
        } else if filter::is_blank(&self.query) {
            Some(EMPTY_CATEGORY_MESSAGE)
        } else {
            Some(NO_MATCHES_MESSAGE)
        }
    }

    /// Canonical location for this view
    pub fn location(&self) -> Location {
        Location::catalog(&self.category.id, &self.query)
    }

    /// Number of records before filtering
    pub fn total(&self) -> usize {
        self.catalog.sub_components(&self.category.id).len()
    }
}

fn card_for(catalog: &Catalog, category_id: &str, record: &SubComponentRecord) -> ComponentCard {
    ComponentCard {
        id: record.id.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        tags: record.tags.clone(),
        tag_line: record.tags.join(TAG_SEPARATOR),
        href: Location::detail(category_id, &record.id).href(),
        has_detail: catalog.detail(category_id, &record.id).is_some(),
    }
}

/// Sidebar entries in catalog order with the active one flagged
pub fn sidebar(catalog: &Catalog, active: &str) -> Vec<SidebarEntry> {
    catalog
        .categories()
        .iter()
        .map(|c| SidebarEntry {
            id: c.id.clone(),
            name: c.display_name.clone(),
            href: Location::catalog(&c.id, "").href(),
            is_active: c.id == active,
            count: catalog.sub_components(&c.id).len(),
        })
        .collect()
}

/// Landing-grid tiles with live sub-component counts
pub fn overview(catalog: &Catalog) -> Vec<OverviewTile> {
    catalog
        .categories()
        .iter()
        .map(|c| OverviewTile {
            id: c.id.clone(),
            name: c.display_name.clone(),
            summary: c.summary.clone(),
            href: Location::catalog(&c.id, "").href(),
            count: catalog.sub_components(&c.id).len(),
        })
        .collect()
}

/// Build a detail page, `None` when the pair is unknown
pub fn present_detail<'a>(
    catalog: &'a Catalog,
    category_id: &str,
    component_id: &str,
) -> Option<DetailView<'a>> {
    let category = catalog.category(category_id)?;
    let record = catalog.sub_component(category_id, component_id)?;
    let status = match catalog.detail(category_id, component_id) {
        Some(detail) => DetailStatus::Available(detail),
        None => DetailStatus::ComingSoon,
    };

    Some(DetailView {
        category,
        record,
        breadcrumb: vec![
            TITLE_SUFFIX.to_string(),
            category.display_name.clone(),
            record.name.clone(),
        ],
        status,
        back_href: Location::catalog(&category.id, "").href(),
    })
}

impl DetailView<'_> {
    /// Text under the title: the detail summary when published, else the
    /// catalog description
    pub fn summary(&self) -> &str {
        match self.status {
            DetailStatus::Available(detail) => &detail.summary,
            DetailStatus::ComingSoon => &self.record.description,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, DetailStatus::Available(_))
    }
}
