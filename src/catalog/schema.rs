//! Statically-typed catalog records and the on-disk catalog file shape.

use serde::{Deserialize, Serialize};

/// Top-level grouping of backend snippets (e.g. Authentication).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique key, also the value of the `component` navigation parameter
    pub id: String,
    /// Human-readable name ("Authentication")
    pub display_name: String,
    /// One-line blurb shown on the overview grid
    pub summary: String,
    /// Header chips shown above the category's component list
    pub highlights: Vec<String>,
}

/// A single named snippet entry within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubComponentRecord {
    /// Unique within the owning category; used as the detail route segment
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// A code tab on a detail page. The code text itself lives outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeTab {
    pub id: String,
    pub label: String,
}

/// Copyable reference block on a detail page (API routes, socket events).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceBlock {
    pub label: String,
    pub lines: Vec<String>,
}

/// Detail page metadata for a sub-component that has published content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetDetail {
    /// Longer description shown under the detail page title
    pub summary: String,
    /// Install command for the snippet's dependencies
    pub install: String,
    pub tabs: Vec<CodeTab>,
    pub reference: ReferenceBlock,
}

/// Category as written in a catalog file, with its components inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub components: Vec<SubComponentRecord>,
}

/// Detail entry as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailDef {
    pub category: String,
    pub component: String,
    #[serde(flatten)]
    pub detail: SnippetDetail,
}

/// Root of a catalog file (JSON or TOML).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub categories: Vec<CategoryDef>,
    #[serde(default)]
    pub details: Vec<DetailDef>,
}

impl CategoryDef {
    /// Split the file shape into the category record and its components
    pub fn into_parts(self) -> (Category, Vec<SubComponentRecord>) {
        (
            Category {
                id: self.id,
                display_name: self.display_name,
                summary: self.summary,
                highlights: self.highlights,
            },
            self.components,
        )
    }
}
