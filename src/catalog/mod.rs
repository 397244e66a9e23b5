//! # Component Catalog
//!
//! Read-only taxonomy of categories and their sub-components, plus the
//! detail-page metadata for entries that have published snippets.
//!
//! A `Catalog` is built once at start-up (from the embedded builtin data or a
//! user-supplied file) and then shared behind an `Arc`. Nothing mutates it
//! after construction.
//!
//! ```rust,ignore
//! use compkit::catalog::Catalog;
//!
//! let catalog = Catalog::builtin()?;
//! for category in catalog.categories() {
//!     println!("{}: {}", category.id, catalog.sub_components(&category.id).len());
//! }
//! ```

pub mod loader;
pub mod schema;

pub use schema::{Category, CodeTab, ReferenceBlock, SnippetDetail, SubComponentRecord};

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;

use crate::config::Config;

/// Problems found while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(String),

    #[error("catalog has no categories")]
    NoCategories,

    #[error("duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("duplicate component id '{component}' in category '{category}'")]
    DuplicateComponent { category: String, component: String },

    #[error("detail entry '{category}/{component}' has no matching component")]
    OrphanDetail { category: String, component: String },
}

/// Immutable category → sub-component taxonomy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Categories in display order; the first one is the default
    categories: Vec<Category>,
    /// Components per category, index-aligned with `categories`
    components: Vec<Vec<SubComponentRecord>>,
    /// Detail metadata keyed by (category id, component id)
    details: HashMap<(String, String), SnippetDetail>,
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        loader::load_builtin()
    }

    /// Load a catalog from a JSON or TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        loader::load_file(path)
    }

    /// Build the catalog selected by configuration.
    ///
    /// Uses `catalog.path` when set, otherwise the builtin catalog.
    pub fn load(config: &Config) -> Result<Self> {
        let catalog = match config.catalog_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::builtin().context("Failed to load builtin catalog")?,
        };

        info!(
            categories = catalog.categories.len(),
            components = catalog.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// All categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Sub-components of a category, empty for unknown ids
    pub fn sub_components(&self, category_id: &str) -> &[SubComponentRecord] {
        self.index_of(category_id)
            .map(|idx| self.components[idx].as_slice())
            .unwrap_or(&[])
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.index_of(id).map(|idx| &self.categories[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// First category in catalog order
    pub fn default_category(&self) -> &Category {
        // Non-empty is enforced by loader::build
        &self.categories[0]
    }

    /// Resolve a navigation parameter, falling back to the default category
    pub fn resolve(&self, param: Option<&str>) -> &Category {
        param
            .and_then(|id| self.category(id))
            .unwrap_or_else(|| self.default_category())
    }

    pub fn sub_component(&self, category_id: &str, id: &str) -> Option<&SubComponentRecord> {
        self.sub_components(category_id).iter().find(|r| r.id == id)
    }

    /// Detail metadata, `None` for entries without published content
    pub fn detail(&self, category_id: &str, id: &str) -> Option<&SnippetDetail> {
        self.details.get(&(category_id.to_string(), id.to_string()))
    }

    /// Total number of sub-components across all categories
    pub fn len(&self) -> usize {
        self.components.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }
}
