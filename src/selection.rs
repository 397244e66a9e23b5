//! Selection state controller.
//!
//! Keeps the active category consistent between the navigation parameter
//! and in-memory view state. The navigation parameter wins on mount and on
//! external changes (back/forward, followed links); user selections update
//! both sides at once.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::navigation::Navigator;

/// Controller lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPhase {
    Uninitialized,
    Synced(String),
}

/// Outcome of feeding an event into the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Entered `Synced` with a different category
    Entered,
    /// Already synced to the requested category
    Unchanged,
    /// Unknown or absent category id; state untouched
    Ignored,
}

impl Transition {
    pub fn changed(self) -> bool {
        self == Transition::Entered
    }
}

/// Snapshot consumed by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub active_category: String,
    pub query: String,
}

impl SelectionState {
    pub fn new(active_category: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            active_category: active_category.into(),
            query: query.into(),
        }
    }
}

/// Owns the active category and search text for one view
#[derive(Debug, Clone)]
pub struct SelectionController {
    catalog: Arc<Catalog>,
    phase: SelectionPhase,
    query: String,
}

impl SelectionController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            phase: SelectionPhase::Uninitialized,
            query: String::new(),
        }
    }

    /// Initialize from the navigation parameter.
    ///
    /// Known ids are taken as-is; anything else resolves to the default
    /// category. Never fails.
    pub fn mount(&mut self, param: Option<&str>) {
        let category = self.catalog.resolve(param).id.clone();
        if param.is_some_and(|p| p != category) {
            debug!(param, fallback = %category, "Unknown category parameter");
        }
        debug!(category = %category, "Selection mounted");
        self.phase = SelectionPhase::Synced(category);
    }

    /// Mount from whatever the navigator currently holds
    pub fn mount_from(&mut self, navigator: &dyn Navigator) {
        let param = navigator.param();
        self.mount(param.as_deref());
    }

    /// The navigation parameter changed underneath the view.
    ///
    /// Before mount this behaves like `mount`. An absent or empty parameter
    /// selects the default category; unknown ids are ignored.
    pub fn external_param_change(&mut self, param: Option<&str>) -> Transition {
        if self.phase == SelectionPhase::Uninitialized {
            self.mount(param);
            return Transition::Entered;
        }

        let catalog = Arc::clone(&self.catalog);
        let id = match param.filter(|p| !p.is_empty()) {
            None => catalog.default_category().id.as_str(),
            Some(id) if catalog.contains(id) => id,
            Some(_) => {
                debug!(param, "Ignoring unknown category parameter");
                return Transition::Ignored;
            }
        };

        if self.is_active(id) {
            return Transition::Unchanged;
        }

        debug!(category = id, "Selection synced from navigation");
        self.phase = SelectionPhase::Synced(id.to_string());
        Transition::Entered
    }

    /// Feed the navigator's current parameter into `external_param_change`
    pub fn sync_from(&mut self, navigator: &dyn Navigator) -> Transition {
        let param = navigator.param();
        self.external_param_change(param.as_deref())
    }

    /// User picked a category.
    ///
    /// Switches immediately, clears the search text, and points the
    /// navigator at the new category. Unknown ids are ignored.
    pub fn user_select(&mut self, id: &str, navigator: &mut dyn Navigator) -> Transition {
        if !self.catalog.contains(id) {
            debug!(category = id, "Ignoring selection of unknown category");
            return Transition::Ignored;
        }

        if self.is_active(id) {
            if navigator.param().as_deref() != Some(id) {
                navigator.set_param(id);
            }
            return Transition::Unchanged;
        }

        debug!(category = id, "Category selected");
        self.phase = SelectionPhase::Synced(id.to_string());
        self.query.clear();
        navigator.set_param(id);
        Transition::Entered
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &SelectionPhase {
        &self.phase
    }

    /// Active category id, `None` before mount
    pub fn active_category(&self) -> Option<&str> {
        match &self.phase {
            SelectionPhase::Synced(id) => Some(id),
            SelectionPhase::Uninitialized => None,
        }
    }

    /// Snapshot for presentation, `None` before mount
    pub fn state(&self) -> Option<SelectionState> {
        self.active_category()
            .map(|id| SelectionState::new(id, self.query.clone()))
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    fn is_active(&self, id: &str) -> bool {
        self.active_category() == Some(id)
    }
}
