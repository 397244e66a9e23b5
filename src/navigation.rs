//! Navigation locations and browser-style history.
//!
//! A location is the path + query a user would see in the address bar:
//! `/components?component=auth&q=jwt` for a catalog page or
//! `/components/auth/basic-auth` for a detail page. The `component` query
//! key is the navigation parameter the selection controller syncs with.

use url::Url;

/// Query key naming the active category
pub const COMPONENT_PARAM: &str = "component";
/// Query key carrying the search text
pub const QUERY_PARAM: &str = "q";
/// Path prefix for every catalog location
pub const COMPONENTS_PATH: &str = "/components";

/// Locations are relative; this base only exists to satisfy `Url`
const BASE: &str = "http://compkit.local";

/// What a location points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Category listing; `component` is the raw navigation parameter
    Catalog {
        component: Option<String>,
        query: Option<String>,
    },
    /// Detail page for one sub-component
    Detail { category: String, component: String },
    /// Anything outside `/components`
    NotFound,
}

/// A parsed navigation location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    /// Parse an href such as `/components?component=email`.
    ///
    /// Unparseable input falls back to the bare catalog location.
    pub fn parse(href: &str) -> Self {
        match base().join(href) {
            Ok(url) => Self { url },
            Err(e) => {
                tracing::debug!(href, error = %e, "Unparseable location, using catalog root");
                Self::root()
            }
        }
    }

    /// `/components` with no parameters
    pub fn root() -> Self {
        let mut url = base();
        url.set_path(COMPONENTS_PATH);
        Self { url }
    }

    /// Catalog location for a category; blank queries are omitted
    pub fn catalog(component: &str, query: &str) -> Self {
        let mut location = Self::root();
        {
            let mut pairs = location.url.query_pairs_mut();
            pairs.append_pair(COMPONENT_PARAM, component);
            if !crate::filter::is_blank(query) {
                pairs.append_pair(QUERY_PARAM, query);
            }
        }
        location
    }

    /// Detail location: `/components/{category}/{component}`
    pub fn detail(category: &str, component: &str) -> Self {
        let mut url = base();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.clear().extend(["components", category, component]);
        }
        Self { url }
    }

    /// Value of the `component` query parameter, if any
    pub fn component_param(&self) -> Option<String> {
        self.query_value(COMPONENT_PARAM)
    }

    /// Value of the `q` query parameter, if any
    pub fn query_param(&self) -> Option<String> {
        self.query_value(QUERY_PARAM)
    }

    /// Classify the location.
    ///
    /// `/components/{category}` is treated as a catalog page for that
    /// category, matching the path-based links the overview grid uses.
    pub fn route(&self) -> Route {
        let segments: Vec<&str> = self
            .url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            ["components"] => Route::Catalog {
                component: self.component_param(),
                query: self.query_param(),
            },
            ["components", category] => Route::Catalog {
                component: Some((*category).to_string()),
                query: self.query_param(),
            },
            ["components", category, component] => Route::Detail {
                category: (*category).to_string(),
                component: (*component).to_string(),
            },
            _ => Route::NotFound,
        }
    }

    /// Relative href (path and query)
    pub fn href(&self) -> String {
        match self.url.query() {
            Some(q) if !q.is_empty() => format!("{}?{}", self.url.path(), q),
            _ => self.url.path().to_string(),
        }
    }

    /// Same location with the search text replaced
    pub fn with_query(&self, query: &str) -> Self {
        match self.route() {
            Route::Catalog { component, .. } => {
                let mut location = Self::root();
                {
                    let mut pairs = location.url.query_pairs_mut();
                    if let Some(component) = component {
                        pairs.append_pair(COMPONENT_PARAM, &component);
                    }
                    if !crate::filter::is_blank(query) {
                        pairs.append_pair(QUERY_PARAM, query);
                    }
                }
                location.clear_empty_query();
                location
            }
            _ => self.clone(),
        }
    }

    fn query_value(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    fn clear_empty_query(&mut self) {
        if self.url.query() == Some("") {
            self.url.set_query(None);
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.href())
    }
}

fn base() -> Url {
    // BASE is a constant well-formed URL
    Url::parse(BASE).unwrap_or_else(|_| unreachable!("invalid base url"))
}

/// Holder of the navigation parameter the selection controller syncs with
pub trait Navigator {
    /// Current `component` parameter, `None` when absent
    fn param(&self) -> Option<String>;

    /// Point navigation at a category, dropping any search text
    fn set_param(&mut self, component: &str);
}

/// Back/forward history of visited locations
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    cursor: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    /// Visit a new location, discarding forward entries.
    ///
    /// Pushing the current location again is a no-op.
    pub fn push(&mut self, location: Location) {
        if *self.current() == location {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
    }

    /// Swap the current entry without adding history
    pub fn replace(&mut self, location: Location) {
        self.entries[self.cursor] = location;
    }

    /// Update the search text of the current entry in place
    pub fn replace_query(&mut self, query: &str) {
        let updated = self.current().with_query(query);
        self.replace(updated);
    }

    /// Step back; returns false at the oldest entry
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward; returns false at the newest entry
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Location::root())
    }
}

impl Navigator for History {
    fn param(&self) -> Option<String> {
        match self.current().route() {
            Route::Catalog { component, .. } => component,
            Route::Detail { category, .. } => Some(category),
            Route::NotFound => None,
        }
    }

    fn set_param(&mut self, component: &str) {
        self.push(Location::catalog(component, ""));
    }
}

/// Fixed navigation parameter taken from a single request.
///
/// Writes are recorded so the caller can report the canonical location.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    pub component: Option<String>,
}

impl RequestParams {
    pub fn new(component: Option<String>) -> Self {
        Self { component }
    }
}

impl Navigator for RequestParams {
    fn param(&self) -> Option<String> {
        self.component.clone()
    }

    fn set_param(&mut self, component: &str) {
        self.component = Some(component.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_location() {
        let location = Location::parse("/components?component=payments&q=stripe");
        assert_eq!(location.component_param().as_deref(), Some("payments"));
        assert_eq!(location.query_param().as_deref(), Some("stripe"));
        assert_eq!(
            location.route(),
            Route::Catalog {
                component: Some("payments".to_string()),
                query: Some("stripe".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_without_param() {
        let location = Location::parse("/components");
        assert_eq!(location.component_param(), None);
        assert_eq!(
            location.route(),
            Route::Catalog {
                component: None,
                query: None
            }
        );
    }

    #[test]
    fn test_parse_detail_location() {
        let location = Location::parse("/components/auth/basic-auth");
        assert_eq!(
            location.route(),
            Route::Detail {
                category: "auth".to_string(),
                component: "basic-auth".to_string(),
            }
        );
    }

    #[test]
    fn test_category_path_is_catalog_route() {
        let location = Location::parse("/components/email");
        assert_eq!(
            location.route(),
            Route::Catalog {
                component: Some("email".to_string()),
                query: None,
            }
        );
    }

    #[test]
    fn test_unrelated_path_is_not_found() {
        assert_eq!(Location::parse("/docs").route(), Route::NotFound);
        assert_eq!(Location::parse("/").route(), Route::NotFound);
    }

    #[test]
    fn test_catalog_href_omits_blank_query() {
        assert_eq!(
            Location::catalog("auth", "").href(),
            "/components?component=auth"
        );
        assert_eq!(
            Location::catalog("auth", "  ").href(),
            "/components?component=auth"
        );
    }

    #[test]
    fn test_catalog_href_encodes_query() {
        let location = Location::catalog("auth", "qr code");
        assert_eq!(location.href(), "/components?component=auth&q=qr+code");
        assert_eq!(location.query_param().as_deref(), Some("qr code"));
    }

    #[test]
    fn test_detail_href() {
        assert_eq!(
            Location::detail("file-storage", "aws-s3-upload").href(),
            "/components/file-storage/aws-s3-upload"
        );
    }

    #[test]
    fn test_with_query_keeps_component() {
        let location = Location::catalog("chat", "");
        let updated = location.with_query("rooms");
        assert_eq!(updated.href(), "/components?component=chat&q=rooms");
        assert_eq!(updated.with_query("").href(), "/components?component=chat");
    }

    #[test]
    fn test_with_query_on_root() {
        assert_eq!(Location::root().with_query("").href(), "/components");
        assert_eq!(Location::root().with_query("x").href(), "/components?q=x");
    }

    #[test]
    fn test_history_push_and_back_forward() {
        let mut history = History::default();
        history.push(Location::catalog("email", ""));
        history.push(Location::catalog("chat", ""));
        assert_eq!(history.len(), 3);
        assert_eq!(history.param().as_deref(), Some("chat"));

        assert!(history.back());
        assert_eq!(history.param().as_deref(), Some("email"));
        assert!(history.back());
        assert_eq!(history.param(), None);
        assert!(!history.back());

        assert!(history.forward());
        assert_eq!(history.param().as_deref(), Some("email"));
    }

    #[test]
    fn test_history_push_truncates_forward_entries() {
        let mut history = History::default();
        history.push(Location::catalog("email", ""));
        history.push(Location::catalog("chat", ""));
        history.back();
        history.push(Location::catalog("payments", ""));

        assert!(!history.can_go_forward());
        assert_eq!(history.len(), 3);
        assert_eq!(history.param().as_deref(), Some("payments"));
    }

    #[test]
    fn test_history_push_same_location_is_noop() {
        let mut history = History::new(Location::catalog("auth", ""));
        history.set_param("auth");
        assert_eq!(history.len(), 1);
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_history_replace_query() {
        let mut history = History::new(Location::catalog("auth", ""));
        history.replace_query("jwt");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().query_param().as_deref(), Some("jwt"));
        assert_eq!(history.param().as_deref(), Some("auth"));
    }

    #[test]
    fn test_detail_location_param_is_category() {
        let history = History::new(Location::detail("payments", "refunds"));
        assert_eq!(history.param().as_deref(), Some("payments"));
    }

    #[test]
    fn test_request_params_navigator() {
        let mut params = RequestParams::new(Some("bogus".to_string()));
        assert_eq!(params.param().as_deref(), Some("bogus"));
        params.set_param("auth");
        assert_eq!(params.param().as_deref(), Some("auth"));
    }
}
