//! Parsing and validation of catalog files

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::schema::CatalogFile;
use super::{Catalog, CatalogError};

/// The catalog compiled into the binary
const BUILTIN_CATALOG: &str = include_str!("builtin.json");

/// Parse the embedded catalog
pub fn load_builtin() -> Result<Catalog, CatalogError> {
    let file: CatalogFile =
        serde_json::from_str(BUILTIN_CATALOG).map_err(|e| CatalogError::Parse(e.to_string()))?;
    build(file)
}

/// Load a catalog file, choosing the format from its extension.
///
/// `.toml` files are parsed as TOML, everything else as JSON.
pub fn load_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let is_toml = path.extension().is_some_and(|e| e == "toml");
    let parsed: Result<CatalogFile, CatalogError> = if is_toml {
        toml::from_str(&content).map_err(|e| CatalogError::Parse(e.to_string()))
    } else {
        serde_json::from_str(&content).map_err(|e| CatalogError::Parse(e.to_string()))
    };
    let file = parsed.with_context(|| format!("Invalid catalog file: {}", path.display()))?;

    let catalog = build(file).with_context(|| format!("Invalid catalog: {}", path.display()))?;
    debug!(
        path = %path.display(),
        categories = catalog.categories().len(),
        "Loaded catalog file"
    );
    Ok(catalog)
}

/// Validate a parsed catalog file and turn it into a `Catalog`
pub fn build(file: CatalogFile) -> Result<Catalog, CatalogError> {
    if file.categories.is_empty() {
        return Err(CatalogError::NoCategories);
    }

    let mut seen_categories = HashSet::new();
    let mut categories = Vec::with_capacity(file.categories.len());
    let mut components = Vec::with_capacity(file.categories.len());

    for def in file.categories {
        if !seen_categories.insert(def.id.clone()) {
            return Err(CatalogError::DuplicateCategory(def.id));
        }

        let mut seen_components = HashSet::new();
        for record in &def.components {
            if !seen_components.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateComponent {
                    category: def.id.clone(),
                    component: record.id.clone(),
                });
            }
        }

        let (category, records) = def.into_parts();
        categories.push(category);
        components.push(records);
    }

    let mut details = HashMap::with_capacity(file.details.len());
    for def in file.details {
        let known = categories
            .iter()
            .position(|c| c.id == def.category)
            .is_some_and(|idx| components[idx].iter().any(|r| r.id == def.component));
        if !known {
            return Err(CatalogError::OrphanDetail {
                category: def.category,
                component: def.component,
            });
        }
        details.insert((def.category, def.component), def.detail);
    }

    Ok(Catalog {
        categories,
        components,
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const MINIMAL_JSON: &str = r#"{
        "categories": [
            {
                "id": "auth",
                "display_name": "Authentication",
                "components": [
                    { "id": "login", "name": "Login", "description": "User login", "tags": ["JWT"] }
                ]
            }
        ]
    }"#;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_builtin() {
        let catalog = load_builtin().unwrap();
        assert_eq!(catalog.categories().len(), 6);
        assert_eq!(catalog.default_category().id, "auth");
    }

    #[test]
    fn test_load_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "catalog.json", MINIMAL_JSON);

        let catalog = load_file(&path).unwrap();
        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(catalog.sub_components("auth")[0].name, "Login");
    }

    #[test]
    fn test_load_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let toml = r#"
[[categories]]
id = "email"
display_name = "Email Service"
summary = "SMTP"

[[categories.components]]
id = "basic-email"
name = "Basic Email Service"
description = "Send emails with Nodemailer"
tags = ["Nodemailer", "SMTP"]

[[details]]
category = "email"
component = "basic-email"
summary = "Send emails"
install = "npm install nodemailer"
tabs = [{ id = "email", label = "Email Service" }]
reference = { label = "API Routes", lines = ["POST /email/send"] }
"#;
        let path = write_file(&temp_dir, "catalog.toml", toml);

        let catalog = load_file(&path).unwrap();
        assert_eq!(catalog.default_category().id, "email");
        assert!(catalog.detail("email", "basic-email").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_file(Path::new("/nonexistent/catalog.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "catalog.json", "{ not json");
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn test_build_rejects_empty_catalog() {
        let file = CatalogFile {
            categories: Vec::new(),
            details: Vec::new(),
        };
        assert!(matches!(build(file), Err(CatalogError::NoCategories)));
    }

    #[test]
    fn test_build_rejects_duplicate_category() {
        let json = r#"{
            "categories": [
                { "id": "auth", "display_name": "A" },
                { "id": "auth", "display_name": "B" }
            ]
        }"#;
        let file: CatalogFile = serde_json::from_str(json).unwrap();
        assert!(matches!(
            build(file),
            Err(CatalogError::DuplicateCategory(id)) if id == "auth"
        ));
    }

    #[test]
    fn test_build_rejects_duplicate_component() {
        let json = r#"{
            "categories": [{
                "id": "auth",
                "display_name": "Authentication",
                "components": [
                    { "id": "login", "name": "Login", "description": "a", "tags": [] },
                    { "id": "login", "name": "Login 2", "description": "b", "tags": [] }
                ]
            }]
        }"#;
        let file: CatalogFile = serde_json::from_str(json).unwrap();
        assert!(matches!(
            build(file),
            Err(CatalogError::DuplicateComponent { component, .. }) if component == "login"
        ));
    }

    #[test]
    fn test_build_rejects_orphan_detail() {
        let json = r#"{
            "categories": [{ "id": "auth", "display_name": "Authentication" }],
            "details": [{
                "category": "auth",
                "component": "register",
                "summary": "s",
                "install": "npm install joi",
                "tabs": [],
                "reference": { "label": "API Routes", "lines": [] }
            }]
        }"#;
        let file: CatalogFile = serde_json::from_str(json).unwrap();
        assert!(matches!(
            build(file),
            Err(CatalogError::OrphanDetail { component, .. }) if component == "register"
        ));
    }

    #[test]
    fn test_same_component_id_in_two_categories_is_allowed() {
        let json = r#"{
            "categories": [
                {
                    "id": "auth",
                    "display_name": "Authentication",
                    "components": [{ "id": "email-verification", "name": "A", "description": "a", "tags": [] }]
                },
                {
                    "id": "email",
                    "display_name": "Email",
                    "components": [{ "id": "email-verification", "name": "B", "description": "b", "tags": [] }]
                }
            ]
        }"#;
        let file: CatalogFile = serde_json::from_str(json).unwrap();
        assert!(build(file).is_ok());
    }
}
