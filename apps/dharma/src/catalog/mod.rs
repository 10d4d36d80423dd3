//! Category catalog persistence: create on first run, load afterwards.
//!
//! A missing document is replaced by the built-in defaults. A corrupt one
//! degrades to an empty catalog so the session still finishes.

pub mod defaults;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::models::catalog::Catalog;

pub use defaults::{default_catalog, FALLBACK_CATEGORIES};

/// Where the session's catalog came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogOrigin {
    /// Document was missing; defaults were written (or at least used).
    Created,
    Loaded,
    /// Document could not be read or parsed; the catalog is empty.
    Corrupt(String),
}

#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub origin: CatalogOrigin,
}

/// Loads the catalog at `path`, creating it with defaults when absent.
pub fn load_or_create(path: &Path) -> LoadedCatalog {
    match read_catalog(path) {
        Ok(Some(catalog)) => {
            if catalog.is_empty() {
                warn!("Catalog at {} has no categories", path.display());
            } else {
                info!("Loaded {} categories from {}", catalog.len(), path.display());
            }
            LoadedCatalog {
                catalog,
                origin: CatalogOrigin::Loaded,
            }
        }
        Ok(None) => {
            let catalog = default_catalog();
            match write_catalog(path, &catalog) {
                Ok(()) => info!("Wrote default catalog to {}", path.display()),
                Err(e) => warn!("Could not persist default catalog to {}: {e}", path.display()),
            }
            LoadedCatalog {
                catalog,
                origin: CatalogOrigin::Created,
            }
        }
        Err(e) => {
            error!("Catalog at {} unusable: {e}", path.display());
            LoadedCatalog {
                catalog: Catalog::default(),
                origin: CatalogOrigin::Corrupt(e.to_string()),
            }
        }
    }
}

/// Reads and parses the catalog. `Ok(None)` when the file does not exist.
pub fn read_catalog(path: &Path) -> Result<Option<Catalog>, AppError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(AppError::Io(e)),
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| AppError::CatalogParse(e.to_string()))
}

/// Writes the catalog as 4-space-indented JSON, creating parent directories.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_pretty_json(catalog)?)?;
    Ok(())
}

/// Pretty JSON with a 4-space indent, matching the documents users already have.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_creates_document_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dharma_data.json");

        let loaded = load_or_create(&path);
        assert_eq!(loaded.origin, CatalogOrigin::Created);
        assert_eq!(loaded.catalog, default_catalog());
        assert!(path.exists(), "default document must be written");
    }

    #[test]
    fn test_default_catalog_round_trips_through_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dharma_data.json");

        write_catalog(&path, &default_catalog()).unwrap();
        let reloaded = read_catalog(&path).unwrap().unwrap();
        assert_eq!(reloaded, default_catalog());
    }

    #[test]
    fn test_second_run_loads_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dharma_data.json");
        fs::write(
            &path,
            r#"{"custom": {"keywords": ["x"], "description": "d", "careers": []}}"#,
        )
        .unwrap();

        let loaded = load_or_create(&path);
        assert_eq!(loaded.origin, CatalogOrigin::Loaded);
        assert_eq!(loaded.catalog.len(), 1);
        assert!(loaded.catalog.get("custom").is_some());
    }

    #[test]
    fn test_empty_document_loads_as_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dharma_data.json");
        fs::write(&path, "{}").unwrap();

        let loaded = load_or_create(&path);
        assert_eq!(loaded.origin, CatalogOrigin::Loaded);
        assert!(loaded.catalog.is_empty());
        // An empty but valid document is kept, not replaced by defaults
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_corrupt_document_degrades_to_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dharma_data.json");
        fs::write(&path, "{\"helping_others_grow\": {\"keywords\": [").unwrap();

        let loaded = load_or_create(&path);
        assert!(matches!(loaded.origin, CatalogOrigin::Corrupt(_)));
        assert!(loaded.catalog.is_empty());
        // The corrupt file is left alone, never overwritten with defaults.
        assert!(fs::read_to_string(&path).unwrap().ends_with('['));
    }

    #[test]
    fn test_document_uses_four_space_indent() {
        let json = String::from_utf8(to_pretty_json(&default_catalog()).unwrap()).unwrap();
        assert!(json.contains("\n    \"helping_others_grow\": {"));
    }
}
