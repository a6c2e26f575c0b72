//! Catalog sources the tester can validate and exercise.
use gamestore_core::{Catalog, CatalogError, CatalogSource};
use std::path::{Path, PathBuf};

const EMBEDDED_CATALOG: &str =
    include_str!("../../gamestore-web/static/assets/data/catalog.json");

/// The catalog shipped with the web storefront.
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Catalog::from_json(EMBEDDED_CATALOG)
    }
}

/// A catalog JSON file on disk, passed with `--catalog`.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FileCatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog {path} is invalid: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

impl CatalogSource for FileCatalog {
    type Error = FileCatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| FileCatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        Catalog::from_json(&json).map_err(|source| FileCatalogError::Invalid {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = EmbeddedCatalog.load_catalog().unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn missing_file_reports_path() {
        let source = FileCatalog::new("/definitely/not/here.json");
        let err = source.load_catalog().unwrap_err();
        assert!(matches!(err, FileCatalogError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn invalid_file_reports_validation_error() {
        let path = std::env::temp_dir().join("gamestore-tester-invalid-catalog.json");
        std::fs::write(
            &path,
            r#"{"games":[{"id":1,"title":"","price_minor":100,"image":"x.jpg","genre":"rpg","rating":3.0}]}"#,
        )
        .unwrap();
        let err = FileCatalog::new(&path).load_catalog().unwrap_err();
        assert!(matches!(
            err,
            FileCatalogError::Invalid {
                source: CatalogError::EmptyTitle { id: 1 },
                ..
            }
        ));
    }
}
