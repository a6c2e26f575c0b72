//! Web-specific catalog source
//!
//! This module provides the browser implementation of the gamestore-core
//! `CatalogSource` trait and re-exports the core storefront types.

use std::rc::Rc;

// Re-export all types from gamestore-core
pub use gamestore_core::*;

const EMBEDDED_CATALOG: &str = include_str!("../static/assets/data/catalog.json");

/// Catalog source backed by the JSON bundled into the wasm binary
#[derive(Debug, Clone, Copy)]
pub struct WebCatalogSource {
    json: &'static str,
}

impl WebCatalogSource {
    /// Source reading the catalog shipped with the site
    #[must_use]
    pub const fn embedded() -> Self {
        Self {
            json: EMBEDDED_CATALOG,
        }
    }

    /// Source reading an arbitrary static JSON document
    #[must_use]
    pub const fn from_static(json: &'static str) -> Self {
        Self { json }
    }
}

impl Default for WebCatalogSource {
    fn default() -> Self {
        Self::embedded()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("catalog data is invalid: {0}")]
    Catalog(#[from] CatalogError),
}

impl CatalogSource for WebCatalogSource {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::from_json(self.json)?)
    }
}

/// Load the shared catalog for the app, logging failures to the console.
///
/// # Errors
///
/// Returns an error if the bundled catalog fails to parse or validate.
pub fn load_catalog(source: WebCatalogSource) -> Result<Rc<Catalog>, WebDataError> {
    let storefront = Storefront::new(source);
    match storefront.load_catalog() {
        Ok(catalog) => {
            log::info!("catalog loaded with {} games", catalog.len());
            Ok(catalog)
        }
        Err(err) => {
            crate::dom::console_error(&format!("failed to load catalog: {err}"));
            Err(err)
        }
    }
}
