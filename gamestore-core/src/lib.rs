//! GameStore Core
//!
//! Platform-agnostic storefront logic: the game catalog, the filter/sort engine
//! and the shopping cart. This crate carries no UI or platform-specific dependencies.

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod numbers;
pub mod session;

use std::rc::Rc;

// Re-export commonly used types
pub use cart::{Cart, CartAction, CartLine, CartSummary};
pub use catalog::{Catalog, CatalogError, Game, GameId, Genre, MAX_RATING, ParseGenreError};
pub use filter::{
    CatalogView, FilterAction, FilterState, GenreSelection, ParseSortKeyError, SortKey,
    visible_games,
};
pub use session::{ActionOutcome, StoreAction, StorefrontSession};

/// Trait for abstracting catalog loading
/// Platform-specific implementations should provide this
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and validate the catalog from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or fails validation.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;
}

/// Entry point that turns a catalog source into storefront sessions
pub struct Storefront<S>
where
    S: CatalogSource,
{
    source: S,
}

impl<S> Storefront<S>
where
    S: CatalogSource,
{
    /// Create a storefront over the provided catalog source
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Load the catalog once and share it
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to produce a valid catalog.
    pub fn load_catalog(&self) -> Result<Rc<Catalog>, S::Error> {
        self.source.load_catalog().map(Rc::new)
    }

    /// Open a fresh session with default filters and an empty cart
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn open_session(&self) -> anyhow::Result<StorefrontSession>
    where
        S::Error: Into<anyhow::Error>,
    {
        let catalog = self.load_catalog().map_err(Into::into)?;
        Ok(StorefrontSession::new(catalog))
    }
}
