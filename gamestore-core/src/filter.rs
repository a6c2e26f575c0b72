//! Filter state and the pure catalog visibility derivation.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::{Catalog, Game, GameId, Genre};

/// Catalog ordering chosen by the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Currently ranks by rating, kept separate so it can diverge later.
    #[default]
    Popular,
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
}

impl SortKey {
    pub const ALL: [Self; 5] = [
        Self::Popular,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Rating,
        Self::Newest,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }

    #[must_use]
    pub fn label_key(self) -> String {
        format!("filters.sort.{}", self.id())
    }

    /// Ordering of two games under this key.
    #[must_use]
    pub fn compare(self, a: &Game, b: &Game) -> Ordering {
        match self {
            Self::PriceLow => a.price_minor.cmp(&b.price_minor),
            Self::PriceHigh => b.price_minor.cmp(&a.price_minor),
            Self::Rating | Self::Popular => b.rating.total_cmp(&a.rating),
            Self::Newest => b.id.cmp(&a.id),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.id() == s)
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}

/// Selected genres in toggle order. Empty admits every genre.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenreSelection(SmallVec<[Genre; 8]>);

impl GenreSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `genre`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, genre: Genre) -> bool {
        if let Some(pos) = self.0.iter().position(|g| *g == genre) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(genre);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, genre: Genre) -> bool {
        self.0.contains(&genre)
    }

    /// Whether a game of `genre` passes the genre filter.
    #[must_use]
    pub fn admits(&self, genre: Genre) -> bool {
        self.0.is_empty() || self.contains(genre)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Genre> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Genre> for GenreSelection {
    fn from_iter<I: IntoIterator<Item = Genre>>(iter: I) -> Self {
        let mut selection = Self::new();
        for genre in iter {
            if !selection.contains(genre) {
                selection.0.push(genre);
            }
        }
        selection
    }
}

/// User actions that change what the catalog shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    Search(String),
    ToggleGenre(Genre),
    Sort(SortKey),
    /// Resets genres and sort key; the search query is kept.
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search_query: String,
    pub genres: GenreSelection,
    pub sort: SortKey,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn toggle_genre(&mut self, genre: Genre) -> bool {
        self.genres.toggle(genre)
    }

    pub const fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    pub fn clear(&mut self) {
        self.genres.clear();
        self.sort = SortKey::default();
    }

    /// Apply an action in place.
    pub fn apply_mut(&mut self, action: FilterAction) {
        match action {
            FilterAction::Search(query) => self.set_search(query),
            FilterAction::ToggleGenre(genre) => {
                self.toggle_genre(genre);
            }
            FilterAction::Sort(sort) => self.set_sort(sort),
            FilterAction::Clear => self.clear(),
        }
    }

    /// Next state after `action`; `self` is left untouched.
    #[must_use]
    pub fn apply(&self, action: FilterAction) -> Self {
        let mut next = self.clone();
        next.apply_mut(action);
        next
    }

    /// Whether `game` passes both the text and the genre filter.
    #[must_use]
    pub fn admits(&self, game: &Game) -> bool {
        game.title_matches(&self.search_query) && self.genres.admits(game.genre)
    }

    /// True when any genre or a non-default sort is active.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.genres.is_empty() || self.sort != SortKey::default()
    }
}

/// Ordered games visible under a filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    games: Vec<&'a Game>,
}

impl<'a> CatalogView<'a> {
    /// Nothing matched; callers render a "no results" message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Game> + '_ {
        self.games.iter().copied()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<GameId> {
        self.games.iter().map(|game| game.id).collect()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[&'a Game] {
        &self.games
    }
}

/// Derive the visible, ordered subset of `catalog` for `filter`.
#[must_use]
pub fn visible_games<'a>(catalog: &'a Catalog, filter: &FilterState) -> CatalogView<'a> {
    let mut games: Vec<&Game> = catalog.iter().filter(|game| filter.admits(game)).collect();
    games.sort_by(|a, b| filter.sort.compare(a, b));
    CatalogView { games }
}
