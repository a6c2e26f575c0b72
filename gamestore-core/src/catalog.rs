//! Catalog records, the genre enumeration and load-time validation.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::numbers::pct_off;

/// Identity of a catalog record.
pub type GameId = u32;

/// Highest rating a record may carry.
pub const MAX_RATING: f32 = 5.0;

/// Fixed genre enumeration, in filter-panel display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Action,
    Rpg,
    Strategy,
    Simulator,
    Sports,
    Racing,
    Puzzle,
}

impl Genre {
    pub const ALL: [Self; 7] = [
        Self::Action,
        Self::Rpg,
        Self::Strategy,
        Self::Simulator,
        Self::Sports,
        Self::Racing,
        Self::Puzzle,
    ];

    /// Stable identifier used in JSON and string tables.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Rpg => "rpg",
            Self::Strategy => "strategy",
            Self::Simulator => "simulator",
            Self::Sports => "sports",
            Self::Racing => "racing",
            Self::Puzzle => "puzzle",
        }
    }

    /// String-table key for the localized genre label.
    #[must_use]
    pub fn label_key(self) -> String {
        format!("genres.{}", self.id())
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown genre: {0}")]
pub struct ParseGenreError(pub String);

impl FromStr for Genre {
    type Err = ParseGenreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|genre| genre.id() == s)
            .ok_or_else(|| ParseGenreError(s.to_string()))
    }
}

/// A single purchasable game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    /// Price in minor currency units to avoid floating-point issues
    pub price_minor: i64,
    /// Pre-sale price, never below `price_minor`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price_minor: Option<i64>,
    pub image: String,
    pub genre: Genre,
    pub rating: f32,
    /// Advertised discount percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

impl Game {
    /// Check the record against the catalog schema bounds.
    ///
    /// # Errors
    ///
    /// Returns the first violated bound, naming this record's id.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let id = self.id;
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle { id });
        }
        if self.image.trim().is_empty() {
            return Err(CatalogError::EmptyImage { id });
        }
        if self.price_minor <= 0 {
            return Err(CatalogError::NonPositivePrice {
                id,
                price: self.price_minor,
            });
        }
        if let Some(original) = self.original_price_minor
            && original < self.price_minor
        {
            return Err(CatalogError::OriginalBelowPrice {
                id,
                price: self.price_minor,
                original,
            });
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CatalogError::RatingOutOfRange {
                id,
                rating: self.rating,
            });
        }
        if let Some(discount) = self.discount
            && discount > 100
        {
            return Err(CatalogError::DiscountOutOfRange { id, discount });
        }
        Ok(())
    }

    /// Discount to advertise: the explicit one, else the one implied by the original price.
    #[must_use]
    pub fn discount_pct(&self) -> Option<u8> {
        self.discount.filter(|pct| *pct > 0).or_else(|| {
            self.original_price_minor
                .and_then(|original| pct_off(original, self.price_minor))
        })
    }

    /// Case-insensitive substring match against the title.
    #[must_use]
    pub fn title_matches(&self, query: &str) -> bool {
        query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate game id {id}")]
    DuplicateId { id: GameId },
    #[error("game {id} has an empty title")]
    EmptyTitle { id: GameId },
    #[error("game {id} has an empty image reference")]
    EmptyImage { id: GameId },
    #[error("game {id} has non-positive price {price}")]
    NonPositivePrice { id: GameId, price: i64 },
    #[error("game {id} original price {original} is below price {price}")]
    OriginalBelowPrice {
        id: GameId,
        price: i64,
        original: i64,
    },
    #[error("game {id} rating {rating} is outside 0..=5")]
    RatingOutOfRange { id: GameId, rating: f32 },
    #[error("game {id} discount {discount}% is outside 0..=100")]
    DiscountOutOfRange { id: GameId, discount: u8 },
}

#[derive(Deserialize)]
struct CatalogFile {
    games: Vec<Game>,
}

/// Read-only, validated collection of games.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    #[must_use]
    pub const fn empty() -> Self {
        Self { games: Vec::new() }
    }

    /// Build a catalog from records, validating every one.
    ///
    /// # Errors
    ///
    /// Returns an error if any record is out of bounds or two records share an id.
    pub fn from_games(games: Vec<Game>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(games.len());
        for game in &games {
            game.validate()?;
            if !seen.insert(game.id) {
                return Err(CatalogError::DuplicateId { id: game.id });
            }
        }
        Ok(Self { games })
    }

    /// Load a catalog from its JSON document (`{ "games": [...] }`).
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any record fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_games(file.games)
    }

    #[must_use]
    pub fn get(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Game> {
        self.games.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Game;
    type IntoIter = std::slice::Iter<'a, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: GameId) -> Game {
        Game {
            id,
            title: format!("Game {id}"),
            price_minor: 100,
            original_price_minor: None,
            image: String::from("https://example.test/cover.jpg"),
            genre: Genre::Rpg,
            rating: 4.0,
            discount: None,
        }
    }

    #[test]
    fn catalog_json_parsing() {
        let json = r#"{
            "games": [
                {
                    "id": 1,
                    "title": "Cyberpunk 2077",
                    "price_minor": 199900,
                    "original_price_minor": 299900,
                    "image": "https://example.test/cp.jpg",
                    "genre": "rpg",
                    "rating": 4.2,
                    "discount": 33
                },
                {
                    "id": 4,
                    "title": "FIFA 24",
                    "price_minor": 349900,
                    "image": "https://example.test/fifa.jpg",
                    "genre": "sports",
                    "rating": 4.0
                }
            ]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let cp = catalog.get(1).unwrap();
        assert_eq!(cp.genre, Genre::Rpg);
        assert_eq!(cp.discount, Some(33));
        let fifa = catalog.get(4).unwrap();
        assert!(fifa.original_price_minor.is_none());
        assert!(fifa.discount_pct().is_none());
    }

    #[test]
    fn unknown_genre_is_rejected_at_parse_time() {
        let json = r#"{"games":[{"id":1,"title":"X","price_minor":1,"image":"i","genre":"mmo","rating":1.0}]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn validation_rejects_out_of_range_fields() {
        let mut bad_rating = game(1);
        bad_rating.rating = 5.5;
        assert!(matches!(
            bad_rating.validate(),
            Err(CatalogError::RatingOutOfRange { id: 1, .. })
        ));

        let mut nan_rating = game(2);
        nan_rating.rating = f32::NAN;
        assert!(nan_rating.validate().is_err());

        let mut bad_discount = game(3);
        bad_discount.discount = Some(101);
        assert!(matches!(
            bad_discount.validate(),
            Err(CatalogError::DiscountOutOfRange { id: 3, discount: 101 })
        ));

        let mut free = game(4);
        free.price_minor = 0;
        assert!(matches!(
            free.validate(),
            Err(CatalogError::NonPositivePrice { id: 4, price: 0 })
        ));

        let mut inverted = game(5);
        inverted.original_price_minor = Some(50);
        assert!(matches!(
            inverted.validate(),
            Err(CatalogError::OriginalBelowPrice { id: 5, .. })
        ));

        let mut untitled = game(6);
        untitled.title = String::from("  ");
        assert!(matches!(
            untitled.validate(),
            Err(CatalogError::EmptyTitle { id: 6 })
        ));

        let mut imageless = game(7);
        imageless.image.clear();
        assert!(matches!(
            imageless.validate(),
            Err(CatalogError::EmptyImage { id: 7 })
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::from_games(vec![game(1), game(2), game(1)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id: 1 }));
    }

    #[test]
    fn boundary_values_are_accepted() {
        let mut edge = game(1);
        edge.rating = 0.0;
        edge.discount = Some(100);
        edge.original_price_minor = Some(edge.price_minor);
        assert!(edge.validate().is_ok());
        edge.rating = MAX_RATING;
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn discount_prefers_explicit_value() {
        let mut sale = game(1);
        sale.price_minor = 1_499;
        sale.original_price_minor = Some(1_999);
        assert_eq!(sale.discount_pct(), Some(25));
        sale.discount = Some(30);
        assert_eq!(sale.discount_pct(), Some(30));
    }

    #[test]
    fn title_match_is_case_insensitive() {
        let mut witcher = game(2);
        witcher.title = String::from("The Witcher 3: Wild Hunt");
        assert!(witcher.title_matches("witcher"));
        assert!(witcher.title_matches("WILD"));
        assert!(witcher.title_matches(""));
        assert!(!witcher.title_matches("cyberpunk"));
    }

    #[test]
    fn genre_ids_round_trip_through_from_str() {
        for genre in Genre::ALL {
            assert_eq!(genre.id().parse::<Genre>(), Ok(genre));
        }
        assert!("mmo".parse::<Genre>().is_err());
        assert_eq!(Genre::Rpg.label_key(), "genres.rpg");
    }
}
