use std::collections::HashSet;

use gamestore_core::{Catalog, Genre, MAX_RATING};

const EMBEDDED_CATALOG: &str =
    include_str!("../../gamestore-web/static/assets/data/catalog.json");

#[test]
fn embedded_catalog_loads_and_validates() {
    let catalog = Catalog::from_json(EMBEDDED_CATALOG).expect("embedded catalog is valid");
    assert_eq!(catalog.len(), 6);

    let ids: HashSet<_> = catalog.iter().map(|game| game.id).collect();
    assert_eq!(ids.len(), catalog.len(), "ids must be unique");

    for game in &catalog {
        assert!(game.price_minor > 0, "game {} price", game.id);
        assert!((0.0..=MAX_RATING).contains(&game.rating));
        if let Some(original) = game.original_price_minor {
            assert!(original >= game.price_minor);
        }
        assert!(game.image.starts_with("https://"));
    }
}

#[test]
fn embedded_discounts_match_original_prices() {
    let catalog = Catalog::from_json(EMBEDDED_CATALOG).unwrap();
    let cyberpunk = catalog.get(1).unwrap();
    assert_eq!(cyberpunk.discount_pct(), Some(33));
    let civ = catalog.get(5).unwrap();
    assert_eq!(civ.discount_pct(), Some(25));
    assert!(catalog.get(2).unwrap().discount_pct().is_none());
}

#[test]
fn embedded_catalog_only_uses_known_genres() {
    let catalog = Catalog::from_json(EMBEDDED_CATALOG).unwrap();
    for game in &catalog {
        assert!(Genre::ALL.contains(&game.genre));
    }
    assert!(
        catalog.iter().all(|game| game.genre != Genre::Puzzle),
        "puzzle has no stock, which exercises the empty-result path"
    );
}

#[test]
fn catalog_serializes_back_to_loadable_json() {
    let catalog = Catalog::from_json(EMBEDDED_CATALOG).unwrap();
    let value = serde_json::to_value(&catalog).unwrap();
    let reloaded = Catalog::from_json(&value.to_string()).unwrap();
    assert_eq!(reloaded, catalog);
}
