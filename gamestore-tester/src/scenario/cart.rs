use anyhow::{Context, Result, ensure};
use gamestore_core::numbers::line_total;
use gamestore_core::{ActionOutcome, StoreAction, StorefrontSession};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;

use super::ScenarioCtx;
use crate::logic::invariants::check_cart;

/// Add, clamp, re-quantify and remove a random game, checking totals throughout.
pub fn cart_lifecycle(ctx: &ScenarioCtx, rng: &mut ChaCha8Rng) -> Result<()> {
    let mut session = StorefrontSession::new(Rc::clone(&ctx.catalog));
    let Some(game) = ctx.catalog.games().choose(rng) else {
        return Ok(());
    };
    let id = game.id;

    let copies: u32 = rng.gen_range(1..=5);
    for _ in 0..copies {
        session.dispatch(StoreAction::AddToCart(id));
    }
    ensure!(session.cart().len() == 1, "adds of one game share a line");
    ensure!(
        session.cart().quantity_of(id) == copies,
        "expected quantity {copies}"
    );
    let expected = line_total(game.price_minor, copies);
    ensure!(
        session.cart_summary().total_minor == expected,
        "total should be {expected}"
    );

    for requested in [0, -1, i64::from(rng.gen_range(-100_i32..=0))] {
        session.dispatch(StoreAction::SetQuantity(id, requested));
        ensure!(
            session.cart().quantity_of(id) == 1,
            "quantity {requested} must clamp to 1"
        );
    }

    let target = rng.gen_range(2..=20);
    session.dispatch(StoreAction::SetQuantity(id, target));
    let line = session.cart().find_line(id).context("line survives quantity change")?;
    ensure!(i64::from(line.quantity) == target, "quantity set to {target}");
    check_cart(session.cart())?;

    ensure!(
        session.dispatch(StoreAction::RemoveFromCart(id)) == ActionOutcome::Applied,
        "first remove applies"
    );
    ensure!(
        session.dispatch(StoreAction::RemoveFromCart(id)) == ActionOutcome::Ignored,
        "second remove is a no-op"
    );
    ensure!(
        session.dispatch(StoreAction::SetQuantity(id, 3)) == ActionOutcome::Ignored,
        "quantity change without a line is a no-op"
    );
    let summary = session.cart_summary();
    ensure!(
        session.cart().is_empty() && summary.item_count == 0 && summary.total_minor == 0,
        "cart should end empty, got {summary:?}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EmbeddedCatalog;
    use gamestore_core::{Catalog, CatalogSource, Game, Genre};
    use rand::SeedableRng;

    #[test]
    fn lifecycle_passes_for_many_seeds() {
        let ctx = ScenarioCtx {
            catalog: Rc::new(EmbeddedCatalog.load_catalog().unwrap()),
            seed: 0,
            verbose: false,
        };
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            cart_lifecycle(&ctx, &mut rng).unwrap();
        }
    }

    #[test]
    fn empty_catalog_is_a_no_op() {
        let ctx = ScenarioCtx {
            catalog: Rc::new(Catalog::empty()),
            seed: 0,
            verbose: false,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        cart_lifecycle(&ctx, &mut rng).unwrap();
    }

    #[test]
    fn huge_valid_prices_saturate_instead_of_overflowing() {
        let whale = Game {
            id: 1,
            title: "Collector's Edition".to_string(),
            price_minor: i64::MAX / 2,
            original_price_minor: None,
            image: "https://example.test/1.jpg".to_string(),
            genre: Genre::Strategy,
            rating: 5.0,
            discount: None,
        };
        let ctx = ScenarioCtx {
            catalog: Rc::new(Catalog::from_games(vec![whale]).unwrap()),
            seed: 0,
            verbose: false,
        };
        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            cart_lifecycle(&ctx, &mut rng).unwrap();
        }
    }
}
