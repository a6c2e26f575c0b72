use anyhow::{Context, Result, ensure};
use gamestore_core::{
    Catalog, FilterState, Game, GameId, Genre, SortKey, StoreAction, StorefrontSession,
};
use rand_chacha::ChaCha8Rng;
use std::rc::Rc;

use super::ScenarioCtx;

/// A fresh session shows the whole catalog with an empty, closed cart.
pub fn smoke(ctx: &ScenarioCtx, _rng: &mut ChaCha8Rng) -> Result<()> {
    let session = StorefrontSession::new(Rc::clone(&ctx.catalog));
    ensure!(
        session.visible().len() == ctx.catalog.len(),
        "default view shows {} of {} games",
        session.visible().len(),
        ctx.catalog.len()
    );
    ensure!(session.filter() == &FilterState::default(), "filters start at defaults");
    ensure!(session.cart().is_empty(), "cart starts empty");
    ensure!(!session.is_cart_open(), "cart drawer starts closed");
    for game in ctx.catalog.iter() {
        game.validate()
            .with_context(|| format!("game {} failed validation", game.id))?;
    }
    Ok(())
}

fn record(id: GameId, price_minor: i64, rating: f32) -> Game {
    Game {
        id,
        title: format!("Example {id}"),
        price_minor,
        original_price_minor: None,
        image: format!("https://example.test/{id}.jpg"),
        genre: Genre::Rpg,
        rating,
        discount: None,
    }
}

/// The worked examples for sorting and the cart lifecycle.
pub fn documented_examples(_ctx: &ScenarioCtx, _rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = Rc::new(Catalog::from_games(vec![
        record(1, 100, 4.0),
        record(2, 50, 4.8),
    ])?);
    let mut session = StorefrontSession::new(Rc::clone(&catalog));

    session.dispatch(StoreAction::Sort(SortKey::PriceLow));
    ensure!(session.visible().ids() == [2, 1], "price-low should yield [2, 1]");
    session.dispatch(StoreAction::Sort(SortKey::Rating));
    ensure!(session.visible().ids() == [2, 1], "rating should yield [2, 1]");

    session.dispatch(StoreAction::AddToCart(1));
    session.dispatch(StoreAction::AddToCart(1));
    ensure!(session.cart().len() == 1, "repeat adds merge into one line");
    ensure!(session.cart().quantity_of(1) == 2, "repeat adds bump quantity");
    session.dispatch(StoreAction::SetQuantity(1, 5));
    ensure!(session.cart_summary().item_count == 5, "quantity set to 5");
    session.dispatch(StoreAction::RemoveFromCart(1));
    let summary = session.cart_summary();
    ensure!(
        session.cart().is_empty() && summary.total_minor == 0,
        "lifecycle should end empty, got {summary:?}"
    );
    Ok(())
}
