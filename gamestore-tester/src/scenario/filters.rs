use anyhow::{Result, ensure};
use gamestore_core::{FilterAction, FilterState, Genre, GenreSelection, SortKey, visible_games};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::ScenarioCtx;
use crate::logic::invariants::check_view;
use crate::logic::walker::random_query;

const ROUNDS: usize = 25;

fn random_genres(rng: &mut ChaCha8Rng) -> GenreSelection {
    Genre::ALL
        .into_iter()
        .filter(|_| rng.gen_bool(0.3))
        .collect()
}

/// Random queries and genre subsets only ever narrow the catalog correctly.
pub fn filter_properties(ctx: &ScenarioCtx, rng: &mut ChaCha8Rng) -> Result<()> {
    for _ in 0..ROUNDS {
        let query = random_query(rng, &ctx.catalog);
        let filter = FilterState {
            search_query: query.clone(),
            genres: random_genres(rng),
            ..FilterState::default()
        };
        check_view(&ctx.catalog, &filter)?;

        let view = visible_games(&ctx.catalog, &filter);
        let needle = query.to_lowercase();
        for game in view.iter() {
            ensure!(
                game.title.to_lowercase().contains(&needle),
                "{:?} shown for query {query:?}",
                game.title
            );
            ensure!(
                filter.genres.is_empty() || filter.genres.contains(game.genre),
                "{:?} shown outside selected genres",
                game.title
            );
        }

        let cleared = filter.apply(FilterAction::Clear);
        ensure!(
            cleared.search_query == query,
            "clearing filters must keep the search query"
        );
    }
    Ok(())
}

/// Price orders mirror each other and rating orders never rise.
pub fn sort_orders(ctx: &ScenarioCtx, rng: &mut ChaCha8Rng) -> Result<()> {
    for _ in 0..ROUNDS {
        let base = FilterState {
            genres: random_genres(rng),
            ..FilterState::default()
        };
        let low = base.apply(FilterAction::Sort(SortKey::PriceLow));
        let high = base.apply(FilterAction::Sort(SortKey::PriceHigh));
        let ascending = visible_games(&ctx.catalog, &low);
        let descending = visible_games(&ctx.catalog, &high);

        let mut prices: Vec<i64> = ascending.iter().map(|g| g.price_minor).collect();
        prices.dedup();
        if prices.len() == ascending.len() {
            let mut reversed = ascending.ids();
            reversed.reverse();
            ensure!(
                reversed == descending.ids(),
                "price-high is not the reverse of price-low"
            );
        }

        for sort in [SortKey::Rating, SortKey::Popular] {
            let view = visible_games(&ctx.catalog, &base.apply(FilterAction::Sort(sort)));
            let ratings: Vec<f32> = view.iter().map(|g| g.rating).collect();
            ensure!(
                ratings.windows(2).all(|w| w[0] >= w[1]),
                "{sort} order has rising ratings: {ratings:?}"
            );
        }
    }
    Ok(())
}
