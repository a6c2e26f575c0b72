//! Checks that must hold for every reachable storefront state.
use gamestore_core::{Cart, Catalog, FilterState, GameId, SortKey, StoreAction, visible_games};
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("cart holds {count} lines for game {id}")]
    DuplicateLine { id: GameId, count: usize },
    #[error("cart line for game {id} has quantity {quantity}")]
    EmptyLine { id: GameId, quantity: u32 },
    #[error("cart reports {reported} items but its lines sum to {expected}")]
    ItemCount { reported: u32, expected: u64 },
    #[error("cart reports total {reported} but its lines sum to {expected}")]
    Total { reported: i64, expected: i128 },
    #[error("visible game {id} does not pass the filter")]
    Inadmissible { id: GameId },
    #[error("game {id} passes the filter but is not visible")]
    Hidden { id: GameId },
    #[error("games {first} and {second} are out of {sort} order")]
    OutOfOrder {
        first: GameId,
        second: GameId,
        sort: SortKey,
    },
    #[error("clearing filters changed the search query from {before:?} to {after:?}")]
    SearchChanged { before: String, after: String },
    #[error("clearing filters left {genres} genres selected and sort {sort}")]
    FiltersNotCleared { genres: usize, sort: SortKey },
    #[error("action {action} was ignored but changed the session")]
    IgnoredButChanged { action: String },
    #[error("action {action} changed the {container} state it does not own")]
    ForeignState {
        action: String,
        container: &'static str,
    },
}

/// Cart lines are unique, non-empty, and the summary matches the lines.
///
/// # Errors
///
/// Returns the first violated cart invariant.
pub fn check_cart(cart: &Cart) -> Result<(), Violation> {
    let mut counts: HashMap<GameId, usize> = HashMap::new();
    for line in cart.lines() {
        *counts.entry(line.id()).or_default() += 1;
        if line.quantity == 0 {
            return Err(Violation::EmptyLine {
                id: line.id(),
                quantity: line.quantity,
            });
        }
    }
    if let Some((&id, &count)) = counts.iter().find(|(_, count)| **count > 1) {
        return Err(Violation::DuplicateLine { id, count });
    }

    let expected_items: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
    let reported_items = cart.item_count();
    if u64::from(reported_items) != expected_items.min(u64::from(u32::MAX)) {
        return Err(Violation::ItemCount {
            reported: reported_items,
            expected: expected_items,
        });
    }

    let expected_total: i128 = cart
        .lines()
        .iter()
        .map(|l| i128::from(l.game.price_minor) * i128::from(l.quantity))
        .sum();
    let reported_total = cart.total_minor();
    if i128::from(reported_total) != expected_total.min(i128::from(i64::MAX)) {
        return Err(Violation::Total {
            reported: reported_total,
            expected: expected_total,
        });
    }
    Ok(())
}

/// The visible view is exactly the admitted games, in sort order.
///
/// # Errors
///
/// Returns the first game that is wrongly shown, hidden or misordered.
pub fn check_view(catalog: &Catalog, filter: &FilterState) -> Result<(), Violation> {
    let view = visible_games(catalog, filter);
    for game in view.iter() {
        if !filter.admits(game) {
            return Err(Violation::Inadmissible { id: game.id });
        }
    }
    let shown = view.ids();
    if let Some(hidden) = catalog
        .iter()
        .find(|game| filter.admits(game) && !shown.contains(&game.id))
    {
        return Err(Violation::Hidden { id: hidden.id });
    }
    for pair in view.as_slice().windows(2) {
        if filter.sort.compare(pair[0], pair[1]) == Ordering::Greater {
            return Err(Violation::OutOfOrder {
                first: pair[0].id,
                second: pair[1].id,
                sort: filter.sort,
            });
        }
    }
    Ok(())
}

/// Clearing keeps the query and resets genres and sort.
///
/// # Errors
///
/// Returns a violation when `after` is not the cleared form of `before`.
pub fn check_cleared(before: &FilterState, after: &FilterState) -> Result<(), Violation> {
    if before.search_query != after.search_query {
        return Err(Violation::SearchChanged {
            before: before.search_query.clone(),
            after: after.search_query.clone(),
        });
    }
    if after.has_active_filters() {
        return Err(Violation::FiltersNotCleared {
            genres: after.genres.len(),
            sort: after.sort,
        });
    }
    Ok(())
}

/// Filter actions leave the cart alone and cart actions leave the filters alone.
///
/// # Errors
///
/// Returns [`Violation::ForeignState`] naming the container that changed.
pub fn check_ownership(
    action: &StoreAction,
    filter_changed: bool,
    cart_changed: bool,
) -> Result<(), Violation> {
    let container = if action.is_filter_action() {
        cart_changed.then_some("cart")
    } else {
        filter_changed.then_some("filter")
    };
    match container {
        Some(container) => Err(Violation::ForeignState {
            action: format!("{action:?}"),
            container,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamestore_core::{FilterAction, Game, Genre};

    fn game(id: GameId, price_minor: i64, rating: f32) -> Game {
        Game {
            id,
            title: format!("Game {id}"),
            price_minor,
            original_price_minor: None,
            image: format!("https://example.test/{id}.jpg"),
            genre: Genre::Action,
            rating,
            discount: None,
        }
    }

    #[test]
    fn healthy_cart_passes() {
        let mut cart = Cart::new();
        cart.add(&game(1, 100, 4.0));
        cart.add(&game(1, 100, 4.0));
        cart.add(&game(2, 250, 3.0));
        assert_eq!(check_cart(&cart), Ok(()));
        assert_eq!(check_cart(&Cart::new()), Ok(()));
    }

    #[test]
    fn views_pass_for_every_sort() {
        let catalog =
            Catalog::from_games(vec![game(1, 100, 4.0), game(2, 50, 4.8), game(3, 75, 4.0)])
                .unwrap();
        for sort in SortKey::ALL {
            let filter = FilterState::new().apply(FilterAction::Sort(sort));
            assert_eq!(check_view(&catalog, &filter), Ok(()), "{sort}");
        }
    }

    #[test]
    fn clearing_detects_lost_query() {
        let before = FilterState::new().apply(FilterAction::Search("wit".into()));
        assert_eq!(check_cleared(&before, &before.apply(FilterAction::Clear)), Ok(()));
        let wiped = FilterState::new();
        assert!(matches!(
            check_cleared(&before, &wiped),
            Err(Violation::SearchChanged { .. })
        ));
        let unsorted = before.apply(FilterAction::Sort(SortKey::Newest));
        assert!(matches!(
            check_cleared(&before, &unsorted),
            Err(Violation::FiltersNotCleared { .. })
        ));
    }

    #[test]
    fn ownership_flags_cross_container_changes() {
        let search = StoreAction::Search(String::from("x"));
        assert!(check_ownership(&search, true, false).is_ok());
        assert_eq!(
            check_ownership(&search, true, true),
            Err(Violation::ForeignState {
                action: format!("{search:?}"),
                container: "cart",
            })
        );
        assert!(check_ownership(&StoreAction::AddToCart(1), false, true).is_ok());
        assert!(matches!(
            check_ownership(&StoreAction::OpenCart, true, false),
            Err(Violation::ForeignState { container: "filter", .. })
        ));
    }
}
