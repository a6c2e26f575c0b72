use crate::app::state::AppState;
use crate::game::{Cart, CartAction, Catalog, GameId};
use std::collections::BTreeMap;
use yew::prelude::*;

fn announce(key: &str, title: &str, qty: Option<u32>) {
    let qty = qty.map(|q| q.to_string()).unwrap_or_default();
    let mut args = BTreeMap::new();
    args.insert("title", title);
    args.insert("qty", qty.as_str());
    crate::a11y::set_status(&crate::i18n::tr(key, Some(&args)));
}

/// Cart after adding one copy of catalog game `id`; `None` for unknown ids.
#[must_use]
pub fn cart_after_add(cart: &Cart, catalog: &Catalog, id: GameId) -> Option<Cart> {
    let game = catalog.get(id)?;
    Some(cart.apply(CartAction::Add(game.clone())))
}

/// Cart without the line for `id`; `None` when there is no such line.
#[must_use]
pub fn cart_after_remove(cart: &Cart, id: GameId) -> Option<Cart> {
    let mut next = cart.clone();
    next.apply_mut(CartAction::Remove(id)).then_some(next)
}

/// Cart with the clamped quantity applied; `None` when nothing would change.
#[must_use]
pub fn cart_after_quantity(cart: &Cart, id: GameId, requested: i64) -> Option<Cart> {
    let mut next = cart.clone();
    next.apply_mut(CartAction::SetQuantity(id, requested)).then_some(next)
}

pub fn build_add_to_cart(state: &AppState) -> Callback<GameId> {
    let cart = state.cart.clone();
    let catalog = state.catalog.clone();
    Callback::from(move |id: GameId| {
        let Some(catalog) = catalog.catalog() else {
            log::warn!("ignoring add for game {id}: catalog unavailable");
            return;
        };
        match cart_after_add(&cart, catalog, id) {
            Some(next) => {
                let qty = next.quantity_of(id);
                log::debug!("added game {id}, quantity now {qty}");
                if let Some(game) = catalog.get(id) {
                    announce("status.added", &game.title, Some(qty));
                }
                cart.set(next);
            }
            None => log::warn!("ignoring add for unknown game {id}"),
        }
    })
}

pub fn build_remove_from_cart(state: &AppState) -> Callback<GameId> {
    let cart = state.cart.clone();
    Callback::from(move |id: GameId| {
        let (Some(line), Some(next)) = (cart.find_line(id), cart_after_remove(&cart, id)) else {
            log::debug!("remove for game {id} ignored: no cart line");
            return;
        };
        announce("status.removed", &line.game.title, None);
        cart.set(next);
    })
}

pub fn build_update_quantity(state: &AppState) -> Callback<(GameId, i64)> {
    let cart = state.cart.clone();
    Callback::from(move |(id, requested): (GameId, i64)| {
        let Some(next) = cart_after_quantity(&cart, id, requested) else {
            return;
        };
        if let Some(line) = next.find_line(id) {
            log::debug!("game {id} quantity set to {}", line.quantity);
            announce("status.quantity", &line.game.title, Some(line.quantity));
        }
        cart.set(next);
    })
}

pub fn build_open_cart(state: &AppState) -> Callback<()> {
    let cart_open = state.cart_open.clone();
    Callback::from(move |()| cart_open.set(true))
}

pub fn build_close_cart(state: &AppState) -> Callback<()> {
    let cart_open = state.cart_open.clone();
    Callback::from(move |()| cart_open.set(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_uses_catalog_record_and_ignores_unknown_ids() {
        let status = crate::app::bootstrap::load_embedded_status();
        let catalog = status.catalog().unwrap();
        let cart = Cart::new();
        let once = cart_after_add(&cart, catalog, 2).unwrap();
        let twice = cart_after_add(&once, catalog, 2).unwrap();
        assert_eq!(twice.quantity_of(2), 2);
        assert_eq!(twice.len(), 1);
        assert_eq!(twice.total_minor(), 179_800);
        assert!(cart_after_add(&twice, catalog, 99).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn decrease_at_one_keeps_the_line_without_a_state_change() {
        let status = crate::app::bootstrap::load_embedded_status();
        let catalog = status.catalog().unwrap();
        let cart = cart_after_add(&Cart::new(), catalog, 5).unwrap();
        assert!(cart_after_quantity(&cart, 5, 0).is_none());
        assert!(cart_after_quantity(&cart, 5, -4).is_none());
        assert!(cart_after_quantity(&cart, 7, 3).is_none(), "no line for 7");
        assert_eq!(cart.quantity_of(5), 1);

        let more = cart_after_quantity(&cart, 5, 3).unwrap();
        assert_eq!(more.quantity_of(5), 3);
        let back = cart_after_quantity(&more, 5, 2).unwrap();
        assert_eq!(back.quantity_of(5), 2);
    }

    #[test]
    fn remove_drops_only_existing_lines() {
        let status = crate::app::bootstrap::load_embedded_status();
        let catalog = status.catalog().unwrap();
        let cart = cart_after_add(&Cart::new(), catalog, 2).unwrap();
        let cart = cart_after_add(&cart, catalog, 5).unwrap();
        assert!(cart_after_remove(&cart, 9).is_none());
        let next = cart_after_remove(&cart, 2).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next.quantity_of(2), 0);
        assert!(cart_after_remove(&next, 2).is_none());
        assert_eq!(cart.len(), 2, "source cart is untouched");
    }
}
