//! A storefront session: the single owner of filter, cart and drawer state.
use std::rc::Rc;

use crate::cart::{Cart, CartSummary};
use crate::catalog::{Catalog, GameId, Genre};
use crate::filter::{CatalogView, FilterAction, FilterState, SortKey, visible_games};

/// Every action the storefront UI can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    Search(String),
    ToggleGenre(Genre),
    Sort(SortKey),
    ClearFilters,
    AddToCart(GameId),
    RemoveFromCart(GameId),
    SetQuantity(GameId, i64),
    OpenCart,
    CloseCart,
}

impl StoreAction {
    /// Whether the action targets the filter container.
    #[must_use]
    pub const fn is_filter_action(&self) -> bool {
        matches!(
            self,
            Self::Search(_) | Self::ToggleGenre(_) | Self::Sort(_) | Self::ClearFilters
        )
    }
}

/// Result of dispatching an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    /// No-op: unknown id, missing line or nothing to change.
    Ignored,
}

impl ActionOutcome {
    const fn from_changed(changed: bool) -> Self {
        if changed { Self::Applied } else { Self::Ignored }
    }
}

#[derive(Debug, Clone)]
pub struct StorefrontSession {
    catalog: Rc<Catalog>,
    filter: FilterState,
    cart: Cart,
    cart_open: bool,
}

impl StorefrontSession {
    #[must_use]
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            cart: Cart::default(),
            cart_open: false,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Games visible under the current filter state.
    #[must_use]
    pub fn visible(&self) -> CatalogView<'_> {
        visible_games(&self.catalog, &self.filter)
    }

    #[must_use]
    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// Apply one UI action as an atomic transition.
    pub fn dispatch(&mut self, action: StoreAction) -> ActionOutcome {
        match action {
            StoreAction::Search(query) => self.apply_filter(FilterAction::Search(query)),
            StoreAction::ToggleGenre(genre) => self.apply_filter(FilterAction::ToggleGenre(genre)),
            StoreAction::Sort(sort) => self.apply_filter(FilterAction::Sort(sort)),
            StoreAction::ClearFilters => self.apply_filter(FilterAction::Clear),
            StoreAction::AddToCart(id) => match self.catalog.get(id) {
                Some(game) => {
                    self.cart.add(game);
                    ActionOutcome::Applied
                }
                None => ActionOutcome::Ignored,
            },
            StoreAction::RemoveFromCart(id) => {
                ActionOutcome::from_changed(self.cart.remove(id).is_some())
            }
            StoreAction::SetQuantity(id, requested) => {
                let before = self.cart.quantity_of(id);
                let after = self.cart.set_quantity(id, requested);
                ActionOutcome::from_changed(after.is_some_and(|qty| qty != before))
            }
            StoreAction::OpenCart => self.set_cart_open(true),
            StoreAction::CloseCart => self.set_cart_open(false),
        }
    }

    fn apply_filter(&mut self, action: FilterAction) -> ActionOutcome {
        let next = self.filter.apply(action);
        let changed = next != self.filter;
        self.filter = next;
        ActionOutcome::from_changed(changed)
    }

    fn set_cart_open(&mut self, open: bool) -> ActionOutcome {
        let changed = self.cart_open != open;
        self.cart_open = open;
        ActionOutcome::from_changed(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Game;

    fn catalog() -> Rc<Catalog> {
        let games = [(1, 100, 4.0), (2, 50, 4.8)]
            .into_iter()
            .map(|(id, price_minor, rating)| Game {
                id,
                title: format!("Title {id}"),
                price_minor,
                original_price_minor: None,
                image: format!("https://example.test/{id}.jpg"),
                genre: Genre::Rpg,
                rating,
                discount: None,
            })
            .collect();
        Rc::new(Catalog::from_games(games).unwrap())
    }

    #[test]
    fn dispatch_routes_filter_actions() {
        let mut session = StorefrontSession::new(catalog());
        assert_eq!(
            session.dispatch(StoreAction::Sort(SortKey::PriceLow)),
            ActionOutcome::Applied
        );
        assert_eq!(session.visible().ids(), vec![2, 1]);
        assert_eq!(
            session.dispatch(StoreAction::Sort(SortKey::PriceLow)),
            ActionOutcome::Ignored
        );
        session.dispatch(StoreAction::Search(String::from("title 1")));
        assert_eq!(session.visible().ids(), vec![1]);
        session.dispatch(StoreAction::ClearFilters);
        assert_eq!(session.filter().search_query, "title 1");
        assert_eq!(session.filter().sort, SortKey::Popular);
    }

    #[test]
    fn dispatch_routes_cart_actions() {
        let mut session = StorefrontSession::new(catalog());
        assert_eq!(
            session.dispatch(StoreAction::AddToCart(42)),
            ActionOutcome::Ignored
        );
        session.dispatch(StoreAction::AddToCart(1));
        session.dispatch(StoreAction::AddToCart(1));
        assert_eq!(session.cart_summary().item_count, 2);
        assert_eq!(
            session.dispatch(StoreAction::SetQuantity(1, 5)),
            ActionOutcome::Applied
        );
        assert_eq!(session.cart_summary().total_minor, 500);
        assert_eq!(
            session.dispatch(StoreAction::RemoveFromCart(1)),
            ActionOutcome::Applied
        );
        assert_eq!(
            session.dispatch(StoreAction::RemoveFromCart(1)),
            ActionOutcome::Ignored
        );
        assert!(session.cart().is_empty());
        assert_eq!(session.cart_summary().total_minor, 0);
    }

    #[test]
    fn cart_visibility_has_no_model_effect() {
        let mut session = StorefrontSession::new(catalog());
        session.dispatch(StoreAction::AddToCart(2));
        let before = session.cart().clone();
        assert_eq!(session.dispatch(StoreAction::OpenCart), ActionOutcome::Applied);
        assert!(session.is_cart_open());
        assert_eq!(session.dispatch(StoreAction::OpenCart), ActionOutcome::Ignored);
        session.dispatch(StoreAction::CloseCart);
        assert!(!session.is_cart_open());
        assert_eq!(session.cart(), &before);
    }

    #[test]
    fn filter_actions_are_classified() {
        assert!(StoreAction::ClearFilters.is_filter_action());
        assert!(!StoreAction::OpenCart.is_filter_action());
        assert!(!StoreAction::AddToCart(1).is_filter_action());
    }
}
