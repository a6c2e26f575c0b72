mod cart;
mod filters;
mod navigation;

use crate::app::state::AppState;
use crate::game::{GameId, Genre, SortKey};
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub use cart::{
    build_add_to_cart, build_close_cart, build_open_cart, build_remove_from_cart,
    build_update_quantity,
};
pub use filters::{
    build_clear_filters, build_genre_toggle, build_search, build_sort_change, results_status,
};
pub use navigation::build_go_home;

#[derive(Clone)]
pub struct AppHandlers {
    pub search: Callback<String>,
    pub genre_toggle: Callback<Genre>,
    pub sort_change: Callback<SortKey>,
    pub clear_filters: Callback<()>,
    pub add_to_cart: Callback<GameId>,
    pub remove_from_cart: Callback<GameId>,
    pub update_quantity: Callback<(GameId, i64)>,
    pub open_cart: Callback<()>,
    pub close_cart: Callback<()>,
    pub go_home: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            search: build_search(state),
            genre_toggle: build_genre_toggle(state),
            sort_change: build_sort_change(state),
            clear_filters: build_clear_filters(state),
            add_to_cart: build_add_to_cart(state),
            remove_from_cart: build_remove_from_cart(state),
            update_quantity: build_update_quantity(state),
            open_cart: build_open_cart(state),
            close_cart: build_close_cart(state),
            go_home: build_go_home(navigator),
        }
    }
}
