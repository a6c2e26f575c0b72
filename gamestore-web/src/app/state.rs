use crate::game::{Cart, Catalog, FilterState};
use std::rc::Rc;
use yew::prelude::*;

/// Outcome of loading the catalog at startup.
#[derive(Clone, PartialEq)]
pub enum CatalogStatus {
    Ready(Rc<Catalog>),
    Failed(AttrValue),
}

impl CatalogStatus {
    #[must_use]
    pub fn catalog(&self) -> Option<&Rc<Catalog>> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&AttrValue> {
        match self {
            Self::Ready(_) => None,
            Self::Failed(message) => Some(message),
        }
    }
}

/// Independent state containers for the storefront. Each handle is replaced
/// wholesale by the pure transitions in `gamestore-core`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: UseStateHandle<CatalogStatus>,
    pub filter: UseStateHandle<FilterState>,
    pub cart: UseStateHandle<Cart>,
    pub cart_open: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        catalog: use_state(crate::app::bootstrap::load_embedded_status),
        filter: use_state(FilterState::default),
        cart: use_state(Cart::default),
        cart_open: use_state(|| false),
    }
}
