use crate::app::state::{AppState, CatalogStatus};
use crate::game::{FilterAction, FilterState, Genre, SortKey, visible_games};
use std::collections::BTreeMap;
use yew::prelude::*;

/// Screen reader announcement for the number of matching games.
#[must_use]
pub fn results_status(count: usize) -> String {
    let count = count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    crate::i18n::tr("status.results", Some(&args))
}

fn dispatch(
    filter: &UseStateHandle<FilterState>,
    catalog: &UseStateHandle<CatalogStatus>,
    action: FilterAction,
) {
    log::debug!("filter action {action:?}");
    let next = filter.apply(action);
    if next == **filter {
        return;
    }
    if let Some(catalog) = catalog.catalog() {
        crate::a11y::set_status(&results_status(visible_games(catalog, &next).len()));
    }
    filter.set(next);
}

pub fn build_search(state: &AppState) -> Callback<String> {
    let filter = state.filter.clone();
    let catalog = state.catalog.clone();
    Callback::from(move |query: String| {
        dispatch(&filter, &catalog, FilterAction::Search(query));
    })
}

pub fn build_genre_toggle(state: &AppState) -> Callback<Genre> {
    let filter = state.filter.clone();
    let catalog = state.catalog.clone();
    Callback::from(move |genre: Genre| {
        dispatch(&filter, &catalog, FilterAction::ToggleGenre(genre));
    })
}

pub fn build_sort_change(state: &AppState) -> Callback<SortKey> {
    let filter = state.filter.clone();
    let catalog = state.catalog.clone();
    Callback::from(move |sort: SortKey| {
        dispatch(&filter, &catalog, FilterAction::Sort(sort));
    })
}

pub fn build_clear_filters(state: &AppState) -> Callback<()> {
    let filter = state.filter.clone();
    let catalog = state.catalog.clone();
    Callback::from(move |()| {
        dispatch(&filter, &catalog, FilterAction::Clear);
    })
}
