use crate::game::{FilterState, Genre, SortKey};
use crate::i18n::t;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub filter: FilterState,
    pub on_toggle_genre: Callback<Genre>,
    pub on_sort_change: Callback<SortKey>,
    pub on_clear: Callback<()>,
}

#[function_component(GameFilters)]
pub fn game_filters(p: &Props) -> Html {
    let on_sort = {
        let cb = p.on_sort_change.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            else {
                return;
            };
            match sel.value().parse::<SortKey>() {
                Ok(sort) => cb.emit(sort),
                Err(err) => log::warn!("{err}"),
            }
        })
    };
    let on_clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let genres = Genre::ALL.iter().map(|&genre| {
        let on_change = {
            let cb = p.on_toggle_genre.clone();
            Callback::from(move |_: Event| cb.emit(genre))
        };
        let id = format!("genre-{}", genre.id());
        html! {
            <li key={genre.id()}>
                <input
                    type="checkbox"
                    id={id.clone()}
                    checked={p.filter.genres.contains(genre)}
                    onchange={on_change}
                />
                <label for={id}>{ t(&genre.label_key()) }</label>
            </li>
        }
    });

    html! {
        <aside class="filters" aria-labelledby="filters-title">
            <div class="filters-head">
                <h2 id="filters-title">{ t("filters.title") }</h2>
                <button
                    id="filters-clear-btn"
                    type="button"
                    onclick={on_clear}
                    disabled={!p.filter.has_active_filters()}
                >
                    { t("filters.clear") }
                </button>
            </div>
            <label for="sort-select">{ t("filters.sort_label") }</label>
            <select id="sort-select" onchange={on_sort}>
                { for SortKey::ALL.iter().map(|&sort| html! {
                    <option value={sort.id()} selected={sort == p.filter.sort}>
                        { t(&sort.label_key()) }
                    </option>
                }) }
            </select>
            <fieldset class="genres">
                <legend>{ t("filters.genres_label") }</legend>
                <ul>{ for genres }</ul>
            </fieldset>
        </aside>
    }
}
