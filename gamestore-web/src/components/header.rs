use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Query currently applied to the catalog
    pub search_query: AttrValue,
    pub on_search: Callback<String>,
    pub cart_count: u32,
    pub on_open_cart: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let input_ref = use_node_ref();

    // The query is only applied when the form is submitted.
    let on_submit = {
        let cb = p.on_search.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let open_cart = {
        let cb = p.on_open_cart.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let count = p.cart_count.to_string();
    let cart_label = {
        let mut args = BTreeMap::new();
        args.insert("count", count.as_str());
        format!("{}. {}", t("header.cart"), tr("header.cart_count", Some(&args)))
    };

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <h1 class="logo">{ t("app.title") }</h1>
                <form class="search" role="search" onsubmit={on_submit}>
                    <label for="search-input" class="sr-only">{ t("header.search_label") }</label>
                    <input
                        id="search-input"
                        type="search"
                        ref={input_ref}
                        value={p.search_query.clone()}
                        placeholder={t("header.search_placeholder")}
                    />
                    <button type="submit" class="sr-only">{ t("header.search_submit") }</button>
                </form>
                <div class="header-right">
                    <button id="cart-open-btn" type="button" class="cart-button" onclick={open_cart} aria-label={cart_label}>
                        <span aria-hidden="true">{ "🛒" }</span>
                        if p.cart_count > 0 {
                            <span class="cart-badge">{ count.clone() }</span>
                        }
                    </button>
                </div>
            </div>
        </header>
    }
}
