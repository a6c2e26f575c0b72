use crate::game::{CartLine, CartSummary, GameId};
use crate::i18n::{fmt_currency, t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub lines: Vec<CartLine>,
    pub summary: CartSummary,
    pub on_close: Callback<()>,
    pub on_remove: Callback<GameId>,
    pub on_update_quantity: Callback<(GameId, i64)>,
}

fn titled(key: &str, title: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert("title", title);
    tr(key, Some(&args))
}

fn render_line(line: &CartLine, p: &Props) -> Html {
    let id = line.id();
    let quantity = i64::from(line.quantity);
    let decrease = {
        let cb = p.on_update_quantity.clone();
        Callback::from(move |_| cb.emit((id, quantity - 1)))
    };
    let increase = {
        let cb = p.on_update_quantity.clone();
        Callback::from(move |_| cb.emit((id, quantity + 1)))
    };
    let remove = {
        let cb = p.on_remove.clone();
        Callback::from(move |_| cb.emit(id))
    };
    let title = line.game.title.as_str();
    let unit_price = (line.quantity > 1).then(|| {
        let price = fmt_currency(line.game.price_minor);
        let mut args = BTreeMap::new();
        args.insert("price", price.as_str());
        tr("cart.each", Some(&args))
    });

    html! {
        <li class="cart-line" key={id} data-game-id={id.to_string()}>
            <img src={line.game.image.clone()} alt="" />
            <div class="cart-line__info">
                <h3>{ title }</h3>
                <span class="cart-line__genre">{ t(&line.game.genre.label_key()) }</span>
                <p class="price">
                    <strong class="line-total">{ fmt_currency(line.total_minor()) }</strong>
                    if let Some(unit_price) = unit_price {
                        { " " }
                        <span class="unit-price">{ unit_price }</span>
                    }
                </p>
                <div class="cart-line__qty">
                    <button type="button" onclick={decrease} aria-label={titled("cart.decrease", title)}>{ "−" }</button>
                    <span class="qty">{ line.quantity.to_string() }</span>
                    <button type="button" onclick={increase} aria-label={titled("cart.increase", title)}>{ "+" }</button>
                </div>
            </div>
            <button type="button" class="cart-line__remove" onclick={remove} aria-label={titled("cart.remove", title)}>
                { "✕" }
            </button>
        </li>
    }
}

#[function_component(ShoppingCart)]
pub fn shopping_cart(p: &Props) -> Html {
    if !p.open {
        return Html::default();
    }
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let close_on_escape = {
        let cb = p.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                cb.emit(());
            }
        })
    };

    html! {
        <div class="cart-backdrop" onkeydown={close_on_escape}>
            <div class="cart-overlay" onclick={close.clone()}></div>
            <aside class="cart-drawer" role="dialog" aria-modal="true" aria-labelledby="cart-title">
                <div class="cart-head">
                    <h2 id="cart-title">{ t("cart.title") }</h2>
                    <button id="cart-close-btn" type="button" onclick={close} aria-label={t("cart.close")}>{ "✕" }</button>
                </div>
                if p.lines.is_empty() {
                    <p class="cart-empty">{ t("cart.empty") }</p>
                } else {
                    <ul class="cart-lines">
                        { for p.lines.iter().map(|line| render_line(line, p)) }
                    </ul>
                    <div class="cart-foot">
                        <p class="cart-total">
                            <span>{ t("cart.total") }</span>
                            { " " }
                            <strong>{ fmt_currency(p.summary.total_minor) }</strong>
                        </p>
                        <button id="checkout-btn" type="button" class="checkout-btn">{ t("cart.checkout") }</button>
                    </div>
                }
            </aside>
        </div>
    }
}
