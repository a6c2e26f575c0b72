use crate::game::{Game, GameId};
use crate::i18n::{fmt_currency, fmt_pct, fmt_rating, t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub game: Game,
    pub on_add: Callback<GameId>,
}

#[function_component(GameCard)]
pub fn game_card(p: &Props) -> Html {
    let game = &p.game;
    let on_buy = {
        let cb = p.on_add.clone();
        let id = game.id;
        Callback::from(move |_| cb.emit(id))
    };

    let add_label = {
        let mut args = BTreeMap::new();
        args.insert("title", game.title.as_str());
        tr("card.add", Some(&args))
    };
    let rating = fmt_rating(game.rating);
    let rating_label = {
        let mut args = BTreeMap::new();
        args.insert("rating", rating.as_str());
        tr("card.rating", Some(&args))
    };
    let discount = game.discount_pct().map(|pct| {
        let pct = fmt_pct(pct);
        let mut args = BTreeMap::new();
        args.insert("pct", pct.as_str());
        tr("card.discount", Some(&args))
    });

    html! {
        <article class="game-card" data-game-id={game.id.to_string()}>
            <div class="game-card__media">
                <img src={game.image.clone()} alt={game.title.clone()} loading="lazy" />
                if let Some(discount) = discount {
                    <span class="game-card__discount">{ discount }</span>
                }
            </div>
            <div class="game-card__body">
                <h3 class="game-card__title">{ game.title.clone() }</h3>
                <p class="game-card__meta">
                    <span class="game-card__genre">{ t(&game.genre.label_key()) }</span>
                    <span class="game-card__rating" aria-label={rating_label}>
                        <span aria-hidden="true">{ "★ " }</span>{ rating }
                    </span>
                </p>
                <div class="game-card__footer">
                    <p class="game-card__price">
                        <span class="price">{ fmt_currency(game.price_minor) }</span>
                        if let Some(original) = game.original_price_minor.filter(|o| *o > game.price_minor) {
                            <s class="price price--original">{ fmt_currency(original) }</s>
                        }
                    </p>
                    <button type="button" class="buy-btn" onclick={on_buy} aria-label={add_label}>
                        { t("card.buy") }
                    </button>
                </div>
            </div>
        </article>
    }
}
