use crate::components::game_card::GameCard;
use crate::game::{Game, GameId};
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Games to show, already filtered and ordered
    pub games: Vec<Game>,
    /// Load failure to report instead of the grid
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_add: Callback<GameId>,
}

#[function_component(GameCatalog)]
pub fn game_catalog(p: &Props) -> Html {
    if let Some(error) = &p.error {
        let mut args = BTreeMap::new();
        args.insert("error", error.as_str());
        return html! {
            <section class="catalog catalog--error" role="alert">
                <h2>{ t("catalog.error_title") }</h2>
                <p>{ tr("catalog.error", Some(&args)) }</p>
            </section>
        };
    }

    let count = p.games.len().to_string();
    let found = {
        let mut args = BTreeMap::new();
        args.insert("count", count.as_str());
        tr("catalog.found", Some(&args))
    };

    html! {
        <section class="catalog" aria-labelledby="catalog-title">
            <div class="catalog-head">
                <h2 id="catalog-title">{ t("catalog.title") }</h2>
                <p class="catalog-count">{ found }</p>
            </div>
            if p.games.is_empty() {
                <p class="catalog-empty">{ t("catalog.empty") }</p>
            } else {
                <div class="catalog-grid">
                    { for p.games.iter().map(|game| html! {
                        <GameCard key={game.id} game={game.clone()} on_add={p.on_add.clone()} />
                    }) }
                </div>
            }
        </section>
    }
}
