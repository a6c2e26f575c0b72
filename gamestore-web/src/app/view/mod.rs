mod handlers;

pub use handlers::{AppHandlers, results_status};

use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::game_catalog::GameCatalog;
use crate::components::game_filters::GameFilters;
use crate::components::header::Header;
use crate::components::shopping_cart::ShoppingCart;
use crate::game::{Game, visible_games};
use crate::pages::not_found::NotFound;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

fn render_storefront(state: &AppState, handlers: &AppHandlers) -> Html {
    let games: Vec<Game> = state
        .catalog
        .catalog()
        .map(|catalog| {
            visible_games(catalog, &state.filter)
                .iter()
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    let error = state.catalog.error().cloned();

    html! {
        <div class="storefront">
            <GameFilters
                filter={(*state.filter).clone()}
                on_toggle_genre={handlers.genre_toggle.clone()}
                on_sort_change={handlers.sort_change.clone()}
                on_clear={handlers.clear_filters.clone()}
            />
            <GameCatalog {games} {error} on_add={handlers.add_to_cart.clone()} />
        </div>
    }
}

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let main_view = match route {
        Some(Route::Home) => render_storefront(state, &handlers),
        Some(Route::NotFound) | None => html! {
            <NotFound on_go_home={handlers.go_home.clone()} />
        },
    };
    let summary = state.cart.summary();

    html! {
        <>
            <Header
                search_query={AttrValue::from(state.filter.search_query.clone())}
                on_search={handlers.search.clone()}
                cart_count={summary.item_count}
                on_open_cart={handlers.open_cart.clone()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" aria-live="polite"></div>
                { main_view }
                <ShoppingCart
                    open={*state.cart_open}
                    lines={state.cart.lines().to_vec()}
                    {summary}
                    on_close={handlers.close_cart.clone()}
                    on_remove={handlers.remove_from_cart.clone()}
                    on_update_quantity={handlers.update_quantity.clone()}
                />
                <Footer />
            </main>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::use_app_state;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        route: Option<Route>,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        crate::i18n::set_lang("en");
        let state = use_app_state();
        render_app(&state, props.route.as_ref(), None)
    }

    fn render(route: Option<Route>) -> String {
        block_on(LocalServerRenderer::<Harness>::with_props(HarnessProps { route }).render())
    }

    #[test]
    fn home_route_renders_full_catalog() {
        let html = render(Some(Route::Home));
        assert!(html.contains("Games found: 6"));
        assert!(html.contains("Cyberpunk 2077"));
        assert!(html.contains("Gran Turismo 7"));
        assert!(html.contains("filters-title"));
        assert!(!html.contains("cart-drawer"), "cart starts closed");
        assert!(!html.contains("cart-badge"), "cart starts empty");
    }

    #[test]
    fn default_sort_orders_by_rating() {
        let html = render(Some(Route::Home));
        let witcher = html.find("The Witcher 3").unwrap();
        let fifa = html.find("FIFA 24").unwrap();
        assert!(witcher < fifa);
    }

    #[test]
    fn unknown_route_renders_not_found() {
        for route in [Some(Route::NotFound), None] {
            let html = render(route);
            assert!(html.contains("not-found"));
            assert!(!html.contains("catalog-grid"));
        }
    }
}
