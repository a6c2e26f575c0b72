#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod state;
pub mod view;

pub use state::{AppState, CatalogStatus};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap();

    let navigator = use_navigator();
    let route = use_route::<Route>();

    view::render_app(&app_state, route.as_ref(), navigator)
}
