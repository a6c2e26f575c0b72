use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn build_go_home(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        } else {
            log::warn!("no navigator available for home route");
        }
    })
}
