#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod game;
pub mod i18n;
pub mod pages;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // <html lang> must match the string table before the first render
    crate::i18n::set_lang(&crate::i18n::current_lang());
    yew::Renderer::<app::App>::new().render();
}
