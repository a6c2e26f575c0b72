use crate::app::state::CatalogStatus;
use crate::game::WebCatalogSource;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Load the catalog from `source`, turning failures into a displayable status.
#[must_use]
pub fn load_status(source: WebCatalogSource) -> CatalogStatus {
    match crate::game::load_catalog(source) {
        Ok(catalog) => CatalogStatus::Ready(catalog),
        Err(err) => CatalogStatus::Failed(err.to_string().into()),
    }
}

/// Load the catalog bundled with the site.
#[must_use]
pub fn load_embedded_status() -> CatalogStatus {
    load_status(WebCatalogSource::embedded())
}

/// Sync document-level metadata once the app has mounted.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap() {
    use_effect_with((), |()| {
        let lang = crate::i18n::current_lang();
        let doc = crate::dom::document();
        doc.set_title(&crate::i18n::t("app.title"));
        if let Some(el) = doc.document_element() {
            let _ = el.set_attribute("lang", &lang);
        }
        log::debug!("storefront mounted with language {lang}");
    });
}
