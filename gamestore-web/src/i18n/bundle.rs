use crate::i18n::locales::{is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

const DEFAULT_LANG: &str = "ru";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> =
        RefCell::new(build_bundle(DEFAULT_LANG).unwrap_or_else(fallback_bundle));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Swap the active string table.
///
/// Unknown codes are ignored. In the browser the `<html lang>` attribute is
/// updated to match.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("ignoring unsupported language {lang:?}");
        return;
    };
    replace_bundle(bundle);
    log::debug!("language set to {lang}");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().document_element() {
            let _ = el.set_attribute("lang", lang);
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_starts_in_russian() {
        let bundle = build_bundle(DEFAULT_LANG).expect("default bundle loads");
        assert_eq!(bundle.lang, "ru");
    }

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle("ru").expect("bundle should load");
        assert_eq!(bundle.lang, "ru");
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
    }

    #[test]
    fn build_bundle_rejects_unknown_locale() {
        assert!(build_bundle("xx").is_none());
    }

    #[test]
    fn fallback_bundle_defaults_to_en() {
        let bundle = fallback_bundle();
        assert_eq!(bundle.lang, "en");
        assert!(bundle.translations.is_object());
    }

    #[test]
    fn set_lang_ignores_unknown_codes() {
        set_lang("en");
        set_lang("xx");
        assert_eq!(current_lang(), "en");
        set_lang("ru");
        assert_eq!(current_lang(), "ru");
    }
}
