#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const RUBLE_SIGN: &str = "₽";

#[cfg(target_arch = "wasm32")]
fn number_format(opts: &Object) -> Intl::NumberFormat {
    with_bundle(|bundle| {
        let locales = js_sys::Array::new();
        locales.push(&JsValue::from_str(&bundle.lang));
        Intl::NumberFormat::new(&locales, opts)
    })
}

/// Format a percentage value for display
#[must_use]
pub fn fmt_pct(pct: u8) -> String {
    fmt_number(f64::from(pct))
}

/// Format a number using the current locale via Intl
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let nf = number_format(&Object::new());
        let format_fn: Function = nf.format();
        format_fn
            .call1(&nf, &JsValue::from_f64(num))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| num.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        num.to_string()
    }
}

/// Format a star rating with one decimal place
#[must_use]
pub fn fmt_rating(rating: f32) -> String {
    fmt_number((f64::from(rating) * 10.0).round() / 10.0)
}

/// Format a ruble price given in kopecks
///
/// Whole amounts drop the fractional part, matching how catalog prices are
/// printed on the cards.
#[must_use]
pub fn fmt_currency(minor: i64) -> String {
    fn fallback_rub(minor: i64) -> String {
        let sign = if minor < 0 { "-" } else { "" };
        let abs = minor.unsigned_abs();
        let whole = abs / 100;
        let frac = abs % 100;
        if frac == 0 {
            format!("{sign}{whole} {RUBLE_SIGN}")
        } else {
            format!("{sign}{whole}.{frac:02} {RUBLE_SIGN}")
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        let Some(amount) = i32::try_from(minor).ok().map(|v| f64::from(v) / 100.0) else {
            return fallback_rub(minor);
        };
        let opts = Object::new();
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("style"),
            &JsValue::from_str("currency"),
        );
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("currency"),
            &JsValue::from_str("RUB"),
        );
        if minor % 100 == 0 {
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("minimumFractionDigits"),
                &JsValue::from_f64(0.0),
            );
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("maximumFractionDigits"),
                &JsValue::from_f64(0.0),
            );
        }
        let nf = number_format(&opts);
        nf.format()
            .call1(&nf, &JsValue::from_f64(amount))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| fallback_rub(minor))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        fallback_rub(minor)
    }
}
