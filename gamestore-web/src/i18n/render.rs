use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

/// CLDR cardinal category for Russian; English only distinguishes "one".
fn host_plural_category(lang: &str, count: f64) -> &'static str {
    if count.abs() < f64::EPSILON {
        return "zero";
    }
    if lang != "ru" || count.fract() != 0.0 {
        return if (count - 1.0).abs() < f64::EPSILON {
            "one"
        } else {
            "other"
        };
    }
    let n = count.abs();
    let (m10, m100) = (n % 10.0, n % 100.0);
    if (m10 - 1.0).abs() < f64::EPSILON && (m100 - 11.0).abs() >= f64::EPSILON {
        "one"
    } else if (2.0..=4.0).contains(&m10) && !(12.0..=14.0).contains(&m100) {
        "few"
    } else {
        "many"
    }
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = {
            let arr = Array::new();
            arr.push(&wasm_bindgen::JsValue::from_str(lang));
            arr
        };
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        rules
            .select(count)
            .as_string()
            .unwrap_or_else(|| host_plural_category(lang, count).to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        host_plural_category(lang, count).to_string()
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let count = args
                .and_then(|m| m.get("count"))
                .and_then(|c| c.parse::<f64>().ok());
            let selected = count.and_then(|count| {
                let category = plural_category(lang, count);
                // Intl never reports "zero" for en/ru, so check for an explicit zero form first.
                let zero = (count.abs() < f64::EPSILON).then(|| map.get("zero")).flatten();
                zero.or_else(|| map.get(&category))
            });
            selected
                .or_else(|| map.get("other"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}");
            let ph2 = format!("{{{k}}}");
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key)
                    .and_then(|v| render_value(v, "en", args))
            })
    })
}

/// Translate a key to the current language
///
/// Falls back to English, then to the key itself, when the key is missing.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
/// A `count` argument selects the plural form when the entry is a plural table.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
