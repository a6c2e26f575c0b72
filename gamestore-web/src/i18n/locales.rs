use serde_json::Value;

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("ru", include_str!("../../i18n/ru.json")),
];

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_TABLE.iter().any(|(code, _)| *code == lang)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    // Plural tables are leaves; their categories differ per language.
                    if child.get("other").is_some() {
                        out.push(path);
                    } else {
                        leaf_keys(child, &path, out);
                    }
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn every_locale_parses_and_matches_english_keys() {
        let mut english = Vec::new();
        leaf_keys(&load_translations("en").unwrap(), "", &mut english);
        for (code, _) in LOCALE_TABLE {
            assert!(is_supported(code));
            let mut keys = Vec::new();
            leaf_keys(&load_translations(code).unwrap(), "", &mut keys);
            assert_eq!(keys, english, "locale {code} key set");
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert!(!is_supported("xx"));
        assert_eq!(load_translations("xx"), load_translations("en"));
    }
}
