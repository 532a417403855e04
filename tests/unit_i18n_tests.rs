//! # I18n Unit Tests / I18n 单元测试
//!
//! This module tests locale selection and checks that every locale file
//! carries the same set of translation keys and placeholders.
//!
//! 此模块测试语言环境的选择，并检查每个语言文件
//! 是否包含相同的翻译键和占位符。

use casework::init_locale;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Flattens a locale file into `section.key -> text`.
fn load_locale(name: &str) -> BTreeMap<String, String> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("locales")
        .join(format!("{name}.toml"));
    let table: toml::Table = toml::from_str(&fs::read_to_string(path).unwrap()).unwrap();

    let mut flat = BTreeMap::new();
    for (key, value) in table {
        match value {
            toml::Value::String(text) => {
                flat.insert(key, text);
            }
            toml::Value::Table(section) => {
                for (inner, value) in section {
                    let text = value.as_str().unwrap().to_string();
                    flat.insert(format!("{key}.{inner}"), text);
                }
            }
            other => panic!("unexpected value for {key}: {other:?}"),
        }
    }
    flat
}

fn placeholders(text: &str) -> Vec<&str> {
    let mut found: Vec<&str> = text
        .split("%{")
        .skip(1)
        .filter_map(|rest| rest.split_once('}').map(|(name, _)| name))
        .collect();
    found.sort();
    found
}

#[cfg(test)]
mod locale_selection_tests {
    use super::*;

    #[test]
    fn test_exact_locale_is_kept() {
        assert_eq!(init_locale(Some("en")), "en");
        assert_eq!(init_locale(Some("zh-CN")), "zh-CN");
    }

    #[test]
    fn test_region_falls_back_to_language() {
        assert_eq!(init_locale(Some("en-GB")), "en");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(init_locale(Some("fr-FR")), "en");
        assert_eq!(init_locale(Some("")), "en");
    }
}

#[cfg(test)]
mod locale_file_tests {
    use super::*;

    #[test]
    fn test_locales_have_the_same_keys() {
        let en = load_locale("en");
        let zh = load_locale("zh-CN");

        let en_keys: Vec<_> = en.keys().collect();
        let zh_keys: Vec<_> = zh.keys().collect();
        assert_eq!(en_keys, zh_keys);
    }

    #[test]
    fn test_translations_keep_placeholders() {
        let en = load_locale("en");
        let zh = load_locale("zh-CN");

        for (key, text) in &en {
            assert_eq!(placeholders(text), placeholders(&zh[key]), "placeholders differ for {key}");
        }
    }

    #[test]
    fn test_case_messages_carry_the_case_id() {
        let en = load_locale("en");
        for key in ["case.created", "case.prep_passed", "case.passed", "case.cleaned", "case.stopped", "case.fault"] {
            assert!(placeholders(&en[key]).contains(&"id"), "{key} has no id");
        }
    }
}
