use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::NamingRules;

/// A modifier value: a boolean flag or a textual value.
///
/// The text `"true"` is the flag placeholder, so converting it yields
/// `Flag(true)`; a parsed `btn_disabled` and a requested `disabled: true`
/// describe the same state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged, from = "RawModValue")]
pub enum ModValue {
    Flag(bool),
    Value(String),
}

/// Wire shape of [`ModValue`]; deserialization goes through the `From`
/// impls so `"true"` still becomes `Flag(true)`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawModValue {
    Flag(bool),
    Value(String),
}

impl From<RawModValue> for ModValue {
    fn from(raw: RawModValue) -> Self {
        match raw {
            RawModValue::Flag(flag) => ModValue::from(flag),
            RawModValue::Value(value) => ModValue::from(value),
        }
    }
}

impl ModValue {
    pub fn is_flag_set(&self) -> bool {
        matches!(self, ModValue::Flag(true))
    }
}

impl From<bool> for ModValue {
    fn from(flag: bool) -> Self {
        ModValue::Flag(flag)
    }
}

impl From<&str> for ModValue {
    fn from(value: &str) -> Self {
        match value {
            "true" => ModValue::Flag(true),
            _ => ModValue::Value(value.to_string()),
        }
    }
}

impl From<String> for ModValue {
    fn from(value: String) -> Self {
        if value == "true" {
            ModValue::Flag(true)
        } else {
            ModValue::Value(value)
        }
    }
}

impl fmt::Display for ModValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModValue::Flag(flag) => write!(f, "{flag}"),
            ModValue::Value(value) => f.write_str(value),
        }
    }
}

/// What to compose: any of block, element and one modifier.
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassNameParams<'a> {
    pub block: Option<&'a str>,
    pub element: Option<&'a str>,
    pub mod_key: Option<&'a str>,
    pub mod_value: Option<&'a ModValue>,
}

impl<'a> ClassNameParams<'a> {
    pub fn block(block: &'a str) -> Self {
        Self {
            block: Some(block),
            ..Self::default()
        }
    }

    pub fn element(block: &'a str, element: &'a str) -> Self {
        Self {
            block: Some(block),
            element: Some(element),
            ..Self::default()
        }
    }

    pub fn with_modifier(mut self, key: &'a str, value: Option<&'a ModValue>) -> Self {
        self.mod_key = Some(key);
        self.mod_value = value;
        self
    }
}

/// Composes a single class token.
///
/// An empty string means no class applies: the modifier is `false` or has no
/// value.
pub fn compose_class_name(params: &ClassNameParams<'_>, rules: &NamingRules) -> String {
    let dms = &rules.delimiters;
    let element = params.element.filter(|e| !e.is_empty());

    let mut base = String::new();
    if let Some(block) = params.block {
        base.push_str(block);
    }
    if let Some(element) = element {
        base.push_str(&dms.be);
        base.push_str(element);
    }

    let Some(key) = params.mod_key.filter(|k| !k.is_empty()) else {
        return base;
    };
    let delimiter = if element.is_some() { &dms.em } else { &dms.bm };

    let value = match params.mod_value {
        None | Some(ModValue::Flag(false)) => return String::new(),
        Some(ModValue::Flag(true)) if rules.logic => None,
        Some(value) => Some(value.to_string()),
    };

    rules
        .dialect()
        .compose_modifier_segment(base, delimiter, key, value.as_deref(), &dms.mm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{modifiers::ModifierMap, rules::Delimiters};
    use rstest::rstest;

    fn rules() -> NamingRules {
        NamingRules::new(Delimiters::new("__", "_", "_", "_"))
    }

    #[test]
    fn test_block_only() {
        assert_eq!(compose_class_name(&ClassNameParams::block("menu"), &rules()), "menu");
    }

    #[test]
    fn test_element_only() {
        let params = ClassNameParams::element("menu", "item");
        assert_eq!(compose_class_name(&params, &rules()), "menu__item");
    }

    #[test]
    fn test_empty_element_is_ignored() {
        let params = ClassNameParams::element("menu", "");
        assert_eq!(compose_class_name(&params, &rules()), "menu");
    }

    #[rstest]
    #[case(ModValue::from("dark"), "menu_theme_dark")]
    #[case(ModValue::from(true), "menu_theme")]
    #[case(ModValue::from("true"), "menu_theme")]
    #[case(ModValue::from("false"), "menu_theme_false")]
    #[case(ModValue::from(false), "")]
    fn test_block_modifier(#[case] value: ModValue, #[case] expected: &str) {
        let params = ClassNameParams::block("menu").with_modifier("theme", Some(&value));
        assert_eq!(compose_class_name(&params, &rules()), expected);
    }

    #[test]
    fn test_missing_value_yields_no_class() {
        let params = ClassNameParams::block("menu").with_modifier("theme", None);
        assert_eq!(compose_class_name(&params, &rules()), "");
    }

    #[test]
    fn test_element_modifier_uses_em() {
        let dms = Delimiters::new("__", "--", "_", "-");
        let value = ModValue::from("on");
        let params = ClassNameParams::element("menu", "item").with_modifier("state", Some(&value));
        assert_eq!(
            compose_class_name(&params, &NamingRules::new(dms)),
            "menu__item_state-on"
        );
    }

    #[test]
    fn test_flag_without_logic_keeps_value() {
        let value = ModValue::from(true);
        let params = ClassNameParams::block("btn").with_modifier("disabled", Some(&value));
        assert_eq!(
            compose_class_name(&params, &rules().with_logic(false)),
            "btn_disabled_true"
        );
    }

    #[test]
    fn test_flag_with_logic_has_no_value_segment() {
        let on = ModValue::from(true);
        let off = ModValue::from(false);
        let r = rules();
        assert_eq!(
            compose_class_name(&ClassNameParams::block("btn").with_modifier("disabled", Some(&on)), &r),
            "btn_disabled"
        );
        assert_eq!(
            compose_class_name(&ClassNameParams::block("btn").with_modifier("disabled", Some(&off)), &r),
            ""
        );
    }

    #[test]
    fn test_bevis_modifier_omits_prefix() {
        let value = ModValue::from("open");
        let r = rules().with_bevis(true);
        let block = ClassNameParams::block("menu").with_modifier("state", Some(&value));
        let element = ClassNameParams::element("menu", "item").with_modifier("state", Some(&value));
        assert_eq!(compose_class_name(&block, &r), "_state_open");
        assert_eq!(compose_class_name(&element, &r), "_state_open");
    }

    #[test]
    fn test_bevis_without_modifier_keeps_base() {
        let r = rules().with_bevis(true);
        assert_eq!(
            compose_class_name(&ClassNameParams::element("menu", "item"), &r),
            "menu__item"
        );
    }

    #[test]
    fn test_string_true_normalizes_to_flag() {
        assert_eq!(ModValue::from("true"), ModValue::Flag(true));
        assert_eq!(ModValue::from("true".to_string()), ModValue::Flag(true));
        assert_eq!(ModValue::from("dark"), ModValue::Value("dark".to_string()));
        assert_eq!(ModValue::Flag(true).to_string(), "true");
    }

    #[test]
    fn test_deserialized_string_true_normalizes_to_flag() {
        let mods: ModifierMap =
            toml::from_str("open = \"true\"\nhidden = false\nsize = \"large\"").unwrap();
        assert_eq!(mods.get("open"), Some(&ModValue::Flag(true)));
        assert_eq!(mods.get("hidden"), Some(&ModValue::Flag(false)));
        assert_eq!(mods.get("size"), Some(&ModValue::Value("large".to_string())));
    }
}
