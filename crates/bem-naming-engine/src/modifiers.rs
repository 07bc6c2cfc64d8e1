use indexmap::IndexMap;

use crate::{
    compose::ModValue,
    detect::{Identity, detect_bem},
    error::BemError,
    rules::NamingRules,
};

/// Modifier key → value, in the order keys were first seen.
pub type ModifierMap = IndexMap<String, ModValue>;

/// Builds a [`ModifierMap`] from `(key, value)` pairs.
pub fn modifier_map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> ModifierMap
where
    K: Into<String>,
    V: Into<ModValue>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Detects the identity of `tokens` and parses their modifiers.
pub fn parse_mod<S: AsRef<str>>(tokens: &[S], rules: &NamingRules) -> Result<ModifierMap, BemError> {
    let identity = detect_bem(tokens, rules)?;
    Ok(parse_mod_with(&identity, tokens, rules))
}

/// Parses modifiers against an already detected identity.
///
/// Tokens that don't carry the modifier prefix are skipped. A key without a
/// value is a flag; later tokens override earlier ones for the same key.
pub fn parse_mod_with<S: AsRef<str>>(
    identity: &Identity,
    tokens: &[S],
    rules: &NamingRules,
) -> ModifierMap {
    let dialect = rules.dialect();
    let delimiter = identity.modifier_delimiter(rules);
    let mut mods = ModifierMap::new();

    for token in tokens.iter().map(|t| t.as_ref()) {
        if token == identity.name {
            continue;
        }
        let Some(tail) = dialect.match_modifier_prefix(token, &identity.name, delimiter) else {
            continue;
        };
        let Some((key, value)) = split_modifier(tail, &rules.delimiters.mm) else {
            continue;
        };
        mods.insert(key.to_string(), value.map_or(ModValue::Flag(true), ModValue::from));
    }

    mods
}

/// Splits `key[mm value]` off the front of a modifier tail.
///
/// Only the leading run of `[A-Za-z0-9_-]` is considered. Fragments past the
/// value are dropped: `key_value_extra` yields `(key, Some(value))`.
fn split_modifier<'a>(tail: &'a str, mm: &str) -> Option<(&'a str, Option<&'a str>)> {
    let end = tail
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(tail.len());
    let mut fragments = tail[..end].split(mm).filter(|f| !f.is_empty());
    let key = fragments.next()?;
    Some((key, fragments.next()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Delimiters;

    #[test]
    fn test_key_value_modifier() {
        let mods = parse_mod(&["menu", "menu_theme_dark"], &NamingRules::default()).unwrap();
        assert_eq!(mods, modifier_map([("theme", "dark")]));
    }

    #[test]
    fn test_flag_modifier_defaults_to_true() {
        let mods = parse_mod(&["btn", "btn_disabled"], &NamingRules::default()).unwrap();
        assert_eq!(mods.get("disabled"), Some(&ModValue::Flag(true)));
    }

    #[test]
    fn test_unrelated_tokens_are_skipped() {
        let mods =
            parse_mod(&["menu", "clearfix", "js-hook", "menu_open"], &NamingRules::default())
                .unwrap();
        assert_eq!(mods, modifier_map([("open", true)]));
    }

    #[test]
    fn test_later_tokens_win() {
        let mods = parse_mod(
            &["menu", "menu_size_large", "menu_size_small"],
            &NamingRules::default(),
        )
        .unwrap();
        assert_eq!(mods, modifier_map([("size", "small")]));
    }

    #[test]
    fn test_extra_value_fragments_are_truncated() {
        let mods = parse_mod(&["menu", "menu_key_value_extra"], &NamingRules::default()).unwrap();
        assert_eq!(mods, modifier_map([("key", "value")]));
    }

    #[test]
    fn test_tail_stops_at_non_word_characters() {
        let mods = parse_mod(&["menu", "menu_size_large.x"], &NamingRules::default()).unwrap();
        assert_eq!(mods, modifier_map([("size", "large")]));
    }

    #[test]
    fn test_prefix_without_key_is_skipped() {
        let mods = parse_mod(&["menu", "menu_", "menu_.x"], &NamingRules::default()).unwrap();
        assert!(mods.is_empty());
    }

    #[test]
    fn test_element_modifiers_use_em() {
        let rules = NamingRules::new(Delimiters::new("__", "--", "_", "-"));
        let mods = parse_mod(
            &["menu__item", "menu__item_state-open", "menu__item--ignored"],
            &rules,
        )
        .unwrap();
        assert_eq!(mods, modifier_map([("state", "open")]));
    }

    #[test]
    fn test_bevis_modifiers_have_no_prefix() {
        let rules = NamingRules::default().with_bevis(true);
        let mods = parse_mod(&["menu", "_theme_dark", "_open"], &rules).unwrap();
        assert_eq!(mods, modifier_map([("theme", "dark"), ("open", "true")]));
    }

    #[test]
    fn test_bevis_element_modifiers_use_em() {
        let rules = NamingRules::new(Delimiters::new("__", "--", "_", "-")).with_bevis(true);
        let mods = parse_mod(&["card__title", "_size-big", "--ignored"], &rules).unwrap();
        assert_eq!(mods, modifier_map([("size", "big")]));
    }

    #[test]
    fn test_bevis_block_modifiers_use_bm() {
        let rules = NamingRules::new(Delimiters::new("__", "--", "_", "-")).with_bevis(true);
        let mods = parse_mod(&["card", "--size-big", "_ignored"], &rules).unwrap();
        assert_eq!(mods, modifier_map([("size", "big")]));
    }

    #[test]
    fn test_detection_errors_propagate() {
        assert!(matches!(
            parse_mod(&["a_b_c-d"], &NamingRules::default()),
            Err(BemError::Parse { .. })
        ));
    }
}
