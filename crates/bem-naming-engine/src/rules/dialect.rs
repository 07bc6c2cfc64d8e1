use super::NamingRules;

/// How modifier tokens relate to the block/element name.
///
/// Picked once from [`NamingRules::bevis`]; composition and parsing both go
/// through it instead of re-checking the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `block_key_value`, `block__elem_key_value`
    Classic,
    /// `_key_value`, with no block/element prefix
    Bevis,
}

impl Dialect {
    pub fn from_rules(rules: &NamingRules) -> Self {
        if rules.bevis {
            Dialect::Bevis
        } else {
            Dialect::Classic
        }
    }

    /// Appends `delimiter + key [+ mm + value]` to `base` (classic) or starts
    /// a fresh token with it (bevis).
    pub fn compose_modifier_segment(
        self,
        base: String,
        delimiter: &str,
        key: &str,
        value: Option<&str>,
        mm: &str,
    ) -> String {
        let mut out = match self {
            Dialect::Classic => base,
            Dialect::Bevis => String::new(),
        };
        out.push_str(delimiter);
        out.push_str(key);
        if let Some(value) = value {
            out.push_str(mm);
            out.push_str(value);
        }
        out
    }

    /// Strips the modifier prefix from `token`, returning what follows it.
    ///
    /// `name` is the identity token (`block` or `block__elem`) and
    /// `delimiter` the role's modifier delimiter (`bm` or `em`).
    pub fn match_modifier_prefix<'t>(
        self,
        token: &'t str,
        name: &str,
        delimiter: &str,
    ) -> Option<&'t str> {
        match self {
            Dialect::Classic => token.strip_prefix(name)?.strip_prefix(delimiter),
            Dialect::Bevis => token.strip_prefix(delimiter),
        }
    }
}
