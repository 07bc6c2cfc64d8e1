//! # Naming Rules
//!
//! The delimiter grammar and dialect switches every other module reads.
//! Rules are plain data: build them once per consuming context and share
//! them by reference.

mod dialect;

pub use dialect::Dialect;

use serde::{Deserialize, Serialize};

use crate::error::BemError;

/// The four delimiters of a BEM grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    /// Block → element, e.g. `menu__item`.
    pub be: String,
    /// Block → modifier, e.g. `menu_theme`.
    pub bm: String,
    /// Element → modifier, e.g. `menu__item_active`.
    pub em: String,
    /// Modifier key → modifier value, e.g. `theme_dark`.
    pub mm: String,
}

impl Delimiters {
    pub fn new(
        be: impl Into<String>,
        bm: impl Into<String>,
        em: impl Into<String>,
        mm: impl Into<String>,
    ) -> Self {
        Self {
            be: be.into(),
            bm: bm.into(),
            em: em.into(),
            mm: mm.into(),
        }
    }

    /// All delimiters in `be`, `bm`, `em`, `mm` order.
    pub fn all(&self) -> [&str; 4] {
        [&self.be, &self.bm, &self.em, &self.mm]
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new("__", "_", "_", "_")
    }
}

/// Configuration for composing and parsing class names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingRules {
    /// Modifier tokens omit the block/element prefix (`_theme_dark`).
    pub bevis: bool,
    /// Boolean `true` modifiers render as bare flags (`btn_disabled`).
    pub logic: bool,
    pub delimiters: Delimiters,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            bevis: false,
            logic: true,
            delimiters: Delimiters::default(),
        }
    }
}

impl NamingRules {
    pub fn new(delimiters: Delimiters) -> Self {
        Self {
            delimiters,
            ..Self::default()
        }
    }

    pub fn with_bevis(mut self, bevis: bool) -> Self {
        self.bevis = bevis;
        self
    }

    pub fn with_logic(mut self, logic: bool) -> Self {
        self.logic = logic;
        self
    }

    pub fn dialect(&self) -> Dialect {
        Dialect::from_rules(self)
    }

    /// Checks that the block-element delimiter can be told apart from the
    /// block-modifier and modifier-value delimiters.
    ///
    /// Detection cannot proceed otherwise.
    pub fn validate(&self) -> Result<(), BemError> {
        let dms = &self.delimiters;
        if dms.be == dms.bm || dms.be == dms.mm {
            return Err(BemError::Config(
                "Block-Element delimiter must be unique".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_classic_with_logic() {
        let rules = NamingRules::default();
        assert_eq!(rules.delimiters.all(), ["__", "_", "_", "_"]);
        assert!(!rules.bevis);
        assert!(rules.logic);
        assert_eq!(rules.dialect(), Dialect::Classic);
    }

    #[test]
    fn test_default_rules_validate() {
        assert!(NamingRules::default().validate().is_ok());
    }

    #[test]
    fn test_be_equal_to_bm_is_rejected() {
        let rules = NamingRules::new(Delimiters::new("_", "_", "__", "-"));
        assert!(matches!(rules.validate(), Err(BemError::Config(_))));
    }

    #[test]
    fn test_be_equal_to_mm_is_rejected() {
        let rules = NamingRules::new(Delimiters::new("-", "_", "_", "-"));
        assert!(matches!(rules.validate(), Err(BemError::Config(_))));
    }

    #[test]
    fn test_shared_modifier_delimiters_are_allowed() {
        let rules = NamingRules::new(Delimiters::new("__", "--", "--", "--"));
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_builder_switches_dialect() {
        let rules = NamingRules::default().with_bevis(true).with_logic(false);
        assert_eq!(rules.dialect(), Dialect::Bevis);
        assert!(!rules.logic);
    }
}
