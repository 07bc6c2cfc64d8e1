//! # BEM Detection
//!
//! Recovers which block or element a node represents from its class tokens.
//!
//! 1. The first token containing no delimiter at all is the block.
//! 2. Failing that, the first token that is not modifier-shaped for `bm` or
//!    `em` is the element. `be` and `mm` are ignored here since a hyphen-like
//!    delimiter may appear inside names.
//!
//! Token order decides ties; there is no further disambiguation.

mod shape;

pub use shape::is_modifier_shaped;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    compose::{ClassNameParams, ModValue, compose_class_name},
    error::BemError,
    rules::NamingRules,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BemRole {
    Block,
    Element,
}

/// A node's detected BEM identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "type")]
    pub kind: BemRole,
    /// The class token the identity was read from.
    pub name: String,
    pub block_name: String,
    /// Only set for elements.
    pub element_name: Option<String>,
}

impl Identity {
    /// `bm` for blocks, `em` for elements.
    pub fn modifier_delimiter<'r>(&self, rules: &'r NamingRules) -> &'r str {
        match self.kind {
            BemRole::Block => &rules.delimiters.bm,
            BemRole::Element => &rules.delimiters.em,
        }
    }

    /// Composes the class token for one modifier of this block or element.
    pub fn modifier_class(&self, key: &str, value: Option<&ModValue>, rules: &NamingRules) -> String {
        let params = ClassNameParams {
            block: Some(&self.block_name),
            element: self.element_name.as_deref(),
            mod_key: Some(key),
            mod_value: value,
        };
        compose_class_name(&params, rules)
    }
}

/// Detects the block or element a set of class tokens belongs to.
pub fn detect_bem<S: AsRef<str>>(tokens: &[S], rules: &NamingRules) -> Result<Identity, BemError> {
    rules.validate()?;
    let dms = &rules.delimiters;
    let classes: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();

    let (kind, name) = if let Some(&name) = classes
        .iter()
        .find(|cls| dms.all().iter().all(|d| !cls.contains(*d)))
    {
        (BemRole::Block, name)
    } else if let Some(&name) = classes.iter().find(|cls| {
        ![dms.bm.as_str(), dms.em.as_str()]
            .iter()
            .any(|d| is_modifier_shaped(cls, d))
    }) {
        (BemRole::Element, name)
    } else {
        return Err(BemError::Parse {
            classes: classes.iter().map(|c| c.to_string()).collect(),
        });
    };

    let block_name = name.find(dms.be.as_str()).map_or(name, |i| &name[..i]);
    let element_name = match kind {
        BemRole::Block => None,
        BemRole::Element => {
            let prefix = format!("{block_name}{}", dms.be);
            Some(name.strip_prefix(&prefix).unwrap_or(name).to_string())
        }
    };

    debug!("detected {kind:?} `{name}` (block `{block_name}`)");

    Ok(Identity {
        kind,
        name: name.to_string(),
        block_name: block_name.to_string(),
        element_name,
    })
}
