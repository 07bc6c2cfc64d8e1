use log::trace;

use crate::{
    detect::{Identity, detect_bem},
    error::BemError,
    host::ClassList,
    modifiers::{ModifierMap, parse_mod_with},
    rules::NamingRules,
};

/// What the engine remembers about a node between modifier operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementState {
    pub identity: Identity,
    pub modifiers: ModifierMap,
}

impl ElementState {
    /// Detects the node's identity and reads its current modifiers.
    pub fn capture<N: ClassList + ?Sized>(node: &N, rules: &NamingRules) -> Result<Self, BemError> {
        let tokens = node.class_tokens();
        let identity = detect_bem(&tokens, rules)?;
        let modifiers = parse_mod_with(&identity, &tokens, rules);
        Ok(Self {
            identity,
            modifiers,
        })
    }

    pub fn block_name(&self) -> &str {
        &self.identity.block_name
    }

    pub fn element_name(&self) -> Option<&str> {
        self.identity.element_name.as_deref()
    }

    /// Applies `changes` in order, swapping each modifier's old class for the
    /// new one and recording the new value.
    pub fn apply<N: ClassList + ?Sized>(
        &mut self,
        node: &mut N,
        changes: ModifierMap,
        rules: &NamingRules,
    ) {
        for (key, value) in changes {
            let old = self
                .identity
                .modifier_class(&key, self.modifiers.get(&key), rules);
            let new = self.identity.modifier_class(&key, Some(&value), rules);

            if old != new {
                if !new.is_empty() {
                    node.add_class(&new);
                }
                if !old.is_empty() {
                    node.remove_class(&old);
                }
                trace!("{}: `{old}` -> `{new}`", node.node_id());
            }

            self.modifiers.insert(key, value);
        }
    }
}
