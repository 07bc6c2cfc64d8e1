//! # BemEngine
//!
//! Holds the default [`NamingRules`] and a side-table of [`ElementState`]
//! keyed by [`NodeId`]. The host calls [`BemEngine::evict`] when it discards
//! a node; the engine has no other way to learn about it.
//!
//! Cached state goes stale if a node's classes are changed behind the
//! engine's back. Evict the node to force a fresh read.

use std::collections::{HashMap, hash_map::Entry};

use log::debug;

use crate::{
    compose::{ClassNameParams, compose_class_name},
    detect::{Identity, detect_bem},
    error::BemError,
    host::{ClassList, NodeId},
    modifiers::{ModifierMap, parse_mod},
    rules::NamingRules,
    state::ElementState,
};

#[derive(Debug, Default)]
pub struct BemEngine {
    rules: NamingRules,
    states: HashMap<NodeId, ElementState>,
}

impl BemEngine {
    pub fn new(rules: NamingRules) -> Self {
        Self {
            rules,
            states: HashMap::new(),
        }
    }

    pub fn rules(&self) -> &NamingRules {
        &self.rules
    }

    /// Composes a class name with `rules`, or the engine's rules when `None`.
    pub fn compose_class_name(
        &self,
        params: &ClassNameParams<'_>,
        rules: Option<&NamingRules>,
    ) -> String {
        compose_class_name(params, rules.unwrap_or(&self.rules))
    }

    pub fn detect_bem<N: ClassList + ?Sized>(
        &self,
        node: &N,
        rules: Option<&NamingRules>,
    ) -> Result<Identity, BemError> {
        detect_bem(&node.class_tokens(), rules.unwrap_or(&self.rules))
    }

    /// Parses the node's modifiers without touching the cache.
    pub fn parse_mod<N: ClassList + ?Sized>(
        &self,
        node: &N,
        rules: Option<&NamingRules>,
    ) -> Result<ModifierMap, BemError> {
        parse_mod(&node.class_tokens(), rules.unwrap_or(&self.rules))
    }

    /// Returns the node's modifiers, reading them from its classes on first use.
    pub fn modifiers<N: ClassList + ?Sized>(&mut self, node: &N) -> Result<&ModifierMap, BemError> {
        let state = Self::state_for(&mut self.states, &self.rules, node)?;
        Ok(&state.modifiers)
    }

    /// Applies modifier changes to the node's classes, in the order given.
    pub fn set_modifiers<N: ClassList + ?Sized>(
        &mut self,
        node: &mut N,
        changes: ModifierMap,
    ) -> Result<(), BemError> {
        let state = Self::state_for(&mut self.states, &self.rules, node)?;
        state.apply(node, changes, &self.rules);
        Ok(())
    }

    /// Read mode when `changes` is `None`, returning the modifiers; write
    /// mode otherwise, returning `None`.
    pub fn mod_<N: ClassList + ?Sized>(
        &mut self,
        node: &mut N,
        changes: Option<ModifierMap>,
    ) -> Result<Option<ModifierMap>, BemError> {
        match changes {
            None => self.modifiers(node).map(|mods| Some(mods.clone())),
            Some(changes) => self.set_modifiers(node, changes).map(|()| None),
        }
    }

    pub fn cached_state(&self, id: NodeId) -> Option<&ElementState> {
        self.states.get(&id)
    }

    /// Drops the cached state for a node the host has discarded.
    pub fn evict(&mut self, id: NodeId) -> Option<ElementState> {
        let evicted = self.states.remove(&id);
        if evicted.is_some() {
            debug!("evicted state for {id}");
        }
        evicted
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn cached_len(&self) -> usize {
        self.states.len()
    }

    fn state_for<'s, N: ClassList + ?Sized>(
        states: &'s mut HashMap<NodeId, ElementState>,
        rules: &NamingRules,
        node: &N,
    ) -> Result<&'s mut ElementState, BemError> {
        match states.entry(node.node_id()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let state = ElementState::capture(node, rules)?;
                debug!("cached state for {}", entry.key());
                Ok(entry.insert(state))
            }
        }
    }
}
