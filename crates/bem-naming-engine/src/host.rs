//! # Host Node Contract
//!
//! The engine never owns DOM nodes. A host exposes a node through
//! [`ClassList`]: a stable handle, the ordered class tokens, and idempotent
//! add/remove operations. [`ClassNode`] is an in-memory implementation.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable handle for a host node, used to key cached per-node state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A node whose class tokens the engine can read and change.
pub trait ClassList {
    fn node_id(&self) -> NodeId;

    /// Class tokens in the order they were added.
    fn class_tokens(&self) -> Vec<String>;

    /// Adding a token that is already present is a no-op.
    fn add_class(&mut self, token: &str);

    /// Removing a token that is absent is a no-op.
    fn remove_class(&mut self, token: &str);
}

/// An insertion-ordered set of class tokens with its own [`NodeId`].
///
/// Cloning yields a separate node with the same classes and a fresh id.
#[derive(Debug, Default)]
pub struct ClassNode {
    id: NodeId,
    classes: IndexSet<String>,
}

impl Clone for ClassNode {
    fn clone(&self) -> Self {
        Self {
            id: NodeId::new(),
            classes: self.classes.clone(),
        }
    }
}

impl ClassNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: NodeId::new(),
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a node from a whitespace separated `class` attribute value.
    pub fn from_class_attr(attr: &str) -> Self {
        Self::with_classes(attr.split_whitespace())
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// The tokens joined back into a `class` attribute value.
    pub fn class_attr(&self) -> String {
        self.classes().collect::<Vec<_>>().join(" ")
    }
}

impl ClassList for ClassNode {
    fn node_id(&self) -> NodeId {
        self.id
    }

    fn class_tokens(&self) -> Vec<String> {
        self.classes.iter().cloned().collect()
    }

    fn add_class(&mut self, token: &str) {
        if !self.classes.contains(token) {
            self.classes.insert(token.to_string());
        }
    }

    fn remove_class(&mut self, token: &str) {
        self.classes.shift_remove(token);
    }
}
