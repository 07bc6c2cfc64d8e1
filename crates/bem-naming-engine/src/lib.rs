//! # BEM Naming Engine
//!
//! Composes BEM class names, recovers a node's BEM identity from its class
//! tokens, parses modifiers back out of those tokens, and diffs modifier
//! changes into class additions/removals.
//!
//! ## Pipeline
//!
//! ```text
//! NamingRules → compose_class_name → class token
//! NamingRules + tokens → detect_bem → Identity
//! Identity + tokens → parse_mod → ModifierMap
//! ModifierMap (cached) + changes → BemEngine::set_modifiers → class swaps
//! ```
//!
//! ## Modules
//!
//! - **`rules`**: `NamingRules`, `Delimiters` and the `Dialect` strategy (classic vs bevis)
//! - **`compose`**: `compose_class_name()` and `ModValue`
//! - **`detect`**: `detect_bem()` returning an `Identity`
//! - **`modifiers`**: `parse_mod()` returning a `ModifierMap`
//! - **`host`**: the `ClassList` contract a host node implements, plus `ClassNode`
//! - **`state`**: cached per-node `ElementState` and the class diffing
//! - **`engine`**: `BemEngine`, default rules plus the per-node side-table
//!
//! ## Usage
//!
//! ```rust
//! use bem_naming_engine::{BemEngine, ClassList, ClassNode, modifier_map};
//!
//! let mut engine = BemEngine::default();
//! let mut node = ClassNode::with_classes(["menu", "menu_size_large"]);
//!
//! engine.set_modifiers(&mut node, modifier_map([("size", "small")])).unwrap();
//!
//! assert_eq!(node.class_tokens(), vec!["menu", "menu_size_small"]);
//! ```

pub mod compose;
pub mod detect;
pub mod engine;
pub mod error;
pub mod host;
pub mod modifiers;
pub mod rules;
pub mod state;

pub use compose::{ClassNameParams, ModValue, compose_class_name};
pub use detect::{BemRole, Identity, detect_bem};
pub use engine::BemEngine;
pub use error::BemError;
pub use host::{ClassList, ClassNode, NodeId};
pub use modifiers::{ModifierMap, modifier_map, parse_mod, parse_mod_with};
pub use rules::{Delimiters, Dialect, NamingRules};
pub use state::ElementState;
