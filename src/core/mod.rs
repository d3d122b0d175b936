//! Core block abstractions and types
//!
//! This module defines the fundamental descriptor types, the definition
//! trait, the registry, and the diagnostic types that form the foundation
//! of the block system.

pub mod definition;
pub mod diagnostic;
pub mod node;
pub mod preset;
pub mod property;
pub mod registry;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Namespaced block type identifier, `<domain>.<family>` (e.g. `hero.split`).
///
/// The domain groups related block families (hero, features, testimonial);
/// the family names one renderable block within it. The full string is the
/// unique key into a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockType(String);

impl BlockType {
    /// Create a block type from its namespaced string form.
    pub fn new(id: impl Into<String>) -> Self {
        BlockType(id.into())
    }

    /// The full namespaced identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The domain segment (everything before the first `.`).
    pub fn domain(&self) -> &str {
        match self.0.split_once('.') {
            Some((domain, _)) => domain,
            None => &self.0,
        }
    }

    /// The family segment (everything after the first `.`), if namespaced.
    pub fn family(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, family)| family)
    }

    /// Whether the identifier carries a `<domain>.<family>` namespace.
    pub fn is_namespaced(&self) -> bool {
        self.0
            .split_once('.')
            .map(|(domain, family)| !domain.is_empty() && !family.is_empty())
            .unwrap_or(false)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockType {
    fn from(s: &str) -> Self {
        BlockType::new(s)
    }
}

impl From<String> for BlockType {
    fn from(s: String) -> Self {
        BlockType::new(s)
    }
}
