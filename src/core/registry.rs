//! Block Registry - the process-scoped catalog of block definitions
//!
//! A registry maps namespaced block types to their definitions. It is
//! built once during process initialization and is read-only afterwards:
//! all mutation happens through [`BlockRegistry::register`] before the
//! registry is handed to consumers, so a `&BlockRegistry` may be shared by
//! concurrent render passes without any locking.
//!
//! Lookup misses are expected, handled cases — `get` and `find_preset`
//! return `Option` rather than erroring. Only duplicate type registration
//! is fatal: ambiguous dispatch is never allowed to run.

use std::collections::HashMap;
use std::sync::Arc;

use super::definition::BlockDefinition;
use super::preset::BlockPreset;
use super::BlockType;

/// Registry of block definitions for a domain (or a whole page catalog).
#[derive(Clone, Default)]
pub struct BlockRegistry {
    /// Definitions in registration order.
    definitions: Vec<Arc<dyn BlockDefinition>>,
    /// Type id to position in `definitions`.
    index: HashMap<BlockType, usize>,
}

impl BlockRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition.
    ///
    /// Validates the definition first, then inserts it. Fails with
    /// [`RegistryError::DuplicateType`] if the type is already present —
    /// the only fatal, construction-time conflict in the system.
    pub fn register(&mut self, definition: Arc<dyn BlockDefinition>) -> Result<(), RegistryError> {
        self.validate_definition(&*definition)?;

        let block_type = definition.block_type().clone();
        if self.index.contains_key(&block_type) {
            return Err(RegistryError::DuplicateType(block_type));
        }

        self.index.insert(block_type, self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    /// Get a definition by type.
    ///
    /// Absence is an expected case — a page may reference blocks this
    /// registry does not know — so this returns `None` rather than erroring.
    pub fn get(&self, block_type: &BlockType) -> Option<&Arc<dyn BlockDefinition>> {
        self.index
            .get(block_type)
            .map(|&position| &self.definitions[position])
    }

    /// Find a preset by its opaque id.
    ///
    /// Searches all presets of all registered definitions in registration
    /// order. Ids are scoped to this registry instance; a miss returns
    /// `None` and the caller decides the fallback.
    pub fn find_preset(&self, id: &str) -> Option<&BlockPreset> {
        self.definitions
            .iter()
            .flat_map(|definition| definition.presets())
            .find(|preset| preset.id == id)
    }

    /// All registered definitions, in registration order.
    pub fn list(&self) -> &[Arc<dyn BlockDefinition>] {
        &self.definitions
    }

    /// Whether a definition for the given type exists.
    pub fn contains(&self, block_type: &BlockType) -> bool {
        self.index.contains_key(block_type)
    }

    /// Number of registered definitions.
    pub fn count(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Validate a definition before registration.
    fn validate_definition(&self, definition: &dyn BlockDefinition) -> Result<(), RegistryError> {
        let meta = definition.metadata();
        let invalid = |reason: String| RegistryError::InvalidDefinition {
            block_type: meta.block_type.clone(),
            reason,
        };

        if !meta.block_type.is_namespaced() {
            return Err(invalid(format!(
                "type id '{}' is not namespaced as <domain>.<family>",
                meta.block_type
            )));
        }

        if meta.name.is_empty() {
            return Err(invalid("definition name cannot be empty".into()));
        }

        if meta.variants.is_empty() {
            return Err(invalid(
                "definition must declare at least one variant".into(),
            ));
        }

        if meta.version < 1 {
            return Err(invalid("definition version must be >= 1".into()));
        }

        for preset in definition.presets() {
            if preset.block_type != meta.block_type {
                return Err(invalid(format!(
                    "preset '{}' belongs to type '{}'",
                    preset.id, preset.block_type
                )));
            }
            if let Some(variant) = &preset.variant {
                if !meta.variants.contains(variant) {
                    return Err(invalid(format!(
                        "preset '{}' pins undeclared variant '{}'",
                        preset.id, variant
                    )));
                }
            }
            if self.find_preset(&preset.id).is_some() {
                return Err(invalid(format!(
                    "preset id '{}' already exists in this registry",
                    preset.id
                )));
            }
        }

        let mut seen = Vec::new();
        for preset in definition.presets() {
            if seen.contains(&&preset.id) {
                return Err(invalid(format!(
                    "preset id '{}' is declared twice on this definition",
                    preset.id
                )));
            }
            seen.push(&preset.id);
        }

        Ok(())
    }
}

/// Registry error types
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a second definition for the same type id.
    #[error("duplicate block type: {0}")]
    DuplicateType(BlockType),

    /// Definition failed registration-time validation.
    #[error("invalid definition for '{block_type}': {reason}")]
    InvalidDefinition {
        /// Type id of the offending definition.
        block_type: BlockType,
        /// Human-readable reason.
        reason: String,
    },
}
