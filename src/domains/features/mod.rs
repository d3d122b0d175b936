//! Features domain
//!
//! Blocks that enumerate product capabilities.

pub mod grid;

pub use grid::FeatureGridBlock;

use std::sync::Arc;

use crate::core::registry::{BlockRegistry, RegistryError};

/// Register every features definition into `registry`.
pub fn register(registry: &mut BlockRegistry) -> Result<(), RegistryError> {
    registry.register(Arc::new(FeatureGridBlock::new()))?;
    Ok(())
}

/// Build a registry populated with the features domain.
pub fn create_features_registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();
    register(&mut registry).expect("built-in features definitions have unique types");
    registry
}
