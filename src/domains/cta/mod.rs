//! Call-to-action domain

pub mod banner;

pub use banner::CtaBannerBlock;

use std::sync::Arc;

use crate::core::registry::{BlockRegistry, RegistryError};

/// Register every CTA definition into `registry`.
pub fn register(registry: &mut BlockRegistry) -> Result<(), RegistryError> {
    registry.register(Arc::new(CtaBannerBlock::new()))?;
    Ok(())
}

/// Build a registry populated with the CTA domain.
pub fn create_cta_registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();
    register(&mut registry).expect("built-in CTA definitions have unique types");
    registry
}
