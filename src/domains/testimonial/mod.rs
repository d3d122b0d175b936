//! Testimonial domain

pub mod quote;

pub use quote::QuoteBlock;

use std::sync::Arc;

use crate::core::registry::{BlockRegistry, RegistryError};

/// Register every testimonial definition into `registry`.
pub fn register(registry: &mut BlockRegistry) -> Result<(), RegistryError> {
    registry.register(Arc::new(QuoteBlock::new()))?;
    Ok(())
}

/// Build a registry populated with the testimonial domain.
pub fn create_testimonial_registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();
    register(&mut registry).expect("built-in testimonial definitions have unique types");
    registry
}
