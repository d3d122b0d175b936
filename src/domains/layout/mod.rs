//! Layout domain
//!
//! Structural wrappers that compose other blocks through slots.

pub mod columns;
pub mod section;

pub use columns::ColumnsBlock;
pub use section::SectionBlock;

use std::sync::Arc;

use crate::core::registry::{BlockRegistry, RegistryError};

/// Register every layout definition into `registry`.
pub fn register(registry: &mut BlockRegistry) -> Result<(), RegistryError> {
    registry.register(Arc::new(SectionBlock::new()))?;
    registry.register(Arc::new(ColumnsBlock::new()))?;
    Ok(())
}

/// Build a registry populated with the layout domain.
pub fn create_layout_registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();
    register(&mut registry).expect("built-in layout definitions have unique types");
    registry
}
