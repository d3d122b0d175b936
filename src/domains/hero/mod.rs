//! Hero domain
//!
//! Page-opening blocks: the first thing a visitor sees.

pub mod banner;
pub mod split;

pub use banner::HeroBannerBlock;
pub use split::HeroSplitBlock;

use std::sync::Arc;

use crate::core::registry::{BlockRegistry, RegistryError};

/// Register every hero definition into `registry`.
pub fn register(registry: &mut BlockRegistry) -> Result<(), RegistryError> {
    registry.register(Arc::new(HeroSplitBlock::new()))?;
    registry.register(Arc::new(HeroBannerBlock::new()))?;
    Ok(())
}

/// Build a registry populated with the hero domain.
pub fn create_hero_registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();
    register(&mut registry).expect("built-in hero definitions have unique types");
    registry
}
