//! Page Blocks - Block registry and tree renderer for the Modular Page Builder
//!
//! This crate provides the block system at the heart of the page builder:
//! a catalog of typed, versioned block definitions with named presets, and a
//! declarative tree renderer that resolves block descriptors against the
//! catalog, migrates stored property shapes forward across schema versions,
//! and composes nested sub-trees through named slots — without ever letting
//! one malformed node take down a whole page render.

pub mod core;
pub mod domains;
pub mod render;
pub mod store;
mod tests;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

// Re-export commonly used types
pub use crate::core::definition::{BlockDefinition, BlockOutput, DefinitionMetadata};
pub use crate::core::diagnostic::{Diagnostic, DiagnosticKind};
pub use crate::core::node::{BlockNode, SlotValue};
pub use crate::core::registry::BlockRegistry;
pub use crate::core::BlockType;
pub use crate::domains::create_page_registry;
pub use crate::render::tree::{render_tree, RenderOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
