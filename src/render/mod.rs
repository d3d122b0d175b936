//! Tree rendering
//!
//! Walks a tree of block nodes, resolves each against a registry, migrates
//! property shapes forward, recursively renders named slots, and produces a
//! flat list of outputs plus non-fatal diagnostics. A pre-render validator
//! catches malformed pages before they reach the renderer.

pub mod migrate;
pub mod tree;
pub mod validate;

pub use migrate::{property_version, resolve_properties, VERSION_KEY};
pub use tree::{render_tree, RenderOutcome, MAX_RENDER_DEPTH};
pub use validate::{TreeValidationResult, TreeValidator};
