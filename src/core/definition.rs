//! Block definition trait and render output types
//!
//! A [`BlockDefinition`] is the registered counterpart of a block node: it
//! declares the type id, its variants, the current property schema version,
//! optional presets and migrations, and the render function that turns a
//! resolved node plus its rendered slots into output. The catalog stays
//! open to extension — each block family implements the trait and is
//! registered as a trait object.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::preset::BlockPreset;
use super::property::{PropertyMap, PropertySpec, PropertyValue};
use super::BlockType;

/// Definition metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionMetadata {
    /// Namespaced block type this definition renders.
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Human-readable block name.
    pub name: String,
    /// Brief description of the block.
    pub description: String,
    /// Declared variants; non-empty, the first entry is the implicit default.
    pub variants: Vec<String>,
    /// Current property schema version (>= 1).
    pub version: u32,
    /// Icon identifier for the editor palette.
    pub icon: String,
    /// Accent color for the editor palette.
    pub color: String,
}

/// Core definition trait implemented by every block family.
pub trait BlockDefinition: Send + Sync {
    /// Get the definition's metadata.
    fn metadata(&self) -> &DefinitionMetadata;

    /// Declared property schema, checked by the tree validator.
    fn properties(&self) -> &[PropertySpec] {
        &[]
    }

    /// Presets attached to this definition.
    fn presets(&self) -> &[BlockPreset] {
        &[]
    }

    /// Upgrade a property map authored at `from_version` to the current
    /// version.
    ///
    /// Returns `None` when the definition carries no migration support, in
    /// which case the renderer proceeds best-effort with the raw map. An
    /// implementation must accept any prior version it claims to support,
    /// chaining intermediate steps internally, and must be pure.
    fn migrate(&self, properties: &PropertyMap, from_version: u32) -> Option<PropertyMap> {
        let _ = (properties, from_version);
        None
    }

    /// Render the resolved node into an output body.
    ///
    /// Must be deterministic given identical inputs: no randomness, no
    /// hidden global reads.
    fn render(&self, ctx: &RenderContext<'_>) -> JsonValue;

    /// The block type this definition renders.
    fn block_type(&self) -> &BlockType {
        &self.metadata().block_type
    }

    /// Current property schema version.
    fn version(&self) -> u32 {
        self.metadata().version
    }

    /// The implicit default variant (first declared entry).
    fn default_variant(&self) -> &str {
        self.metadata()
            .variants
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Everything a definition's render function sees for one node.
///
/// The variant is already resolved, the properties already migrated, and
/// the slots already rendered depth-first.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// The node's id, when it carries one.
    pub node_id: Option<&'a str>,
    /// Resolved variant (always one of the declared variants).
    pub variant: &'a str,
    /// Migrated property map.
    pub properties: &'a PropertyMap,
    /// Rendered slot outputs, in slot insertion order.
    pub slots: &'a RenderedSlots,
}

impl<'a> RenderContext<'a> {
    /// Look up a property.
    pub fn prop(&self, key: &str) -> Option<&'a PropertyValue> {
        self.properties.get(key)
    }

    /// Look up a string property.
    pub fn str_prop(&self, key: &str) -> Option<&'a str> {
        self.prop(key).and_then(PropertyValue::as_string)
    }

    /// Look up an integer property.
    pub fn integer_prop(&self, key: &str) -> Option<i64> {
        self.prop(key).and_then(PropertyValue::as_integer)
    }

    /// Look up a boolean property.
    pub fn bool_prop(&self, key: &str) -> Option<bool> {
        self.prop(key).and_then(PropertyValue::as_bool)
    }

    /// Look up an array property.
    pub fn array_prop(&self, key: &str) -> Option<&'a [PropertyValue]> {
        self.prop(key)
            .and_then(PropertyValue::as_array)
            .map(Vec::as_slice)
    }
}

/// Rendered output of one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotOutput {
    /// Output of a singular slot value.
    Single(BlockOutput),
    /// Outputs of an array slot value, in element order.
    Many(Vec<BlockOutput>),
}

/// Rendered slot outputs handed to a parent's render function, in slot
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedSlots {
    entries: Vec<(String, SlotOutput)>,
}

impl RenderedSlots {
    /// Create an empty slot output map.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, output: SlotOutput) {
        self.entries.push((name.into(), output));
    }

    /// Get a slot's output by name.
    pub fn get(&self, name: &str) -> Option<&SlotOutput> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, o)| o)
    }

    /// The output of a singular slot, if present and singular.
    pub fn single(&self, name: &str) -> Option<&BlockOutput> {
        match self.get(name) {
            Some(SlotOutput::Single(output)) => Some(output),
            _ => None,
        }
    }

    /// The outputs of an array slot; empty when absent or singular.
    pub fn many(&self, name: &str) -> &[BlockOutput] {
        match self.get(name) {
            Some(SlotOutput::Many(outputs)) => outputs,
            _ => &[],
        }
    }

    /// Iterate entries in slot insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlotOutput)> {
        self.entries.iter().map(|(n, o)| (n.as_str(), o))
    }

    /// Number of rendered slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slots were rendered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rendered output for one block node.
///
/// The renderer guarantees exactly one output per top-level input node:
/// nodes whose type has no registered definition still produce an output,
/// clearly marked as unresolved, so the host never loses track of a block's
/// position in the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockOutput {
    /// Fully rendered block.
    Block {
        /// Id of the node this output came from, if it had one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        node_id: Option<String>,
        /// Block type that produced the output.
        #[serde(rename = "type")]
        block_type: BlockType,
        /// Resolved variant the render used.
        variant: String,
        /// Render body produced by the definition.
        body: JsonValue,
    },
    /// Placeholder for a node whose type had no registered definition.
    Unresolved {
        /// Id of the node this placeholder stands in for, if it had one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        node_id: Option<String>,
        /// The unrecognized block type.
        #[serde(rename = "type")]
        block_type: BlockType,
    },
}

impl BlockOutput {
    /// Whether this output is an unresolved placeholder.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, BlockOutput::Unresolved { .. })
    }

    /// The block type the output belongs to.
    pub fn block_type(&self) -> &BlockType {
        match self {
            BlockOutput::Block { block_type, .. } => block_type,
            BlockOutput::Unresolved { block_type, .. } => block_type,
        }
    }

    /// The originating node id, if any.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            BlockOutput::Block { node_id, .. } => node_id.as_deref(),
            BlockOutput::Unresolved { node_id, .. } => node_id.as_deref(),
        }
    }

    /// The resolved variant, for rendered outputs.
    pub fn variant(&self) -> Option<&str> {
        match self {
            BlockOutput::Block { variant, .. } => Some(variant),
            BlockOutput::Unresolved { .. } => None,
        }
    }

    /// The render body, for rendered outputs.
    pub fn body(&self) -> Option<&JsonValue> {
        match self {
            BlockOutput::Block { body, .. } => Some(body),
            BlockOutput::Unresolved { .. } => None,
        }
    }
}
