//! Block node descriptors
//!
//! A [`BlockNode`] declaratively describes one renderable block: its type,
//! an optional variant, a property map, and named slots holding nested
//! child nodes. Nodes are ephemeral — constructed per render pass or loaded
//! from stored page configuration — and never mutated during rendering.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::preset::BlockPreset;
use super::property::{PropertyMap, PropertyValue};
use super::BlockType;

/// Value of a named slot: a single child node, or an ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    /// One child node.
    Single(Box<BlockNode>),
    /// An ordered list of child nodes.
    Many(Vec<BlockNode>),
}

impl From<BlockNode> for SlotValue {
    fn from(node: BlockNode) -> Self {
        SlotValue::Single(Box::new(node))
    }
}

impl From<Vec<BlockNode>> for SlotValue {
    fn from(nodes: Vec<BlockNode>) -> Self {
        SlotValue::Many(nodes)
    }
}

/// Named slots of a node, in insertion order.
///
/// Slot traversal order matters to the renderer, so this is an ordered map:
/// it serializes as a JSON object and deserializes preserving document
/// order. Slot counts are small (a handful per node), so lookups stay
/// linear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slots {
    entries: Vec<(String, SlotValue)>,
}

impl Slots {
    /// Create an empty slot map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a slot, replacing an existing entry of the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: SlotValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get a slot by name.
    pub fn get(&self, name: &str) -> Option<&SlotValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Whether a slot with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlotValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Slots {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Slots {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SlotsVisitor;

        impl<'de> Visitor<'de> for SlotsVisitor {
            type Value = Slots;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of slot names to a node or a list of nodes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Slots, A::Error> {
                let mut slots = Slots::new();
                while let Some((name, value)) = access.next_entry::<String, SlotValue>()? {
                    slots.insert(name, value);
                }
                Ok(slots)
            }
        }

        deserializer.deserialize_map(SlotsVisitor)
    }
}

/// Declarative descriptor of one renderable block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockNode {
    /// Stable per-instance id, when the host tracks one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Namespaced block type resolved against the registry.
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Requested rendering variant; `None` means the definition's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Free-form property map, possibly carrying a `__version` marker.
    #[serde(default, skip_serializing_if = "PropertyMap::is_empty")]
    pub properties: PropertyMap,
    /// Named child slots, in insertion order.
    #[serde(default, skip_serializing_if = "Slots::is_empty")]
    pub slots: Slots,
}

impl BlockNode {
    /// Create a node of the given type with no variant, properties, or slots.
    pub fn new(block_type: impl Into<BlockType>) -> Self {
        Self {
            id: None,
            block_type: block_type.into(),
            variant: None,
            properties: PropertyMap::new(),
            slots: Slots::new(),
        }
    }

    /// Set the node id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Assign a freshly generated UUID v4 id.
    pub fn with_generated_id(mut self) -> Self {
        self.id = Some(Uuid::new_v4().to_string());
        self
    }

    /// Request a specific variant.
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Set one property.
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Replace the whole property map.
    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    /// Add a named slot.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<SlotValue>) -> Self {
        self.slots.insert(name, value.into());
        self
    }

    /// Seed this node from a preset.
    ///
    /// Preset properties fill keys the node does not set itself (shallow
    /// override — the node's own keys win), and the preset's variant pins
    /// the node unless it already chose one. The preset is not mutated.
    pub fn with_preset(mut self, preset: &BlockPreset) -> Self {
        self.properties = preset.seed_properties(&self.properties);
        if self.variant.is_none() {
            self.variant = preset.variant.clone();
        }
        self
    }

    /// Maximum slot-nesting depth of this node, counting itself as 1.
    pub fn depth(&self) -> usize {
        let child_depth = self
            .slots
            .iter()
            .map(|(_, value)| match value {
                SlotValue::Single(child) => child.depth(),
                SlotValue::Many(children) => {
                    children.iter().map(BlockNode::depth).max().unwrap_or(0)
                }
            })
            .max()
            .unwrap_or(0);
        1 + child_depth
    }
}
