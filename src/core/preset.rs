//! Block presets
//!
//! A preset is a named, reusable default property set attached to a block
//! definition at registration time. Presets are plain data: resolving one
//! never mutates it, and a consumer that wants to start a node from a
//! preset copies its properties with a shallow override (the node's own
//! keys win).
//!
//! Preset ids are opaque strings, unique only within the registry instance
//! that owns them — two domains' registries may reuse the same id string
//! without collision.

use serde::{Deserialize, Serialize};

use super::property::{PropertyMap, PropertyValue, VERSION_KEY};
use super::BlockType;

/// Named default property set for a block type (and optionally a variant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockPreset {
    /// Opaque id, unique within the owning registry instance.
    pub id: String,
    /// Block type this preset belongs to.
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Variant the preset pins nodes to, unless they override it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Human-readable preset name.
    pub name: String,
    /// Default property values.
    #[serde(default)]
    pub properties: PropertyMap,
    /// Schema version the properties were authored at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

impl BlockPreset {
    /// Create an empty preset for the given type.
    pub fn new(
        id: impl Into<String>,
        block_type: impl Into<BlockType>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            block_type: block_type.into(),
            variant: None,
            name: name.into(),
            properties: PropertyMap::new(),
            version: None,
        }
    }

    /// Pin the preset to a variant.
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Add a default property.
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Record the schema version the properties were authored at.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Build a property map seeded from this preset.
    ///
    /// Every key in `overrides` wins over the same key in the preset; the
    /// preset fills the holes. When the preset records the version its
    /// properties were authored at, the seeded map carries that marker so
    /// migration treats it like any stored page — unless the overrides
    /// already pinned one.
    pub fn seed_properties(&self, overrides: &PropertyMap) -> PropertyMap {
        let mut seeded = self.properties.clone();
        if let Some(version) = self.version {
            seeded
                .entry(VERSION_KEY.to_string())
                .or_insert(PropertyValue::Integer(version as i64));
        }
        for (key, value) in overrides {
            seeded.insert(key.clone(), value.clone());
        }
        seeded
    }
}
