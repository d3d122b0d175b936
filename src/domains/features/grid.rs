//! Feature Grid Block
//!
//! A grid of feature cards (icon, title, body). Version 1 stored the cards
//! under a `features` key; version 2 renamed it to `items` to match the
//! other list-driven blocks, with a straight key-rename migration.

use serde_json::{json, Value as JsonValue};

use crate::core::definition::{BlockDefinition, DefinitionMetadata, RenderContext};
use crate::core::preset::BlockPreset;
use crate::core::property::{PropertyKind, PropertyMap, PropertySpec, PropertyValue};
use crate::core::BlockType;

/// Feature grid definition.
pub struct FeatureGridBlock {
    metadata: DefinitionMetadata,
    specs: Vec<PropertySpec>,
    presets: Vec<BlockPreset>,
}

impl FeatureGridBlock {
    /// Namespaced type id.
    pub const TYPE: &'static str = "features.grid";

    pub fn new() -> Self {
        Self {
            metadata: DefinitionMetadata {
                block_type: BlockType::new(Self::TYPE),
                name: "Feature Grid".into(),
                description: "Grid of feature cards with icon, title, and body".into(),
                variants: vec!["three-column".into(), "two-column".into()],
                version: 2,
                icon: "features-grid".into(),
                color: "#0E7490".into(),
            },
            specs: vec![
                PropertySpec::new("title", PropertyKind::String, PropertyValue::from(""))
                    .with_name("Section title"),
                PropertySpec::new(
                    "items",
                    PropertyKind::Array,
                    PropertyValue::Array(Vec::new()),
                )
                .with_name("Feature cards")
                .with_description("One object per card: icon, title, body")
                .required(),
            ],
            presets: vec![BlockPreset::new(
                "preset:features.grid:three-column:pillars",
                Self::TYPE,
                "Three pillars",
            )
            .with_variant("three-column")
            .with_version(2)
            .with_property("title", "Why it works")
            .with_property(
                "items",
                PropertyValue::Array(vec![
                    feature_item("bolt", "Fast", "Renders in a single pass"),
                    feature_item("shield", "Resilient", "Partial data never breaks the page"),
                    feature_item("layers", "Composable", "Blocks nest through named slots"),
                ]),
            )],
        }
    }
}

fn feature_item(icon: &str, title: &str, body: &str) -> PropertyValue {
    let mut item = std::collections::HashMap::new();
    item.insert("icon".to_string(), PropertyValue::from(icon));
    item.insert("title".to_string(), PropertyValue::from(title));
    item.insert("body".to_string(), PropertyValue::from(body));
    PropertyValue::Object(item)
}

impl Default for FeatureGridBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDefinition for FeatureGridBlock {
    fn metadata(&self) -> &DefinitionMetadata {
        &self.metadata
    }

    fn properties(&self) -> &[PropertySpec] {
        &self.specs
    }

    fn presets(&self) -> &[BlockPreset] {
        &self.presets
    }

    fn migrate(&self, properties: &PropertyMap, from_version: u32) -> Option<PropertyMap> {
        match from_version {
            // v1 -> v2: `features` key renamed to `items`.
            1 => {
                let mut migrated = properties.clone();
                if let Some(cards) = migrated.remove("features") {
                    migrated.insert("items".into(), cards);
                }
                Some(migrated)
            }
            _ => None,
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> JsonValue {
        let columns = match ctx.variant {
            "two-column" => 2,
            _ => 3,
        };

        json!({
            "element": "section",
            "role": "features",
            "columns": columns,
            "title": ctx.str_prop("title"),
            "items": serde_json::to_value(ctx.array_prop("items").unwrap_or_default())
                .unwrap_or_default(),
        })
    }
}
