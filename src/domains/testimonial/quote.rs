//! Quote Testimonial Block

use serde_json::{json, Value as JsonValue};

use crate::core::definition::{BlockDefinition, DefinitionMetadata, RenderContext};
use crate::core::preset::BlockPreset;
use crate::core::property::{PropertyKind, PropertySpec, PropertyValue};
use crate::core::BlockType;

/// Single-quote testimonial definition.
pub struct QuoteBlock {
    metadata: DefinitionMetadata,
    specs: Vec<PropertySpec>,
    presets: Vec<BlockPreset>,
}

impl QuoteBlock {
    /// Namespaced type id.
    pub const TYPE: &'static str = "testimonial.quote";

    pub fn new() -> Self {
        Self {
            metadata: DefinitionMetadata {
                block_type: BlockType::new(Self::TYPE),
                name: "Quote".into(),
                description: "Single customer quote with attribution".into(),
                variants: vec!["card".into(), "minimal".into()],
                version: 1,
                icon: "testimonial-quote".into(),
                color: "#B45309".into(),
            },
            specs: vec![
                PropertySpec::new("quote", PropertyKind::String, PropertyValue::from(""))
                    .with_name("Quote")
                    .required(),
                PropertySpec::new("author", PropertyKind::String, PropertyValue::from(""))
                    .with_name("Author"),
                PropertySpec::new("role", PropertyKind::String, PropertyValue::from(""))
                    .with_name("Author role"),
            ],
            presets: vec![BlockPreset::new(
                "preset:testimonial.quote:card:default",
                Self::TYPE,
                "Default card",
            )
            .with_variant("card")
            .with_property("quote", "We shipped our new site in a week.")
            .with_property("author", "A happy builder")],
        }
    }
}

impl Default for QuoteBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDefinition for QuoteBlock {
    fn metadata(&self) -> &DefinitionMetadata {
        &self.metadata
    }

    fn properties(&self) -> &[PropertySpec] {
        &self.specs
    }

    fn presets(&self) -> &[BlockPreset] {
        &self.presets
    }

    fn render(&self, ctx: &RenderContext<'_>) -> JsonValue {
        json!({
            "element": "figure",
            "role": "testimonial",
            "style": ctx.variant,
            "quote": ctx.str_prop("quote").unwrap_or_default(),
            "author": ctx.str_prop("author"),
            "author_role": ctx.str_prop("role"),
        })
    }
}
