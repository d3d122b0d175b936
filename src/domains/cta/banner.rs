//! Call-to-Action Banner Block

use serde_json::{json, Value as JsonValue};

use crate::core::definition::{BlockDefinition, DefinitionMetadata, RenderContext};
use crate::core::preset::BlockPreset;
use crate::core::property::{PropertyKind, PropertySpec, PropertyValue};
use crate::core::BlockType;

/// Call-to-action banner definition.
pub struct CtaBannerBlock {
    metadata: DefinitionMetadata,
    specs: Vec<PropertySpec>,
    presets: Vec<BlockPreset>,
}

impl CtaBannerBlock {
    /// Namespaced type id.
    pub const TYPE: &'static str = "cta.banner";

    pub fn new() -> Self {
        Self {
            metadata: DefinitionMetadata {
                block_type: BlockType::new(Self::TYPE),
                name: "CTA Banner".into(),
                description: "Prompt banner with a single action button".into(),
                variants: vec!["centered".into(), "split".into()],
                version: 1,
                icon: "cta-banner".into(),
                color: "#15803D".into(),
            },
            specs: vec![
                PropertySpec::new("title", PropertyKind::String, PropertyValue::from(""))
                    .with_name("Title")
                    .required(),
                PropertySpec::new("button_label", PropertyKind::String, PropertyValue::from(""))
                    .with_name("Button label")
                    .required(),
                PropertySpec::new("button_href", PropertyKind::String, PropertyValue::from("#"))
                    .with_name("Button link"),
            ],
            presets: vec![BlockPreset::new(
                "preset:cta.banner:centered:newsletter",
                Self::TYPE,
                "Newsletter signup",
            )
            .with_variant("centered")
            .with_property("title", "Stay in the loop")
            .with_property("button_label", "Subscribe")
            .with_property("button_href", "/newsletter")],
        }
    }
}

impl Default for CtaBannerBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDefinition for CtaBannerBlock {
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
            "element": "aside",
            "role": "cta",
            "layout": ctx.variant,
            "title": ctx.str_prop("title").unwrap_or_default(),
            "button": {
                "label": ctx.str_prop("button_label").unwrap_or_default(),
                "href": ctx.str_prop("button_href").unwrap_or("#"),
            },
        })
    }
}
