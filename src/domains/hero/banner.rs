//! Banner Hero Block
//!
//! Full-width hero banner: a headline over a background image, optionally
//! dimmed by an overlay.

use serde_json::{json, Value as JsonValue};

use crate::core::definition::{BlockDefinition, DefinitionMetadata, RenderContext};
use crate::core::property::{PropertyKind, PropertySpec, PropertyValue};
use crate::core::BlockType;

/// Banner hero definition.
pub struct HeroBannerBlock {
    metadata: DefinitionMetadata,
    specs: Vec<PropertySpec>,
}

impl HeroBannerBlock {
    /// Namespaced type id.
    pub const TYPE: &'static str = "hero.banner";

    pub fn new() -> Self {
        Self {
            metadata: DefinitionMetadata {
                block_type: BlockType::new(Self::TYPE),
                name: "Banner Hero".into(),
                description: "Full-width headline over a background image".into(),
                variants: vec!["standard".into(), "compact".into()],
                version: 1,
                icon: "hero-banner".into(),
                color: "#6D28D9".into(),
            },
            specs: vec![
                PropertySpec::new("title", PropertyKind::String, PropertyValue::from(""))
                    .with_name("Title")
                    .required(),
                PropertySpec::new("background", PropertyKind::String, PropertyValue::from(""))
                    .with_name("Background image URL"),
                PropertySpec::new("overlay", PropertyKind::Boolean, PropertyValue::from(true))
                    .with_name("Dim overlay"),
            ],
        }
    }
}

impl Default for HeroBannerBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDefinition for HeroBannerBlock {
    fn metadata(&self) -> &DefinitionMetadata {
        &self.metadata
    }

    fn properties(&self) -> &[PropertySpec] {
        &self.specs
    }

    fn render(&self, ctx: &RenderContext<'_>) -> JsonValue {
        json!({
            "element": "section",
            "role": "hero",
            "layout": ctx.variant,
            "title": ctx.str_prop("title").unwrap_or_default(),
            "background": ctx.str_prop("background"),
            "overlay": ctx.bool_prop("overlay").unwrap_or(true),
        })
    }
}
