//! Section Layout Block
//!
//! Structural wrapper that composes an ordered list of child blocks through
//! its `body` slot. This is the block that turns a flat catalog into whole
//! pages: the host nests heroes, feature grids, and CTAs inside sections.

use serde_json::{json, Value as JsonValue};

use crate::core::definition::{BlockDefinition, DefinitionMetadata, RenderContext};
use crate::core::property::{PropertyKind, PropertySpec, PropertyValue};
use crate::core::BlockType;

/// Section wrapper definition.
pub struct SectionBlock {
    metadata: DefinitionMetadata,
    specs: Vec<PropertySpec>,
}

impl SectionBlock {
    /// Namespaced type id.
    pub const TYPE: &'static str = "layout.section";

    /// Slot holding the section's ordered children.
    pub const BODY_SLOT: &'static str = "body";

    pub fn new() -> Self {
        Self {
            metadata: DefinitionMetadata {
                block_type: BlockType::new(Self::TYPE),
                name: "Section".into(),
                description: "Structural wrapper composing an ordered list of children".into(),
                variants: vec!["contained".into(), "full-width".into()],
                version: 1,
                icon: "layout-section".into(),
                color: "#334155".into(),
            },
            specs: vec![
                PropertySpec::new("background", PropertyKind::String, PropertyValue::from("none"))
                    .with_name("Background"),
                PropertySpec::new("padding", PropertyKind::String, PropertyValue::from("normal"))
                    .with_name("Vertical padding"),
            ],
        }
    }
}

impl Default for SectionBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDefinition for SectionBlock {
    fn metadata(&self) -> &DefinitionMetadata {
        &self.metadata
    }

    fn properties(&self) -> &[PropertySpec] {
        &self.specs
    }

    fn render(&self, ctx: &RenderContext<'_>) -> JsonValue {
        json!({
            "element": "section",
            "role": "layout",
            "width": ctx.variant,
            "background": ctx.str_prop("background").unwrap_or("none"),
            "padding": ctx.str_prop("padding").unwrap_or("normal"),
            "children": serde_json::to_value(ctx.slots.many(Self::BODY_SLOT))
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::definition::{BlockOutput, RenderedSlots, SlotOutput};
    use crate::core::property::PropertyMap;

    #[test]
    fn test_children_render_in_slot_order() {
        let block = SectionBlock::new();
        let properties = PropertyMap::new();

        let mut slots = RenderedSlots::new();
        slots.insert(
            SectionBlock::BODY_SLOT,
            SlotOutput::Many(vec![
                BlockOutput::Unresolved {
                    node_id: Some("first".into()),
                    block_type: BlockType::new("hero.split"),
                },
                BlockOutput::Unresolved {
                    node_id: Some("second".into()),
                    block_type: BlockType::new("cta.banner"),
                },
            ]),
        );

        let ctx = RenderContext {
            node_id: None,
            variant: "contained",
            properties: &properties,
            slots: &slots,
        };
        let body = block.render(&ctx);
        assert_eq!(body["children"][0]["node_id"], "first");
        assert_eq!(body["children"][1]["node_id"], "second");
    }
}
