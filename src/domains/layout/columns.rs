//! Columns Layout Block
//!
//! Two-column wrapper with singular `left` and `right` slots.

use serde_json::{json, Value as JsonValue};

use crate::core::definition::{BlockDefinition, DefinitionMetadata, RenderContext};
use crate::core::BlockType;

/// Two-column wrapper definition.
pub struct ColumnsBlock {
    metadata: DefinitionMetadata,
}

impl ColumnsBlock {
    /// Namespaced type id.
    pub const TYPE: &'static str = "layout.columns";

    pub fn new() -> Self {
        Self {
            metadata: DefinitionMetadata {
                block_type: BlockType::new(Self::TYPE),
                name: "Columns".into(),
                description: "Two-column wrapper with left and right slots".into(),
                variants: vec!["50-50".into(), "60-40".into()],
                version: 1,
                icon: "layout-columns".into(),
                color: "#334155".into(),
            },
        }
    }
}

impl Default for ColumnsBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDefinition for ColumnsBlock {
    fn metadata(&self) -> &DefinitionMetadata {
        &self.metadata
    }

    fn render(&self, ctx: &RenderContext<'_>) -> JsonValue {
        json!({
            "element": "div",
            "role": "columns",
            "split": ctx.variant,
            "left": serde_json::to_value(ctx.slots.single("left")).unwrap_or_default(),
            "right": serde_json::to_value(ctx.slots.single("right")).unwrap_or_default(),
        })
    }
}
