//! Split Hero Block
//!
//! A two-panel hero: copy on one side, media on the other. The most common
//! opener for marketing and campaign pages.
//!
//! ## Variants
//!
//! | Variant | Description |
//! |---------|-------------|
//! | `gallery` | Media panel cycles a list of images |
//! | `simple`  | Single static media panel |
//!
//! ## Property versions
//!
//! Version 1 stored a single `image` string. Version 2 replaced it with an
//! `images` list so the gallery variant could be expressed; the migration
//! wraps the legacy scalar into a one-element list.

use serde_json::{json, Value as JsonValue};

use crate::core::definition::{BlockDefinition, DefinitionMetadata, RenderContext};
use crate::core::preset::BlockPreset;
use crate::core::property::{
    PropertyConstraints, PropertyKind, PropertyMap, PropertySpec, PropertyValue,
};
use crate::core::BlockType;

/// Split hero definition.
pub struct HeroSplitBlock {
    metadata: DefinitionMetadata,
    specs: Vec<PropertySpec>,
    presets: Vec<BlockPreset>,
}

impl HeroSplitBlock {
    /// Namespaced type id.
    pub const TYPE: &'static str = "hero.split";

    pub fn new() -> Self {
        Self {
            metadata: Self::build_metadata(),
            specs: Self::build_properties(),
            presets: Self::build_presets(),
        }
    }

    // -- Metadata builders ---------------------------------------------------

    fn build_metadata() -> DefinitionMetadata {
        DefinitionMetadata {
            block_type: BlockType::new(Self::TYPE),
            name: "Split Hero".into(),
            description: "Two-panel hero with copy beside a media gallery".into(),
            variants: vec!["gallery".into(), "simple".into()],
            version: 2,
            icon: "hero-split".into(),
            color: "#6D28D9".into(),
        }
    }

    fn build_properties() -> Vec<PropertySpec> {
        vec![
            PropertySpec::new("title", PropertyKind::String, PropertyValue::from(""))
                .with_name("Title")
                .with_description("Headline shown in the copy panel")
                .required()
                .with_constraints(PropertyConstraints::new().with_length_range(Some(1), Some(120))),
            PropertySpec::new("subtitle", PropertyKind::String, PropertyValue::from(""))
                .with_name("Subtitle")
                .with_description("Supporting line under the headline"),
            PropertySpec::new(
                "images",
                PropertyKind::Array,
                PropertyValue::Array(Vec::new()),
            )
            .with_name("Images")
            .with_description("Media panel image URLs, cycled by the gallery variant"),
            PropertySpec::new("align", PropertyKind::String, PropertyValue::from("left"))
                .with_name("Copy alignment")
                .with_constraints(PropertyConstraints::new().with_allowed_values(vec![
                    PropertyValue::from("left"),
                    PropertyValue::from("right"),
                ])),
        ]
    }

    fn build_presets() -> Vec<BlockPreset> {
        vec![
            BlockPreset::new(
                "preset:hero.split:gallery:funding",
                Self::TYPE,
                "Funding campaign",
            )
            .with_variant("gallery")
            .with_version(2)
            .with_property("title", "Back the mission")
            .with_property("subtitle", "Every contribution moves the build forward")
            .with_property(
                "images",
                PropertyValue::Array(vec![
                    PropertyValue::from("/media/campaign-hero-1.jpg"),
                    PropertyValue::from("/media/campaign-hero-2.jpg"),
                ]),
            ),
            BlockPreset::new(
                "preset:hero.split:simple:launch",
                Self::TYPE,
                "Product launch",
            )
            .with_variant("simple")
            .with_version(2)
            .with_property("title", "Meet the next release")
            .with_property(
                "images",
                PropertyValue::Array(vec![PropertyValue::from("/media/launch-hero.jpg")]),
            ),
        ]
    }
}

impl Default for HeroSplitBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockDefinition for HeroSplitBlock {
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
            // v1 -> v2: single `image` scalar becomes the `images` list.
            1 => {
                let mut migrated = properties.clone();
                let images = match migrated.remove("image") {
                    Some(PropertyValue::String(url)) => vec![PropertyValue::String(url)],
                    _ => Vec::new(),
                };
                migrated.insert("images".into(), PropertyValue::Array(images));
                Some(migrated)
            }
            _ => None,
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> JsonValue {
        let images: Vec<&str> = ctx
            .array_prop("images")
            .unwrap_or_default()
            .iter()
            .filter_map(PropertyValue::as_string)
            .collect();

        json!({
            "element": "section",
            "role": "hero",
            "layout": ctx.variant,
            "align": ctx.str_prop("align").unwrap_or("left"),
            "title": ctx.str_prop("title").unwrap_or_default(),
            "subtitle": ctx.str_prop("subtitle"),
            "images": images,
            "actions": serde_json::to_value(ctx.slots.many("actions")).unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::definition::RenderedSlots;

    fn render_with(properties: PropertyMap, variant: &str) -> JsonValue {
        let block = HeroSplitBlock::new();
        let slots = RenderedSlots::new();
        let ctx = RenderContext {
            node_id: None,
            variant,
            properties: &properties,
            slots: &slots,
        };
        block.render(&ctx)
    }

    #[test]
    fn test_metadata() {
        let block = HeroSplitBlock::new();
        assert_eq!(block.block_type().as_str(), "hero.split");
        assert_eq!(block.default_variant(), "gallery");
        assert_eq!(block.version(), 2);
        assert_eq!(block.presets().len(), 2);
    }

    #[test]
    fn test_render_gallery() {
        let mut properties = PropertyMap::new();
        properties.insert("title".into(), "Back the mission".into());
        properties.insert(
            "images".into(),
            PropertyValue::Array(vec![PropertyValue::from("/media/a.jpg")]),
        );

        let body = render_with(properties, "gallery");
        assert_eq!(body["layout"], "gallery");
        assert_eq!(body["title"], "Back the mission");
        assert_eq!(body["images"][0], "/media/a.jpg");
    }

    #[test]
    fn test_migrate_v1_wraps_image() {
        let block = HeroSplitBlock::new();
        let mut v1 = PropertyMap::new();
        v1.insert("title".into(), "Old hero".into());
        v1.insert("image".into(), "/media/legacy.jpg".into());

        let migrated = block.migrate(&v1, 1).expect("v1 migration is supported");
        assert!(migrated.get("image").is_none(), "legacy key is removed");
        let images = migrated.get("images").and_then(PropertyValue::as_array).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].as_string(), Some("/media/legacy.jpg"));
        // Untouched keys survive.
        assert_eq!(
            migrated.get("title").and_then(PropertyValue::as_string),
            Some("Old hero")
        );
    }

    #[test]
    fn test_migrate_unknown_version_unsupported() {
        let block = HeroSplitBlock::new();
        assert!(block.migrate(&PropertyMap::new(), 0).is_none());
    }

    #[test]
    fn test_migrated_shape_satisfies_current_specs() {
        // Forward-compatibility law: a v1 map run through the migration
        // validates against the current property specs.
        let block = HeroSplitBlock::new();
        let mut v1 = PropertyMap::new();
        v1.insert("title".into(), "Old hero".into());
        v1.insert("image".into(), "/media/legacy.jpg".into());

        let migrated = block.migrate(&v1, 1).unwrap();
        for spec in block.properties() {
            assert!(
                spec.check(migrated.get(&spec.id)).is_empty(),
                "migrated map violates spec '{}'",
                spec.id
            );
        }
    }
}
