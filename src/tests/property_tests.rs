//! Property-based tests using proptest.
//!
//! These tests verify invariants that must hold for *any* input, catching
//! edge cases that hand-written tests miss.

use proptest::prelude::*;

use crate::core::node::BlockNode;
use crate::core::preset::BlockPreset;
use crate::core::property::{PropertyMap, PropertyValue};
use crate::core::BlockType;
use crate::domains::create_page_registry;
use crate::render::tree::render_tree;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Mix of types the page registry knows and types it does not.
fn arb_type_id() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "hero.split",
        "hero.banner",
        "features.grid",
        "testimonial.quote",
        "cta.banner",
        "layout.section",
        "unknown.widget",
        "vendor.embed",
    ])
}

fn arb_node() -> impl Strategy<Value = BlockNode> {
    (
        arb_type_id(),
        prop::option::of("[a-z]{1,8}"),
        prop::collection::hash_map("[a-z_]{1,6}", "[a-zA-Z ]{0,12}", 0..4),
    )
        .prop_map(|(type_id, variant, properties)| {
            let mut node = BlockNode::new(type_id);
            if let Some(variant) = variant {
                node = node.with_variant(variant);
            }
            for (key, value) in properties {
                node = node.with_property(key, value.as_str());
            }
            node
        })
}

// ---------------------------------------------------------------------------
// Renderer invariants
// ---------------------------------------------------------------------------

proptest! {
    /// One output per top-level node, no matter how malformed the input.
    #[test]
    fn render_output_count_always_matches_input(nodes in prop::collection::vec(arb_node(), 0..24)) {
        let registry = create_page_registry();
        let outcome = render_tree(&registry, &nodes);
        prop_assert_eq!(outcome.outputs.len(), nodes.len());
    }

    /// Rendering is referentially transparent: the same registry and tree
    /// produce the same outcome on every pass.
    #[test]
    fn render_is_deterministic(nodes in prop::collection::vec(arb_node(), 0..16)) {
        let registry = create_page_registry();
        let first = render_tree(&registry, &nodes);
        let second = render_tree(&registry, &nodes);
        prop_assert_eq!(first.outputs, second.outputs);
        prop_assert_eq!(first.diagnostics, second.diagnostics);
    }

    /// Every node with a recognized type and no explicit variant renders
    /// with the first declared variant of its definition.
    #[test]
    fn default_variant_is_first_declared(type_index in 0..5usize) {
        let registry = create_page_registry();
        let type_id = ["hero.split", "hero.banner", "features.grid", "testimonial.quote", "cta.banner"][type_index];
        let nodes = vec![BlockNode::new(type_id)];

        let outcome = render_tree(&registry, &nodes);
        let definition = registry.get(&BlockType::new(type_id)).unwrap();
        prop_assert_eq!(
            outcome.outputs[0].variant(),
            Some(definition.default_variant())
        );
    }

    /// Unresolved placeholders appear exactly where the unknown nodes were.
    #[test]
    fn placeholders_match_unknown_positions(nodes in prop::collection::vec(arb_node(), 0..24)) {
        let registry = create_page_registry();
        let outcome = render_tree(&registry, &nodes);
        for (node, output) in nodes.iter().zip(&outcome.outputs) {
            prop_assert_eq!(
                output.is_unresolved(),
                !registry.contains(&node.block_type),
                "placeholder/resolution mismatch for '{}'",
                &node.block_type
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Preset seeding invariants
// ---------------------------------------------------------------------------

proptest! {
    /// Shallow override law: every key the node sets wins; every other
    /// preset key is carried over unchanged.
    #[test]
    fn preset_seed_respects_override_precedence(
        preset_props in prop::collection::hash_map("[a-f_]{1,6}", "[a-z]{0,8}", 0..6),
        override_props in prop::collection::hash_map("[a-f_]{1,6}", "[A-Z]{0,8}", 0..6),
    ) {
        let mut preset = BlockPreset::new("preset:p", "hero.split", "P");
        for (key, value) in &preset_props {
            preset = preset.with_property(key.clone(), value.as_str());
        }

        let overrides: PropertyMap = override_props
            .iter()
            .map(|(key, value)| (key.clone(), PropertyValue::from(value.as_str())))
            .collect();

        let seeded = preset.seed_properties(&overrides);

        for (key, value) in &override_props {
            prop_assert_eq!(seeded.get(key).and_then(PropertyValue::as_string), Some(value.as_str()));
        }
        for (key, value) in &preset_props {
            if !override_props.contains_key(key) {
                prop_assert_eq!(seeded.get(key).and_then(PropertyValue::as_string), Some(value.as_str()));
            }
        }
    }

    /// Seeding never mutates the preset itself.
    #[test]
    fn preset_is_immutable_under_seeding(
        override_props in prop::collection::hash_map("[a-f_]{1,6}", "[A-Z]{0,8}", 0..6),
    ) {
        let preset = BlockPreset::new("preset:p", "hero.split", "P")
            .with_property("fixed", "value")
            .with_version(2);
        let before = preset.clone();

        let overrides: PropertyMap = override_props
            .into_iter()
            .map(|(key, value)| (key, PropertyValue::String(value)))
            .collect();
        let _ = preset.seed_properties(&overrides);

        prop_assert_eq!(preset, before);
    }
}

// ---------------------------------------------------------------------------
// Slot ordering invariants
// ---------------------------------------------------------------------------

proptest! {
    /// Slots iterate in exactly the order they were inserted.
    #[test]
    fn slots_preserve_arbitrary_insertion_order(names in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        prop_assume!(unique.len() == names.len());

        let mut node = BlockNode::new("layout.section");
        for name in &names {
            node = node.with_slot(name.clone(), BlockNode::new("cta.banner"));
        }

        let observed: Vec<String> = node.slots.iter().map(|(name, _)| name.to_string()).collect();
        prop_assert_eq!(observed, names);
    }
}
