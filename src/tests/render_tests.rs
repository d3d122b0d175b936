//! Tests for the tree renderer: variant resolution, migration, slot
//! composition, placeholders, and the 1:1 output guarantee.

use std::sync::Arc;

use serde_json::{json, Value as JsonValue};

use crate::core::definition::{BlockDefinition, DefinitionMetadata, RenderContext};
use crate::core::diagnostic::DiagnosticKind;
use crate::core::node::BlockNode;
use crate::core::property::{PropertyMap, PropertyValue};
use crate::core::registry::BlockRegistry;
use crate::core::BlockType;
use crate::render::migrate::VERSION_KEY;
use crate::render::tree::{render_tree, MAX_RENDER_DEPTH};

/// Test definition that echoes its inputs into the render body, so
/// assertions can see exactly what the renderer resolved.
struct EchoBlock {
    metadata: DefinitionMetadata,
    /// Upgrades v1 maps by uppercasing `title`, when enabled.
    migratable: bool,
}

impl EchoBlock {
    fn new(type_id: &str, variants: &[&str], version: u32) -> Self {
        Self {
            metadata: DefinitionMetadata {
                block_type: BlockType::new(type_id),
                name: format!("Echo {}", type_id),
                description: "Echoes resolved inputs".into(),
                variants: variants.iter().map(|v| v.to_string()).collect(),
                version,
                icon: "echo".into(),
                color: "#888888".into(),
            },
            migratable: false,
        }
    }

    fn migratable(mut self) -> Self {
        self.migratable = true;
        self
    }
}

impl BlockDefinition for EchoBlock {
    fn metadata(&self) -> &DefinitionMetadata {
        &self.metadata
    }

    fn migrate(&self, properties: &PropertyMap, from_version: u32) -> Option<PropertyMap> {
        if !self.migratable || from_version != 1 {
            return None;
        }
        let mut migrated = properties.clone();
        if let Some(title) = migrated.get("title").and_then(PropertyValue::as_string) {
            let upper = title.to_uppercase();
            migrated.insert("title".into(), PropertyValue::String(upper));
        }
        migrated.insert(VERSION_KEY.into(), PropertyValue::Integer(2));
        Some(migrated)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> JsonValue {
        let slot_names: Vec<&str> = ctx.slots.iter().map(|(name, _)| name).collect();
        json!({
            "variant": ctx.variant,
            "title": ctx.str_prop("title"),
            "version_marker": ctx.integer_prop(VERSION_KEY),
            "slot_names": slot_names,
            "slots": serde_json::to_value(
                ctx.slots.iter().collect::<Vec<_>>()
            ).unwrap_or_default(),
        })
    }
}

fn test_registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();
    registry
        .register(Arc::new(
            EchoBlock::new("hero.split", &["gallery", "simple"], 2).migratable(),
        ))
        .unwrap();
    registry
        .register(Arc::new(EchoBlock::new("cta.banner", &["centered"], 1)))
        .unwrap();
    registry
        .register(Arc::new(EchoBlock::new("layout.section", &["contained"], 3)))
        .unwrap();
    registry
}

// ── Variant resolution ──────────────────────────────────────────────────

#[test]
fn test_default_variant_is_first_declared() {
    let registry = test_registry();
    let nodes = vec![BlockNode::new("hero.split")];

    let outcome = render_tree(&registry, &nodes);
    assert_eq!(outcome.outputs[0].variant(), Some("gallery"));
    assert!(!outcome.has_diagnostics());
}

#[test]
fn test_render_is_deterministic_and_idempotent() {
    let registry = test_registry();
    let nodes = vec![
        BlockNode::new("hero.split").with_property("title", "A"),
        BlockNode::new("unknown.widget"),
    ];

    let first = render_tree(&registry, &nodes);
    let second = render_tree(&registry, &nodes);
    assert_eq!(first.outputs, second.outputs);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn test_declared_variant_is_used() {
    let registry = test_registry();
    let nodes = vec![BlockNode::new("hero.split").with_variant("simple")];

    let outcome = render_tree(&registry, &nodes);
    assert_eq!(outcome.outputs[0].variant(), Some("simple"));
    assert!(!outcome.has_diagnostics());
}

#[test]
fn test_invalid_variant_falls_back_with_diagnostic() {
    let registry = test_registry();
    let nodes = vec![BlockNode::new("hero.split").with_variant("cinematic")];

    let outcome = render_tree(&registry, &nodes);
    assert_eq!(outcome.outputs[0].variant(), Some("gallery"));

    let diagnostics: Vec<_> = outcome
        .diagnostics_of(DiagnosticKind::InvalidVariant)
        .collect();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("cinematic"));
}

// ── Unknown types and the 1:1 guarantee ─────────────────────────────────

#[test]
fn test_unknown_type_yields_placeholder() {
    let registry = test_registry();
    let nodes = vec![BlockNode::new("unknown.widget")];

    let outcome = render_tree(&registry, &nodes);
    assert_eq!(outcome.outputs.len(), 1);
    assert!(outcome.outputs[0].is_unresolved());
    assert_eq!(
        outcome.outputs[0].block_type(),
        &BlockType::new("unknown.widget")
    );
    assert_eq!(
        outcome.diagnostics_of(DiagnosticKind::UnknownType).count(),
        1
    );
}

#[test]
fn test_unknown_type_does_not_affect_siblings() {
    let registry = test_registry();
    let nodes = vec![
        BlockNode::new("hero.split").with_property("title", "Before"),
        BlockNode::new("unknown.widget"),
        BlockNode::new("cta.banner").with_property("title", "After"),
    ];

    let outcome = render_tree(&registry, &nodes);
    assert_eq!(outcome.outputs.len(), 3);
    assert_eq!(outcome.outputs[0].body().unwrap()["title"], "Before");
    assert!(outcome.outputs[1].is_unresolved());
    assert_eq!(outcome.outputs[2].body().unwrap()["title"], "After");
}

#[test]
fn test_unknown_type_slots_are_not_recursed() {
    let registry = test_registry();
    let nodes = vec![BlockNode::new("unknown.widget")
        .with_slot("body", vec![BlockNode::new("also.unknown")])];

    let outcome = render_tree(&registry, &nodes);
    assert_eq!(outcome.outputs.len(), 1);
    // Only the parent is diagnosed; the child was never visited.
    assert_eq!(outcome.diagnostics.len(), 1);
}

#[test]
fn test_output_count_matches_input_even_when_all_unresolvable() {
    let registry = test_registry();
    let nodes: Vec<BlockNode> = (0..5)
        .map(|i| BlockNode::new(format!("missing.block{}", i)))
        .collect();

    let outcome = render_tree(&registry, &nodes);
    assert_eq!(outcome.outputs.len(), nodes.len());
    assert!(outcome.outputs.iter().all(|output| output.is_unresolved()));
}

#[test]
fn test_empty_tree_renders_empty() {
    let registry = test_registry();
    let outcome = render_tree(&registry, &[]);
    assert!(outcome.outputs.is_empty());
    assert!(!outcome.has_diagnostics());
}

// ── Migration ───────────────────────────────────────────────────────────

#[test]
fn test_migration_upgrades_old_properties() {
    // hero.split is at version 2 with a v1 migration that uppercases the
    // title; the rendered output must reflect "OLD", not "Old".
    let registry = test_registry();
    let nodes = vec![BlockNode::new("hero.split")
        .with_property(VERSION_KEY, 1i64)
        .with_property("title", "Old")];

    let outcome = render_tree(&registry, &nodes);
    let body = outcome.outputs[0].body().unwrap();
    assert_eq!(body["title"], "OLD");
    assert_eq!(body["version_marker"], 2);
    assert!(!outcome.has_diagnostics());
}

#[test]
fn test_current_version_skips_migration() {
    let registry = test_registry();
    let nodes = vec![BlockNode::new("hero.split")
        .with_property(VERSION_KEY, 2i64)
        .with_property("title", "Fresh")];

    let outcome = render_tree(&registry, &nodes);
    assert_eq!(outcome.outputs[0].body().unwrap()["title"], "Fresh");
    assert!(!outcome.has_diagnostics());
}

#[test]
fn test_missing_marker_is_treated_as_current() {
    let registry = test_registry();
    let nodes = vec![BlockNode::new("hero.split").with_property("title", "Plain")];

    let outcome = render_tree(&registry, &nodes);
    assert_eq!(outcome.outputs[0].body().unwrap()["title"], "Plain");
    assert!(!outcome.has_diagnostics());
}

#[test]
fn test_version_gap_without_migration_renders_raw() {
    // layout.section is at version 3 with no migration support.
    let registry = test_registry();
    let nodes = vec![
        BlockNode::new("layout.section")
            .with_property(VERSION_KEY, 1i64)
            .with_property("title", "Raw"),
        BlockNode::new("cta.banner").with_property("title", "Sibling"),
    ];

    let outcome = render_tree(&registry, &nodes);
    // Best-effort render with the raw map, siblings unaffected.
    assert_eq!(outcome.outputs.len(), 2);
    assert_eq!(outcome.outputs[0].body().unwrap()["title"], "Raw");
    assert_eq!(outcome.outputs[1].body().unwrap()["title"], "Sibling");
    assert_eq!(
        outcome
            .diagnostics_of(DiagnosticKind::VersionMismatch)
            .count(),
        1
    );
}

#[test]
fn test_forward_version_gap_is_diagnosed_without_migrating() {
    let registry = test_registry();
    let nodes = vec![BlockNode::new("hero.split")
        .with_property(VERSION_KEY, 9i64)
        .with_property("title", "Future")];

    let outcome = render_tree(&registry, &nodes);
    // The title is untouched: migrate never ran.
    assert_eq!(outcome.outputs[0].body().unwrap()["title"], "Future");
    assert_eq!(
        outcome
            .diagnostics_of(DiagnosticKind::VersionMismatch)
            .count(),
        1
    );
}

#[test]
fn test_migration_does_not_mutate_the_input_node() {
    let registry = test_registry();
    let node = BlockNode::new("hero.split")
        .with_property(VERSION_KEY, 1i64)
        .with_property("title", "Old");
    let nodes = vec![node.clone()];

    let _ = render_tree(&registry, &nodes);
    assert_eq!(nodes[0], node, "input trees are never mutated in place");
}

// ── Slot composition ────────────────────────────────────────────────────

#[test]
fn test_slots_render_in_insertion_order() {
    let registry = test_registry();
    let nodes = vec![BlockNode::new("layout.section")
        .with_slot("footer", BlockNode::new("cta.banner"))
        .with_slot("body", vec![BlockNode::new("hero.split")])];

    let outcome = render_tree(&registry, &nodes);
    let body = outcome.outputs[0].body().unwrap();
    assert_eq!(body["slot_names"], json!(["footer", "body"]));
}

#[test]
fn test_array_slot_preserves_element_order() {
    let registry = test_registry();
    let children: Vec<BlockNode> = (0..4)
        .map(|i| BlockNode::new("cta.banner").with_id(format!("child-{}", i)))
        .collect();
    let nodes = vec![BlockNode::new("layout.section").with_slot("body", children)];

    let outcome = render_tree(&registry, &nodes);
    let body = outcome.outputs[0].body().unwrap();
    let rendered = &body["slots"][0][1]; // first slot entry, its output list
    for (index, output) in rendered.as_array().unwrap().iter().enumerate() {
        assert_eq!(output["node_id"], format!("child-{}", index));
    }
}

#[test]
fn test_nested_diagnostics_propagate_to_outcome() {
    let registry = test_registry();
    let nodes = vec![BlockNode::new("layout.section").with_slot(
        "body",
        vec![
            BlockNode::new("unknown.widget"),
            BlockNode::new("hero.split").with_variant("bogus"),
        ],
    )];

    let outcome = render_tree(&registry, &nodes);
    // One top-level output, two diagnostics from inside the slot.
    assert_eq!(outcome.outputs.len(), 1);
    assert_eq!(outcome.diagnostics_of(DiagnosticKind::UnknownType).count(), 1);
    assert_eq!(
        outcome.diagnostics_of(DiagnosticKind::InvalidVariant).count(),
        1
    );
}

#[test]
fn test_unresolved_child_appears_as_placeholder_in_parent_slots() {
    let registry = test_registry();
    let nodes = vec![BlockNode::new("layout.section")
        .with_slot("body", vec![BlockNode::new("unknown.widget")])];

    let outcome = render_tree(&registry, &nodes);
    let body = outcome.outputs[0].body().unwrap();
    let child = &body["slots"][0][1][0];
    assert_eq!(child["kind"], "unresolved");
    assert_eq!(child["type"], "unknown.widget");
}

#[test]
fn test_depth_bound_skips_slots_with_diagnostic() {
    let registry = test_registry();

    let mut node = BlockNode::new("hero.split");
    for _ in 0..(MAX_RENDER_DEPTH + 8) {
        node = BlockNode::new("layout.section").with_slot("body", vec![node]);
    }

    let outcome = render_tree(&registry, &[node]);
    assert_eq!(outcome.outputs.len(), 1, "the 1:1 guarantee holds at the bound");
    assert_eq!(
        outcome.diagnostics_of(DiagnosticKind::DepthExceeded).count(),
        1
    );
}
