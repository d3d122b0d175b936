//! Tree renderer
//!
//! `render_tree` walks a list of block nodes depth-first, resolving each
//! against the registry, migrating properties, and rendering slots before
//! their parent. Rendering is synchronous and side-effect-free: given the
//! same registry and tree it produces the same outcome, so one registry
//! and one tree value may be rendered concurrently from multiple threads.
//!
//! Per-node failures degrade instead of aborting: an unknown type becomes
//! a clearly marked placeholder, an undeclared variant falls back to the
//! default, an unbridgeable version gap renders raw. The output list always
//! has exactly one entry per top-level input node.

use crate::core::definition::{BlockOutput, RenderContext, RenderedSlots, SlotOutput};
use crate::core::diagnostic::Diagnostic;
use crate::core::node::{BlockNode, SlotValue};
use crate::core::registry::BlockRegistry;

use super::migrate::resolve_properties;

/// Hard bound on slot nesting depth.
///
/// Trees are plain values and cannot alias themselves, so this only guards
/// degenerate, pathologically deep pages. A node at the bound renders with
/// its slots skipped and a `DepthExceeded` diagnostic.
pub const MAX_RENDER_DEPTH: usize = 64;

/// Result of one render pass: outputs plus accumulated diagnostics.
#[derive(Debug, Clone, Default)]
pub struct RenderOutcome {
    /// One output per top-level input node, in input order.
    pub outputs: Vec<BlockOutput>,
    /// Non-fatal findings from the whole traversal.
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderOutcome {
    /// Whether any diagnostics were recorded.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Diagnostics of one kind.
    pub fn diagnostics_of(
        &self,
        kind: crate::core::diagnostic::DiagnosticKind,
    ) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }
}

/// Render a tree of block nodes against a registry.
///
/// Synchronous and deterministic. The output list is guaranteed to have
/// `nodes.len()` entries, placeholders included; diagnostics accumulate
/// across the call and never interrupt the traversal.
pub fn render_tree(registry: &BlockRegistry, nodes: &[BlockNode]) -> RenderOutcome {
    let mut diagnostics = Vec::new();
    let outputs = nodes
        .iter()
        .map(|node| render_node(registry, node, 0, &mut diagnostics))
        .collect();

    RenderOutcome {
        outputs,
        diagnostics,
    }
}

/// Render one node and, depth-first, everything under it.
fn render_node(
    registry: &BlockRegistry,
    node: &BlockNode,
    depth: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> BlockOutput {
    // 1. Resolve the definition. Unknown types yield a placeholder and do
    //    not recurse into slots.
    let definition = match registry.get(&node.block_type) {
        Some(definition) => definition,
        None => {
            diagnostics.push(Diagnostic::unknown_type(node));
            return BlockOutput::Unresolved {
                node_id: node.id.clone(),
                block_type: node.block_type.clone(),
            };
        }
    };

    // 2. Resolve the effective variant.
    let declared = &definition.metadata().variants;
    let variant = match &node.variant {
        Some(requested) if declared.contains(requested) => requested.clone(),
        Some(requested) => {
            let fallback = definition.default_variant();
            diagnostics.push(Diagnostic::invalid_variant(node, requested, fallback));
            fallback.to_string()
        }
        None => definition.default_variant().to_string(),
    };

    // 3. Migrate properties.
    let (properties, version_diagnostic) = resolve_properties(definition.as_ref(), node);
    if let Some(diagnostic) = version_diagnostic {
        diagnostics.push(diagnostic);
    }

    // 4. Render slots depth-first, in slot insertion order.
    let mut slots = RenderedSlots::new();
    if !node.slots.is_empty() {
        if depth + 1 >= MAX_RENDER_DEPTH {
            diagnostics.push(Diagnostic::depth_exceeded(node, MAX_RENDER_DEPTH));
        } else {
            for (name, value) in node.slots.iter() {
                let output = match value {
                    SlotValue::Single(child) => {
                        SlotOutput::Single(render_node(registry, child, depth + 1, diagnostics))
                    }
                    SlotValue::Many(children) => SlotOutput::Many(
                        children
                            .iter()
                            .map(|child| render_node(registry, child, depth + 1, diagnostics))
                            .collect(),
                    ),
                };
                slots.insert(name, output);
            }
        }
    }

    // 5. Render the node itself.
    let ctx = RenderContext {
        node_id: node.id.as_deref(),
        variant: &variant,
        properties: &properties,
        slots: &slots,
    };
    let body = definition.render(&ctx);

    BlockOutput::Block {
        node_id: node.id.clone(),
        block_type: node.block_type.clone(),
        variant,
        body,
    }
}
