//! Tree validation
//!
//! A pre-render pass that checks a page tree against a registry: every
//! check the renderer would later paper over (unknown types, undeclared
//! variants, property shapes, version gaps, nesting depth) is surfaced
//! here with a path and a suggestion, so malformed pages are caught at
//! construction time instead of discovered as placeholders in output.
//!
//! Validation is advisory and never mutates the tree; the renderer stays
//! resilient regardless of whether this pass ran.

use std::collections::HashMap;

use crate::core::node::{BlockNode, SlotValue};
use crate::core::registry::BlockRegistry;

use super::migrate::{property_version, resolve_properties};
use super::tree::MAX_RENDER_DEPTH;

// ── Result types ────────────────────────────────────────────────────────────

/// A single validation finding with tree location and optional suggestion.
#[derive(Debug, Clone)]
pub struct TreeFinding {
    /// Path of the offending node, e.g. `nodes[0]/body[2]`.
    pub path: String,
    /// Human-readable description.
    pub message: String,
    /// Optional suggestion for how to fix it.
    pub suggestion: Option<String>,
}

/// Overall validation result.
#[derive(Debug, Clone)]
pub struct TreeValidationResult {
    pub valid: bool,
    pub errors: Vec<TreeFinding>,
    pub warnings: Vec<TreeFinding>,
}

impl TreeValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn add_error(&mut self, path: &str, message: impl Into<String>, suggestion: Option<&str>) {
        self.valid = false;
        self.errors.push(TreeFinding {
            path: path.to_string(),
            message: message.into(),
            suggestion: suggestion.map(|s| s.to_string()),
        });
    }

    fn add_warning(&mut self, path: &str, message: impl Into<String>, suggestion: Option<&str>) {
        self.warnings.push(TreeFinding {
            path: path.to_string(),
            message: message.into(),
            suggestion: suggestion.map(|s| s.to_string()),
        });
    }

    /// Merge another result into this one.
    fn merge(&mut self, other: TreeValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

// ── Validator ───────────────────────────────────────────────────────────────

/// Validates a page tree against a registry.
pub struct TreeValidator;

impl TreeValidator {
    /// Run every validation check against the given tree.
    pub fn validate(registry: &BlockRegistry, nodes: &[BlockNode]) -> TreeValidationResult {
        let flattened = flatten(nodes);
        let mut result = TreeValidationResult::ok();

        result.merge(Self::check_types_registered(registry, &flattened));
        result.merge(Self::check_variants_declared(registry, &flattened));
        result.merge(Self::check_property_specs(registry, &flattened));
        result.merge(Self::check_version_gaps(registry, &flattened));
        result.merge(Self::check_depth(nodes));
        result.merge(Self::check_duplicate_ids(&flattened));

        result
    }

    // ── Individual checks ───────────────────────────────────────────────

    /// Every node type must have a registered definition.
    fn check_types_registered(
        registry: &BlockRegistry,
        flattened: &[(String, &BlockNode)],
    ) -> TreeValidationResult {
        let mut result = TreeValidationResult::ok();
        for (path, node) in flattened {
            if !registry.contains(&node.block_type) {
                result.add_error(
                    path,
                    format!("unknown block type '{}'", node.block_type),
                    Some("register the definition or remove the node; rendering would emit a placeholder"),
                );
            }
        }
        result
    }

    /// A node's variant, when present, must be declared by its definition.
    fn check_variants_declared(
        registry: &BlockRegistry,
        flattened: &[(String, &BlockNode)],
    ) -> TreeValidationResult {
        let mut result = TreeValidationResult::ok();
        for (path, node) in flattened {
            let Some(definition) = registry.get(&node.block_type) else {
                continue;
            };
            if let Some(variant) = &node.variant {
                if !definition.metadata().variants.contains(variant) {
                    result.add_warning(
                        path,
                        format!(
                            "variant '{}' is not declared for '{}'",
                            variant, node.block_type
                        ),
                        Some("rendering falls back to the default variant"),
                    );
                }
            }
        }
        result
    }

    /// Property maps must satisfy their definition's declared specs.
    ///
    /// Checked against the shape the renderer would actually see, i.e.
    /// after migration — a stored v1 page with a working migration is not
    /// malformed.
    fn check_property_specs(
        registry: &BlockRegistry,
        flattened: &[(String, &BlockNode)],
    ) -> TreeValidationResult {
        let mut result = TreeValidationResult::ok();
        for (path, node) in flattened {
            let Some(definition) = registry.get(&node.block_type) else {
                continue;
            };
            let (effective, _) = resolve_properties(definition.as_ref(), node);
            for spec in definition.properties() {
                for problem in spec.check(effective.get(&spec.id)) {
                    result.add_error(path, problem, None);
                }
            }
        }
        result
    }

    /// Version gaps the definition cannot migrate render with raw properties.
    fn check_version_gaps(
        registry: &BlockRegistry,
        flattened: &[(String, &BlockNode)],
    ) -> TreeValidationResult {
        let mut result = TreeValidationResult::ok();
        for (path, node) in flattened {
            let Some(definition) = registry.get(&node.block_type) else {
                continue;
            };
            let Some(stored) = property_version(&node.properties) else {
                continue;
            };
            let current = definition.version();
            if stored < current && definition.migrate(&node.properties, stored).is_none() {
                result.add_warning(
                    path,
                    format!(
                        "properties at version {} have no migration to version {}",
                        stored, current
                    ),
                    Some("the node renders best-effort with raw properties"),
                );
            } else if stored > current {
                result.add_warning(
                    path,
                    format!(
                        "properties at version {} are newer than the definition's version {}",
                        stored, current
                    ),
                    Some("update the compiled catalog"),
                );
            }
        }
        result
    }

    /// Slot nesting must stay under the render depth bound.
    fn check_depth(nodes: &[BlockNode]) -> TreeValidationResult {
        let mut result = TreeValidationResult::ok();
        for (index, node) in nodes.iter().enumerate() {
            let depth = node.depth();
            if depth > MAX_RENDER_DEPTH {
                result.add_error(
                    &format!("nodes[{}]", index),
                    format!(
                        "slot nesting depth {} exceeds the bound of {}",
                        depth, MAX_RENDER_DEPTH
                    ),
                    Some("flatten the tree; the renderer skips slots past the bound"),
                );
            }
        }
        result
    }

    /// Node ids, when present, should be unique within one tree.
    fn check_duplicate_ids(flattened: &[(String, &BlockNode)]) -> TreeValidationResult {
        let mut result = TreeValidationResult::ok();
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (path, node) in flattened {
            let Some(id) = node.id.as_deref() else {
                continue;
            };
            match seen.get(id) {
                Some(first_path) => {
                    result.add_warning(
                        path,
                        format!("node id '{}' already used at {}", id, first_path),
                        Some("give each node a unique id"),
                    );
                }
                None => {
                    seen.insert(id, path.as_str());
                }
            }
        }
        result
    }
}

/// Flatten a tree into `(path, node)` pairs, parents before children.
fn flatten(nodes: &[BlockNode]) -> Vec<(String, &BlockNode)> {
    let mut flattened = Vec::new();
    for (index, node) in nodes.iter().enumerate() {
        collect(node, format!("nodes[{}]", index), &mut flattened);
    }
    flattened
}

fn collect<'a>(node: &'a BlockNode, path: String, out: &mut Vec<(String, &'a BlockNode)>) {
    out.push((path.clone(), node));
    for (name, value) in node.slots.iter() {
        match value {
            SlotValue::Single(child) => {
                collect(child, format!("{}/{}", path, name), out);
            }
            SlotValue::Many(children) => {
                for (index, child) in children.iter().enumerate() {
                    collect(child, format!("{}/{}[{}]", path, name, index), out);
                }
            }
        }
    }
}
