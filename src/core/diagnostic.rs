//! Render diagnostics
//!
//! Per-node conditions at render time are never fatal: the renderer
//! degrades gracefully and records what happened as a [`Diagnostic`].
//! Diagnostics accumulate across a whole render call and are returned
//! alongside the outputs; they never interrupt the traversal.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::node::BlockNode;
use super::BlockType;

/// Kinds of non-fatal render diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Node type absent from the registry; a placeholder was emitted.
    UnknownType,
    /// Node variant not declared by the definition; fell back to default.
    InvalidVariant,
    /// Property version gap the definition could not migrate; rendered raw.
    VersionMismatch,
    /// Slot nesting exceeded the recursion bound; slots were skipped.
    DepthExceeded,
}

/// One non-fatal finding produced while rendering a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Id of the node the diagnostic refers to, if it had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Type of the node the diagnostic refers to.
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Diagnostic for a node whose type has no registered definition.
    pub fn unknown_type(node: &BlockNode) -> Self {
        Self {
            kind: DiagnosticKind::UnknownType,
            node_id: node.id.clone(),
            block_type: node.block_type.clone(),
            message: format!("no definition registered for type '{}'", node.block_type),
        }
    }

    /// Diagnostic for a variant the definition does not declare.
    pub fn invalid_variant(node: &BlockNode, requested: &str, fallback: &str) -> Self {
        Self {
            kind: DiagnosticKind::InvalidVariant,
            node_id: node.id.clone(),
            block_type: node.block_type.clone(),
            message: format!(
                "variant '{}' is not declared for '{}'; using '{}'",
                requested, node.block_type, fallback
            ),
        }
    }

    /// Diagnostic for a version gap the definition could not migrate.
    pub fn version_mismatch(node: &BlockNode, stored: u32, current: u32) -> Self {
        Self {
            kind: DiagnosticKind::VersionMismatch,
            node_id: node.id.clone(),
            block_type: node.block_type.clone(),
            message: format!(
                "properties at version {} cannot be migrated to version {}; rendering raw",
                stored, current
            ),
        }
    }

    /// Diagnostic for slot nesting beyond the recursion bound.
    pub fn depth_exceeded(node: &BlockNode, bound: usize) -> Self {
        Self {
            kind: DiagnosticKind::DepthExceeded,
            node_id: node.id.clone(),
            block_type: node.block_type.clone(),
            message: format!(
                "slot nesting exceeds the render depth bound of {}; slots skipped",
                bound
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node_id {
            Some(id) => write!(f, "[{:?}] {} ({}): {}", self.kind, self.block_type, id, self.message),
            None => write!(f, "[{:?}] {}: {}", self.kind, self.block_type, self.message),
        }
    }
}
