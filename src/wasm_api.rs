//! WASM API — `#[wasm_bindgen]` exports matching the page editor's module
//! interface.
//!
//! This module is only compiled when targeting `wasm32`. It provides:
//! - `init_registry` / `destroy_registry` — lifecycle
//! - `get_block_types` — catalog discovery for the editor palette
//! - `find_preset` — preset lookup by opaque id
//! - `validate_tree` — pre-render page validation
//! - `render_tree` — render a page tree to outputs plus diagnostics

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::core::node::BlockNode;
use crate::core::registry::BlockRegistry;
use crate::domains::create_page_registry;
use crate::render::tree::render_tree as render_tree_inner;
use crate::render::validate::TreeValidator;

// ── Global state ────────────────────────────────────────────────────────────

thread_local! {
    static REGISTRY: RefCell<Option<BlockRegistry>> = RefCell::new(None);
}

fn with_registry<R>(f: impl FnOnce(&BlockRegistry) -> R) -> Result<R, String> {
    REGISTRY.with(|cell| {
        let borrow = cell.borrow();
        match borrow.as_ref() {
            Some(registry) => Ok(f(registry)),
            None => Err("Registry not initialized. Call init_registry() first.".into()),
        }
    })
}

// ── Response types ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct BlockTypeInfo {
    #[serde(rename = "type")]
    block_type: String,
    name: String,
    domain: String,
    description: String,
    variants: Vec<String>,
    version: u32,
    icon: String,
    color: String,
}

#[derive(Serialize)]
struct ValidationResponse {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

#[derive(Serialize)]
struct RenderResponse {
    outputs: serde_json::Value,
    diagnostics: serde_json::Value,
}

fn json_err(msg: impl Into<String>) -> String {
    serde_json::to_string(&ErrorResponse { error: msg.into() }).unwrap_or_default()
}

// ── Exported functions ──────────────────────────────────────────────────────

#[wasm_bindgen]
pub fn init_registry() {
    console_error_panic_hook::set_once();

    REGISTRY.with(|cell| {
        *cell.borrow_mut() = Some(create_page_registry());
    });
}

#[wasm_bindgen]
pub fn destroy_registry() {
    REGISTRY.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

#[wasm_bindgen]
pub fn get_block_types() -> String {
    match with_registry(|registry| {
        registry
            .list()
            .iter()
            .map(|definition| {
                let meta = definition.metadata();
                BlockTypeInfo {
                    block_type: meta.block_type.as_str().to_string(),
                    name: meta.name.clone(),
                    domain: meta.block_type.domain().to_string(),
                    description: meta.description.clone(),
                    variants: meta.variants.clone(),
                    version: meta.version,
                    icon: meta.icon.clone(),
                    color: meta.color.clone(),
                }
            })
            .collect::<Vec<_>>()
    }) {
        Ok(types) => serde_json::to_string(&types).unwrap_or_default(),
        Err(e) => json_err(e),
    }
}

#[wasm_bindgen]
pub fn find_preset(id: &str) -> String {
    match with_registry(|registry| registry.find_preset(id).cloned()) {
        Ok(Some(preset)) => serde_json::to_string(&preset).unwrap_or_default(),
        Ok(None) => "null".into(),
        Err(e) => json_err(e),
    }
}

#[wasm_bindgen]
pub fn validate_tree(tree_json: &str) -> String {
    let nodes: Vec<BlockNode> = match serde_json::from_str(tree_json) {
        Ok(nodes) => nodes,
        Err(e) => {
            return serde_json::to_string(&ValidationResponse {
                valid: false,
                errors: vec![format!("Invalid tree JSON: {}", e)],
                warnings: vec![],
            })
            .unwrap_or_default();
        }
    };

    match with_registry(|registry| TreeValidator::validate(registry, &nodes)) {
        Ok(result) => serde_json::to_string(&ValidationResponse {
            valid: result.valid,
            errors: result
                .errors
                .iter()
                .map(|f| format!("{}: {}", f.path, f.message))
                .collect(),
            warnings: result
                .warnings
                .iter()
                .map(|f| format!("{}: {}", f.path, f.message))
                .collect(),
        })
        .unwrap_or_default(),
        Err(e) => serde_json::to_string(&ValidationResponse {
            valid: false,
            errors: vec![e],
            warnings: vec![],
        })
        .unwrap_or_default(),
    }
}

#[wasm_bindgen]
pub fn render_tree(tree_json: &str) -> String {
    let nodes: Vec<BlockNode> = match serde_json::from_str(tree_json) {
        Ok(nodes) => nodes,
        Err(e) => return json_err(format!("Invalid tree JSON: {}", e)),
    };

    match with_registry(|registry| render_tree_inner(registry, &nodes)) {
        Ok(outcome) => serde_json::to_string(&RenderResponse {
            outputs: serde_json::to_value(&outcome.outputs).unwrap_or_default(),
            diagnostics: serde_json::to_value(&outcome.diagnostics).unwrap_or_default(),
        })
        .unwrap_or_default(),
        Err(e) => json_err(e),
    }
}
