//! Built-in block domains
//!
//! Each domain groups related block families and exposes a no-argument
//! factory returning a registry populated with its definitions. The
//! definitions are compiled in, not loaded at runtime.

pub mod cta;
pub mod features;
pub mod hero;
pub mod layout;
pub mod testimonial;

use crate::core::registry::BlockRegistry;

/// Build a registry with every built-in domain registered.
///
/// Hosts composing whole pages want one registry that resolves all block
/// types; type ids are namespaced per domain, so the combined catalog
/// cannot collide.
pub fn create_page_registry() -> BlockRegistry {
    let mut registry = BlockRegistry::new();
    layout::register(&mut registry).expect("built-in layout definitions have unique types");
    hero::register(&mut registry).expect("built-in hero definitions have unique types");
    features::register(&mut registry).expect("built-in features definitions have unique types");
    testimonial::register(&mut registry).expect("built-in testimonial definitions have unique types");
    cta::register(&mut registry).expect("built-in CTA definitions have unique types");
    registry
}
