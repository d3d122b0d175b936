//! Migration resolver
//!
//! Stored property maps carry a `__version` marker naming the schema
//! version they were authored at. When a map is older than its definition,
//! the definition's migration function is invoked exactly once to bring it
//! forward; when the definition has no migration support, the renderer
//! proceeds best-effort with the raw map and records a diagnostic instead
//! of failing the node.

use crate::core::definition::BlockDefinition;
use crate::core::diagnostic::Diagnostic;
use crate::core::node::BlockNode;
use crate::core::property::{PropertyMap, PropertyValue};

pub use crate::core::property::VERSION_KEY;

/// Read the version marker out of a property map.
///
/// Absent or non-integer markers yield `None`, which the resolver treats
/// as "authored at the current version".
pub fn property_version(properties: &PropertyMap) -> Option<u32> {
    properties
        .get(VERSION_KEY)
        .and_then(PropertyValue::as_integer)
        .and_then(|version| u32::try_from(version).ok())
}

/// Bring a node's properties up to the definition's current version.
///
/// Returns the property map to render with, plus a `VersionMismatch`
/// diagnostic when a gap could not be bridged:
/// - marker older than the definition: `migrate` is invoked once; its
///   result replaces the properties and is stamped with the current
///   version. A `None` from `migrate` leaves the raw map in place and
///   records the diagnostic.
/// - marker newer than the definition (stored page ahead of the compiled
///   catalog): `migrate` is never invoked; raw map plus diagnostic.
/// - no marker, or marker equal to the current version: pass-through.
pub fn resolve_properties(
    definition: &dyn BlockDefinition,
    node: &BlockNode,
) -> (PropertyMap, Option<Diagnostic>) {
    let current = definition.version();

    let stored = match property_version(&node.properties) {
        Some(stored) => stored,
        None => return (node.properties.clone(), None),
    };

    if stored == current {
        return (node.properties.clone(), None);
    }

    if stored > current {
        return (
            node.properties.clone(),
            Some(Diagnostic::version_mismatch(node, stored, current)),
        );
    }

    match definition.migrate(&node.properties, stored) {
        Some(mut migrated) => {
            migrated.insert(
                VERSION_KEY.to_string(),
                PropertyValue::Integer(current as i64),
            );
            (migrated, None)
        }
        None => (
            node.properties.clone(),
            Some(Diagnostic::version_mismatch(node, stored, current)),
        ),
    }
}
