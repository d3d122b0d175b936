//! Property system for block configuration
//!
//! Block nodes carry free-form property maps loaded from stored page
//! configuration. Definitions declare the shape those maps are expected to
//! have via [`PropertySpec`]s, which the tree validator checks before a
//! render so malformed pages are caught early.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Property map attached to a block node.
pub type PropertyMap = HashMap<String, PropertyValue>;

/// Key under which a property map stores its schema version marker.
pub const VERSION_KEY: &str = "__version";

/// Property value
///
/// Untagged: deserializes from plain JSON. `Integer` is tried before
/// `Number` so whole numbers round-trip as integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// String value
    String(String),
    /// Integer number
    Integer(i64),
    /// Floating point number
    Number(f64),
    /// Boolean value
    Boolean(bool),
    /// Array of values
    Array(Vec<PropertyValue>),
    /// Object with key-value pairs
    Object(HashMap<String, PropertyValue>),
    /// Null value
    Null,
}

impl PropertyValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Try to convert to string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to convert to integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            PropertyValue::Number(n) => Some(*n as i64),
            _ => None,
        }
    }

    /// Try to convert to boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to convert to array
    pub fn as_array(&self) -> Option<&Vec<PropertyValue>> {
        match self {
            PropertyValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to convert to object
    pub fn as_object(&self) -> Option<&HashMap<String, PropertyValue>> {
        match self {
            PropertyValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// The [`PropertyKind`] this value satisfies.
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::String(_) => PropertyKind::String,
            PropertyValue::Number(_) | PropertyValue::Integer(_) => PropertyKind::Number,
            PropertyValue::Boolean(_) => PropertyKind::Boolean,
            PropertyValue::Array(_) => PropertyKind::Array,
            PropertyValue::Object(_) => PropertyKind::Object,
            PropertyValue::Null => PropertyKind::Null,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<u32> for PropertyValue {
    fn from(i: u32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(values: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(values)
    }
}

/// Property kinds a definition can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    /// String property
    String,
    /// Numeric property (integer or float)
    Number,
    /// Boolean property
    Boolean,
    /// Array property
    Array,
    /// Object property
    Object,
    /// Null (only produced by values, never declared)
    Null,
}

/// Declared property on a block definition
///
/// Specs drive the editor sidebar and the pre-render tree validation; the
/// renderer itself stays permissive and renders whatever the map holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Key in the node's property map
    pub id: String,
    /// Human-readable property name
    pub name: String,
    /// Expected value kind
    pub kind: PropertyKind,
    /// Property description
    pub description: String,
    /// Default value used when the key is absent
    pub default_value: PropertyValue,
    /// Whether this property is required
    pub required: bool,
    /// Optional constraints
    pub constraints: Option<PropertyConstraints>,
}

impl PropertySpec {
    /// Create a spec with the given key, kind and default.
    pub fn new(id: impl Into<String>, kind: PropertyKind, default_value: PropertyValue) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind,
            description: String::new(),
            default_value,
            required: false,
            constraints: None,
        }
    }

    /// Set the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the property as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach constraints.
    pub fn with_constraints(mut self, constraints: PropertyConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Check a node's value for this spec.
    ///
    /// `value` is the entry from the node's property map, or `None` when the
    /// key is absent. Returns human-readable problems; an empty vec means
    /// the value is acceptable.
    pub fn check(&self, value: Option<&PropertyValue>) -> Vec<String> {
        let mut problems = Vec::new();

        let value = match value {
            Some(v) => v,
            None => {
                if self.required {
                    problems.push(format!("required property '{}' is missing", self.id));
                }
                return problems;
            }
        };

        if value.is_null() {
            if self.required {
                problems.push(format!("required property '{}' is null", self.id));
            }
            return problems;
        }

        if value.kind() != self.kind {
            problems.push(format!(
                "property '{}' expects {:?}, got {:?}",
                self.id,
                self.kind,
                value.kind()
            ));
            return problems;
        }

        if let Some(constraints) = &self.constraints {
            problems.extend(constraints.check(&self.id, value));
        }

        problems
    }
}

/// Property constraints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyConstraints {
    /// Minimum value (for numbers)
    pub min: Option<f64>,
    /// Maximum value (for numbers)
    pub max: Option<f64>,
    /// Allowed values (for enumerated strings)
    pub allowed_values: Option<Vec<PropertyValue>>,
    /// Minimum length (for strings/arrays)
    pub min_length: Option<usize>,
    /// Maximum length (for strings/arrays)
    pub max_length: Option<usize>,
}

impl PropertyConstraints {
    /// Create a new empty constraints object
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum value
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum value
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set allowed values
    pub fn with_allowed_values(mut self, values: Vec<PropertyValue>) -> Self {
        self.allowed_values = Some(values);
        self
    }

    /// Set length constraints
    pub fn with_length_range(mut self, min_length: Option<usize>, max_length: Option<usize>) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    fn check(&self, id: &str, value: &PropertyValue) -> Vec<String> {
        let mut problems = Vec::new();

        if let Some(n) = value.as_number() {
            if let Some(min) = self.min {
                if n < min {
                    problems.push(format!("property '{}' is below minimum {}", id, min));
                }
            }
            if let Some(max) = self.max {
                if n > max {
                    problems.push(format!("property '{}' is above maximum {}", id, max));
                }
            }
        }

        if let Some(allowed) = &self.allowed_values {
            if !allowed.contains(value) {
                problems.push(format!("property '{}' is not one of the allowed values", id));
            }
        }

        let length = match value {
            PropertyValue::String(s) => Some(s.chars().count()),
            PropertyValue::Array(a) => Some(a.len()),
            _ => None,
        };
        if let Some(len) = length {
            if let Some(min_length) = self.min_length {
                if len < min_length {
                    problems.push(format!(
                        "property '{}' is shorter than minimum length {}",
                        id, min_length
                    ));
                }
            }
            if let Some(max_length) = self.max_length {
                if len > max_length {
                    problems.push(format!(
                        "property '{}' is longer than maximum length {}",
                        id, max_length
                    ));
                }
            }
        }

        problems
    }
}
