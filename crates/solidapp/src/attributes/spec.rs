//! Attribute specifications and registry.
//!
//! This module defines the schema for product attributes: what kind of value
//! each one holds and, for enums, which values are valid.

use super::AttrValue;
use crate::catalog::{Color, Size};
use crate::error::{Result, SolidError};

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Free-form string, compared exactly (e.g., `name`)
    Text,

    /// Closed set of lowercase values (e.g., `color`, `size`)
    Enum,
}

/// Specification for a single attribute.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    /// The attribute name used in filter expressions (e.g., "color")
    pub name: &'static str,

    /// The kind of value this attribute holds
    pub kind: AttributeKind,

    /// Whether the attribute may appear in filter expressions
    pub filterable: bool,

    /// Valid values for `Enum` attributes. Empty for `Text`.
    pub values: &'static [&'static str],
}

impl AttributeSpec {
    const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            filterable: true,
            values: &[],
        }
    }

    const fn with_values(mut self, values: &'static [&'static str]) -> Self {
        self.values = values;
        self
    }

    /// Turn raw user input into a value of this attribute's kind.
    ///
    /// Enum input is matched case-insensitively and normalized to lowercase.
    pub fn parse_value(&self, raw: &str) -> Result<AttrValue> {
        let raw = raw.trim();
        match self.kind {
            AttributeKind::Text => Ok(AttrValue::Text(raw.to_string())),
            AttributeKind::Enum => {
                let normalized = raw.to_lowercase();
                if self.values.contains(&normalized.as_str()) {
                    Ok(AttrValue::Enum(normalized))
                } else {
                    Err(SolidError::InvalidValue {
                        attr: self.name.to_string(),
                        value: raw.to_string(),
                        expected: self.values.join(", "),
                    })
                }
            }
        }
    }
}

/// Registry of all product attributes.
///
/// Adding a new attribute means adding an entry here and exposing it from
/// `Product::get_attr`.
pub const ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("name", AttributeKind::Text),
    AttributeSpec::new("color", AttributeKind::Enum).with_values(&Color::NAMES),
    AttributeSpec::new("size", AttributeKind::Enum).with_values(&Size::NAMES),
];

/// Look up an attribute spec by name.
pub fn get_spec(name: &str) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|spec| spec.name == name)
}

/// All attribute names, in registry order.
pub fn attribute_names() -> impl Iterator<Item = &'static str> {
    ATTRIBUTES.iter().map(|spec| spec.name)
}
