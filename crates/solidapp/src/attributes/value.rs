//! Attribute value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime representation of an attribute value.
///
/// Enum values are stored in their lowercase canonical form (`"green"`,
/// `"large"`), which is also how they are spelled in filter expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum AttrValue {
    /// Free-form text (e.g., `name`)
    Text(String),

    /// One value out of a closed set (e.g., `color` = "red" | "green" | "blue")
    Enum(String),
}

impl AttrValue {
    pub fn text(value: impl Into<String>) -> Self {
        AttrValue::Text(value.into())
    }

    pub fn enumerated(value: impl Into<String>) -> Self {
        AttrValue::Enum(value.into())
    }

    /// The raw string, whatever the kind.
    pub fn as_str(&self) -> &str {
        match self {
            AttrValue::Text(s) | AttrValue::Enum(s) => s,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_enum_with_same_string_differ() {
        assert_ne!(AttrValue::text("green"), AttrValue::enumerated("green"));
        assert_eq!(
            AttrValue::text("green").as_str(),
            AttrValue::enumerated("green").as_str()
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&AttrValue::enumerated("large")).unwrap();
        assert_eq!(json, r#"{"kind":"enum","value":"large"}"#);
    }
}
