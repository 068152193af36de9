use crate::attributes::{AttrValue, Attributed};
use crate::error::SolidError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
    pub const NAMES: [&'static str; 3] = ["red", "green", "blue"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SolidError::InvalidValue {
                attr: "color".to_string(),
                value: s.to_string(),
                expected: Color::NAMES.join(", "),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];
    pub const NAMES: [&'static str; 3] = ["small", "medium", "large"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SolidError::InvalidValue {
                attr: "size".to_string(),
                value: s.to_string(),
                expected: Size::NAMES.join(", "),
            })
    }
}

/// A catalog entry. Immutable once built; identity is its position in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    color: Color,
    size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Attributed for Product {
    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        match name {
            "name" => Some(AttrValue::Text(self.name.clone())),
            "color" => Some(AttrValue::Enum(self.color.as_str().to_string())),
            "size" => Some(AttrValue::Enum(self.size.as_str().to_string())),
            _ => None,
        }
    }
}
