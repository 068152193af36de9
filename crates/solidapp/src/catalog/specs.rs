//! Typed product specifications.
//!
//! Each criterion is its own type. Adding a new one never touches
//! [`filter`](crate::specification::filter) or the existing criteria.

use super::{Color, Product, Size};
use crate::specification::Specification;

/// Products of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.color() == self.color
    }
}

/// Products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.size() == self.size
    }
}

/// Products whose name matches exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpecification {
    name: String,
}

impl NameSpecification {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Specification<Product> for NameSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.name() == self.name
    }
}
