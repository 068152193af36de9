//! Selection the closed way: one method per criterion.
//!
//! Every new criterion, and every combination of criteria, needs another
//! method here and another round of changes to already-tested code. Kept for
//! comparison with [`Catalog::select`](super::Catalog::select), which takes any
//! [`Specification`](crate::specification::Specification) instead.

use super::{Color, Product, Size};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        let mut matched = Vec::new();
        for product in products {
            if product.color() == color {
                matched.push(product);
            }
        }
        matched
    }

    pub fn by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        let mut matched = Vec::new();
        for product in products {
            if product.size() == size {
                matched.push(product);
            }
        }
        matched
    }

    pub fn by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        let mut matched = Vec::new();
        for product in products {
            if product.size() == size && product.color() == color {
                matched.push(product);
            }
        }
        matched
    }
}
