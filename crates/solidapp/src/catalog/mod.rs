//! # Product Catalog
//!
//! A catalog is an ordered, read-only list of [`Product`]s. Filtering never
//! reorders or copies products: results are references into the catalog.
//!
//! Catalogs come from two places:
//! - [`Catalog::sample`]: the built-in three products (Apple, Tree, House)
//! - [`Catalog::load`]: a JSON file holding an array of products:
//!
//! ```json
//! [
//!   { "name": "Apple", "color": "green", "size": "small" },
//!   { "name": "House", "color": "blue", "size": "large" }
//! ]
//! ```
//!
//! A [`CatalogSource`] names where the catalog lives without reading it, so a
//! broken catalog file only matters to callers that actually select products.

mod model;
mod naive;
mod specs;

pub use model::{Color, Product, Size};
pub use naive::ProductFilter;
pub use specs::{ColorSpecification, NameSpecification, SizeSpecification};

use crate::attributes::{try_filter, AttrExpr};
use crate::error::Result;
use crate::specification::{filter, Specification};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The three products every SOLID walkthrough starts with.
    pub fn sample() -> Self {
        Self::new(vec![
            Product::new("Apple", Color::Green, Size::Small),
            Product::new("Tree", Color::Green, Size::Large),
            Product::new("House", Color::Blue, Size::Large),
        ])
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products satisfying a typed specification.
    pub fn select<S: Specification<Product> + ?Sized>(&self, spec: &S) -> Vec<&Product> {
        filter(&self.products, spec)
    }

    /// Products matching an attribute expression.
    pub fn select_by_attrs(&self, expr: &AttrExpr) -> Result<Vec<&Product>> {
        try_filter(&self.products, expr)
    }
}

/// Where a catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The built-in [`Catalog::sample`]
    #[default]
    Sample,
    /// A JSON file, read on every [`CatalogSource::load`]
    File(PathBuf),
    /// A catalog already in memory
    Inline(Catalog),
}

impl CatalogSource {
    pub fn load(&self) -> Result<Cow<'_, Catalog>> {
        match self {
            CatalogSource::Sample => Ok(Cow::Owned(Catalog::sample())),
            CatalogSource::File(path) => Catalog::load(path).map(Cow::Owned),
            CatalogSource::Inline(catalog) => Ok(Cow::Borrowed(catalog)),
        }
    }
}

impl From<Catalog> for CatalogSource {
    fn from(catalog: Catalog) -> Self {
        CatalogSource::Inline(catalog)
    }
}
