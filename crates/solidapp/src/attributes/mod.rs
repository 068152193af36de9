//! # Attribute System
//!
//! Typed specifications (see [`crate::specification`]) are the preferred way to
//! select items in code. User input, however, arrives as text: `color=green`,
//! `size!=large`. The attribute system bridges the two by addressing item
//! fields by name:
//!
//! - **Values**: [`AttrValue`] is the runtime representation of a field
//! - **Registry**: [`ATTRIBUTES`] lists which names exist and which values they accept
//! - **Access**: the [`Attributed`] trait exposes a field by name
//! - **Filtering**: [`AttrFilter`] and [`AttrExpr`] evaluate conditions against any
//!   [`Attributed`] item
//!
//! ## Attribute Kinds
//!
//! | Kind | Examples | Description |
//! |------|----------|-------------|
//! | `Text` | `name` | Free-form, compared exactly |
//! | `Enum` | `color`, `size` | Closed set of lowercase values |
//!
//! ## Missing Attributes
//!
//! Unlike typed specifications, attribute evaluation can fail: an item that does
//! not expose the requested attribute produces
//! [`SolidError::AttributeNotFound`](crate::error::SolidError::AttributeNotFound)
//! instead of silently counting as a non-match. A schema mismatch is a bug in the
//! caller, and hiding it behind an empty result would make it hard to spot.
//!
//! ## Usage
//!
//! ```ignore
//! let filters = vec![AttrFilter::parse("color=green")?, AttrFilter::parse("size=large")?];
//! let expr = AttrExpr::all(filters).expect("at least one filter");
//! let matches = try_filter(catalog.products(), &expr)?;
//! ```

mod filter;
mod spec;
mod value;

pub use filter::{try_filter, AttrExpr, AttrFilter, Attributed, FilterOp};
pub use spec::{attribute_names, get_spec, AttributeKind, AttributeSpec, ATTRIBUTES};
pub use value::AttrValue;
