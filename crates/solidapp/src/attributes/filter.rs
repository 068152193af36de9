//! Attribute filtering.
//!
//! This module provides a unified way to filter items based on attribute values.
//! Instead of a separate filter function per attribute, `AttrFilter` expresses a
//! single condition and `AttrExpr` combines conditions with AND, OR and NOT.

use super::{get_spec, AttrValue};
use crate::error::{Result, SolidError};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Access to an item's fields by attribute name.
pub trait Attributed {
    /// Returns `None` when the item has no attribute with that name.
    fn get_attr(&self, name: &str) -> Option<AttrValue>;
}

/// Filter operation for comparing attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact equality match.
    Eq,
    /// Not equal.
    Ne,
}

impl FilterOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::Ne => "!=",
        }
    }
}

/// A filter condition on an attribute.
///
/// Combines an attribute name, an operation, and a value to match against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrFilter {
    /// The attribute name (e.g., "color", "size")
    pub attr: String,
    /// The filter operation
    pub op: FilterOp,
    /// The value to compare against
    pub value: AttrValue,
}

impl AttrFilter {
    /// Create a new filter condition.
    pub fn new(attr: impl Into<String>, op: FilterOp, value: AttrValue) -> Self {
        Self {
            attr: attr.into(),
            op,
            value,
        }
    }

    /// Convenience: create an equality filter.
    pub fn eq(attr: impl Into<String>, value: AttrValue) -> Self {
        Self::new(attr, FilterOp::Eq, value)
    }

    /// Convenience: create a not-equal filter.
    pub fn ne(attr: impl Into<String>, value: AttrValue) -> Self {
        Self::new(attr, FilterOp::Ne, value)
    }

    /// Parse a condition such as `color=green`, `size==large` or `size!=small`.
    ///
    /// The attribute must exist in the registry and the value must be valid for
    /// its kind.
    pub fn parse(expr: &str) -> Result<Self> {
        let (attr, op, raw) = if let Some((attr, raw)) = expr.split_once("!=") {
            (attr, FilterOp::Ne, raw)
        } else if let Some((attr, raw)) = expr.split_once("==") {
            (attr, FilterOp::Eq, raw)
        } else if let Some((attr, raw)) = expr.split_once('=') {
            (attr, FilterOp::Eq, raw)
        } else {
            return Err(SolidError::InvalidExpression(format!(
                "'{}' (expected <attribute>=<value> or <attribute>!=<value>)",
                expr
            )));
        };

        let attr = attr.trim();
        if attr.is_empty() || raw.trim().is_empty() {
            return Err(SolidError::InvalidExpression(format!(
                "'{}' (attribute and value must not be empty)",
                expr
            )));
        }

        let spec = get_spec(attr).ok_or_else(|| SolidError::UnknownAttribute(attr.to_string()))?;
        if !spec.filterable {
            return Err(SolidError::InvalidExpression(format!(
                "'{}' (attribute '{}' cannot be filtered)",
                expr, spec.name
            )));
        }
        let value = spec.parse_value(raw)?;
        Ok(Self::new(spec.name, op, value))
    }

    /// Check if this filter matches the given item.
    ///
    /// Fails with `AttributeNotFound` if the item does not expose the attribute.
    /// A value of a different kind never matches `Eq`.
    pub fn matches<T: Attributed + ?Sized>(&self, item: &T) -> Result<bool> {
        let attr_value = item
            .get_attr(&self.attr)
            .ok_or_else(|| SolidError::AttributeNotFound(self.attr.clone()))?;

        Ok(match self.op {
            FilterOp::Eq => attr_value == self.value,
            FilterOp::Ne => attr_value != self.value,
        })
    }
}

impl FromStr for AttrFilter {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AttrFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.attr, self.op.symbol(), self.value)
    }
}

/// A boolean expression over attribute filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrExpr {
    Match(AttrFilter),
    And(Box<AttrExpr>, Box<AttrExpr>),
    Or(Box<AttrExpr>, Box<AttrExpr>),
    Not(Box<AttrExpr>),
}

impl AttrExpr {
    pub fn and(self, other: AttrExpr) -> Self {
        AttrExpr::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: AttrExpr) -> Self {
        AttrExpr::Or(Box::new(self), Box::new(other))
    }

    pub fn negate(self) -> Self {
        AttrExpr::Not(Box::new(self))
    }

    /// AND together all filters, left to right. `None` when there are none.
    pub fn all(filters: impl IntoIterator<Item = AttrFilter>) -> Option<Self> {
        filters
            .into_iter()
            .map(AttrExpr::Match)
            .reduce(AttrExpr::and)
    }

    /// OR together all filters, left to right. `None` when there are none.
    pub fn any(filters: impl IntoIterator<Item = AttrFilter>) -> Option<Self> {
        filters
            .into_iter()
            .map(AttrExpr::Match)
            .reduce(AttrExpr::or)
    }

    /// Evaluate against an item, short-circuiting AND and OR.
    ///
    /// The first `AttributeNotFound` encountered is returned as-is. Branches that
    /// are skipped by short-circuiting are never inspected.
    pub fn evaluate<T: Attributed + ?Sized>(&self, item: &T) -> Result<bool> {
        match self {
            AttrExpr::Match(filter) => filter.matches(item),
            AttrExpr::And(left, right) => Ok(left.evaluate(item)? && right.evaluate(item)?),
            AttrExpr::Or(left, right) => Ok(left.evaluate(item)? || right.evaluate(item)?),
            AttrExpr::Not(inner) => Ok(!inner.evaluate(item)?),
        }
    }
}

impl From<AttrFilter> for AttrExpr {
    fn from(filter: AttrFilter) -> Self {
        AttrExpr::Match(filter)
    }
}

impl fmt::Display for AttrExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrExpr::Match(filter) => write!(f, "{}", filter),
            AttrExpr::And(left, right) => write!(f, "({} AND {})", left, right),
            AttrExpr::Or(left, right) => write!(f, "({} OR {})", left, right),
            AttrExpr::Not(inner) => write!(f, "NOT {}", inner),
        }
    }
}

/// Return references to the items matching `expr`, in input order.
///
/// Stops at the first item that cannot be evaluated; no partial result is
/// returned in that case.
pub fn try_filter<'a, T: Attributed>(items: &'a [T], expr: &AttrExpr) -> Result<Vec<&'a T>> {
    let mut matched = Vec::new();
    for item in items {
        if expr.evaluate(item)? {
            matched.push(item);
        }
    }
    debug!(total = items.len(), matched = matched.len(), %expr, "filtered items by attributes");
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Color, Product, Size};

    /// An item that only knows its color.
    struct Swatch(&'static str);

    impl Attributed for Swatch {
        fn get_attr(&self, name: &str) -> Option<AttrValue> {
            match name {
                "color" => Some(AttrValue::enumerated(self.0)),
                _ => None,
            }
        }
    }

    fn apple() -> Product {
        Product::new("Apple", Color::Green, Size::Small)
    }

    fn house() -> Product {
        Product::new("House", Color::Blue, Size::Large)
    }

    #[test]
    fn filter_eq_enum() {
        let filter = AttrFilter::eq("color", AttrValue::enumerated("green"));

        assert!(filter.matches(&apple()).unwrap());
        assert!(!filter.matches(&house()).unwrap());
    }

    #[test]
    fn filter_ne_enum() {
        let filter = AttrFilter::ne("color", AttrValue::enumerated("green"));

        assert!(!filter.matches(&apple()).unwrap());
        assert!(filter.matches(&house()).unwrap());
    }

    #[test]
    fn filter_eq_text() {
        let filter = AttrFilter::eq("name", AttrValue::text("House"));

        assert!(filter.matches(&house()).unwrap());
        assert!(!filter.matches(&apple()).unwrap());
    }

    #[test]
    fn filter_kind_mismatch_never_equals() {
        let filter = AttrFilter::eq("color", AttrValue::text("green"));
        assert!(!filter.matches(&apple()).unwrap());
    }

    #[test]
    fn filter_missing_attribute_fails_fast() {
        let filter = AttrFilter::eq("size", AttrValue::enumerated("large"));
        match filter.matches(&Swatch("green")) {
            Err(SolidError::AttributeNotFound(attr)) => assert_eq!(attr, "size"),
            other => panic!("Expected AttributeNotFound, got {other:?}"),
        }
    }

    #[test]
    fn parse_accepts_all_operators() {
        let eq = AttrFilter::parse("color=green").unwrap();
        assert_eq!(eq, AttrFilter::eq("color", AttrValue::enumerated("green")));

        let eq2 = AttrFilter::parse("size == Large").unwrap();
        assert_eq!(eq2, AttrFilter::eq("size", AttrValue::enumerated("large")));

        let ne = AttrFilter::parse("size!=small").unwrap();
        assert_eq!(ne, AttrFilter::ne("size", AttrValue::enumerated("small")));
    }

    #[test]
    fn parse_rejects_unknown_attribute() {
        assert!(matches!(
            AttrFilter::parse("weight=3"),
            Err(SolidError::UnknownAttribute(attr)) if attr == "weight"
        ));
    }

    #[test]
    fn parse_rejects_invalid_enum_value() {
        assert!(matches!(
            AttrFilter::parse("color=purple"),
            Err(SolidError::InvalidValue { .. })
        ));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(
            AttrFilter::parse("green"),
            Err(SolidError::InvalidExpression(_))
        ));
        assert!(matches!(
            AttrFilter::parse("color="),
            Err(SolidError::InvalidExpression(_))
        ));
        assert!(matches!(
            AttrFilter::parse("=green"),
            Err(SolidError::InvalidExpression(_))
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let filter: AttrFilter = "size!=small".parse().unwrap();
        assert_eq!(filter.to_string(), "size!=small");
    }

    #[test]
    fn expr_all_and_any() {
        let green = AttrFilter::eq("color", AttrValue::enumerated("green"));
        let large = AttrFilter::eq("size", AttrValue::enumerated("large"));

        let both = AttrExpr::all([green.clone(), large.clone()]).unwrap();
        let either = AttrExpr::any([green, large]).unwrap();

        assert!(!both.evaluate(&apple()).unwrap());
        assert!(!both.evaluate(&house()).unwrap());
        assert!(either.evaluate(&apple()).unwrap());
        assert!(either.evaluate(&house()).unwrap());
    }

    #[test]
    fn expr_all_of_nothing_is_none() {
        assert!(AttrExpr::all(Vec::new()).is_none());
        assert!(AttrExpr::any(Vec::new()).is_none());
    }

    #[test]
    fn expr_negate() {
        let expr = AttrExpr::from(AttrFilter::eq("color", AttrValue::enumerated("blue"))).negate();
        assert!(expr.evaluate(&apple()).unwrap());
        assert!(!expr.evaluate(&house()).unwrap());
    }

    #[test]
    fn expr_and_short_circuits_before_missing_attribute() {
        // The right side would fail on a Swatch, but the left side is already false.
        let expr = AttrExpr::from(AttrFilter::eq("color", AttrValue::enumerated("red")))
            .and(AttrFilter::eq("size", AttrValue::enumerated("large")).into());
        assert!(!expr.evaluate(&Swatch("green")).unwrap());
        assert!(expr.evaluate(&Swatch("red")).is_err());
    }

    #[test]
    fn expr_display_is_parenthesized() {
        let expr = AttrExpr::all([
            AttrFilter::parse("color=green").unwrap(),
            AttrFilter::parse("size=large").unwrap(),
        ])
        .unwrap();
        assert_eq!(expr.to_string(), "(color=green AND size=large)");
    }

    #[test]
    fn try_filter_preserves_order() {
        let items = vec![apple(), house(), Product::new("Tree", Color::Green, Size::Large)];
        let expr = AttrExpr::from(AttrFilter::parse("color=green").unwrap());
        let names: Vec<&str> = try_filter(&items, &expr)
            .unwrap()
            .into_iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(names, vec!["Apple", "Tree"]);
    }

    #[test]
    fn try_filter_surfaces_missing_attribute() {
        let items = vec![Swatch("green"), Swatch("blue")];
        let expr = AttrExpr::from(AttrFilter::parse("size=large").unwrap());
        assert!(matches!(
            try_filter(&items, &expr),
            Err(SolidError::AttributeNotFound(_))
        ));
    }

    #[test]
    fn try_filter_on_empty_input() {
        let items: Vec<Product> = Vec::new();
        let expr = AttrExpr::from(AttrFilter::parse("color=red").unwrap());
        assert!(try_filter(&items, &expr).unwrap().is_empty());
    }
}
