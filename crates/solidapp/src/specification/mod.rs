//! # Specification Pattern
//!
//! Open for extension, closed for modification. The naive way to build a
//! product selector is one method per criterion (`filter_by_color`,
//! `filter_by_size`, `filter_by_color_and_size`, ...), which means touching
//! already-tested code every time a new criterion shows up.
//!
//! Instead, each criterion is a [`Specification`]: a small value that answers
//! "does this item qualify?". The [`filter`] function is written once and never
//! changes; new criteria are new types, and complex criteria are built by
//! composing existing ones.
//!
//! ## Building Blocks
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`And`] | both children satisfied (short-circuits on the left) |
//! | [`Or`] | either child satisfied (short-circuits on the left) |
//! | [`Not`] | child not satisfied |
//! | [`AlwaysTrue`] / [`AlwaysFalse`] | identity elements for AND / OR |
//! | [`FnSpec`] | ad-hoc criterion from a closure, see [`from_fn`] |
//!
//! ## Usage
//!
//! ```ignore
//! let green_and_large = ColorSpecification::new(Color::Green)
//!     .and(SizeSpecification::new(Size::Large));
//! let matches = filter(&products, &green_and_large);
//! ```
//!
//! ## Algebra
//!
//! Evaluation takes `&self` and `&T`, so a specification can never mutate the
//! item or itself. That makes AND/OR associative and order-independent in
//! their result, so `a.and(b).and(c)` and `a.and(b.and(c))` always select the
//! same items.

mod combinators;
mod filter;

pub use combinators::{and, from_fn, not, or, AlwaysFalse, AlwaysTrue, And, FnSpec, Not, Or};
pub use filter::filter;

/// A criterion an item either satisfies or not.
pub trait Specification<T: ?Sized> {
    /// Check whether `item` satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Combine with `other` using logical AND.
    fn and<S>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And::new(self, other)
    }

    /// Combine with `other` using logical OR.
    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or::new(self, other)
    }

    /// Negate this specification.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}
