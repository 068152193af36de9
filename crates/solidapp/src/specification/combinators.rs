//! Composite and trivial specifications.

use super::Specification;
use std::fmt;

/// Satisfied when both children are satisfied.
///
/// The right child is only evaluated when the left one is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<A, B> And<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &A {
        &self.left
    }

    pub fn right(&self) -> &B {
        &self.right
    }
}

impl<T, A, B> Specification<T> for And<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) && self.right.is_satisfied(item)
    }
}

/// Satisfied when either child is satisfied.
///
/// The right child is only evaluated when the left one is not satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Or<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &A {
        &self.left
    }

    pub fn right(&self) -> &B {
        &self.right
    }
}

impl<T, A, B> Specification<T> for Or<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) || self.right.is_satisfied(item)
    }
}

/// Satisfied when the inner specification is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<A> {
    inner: A,
}

impl<A> Not<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<T: ?Sized, A: Specification<T>> Specification<T> for Not<A> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}

/// Satisfied by every item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysTrue;

impl<T: ?Sized> Specification<T> for AlwaysTrue {
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }
}

/// Satisfied by no item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysFalse;

impl<T: ?Sized> Specification<T> for AlwaysFalse {
    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }
}

/// A specification backed by a closure.
#[derive(Clone, Copy)]
pub struct FnSpec<F> {
    f: F,
}

impl<F> fmt::Debug for FnSpec<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSpec").finish_non_exhaustive()
    }
}

impl<T, F> Specification<T> for FnSpec<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self.f)(item)
    }
}

/// Wrap a closure as a specification.
pub fn from_fn<T: ?Sized, F: Fn(&T) -> bool>(f: F) -> FnSpec<F> {
    FnSpec { f }
}

/// Build an AND composite of two specifications.
pub fn and<A, B>(left: A, right: B) -> And<A, B> {
    And::new(left, right)
}

/// Build an OR composite of two specifications.
pub fn or<A, B>(left: A, right: B) -> Or<A, B> {
    Or::new(left, right)
}

/// Negate a specification.
pub fn not<A>(inner: A) -> Not<A> {
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Positive;

    impl Specification<i32> for Positive {
        fn is_satisfied(&self, n: &i32) -> bool {
            *n > 0
        }
    }

    struct Even;

    impl Specification<i32> for Even {
        fn is_satisfied(&self, n: &i32) -> bool {
            n % 2 == 0
        }
    }

    /// Counts how many times it was evaluated.
    struct Counting<'a> {
        calls: &'a Cell<usize>,
        answer: bool,
    }

    impl Specification<i32> for Counting<'_> {
        fn is_satisfied(&self, _item: &i32) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.answer
        }
    }

    #[test]
    fn and_requires_both() {
        let spec = and(Positive, Even);
        assert!(spec.is_satisfied(&4));
        assert!(!spec.is_satisfied(&3));
        assert!(!spec.is_satisfied(&-2));
    }

    #[test]
    fn or_requires_either() {
        let spec = or(Positive, Even);
        assert!(spec.is_satisfied(&3));
        assert!(spec.is_satisfied(&-2));
        assert!(!spec.is_satisfied(&-3));
    }

    #[test]
    fn not_inverts() {
        let spec = not(Positive);
        assert!(spec.is_satisfied(&-1));
        assert!(!spec.is_satisfied(&1));
    }

    #[test]
    fn method_chaining_matches_free_functions() {
        let chained = Positive.and(Even).or(AlwaysFalse);
        let nested = or(and(Positive, Even), AlwaysFalse);
        for n in -5..=5 {
            assert_eq!(chained.is_satisfied(&n), nested.is_satisfied(&n), "n = {n}");
        }
    }

    #[test]
    fn and_short_circuits_when_left_fails() {
        let calls = Cell::new(0);
        let spec = and(
            AlwaysFalse,
            Counting {
                calls: &calls,
                answer: true,
            },
        );
        assert!(!spec.is_satisfied(&1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn and_evaluates_right_when_left_passes() {
        let calls = Cell::new(0);
        let spec = and(
            AlwaysTrue,
            Counting {
                calls: &calls,
                answer: false,
            },
        );
        assert!(!spec.is_satisfied(&1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn or_short_circuits_when_left_passes() {
        let calls = Cell::new(0);
        let spec = or(
            AlwaysTrue,
            Counting {
                calls: &calls,
                answer: false,
            },
        );
        assert!(spec.is_satisfied(&1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn boxed_and_borrowed_specs_delegate() {
        let boxed: Box<dyn Specification<i32>> = Box::new(Positive);
        assert!(boxed.is_satisfied(&1));

        let inner = Even;
        let borrowed = &inner;
        assert!(borrowed.is_satisfied(&2));
        assert!(and(borrowed, boxed).is_satisfied(&2));
    }

    #[test]
    fn closures_become_specifications() {
        let small = from_fn(|n: &i32| n.abs() < 10);
        assert!(small.is_satisfied(&-9));
        assert!(!small.is_satisfied(&10));
    }

    #[test]
    fn constants_ignore_the_item() {
        assert!(Specification::<str>::is_satisfied(&AlwaysTrue, "anything"));
        assert!(!Specification::<str>::is_satisfied(&AlwaysFalse, "anything"));
    }
}
