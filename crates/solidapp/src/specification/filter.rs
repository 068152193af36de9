use super::Specification;
use tracing::debug;

/// Return references to the items satisfying `spec`, in input order.
///
/// The input is never modified and the returned references alias it.
pub fn filter<'a, T, S>(items: &'a [T], spec: &S) -> Vec<&'a T>
where
    S: Specification<T> + ?Sized,
{
    let matched: Vec<&T> = items.iter().filter(|item| spec.is_satisfied(*item)).collect();
    debug!(total = items.len(), matched = matched.len(), "filtered items");
    matched
}
