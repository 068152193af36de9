//! Property tests for specification filtering.

use proptest::prelude::*;

use solidapp::attributes::{try_filter, AttrExpr, AttrFilter, AttrValue, FilterOp};
use solidapp::catalog::{
    Color, ColorSpecification, Product, ProductFilter, Size, SizeSpecification,
};
use solidapp::specification::{filter, AlwaysFalse, AlwaysTrue, Specification};

fn product() -> impl Strategy<Value = Product> {
    (
        "[A-Za-z]{1,8}",
        prop::sample::select(Color::ALL.to_vec()),
        prop::sample::select(Size::ALL.to_vec()),
    )
        .prop_map(|(name, color, size)| Product::new(name, color, size))
}

fn products() -> impl Strategy<Value = Vec<Product>> {
    proptest::collection::vec(product(), 0..=24)
}

fn color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn size() -> impl Strategy<Value = Size> {
    prop::sample::select(Size::ALL.to_vec())
}

/// A `color` or `size` condition with either operator; matches about half the time or more.
fn attr_filter() -> impl Strategy<Value = AttrFilter> {
    let op = prop::sample::select(vec![FilterOp::Eq, FilterOp::Ne]);
    prop_oneof![
        (op.clone(), color())
            .prop_map(|(op, c)| AttrFilter::new("color", op, AttrValue::enumerated(c.as_str()))),
        (op, size())
            .prop_map(|(op, s)| AttrFilter::new("size", op, AttrValue::enumerated(s.as_str()))),
    ]
}

fn names(selected: &[&Product]) -> Vec<String> {
    selected.iter().map(|p| p.name().to_string()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Filtering never yields more items than it was given.
    #[test]
    fn property_filter_is_bounded(items in products(), c in color()) {
        let selected = filter(&items, &ColorSpecification::new(c));
        prop_assert!(selected.len() <= items.len());
    }

    /// PROPERTY: AlwaysTrue keeps everything, AlwaysFalse keeps nothing.
    #[test]
    fn property_constants(items in products()) {
        prop_assert_eq!(filter(&items, &AlwaysTrue).len(), items.len());
        prop_assert!(filter(&items, &AlwaysFalse).is_empty());
    }

    /// PROPERTY: Results keep the input order and every result is satisfied.
    #[test]
    fn property_order_preserved(items in products(), s in size()) {
        let spec = SizeSpecification::new(s);
        let selected = filter(&items, &spec);

        let expected: Vec<&Product> = items.iter().filter(|p| p.size() == s).collect();
        prop_assert_eq!(&selected, &expected);
        prop_assert!(selected.iter().all(|p| spec.is_satisfied(p)));
    }

    /// PROPERTY: AND is associative and commutative in its result.
    #[test]
    fn property_and_associative(
        items in products(),
        c1 in color(),
        s in size(),
        c2 in color(),
    ) {
        let a = ColorSpecification::new(c1).not();
        let b = SizeSpecification::new(s).not();
        let c = ColorSpecification::new(c2).not();

        let left = a.and(b).and(c);
        let right = a.and(b.and(c));
        let swapped = b.and(a);

        let expected: Vec<&Product> = items
            .iter()
            .filter(|p| p.color() != c1 && p.size() != s && p.color() != c2)
            .collect();
        prop_assert_eq!(&filter(&items, &left), &expected);
        prop_assert_eq!(&filter(&items, &right), &expected);
        prop_assert_eq!(filter(&items, &swapped), filter(&items, &a.and(b)));
    }

    /// PROPERTY: Attribute expressions group AND and OR associatively.
    #[test]
    fn property_attr_expr_associative(
        items in products(),
        a in attr_filter(),
        b in attr_filter(),
        c in attr_filter(),
    ) {
        let (a, b, c) = (AttrExpr::from(a), AttrExpr::from(b), AttrExpr::from(c));

        let and_left = a.clone().and(b.clone()).and(c.clone());
        let and_right = a.clone().and(b.clone().and(c.clone()));
        prop_assert_eq!(
            try_filter(&items, &and_left).unwrap(),
            try_filter(&items, &and_right).unwrap()
        );

        let or_left = a.clone().or(b.clone()).or(c.clone());
        let or_right = a.clone().or(b.clone().or(c.clone()));
        prop_assert_eq!(
            try_filter(&items, &or_left).unwrap(),
            try_filter(&items, &or_right).unwrap()
        );

        for item in &items {
            prop_assert_eq!(
                and_left.evaluate(item).unwrap(),
                a.evaluate(item).unwrap() && b.evaluate(item).unwrap() && c.evaluate(item).unwrap()
            );
        }
    }

    /// PROPERTY: The per-criterion filter agrees with the composed specifications.
    #[test]
    fn property_product_filter_agrees(items in products(), c in color(), s in size()) {
        prop_assert_eq!(
            ProductFilter.by_size_and_color(&items, s, c),
            filter(&items, &SizeSpecification::new(s).and(ColorSpecification::new(c)))
        );
    }

    /// PROPERTY: OR selects the union of its children, in input order.
    #[test]
    fn property_or_is_union(items in products(), c in color(), s in size()) {
        let either = ColorSpecification::new(c).or(SizeSpecification::new(s));
        let expected: Vec<&Product> = items
            .iter()
            .filter(|p| p.color() == c || p.size() == s)
            .collect();
        prop_assert_eq!(filter(&items, &either), expected);
    }

    /// PROPERTY: A spec and its negation partition the input.
    #[test]
    fn property_not_partitions(items in products(), c in color()) {
        let spec = ColorSpecification::new(c);
        let kept = filter(&items, &spec).len();
        let dropped = filter(&items, &spec.not()).len();
        prop_assert_eq!(kept + dropped, items.len());
    }

    /// PROPERTY: Filtering the result again with the same spec changes nothing.
    #[test]
    fn property_filter_idempotent(items in products(), c in color()) {
        let spec = ColorSpecification::new(c);
        let once: Vec<Product> = filter(&items, &spec).into_iter().cloned().collect();
        let twice = filter(&once, &spec);
        prop_assert_eq!(twice.len(), once.len());
    }
}

#[test]
fn grouping_does_not_change_a_non_empty_selection() {
    let items = vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
        Product::new("Boat", Color::Red, Size::Medium),
    ];
    let a = ColorSpecification::new(Color::Red).not();
    let b = SizeSpecification::new(Size::Small).not();
    let c = ColorSpecification::new(Color::Blue).not();

    assert_eq!(names(&filter(&items, &a.and(b).and(c))), vec!["Tree"]);
    assert_eq!(names(&filter(&items, &a.and(b.and(c)))), vec!["Tree"]);

    let expr = |s: &str| AttrExpr::from(AttrFilter::parse(s).unwrap());
    let left = expr("color!=red").and(expr("size!=small")).and(expr("color!=blue"));
    let right = expr("color!=red").and(expr("size!=small").and(expr("color!=blue")));
    assert_eq!(names(&try_filter(&items, &left).unwrap()), vec!["Tree"]);
    assert_eq!(names(&try_filter(&items, &right).unwrap()), vec!["Tree"]);
}

#[test]
fn green_and_large_selects_tree() {
    let items = vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ];
    let spec = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));
    assert_eq!(names(&filter(&items, &spec)), vec!["Tree"]);
}
