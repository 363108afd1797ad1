//! Size and ordering properties of the product enumerator.

use kase::{kases, kases_default, Case, LabelSet};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn nested_loops(a: &[u8], b: &[u8], c: &[u8]) -> Vec<(u8, u8, u8)> {
    let mut out = Vec::new();
    for x in a {
        for y in b {
            for z in c {
                out.push((*x, *y, *z));
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn product_size_is_product_of_domain_sizes(
        a in prop::collection::vec(any::<u8>(), 0..5),
        b in prop::collection::vec(any::<u8>(), 0..5),
        c in prop::collection::vec(any::<u8>(), 0..5),
    ) {
        let expected = a.len() * b.len() * c.len();
        let product = kases_default((a, b, c));
        prop_assert_eq!(product.total(), Some(expected));
        prop_assert_eq!(product.count(), expected);
    }

    #[test]
    fn product_order_matches_nested_loops(
        a in prop::collection::vec(any::<u8>(), 0..4),
        b in prop::collection::vec(any::<u8>(), 0..4),
        c in prop::collection::vec(any::<u8>(), 0..4),
    ) {
        let expected = nested_loops(&a, &b, &c);
        let actual: Vec<(u8, u8, u8)> = kases_default((a, b, c))
            .map(Case::into_values)
            .collect();
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn two_by_three_example_order() {
    let order: Vec<(i32, i32)> = kases_default(([1, 2], [1, 2, 3]))
        .map(Case::into_values)
        .collect();
    assert_eq!(order, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn six_position_product() {
    let labels = LabelSet::from_labels(["a", "b", "c", "d", "e", "f"]);
    let product = kases(
        (0..2, ['x', 'y'], [true, false], ["s"], 0u8..3, vec![1.5]),
        &labels,
    )
    .unwrap();
    assert_eq!(product.domain_sizes(), [2, 2, 2, 1, 3, 1]);
    let cases: Vec<_> = product.collect();
    assert_eq!(cases.len(), 24);
    assert_eq!(cases[0].values(), (0, 'x', true, "s", 0, 1.5));
    assert_eq!(cases[1].values(), (0, 'x', true, "s", 1, 1.5));
    assert_eq!(cases[23].values(), (1, 'y', false, "s", 2, 1.5));
    assert_eq!(
        cases[0].to_string(),
        "[a: 0 | b: x | c: true | d: s | e: 0 | f: 1.5]"
    );
}

#[test]
fn large_product_is_lazy() {
    let mut product = kases_default((0..1000u32, 0..1000u32, 0..1000u32));
    assert_eq!(product.total(), Some(1_000_000_000));
    let first: Vec<(u32, u32, u32)> = product.by_ref().take(3).map(Case::into_values).collect();
    assert_eq!(first, vec![(0, 0, 0), (0, 0, 1), (0, 0, 2)]);
    assert_eq!(product.size_hint().0, 1_000_000_000 - 3);
}

#[test]
fn twelve_position_product() {
    let product = kases_default((
        0..2, 0..1, 0..1, 0..1, 0..1, 0..1, 0..1, 0..1, 0..1, 0..1, 0..1, 0..2,
    ));
    let values: Vec<_> = product.map(Case::into_values).collect();
    assert_eq!(values.len(), 4);
    assert_eq!(values[1], (0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1));
    assert_eq!(values[2], (1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0));
}
