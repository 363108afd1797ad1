//! Arity-generic tuple machinery.
//!
//! A case of arity N is modeled as a Rust tuple `(A1, ..., AN)`. The traits in
//! this module describe what the rest of the crate needs from such a tuple:
//!
//! - [`CaseTuple`]: attach/detach labels, positional label view
//! - [`RenderTuple`]: untyped `Display` view of every position, for naming
//! - [`ProductTuple`]: column storage and indexed picking, for enumeration
//! - [`Domains`]: a tuple of value domains that drains into columns
//!
//! All four are implemented for arities 1 through 12 by `impl_tuples!`.

use std::fmt;

use crate::labels::default_label;
use crate::value::LabeledValue;

/// Untyped view of one case position: its label and its rendered value.
#[derive(Clone, Copy)]
pub struct Element<'a> {
    label: &'a str,
    value: &'a dyn fmt::Display,
}

impl<'a> Element<'a> {
    pub fn new(label: &'a str, value: &'a dyn fmt::Display) -> Self {
        Self { label, value }
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn value(&self) -> &'a dyn fmt::Display {
        self.value
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("label", &self.label)
            .field("value", &format_args!("{}", self.value))
            .finish()
    }
}

/// A plain value tuple usable as the payload of a [`Case`](crate::Case).
pub trait CaseTuple: Sized {
    /// Number of positions.
    const ARITY: usize;

    /// The same tuple with every position wrapped in a [`LabeledValue`].
    type Labeled;

    /// Wraps position `i` with `labels[i]`, or with the default label `a<i+1>`
    /// when `labels` is shorter than the tuple. Labels past the arity are
    /// ignored; [`Case::with_labels`](crate::Case::with_labels) is the
    /// arity-checked form.
    fn attach_labels(self, labels: &[String]) -> Self::Labeled;

    fn detach_labels(labeled: Self::Labeled) -> Self;

    fn label_names(labeled: &Self::Labeled) -> Vec<&str>;
}

/// Tuples whose every position implements `Display`.
pub trait RenderTuple: CaseTuple {
    fn elements(labeled: &Self::Labeled) -> Vec<Element<'_>>;
}

/// Tuples that can be picked out of per-position value columns.
pub trait ProductTuple: CaseTuple {
    /// One `Vec` per position.
    type Columns;

    fn column_lens(columns: &Self::Columns) -> Vec<usize>;

    /// Clones `columns.i[indices[i]]` for every position `i`.
    fn pick(columns: &Self::Columns, indices: &[usize]) -> Self;
}

/// A tuple of value domains, one `IntoIterator` per position.
pub trait Domains {
    type Tuple: ProductTuple;

    /// Drains every domain, in position order, into its column.
    fn into_columns(self) -> <Self::Tuple as ProductTuple>::Columns;
}

fn label_at(labels: &[String], index: usize) -> String {
    labels
        .get(index)
        .cloned()
        .unwrap_or_else(|| default_label(index))
}

macro_rules! impl_tuples {
    ($arity:expr => $( $idx:tt : $A:ident / $D:ident ),+ ) => {
        impl<$($A),+> CaseTuple for ($($A,)+) {
            const ARITY: usize = $arity;
            type Labeled = ($(LabeledValue<$A>,)+);

            fn attach_labels(self, labels: &[String]) -> Self::Labeled {
                ($(LabeledValue::new(self.$idx, label_at(labels, $idx)),)+)
            }

            fn detach_labels(labeled: Self::Labeled) -> Self {
                ($(labeled.$idx.into_value(),)+)
            }

            fn label_names(labeled: &Self::Labeled) -> Vec<&str> {
                vec![$(labeled.$idx.label()),+]
            }
        }

        impl<$($A: fmt::Display),+> RenderTuple for ($($A,)+) {
            fn elements(labeled: &Self::Labeled) -> Vec<Element<'_>> {
                vec![$(Element::new(labeled.$idx.label(), labeled.$idx.value())),+]
            }
        }

        impl<$($A: Clone),+> ProductTuple for ($($A,)+) {
            type Columns = ($(Vec<$A>,)+);

            fn column_lens(columns: &Self::Columns) -> Vec<usize> {
                vec![$(columns.$idx.len()),+]
            }

            fn pick(columns: &Self::Columns, indices: &[usize]) -> Self {
                ($(columns.$idx[indices[$idx]].clone(),)+)
            }
        }

        impl<$($D),+> Domains for ($($D,)+)
        where
            $($D: IntoIterator, <$D as IntoIterator>::Item: Clone,)+
        {
            type Tuple = ($(<$D as IntoIterator>::Item,)+);

            fn into_columns(self) -> <Self::Tuple as ProductTuple>::Columns {
                ($(self.$idx.into_iter().collect::<Vec<_>>(),)+)
            }
        }
    };
}

impl_tuples!(1 => 0: A1 / D1);
impl_tuples!(2 => 0: A1 / D1, 1: A2 / D2);
impl_tuples!(3 => 0: A1 / D1, 1: A2 / D2, 2: A3 / D3);
impl_tuples!(4 => 0: A1 / D1, 1: A2 / D2, 2: A3 / D3, 3: A4 / D4);
impl_tuples!(5 => 0: A1 / D1, 1: A2 / D2, 2: A3 / D3, 3: A4 / D4, 4: A5 / D5);
impl_tuples!(6 => 0: A1 / D1, 1: A2 / D2, 2: A3 / D3, 3: A4 / D4, 4: A5 / D5, 5: A6 / D6);
impl_tuples!(7 => 0: A1 / D1, 1: A2 / D2, 2: A3 / D3, 3: A4 / D4, 4: A5 / D5, 5: A6 / D6,
    6: A7 / D7);
impl_tuples!(8 => 0: A1 / D1, 1: A2 / D2, 2: A3 / D3, 3: A4 / D4, 4: A5 / D5, 5: A6 / D6,
    6: A7 / D7, 7: A8 / D8);
impl_tuples!(9 => 0: A1 / D1, 1: A2 / D2, 2: A3 / D3, 3: A4 / D4, 4: A5 / D5, 5: A6 / D6,
    6: A7 / D7, 7: A8 / D8, 8: A9 / D9);
impl_tuples!(10 => 0: A1 / D1, 1: A2 / D2, 2: A3 / D3, 3: A4 / D4, 4: A5 / D5, 5: A6 / D6,
    6: A7 / D7, 7: A8 / D8, 8: A9 / D9, 9: A10 / D10);
impl_tuples!(11 => 0: A1 / D1, 1: A2 / D2, 2: A3 / D3, 3: A4 / D4, 4: A5 / D5, 5: A6 / D6,
    6: A7 / D7, 7: A8 / D8, 8: A9 / D9, 9: A10 / D10, 10: A11 / D11);
impl_tuples!(12 => 0: A1 / D1, 1: A2 / D2, 2: A3 / D3, 3: A4 / D4, 4: A5 / D5, 5: A6 / D6,
    6: A7 / D7, 7: A8 / D8, 8: A9 / D9, 9: A10 / D10, 10: A11 / D11, 11: A12 / D12);

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("l{}", i)).collect()
    }

    #[test]
    fn test_arity_constants() {
        assert_eq!(<(u8,)>::ARITY, 1);
        assert_eq!(<(u8, u8, u8, u8, u8, u8)>::ARITY, 6);
        assert_eq!(
            <(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8)>::ARITY,
            12
        );
    }

    #[test]
    fn test_attach_and_detach_preserve_positions() {
        let labeled = (1, "two", 3.5).attach_labels(&labels(3));
        assert_eq!(labeled.1.label(), "l2");
        assert_eq!(*labeled.1.value(), "two");
        assert_eq!(<(i32, &str, f64)>::label_names(&labeled), ["l1", "l2", "l3"]);
        assert_eq!(<(i32, &str, f64)>::detach_labels(labeled), (1, "two", 3.5));
    }

    #[test]
    fn test_attach_short_label_slice_falls_back_to_defaults() {
        let labeled = (1, 2, 3).attach_labels(&labels(1));
        assert_eq!(<(i32, i32, i32)>::label_names(&labeled), ["l1", "a2", "a3"]);

        let labeled = ('x',).attach_labels(&[]);
        assert_eq!(labeled.0.label(), "a1");
    }

    #[test]
    fn test_elements_render_in_order() {
        let labeled = (7, 'c').attach_labels(&labels(2));
        let rendered: Vec<String> = <(i32, char)>::elements(&labeled)
            .iter()
            .map(|e| format!("{}={}", e.label(), e.value()))
            .collect();
        assert_eq!(rendered, ["l1=7", "l2=c"]);
    }

    #[test]
    fn test_domains_drain_into_columns() {
        let columns = (vec![1, 2], "ab".chars(), 0..3).into_columns();
        assert_eq!(<(i32, char, i32)>::column_lens(&columns), [2, 2, 3]);
        assert_eq!(<(i32, char, i32)>::pick(&columns, &[1, 0, 2]), (2, 'a', 2));
    }
}
