//! Cartesian product of per-position value domains.
//!
//! Canonical ordering is lexicographic with the last position varying fastest:
//! the same order as nested loops with position 1 outermost. Every domain is
//! drained exactly once into a column; cases are then produced lazily by an
//! odometer over column indices.

use std::fmt;
use std::iter::FusedIterator;

use crate::case::Case;
use crate::labels::LabelSet;
use crate::tuple::{CaseTuple, Domains, ProductTuple};
use crate::KaseError;

/// Lazy iterator over every combination of a set of domains.
pub struct Product<T: ProductTuple> {
    columns: T::Columns,
    lens: Vec<usize>,
    labels: Vec<String>,
    indices: Vec<usize>,
    total: Option<usize>,
    produced: usize,
    exhausted: bool,
}

impl<T: ProductTuple> Product<T> {
    fn new(columns: T::Columns, labels: &LabelSet) -> Self {
        let lens = T::column_lens(&columns);
        let total = lens
            .iter()
            .try_fold(1usize, |acc, len| acc.checked_mul(*len));
        let exhausted = lens.iter().any(|len| *len == 0);
        Self {
            columns,
            indices: vec![0; lens.len()],
            lens,
            labels: labels.labels().to_vec(),
            total,
            produced: 0,
            exhausted,
        }
    }

    /// Product of all domain sizes, or `None` if it overflows `usize`.
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// Sizes of the drained domains, in position order.
    pub fn domain_sizes(&self) -> &[usize] {
        &self.lens
    }

    // Rightmost position is the fastest-varying digit.
    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.lens[pos] {
                return;
            }
            self.indices[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl<T: ProductTuple> Iterator for Product<T> {
    type Item = Case<T>;

    fn next(&mut self) -> Option<Case<T>> {
        if self.exhausted {
            return None;
        }
        let values = T::pick(&self.columns, &self.indices);
        let case = Case::from_labeled(values.attach_labels(&self.labels));
        self.produced += 1;
        self.advance();
        Some(case)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self.total {
            Some(total) => {
                let remaining = total - self.produced;
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

impl<T: ProductTuple> FusedIterator for Product<T> {}

impl<T: ProductTuple> fmt::Debug for Product<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Product")
            .field("arity", &T::ARITY)
            .field("domain_sizes", &self.lens)
            .field("labels", &self.labels)
            .field("indices", &self.indices)
            .field("produced", &self.produced)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

/// Enumerates every combination of `domains`, labeling each case from `labels`.
///
/// `domains` is a tuple with one `IntoIterator` per position. An empty domain
/// yields an empty product. Fails before touching any domain if `labels` does
/// not have the tuple's arity.
pub fn kases<D: Domains>(domains: D, labels: &LabelSet) -> Result<Product<D::Tuple>, KaseError> {
    labels.check_arity(<D::Tuple as CaseTuple>::ARITY)?;
    Ok(Product::new(domains.into_columns(), labels))
}

/// [`kases`] with the default labels `a1..aN`.
pub fn kases_default<D: Domains>(domains: D) -> Product<D::Tuple> {
    Product::new(domains.into_columns(), &LabelSet::for_tuple::<D::Tuple>())
}
