use std::fmt;

use crate::labels::LabelSet;
use crate::tuple::{CaseTuple, Element, RenderTuple};
use crate::KaseError;

/// One combination of input values for a parameterized test.
///
/// `T` is the plain value tuple `(A1, ..., AN)`; the case stores the same
/// tuple with every position wrapped in a [`LabeledValue`](crate::LabeledValue).
/// A case is immutable: positional typed access goes through [`labeled`],
/// the untyped ordered view through [`elements`].
///
/// [`labeled`]: Case::labeled
/// [`elements`]: Case::elements
pub struct Case<T: CaseTuple> {
    labeled: T::Labeled,
}

impl<T: CaseTuple> Case<T> {
    pub const ARITY: usize = T::ARITY;

    /// Wraps `values` with the default labels `a1..aN`.
    pub fn new(values: T) -> Self {
        Self::from_labeled(values.attach_labels(&[]))
    }

    /// Wraps `values` with the labels of `labels`, position by position.
    pub fn with_labels(values: T, labels: &LabelSet) -> Result<Self, KaseError> {
        labels.check_arity(T::ARITY)?;
        Ok(Self::from_labeled(values.attach_labels(labels.labels())))
    }

    pub(crate) fn from_labeled(labeled: T::Labeled) -> Self {
        Self { labeled }
    }

    pub fn arity(&self) -> usize {
        T::ARITY
    }

    /// The tuple of labeled values; `.0` is position 1, and so on.
    pub fn labeled(&self) -> &T::Labeled {
        &self.labeled
    }

    pub fn into_labeled(self) -> T::Labeled {
        self.labeled
    }

    pub fn label_names(&self) -> Vec<&str> {
        T::label_names(&self.labeled)
    }

    /// Consumes the case into its plain value tuple, ready for destructuring.
    pub fn into_values(self) -> T {
        T::detach_labels(self.labeled)
    }

    pub fn values(&self) -> T
    where
        T::Labeled: Clone,
    {
        T::detach_labels(self.labeled.clone())
    }
}

impl<T: RenderTuple> Case<T> {
    /// Untyped ordered view of every position.
    pub fn elements(&self) -> Vec<Element<'_>> {
        T::elements(&self.labeled)
    }
}

/// Builds a case with default labels.
pub fn kase<T: CaseTuple>(values: T) -> Case<T> {
    Case::new(values)
}

impl<T: CaseTuple> Clone for Case<T>
where
    T::Labeled: Clone,
{
    fn clone(&self) -> Self {
        Self::from_labeled(self.labeled.clone())
    }
}

impl<T: CaseTuple> fmt::Debug for Case<T>
where
    T::Labeled: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Case").field(&self.labeled).finish()
    }
}

impl<T: CaseTuple> PartialEq for Case<T>
where
    T::Labeled: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.labeled == other.labeled
    }
}

impl<T: CaseTuple> Eq for Case<T> where T::Labeled: Eq {}

/// Builds a `Vec` of cases from tuple literals.
///
/// `cases![(1, "a"), (2, "b")]` wraps every tuple with default labels.
/// `cases![labels = &set; (1, "a"), (2, "b")]` uses `set` and evaluates to
/// `Result<Vec<Case<_>>, KaseError>`.
#[macro_export]
macro_rules! cases {
    (labels = $labels:expr; $($values:expr),* $(,)?) => {
        ::std::vec![$($crate::Case::with_labels($values, $labels)),*]
            .into_iter()
            .collect::<::std::result::Result<::std::vec::Vec<_>, $crate::KaseError>>()
    };
    ($($values:expr),* $(,)?) => {
        ::std::vec![$($crate::Case::new($values)),*]
    };
}
