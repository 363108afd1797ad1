//! Display names for cases.
//!
//! A name is `prefix + join(separator, label_i + delimiter + value_i) + postfix`,
//! rendered in position order with each value's `Display` form. Names are pure
//! functions of their inputs; they are not required to be unique.

use std::fmt;

use crate::case::Case;
use crate::labels::LabelSet;
use crate::tuple::{CaseTuple, Element, RenderTuple};
use crate::KaseError;

/// Renders `case` with the labels and formatting of `labels`.
///
/// Fails fast with [`KaseError::ArityMismatch`] if `labels` does not have the
/// case's arity; the name is never truncated or padded.
pub fn name_of<T: RenderTuple>(case: &Case<T>, labels: &LabelSet) -> Result<String, KaseError> {
    labels.check_arity(T::ARITY)?;
    Ok(render(
        labels,
        labels.labels().iter().map(String::as_str),
        &case.elements(),
    ))
}

fn render<'a>(
    format: &LabelSet,
    labels: impl Iterator<Item = &'a str>,
    elements: &[Element<'_>],
) -> String {
    let body = labels
        .zip(elements)
        .map(|(label, element)| format!("{}{}{}", label, format.delimiter(), element.value()))
        .collect::<Vec<_>>()
        .join(format.separator());
    format!("{}{}{}", format.prefix(), body, format.postfix())
}

impl LabelSet {
    /// Method form of [`name_of`].
    pub fn name_of<T: RenderTuple>(&self, case: &Case<T>) -> Result<String, KaseError> {
        name_of(case, self)
    }
}

/// Renders with the case's own labels and the default formatting.
impl<T: RenderTuple> fmt::Display for Case<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.elements();
        let format = LabelSet::with_arity(0);
        let name = render(&format, elements.iter().map(|e| e.label()), &elements);
        f.write_str(&name)
    }
}

/// Source of test-unit names for a sequence of cases.
pub trait CaseNamer<T: CaseTuple> {
    /// Validates the namer against arity `T::ARITY` before any case is named.
    fn check(&self) -> Result<(), KaseError> {
        Ok(())
    }

    /// Names one case, failing if this namer cannot name it.
    fn name(&self, case: &Case<T>) -> Result<String, KaseError>;
}

impl<T: RenderTuple> CaseNamer<T> for LabelSet {
    fn check(&self) -> Result<(), KaseError> {
        self.check_arity(T::ARITY)
    }

    fn name(&self, case: &Case<T>) -> Result<String, KaseError> {
        name_of(case, self)
    }
}

impl<T: RenderTuple> CaseNamer<T> for &LabelSet {
    fn check(&self) -> Result<(), KaseError> {
        <LabelSet as CaseNamer<T>>::check(self)
    }

    fn name(&self, case: &Case<T>) -> Result<String, KaseError> {
        name_of(case, self)
    }
}

/// A direct case-to-name function used as a namer.
#[derive(Clone, Copy)]
pub struct NameFn<F>(pub F);

impl<T, F> CaseNamer<T> for NameFn<F>
where
    T: CaseTuple,
    F: Fn(&Case<T>) -> String,
{
    fn name(&self, case: &Case<T>) -> Result<String, KaseError> {
        Ok((self.0)(case))
    }
}

impl<F> fmt::Debug for NameFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NameFn(..)")
    }
}

/// Wraps `f` as a [`CaseNamer`].
pub fn name_with<T, F>(f: F) -> NameFn<F>
where
    T: CaseTuple,
    F: Fn(&Case<T>) -> String,
{
    NameFn(f)
}
