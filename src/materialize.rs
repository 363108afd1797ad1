//! Binds cases and a test action into lazily produced, named test units.
//!
//! Materialization never runs an action. Each produced [`DynamicNode::Test`]
//! owns its case and a shared handle to the action; the action runs only when
//! a host runner executes that unit.

use std::fmt;
use std::sync::Arc;

use crate::case::Case;
use crate::naming::CaseNamer;
use crate::node::{DynamicNode, DynamicTest, IntoOutcome};
use crate::tuple::CaseTuple;
use crate::KaseError;

/// Lazy sequence of test units, one per input case, in input order.
pub struct Units<I, N, F> {
    cases: I,
    namer: N,
    action: Arc<F>,
    position: usize,
}

impl<T, I, N, F, R> Iterator for Units<I, N, F>
where
    T: CaseTuple,
    I: Iterator<Item = Case<T>>,
    N: CaseNamer<T>,
    F: Fn(T) -> R + Send + Sync + 'static,
    R: IntoOutcome,
    Case<T>: Send + 'static,
{
    type Item = DynamicNode;

    fn next(&mut self) -> Option<DynamicNode> {
        let case = self.cases.next()?;
        let position = self.position;
        self.position += 1;
        let unit = match self.namer.name(&case) {
            Ok(name) => {
                tracing::trace!(position, name = %name, "materialized test unit");
                let action = Arc::clone(&self.action);
                DynamicTest::new(name, move || action(case.into_values()))
            }
            Err(err) => {
                tracing::warn!(position, error = %err, "case could not be named");
                DynamicTest::new(format!("unnamed case #{}", position + 1), move || {
                    Err::<(), _>(err)
                })
            }
        };
        Some(DynamicNode::Test(unit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cases.size_hint()
    }
}

impl<I, N, F> fmt::Debug for Units<I, N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Units")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Turns `cases` into named test units.
///
/// `cases` is any ordered collection of cases; [`cases!`](crate::cases) is the
/// variadic form. `namer` is a [`LabelSet`](crate::LabelSet) (by value or
/// reference) or a [`NameFn`](crate::NameFn). `action` receives each case's
/// destructured value tuple, e.g. `|(a, b)| assert!(a < b)`, and fails by
/// panicking or returning `Err`.
///
/// The namer is validated against the case arity before anything is produced.
pub fn materialize<T, C, N, F, R>(
    cases: C,
    namer: N,
    action: F,
) -> Result<Units<C::IntoIter, N, F>, KaseError>
where
    T: CaseTuple,
    C: IntoIterator<Item = Case<T>>,
    N: CaseNamer<T>,
    F: Fn(T) -> R + Send + Sync + 'static,
    R: IntoOutcome,
    Case<T>: Send + 'static,
{
    namer.check()?;
    let cases = cases.into_iter();
    tracing::debug!(
        arity = T::ARITY,
        expected = ?cases.size_hint().1,
        "materializing test units"
    );
    Ok(Units {
        cases,
        namer,
        action: Arc::new(action),
        position: 0,
    })
}

/// [`materialize`] wrapped in a container node named `name`.
pub fn materialize_container<T, C, N, F, R>(
    name: impl Into<String>,
    cases: C,
    namer: N,
    action: F,
) -> Result<DynamicNode, KaseError>
where
    T: CaseTuple,
    C: IntoIterator<Item = Case<T>>,
    C::IntoIter: Send + 'static,
    N: CaseNamer<T> + Send + 'static,
    F: Fn(T) -> R + Send + Sync + 'static,
    R: IntoOutcome,
    Case<T>: Send + 'static,
{
    let units = materialize(cases, namer, action)?;
    Ok(DynamicNode::container(name, units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cases, kases_default, name_with, ErrorType, LabelSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_materialization_is_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let units: Vec<DynamicNode> = materialize(
            kases_default((0..3, 0..2)),
            LabelSet::with_arity(2),
            move |(_a, _b): (i32, i32)| {
                seen.fetch_add(1, Ordering::SeqCst);
            },
        )
        .unwrap()
        .collect();
        assert_eq!(units.len(), 6);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        for (i, unit) in units.into_iter().enumerate() {
            let DynamicNode::Test(test) = unit else {
                panic!("expected a test unit");
            };
            test.execute().unwrap();
            assert_eq!(calls.load(Ordering::SeqCst), i + 1);
        }
    }

    #[test]
    fn test_units_follow_case_order() {
        let names: Vec<String> = materialize(
            cases![(3, 'c'), (1, 'a'), (2, 'b')],
            LabelSet::from_labels(["n", "c"]),
            |_: (i32, char)| (),
        )
        .unwrap()
        .map(|unit| unit.name().to_string())
        .collect();
        assert_eq!(names, ["[n: 3 | c: c]", "[n: 1 | c: a]", "[n: 2 | c: b]"]);
    }

    #[test]
    fn test_action_receives_destructured_values() {
        let mut units = materialize(
            cases![(2, 3, 6), (2, 2, 5)],
            name_with(|case: &Case<(i32, i32, i32)>| {
                let (a, b, _) = case.values();
                format!("{} * {}", a, b)
            }),
            |(a, b, product)| {
                if a * b == product {
                    Ok(())
                } else {
                    Err(format!("{} * {} != {}", a, b, product))
                }
            },
        )
        .unwrap();

        let DynamicNode::Test(good) = units.next().unwrap() else {
            panic!("expected a test unit");
        };
        assert_eq!(good.name(), "2 * 3");
        assert!(good.execute().is_ok());

        let DynamicNode::Test(bad) = units.next().unwrap() else {
            panic!("expected a test unit");
        };
        assert_eq!(bad.execute().unwrap_err().to_string(), "2 * 2 != 5");
        assert!(units.next().is_none());
    }

    #[test]
    fn test_mismatched_label_set_rejected_before_units() {
        let err = materialize(cases![(1, 2)], LabelSet::with_arity(3), |_: (i32, i32)| ())
            .unwrap_err();
        assert_eq!(err.error_type(), ErrorType::ArityMismatch);
    }

    struct EvenOnly;

    impl CaseNamer<(i32,)> for EvenOnly {
        fn name(&self, case: &Case<(i32,)>) -> Result<String, KaseError> {
            let (n,) = case.values();
            if n % 2 == 0 {
                Ok(format!("even {}", n))
            } else {
                Err(crate::err_msg!(Config, format!("no name for odd {}", n)))
            }
        }
    }

    #[test]
    fn test_naming_failure_becomes_failing_unit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let units: Vec<DynamicTest> = materialize(cases![(2,), (3,)], EvenOnly, move |_: (i32,)| {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap()
        .map(|unit| match unit {
            DynamicNode::Test(test) => test,
            DynamicNode::Container(_) => panic!("expected a test unit"),
        })
        .collect();

        assert_eq!(units[0].name(), "even 2");
        assert_eq!(units[1].name(), "unnamed case #2");
        let mut units = units.into_iter();
        assert!(units.next().unwrap().execute().is_ok());
        let cause = units.next().unwrap().execute().unwrap_err();
        assert!(cause.to_string().contains("no name for odd 3"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_container_wraps_units() {
        let node = materialize_container(
            "pairs",
            kases_default((0..2, 0..2)),
            LabelSet::with_arity(2),
            |(a, b): (i32, i32)| assert!(a + b < 3),
        )
        .unwrap();
        assert_eq!(node.name(), "pairs");
        let DynamicNode::Container(container) = node else {
            panic!("expected a container");
        };
        assert_eq!(container.into_children().count(), 4);
    }
}
