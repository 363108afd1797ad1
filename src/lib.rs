//! Kase: parameterized test cases from cartesian products of value domains.
//!
//! ```
//! use kase::{kases_default, materialize, LabelSet};
//! use kase::test::TestRunner;
//!
//! let cases = kases_default((vec![1, 2], vec![10, 20, 30]));
//! let units = materialize(cases, LabelSet::with_arity(2), |(a, b): (i32, i32)| {
//!     assert!(a < b);
//! })
//! .unwrap();
//!
//! let summary = TestRunner::new().run(units);
//! assert_eq!(summary.passed, 6);
//! ```

pub use crate::diagnostics::{ErrorContext, ErrorType, KaseError};

pub mod case;
pub mod diagnostics;
pub mod labels;
pub mod materialize;
pub mod naming;
pub mod node;
pub mod product;
pub mod tuple;
pub mod value;

pub use case::{kase, Case};
pub use labels::LabelSet;
pub use materialize::{materialize, materialize_container, Units};
pub use naming::{name_of, name_with, CaseNamer, NameFn};
pub use node::{abort, assume, Aborted, Cause, DynamicContainer, DynamicNode, DynamicTest, IntoOutcome};
pub use product::{kases, kases_default, Product};
pub use tuple::{CaseTuple, Domains, Element, ProductTuple, RenderTuple};
pub use value::LabeledValue;
