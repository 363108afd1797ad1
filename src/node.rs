//! Dynamic test tree handed to a host runner.
//!
//! A tree is made of [`DynamicNode`]s: leaves are named zero-argument actions,
//! containers are named, ordered, lazily produced groups of nodes. Nothing in
//! this module executes anything on its own; a host runner walks the tree and
//! calls [`DynamicTest::execute`].

use std::error::Error;
use std::fmt;

/// Opaque failure cause returned by a test action.
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

type Executable = Box<dyn FnOnce() -> Result<(), Cause> + Send>;
type Children = Box<dyn Iterator<Item = DynamicNode> + Send>;

/// Return types a test action may use to signal its outcome.
///
/// `()` always passes (failure is signaled by panicking); `Result<(), E>`
/// fails with `E` as the cause.
pub trait IntoOutcome {
    fn into_outcome(self) -> Result<(), Cause>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), Cause> {
        Ok(())
    }
}

impl<E: Into<Cause>> IntoOutcome for Result<(), E> {
    fn into_outcome(self) -> Result<(), Cause> {
        self.map_err(Into::into)
    }
}

/// Panic payload marking a framework-level abort rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aborted {
    pub reason: String,
}

impl fmt::Display for Aborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "aborted: {}", self.reason)
    }
}

/// Aborts the running test. Host runners report it as skipped.
pub fn abort(reason: impl Into<String>) -> ! {
    std::panic::panic_any(Aborted {
        reason: reason.into(),
    })
}

/// Aborts the running test unless `condition` holds.
pub fn assume(condition: bool, reason: impl Into<String>) {
    if !condition {
        abort(reason)
    }
}

/// A named, executable leaf.
pub struct DynamicTest {
    name: String,
    executable: Executable,
}

impl DynamicTest {
    pub fn new<F, R>(name: impl Into<String>, action: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
        R: IntoOutcome,
    {
        Self {
            name: name.into(),
            executable: Box::new(move || action().into_outcome()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the bound action. Consuming `self` makes every unit run at most once.
    pub fn execute(self) -> Result<(), Cause> {
        (self.executable)()
    }
}

impl fmt::Debug for DynamicTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicTest")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A named group of nodes, produced lazily in order.
pub struct DynamicContainer {
    name: String,
    children: Children,
}

impl DynamicContainer {
    pub fn new<I>(name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = DynamicNode>,
        I::IntoIter: Send + 'static,
    {
        Self {
            name: name.into(),
            children: Box::new(children.into_iter()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_children(self) -> impl Iterator<Item = DynamicNode> + Send {
        self.children
    }

    pub fn into_parts(self) -> (String, impl Iterator<Item = DynamicNode> + Send) {
        (self.name, self.children)
    }
}

impl fmt::Debug for DynamicContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicContainer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// One node of a dynamic test tree.
#[derive(Debug)]
pub enum DynamicNode {
    Test(DynamicTest),
    Container(DynamicContainer),
}

impl DynamicNode {
    pub fn test<F, R>(name: impl Into<String>, action: F) -> Self
    where
        F: FnOnce() -> R + Send + 'static,
        R: IntoOutcome,
    {
        DynamicNode::Test(DynamicTest::new(name, action))
    }

    pub fn container<I>(name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = DynamicNode>,
        I::IntoIter: Send + 'static,
    {
        DynamicNode::Container(DynamicContainer::new(name, children))
    }

    pub fn name(&self) -> &str {
        match self {
            DynamicNode::Test(test) => test.name(),
            DynamicNode::Container(container) => container.name(),
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, DynamicNode::Container(_))
    }
}
