//! Shared helpers for the kase integration suites.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use kase::test::{TestConfig, TestRunner, TestSummary};
use kase::DynamicNode;

/// Runner configuration with colors off and no filter.
pub fn quiet_config() -> TestConfig {
    TestConfig {
        filter: None,
        use_colors: false,
    }
}

pub fn run_quiet<I>(nodes: I) -> TestSummary
where
    I: IntoIterator<Item = DynamicNode>,
{
    TestRunner::with_config(quiet_config()).run(nodes)
}

/// Records the order in which test actions observed their arguments.
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn record(&self, entry: impl Into<String>) {
        self.entries
            .lock()
            .expect("call log poisoned")
            .push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().expect("call log poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("call log poisoned").len()
    }
}
