//! Unified, `miette`-based diagnostics for the kase crate.
//!
//! Every fallible operation in the crate returns [`KaseError`]. Variants are
//! built with the [`err_msg!`](crate::err_msg) macro, which fills in an empty
//! [`ErrorContext`] and no source error unless told otherwise.
//!
//! - `err_msg!(Config, "bad yaml")`
//! - `err_msg!(Config, "bad yaml", help = "check indentation")`
//! - `err_msg!(Config, "bad yaml", source = e)`
//!
//! Arity mismatches have their own constructor, [`KaseError::arity_mismatch`],
//! since they carry the two arities rather than a free-form message.
//!
//! Test action failures are never represented here. They travel to the host
//! runner as an opaque [`Cause`](crate::node::Cause).

use miette::Diagnostic;
use thiserror::Error;

/// Type-safe error classification that corresponds to `KaseError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A Label Set was used with a case of a different arity
    ArityMismatch,
    /// Malformed label or runner configuration
    Config,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ArityMismatch => "ArityMismatch",
            ErrorType::Config => "Config",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minimal error context for diagnostics.
#[derive(Debug, Default)]
pub struct ErrorContext {
    /// An optional help message.
    pub help: Option<String>,
}

impl ErrorContext {
    /// Returns an empty error context.
    pub fn none() -> Self {
        Self { help: None }
    }

    /// Creates a context carrying a help message.
    pub fn with_help(help: impl Into<String>) -> Self {
        Self {
            help: Some(help.into()),
        }
    }
}

/// Unified error type for all kase failure modes.
#[derive(Debug, Error)]
pub enum KaseError {
    #[error("Arity mismatch: label set has {found} labels, case has arity {expected}")]
    ArityMismatch {
        expected: usize,
        found: usize,
        ctx: ErrorContext,
    },
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl KaseError {
    /// Builds the fail-fast error for a Label Set whose length differs from
    /// the arity of the case it is applied to.
    pub fn arity_mismatch(expected: usize, found: usize) -> Self {
        KaseError::ArityMismatch {
            expected,
            found,
            ctx: ErrorContext::with_help(format!(
                "use a label set with exactly {} labels (e.g. `LabelSet::with_arity({})`)",
                expected, expected
            )),
        }
    }

    fn get_ctx(&self) -> &ErrorContext {
        match self {
            KaseError::ArityMismatch { ctx, .. } => ctx,
            KaseError::Config { ctx, .. } => ctx,
        }
    }

    /// Returns the type-safe error classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            KaseError::ArityMismatch { .. } => ErrorType::ArityMismatch,
            KaseError::Config { .. } => ErrorType::Config,
        }
    }
}

impl Diagnostic for KaseError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            KaseError::ArityMismatch { .. } => "kase::arity_mismatch",
            KaseError::Config { .. } => "kase::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.get_ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }
}

/// Constructs a message-carrying `KaseError` variant.
///
/// Accepts an optional trailing `help = ...` or `source = ...` argument.
#[macro_export]
macro_rules! err_msg {
    ($variant:ident, $msg:expr, help = $help:expr) => {
        $crate::KaseError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext::with_help($help),
            source: None,
        }
    };
    ($variant:ident, $msg:expr, source = $source:expr) => {
        $crate::KaseError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext::none(),
            source: Some(Box::new($source)),
        }
    };
    ($variant:ident, $msg:expr) => {
        $crate::KaseError::$variant {
            message: $msg.to_string(),
            ctx: $crate::ErrorContext::none(),
            source: None,
        }
    };
}
