//! Label Sets: per-arity field labels plus name formatting options.
//!
//! A [`LabelSet`] is an immutable value object. Builder methods consume and
//! return a new value, so one instance can be shared read-only across every
//! case produced from it.
//!
//! Label Sets are also the crate's configuration surface: they derive serde's
//! traits with a default for every formatting field, and can be read from YAML
//! or JSON text.
//!
//! ```yaml
//! labels: [width, height]
//! separator: ", "
//! ```

use serde::{Deserialize, Serialize};

use crate::tuple::CaseTuple;
use crate::{err_msg, KaseError};

pub const DEFAULT_DELIMITER: &str = ": ";
pub const DEFAULT_SEPARATOR: &str = " | ";
pub const DEFAULT_PREFIX: &str = "[";
pub const DEFAULT_POSTFIX: &str = "]";

/// Default label for the zero-based `index`: `a1`, `a2`, ...
pub fn default_label(index: usize) -> String {
    format!("a{}", index + 1)
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_postfix() -> String {
    DEFAULT_POSTFIX.to_string()
}

/// Field labels and formatting for cases of one arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelSet {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default = "default_delimiter")]
    delimiter: String,
    #[serde(default = "default_separator")]
    separator: String,
    #[serde(default = "default_prefix")]
    prefix: String,
    #[serde(default = "default_postfix")]
    postfix: String,
}

impl LabelSet {
    /// Labels exactly `a1..an`, default formatting.
    pub fn with_arity(arity: usize) -> Self {
        Self::from_labels((0..arity).map(default_label))
    }

    /// Default labels for the arity of tuple `T`.
    pub fn for_tuple<T: CaseTuple>() -> Self {
        Self::with_arity(T::ARITY)
    }

    /// All labels given explicitly. Duplicates are allowed.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            delimiter: default_delimiter(),
            separator: default_separator(),
            prefix: default_prefix(),
            postfix: default_postfix(),
        }
    }

    /// One optional label per position; `None` at index `i` becomes `a<i+1>`.
    pub fn from_optional<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self::from_labels(
            labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| label.map_or_else(|| default_label(i), Into::into)),
        )
    }

    pub fn with_delimiter(self, delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            ..self
        }
    }

    pub fn with_separator(self, separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..self
        }
    }

    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..self
        }
    }

    pub fn with_postfix(self, postfix: impl Into<String>) -> Self {
        Self {
            postfix: postfix.into(),
            ..self
        }
    }

    /// Number of labels, which is the case arity this set applies to.
    pub fn arity(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    /// Fails fast unless this set has exactly `expected` labels.
    pub fn check_arity(&self, expected: usize) -> Result<(), KaseError> {
        if self.arity() != expected {
            return Err(KaseError::arity_mismatch(expected, self.arity()));
        }
        Ok(())
    }

    /// Pads missing trailing labels with defaults up to `arity`.
    ///
    /// Used after loading configuration, where `labels` may be partial or
    /// omitted. A configured list longer than `arity` is an error.
    pub fn ensure_arity(mut self, arity: usize) -> Result<Self, KaseError> {
        if self.labels.len() > arity {
            return Err(KaseError::arity_mismatch(arity, self.labels.len()));
        }
        let missing = self.labels.len()..arity;
        self.labels.extend(missing.map(default_label));
        Ok(self)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, KaseError> {
        serde_yaml::from_str(text).map_err(|e| {
            err_msg!(
                Config,
                format!("Failed to parse label set YAML: {}", e),
                help = "expected a mapping with `labels`, `delimiter`, `separator`, `prefix`, `postfix`"
            )
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, KaseError> {
        serde_json::from_str(text).map_err(|e| {
            err_msg!(
                Config,
                format!("Failed to parse label set JSON: {}", e),
                help = "expected an object with `labels`, `delimiter`, `separator`, `prefix`, `postfix`"
            )
        })
    }
}
