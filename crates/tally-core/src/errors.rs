//! Structured error types shared across tally crates.
//!
//! A failing check is not an error: checks report to a failure sink and
//! return `false`. [`TallyError`] covers the surfaces around them that can
//! genuinely fail, such as decoding a policy or validating a merged report.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Context key naming the suite an error is about.
pub const SUITE_KEY: &str = "suite";
/// Context key naming the test an error is about.
pub const TEST_KEY: &str = "test";

/// Payload carried by every [`TallyError`].
///
/// Errors here are about results and reports, not about failing checks, so
/// the context usually pins down which suite or test was malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case code such as `suite-sealed` or `duplicate-suite`.
    /// Callers match on it; the message may change wording.
    pub code: String,
    /// One-line description of what was rejected.
    pub message: String,
    /// Where it happened: [`SUITE_KEY`], [`TEST_KEY`], failure counts,
    /// the operation attempted. Ordered by key so displays are stable.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// What the producer should do differently, e.g. finalize first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records one context entry, replacing an earlier value for `key`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Names the suite the error concerns.
    pub fn with_suite(self, suite: impl Into<String>) -> Self {
        self.with_context(SUITE_KEY, suite)
    }

    /// Names the test the error concerns.
    pub fn with_test(self, test: impl Into<String>) -> Self {
        self.with_context(TEST_KEY, test)
    }

    /// Suite named in the context, if any.
    pub fn suite(&self) -> Option<&str> {
        self.context.get(SUITE_KEY).map(String::as_str)
    }

    /// Attaches a remedy hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " | context: [{}]", pairs.join(", "))?;
        }
        match &self.hint {
            Some(hint) => write!(f, " | hint: {hint}"),
            None => Ok(()),
        }
    }
}

/// Error type of the tally workspace, grouped by the stage that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum TallyError {
    /// Invalid check configuration, such as a diagnostic policy.
    #[error("check error: {0}")]
    Check(ErrorInfo),
    /// A deferred test or suite result whose flags disagree with its contents.
    #[error("result error: {0}")]
    Result(ErrorInfo),
    /// Suites that cannot be combined into one report.
    #[error("merge error: {0}")]
    Merge(ErrorInfo),
    /// Encoding or decoding failures.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl TallyError {
    /// Returns the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            TallyError::Check(info)
            | TallyError::Result(info)
            | TallyError::Merge(info)
            | TallyError::Serde(info) => info,
        }
    }

    /// Shorthand for the payload's code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Name of the stage that failed, matching the serialized `family` tag.
    pub fn family(&self) -> &'static str {
        match self {
            TallyError::Check(_) => "Check",
            TallyError::Result(_) => "Result",
            TallyError::Merge(_) => "Merge",
            TallyError::Serde(_) => "Serde",
        }
    }
}
