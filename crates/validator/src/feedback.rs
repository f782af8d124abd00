//! Validation feedback
//!
//! Every validator returns a [`Feedback`]: either `Passed`, or `Failed`
//! carrying a [`Failure`] with the message a form shows next to the field.
//!
//! Messages use `Cow<'static, str>` so static messages never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// FEEDBACK KIND
// ============================================================================

/// Discriminant of a [`Feedback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    /// The value satisfied the validator.
    Passed,
    /// The value violated the validator.
    Failed,
}

// ============================================================================
// FAILURE
// ============================================================================

/// Where a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureOrigin {
    /// Produced by running a configured validator.
    #[default]
    Validator,
    /// Pushed or set directly, usually after a server round-trip.
    Injected,
}

/// A failed validation with the message shown to the user.
///
/// `code` names the validator that failed (`"isRequired"`, `"maxLength"`, ...)
/// or `"injected"` for errors pushed from outside the validator list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Machine-readable code.
    pub code: Cow<'static, str>,
    /// Human-readable message.
    pub message: Cow<'static, str>,
    /// Whether a validator produced this failure or it was injected.
    #[serde(default)]
    pub origin: FailureOrigin,
}

impl Failure {
    /// Code used for failures that did not come from a validator.
    pub const INJECTED_CODE: &'static str = "injected";

    /// Creates a validator failure.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            origin: FailureOrigin::Validator,
        }
    }

    /// Creates a failure that was injected rather than computed.
    pub fn injected(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: Cow::Borrowed(Self::INJECTED_CODE),
            message: message.into(),
            origin: FailureOrigin::Injected,
        }
    }

    /// Returns true if this failure was injected.
    #[must_use]
    pub fn is_injected(&self) -> bool {
        self.origin == FailureOrigin::Injected
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ============================================================================
// FEEDBACK
// ============================================================================

/// The result of one validator invocation.
///
/// Constructed fresh on every run and never mutated. The message only
/// exists on the `Failed` case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feedback {
    /// The value satisfied the validator.
    Passed,
    /// The value violated the validator.
    Failed(Failure),
}

impl Feedback {
    /// A passing feedback.
    #[must_use]
    pub const fn passed() -> Self {
        Self::Passed
    }

    /// A failing feedback with the given code and message.
    pub fn failed(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Failed(Failure::new(code, message))
    }

    /// Passes when `ok` holds, otherwise fails with the lazily built failure.
    pub fn check(ok: bool, failure: impl FnOnce() -> Failure) -> Self {
        if ok { Self::Passed } else { Self::Failed(failure()) }
    }

    /// The discriminant.
    #[must_use]
    pub fn kind(&self) -> FeedbackKind {
        match self {
            Self::Passed => FeedbackKind::Passed,
            Self::Failed(_) => FeedbackKind::Failed,
        }
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.failure().map(|f| f.message.as_ref())
    }

    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Passed => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    /// Consumes the feedback, keeping only a failure.
    #[must_use]
    pub fn into_failure(self) -> Option<Failure> {
        match self {
            Self::Passed => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

impl From<Failure> for Feedback {
    fn from(failure: Failure) -> Self {
        Self::Failed(failure)
    }
}

// ============================================================================
// TESTS
// ============================================================================
