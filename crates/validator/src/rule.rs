//! Declarative validation rules
//!
//! A [`Rule`] binds one validator from the built-in library to its
//! arguments. Rules are pure data: they serialize as
//! `{ "name": "<validator>", "args": { ... } }`, and because the set of
//! names is a closed enum, a misspelled validator is rejected when the
//! configuration is parsed instead of silently doing nothing at run time.
//!
//! ```json
//! { "name": "maxLength", "args": { "length": 200, "message": "too long" } }
//! { "name": "mustBeSameAs", "args": { "other": { "field": "password" }, "message": "Passwords do not match" } }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::feedback::Feedback;
use crate::validators;

// ============================================================================
// VALIDATOR ID
// ============================================================================

/// Name of a validator in the built-in library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidatorId {
    IsRequired,
    MinLength,
    MaxLength,
    IsEmail,
    IsStrongPassword,
    MustBeSameAs,
    MustNotBeSameAs,
}

impl ValidatorId {
    /// Every validator in the library.
    pub const ALL: [Self; 7] = [
        Self::IsRequired,
        Self::MinLength,
        Self::MaxLength,
        Self::IsEmail,
        Self::IsStrongPassword,
        Self::MustBeSameAs,
        Self::MustNotBeSameAs,
    ];

    /// The wire name, also used as the failure code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IsRequired => "isRequired",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::IsEmail => "isEmail",
            Self::IsStrongPassword => "isStrongPassword",
            Self::MustBeSameAs => "mustBeSameAs",
            Self::MustNotBeSameAs => "mustNotBeSameAs",
        }
    }
}

impl fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// COMPARAND
// ============================================================================

/// Right-hand side of an equality rule.
///
/// `Field` is resolved against the owning form's current values each time
/// the rule runs, so a confirm field always compares with the password the
/// user typed last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparand {
    /// A fixed string.
    Value(String),
    /// The current value of another field in the same form.
    Field(String),
}

impl Comparand {
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }
}

/// Read access to the values of a field's siblings.
pub trait PeerValues {
    /// Current value of the field called `name`, if it exists.
    fn peer_value(&self, name: &str) -> Option<&str>;
}

/// Peer lookup for a field validated on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPeers;

impl PeerValues for NoPeers {
    fn peer_value(&self, _name: &str) -> Option<&str> {
        None
    }
}

// ============================================================================
// RULE
// ============================================================================

/// One configured validator: a [`ValidatorId`] together with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "args", rename_all = "camelCase")]
pub enum Rule {
    /// Value must contain something other than whitespace.
    IsRequired { message: String },

    /// Value must have at least `length` characters.
    MinLength { length: usize, message: String },

    /// Value must have at most `length` characters.
    MaxLength { length: usize, message: String },

    /// Value must be an email address.
    IsEmail {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Value must be a strong password.
    IsStrongPassword { message: String },

    /// Value must equal the comparand.
    MustBeSameAs { other: Comparand, message: String },

    /// Value must differ from the comparand.
    MustNotBeSameAs { other: Comparand, message: String },
}

impl Rule {
    /// Require a non-blank value.
    pub fn required(message: impl Into<String>) -> Self {
        Self::IsRequired {
            message: message.into(),
        }
    }

    /// Require at least `length` characters.
    pub fn min_length(length: usize, message: impl Into<String>) -> Self {
        Self::MinLength {
            length,
            message: message.into(),
        }
    }

    /// Require at most `length` characters.
    pub fn max_length(length: usize, message: impl Into<String>) -> Self {
        Self::MaxLength {
            length,
            message: message.into(),
        }
    }

    /// Require an email address, with the default message.
    #[must_use]
    pub fn email() -> Self {
        Self::IsEmail { message: None }
    }

    /// Require an email address, with a custom message.
    pub fn email_with_message(message: impl Into<String>) -> Self {
        Self::IsEmail {
            message: Some(message.into()),
        }
    }

    /// Require a strong password.
    pub fn strong_password(message: impl Into<String>) -> Self {
        Self::IsStrongPassword {
            message: message.into(),
        }
    }

    /// Require equality with `other`.
    pub fn same_as(other: Comparand, message: impl Into<String>) -> Self {
        Self::MustBeSameAs {
            other,
            message: message.into(),
        }
    }

    /// Require inequality with `other`.
    pub fn not_same_as(other: Comparand, message: impl Into<String>) -> Self {
        Self::MustNotBeSameAs {
            other,
            message: message.into(),
        }
    }

    /// Which validator this rule runs.
    #[must_use]
    pub fn id(&self) -> ValidatorId {
        match self {
            Self::IsRequired { .. } => ValidatorId::IsRequired,
            Self::MinLength { .. } => ValidatorId::MinLength,
            Self::MaxLength { .. } => ValidatorId::MaxLength,
            Self::IsEmail { .. } => ValidatorId::IsEmail,
            Self::IsStrongPassword { .. } => ValidatorId::IsStrongPassword,
            Self::MustBeSameAs { .. } => ValidatorId::MustBeSameAs,
            Self::MustNotBeSameAs { .. } => ValidatorId::MustNotBeSameAs,
        }
    }

    /// The field this rule compares against, if it is a cross-field rule.
    #[must_use]
    pub fn peer_reference(&self) -> Option<&str> {
        match self {
            Self::MustBeSameAs {
                other: Comparand::Field(name),
                ..
            }
            | Self::MustNotBeSameAs {
                other: Comparand::Field(name),
                ..
            } => Some(name),
            _ => None,
        }
    }

    /// Runs the rule against `value`.
    ///
    /// A field comparand that `peers` cannot resolve compares against the
    /// empty string.
    pub fn check(&self, value: &str, peers: &dyn PeerValues) -> Feedback {
        match self {
            Self::IsRequired { message } => validators::is_required(value, message),
            Self::MinLength { length, message } => validators::min_length(value, *length, message),
            Self::MaxLength { length, message } => validators::max_length(value, *length, message),
            Self::IsEmail { message } => validators::is_email(value, message.as_deref()),
            Self::IsStrongPassword { message } => validators::is_strong_password(value, message),
            Self::MustBeSameAs { other, message } => {
                validators::must_be_same_as(value, resolve(other, peers), message)
            }
            Self::MustNotBeSameAs { other, message } => {
                validators::must_not_be_same_as(value, resolve(other, peers), message)
            }
        }
    }
}

fn resolve<'a>(comparand: &'a Comparand, peers: &'a dyn PeerValues) -> &'a str {
    match comparand {
        Comparand::Value(value) => value,
        Comparand::Field(name) => peers.peer_value(name).unwrap_or_else(|| {
            tracing::warn!(peer = %name, "comparand field not found, comparing against empty value");
            ""
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
