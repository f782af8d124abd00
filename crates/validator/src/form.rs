//! Form composition
//!
//! A [`Form`] owns its fields in declaration order and implements the
//! submission protocol shared by every form of the platform:
//!
//! 1. run every field's validators, in declaration order;
//! 2. if any field failed, stop: the submit action is never called and
//!    each field now holds the errors it displays;
//! 3. otherwise build a [`Payload`] from the field values and hand it to
//!    the submit action.
//!
//! ```rust,ignore
//! let outcome = form.submit(|payload| api.post("/reviews", payload));
//! if let Submission::Blocked(report) = outcome { /* re-render */ }
//! ```

use std::borrow::Cow;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{ConfigError, FormError};
use crate::feedback::Failure;
use crate::field::Field;
use crate::rule::{PeerValues, Rule};

/// Request body assembled from field values, in declaration order.
pub type Payload = serde_json::Map<String, serde_json::Value>;

// ============================================================================
// REPORTS
// ============================================================================

/// Per-field failures of one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    fields: IndexMap<String, Vec<Failure>>,
}

impl FormReport {
    /// True when any field failed.
    #[must_use]
    pub fn any_errors(&self) -> bool {
        self.fields.values().any(|errors| !errors.is_empty())
    }

    /// Failures of one field; empty for passing or unknown fields.
    #[must_use]
    pub fn errors_for(&self, name: &str) -> &[Failure] {
        self.fields.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Names of failing fields, in declaration order.
    pub fn failing_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, errors)| !errors.is_empty())
            .map(|(name, _)| name.as_str())
    }

    /// The displayed error of every failing field.
    pub fn first_errors(&self) -> impl Iterator<Item = (&str, &Failure)> {
        self.fields
            .iter()
            .filter_map(|(name, errors)| errors.first().map(|e| (name.as_str(), e)))
    }

    /// Every field with its failures, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Failure])> {
        self.fields
            .iter()
            .map(|(name, errors)| (name.as_str(), errors.as_slice()))
    }

    /// Total number of failures across fields.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }
}

/// Outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T, R = FormReport> {
    /// Validation passed and the submit action ran, returning `T`.
    Sent(T),
    /// Validation failed; the submit action was not called.
    Blocked(R),
}

impl<T, R> Submission<T, R> {
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }

    /// The submit action's result, if it ran.
    pub fn sent(self) -> Option<T> {
        match self {
            Self::Sent(value) => Some(value),
            Self::Blocked(_) => None,
        }
    }

    /// The failure report, if submission was blocked.
    pub fn blocked(self) -> Option<R> {
        match self {
            Self::Sent(_) => None,
            Self::Blocked(report) => Some(report),
        }
    }
}

// ============================================================================
// FORM
// ============================================================================

/// An ordered set of uniquely named fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: IndexMap<String, Field>,
}

impl Form {
    /// Assembles a form, checking that names are non-empty and unique, that
    /// cross-field rules point at existing fields, and that length bounds
    /// on a field do not contradict each other.
    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> Result<Self, ConfigError> {
        let mut map = IndexMap::new();
        for (position, field) in fields.into_iter().enumerate() {
            if field.name().trim().is_empty() {
                return Err(ConfigError::EmptyFieldName { position });
            }
            check_length_bounds(&field)?;
            match map.entry(field.name().to_owned()) {
                Entry::Occupied(entry) => {
                    return Err(ConfigError::DuplicateField {
                        name: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(field);
                }
            }
        }

        for field in map.values() {
            for reference in field.rules().iter().filter_map(Rule::peer_reference) {
                if !map.contains_key(reference) {
                    return Err(ConfigError::UnknownFieldReference {
                        field: field.name().to_owned(),
                        reference: reference.to_owned(),
                    });
                }
            }
        }

        Ok(Self { fields: map })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field(&self, name: &str) -> Result<&Field, FormError> {
        self.fields.get(name).ok_or_else(|| unknown_field(name))
    }

    pub fn field_mut(&mut self, name: &str) -> Result<&mut Field, FormError> {
        self.fields.get_mut(name).ok_or_else(|| unknown_field(name))
    }

    /// Current value of a field.
    pub fn value(&self, name: &str) -> Result<&str, FormError> {
        self.field(name).map(Field::value)
    }

    /// Applies a user edit to one field.
    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.field_mut(name)?.handle_change(value);
        Ok(())
    }

    /// Applies several user edits. Stops at the first unknown field.
    pub fn handle_changes<K, V>(
        &mut self,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Result<(), FormError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in values {
            self.handle_change(name.as_ref(), value)?;
        }
        Ok(())
    }

    /// Pushes an injected error onto one field.
    pub fn push_validation_error(
        &mut self,
        name: &str,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<(), FormError> {
        self.field_mut(name)?.push_validation_error(message);
        Ok(())
    }

    /// Message of the error a field displays.
    pub fn error_message(&self, name: &str) -> Result<Option<&str>, FormError> {
        self.field(name).map(Field::error_message)
    }

    /// Clears every field's errors, keeping values.
    pub fn clear_validation_errors(&mut self) {
        for field in self.fields.values_mut() {
            field.clear_validation_errors();
        }
    }

    /// Drops every field's injected errors, keeping validator failures.
    pub fn clear_injected_errors(&mut self) {
        for field in self.fields.values_mut() {
            field.clear_injected_errors();
        }
    }

    /// Resets every field to its initial value and clears errors.
    pub fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.reset_field();
        }
    }

    /// Runs every field's validators in declaration order and stores the
    /// results on each field.
    pub fn run_validators(&mut self) -> FormReport {
        // Cross-field rules read sibling values; evaluate all before storing.
        let snapshot: &Self = self;
        let results: Vec<Vec<Failure>> = snapshot
            .fields
            .values()
            .map(|f| f.evaluate(snapshot))
            .collect();

        let mut report = FormReport::default();
        for ((name, field), errors) in self.fields.iter_mut().zip(results) {
            field.set_validation_errors(errors.iter().cloned());
            report.fields.insert(name.clone(), errors);
        }
        report
    }

    /// True when the form would currently pass validation. Stored errors
    /// are not touched.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|f| f.evaluate(self).is_empty())
    }

    /// Request body built from the fields that are sent.
    #[must_use]
    pub fn payload(&self) -> Payload {
        self.fields
            .values()
            .filter(|f| f.include_in_payload())
            .map(|f| {
                (
                    f.payload_key().to_owned(),
                    serde_json::Value::String(f.value().to_owned()),
                )
            })
            .collect()
    }

    /// Validates and, only if every field passes, calls `action` with the
    /// payload.
    pub fn submit<T>(&mut self, action: impl FnOnce(Payload) -> T) -> Submission<T> {
        let report = self.run_validators();
        if report.any_errors() {
            tracing::debug!(
                errors = report.error_count(),
                fields = ?report.failing_fields().collect::<Vec<_>>(),
                "submission blocked by validation"
            );
            return Submission::Blocked(report);
        }
        let payload = self.payload();
        tracing::debug!(fields = payload.len(), "submitting form");
        Submission::Sent(action(payload))
    }
}

impl PeerValues for Form {
    fn peer_value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(Field::value)
    }
}

fn unknown_field(name: &str) -> FormError {
    FormError::UnknownField {
        name: name.to_owned(),
    }
}

fn check_length_bounds(field: &Field) -> Result<(), ConfigError> {
    let min = field
        .rules()
        .iter()
        .filter_map(|rule| match rule {
            Rule::MinLength { length, .. } => Some(*length),
            _ => None,
        })
        .max();
    let max = field
        .rules()
        .iter()
        .filter_map(|rule| match rule {
            Rule::MaxLength { length, .. } => Some(*length),
            _ => None,
        })
        .min();

    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ConfigError::InvalidRule {
            field: field.name().to_owned(),
            reason: format!("minLength {min} exceeds maxLength {max}"),
        }),
        _ => Ok(()),
    }
}

// ============================================================================
// TESTS
// ============================================================================
