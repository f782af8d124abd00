//! Field-state controller
//!
//! A [`Field`] owns one input's value together with its
//! [`ValidationRunner`]. User edits go through [`Field::handle_change`],
//! which always clears the field's errors: feedback describes the value it
//! was computed for and never outlives an edit.

use std::borrow::Cow;

use crate::feedback::Failure;
use crate::rule::{NoPeers, PeerValues, Rule};
use crate::runner::{FieldStatus, RunReport, ValidationRunner};

/// One form input: name, value, rules and current errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    label: Option<String>,
    initial: String,
    value: String,
    payload_key: Option<String>,
    include_in_payload: bool,
    runner: ValidationRunner,
}

impl Field {
    /// Creates an empty field without rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            initial: String::new(),
            value: String::new(),
            payload_key: None,
            include_in_payload: true,
            runner: ValidationRunner::default(),
        }
    }

    /// Sets the rule list. Rules are fixed once the field is in use.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.runner = ValidationRunner::new(rules.into_iter().collect());
        self
    }

    /// Sets the value the field starts with and resets to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = initial.into();
        self.value.clone_from(&self.initial);
        self
    }

    /// Sets a human-readable label.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sends the value under `key` instead of the field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_payload_key(mut self, key: impl Into<String>) -> Self {
        self.payload_key = Some(key.into());
        self
    }

    /// Keeps the field out of the submitted payload (confirmation inputs).
    #[must_use = "builder methods must be chained or built"]
    pub fn excluded_from_payload(mut self) -> Self {
        self.include_in_payload = false;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The label, falling back to the name.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Key the value is sent under.
    #[must_use]
    pub fn payload_key(&self) -> &str {
        self.payload_key.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn include_in_payload(&self) -> bool {
        self.include_in_payload
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        self.runner.rules()
    }

    // ------------------------------------------------------------------------
    // value operations
    // ------------------------------------------------------------------------

    /// Applies a user edit: stores the new value, then clears errors.
    pub fn handle_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.runner.clear_validation_errors();
    }

    /// Applies a checkbox toggle. Checked is stored as `"true"`, unchecked
    /// as the empty string so `isRequired` means "must be ticked".
    pub fn handle_checked(&mut self, checked: bool) {
        self.handle_change(if checked { "true" } else { "" });
    }

    /// Assigns a value programmatically (prefill). Errors are kept.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Restores the initial value and clears errors.
    pub fn reset_field(&mut self) {
        self.value.clone_from(&self.initial);
        self.runner.clear_validation_errors();
    }

    /// Empties the value but keeps errors visible, e.g. wiping a password
    /// after the server rejected it.
    pub fn clear_value_only(&mut self) {
        self.value.clear();
    }

    // ------------------------------------------------------------------------
    // runner operations
    // ------------------------------------------------------------------------

    /// Runs every rule against the current value. Field comparands resolve
    /// to the empty string; use [`Field::run_validators_with`] inside a form.
    pub fn run_validators(&mut self) -> RunReport {
        self.run_validators_with(&NoPeers)
    }

    /// Runs every rule, resolving field comparands through `peers`.
    pub fn run_validators_with(&mut self, peers: &dyn PeerValues) -> RunReport {
        self.runner.run_validators(&self.value, peers)
    }

    /// Computes failures for the current value without storing them.
    pub fn evaluate(&self, peers: &dyn PeerValues) -> Vec<Failure> {
        self.runner.evaluate(&self.value, peers)
    }

    pub fn set_validation_errors(&mut self, errors: impl IntoIterator<Item = Failure>) {
        self.runner.set_validation_errors(errors);
    }

    pub fn push_validation_error(&mut self, message: impl Into<Cow<'static, str>>) {
        self.runner.push_validation_error(message);
    }

    pub fn clear_validation_errors(&mut self) {
        self.runner.clear_validation_errors();
    }

    pub fn clear_injected_errors(&mut self) {
        self.runner.clear_injected_errors();
    }

    #[must_use]
    pub fn errors(&self) -> &[Failure] {
        self.runner.errors()
    }

    #[must_use]
    pub fn first_error(&self) -> Option<&Failure> {
        self.runner.first_error()
    }

    /// Message of the displayed error.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.first_error().map(|f| f.message.as_ref())
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.runner.has_errors()
    }

    #[must_use]
    pub fn status(&self) -> FieldStatus {
        self.runner.status()
    }
}

// ============================================================================
// TESTS
// ============================================================================
