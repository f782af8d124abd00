//! Per-field validation runner
//!
//! A [`ValidationRunner`] owns a field's ordered rule list and its current
//! error list. It never owns the value: the caller passes the value in,
//! so the same runner logic serves standalone fields and fields inside a
//! form whose siblings act as comparands.
//!
//! Every rule runs on every call. Failures keep rule order and the first
//! one is the error a form displays.

use crate::feedback::Failure;
use crate::rule::{PeerValues, Rule};

/// Whether a field currently shows errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldStatus {
    /// No errors.
    Clean,
    /// At least one error.
    Invalid,
}

/// Outcome of one [`ValidationRunner::run_validators`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// True when at least one rule failed.
    pub error_exists: bool,
    /// The failures, in rule order.
    pub errors: Vec<Failure>,
}

impl RunReport {
    fn new(errors: Vec<Failure>) -> Self {
        Self {
            error_exists: !errors.is_empty(),
            errors,
        }
    }

    /// The failure a form displays.
    #[must_use]
    pub fn first(&self) -> Option<&Failure> {
        self.errors.first()
    }
}

/// Holds the rules and current errors of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationRunner {
    rules: Vec<Rule>,
    errors: Vec<Failure>,
}

impl ValidationRunner {
    /// Creates a runner with a fixed rule list and no errors.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            errors: Vec::new(),
        }
    }

    /// The configured rules, in run order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs every rule against `value` without touching stored errors.
    pub fn evaluate(&self, value: &str, peers: &dyn PeerValues) -> Vec<Failure> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let failure = rule.check(value, peers).into_failure()?;
                tracing::trace!(validator = %rule.id(), message = %failure.message, "validator failed");
                Some(failure)
            })
            .collect()
    }

    /// Runs every rule against `value` and replaces the stored errors with
    /// the failures.
    pub fn run_validators(&mut self, value: &str, peers: &dyn PeerValues) -> RunReport {
        let errors = self.evaluate(value, peers);
        self.errors.clone_from(&errors);
        RunReport::new(errors)
    }

    /// Overwrites the stored errors.
    pub fn set_validation_errors(&mut self, errors: impl IntoIterator<Item = Failure>) {
        self.errors = errors.into_iter().collect();
    }

    /// Puts an injected failure in front of the current errors, so it
    /// becomes the displayed one.
    pub fn push_validation_error(&mut self, message: impl Into<std::borrow::Cow<'static, str>>) {
        self.errors.insert(0, Failure::injected(message));
    }

    /// Removes all stored errors.
    pub fn clear_validation_errors(&mut self) {
        self.errors.clear();
    }

    /// Removes injected failures, keeping the ones validators produced.
    pub fn clear_injected_errors(&mut self) {
        self.errors.retain(|failure| !failure.is_injected());
    }

    /// Stored errors, displayed one first.
    #[must_use]
    pub fn errors(&self) -> &[Failure] {
        &self.errors
    }

    /// The displayed error.
    #[must_use]
    pub fn first_error(&self) -> Option<&Failure> {
        self.errors.first()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn status(&self) -> FieldStatus {
        if self.errors.is_empty() {
            FieldStatus::Clean
        } else {
            FieldStatus::Invalid
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::NoPeers;
    use pretty_assertions::assert_eq;

    fn messages(errors: &[Failure]) -> Vec<&str> {
        errors.iter().map(|f| f.message.as_ref()).collect()
    }

    #[test]
    fn required_on_empty_value() {
        let mut runner = ValidationRunner::new(vec![Rule::required("Required")]);
        let report = runner.run_validators("", &NoPeers);

        assert!(report.error_exists);
        assert_eq!(messages(&report.errors), vec!["Required"]);
        assert_eq!(runner.errors(), report.errors.as_slice());
    }

    #[test]
    fn collects_every_failure_in_rule_order() {
        let mut runner = ValidationRunner::new(vec![
            Rule::min_length(10, "A"),
            Rule::max_length(100, "B"),
            Rule::email_with_message("C"),
        ]);
        let report = runner.run_validators("short", &NoPeers);

        assert_eq!(messages(&report.errors), vec!["A", "C"]);
        assert_eq!(report.first().map(|f| f.message.as_ref()), Some("A"));
    }

    #[test]
    fn passing_run_clears_previous_errors() {
        let mut runner = ValidationRunner::new(vec![Rule::required("Required")]);
        runner.run_validators("", &NoPeers);
        assert_eq!(runner.status(), FieldStatus::Invalid);

        let report = runner.run_validators("filled", &NoPeers);
        assert!(!report.error_exists);
        assert_eq!(runner.status(), FieldStatus::Clean);
    }

    #[test]
    fn evaluate_leaves_stored_errors_alone() {
        let runner = ValidationRunner::new(vec![Rule::required("Required")]);
        let failures = runner.evaluate("", &NoPeers);
        assert_eq!(failures.len(), 1);
        assert!(runner.errors().is_empty());
    }

    #[test]
    fn push_prepends_injected_error() {
        let mut runner = ValidationRunner::new(vec![Rule::min_length(8, "Too short")]);
        runner.run_validators("abc", &NoPeers);
        runner.push_validation_error("Wrong email or password");

        assert_eq!(
            messages(runner.errors()),
            vec!["Wrong email or password", "Too short"]
        );
        assert!(runner.first_error().is_some_and(Failure::is_injected));
    }

    #[test]
    fn push_moves_clean_field_to_invalid() {
        let mut runner = ValidationRunner::default();
        assert_eq!(runner.status(), FieldStatus::Clean);
        runner.push_validation_error("Server said no");
        assert_eq!(runner.status(), FieldStatus::Invalid);
    }

    #[test]
    fn set_and_clear_errors() {
        let mut runner = ValidationRunner::default();
        runner.set_validation_errors([Failure::injected("one"), Failure::injected("two")]);
        assert_eq!(messages(runner.errors()), vec!["one", "two"]);

        runner.set_validation_errors([]);
        assert_eq!(runner.status(), FieldStatus::Clean);

        runner.push_validation_error("again");
        runner.clear_validation_errors();
        assert!(!runner.has_errors());
    }

    #[test]
    fn clear_injected_keeps_validator_failures() {
        let mut runner = ValidationRunner::new(vec![Rule::min_length(8, "Too short")]);
        runner.run_validators("abc", &NoPeers);
        runner.push_validation_error("Wrong email or password");

        runner.clear_injected_errors();
        assert_eq!(messages(runner.errors()), vec!["Too short"]);
    }
}
