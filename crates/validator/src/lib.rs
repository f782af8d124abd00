//! # reviewhub-validator
//!
//! The validation core every reviewhub form is built on: a small library of
//! pure validators, a per-field runner that collects their failures, a
//! field controller that owns value and errors, and the form submission
//! protocol that blocks requests until every field passes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reviewhub_validator::prelude::*;
//!
//! let mut form = Form::from_fields([
//!     Field::new("title").with_rules([Rule::required("Please enter a title")]),
//!     Field::new("body").with_rules([Rule::max_length(200, "Review is too long")]),
//! ])?;
//!
//! form.handle_change("title", "Great tacos")?;
//! match form.submit(|payload| api.post_review(payload)) {
//!     Submission::Sent(response) => { /* ... */ }
//!     Submission::Blocked(report) => { /* fields now hold their errors */ }
//! }
//! ```
//!
//! ## Built-in Validators
//!
//! `isRequired`, `minLength`, `maxLength`, `isEmail`, `isStrongPassword`,
//! `mustBeSameAs`, `mustNotBeSameAs`; see [`validators`] for the exact rules
//! and [`rule::Rule`] for their declarative form.
//!
//! ## Semantics
//!
//! - Every rule of a field runs on every validation; failures keep rule
//!   order and the first one is the displayed error.
//! - A user edit ([`Field::handle_change`](field::Field::handle_change))
//!   always clears the field's errors.
//! - A blocked submission never calls the submit action.

pub mod error;
pub mod feedback;
pub mod field;
pub mod form;
pub mod prelude;
pub mod response;
pub mod rows;
pub mod rule;
pub mod runner;
pub mod schema;
pub mod validators;
