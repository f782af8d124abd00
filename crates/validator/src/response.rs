//! Server response routing
//!
//! The platform API answers every form submission with an envelope
//! `{ "status": "SUCCESS" | "FAIL" | "ERROR", "data": ..., "errors": ... }`.
//! Only the parts that carry field feedback are modeled here; `data` stays
//! an opaque JSON value.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::field::Field;
use crate::form::Form;

/// Message pushed when the server rejects a request without details.
pub const GENERIC_REJECTION: &str = "Please check your input and try again.";

/// Message pushed when the server fails to process a request.
pub const GENERIC_SERVER_ERROR: &str = "Something went wrong. Please try again later.";

/// Response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiStatus {
    /// The request was accepted.
    Success,
    /// The request was rejected, usually with field errors.
    Fail,
    /// The server could not process the request.
    Error,
}

/// Field errors reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerErrors {
    /// Messages keyed by field name.
    ByField(IndexMap<String, String>),
    /// Messages without a field.
    List(Vec<String>),
}

/// Response envelope of the platform API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ServerErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    #[must_use]
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            status: ApiStatus::Success,
            data: Some(data),
            errors: None,
            message: None,
        }
    }

    #[must_use]
    pub fn fail(errors: ServerErrors) -> Self {
        Self {
            status: ApiStatus::Fail,
            data: None,
            errors: Some(errors),
            message: None,
        }
    }

    #[must_use]
    pub fn error(message: Option<String>) -> Self {
        Self {
            status: ApiStatus::Error,
            data: None,
            errors: None,
            message,
        }
    }
}

/// What [`Form::apply_response`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseOutcome {
    /// `SUCCESS`; no field was touched.
    Accepted,
    /// `FAIL`; server errors were pushed onto fields.
    Rejected,
    /// `ERROR`; a generic error was pushed onto the fallback field.
    Failed,
}

impl Form {
    /// Routes a server response's errors onto this form's fields.
    ///
    /// Errors from an earlier response are replaced, so resubmitting without
    /// an edit never stacks the same server message twice. Errors keyed by a
    /// payload key (or, failing that, a field name) go to that field;
    /// anything else goes to `fallback`, which must exist.
    pub fn apply_response(
        &mut self,
        response: &ApiResponse,
        fallback: &str,
    ) -> Result<ResponseOutcome, FormError> {
        self.field(fallback)?;
        self.clear_injected_errors();

        match response.status {
            ApiStatus::Success => Ok(ResponseOutcome::Accepted),
            ApiStatus::Fail => {
                match &response.errors {
                    Some(ServerErrors::ByField(errors)) if !errors.is_empty() => {
                        // Reverse so the first error for a field ends up on top.
                        for (key, message) in errors.iter().rev() {
                            let target = self.field_for_server_key(key).unwrap_or(fallback).to_owned();
                            self.push_validation_error(&target, message.clone())?;
                        }
                    }
                    Some(ServerErrors::List(errors)) if !errors.is_empty() => {
                        for message in errors.iter().rev() {
                            self.push_validation_error(fallback, message.clone())?;
                        }
                    }
                    _ => {
                        let message = response
                            .message
                            .clone()
                            .unwrap_or_else(|| GENERIC_REJECTION.to_owned());
                        self.push_validation_error(fallback, message)?;
                    }
                }
                tracing::debug!(fallback, "server rejected submission");
                Ok(ResponseOutcome::Rejected)
            }
            ApiStatus::Error => {
                tracing::warn!(message = ?response.message, "server failed to process submission");
                self.push_validation_error(fallback, GENERIC_SERVER_ERROR)?;
                Ok(ResponseOutcome::Failed)
            }
        }
    }

    /// Name of the field a server error key refers to. The server only sees
    /// the payload, so payload keys win over field names.
    fn field_for_server_key(&self, key: &str) -> Option<&str> {
        self.fields()
            .find(|field| field.include_in_payload() && field.payload_key() == key)
            .or_else(|| self.field(key).ok())
            .map(Field::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use pretty_assertions::assert_eq;

    fn login() -> Form {
        Form::from_fields([
            Field::new("email").with_rules([Rule::email()]),
            Field::new("password").with_rules([Rule::required("Password is required")]),
        ])
        .unwrap()
    }

    #[test]
    fn parses_envelopes() {
        let response: ApiResponse = serde_json::from_str(
            r#"{ "status": "FAIL", "errors": { "email": "Email already in use" } }"#,
        )
        .unwrap();
        assert_eq!(response.status, ApiStatus::Fail);
        assert!(matches!(response.errors, Some(ServerErrors::ByField(_))));

        let response: ApiResponse =
            serde_json::from_str(r#"{ "status": "FAIL", "errors": ["Wrong email or password"] }"#)
                .unwrap();
        assert!(matches!(response.errors, Some(ServerErrors::List(_))));

        let response: ApiResponse =
            serde_json::from_str(r#"{ "status": "SUCCESS", "data": { "id": 7 } }"#).unwrap();
        assert_eq!(response.data, Some(serde_json::json!({ "id": 7 })));
    }

    #[test]
    fn success_touches_nothing() {
        let mut form = login();
        let outcome = form
            .apply_response(&ApiResponse::success(serde_json::json!({})), "email")
            .unwrap();
        assert_eq!(outcome, ResponseOutcome::Accepted);
        assert!(form.fields().all(|f| !f.has_errors()));
    }

    #[test]
    fn field_errors_go_to_their_fields() {
        let mut form = login();
        let mut errors = IndexMap::new();
        errors.insert("email".to_owned(), "Email already in use".to_owned());
        errors.insert("nickname".to_owned(), "Nickname taken".to_owned());

        let outcome = form
            .apply_response(&ApiResponse::fail(ServerErrors::ByField(errors)), "password")
            .unwrap();

        assert_eq!(outcome, ResponseOutcome::Rejected);
        assert_eq!(
            form.error_message("email").unwrap(),
            Some("Email already in use")
        );
        assert_eq!(
            form.error_message("password").unwrap(),
            Some("Nickname taken")
        );
    }

    #[test]
    fn list_errors_keep_server_order_on_fallback() {
        let mut form = login();
        let response = ApiResponse::fail(ServerErrors::List(vec![
            "Wrong email or password".to_owned(),
            "Account locked".to_owned(),
        ]));
        form.apply_response(&response, "password").unwrap();

        let messages: Vec<&str> = form
            .field("password")
            .unwrap()
            .errors()
            .iter()
            .map(|f| f.message.as_ref())
            .collect();
        assert_eq!(messages, vec!["Wrong email or password", "Account locked"]);
    }

    #[test]
    fn bare_rejection_uses_message_or_default() {
        let mut form = login();
        let mut response = ApiResponse::fail(ServerErrors::List(Vec::new()));
        form.apply_response(&response, "email").unwrap();
        assert_eq!(form.error_message("email").unwrap(), Some(GENERIC_REJECTION));

        response.message = Some("Too many attempts".to_owned());
        form.apply_response(&response, "email").unwrap();
        assert_eq!(form.error_message("email").unwrap(), Some("Too many attempts"));
    }

    #[test]
    fn server_error_pushes_generic_message() {
        let mut form = login();
        let outcome = form
            .apply_response(&ApiResponse::error(Some("db down".to_owned())), "email")
            .unwrap();
        assert_eq!(outcome, ResponseOutcome::Failed);
        assert_eq!(
            form.error_message("email").unwrap(),
            Some(GENERIC_SERVER_ERROR)
        );
    }

    #[test]
    fn field_errors_follow_payload_keys() {
        let mut form = Form::from_fields([
            Field::new("display_name").with_payload_key("displayName"),
            Field::new("bio"),
        ])
        .unwrap();
        let mut errors = IndexMap::new();
        errors.insert("displayName".to_owned(), "Name already taken".to_owned());

        form.apply_response(&ApiResponse::fail(ServerErrors::ByField(errors)), "bio")
            .unwrap();

        assert_eq!(
            form.error_message("display_name").unwrap(),
            Some("Name already taken")
        );
        assert_eq!(form.error_message("bio").unwrap(), None);
    }

    #[test]
    fn repeated_rejection_replaces_server_errors() {
        let mut form = login();
        form.handle_change("email", "nope").unwrap();
        form.run_validators();
        let response = ApiResponse::fail(ServerErrors::List(vec![
            "Wrong email or password".to_owned(),
        ]));

        form.apply_response(&response, "password").unwrap();
        form.apply_response(&response, "password").unwrap();

        let password = form.field("password").unwrap();
        assert_eq!(password.errors().len(), 2);
        assert_eq!(password.error_message(), Some("Wrong email or password"));
        assert!(!password.errors()[1].is_injected());
        assert_eq!(form.field("email").unwrap().errors().len(), 1);
    }

    #[test]
    fn unknown_fallback_is_an_error() {
        let mut form = login();
        let result = form.apply_response(&ApiResponse::error(None), "username");
        assert!(matches!(result, Err(FormError::UnknownField { .. })));
    }
}
