//! Form schemas
//!
//! A [`FormSchema`] is the serializable description of a form: its fields in
//! declaration order and each field's rules. Schemas are loaded from JSON and
//! turned into a live [`Form`] with [`FormSchema::build`].
//!
//! ```json
//! {
//!   "fields": [
//!     { "name": "email", "rules": [
//!         { "name": "isRequired", "args": { "message": "Email is required" } },
//!         { "name": "isEmail", "args": {} }
//!     ] },
//!     { "name": "confirm", "includeInPayload": false, "rules": [
//!         { "name": "mustBeSameAs", "args": { "other": { "field": "password" }, "message": "Passwords do not match" } }
//!     ] }
//!   ]
//! }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::field::Field;
use crate::form::Form;
use crate::rule::Rule;

const fn default_true() -> bool {
    true
}

/// Description of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldSchema {
    /// Field name, unique within the form.
    pub name: String,

    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Starting value.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub initial: String,

    /// Key the value is sent under, when it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_key: Option<String>,

    /// Whether the value is part of the submitted payload.
    #[serde(default = "default_true")]
    pub include_in_payload: bool,

    /// Rules, in run order.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            name: name.into(),
            label: None,
            initial: String::new(),
            payload_key: None,
            include_in_payload: true,
            rules: rules.into_iter().collect(),
        }
    }

    /// Creates the live field.
    #[must_use]
    pub fn to_field(&self) -> Field {
        let mut field = Field::new(self.name.clone())
            .with_initial(self.initial.clone())
            .with_rules(self.rules.iter().cloned());
        if let Some(label) = &self.label {
            field = field.with_label(label.clone());
        }
        if let Some(key) = &self.payload_key {
            field = field.with_payload_key(key.clone());
        }
        if !self.include_in_payload {
            field = field.excluded_from_payload();
        }
        field
    }
}

/// Description of a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSchema {
    /// Fields in declaration order.
    pub fields: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn new(fields: impl IntoIterator<Item = FieldSchema>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Parses a schema from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a schema from a JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the schema as pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds a live form, checking names and cross-field references.
    pub fn build(&self) -> Result<Form, ConfigError> {
        let form = Form::from_fields(self.fields.iter().map(FieldSchema::to_field))?;
        tracing::debug!(fields = form.len(), "form built from schema");
        Ok(form)
    }
}

// ============================================================================
// TESTS
// ============================================================================
