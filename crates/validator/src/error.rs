/// Error type for form configuration.
///
/// Raised while parsing a [`FormSchema`](crate::schema::FormSchema) or
/// assembling a [`Form`](crate::form::Form). A form that built successfully
/// never reports these at run time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The schema document is not valid JSON or names an unknown validator.
    #[error("invalid form schema: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field was declared without a name.
    #[error("field at position {position} has an empty name")]
    EmptyFieldName { position: usize },

    /// Two fields share a name.
    #[error("duplicate field `{name}`")]
    DuplicateField { name: String },

    /// A cross-field rule points at a field the form does not have.
    #[error("field `{field}` compares against unknown field `{reference}`")]
    UnknownFieldReference { field: String, reference: String },

    /// A rule whose arguments contradict the field's other rules.
    #[error("invalid rule on `{field}`: {reason}")]
    InvalidRule { field: String, reason: String },
}

impl ConfigError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Parse(_) => "parse",
            Self::EmptyFieldName { .. } => "field",
            Self::DuplicateField { .. } => "field",
            Self::UnknownFieldReference { .. } => "rule",
            Self::InvalidRule { .. } => "rule",
        }
    }

    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Parse(_) => "FORM_PARSE",
            Self::EmptyFieldName { .. } => "FORM_EMPTY_FIELD_NAME",
            Self::DuplicateField { .. } => "FORM_DUPLICATE_FIELD",
            Self::UnknownFieldReference { .. } => "FORM_UNKNOWN_REFERENCE",
            Self::InvalidRule { .. } => "FORM_INVALID_RULE",
        }
    }
}

/// Error type for operations on a built form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// No field with the given name.
    #[error("form has no field `{name}`")]
    UnknownField { name: String },

    /// No row with the given id.
    #[error("row {id} does not exist")]
    UnknownRow { id: u64 },
}

impl FormError {
    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownField { .. } => "FORM_UNKNOWN_FIELD",
            Self::UnknownRow { .. } => "FORM_UNKNOWN_ROW",
        }
    }
}
