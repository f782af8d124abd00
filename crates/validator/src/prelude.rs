//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use reviewhub_validator::prelude::*;
//! ```

pub use crate::error::{ConfigError, FormError};
pub use crate::feedback::{Failure, FailureOrigin, Feedback, FeedbackKind};
pub use crate::field::Field;
pub use crate::form::{Form, FormReport, Payload, Submission};
pub use crate::response::{ApiResponse, ApiStatus, ResponseOutcome, ServerErrors};
pub use crate::rows::{RowId, RowList, RowReport};
pub use crate::rule::{Comparand, NoPeers, PeerValues, Rule, ValidatorId};
pub use crate::runner::{FieldStatus, RunReport, ValidationRunner};
pub use crate::schema::{FieldSchema, FormSchema};
