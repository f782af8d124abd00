//! # reviewhub-forms
//!
//! The forms of the reviewhub platform, expressed as
//! [`FormSchema`](reviewhub_validator::schema::FormSchema)s over the
//! validation core. Each module returns schemas; [`FormKind`] indexes them.
//!
//! ```rust,ignore
//! use reviewhub_forms::FormKind;
//!
//! let mut form = FormKind::Login.build()?;
//! form.handle_change("email", "me@example.com")?;
//! ```

pub mod auth;
pub mod catalog;
pub mod content;
pub mod error;
pub mod photos;
pub mod profile;

pub use catalog::FormKind;
pub use error::CatalogError;
