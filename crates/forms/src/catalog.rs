//! Catalog of the platform's built-in forms.

use std::fmt;
use std::str::FromStr;

use reviewhub_validator::error::ConfigError;
use reviewhub_validator::form::Form;
use reviewhub_validator::schema::FormSchema;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::{auth, content, photos, profile};

/// A built-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Login,
    Signup,
    ChangePassword,
    EditProfile,
    Review,
    Tip,
    Question,
    Answer,
    Report,
    PhotoRow,
}

impl FormKind {
    /// Every built-in form.
    pub const ALL: [Self; 10] = [
        Self::Login,
        Self::Signup,
        Self::ChangePassword,
        Self::EditProfile,
        Self::Review,
        Self::Tip,
        Self::Question,
        Self::Answer,
        Self::Report,
        Self::PhotoRow,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::ChangePassword => "change-password",
            Self::EditProfile => "edit-profile",
            Self::Review => "review",
            Self::Tip => "tip",
            Self::Question => "question",
            Self::Answer => "answer",
            Self::Report => "report",
            Self::PhotoRow => "photo-row",
        }
    }

    /// One-line description for listings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Login => "Log in with email and password",
            Self::Signup => "Create an account",
            Self::ChangePassword => "Change the password of a signed-in user",
            Self::EditProfile => "Edit public profile details",
            Self::Review => "Rate and review a business",
            Self::Tip => "Leave a short tip about a business",
            Self::Question => "Ask the community about a business",
            Self::Answer => "Answer a question",
            Self::Report => "Report a review, tip, question or photo",
            Self::PhotoRow => "One row of a photo upload",
        }
    }

    /// The form's schema.
    #[must_use]
    pub fn schema(self) -> FormSchema {
        match self {
            Self::Login => auth::login(),
            Self::Signup => auth::signup(),
            Self::ChangePassword => auth::change_password(),
            Self::EditProfile => profile::edit_profile(),
            Self::Review => content::review(),
            Self::Tip => content::tip(),
            Self::Question => content::question(),
            Self::Answer => content::answer(),
            Self::Report => content::report(),
            Self::PhotoRow => photos::photo_row(),
        }
    }

    /// Builds a live form.
    pub fn build(self) -> Result<Form, ConfigError> {
        tracing::debug!(form = %self, "building form");
        self.schema().build()
    }

    /// Field that receives server errors not tied to a field.
    #[must_use]
    pub const fn fallback_field(self) -> &'static str {
        match self {
            Self::Login => "password",
            Self::ChangePassword => "current_password",
            Self::Signup => "email",
            Self::EditProfile => "display_name",
            Self::Review => "body",
            Self::Tip => "text",
            Self::Question => "question",
            Self::Answer => "answer",
            Self::Report => "reason",
            Self::PhotoRow => "photo",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownForm {
                name: s.to_owned(),
                expected: Self::ALL
                    .iter()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
