//! Profile editing.

use reviewhub_validator::rule::Rule;
use reviewhub_validator::schema::{FieldSchema, FormSchema};

pub const DISPLAY_NAME_MAX: usize = 50;
pub const CITY_MAX: usize = 100;
pub const BIO_MAX: usize = 300;

/// Public profile details.
#[must_use]
pub fn edit_profile() -> FormSchema {
    FormSchema::new([
        FieldSchema::new(
            "display_name",
            [
                Rule::required("Please enter a display name"),
                Rule::max_length(
                    DISPLAY_NAME_MAX,
                    format!("Display name must be at most {DISPLAY_NAME_MAX} characters"),
                ),
            ],
        ),
        FieldSchema::new(
            "email",
            [
                Rule::required("Please enter your email"),
                Rule::email(),
            ],
        ),
        FieldSchema::new(
            "city",
            [Rule::max_length(
                CITY_MAX,
                format!("City must be at most {CITY_MAX} characters"),
            )],
        ),
        FieldSchema::new(
            "bio",
            [Rule::max_length(
                BIO_MAX,
                format!("Bio must be at most {BIO_MAX} characters"),
            )],
        ),
    ])
}
