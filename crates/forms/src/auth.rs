//! Authentication forms: log in, sign up, change password.

use reviewhub_validator::rule::{Comparand, Rule};
use reviewhub_validator::schema::{FieldSchema, FormSchema};

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 30;

/// Pushed onto the password field when the server rejects the credentials.
pub const WRONG_CREDENTIALS: &str = "Wrong email or password";

const PASSWORD_STRENGTH: &str =
    "Password needs at least 8 characters with upper and lower case letters and a digit";

fn email_field() -> FieldSchema {
    let mut field = FieldSchema::new(
        "email",
        [
            Rule::required("Please enter your email"),
            Rule::email(),
        ],
    );
    field.label = Some("Email".to_owned());
    field
}

fn confirmation_of(name: &str) -> FieldSchema {
    let mut field = FieldSchema::new(
        "confirm_password",
        [
            Rule::required("Please confirm your password"),
            Rule::same_as(Comparand::field(name), "Passwords do not match"),
        ],
    );
    field.label = Some("Confirm password".to_owned());
    field.include_in_payload = false;
    field
}

/// Email and password.
#[must_use]
pub fn login() -> FormSchema {
    FormSchema::new([
        email_field(),
        FieldSchema::new("password", [Rule::required("Please enter your password")]),
    ])
}

/// Account creation.
#[must_use]
pub fn signup() -> FormSchema {
    FormSchema::new([
        FieldSchema::new(
            "username",
            [
                Rule::required("Please choose a username"),
                Rule::min_length(
                    USERNAME_MIN,
                    format!("Username must be at least {USERNAME_MIN} characters"),
                ),
                Rule::max_length(
                    USERNAME_MAX,
                    format!("Username must be at most {USERNAME_MAX} characters"),
                ),
            ],
        ),
        email_field(),
        FieldSchema::new(
            "password",
            [
                Rule::required("Please choose a password"),
                Rule::strong_password(PASSWORD_STRENGTH),
            ],
        ),
        confirmation_of("password"),
    ])
}

/// Password change for a signed-in user.
#[must_use]
pub fn change_password() -> FormSchema {
    FormSchema::new([
        FieldSchema::new(
            "current_password",
            [Rule::required("Please enter your current password")],
        ),
        FieldSchema::new(
            "new_password",
            [
                Rule::required("Please choose a new password"),
                Rule::strong_password(PASSWORD_STRENGTH),
                Rule::not_same_as(
                    Comparand::field("current_password"),
                    "New password must differ from the current one",
                ),
            ],
        ),
        confirmation_of("new_password"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn signup_rejects_weak_and_mismatched_passwords() {
        let mut form = signup().build().unwrap();
        form.handle_changes([
            ("username", "taco_fan"),
            ("email", "taco@example.com"),
            ("password", "password"),
            ("confirm_password", "Password"),
        ])
        .unwrap();

        let report = form.run_validators();
        assert_eq!(
            report.failing_fields().collect::<Vec<_>>(),
            vec!["password", "confirm_password"]
        );
        assert_eq!(
            form.error_message("password").unwrap(),
            Some(PASSWORD_STRENGTH)
        );
    }

    #[test]
    fn signup_payload_skips_confirmation() {
        let mut form = signup().build().unwrap();
        form.handle_changes([
            ("username", "taco_fan"),
            ("email", "taco@example.com"),
            ("password", "Carnitas4ever"),
            ("confirm_password", "Carnitas4ever"),
        ])
        .unwrap();

        let payload = form.submit(|p| p).sent().unwrap();
        let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["username", "email", "password"]);
    }

    #[test]
    fn new_password_must_change() {
        let mut form = change_password().build().unwrap();
        form.handle_changes([
            ("current_password", "Carnitas4ever"),
            ("new_password", "Carnitas4ever"),
            ("confirm_password", "Carnitas4ever"),
        ])
        .unwrap();

        form.run_validators();
        assert_eq!(
            form.error_message("new_password").unwrap(),
            Some("New password must differ from the current one")
        );
        assert_eq!(form.error_message("confirm_password").unwrap(), None);
    }

    #[test]
    fn empty_confirmation_shows_required_first() {
        let mut form = signup().build().unwrap();
        form.handle_change("password", "Carnitas4ever").unwrap();
        form.run_validators();
        assert_eq!(
            form.error_message("confirm_password").unwrap(),
            Some("Please confirm your password")
        );
        assert_eq!(form.field("confirm_password").unwrap().errors().len(), 2);
    }
}
