//! Built-in validator functions
//!
//! Each function is a pure `(value, params) -> Feedback` computation with no
//! hidden state. Lengths are measured in Unicode scalar values, so an
//! accented letter or an emoji counts as one character.
//!
//! | Function | Fails when |
//! |---|---|
//! | [`is_required`] | value is empty or whitespace-only |
//! | [`min_length`] | fewer than `n` characters |
//! | [`max_length`] | more than `n` characters |
//! | [`is_email`] | value is not shaped like `local@domain.tld` |
//! | [`is_strong_password`] | missing a lowercase letter, an uppercase letter or a digit, or shorter than 8 |
//! | [`must_be_same_as`] | value differs from `other` |
//! | [`must_not_be_same_as`] | value equals `other` |

use std::sync::LazyLock;

use crate::feedback::{Failure, Feedback};
use crate::rule::ValidatorId;

/// Minimum number of characters a strong password must have.
pub const STRONG_PASSWORD_MIN_LENGTH: usize = 8;

/// Message used by [`is_email`] when the caller supplies none.
pub const DEFAULT_EMAIL_MESSAGE: &str = "Please enter a valid email address";

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

#[inline]
fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn failure(id: ValidatorId, message: &str) -> Failure {
    Failure::new(id.as_str(), message.to_owned())
}

/// Fails when the value is empty after trimming whitespace.
pub fn is_required(value: &str, message: &str) -> Feedback {
    Feedback::check(!value.trim().is_empty(), || {
        failure(ValidatorId::IsRequired, message)
    })
}

/// Fails when the value has fewer than `min` characters.
pub fn min_length(value: &str, min: usize, message: &str) -> Feedback {
    Feedback::check(char_len(value) >= min, || {
        failure(ValidatorId::MinLength, message)
    })
}

/// Fails when the value has more than `max` characters.
pub fn max_length(value: &str, max: usize, message: &str) -> Feedback {
    Feedback::check(char_len(value) <= max, || {
        failure(ValidatorId::MaxLength, message)
    })
}

/// Fails when the value is not an email address.
///
/// Falls back to [`DEFAULT_EMAIL_MESSAGE`] when `message` is `None`.
pub fn is_email(value: &str, message: Option<&str>) -> Feedback {
    Feedback::check(EMAIL_REGEX.is_match(value), || {
        failure(ValidatorId::IsEmail, message.unwrap_or(DEFAULT_EMAIL_MESSAGE))
    })
}

/// Fails unless the value mixes lowercase, uppercase and digits and is at
/// least [`STRONG_PASSWORD_MIN_LENGTH`] characters long.
pub fn is_strong_password(value: &str, message: &str) -> Feedback {
    let strong = char_len(value) >= STRONG_PASSWORD_MIN_LENGTH
        && value.chars().any(char::is_lowercase)
        && value.chars().any(char::is_uppercase)
        && value.chars().any(|c| c.is_ascii_digit());
    Feedback::check(strong, || failure(ValidatorId::IsStrongPassword, message))
}

/// Fails when the value differs from `other`.
pub fn must_be_same_as(value: &str, other: &str, message: &str) -> Feedback {
    Feedback::check(value == other, || failure(ValidatorId::MustBeSameAs, message))
}

/// Fails when the value equals `other`.
pub fn must_not_be_same_as(value: &str, other: &str, message: &str) -> Feedback {
    Feedback::check(value != other, || {
        failure(ValidatorId::MustNotBeSameAs, message)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("\t\n", false)]
    #[case("a", true)]
    #[case("  padded  ", true)]
    fn required(#[case] value: &str, #[case] passes: bool) {
        assert_eq!(is_required(value, "Required").is_passed(), passes);
    }

    #[test]
    fn required_uses_given_message() {
        let feedback = is_required("", "Please enter a title");
        assert_eq!(feedback.message(), Some("Please enter a title"));
        assert_eq!(
            feedback.failure().map(|f| f.code.as_ref()),
            Some("isRequired")
        );
    }

    #[test]
    fn length_boundaries_pass_both() {
        assert!(min_length("abcde", 5, "short").is_passed());
        assert!(max_length("abcde", 5, "long").is_passed());
        assert!(min_length("abcd", 5, "short").is_failure());
        assert!(max_length("abcdef", 5, "long").is_failure());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 5 chars, 6 bytes
        assert!(max_length("h\u{e9}llo", 5, "long").is_passed());
        assert!(min_length("\u{1f44b}\u{1f30d}", 3, "short").is_failure());
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("first.last+tag@mail.example.org", true)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("user@localhost", false)]
    #[case("", false)]
    fn email(#[case] value: &str, #[case] passes: bool) {
        assert_eq!(is_email(value, None).is_passed(), passes);
    }

    #[test]
    fn email_default_and_custom_message() {
        assert_eq!(is_email("nope", None).message(), Some(DEFAULT_EMAIL_MESSAGE));
        assert_eq!(
            is_email("nope", Some("Bad email")).message(),
            Some("Bad email")
        );
    }

    #[rstest]
    #[case("Passw0rd", true)]
    #[case("Sup3rSecret", true)]
    #[case("password1", false)]
    #[case("PASSWORD1", false)]
    #[case("Password", false)]
    #[case("Pa55", false)]
    fn strong_password(#[case] value: &str, #[case] passes: bool) {
        assert_eq!(is_strong_password(value, "weak").is_passed(), passes);
    }

    #[test]
    fn equality_validators_are_negations() {
        assert!(must_be_same_as("abc", "abc", "mismatch").is_passed());
        assert!(must_be_same_as("abcd", "abc", "mismatch").is_failure());
        assert!(must_not_be_same_as("abc", "abc", "same").is_failure());
        assert!(must_not_be_same_as("abcd", "abc", "same").is_passed());
    }
}
