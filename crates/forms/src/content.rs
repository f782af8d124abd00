//! Content forms: reviews, tips, questions, answers and reports.

use reviewhub_validator::rule::Rule;
use reviewhub_validator::schema::{FieldSchema, FormSchema};

pub const REVIEW_TITLE_MAX: usize = 100;
pub const REVIEW_BODY_MIN: usize = 20;
pub const REVIEW_BODY_MAX: usize = 2000;
pub const TIP_MAX: usize = 200;
pub const QUESTION_MAX: usize = 200;
pub const ANSWER_MAX: usize = 1000;
pub const REPORT_DETAILS_MAX: usize = 500;

/// A star rating with a titled review.
#[must_use]
pub fn review() -> FormSchema {
    FormSchema::new([
        FieldSchema::new("rating", [Rule::required("Please select a rating")]),
        FieldSchema::new(
            "title",
            [
                Rule::required("Please give your review a title"),
                Rule::max_length(
                    REVIEW_TITLE_MAX,
                    format!("Title must be at most {REVIEW_TITLE_MAX} characters"),
                ),
            ],
        ),
        FieldSchema::new(
            "body",
            [
                Rule::required("Please write your review"),
                Rule::min_length(
                    REVIEW_BODY_MIN,
                    format!("Reviews need at least {REVIEW_BODY_MIN} characters"),
                ),
                Rule::max_length(
                    REVIEW_BODY_MAX,
                    format!("Reviews must be at most {REVIEW_BODY_MAX} characters"),
                ),
            ],
        ),
    ])
}

/// A short piece of advice about a business.
#[must_use]
pub fn tip() -> FormSchema {
    FormSchema::new([FieldSchema::new(
        "text",
        [
            Rule::required("Please write your tip"),
            Rule::max_length(TIP_MAX, format!("Tips must be at most {TIP_MAX} characters")),
        ],
    )])
}

/// A question to the business community.
#[must_use]
pub fn question() -> FormSchema {
    FormSchema::new([FieldSchema::new(
        "question",
        [
            Rule::required("Please enter your question"),
            Rule::max_length(
                QUESTION_MAX,
                format!("Questions must be at most {QUESTION_MAX} characters"),
            ),
        ],
    )])
}

/// An answer to a question.
#[must_use]
pub fn answer() -> FormSchema {
    FormSchema::new([FieldSchema::new(
        "answer",
        [
            Rule::required("Please enter your answer"),
            Rule::max_length(
                ANSWER_MAX,
                format!("Answers must be at most {ANSWER_MAX} characters"),
            ),
        ],
    )])
}

/// A report against a review, tip, question or photo.
#[must_use]
pub fn report() -> FormSchema {
    FormSchema::new([
        FieldSchema::new("reason", [Rule::required("Please choose a reason")]),
        FieldSchema::new(
            "details",
            [Rule::max_length(
                REPORT_DETAILS_MAX,
                format!("Details must be at most {REPORT_DETAILS_MAX} characters"),
            )],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tip_at_limit_passes() {
        let mut form = tip().build().unwrap();
        form.handle_change("text", "a".repeat(TIP_MAX)).unwrap();
        assert!(!form.run_validators().any_errors());

        form.handle_change("text", "a".repeat(TIP_MAX + 1)).unwrap();
        let report = form.run_validators();
        assert_eq!(
            report.first_errors().next().map(|(name, _)| name),
            Some("text")
        );
    }

    #[test]
    fn review_reports_every_missing_field() {
        let mut form = review().build().unwrap();
        let report = form.run_validators();
        assert_eq!(
            report.failing_fields().collect::<Vec<_>>(),
            vec!["rating", "title", "body"]
        );
        // required and min length both fail on an empty body
        assert_eq!(report.errors_for("body").len(), 2);
        assert_eq!(
            form.error_message("body").unwrap(),
            Some("Please write your review")
        );
    }

    #[test]
    fn report_details_are_optional() {
        let mut form = report().build().unwrap();
        form.handle_change("reason", "spam").unwrap();
        let payload = form.submit(|p| p).sent().unwrap();
        assert_eq!(payload["details"], "");
    }
}
