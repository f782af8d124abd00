//! Property-based tests for reviewhub-validator.

use proptest::prelude::*;
use reviewhub_validator::prelude::*;
use reviewhub_validator::validators::{
    is_email, is_required, is_strong_password, max_length, min_length, must_be_same_as,
    must_not_be_same_as,
};

// ============================================================================
// PURITY: same input, same feedback
// ============================================================================

proptest! {
    #[test]
    fn validators_are_pure(s in ".{0,40}", n in 0usize..50, other in ".{0,10}") {
        prop_assert_eq!(is_required(&s, "r"), is_required(&s, "r"));
        prop_assert_eq!(min_length(&s, n, "m"), min_length(&s, n, "m"));
        prop_assert_eq!(max_length(&s, n, "m"), max_length(&s, n, "m"));
        prop_assert_eq!(is_email(&s, None), is_email(&s, None));
        prop_assert_eq!(is_strong_password(&s, "p"), is_strong_password(&s, "p"));
        prop_assert_eq!(must_be_same_as(&s, &other, "e"), must_be_same_as(&s, &other, "e"));
        prop_assert_eq!(
            must_not_be_same_as(&s, &other, "e"),
            must_not_be_same_as(&s, &other, "e")
        );
    }

    #[test]
    fn runner_is_idempotent(s in ".{0,40}") {
        let mut runner = ValidationRunner::new(vec![
            Rule::required("r"),
            Rule::min_length(3, "min"),
            Rule::email(),
        ]);
        let first = runner.run_validators(&s, &NoPeers);
        let second = runner.run_validators(&s, &NoPeers);
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// REQUIRED: fails iff trimmed value is empty
// ============================================================================

proptest! {
    #[test]
    fn required_fails_iff_blank(s in "[ \t\na-z]{0,12}") {
        let failed = is_required(&s, "Required").is_failure();
        prop_assert_eq!(failed, s.trim().is_empty());
    }

    #[test]
    fn padded_content_is_present(core in "[a-z]{1,8}", pad in "[ \t]{0,4}") {
        let padded = format!("{pad}{core}{pad}");
        prop_assert!(is_required(&padded, "Required").is_passed());
    }
}

// ============================================================================
// LENGTH BOUNDS
// ============================================================================

proptest! {
    #[test]
    fn min_length_fails_iff_shorter(s in ".{0,30}", n in 0usize..30) {
        let len = s.chars().count();
        prop_assert_eq!(min_length(&s, n, "m").is_failure(), len < n);
    }

    #[test]
    fn max_length_fails_iff_longer(s in ".{0,30}", n in 0usize..30) {
        let len = s.chars().count();
        prop_assert_eq!(max_length(&s, n, "m").is_failure(), len > n);
    }

    #[test]
    fn exact_length_passes_both(s in ".{0,30}") {
        let n = s.chars().count();
        prop_assert!(min_length(&s, n, "m").is_passed());
        prop_assert!(max_length(&s, n, "m").is_passed());
    }
}

// ============================================================================
// EQUALITY: mustNotBeSameAs negates mustBeSameAs
// ============================================================================

proptest! {
    #[test]
    fn equality_validators(a in "[ab]{0,3}", b in "[ab]{0,3}") {
        let same = must_be_same_as(&a, &b, "m").is_passed();
        let not_same = must_not_be_same_as(&a, &b, "m").is_passed();
        prop_assert_eq!(same, a == b);
        prop_assert_eq!(not_same, !same);
    }
}

// ============================================================================
// FIELD STATE
// ============================================================================

proptest! {
    #[test]
    fn any_edit_clears_errors(edit in ".{0,20}") {
        let mut field = Field::new("body").with_rules([
            Rule::required("Required"),
            Rule::min_length(50, "Too short"),
        ]);
        field.run_validators();
        prop_assert!(field.has_errors());

        field.handle_change(edit);
        prop_assert!(field.errors().is_empty());
    }

    #[test]
    fn failures_keep_rule_order(s in "[a-z]{0,4}") {
        // A and C always fail for these inputs; B never does.
        let mut field = Field::new("f").with_rules([
            Rule::min_length(10, "A"),
            Rule::max_length(100, "B"),
            Rule::email_with_message("C"),
        ]);
        field.handle_change(s);
        let report = field.run_validators();
        let messages: Vec<&str> = report.errors.iter().map(|f| f.message.as_ref()).collect();
        prop_assert_eq!(messages, vec!["A", "C"]);
    }
}
