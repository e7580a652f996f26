//! Contact form flow tests
//!
//! Field validation, email shapes, and the linear submit phase sequence.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use test_case::test_case;
use vitrine::email::is_valid_email;
use vitrine::form::{FormError, FormPhase, FormSubmission};

fn filled() -> FormSubmission {
    FormSubmission::from_fields(
        "Mousa",
        "mousa@example.com",
        "Opportunity",
        "Hello, I saw your portfolio.",
    )
}

// =============================================================================
// EMAIL VALIDATION
// =============================================================================

#[test_case("a@b.com", true)]
#[test_case("a@b", false)]
#[test_case("a.com", false)]
#[test_case("", false)]
#[test_case("user.name+tag@sub.domain.org", true)]
#[test_case("spaced out@domain.com", false)]
fn test_email_shapes(email: &str, expected: bool) {
    assert_eq!(is_valid_email(email), expected, "{email:?}");
}

// =============================================================================
// FIELD VALIDATION
// =============================================================================

#[test]
fn test_all_fields_required() {
    for missing in ["name", "email", "subject", "message"] {
        let submission = FormSubmission::from_fields(
            if missing == "name" { "" } else { "Mousa" },
            if missing == "email" { "" } else { "m@e.com" },
            if missing == "subject" { "" } else { "Hi" },
            if missing == "message" { "" } else { "Text" },
        );
        assert_eq!(
            submission.validate(),
            Err(FormError::MissingFields),
            "empty {missing} must fail validation"
        );
    }
}

#[test]
fn test_whitespace_only_fields_count_as_missing() {
    let submission = FormSubmission::from_fields("Mousa", "m@e.com", "   \t", "Text");
    assert_eq!(submission.validate(), Err(FormError::MissingFields));
}

#[test]
fn test_missing_fields_reported_before_bad_email() {
    let submission = FormSubmission::from_fields("", "not-an-email", "Hi", "Text");
    assert_eq!(submission.validate(), Err(FormError::MissingFields));
}

#[test]
fn test_error_messages_are_user_facing() {
    assert_eq!(
        FormError::MissingFields.to_string(),
        "Please fill in all required fields."
    );
    assert_eq!(
        FormError::InvalidEmail.to_string(),
        "Please enter a valid email address."
    );
}

// =============================================================================
// SUBMIT PHASE SEQUENCE
// =============================================================================

#[test]
fn test_empty_subject_blocks_submission_and_loading_state() {
    let submission = FormSubmission::from_fields("Mousa", "m@e.com", "", "Text");
    let mut phase = FormPhase::Idle;
    assert!(phase.begin_send(&submission).is_err());
    assert_eq!(
        phase,
        FormPhase::Idle,
        "a blocked submit must not move the button into a loading state"
    );
}

#[test]
fn test_invalid_email_blocks_submission() {
    let submission = FormSubmission::from_fields("Mousa", "m@e", "Hi", "Text");
    let mut phase = FormPhase::Idle;
    assert_eq!(phase.begin_send(&submission), Err(FormError::InvalidEmail));
    assert_eq!(phase, FormPhase::Idle);
}

#[test]
fn test_full_simulated_round_trip() {
    let mut phase = FormPhase::Idle;
    phase.begin_send(&filled()).unwrap();
    assert_eq!(phase, FormPhase::Sending);

    // Send timer fires.
    phase.complete_send();
    assert_eq!(phase, FormPhase::Sent);

    // Reset timer fires; the form accepts input again.
    phase.reset();
    assert_eq!(phase, FormPhase::Idle);
    phase.begin_send(&filled()).unwrap();
    assert_eq!(phase, FormPhase::Sending);
}

#[test]
fn test_stray_timer_fire_converges_benignly() {
    // A reset firing while already idle converges to the same state.
    let mut phase = FormPhase::Idle;
    phase.reset();
    assert_eq!(phase, FormPhase::Idle);
    // complete_send out of order is ignored.
    phase.complete_send();
    assert_eq!(phase, FormPhase::Idle);
}
