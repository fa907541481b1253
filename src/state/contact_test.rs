use super::*;

// =============================================================
// Email pattern
// =============================================================

#[test]
fn email_accepts_simple_addresses() {
    for email in ["a@b.co", "first.last@example.com", "x+tag@sub.domain.id", "a@b.c.d"] {
        assert!(is_valid_email(email), "{email}");
    }
}

#[test]
fn email_rejects_structural_failures() {
    for email in ["", "bad", "a@b", "@b.co", "a@.co", "a@b.", "a b@c.co", "a@@b.co", "a@b@c.co", "a@b .co"] {
        assert!(!is_valid_email(email), "{email}");
    }
}

// =============================================================
// Field validation
// =============================================================

#[test]
fn draft_trims_all_fields() {
    let draft = ContactDraft::new("  Ann ", "\ta@b.co\n", "  Hello there  ");
    assert_eq!(draft.name, "Ann");
    assert_eq!(draft.email, "a@b.co");
    assert_eq!(draft.message, "Hello there");
}

#[test]
fn one_char_name_fails_alongside_email_and_message() {
    let draft = ContactDraft::new("A", "bad", "short");
    assert_eq!(
        draft.validate(),
        vec![ValidationError::NameTooShort, ValidationError::InvalidEmail, ValidationError::MessageTooShort]
    );
}

#[test]
fn errors_follow_check_order() {
    let draft = ContactDraft::new("Ann", "bad", "short");
    assert_eq!(draft.validate(), vec![ValidationError::InvalidEmail, ValidationError::MessageTooShort]);
}

#[test]
fn valid_draft_has_no_errors() {
    let draft = ContactDraft::new("Ann", "a@b.co", "Hello there, this works");
    assert!(draft.validate().is_empty());
}

#[test]
fn length_checks_apply_after_trimming() {
    let draft = ContactDraft::new(" A ", "a@b.co", "   123456789   ");
    assert_eq!(draft.validate(), vec![ValidationError::NameTooShort, ValidationError::MessageTooShort]);
}

#[test]
fn length_checks_count_utf16_units_not_bytes() {
    let draft = ContactDraft::new("Ñ", "a@b.co", "héllo wörl");
    assert_eq!(draft.validate(), vec![ValidationError::NameTooShort]);
}

#[test]
fn astral_characters_count_as_two_units() {
    let draft = ContactDraft::new("😀", "a@b.co", "😀😀😀😀😀");
    assert!(draft.validate().is_empty());

    let draft = ContactDraft::new("😀", "a@b.co", "😀😀😀😀");
    assert_eq!(draft.validate(), vec![ValidationError::MessageTooShort]);
}

#[test]
fn byte_order_mark_is_trimmed() {
    let draft = ContactDraft::new("\u{FEFF}Ann\u{FEFF}", " \u{FEFF}a@b.co", "Hello there\u{FEFF} ");
    assert_eq!(draft.name, "Ann");
    assert_eq!(draft.email, "a@b.co");
    assert_eq!(draft.message, "Hello there");

    let draft = ContactDraft::new("\u{FEFF}A\u{FEFF}", "a@b.co", "Hello there, this works");
    assert_eq!(draft.validate(), vec![ValidationError::NameTooShort]);
}

#[test]
fn boundary_lengths_pass() {
    let draft = ContactDraft::new("Al", "a@b.co", "0123456789");
    assert!(draft.validate().is_empty());
}

#[test]
fn summary_joins_with_single_spaces() {
    let messages = Messages::default();
    let summary = error_summary(&[ValidationError::InvalidEmail, ValidationError::MessageTooShort], &messages);
    assert_eq!(summary, "Email tidak valid. Pesan minimal 10 karakter.");
}

#[test]
fn summary_of_no_errors_is_empty() {
    assert_eq!(error_summary(&[], &Messages::default()), "");
}

#[test]
fn feedback_tones_map_to_colors() {
    assert_eq!(FeedbackTone::Error.css_color(), "#ffb4b4");
    assert_eq!(FeedbackTone::Accent.css_color(), "var(--accent)");
}

// =============================================================
// Submission phases
// =============================================================

#[test]
fn invalid_submission_is_rejected_without_sending() {
    let mut state = ContactState::default();
    let outcome = state.submit(&ContactDraft::new("Ann", "bad", "short"));
    let expected = vec![ValidationError::InvalidEmail, ValidationError::MessageTooShort];
    assert_eq!(outcome, SubmitOutcome::Rejected(expected.clone()));
    assert_eq!(state.phase, ContactPhase::Invalid(expected));
}

#[test]
fn valid_submission_runs_full_cycle_back_to_idle() {
    let mut state = ContactState::default();
    assert_eq!(state.submit(&ContactDraft::new("Ann", "a@b.co", "Hello there, this works")), SubmitOutcome::Sending);
    assert_eq!(state.phase, ContactPhase::Submitting);
    state.complete_send();
    assert_eq!(state.phase, ContactPhase::Submitted);
    state.acknowledge();
    assert_eq!(state.phase, ContactPhase::Idle);
}

#[test]
fn resubmitting_after_errors_revalidates_from_scratch() {
    let mut state = ContactState::default();
    state.submit(&ContactDraft::new("", "", ""));
    assert!(matches!(state.phase, ContactPhase::Invalid(ref errors) if errors.len() == 3));
    assert_eq!(state.submit(&ContactDraft::new("Ann", "a@b.co", "Hello there, this works")), SubmitOutcome::Sending);
}

#[test]
fn acknowledge_outside_submitted_keeps_phase() {
    let mut state = ContactState::default();
    state.submit(&ContactDraft::new("A", "a@b.co", "Hello there, this works"));
    state.acknowledge();
    assert_eq!(state.phase, ContactPhase::Invalid(vec![ValidationError::NameTooShort]));
}
