use jiff::{Timestamp, ToSpan};
use snipbin_core::models::snippet::Snippet;
use snipbin_core::validation::{SnippetValidationError, SnippetValidator};
use uuid::Uuid;

const MAX_CONTENTS_LENGTH: usize = 16;

fn now() -> Timestamp {
    Timestamp::from_second(1_700_000_000).unwrap()
}

fn snippet() -> Snippet {
    Snippet {
        id: Uuid::new_v4(),
        title: "title".to_string(),
        contents: "contents".to_string(),
        created_at: now(),
        format: Some("txt".to_string()),
        expires_at: Some(now() + 24.hours()),
    }
}

fn validator() -> SnippetValidator {
    SnippetValidator::new(MAX_CONTENTS_LENGTH).unwrap()
}

#[test]
fn valid_snippet_is_returned_unchanged() {
    let snippet = snippet();
    assert_eq!(validator().validate_at(snippet.clone(), now()), Ok(snippet));
}

#[test]
fn snippet_without_expiry_is_valid() {
    let snippet = Snippet {
        expires_at: None,
        ..snippet()
    };
    assert!(validator().validate_at(snippet, now()).is_ok());
}

#[test]
fn empty_contents_returns_contents_cant_be_empty() {
    let snippet = Snippet {
        contents: String::new(),
        ..snippet()
    };
    assert_eq!(
        validator().validate_at(snippet, now()),
        Err(vec![SnippetValidationError::ContentsCantBeEmpty])
    );
}

#[test]
fn whitespace_only_contents_returns_contents_cant_be_empty() {
    let snippet = Snippet {
        contents: " \t\n ".to_string(),
        ..snippet()
    };
    assert_eq!(
        validator().validate_at(snippet, now()),
        Err(vec![SnippetValidationError::ContentsCantBeEmpty])
    );
}

#[test]
fn contents_too_large_returns_contents_too_large() {
    let snippet = Snippet {
        contents: "contentstoolarge".to_string(),
        ..snippet()
    };
    assert_eq!(
        validator().validate_at(snippet, now()),
        Err(vec![SnippetValidationError::ContentsTooLarge(
            MAX_CONTENTS_LENGTH
        )])
    );
}

#[test]
fn contents_one_below_limit_is_valid() {
    let snippet = Snippet {
        contents: "a".repeat(MAX_CONTENTS_LENGTH - 1),
        ..snippet()
    };
    assert!(validator().validate_at(snippet, now()).is_ok());
}

#[test]
fn contents_limit_counts_characters_not_bytes() {
    let snippet = Snippet {
        contents: "é".repeat(MAX_CONTENTS_LENGTH - 1),
        ..snippet()
    };
    assert!(validator().validate_at(snippet, now()).is_ok());
}

#[test]
fn expiry_in_the_past_returns_expiry_date_must_be_future() {
    let snippet = Snippet {
        expires_at: Some(now() - 1.second()),
        ..snippet()
    };
    assert_eq!(
        validator().validate_at(snippet, now()),
        Err(vec![SnippetValidationError::ExpiryDateMustBeFuture])
    );
}

#[test]
fn expiry_equal_to_now_returns_expiry_date_must_be_future() {
    let snippet = Snippet {
        expires_at: Some(now()),
        ..snippet()
    };
    assert_eq!(
        validator().validate_at(snippet, now()),
        Err(vec![SnippetValidationError::ExpiryDateMustBeFuture])
    );
}

#[test]
fn validation_errors_are_accumulated_in_rule_order() {
    let snippet = Snippet {
        contents: "contentstoolarge".to_string(),
        expires_at: Some(now() - 1.second()),
        ..snippet()
    };
    assert_eq!(
        validator().validate_at(snippet, now()),
        Err(vec![
            SnippetValidationError::ContentsTooLarge(MAX_CONTENTS_LENGTH),
            SnippetValidationError::ExpiryDateMustBeFuture,
        ])
    );
}

#[test]
fn blank_and_oversized_contents_report_both() {
    let snippet = Snippet {
        contents: " ".repeat(MAX_CONTENTS_LENGTH),
        expires_at: Some(now() - 1.hour()),
        ..snippet()
    };
    assert_eq!(
        validator().validate_at(snippet, now()),
        Err(vec![
            SnippetValidationError::ContentsCantBeEmpty,
            SnippetValidationError::ContentsTooLarge(MAX_CONTENTS_LENGTH),
            SnippetValidationError::ExpiryDateMustBeFuture,
        ])
    );
}

#[test]
fn error_descriptions() {
    assert_eq!(
        SnippetValidationError::ContentsCantBeEmpty.to_string(),
        "Contents cannot be empty"
    );
    assert_eq!(
        SnippetValidationError::ContentsTooLarge(100).to_string(),
        "Contents cannot be larger than 100 characters"
    );
    assert_eq!(
        SnippetValidationError::ExpiryDateMustBeFuture.to_string(),
        "Expiry date must be in the future"
    );
}

#[test]
fn zero_character_limit_is_rejected() {
    assert!(SnippetValidator::new(0).is_err());
}
