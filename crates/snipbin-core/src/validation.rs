//! Business rules for candidate snippets.
//!
//! Every rule runs independently and all violations are reported together,
//! in the order the rules are declared in [`SnippetValidator::CHECKS`].

use jiff::Timestamp;
use thiserror::Error;

use crate::clock;
use crate::error::CoreError;
use crate::models::snippet::Snippet;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnippetValidationError {
    #[error("Contents cannot be empty")]
    ContentsCantBeEmpty,

    #[error("Contents cannot be larger than {0} characters")]
    ContentsTooLarge(usize),

    #[error("Expiry date must be in the future")]
    ExpiryDateMustBeFuture,
}

type Check = fn(&SnippetValidator, &Snippet, Timestamp) -> Option<SnippetValidationError>;

#[derive(Debug, Clone, Copy)]
pub struct SnippetValidator {
    contents_character_limit: usize,
}

impl SnippetValidator {
    const CHECKS: [Check; 3] = [
        Self::check_contents_not_blank,
        Self::check_contents_size,
        Self::check_expiry_in_future,
    ];

    /// Contents must be strictly shorter than `contents_character_limit`
    /// characters.
    pub fn new(contents_character_limit: usize) -> Result<Self, CoreError> {
        if contents_character_limit == 0 {
            return Err(CoreError::ZeroCharacterLimit);
        }
        Ok(Self {
            contents_character_limit,
        })
    }

    pub fn contents_character_limit(&self) -> usize {
        self.contents_character_limit
    }

    pub fn validate(&self, snippet: Snippet) -> Result<Snippet, Vec<SnippetValidationError>> {
        self.validate_at(snippet, clock::now())
    }

    /// Validate against a fixed clock reading. On success the snippet is
    /// returned untouched; on failure the list is never empty.
    pub fn validate_at(
        &self,
        snippet: Snippet,
        now: Timestamp,
    ) -> Result<Snippet, Vec<SnippetValidationError>> {
        let errors: Vec<_> = Self::CHECKS
            .iter()
            .filter_map(|check| check(self, &snippet, now))
            .collect();

        if errors.is_empty() {
            Ok(snippet)
        } else {
            Err(errors)
        }
    }

    fn check_contents_not_blank(
        &self,
        snippet: &Snippet,
        _now: Timestamp,
    ) -> Option<SnippetValidationError> {
        snippet
            .contents
            .trim()
            .is_empty()
            .then_some(SnippetValidationError::ContentsCantBeEmpty)
    }

    fn check_contents_size(
        &self,
        snippet: &Snippet,
        _now: Timestamp,
    ) -> Option<SnippetValidationError> {
        (snippet.contents.chars().count() >= self.contents_character_limit)
            .then_some(SnippetValidationError::ContentsTooLarge(
                self.contents_character_limit,
            ))
    }

    fn check_expiry_in_future(
        &self,
        snippet: &Snippet,
        now: Timestamp,
    ) -> Option<SnippetValidationError> {
        snippet
            .expires_at
            .is_some_and(|expires_at| expires_at <= now)
            .then_some(SnippetValidationError::ExpiryDateMustBeFuture)
    }
}
