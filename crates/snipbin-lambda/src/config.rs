use std::env;

use eyre::{WrapErr, ensure};
use snipbin_core::validation::SnippetValidator;

pub const BUCKET_VAR: &str = "SNIPBIN_BUCKET";
pub const CONTENTS_CHARACTER_LIMIT_VAR: &str = "SNIPBIN_CONTENTS_CHARACTER_LIMIT";
pub const REGION_VAR: &str = "SNIPBIN_REGION";

pub const DEFAULT_BUCKET: &str = "snipbin";
pub const DEFAULT_CONTENTS_CHARACTER_LIMIT: usize = 100_000;

/// Process configuration, read once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bucket: String,
    pub contents_character_limit: usize,
    /// Overrides the region from the default AWS provider chain.
    pub region: Option<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bucket = lookup(BUCKET_VAR).unwrap_or_else(|| DEFAULT_BUCKET.to_string());

        let contents_character_limit = match lookup(CONTENTS_CHARACTER_LIMIT_VAR) {
            Some(raw) => raw.trim().parse::<usize>().wrap_err_with(|| {
                format!("{CONTENTS_CHARACTER_LIMIT_VAR} must be a positive integer, got {raw:?}")
            })?,
            None => DEFAULT_CONTENTS_CHARACTER_LIMIT,
        };
        ensure!(
            contents_character_limit > 0,
            "{CONTENTS_CHARACTER_LIMIT_VAR} must be greater than zero"
        );

        let region = lookup(REGION_VAR).filter(|r| !r.is_empty());

        Ok(Self {
            bucket,
            contents_character_limit,
            region,
        })
    }

    pub fn validator(&self) -> eyre::Result<SnippetValidator> {
        Ok(SnippetValidator::new(self.contents_character_limit)?)
    }
}
