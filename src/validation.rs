//! Email address validation.
//!
//! The check is a fixed pattern match, not full RFC 5322 compliance. The
//! pattern can be swapped at startup through `EMAIL_PATTERN`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::DEFAULT_EMAIL_PATTERN;
use crate::error::AppError;

static DEFAULT_EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_EMAIL_PATTERN).expect("Invalid email regex"));

/// Check an address against the built-in pattern
pub fn is_valid_email(s: &str) -> bool {
    DEFAULT_EMAIL_RE.is_match(s)
}

/// Email predicate held in application state
#[derive(Debug, Clone)]
pub struct EmailValidator {
    pattern: Regex,
}

impl EmailValidator {
    /// Build a validator from a custom pattern
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn is_valid(&self, s: &str) -> bool {
        self.pattern.is_match(s)
    }

    /// Accept an address, or reject it with `AppError::InvalidEmail`
    pub fn parse(&self, s: &str) -> Result<Email, AppError> {
        if !self.is_valid(s) {
            return Err(AppError::InvalidEmail);
        }
        Ok(Email(s.to_string()))
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_EMAIL_RE.clone(),
        }
    }
}

/// An email address that passed an `EmailValidator`.
///
/// Stored exactly as given; matching against existing customers is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
