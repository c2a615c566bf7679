//! Appointment-date keyword predicate.
//!
//! # Responsibility
//! - Match a person's appointment date against fixed keywords.
//! - Parse raw filter arguments, rejecting blank input at the boundary.
//!
//! # Invariants
//! - Matching is whole-token and case-insensitive: the date field is split
//!   on whitespace and each token compared for case-folded equality.
//! - A zero-keyword predicate is unrepresentable through the public
//!   constructors; vacuous match-nothing filters are a usage error.
//! - Predicate equality is order-sensitive over the keyword sequence.

use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Usage-format error raised while building a keyword predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParseError {
    /// Filter arguments were empty or all-whitespace.
    EmptyKeywords,
}

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKeywords => write!(
                f,
                "calendar filter needs at least one keyword; usage: calendar KEYWORD [MORE_KEYWORDS...]"
            ),
        }
    }
}

impl Error for FilterParseError {}

/// Reusable filter matching appointment-date tokens against keywords.
///
/// Constructed once per filter command and reused across `matches` calls
/// and filter swaps; matching has no side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApptKeywordPredicate {
    keywords: Vec<String>,
}

impl ApptKeywordPredicate {
    /// Parses raw filter arguments into a predicate.
    ///
    /// Trims the input, rejects empty/blank argument strings, and splits
    /// on runs of whitespace into keywords.
    ///
    /// # Errors
    /// [`FilterParseError::EmptyKeywords`] when no keyword survives the
    /// trim; no predicate is constructed in that case.
    pub fn parse(input: &str) -> Result<Self, FilterParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FilterParseError::EmptyKeywords);
        }
        Ok(Self {
            keywords: trimmed.split_whitespace().map(str::to_string).collect(),
        })
    }

    /// Builds a predicate from already-tokenized keywords.
    ///
    /// # Errors
    /// [`FilterParseError::EmptyKeywords`] when the sequence is empty or
    /// any keyword is blank.
    pub fn from_keywords(keywords: Vec<String>) -> Result<Self, FilterParseError> {
        if keywords.is_empty() || keywords.iter().any(|kw| kw.trim().is_empty()) {
            return Err(FilterParseError::EmptyKeywords);
        }
        Ok(Self { keywords })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True iff any keyword equals any whitespace-separated token of the
    /// person's appointment date, ignoring case.
    ///
    /// Whole-token semantics: keyword `2024` matches date `"2024 review"`
    /// but never `"20245"` or the inside of `"12-2024"`.
    pub fn matches(&self, person: &Person) -> bool {
        person
            .appointment_date
            .split_whitespace()
            .any(|token| self.matches_token(token))
    }

    fn matches_token(&self, token: &str) -> bool {
        let folded = token.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| keyword.to_lowercase() == folded)
    }
}
