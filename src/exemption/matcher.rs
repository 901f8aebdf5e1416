//! Path matching logic.
//!
//! # Responsibilities
//! - Match path prefixes (media and static URLs)
//! - Match compiled regular expressions with search semantics
//! - Combine matchers with OR semantics
//!
//! # Design Decisions
//! - Patterns compiled at startup, never at request time
//! - Regexes search anywhere in the path (anchor with `^` to match the start)
//! - Empty prefix never matches

use regex::Regex;

use crate::error::{LocaleUrlError, LocaleUrlResult};

/// Trait for matching paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the text matches this condition.
    fn matches(&self, text: &str) -> bool;
}

/// Routing configurations a restricted pattern applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingScope {
    /// The wildcard bucket, applies to every routing configuration.
    All,
    /// A single routing configuration.
    Key(String),
}

/// What a compiled pattern is used for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternCategory {
    /// Matching paths never receive a locale prefix.
    LocaleIndependent,
    /// Matching paths are allowed locale handling in restricted mode.
    Restricted(RoutingScope),
}

/// A compiled regular expression tagged with its category.
#[derive(Debug, Clone)]
pub struct PathPattern {
    regex: Regex,
    category: PatternCategory,
}

impl PathPattern {
    /// Compile a pattern.
    pub fn new(pattern: &str, category: PatternCategory) -> LocaleUrlResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| LocaleUrlError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex, category })
    }

    /// Compile a locale-independent path pattern.
    pub fn independent(pattern: &str) -> LocaleUrlResult<Self> {
        Self::new(pattern, PatternCategory::LocaleIndependent)
    }

    /// Compile a restricted path pattern for the given scope.
    pub fn restricted(pattern: &str, scope: RoutingScope) -> LocaleUrlResult<Self> {
        Self::new(pattern, PatternCategory::Restricted(scope))
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn category(&self) -> &PatternCategory {
        &self.category
    }
}

impl Matcher for PathPattern {
    fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Matches a path prefix.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    prefix: String,
}

impl PrefixMatcher {
    /// Create a new prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PrefixMatcher {
    fn matches(&self, text: &str) -> bool {
        !self.prefix.is_empty() && text.starts_with(&self.prefix)
    }
}

/// Combines multiple matchers with OR semantics. First match wins.
#[derive(Debug, Default)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn push(&mut self, matcher: impl Matcher + 'static) {
        self.matchers.push(Box::new(matcher));
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, text: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(text))
    }
}
