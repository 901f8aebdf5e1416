//! Locale prefix extraction from request paths.
//!
//! # Responsibilities
//! - Detect a leading locale segment (`/fr/about`, `/fr-ca`, `/FR/about`)
//! - Return the captured locale token and the remaining path
//!
//! # Design Decisions
//! - The locale alternation is built from the supported set, longest first,
//!   so `/fr-ca/x` never stops at `fr`
//! - Matching is case-insensitive; the token is returned in its original case
//! - A segment that only starts like a locale (`/french`) is not a locale

use regex::Regex;

use crate::error::{LocaleUrlError, LocaleUrlResult};

/// Splits a leading locale segment off a path.
#[derive(Debug, Clone)]
pub struct LocaleSplitter {
    pattern: Regex,
}

impl LocaleSplitter {
    /// Build a splitter recognizing the given locale codes.
    pub fn new<S: AsRef<str>>(locales: &[S]) -> LocaleUrlResult<Self> {
        let mut codes: Vec<&str> = locales.iter().map(|code| code.as_ref()).collect();
        codes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = codes
            .iter()
            .map(|code| regex::escape(code))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(r"(?is)^/(?P<locale>{alternation})(?P<path>.*)$");

        let pattern = Regex::new(&source).map_err(|source_err| LocaleUrlError::InvalidPattern {
            pattern: source,
            source: source_err,
        })?;

        Ok(Self { pattern })
    }

    /// Separate the locale prefix from the rest of the path.
    ///
    /// Returns `(locale, path)`. When the path does not begin with a locale
    /// segment the locale is empty and the path is returned unchanged. A bare
    /// locale (`/en`) yields the root path `/`.
    pub fn split<'p>(&self, path: &'p str) -> (&'p str, &'p str) {
        if let Some(caps) = self.pattern.captures(path) {
            let locale = caps.name("locale").map_or("", |m| m.as_str());
            let rest = caps.name("path").map_or("", |m| m.as_str());
            let rest = if rest.is_empty() { "/" } else { rest };

            if !locale.is_empty() && rest.starts_with('/') {
                return (locale, rest);
            }
        }
        ("", path)
    }
}
