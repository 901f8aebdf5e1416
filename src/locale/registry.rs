//! Supported locale set and locale resolution.
//!
//! # Responsibilities
//! - Hold the supported locales and the default locale code
//! - Resolve a candidate locale to a supported one (exact, then 2-char prefix)
//! - Answer whether a locale is the default locale
//!
//! # Design Decisions
//! - Built once from configuration, immutable afterwards
//! - Resolution is case-insensitive; stored locales are lowercase
//! - An unsupported candidate yields `None`, never an error

use crate::config::LocalesConfig;
use crate::error::{LocaleUrlError, LocaleUrlResult};

/// Returns true if `code` has the lexical shape of a locale code:
/// 2-3 letters, optionally followed by `-` and a 2-8 character region/script.
pub fn is_locale_token(code: &str) -> bool {
    let (language, region) = match code.split_once('-') {
        Some((language, region)) => (language, Some(region)),
        None => (code, None),
    };

    let language_ok =
        (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic());
    let region_ok = region.map_or(true, |r| {
        (2..=8).contains(&r.len()) && r.chars().all(|c| c.is_ascii_alphanumeric())
    });

    language_ok && region_ok
}

/// Immutable registry of supported locales.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    supported: Vec<String>,
    default_locale: String,
}

impl LocaleRegistry {
    /// Create a registry from supported codes and the default locale code.
    ///
    /// Codes are lowercased and deduplicated, preserving order. The default
    /// code must resolve (exactly or by its 2-char prefix) to a supported locale.
    pub fn new<I, S>(supported: I, default_code: &str) -> LocaleUrlResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut locales: Vec<String> = Vec::new();
        for code in supported {
            let code = code.as_ref().to_lowercase();
            if !is_locale_token(&code) {
                return Err(LocaleUrlError::InvalidLocale(code));
            }
            if !locales.contains(&code) {
                locales.push(code);
            }
        }

        if locales.is_empty() {
            return Err(LocaleUrlError::EmptyLocaleSet);
        }

        let default_locale = resolve_in(&locales, default_code)
            .map(str::to_string)
            .ok_or_else(|| LocaleUrlError::UnsupportedDefaultLocale(default_code.to_string()))?;

        Ok(Self {
            supported: locales,
            default_locale,
        })
    }

    /// Create a registry from the `[locales]` configuration section.
    pub fn from_config(config: &LocalesConfig) -> LocaleUrlResult<Self> {
        Self::new(&config.supported, &config.default)
    }

    /// Supported locales in configured order.
    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    /// Resolve a candidate locale to a supported locale.
    ///
    /// Returns the lowercased candidate if it is supported, otherwise its
    /// first two characters if those are supported, otherwise `None`.
    pub fn resolve(&self, candidate: &str) -> Option<&str> {
        resolve_in(&self.supported, candidate)
    }

    /// Returns true if `locale` is exactly a supported locale.
    pub fn is_supported(&self, locale: &str) -> bool {
        self.supported.iter().any(|l| l == locale)
    }

    /// The default locale (the resolved default code).
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Returns true if `locale` is the default locale.
    pub fn is_default_locale(&self, locale: &str) -> bool {
        locale == self.default_locale
    }
}

fn resolve_in<'a>(supported: &'a [String], candidate: &str) -> Option<&'a str> {
    let candidate = candidate.to_lowercase();
    let prefix: String = candidate.chars().take(2).collect();

    supported
        .iter()
        .find(|l| **l == candidate)
        .or_else(|| supported.iter().find(|l| **l == prefix))
        .map(String::as_str)
}
