//! Mount prefix handling.
//!
//! The mount prefix is the part of the URL fixed by deployment (the app may
//! be served under `/app/`). It always starts and ends with `/`; a root mount
//! is `/`.

use std::fmt;

use crate::error::{LocaleUrlError, LocaleUrlResult};

/// Deployment-time path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPrefix(String);

impl MountPrefix {
    /// Validate and wrap a mount prefix.
    pub fn new(prefix: impl Into<String>) -> LocaleUrlResult<Self> {
        let prefix = prefix.into();
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            return Err(LocaleUrlError::InvalidMountPrefix(prefix));
        }
        Ok(Self(prefix))
    }

    /// The root mount, `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prepend the prefix to a path. The path's leading slash is dropped
    /// because the prefix already ends in one.
    pub fn add(&self, path: &str) -> String {
        let rest = path.strip_prefix('/').unwrap_or(path);
        let mut url = String::with_capacity(self.0.len() + rest.len());
        url.push_str(&self.0);
        url.push_str(rest);
        url
    }

    /// Split a URL into `(prefix-without-trailing-slash, path)`.
    ///
    /// Fails if the URL does not start with the prefix.
    pub fn strip<'u>(&self, url: &'u str) -> LocaleUrlResult<(&'u str, &'u str)> {
        if !url.starts_with(&self.0) {
            return Err(LocaleUrlError::Precondition {
                url: url.to_string(),
                prefix: self.0.clone(),
            });
        }
        Ok(url.split_at(self.0.len() - 1))
    }
}

impl Default for MountPrefix {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for MountPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_validation() {
        assert!(MountPrefix::new("/").is_ok());
        assert!(MountPrefix::new("/app/").is_ok());
        assert!(matches!(
            MountPrefix::new("/app"),
            Err(LocaleUrlError::InvalidMountPrefix(_))
        ));
        assert!(MountPrefix::new("app/").is_err());
        assert!(MountPrefix::new("").is_err());
    }

    #[test]
    fn test_add_root() {
        let root = MountPrefix::root();
        assert_eq!(root.add("/fr/about"), "/fr/about");
        assert_eq!(root.add("/"), "/");
    }

    #[test]
    fn test_add_nested() {
        let prefix = MountPrefix::new("/app/").unwrap();
        assert_eq!(prefix.add("/fr/about"), "/app/fr/about");
        assert_eq!(prefix.add("/"), "/app/");
    }

    #[test]
    fn test_strip() {
        let prefix = MountPrefix::new("/app/").unwrap();
        assert_eq!(prefix.strip("/app/fr/about").unwrap(), ("/app", "/fr/about"));
        assert_eq!(prefix.strip("/app/").unwrap(), ("/app", "/"));

        let root = MountPrefix::root();
        assert_eq!(root.strip("/about").unwrap(), ("", "/about"));
    }

    #[test]
    fn test_strip_requires_prefix() {
        let prefix = MountPrefix::new("/app/").unwrap();
        let err = prefix.strip("/other/about").unwrap_err();
        assert!(matches!(err, LocaleUrlError::Precondition { .. }));
        assert!(err.to_string().contains("/other/about"));
    }

    #[test]
    fn test_strip_then_add_round_trips() {
        let prefix = MountPrefix::new("/app/").unwrap();
        for url in ["/app/", "/app/fr/about", "/app/static/x.css?v=1"] {
            let (before, after) = prefix.strip(url).unwrap();
            assert_eq!(format!("{before}{after}"), url);
            assert_eq!(prefix.add(after), url);
        }
    }
}
