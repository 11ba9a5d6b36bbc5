//! Namespace paths
//!
//! Every message targets exactly one namespace. Paths are normalized to
//! start with the separator; the root namespace is the separator alone.

use std::fmt;

/// Namespace path separator
pub const SEPARATOR: char = '/';

/// A normalized namespace path
///
/// `Namespace::new("chat")` and `Namespace::new("/chat")` are equal; the
/// empty path normalizes to the root namespace.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// The root namespace (`/`)
    pub fn root() -> Self {
        Namespace(SEPARATOR.to_string())
    }

    /// Create a namespace, prefixing the separator if missing
    pub fn new(path: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        if path.starts_with(SEPARATOR) {
            Namespace(path.to_string())
        } else {
            Namespace(format!("{}{}", SEPARATOR, path))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Namespace::root()
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Namespace({})", self.0)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Namespace {
    fn from(path: &str) -> Self {
        Namespace::new(path)
    }
}

impl From<String> for Namespace {
    fn from(path: String) -> Self {
        if path.starts_with(SEPARATOR) {
            Namespace(path)
        } else {
            Namespace(format!("{}{}", SEPARATOR, path))
        }
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_root_namespace() {
        assert_eq!(Namespace::root().as_str(), "/");
        assert!(Namespace::root().is_root());
        assert_eq!(Namespace::default(), Namespace::root());
    }

    #[test]
    fn test_separator_prefix_normalization() {
        assert_eq!(Namespace::new("custom"), Namespace::new("/custom"));
        assert_eq!(Namespace::new("custom").as_str(), "/custom");
        assert_eq!(Namespace::new("").as_str(), "/");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Namespace::from("chat"), Namespace::new("/chat"));
        assert_eq!(Namespace::from("/chat".to_string()).as_str(), "/chat");
    }

    proptest! {
        #[test]
        fn prop_always_separator_rooted(path in ".{0,64}") {
            let nsp = Namespace::new(&path);
            prop_assert!(nsp.as_str().starts_with('/'));
        }

        #[test]
        fn prop_normalization_idempotent(path in "[a-z/]{0,32}") {
            let once = Namespace::new(&path);
            let twice = Namespace::new(once.as_str());
            prop_assert_eq!(once, twice);
        }
    }
}
