//! The RQL fragment string type

use std::fmt;

/// An RQL expression such as `eq(genome_id,208964.12)` or `and(..)`.
///
/// Fragments are immutable once built. The empty fragment means "no
/// predicate" and is dropped by combinators and by request assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// The empty fragment
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Wrap hand-written RQL without any encoding.
    pub fn raw(rql: impl Into<String>) -> Self {
        Self(rql.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.0
    }
}

impl From<&str> for Fragment {
    fn from(rql: &str) -> Self {
        Self::raw(rql)
    }
}

impl From<String> for Fragment {
    fn from(rql: String) -> Self {
        Self::raw(rql)
    }
}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
