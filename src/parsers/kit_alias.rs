//! Kit alias matching

use std::collections::BTreeSet;

/// The set of alias keys that identify imports of the kit.
///
/// An import source refers to the kit when it contains any key as a substring.
/// With no keys nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KitAliases {
    keys: BTreeSet<String>,
}

impl KitAliases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, source: &str) -> bool {
        self.keys.iter().any(|key| source.contains(key.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for KitAliases {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}
