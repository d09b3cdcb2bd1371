//! Caller-supplied additions to the built-in class categories.

/// Extra categories and conflicts layered over the built-in table.
///
/// Design systems add their own utilities (`shadow-2`, `text-cnt-primary`,
/// `bg-surface`). A custom group teaches the merger which classes belong
/// together so that the later one wins; custom groups are consulted before
/// the built-in table.
///
/// # Example
///
/// ```rust
/// use trellis::{ClassMerger, MergeConfig, UtilityMerger};
///
/// let merger = UtilityMerger::with_config(
///     MergeConfig::new().group("elevation", ["elevation"]),
/// );
/// let merged = merger.merge(&["elevation-1".into(), "elevation-3".into()]);
/// assert_eq!(merged, "elevation-3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeConfig {
    pub(crate) groups: Vec<CustomGroup>,
    pub(crate) conflicts: Vec<(String, Vec<String>)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CustomGroup {
    pub(crate) name: String,
    pub(crate) prefixes: Vec<String>,
}

impl MergeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a category matching utilities that equal one of `prefixes` or
    /// continue it with `-`.
    pub fn group<I, S>(mut self, name: impl Into<String>, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push(CustomGroup {
            name: name.into(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Declares that a class of `group` overrides earlier classes of each of
    /// `overrides` (built-in or custom categories).
    pub fn conflict<I, S>(mut self, group: impl Into<String>, overrides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conflicts.push((
            group.into(),
            overrides.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.conflicts.is_empty()
    }
}
