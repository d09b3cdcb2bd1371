//! Class merging: collapsing a resolved token list into one class string.
//!
//! The resolver only orders tokens. Settling conflicts between them is the job
//! of a [`ClassMerger`]:
//!
//! - [`UtilityMerger`]: category-aware, later utility classes win
//! - [`PlainMerger`]: exact deduplication only, for class systems without categories
//!
//! [`cx`] and [`ClassList`] join ad-hoc class fragments the same way.

mod config;
mod groups;
mod utility;

pub use config::MergeConfig;
pub use utility::UtilityMerger;

use crate::resolve::{ResolveError, Selection};
use crate::spec::StyleSpec;
use crate::token::split_classes;

/// Collapses an ordered list of class tokens into a single class string.
///
/// Implementations must treat later tokens as having higher precedence.
pub trait ClassMerger {
    fn merge(&self, tokens: &[String]) -> String;
}

/// Merger that only removes exact duplicates, keeping the last occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMerger;

impl ClassMerger for PlainMerger {
    fn merge(&self, tokens: &[String]) -> String {
        let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            if !token.is_empty() && !tokens[i + 1..].contains(token) {
                kept.push(token);
            }
        }
        kept.join(" ")
    }
}

impl StyleSpec<String> {
    /// Resolves `selection` and merges the result into one class string.
    pub fn class_name<M: ClassMerger + ?Sized>(
        &self,
        selection: &Selection,
        merger: &M,
    ) -> Result<String, ResolveError> {
        let tokens = self.resolve(selection)?;
        Ok(merger.merge(&tokens))
    }
}

/// Joins class fragments and merges them with the default [`UtilityMerger`].
///
/// Each fragment may hold several space-separated classes.
///
/// ```rust
/// use trellis::cx;
///
/// assert_eq!(cx(["px-4 py-2 bg-white", "", "bg-gray-50 px-2"]), "py-2 bg-gray-50 px-2");
/// ```
pub fn cx<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut list = ClassList::new();
    for part in parts {
        list = list.add(part.as_ref());
    }
    list.build()
}

/// Incrementally collected class names, including conditional ones.
///
/// ```rust
/// use trellis::ClassList;
///
/// let busy = true;
/// let classes = ClassList::new()
///     .add("inline-flex opacity-100")
///     .add_if(busy, "opacity-50 cursor-wait")
///     .add_opt(None::<&str>)
///     .build();
/// assert_eq!(classes, "inline-flex opacity-50 cursor-wait");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, classes: &str) -> Self {
        self.tokens.extend(split_classes(classes));
        self
    }

    pub fn add_if(self, condition: bool, classes: &str) -> Self {
        if condition {
            self.add(classes)
        } else {
            self
        }
    }

    pub fn add_opt<S: AsRef<str>>(self, classes: Option<S>) -> Self {
        match classes {
            Some(classes) => self.add(classes.as_ref()),
            None => self,
        }
    }

    /// Appends already split tokens, e.g. the output of a resolution.
    pub fn extend<I: IntoIterator<Item = String>>(mut self, tokens: I) -> Self {
        self.tokens.extend(tokens);
        self
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Merges with the default [`UtilityMerger`].
    pub fn build(self) -> String {
        self.build_with(&UtilityMerger::new())
    }

    pub fn build_with<M: ClassMerger + ?Sized>(self, merger: &M) -> String {
        merger.merge(&self.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_merger_keeps_last_duplicate() {
        let tokens: Vec<String> = ["a", "b", "a", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(PlainMerger.merge(&tokens), "b a c");
    }

    #[test]
    fn test_class_name_resolves_and_merges() {
        let spec = StyleSpec::builder()
            .base("inline-flex px-3 bg-white")
            .axis("variant", |a| {
                a.option("accent", "bg-cyan-500 text-white")
                    .option("ghost", "bg-transparent")
            })
            .default_option("variant", "ghost")
            .build()
            .unwrap();

        let class = spec
            .class_name(&Selection::new().class("px-6"), &UtilityMerger::new())
            .unwrap();
        assert_eq!(class, "inline-flex bg-transparent px-6");

        let class = spec
            .class_name(
                &Selection::new().with("variant", "accent"),
                &UtilityMerger::new(),
            )
            .unwrap();
        assert_eq!(class, "inline-flex px-3 bg-cyan-500 text-white");
    }

    #[test]
    fn test_class_name_error_propagates() {
        let spec = StyleSpec::builder()
            .axis("variant", |a| a.option("accent", "bg-cyan-500"))
            .build()
            .unwrap();
        let err = spec
            .class_name(&Selection::new().with("variant", "light"), &PlainMerger)
            .unwrap_err();
        assert_eq!(err.value(), "light");
    }

    #[test]
    fn test_cx_skips_empty_fragments() {
        assert_eq!(cx(Vec::<&str>::new()), "");
        assert_eq!(cx(["", "  "]), "");
        assert_eq!(cx(["leading-none font-semibold", "font-bold"]), "leading-none font-bold");
    }

    #[test]
    fn test_class_list_extend_and_merger_choice() {
        let list = ClassList::new()
            .extend(vec!["p-2".to_string(), "p-4".to_string()])
            .add("p-2");
        assert_eq!(list.tokens().len(), 3);
        assert_eq!(list.clone().build(), "p-2");
        assert_eq!(list.build_with(&PlainMerger), "p-4 p-2");
    }
}
