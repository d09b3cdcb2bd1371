//! Utility-class aware merging.

use std::collections::HashSet;

use super::config::MergeConfig;
use super::groups;
use super::ClassMerger;

/// A class split into its modifier chain and utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedClass<'a> {
    pub(crate) modifiers: Vec<&'a str>,
    pub(crate) important: bool,
    pub(crate) utility: &'a str,
}

/// Splits `class` on `:` outside of `[...]` and `(...)`, then strips the
/// important marker (`!` prefix or suffix) and a negative sign from the utility.
pub(crate) fn parse_class(class: &str) -> ParsedClass<'_> {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in class.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&class[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    let mut utility = &class[start..];
    let mut important = false;
    if let Some(rest) = utility.strip_prefix('!') {
        utility = rest;
        important = true;
    } else if let Some(rest) = utility.strip_suffix('!') {
        utility = rest;
        important = true;
    }
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    ParsedClass {
        modifiers,
        important,
        utility,
    }
}

/// Orders named modifiers so `hover:dark:` and `dark:hover:` share a key.
/// Arbitrary variants (`[&>svg]`) depend on their position and stay in place,
/// so only the runs of named modifiers between them are sorted.
pub(crate) fn sort_modifiers<'a>(modifiers: &[&'a str]) -> Vec<&'a str> {
    let mut sorted = Vec::with_capacity(modifiers.len());
    let mut run: Vec<&'a str> = Vec::new();
    for &modifier in modifiers {
        if modifier.starts_with('[') {
            run.sort_unstable();
            sorted.append(&mut run);
            sorted.push(modifier);
        } else {
            run.push(modifier);
        }
    }
    run.sort_unstable();
    sorted.append(&mut run);
    sorted
}

/// Merger for utility-first class names.
///
/// Walking from the last class to the first, a class is dropped when a later
/// class with the same modifiers already claimed its category, or a category
/// that overrides it. Classes outside every category are only deduplicated
/// exactly. Survivors keep their relative order.
///
/// # Example
///
/// ```rust
/// use trellis::{ClassMerger, UtilityMerger};
///
/// let merger = UtilityMerger::new();
/// let tokens: Vec<String> = "px-2 py-1 bg-red-500 hover:bg-red-600 p-3 bg-cyan-500"
///     .split(' ')
///     .map(String::from)
///     .collect();
/// assert_eq!(merger.merge(&tokens), "hover:bg-red-600 p-3 bg-cyan-500");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UtilityMerger {
    config: MergeConfig,
}

impl UtilityMerger {
    /// Creates a merger using only the built-in categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a merger with additional categories and conflicts.
    pub fn with_config(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Returns the category of a bare utility (no modifiers), if any.
    pub fn category<'s>(&'s self, utility: &str) -> Option<&'s str> {
        let custom = self
            .config
            .groups
            .iter()
            .filter_map(|g| {
                g.prefixes
                    .iter()
                    .filter(|p| groups::has_prefix(utility, p))
                    .map(|p| p.len())
                    .max()
                    .map(|len| (len, g.name.as_str()))
            })
            .max_by_key(|(len, _)| *len)
            .map(|(_, name)| name);

        custom.or_else(|| groups::classify(utility))
    }

    fn overridden<'s>(&'s self, group: &str) -> impl Iterator<Item = &'s str> + 's {
        let custom = self
            .config
            .conflicts
            .iter()
            .filter(|(g, _)| g == group)
            .flat_map(|(_, overrides)| overrides.iter().map(String::as_str))
            .collect::<Vec<_>>();
        groups::conflicts(group).iter().copied().chain(custom)
    }
}

impl ClassMerger for UtilityMerger {
    fn merge(&self, tokens: &[String]) -> String {
        let mut claimed: HashSet<String> = HashSet::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

        for token in tokens.iter().rev() {
            let token = token.as_str();
            if token.is_empty() || !seen.insert(token) {
                continue;
            }

            let parsed = parse_class(token);
            let Some(group) = self.category(parsed.utility) else {
                kept.push(token);
                continue;
            };

            let mut prefix = sort_modifiers(&parsed.modifiers).join(":");
            prefix.push(if parsed.important { '!' } else { ':' });

            if !claimed.insert(format!("{prefix}{group}")) {
                continue;
            }
            for overridden in self.overridden(group) {
                claimed.insert(format!("{prefix}{overridden}"));
            }
            kept.push(token);
        }

        kept.reverse();
        kept.join(" ")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const CLASSES: &[&str] = &[
        "px-2", "px-4", "p-3", "py-1", "bg-white", "bg-cyan-500", "hover:bg-cyan-600",
        "text-sm", "text-white", "rounded-md", "rounded-full", "shadow-sm", "tremor-id",
    ];

    proptest! {
        #[test]
        fn merged_output_is_an_ordered_subset(
            picks in prop::collection::vec(prop::sample::select(CLASSES), 0..12),
        ) {
            let tokens: Vec<String> = picks.iter().map(|s| s.to_string()).collect();
            let merged = UtilityMerger::new().merge(&tokens);
            let out: Vec<&str> = merged.split_whitespace().collect();

            // Every survivor came from the input, in input order of last occurrence.
            let mut last_index = 0;
            for class in &out {
                let idx = tokens.iter().rposition(|t| t == class).unwrap();
                prop_assert!(idx >= last_index);
                last_index = idx;
            }

            // The last input class always survives.
            if let Some(last) = tokens.last() {
                prop_assert_eq!(out.last().copied(), Some(last.as_str()));
            }
        }

        #[test]
        fn merge_is_idempotent(
            picks in prop::collection::vec(prop::sample::select(CLASSES), 0..12),
        ) {
            let merger = UtilityMerger::new();
            let tokens: Vec<String> = picks.iter().map(|s| s.to_string()).collect();
            let once = merger.merge(&tokens);
            let again: Vec<String> = once.split_whitespace().map(String::from).collect();
            prop_assert_eq!(merger.merge(&again), once);
        }
    }
}
