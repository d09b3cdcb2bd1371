//! Compound rules: extra tokens for co-occurring axis values.

use crate::token::Tokens;

/// One axis constraint of a compound rule: the axis value must be one of
/// `allowed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    axis: String,
    allowed: Vec<String>,
}

impl Constraint {
    pub fn axis(&self) -> &str {
        &self.axis
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn admits(&self, option: &str) -> bool {
        self.allowed.iter().any(|a| a == option)
    }
}

/// Options accepted by a single compound constraint.
///
/// Converts from a single option name or from a list of names, mirroring the
/// `variant: "solid"` / `variant: ["solid", "soft"]` shorthand of style tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet(Vec<String>);

impl OptionSet {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for OptionSet {
    fn from(option: &str) -> Self {
        OptionSet(vec![option.to_string()])
    }
}

impl From<String> for OptionSet {
    fn from(option: String) -> Self {
        OptionSet(vec![option])
    }
}

impl From<Vec<String>> for OptionSet {
    fn from(options: Vec<String>) -> Self {
        OptionSet(options)
    }
}

impl From<Vec<&str>> for OptionSet {
    fn from(options: Vec<&str>) -> Self {
        OptionSet(options.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OptionSet {
    fn from(options: [&str; N]) -> Self {
        OptionSet(options.iter().map(|o| o.to_string()).collect())
    }
}

/// A rule that appends tokens when every one of its constraints is satisfied.
///
/// A rule with no constraints always applies.
///
/// # Example
///
/// ```rust
/// use trellis::CompoundRule;
///
/// let rule: CompoundRule = CompoundRule::new()
///     .when("variant", ["accent", "accent-light"])
///     .when("state", "focused")
///     .tokens("ring-cyan-500/50");
///
/// assert_eq!(rule.constraints().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRule<T = String> {
    constraints: Vec<Constraint>,
    tokens: Vec<T>,
}

impl<T> CompoundRule<T> {
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Requires `axis` to be one of `options`.
    pub fn when(mut self, axis: impl Into<String>, options: impl Into<OptionSet>) -> Self {
        self.constraints.push(Constraint {
            axis: axis.into(),
            allowed: options.into().into_vec(),
        });
        self
    }

    /// Sets the tokens appended when the rule fires.
    pub fn tokens(mut self, tokens: impl Into<Tokens<T>>) -> Self {
        self.tokens = tokens.into().into_vec();
        self
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn token_list(&self) -> &[T] {
        &self.tokens
    }

    /// Returns `true` if `lookup` yields an admitted option for every
    /// constrained axis.
    pub(crate) fn matches<'a, F>(&self, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        self.constraints.iter().all(|c| match lookup(&c.axis) {
            Some(option) => c.admits(option),
            None => false,
        })
    }
}

impl<T> Default for CompoundRule<T> {
    fn default() -> Self {
        Self::new()
    }
}
