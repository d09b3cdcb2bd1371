//! Caller-supplied variant selections.

use crate::token::Tokens;

/// The caller's chosen option per axis for one resolution, plus extra tokens.
///
/// Axes that are never set (or explicitly cleared) count as omitted and fall
/// back to the spec's default. Extra tokens are appended after everything the
/// spec contributes, so they can override it in the final merge.
///
/// # Example
///
/// ```rust
/// use trellis::Selection;
///
/// let selection: Selection = Selection::new()
///     .with("variant", "danger")
///     .with_opt("size", None::<&str>)
///     .class("w-full");
///
/// assert_eq!(selection.get("variant"), Some("danger"));
/// assert_eq!(selection.get("size"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T = String> {
    choices: Vec<(String, String)>,
    extra: Vec<T>,
}

impl<T> Selection<T> {
    /// Creates an empty selection: every axis omitted, no extra tokens.
    pub fn new() -> Self {
        Self {
            choices: Vec::new(),
            extra: Vec::new(),
        }
    }

    /// Selects `option` for `axis`, replacing any earlier choice.
    pub fn with(mut self, axis: impl Into<String>, option: impl Into<String>) -> Self {
        self.set(axis, option);
        self
    }

    /// Selects `option` for `axis` when present; `None` leaves the axis omitted.
    pub fn with_opt<S: Into<String>>(mut self, axis: impl Into<String>, option: Option<S>) -> Self {
        let axis = axis.into();
        match option {
            Some(option) => self.set(axis, option),
            None => self.unset(&axis),
        }
        self
    }

    /// Appends extra tokens applied after all spec tokens.
    pub fn class(mut self, tokens: impl Into<Tokens<T>>) -> Self {
        self.extra.extend(tokens.into());
        self
    }

    pub fn set(&mut self, axis: impl Into<String>, option: impl Into<String>) {
        let axis = axis.into();
        let option = option.into();
        match self.choices.iter_mut().find(|(a, _)| *a == axis) {
            Some(slot) => slot.1 = option,
            None => self.choices.push((axis, option)),
        }
    }

    pub fn unset(&mut self, axis: &str) {
        self.choices.retain(|(a, _)| a != axis);
    }

    /// Returns the explicitly selected option for `axis`.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|(a, _)| a == axis)
            .map(|(_, o)| o.as_str())
    }

    /// Explicit choices in the order they were first made.
    pub fn choices(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices.iter().map(|(a, o)| (a.as_str(), o.as_str()))
    }

    pub fn extra(&self) -> &[T] {
        &self.extra
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty() && self.extra.is_empty()
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, O> FromIterator<(A, O)> for Selection<String>
where
    A: Into<String>,
    O: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, O)>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for (axis, option) in iter {
            selection.set(axis, option);
        }
        selection
    }
}
