//! Token lists and the "one or many" shorthand used when declaring styles.

/// An ordered list of style tokens contributed by one source.
///
/// Style tables are usually written with a shorthand: a single string holding
/// several space-separated classes, or a list of such strings. For `String`
/// tokens both forms are accepted and split on ASCII whitespace, so the
/// following are equivalent:
///
/// ```rust
/// use trellis::Tokens;
///
/// let a: Tokens = "h-6 px-3 text-xs".into();
/// let b: Tokens = vec!["h-6 px-3", "text-xs"].into();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 3);
/// ```
///
/// An empty string contributes no tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tokens<T = String>(Vec<T>);

impl<T> Tokens<T> {
    /// Creates an empty token list.
    pub fn new() -> Self {
        Tokens(Vec::new())
    }

    /// Wraps a single opaque token.
    pub fn single(token: T) -> Self {
        Tokens(vec![token])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for Tokens<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Tokens<T> {
    fn from(tokens: Vec<T>) -> Self {
        Tokens(tokens)
    }
}

impl From<&str> for Tokens<String> {
    fn from(classes: &str) -> Self {
        Tokens(split_classes(classes).collect())
    }
}

impl From<String> for Tokens<String> {
    fn from(classes: String) -> Self {
        Tokens::from(classes.as_str())
    }
}

impl From<&String> for Tokens<String> {
    fn from(classes: &String) -> Self {
        Tokens::from(classes.as_str())
    }
}

impl From<Vec<&str>> for Tokens<String> {
    fn from(parts: Vec<&str>) -> Self {
        parts.as_slice().into()
    }
}

impl From<&[&str]> for Tokens<String> {
    fn from(parts: &[&str]) -> Self {
        Tokens(parts.iter().flat_map(|part| split_classes(*part)).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Tokens<String> {
    fn from(parts: [&str; N]) -> Self {
        parts.as_slice().into()
    }
}

impl<T> IntoIterator for Tokens<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Tokens<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> FromIterator<T> for Tokens<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Tokens(iter.into_iter().collect())
    }
}

/// Splits a class string on ASCII whitespace into owned tokens.
pub(crate) fn split_classes(classes: &str) -> impl Iterator<Item = String> + '_ {
    classes.split_ascii_whitespace().map(str::to_string)
}
