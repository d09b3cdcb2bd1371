//! Variant axes: named dimensions with a closed set of options.

use crate::token::Tokens;

/// One option of an axis and the tokens it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantOption<T = String> {
    name: String,
    tokens: Vec<T>,
}

impl<T> VariantOption<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }
}

/// A named dimension of visual variation (e.g. `size`, `variant`, `state`).
///
/// Options keep their declaration order, which is also the order used when
/// listing or enumerating them.
///
/// # Example
///
/// ```rust
/// use trellis::Axis;
///
/// let size: Axis = Axis::new("size")
///     .option("sm", "h-8 px-4 text-sm")
///     .option("lg", ["h-12 px-6", "text-lg"]);
///
/// assert_eq!(size.option_names().collect::<Vec<_>>(), vec!["sm", "lg"]);
/// assert_eq!(size.tokens_for("lg").map(<[String]>::len), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis<T = String> {
    name: String,
    options: Vec<VariantOption<T>>,
}

impl<T> Axis<T> {
    /// Creates an axis with no options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option, returning the axis for chaining.
    ///
    /// Duplicate option names are not rejected here; they are reported when
    /// the owning spec is defined.
    pub fn option(mut self, name: impl Into<String>, tokens: impl Into<Tokens<T>>) -> Self {
        self.options.push(VariantOption {
            name: name.into(),
            tokens: tokens.into().into_vec(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[VariantOption<T>] {
        &self.options
    }

    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.name.as_str())
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.options.iter().any(|o| o.name == name)
    }

    /// Returns the tokens of the named option, or `None` if it is not declared.
    pub fn tokens_for(&self, option: &str) -> Option<&[T]> {
        self.options
            .iter()
            .find(|o| o.name == option)
            .map(|o| o.tokens.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_keeps_declaration_order() {
        let axis: Axis = Axis::new("state")
            .option("default", "")
            .option("focused", "ring-2 ring-offset-2")
            .option("disabled", "pointer-events-none opacity-40");

        assert_eq!(axis.name(), "state");
        assert_eq!(
            axis.option_names().collect::<Vec<_>>(),
            vec!["default", "focused", "disabled"]
        );
    }

    #[test]
    fn test_empty_option_is_a_member() {
        let axis: Axis = Axis::new("state").option("default", "");
        assert!(axis.has_option("default"));
        assert_eq!(axis.tokens_for("default"), Some(&[][..]));
        assert_eq!(axis.tokens_for("hover"), None);
    }
}
