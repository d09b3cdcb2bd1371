//! Fluent construction of style specs.

use super::{Axis, CompoundRule, SpecError, StyleSpec};
use crate::token::Tokens;

/// Builder for [`StyleSpec`].
///
/// Nothing is validated until [`build`](Self::build), which performs the same
/// checks as [`StyleSpec::define`]. When the builder has a name, errors are
/// wrapped with it.
#[derive(Debug, Clone)]
pub struct StyleSpecBuilder<T = String> {
    name: Option<String>,
    base: Vec<T>,
    axes: Vec<Axis<T>>,
    compounds: Vec<CompoundRule<T>>,
    defaults: Vec<(String, String)>,
}

impl<T> StyleSpecBuilder<T> {
    pub fn new() -> Self {
        Self {
            name: None,
            base: Vec::new(),
            axes: Vec::new(),
            compounds: Vec::new(),
            defaults: Vec::new(),
        }
    }

    /// Names the spec for diagnostics.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends base tokens. May be called repeatedly; order is kept.
    pub fn base(mut self, tokens: impl Into<Tokens<T>>) -> Self {
        self.base.extend(tokens.into());
        self
    }

    /// Declares an axis, configured by `configure`.
    pub fn axis<F>(mut self, name: &str, configure: F) -> Self
    where
        F: FnOnce(Axis<T>) -> Axis<T>,
    {
        self.axes.push(configure(Axis::new(name)));
        self
    }

    /// Adds an already constructed axis.
    pub fn add_axis(mut self, axis: Axis<T>) -> Self {
        self.axes.push(axis);
        self
    }

    /// Declares a compound rule, configured by `configure`.
    pub fn compound<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(CompoundRule<T>) -> CompoundRule<T>,
    {
        self.compounds.push(configure(CompoundRule::new()));
        self
    }

    /// Adds an already constructed compound rule.
    pub fn add_compound(mut self, rule: CompoundRule<T>) -> Self {
        self.compounds.push(rule);
        self
    }

    /// Declares the default option for `axis`.
    pub fn default_option(mut self, axis: impl Into<String>, option: impl Into<String>) -> Self {
        self.defaults.push((axis.into(), option.into()));
        self
    }

    /// Validates and returns the spec.
    pub fn build(self) -> Result<StyleSpec<T>, SpecError> {
        let StyleSpecBuilder {
            name,
            base,
            axes,
            compounds,
            defaults,
        } = self;

        let spec = StyleSpec::define(base, axes, compounds, defaults);
        match name {
            Some(name) => spec
                .map(|s| s.with_name(name.clone()))
                .map_err(|e| e.named(name)),
            None => spec,
        }
    }
}

impl<T> Default for StyleSpecBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_base_in_order() {
        let spec = StyleSpec::builder()
            .base("inline-flex items-center")
            .base(["rounded-full", "shadow-sm"])
            .build()
            .unwrap();
        assert_eq!(
            spec.base(),
            &["inline-flex", "items-center", "rounded-full", "shadow-sm"]
        );
    }

    #[test]
    fn test_builder_error_carries_name() {
        let err = StyleSpec::builder()
            .name("badge")
            .axis("variant", |a| a.option("default", "bg-primary"))
            .default_option("variant", "primary")
            .build()
            .unwrap_err();

        assert_eq!(
            err.root(),
            &SpecError::UnknownDefaultOption {
                axis: "variant".to_string(),
                option: "primary".to_string()
            }
        );
        assert!(err.to_string().starts_with("style spec 'badge'"));
    }

    #[test]
    fn test_builder_name_is_kept_on_success() {
        let spec = StyleSpec::builder()
            .name("card")
            .base("flex flex-col")
            .build()
            .unwrap();
        assert_eq!(spec.name(), Some("card"));
    }

    #[test]
    fn test_builder_accepts_opaque_tokens() {
        let spec = StyleSpecBuilder::<u8>::new()
            .base(vec![1])
            .axis("level", |a| a.option("low", vec![2]).option("high", vec![3]))
            .default_option("level", "low")
            .build()
            .unwrap();
        assert_eq!(spec.axis("level").unwrap().tokens_for("high"), Some(&[3u8][..]));
    }
}
