//! Style specs: declarative variant tables.
//!
//! This module provides the definition side of the resolver:
//!
//! - [`StyleSpec`]: base tokens, ordered variant axes, compound rules and defaults
//! - [`StyleSpecBuilder`]: fluent construction, validated on [`build`](StyleSpecBuilder::build)
//! - [`Axis`] and [`CompoundRule`]: the building blocks
//! - [`SpecError`]: referential-integrity errors raised at definition time
//!
//! A spec is validated exactly once, when it is defined. Every axis and option
//! named by a compound rule or a default must exist, so that once a component
//! definition loads, resolving it can only fail because of the caller's
//! selection.

mod axis;
mod builder;
mod compound;
mod error;

use std::collections::HashSet;

pub use axis::{Axis, VariantOption};
pub use builder::StyleSpecBuilder;
pub use compound::{CompoundRule, Constraint, OptionSet};
pub use error::SpecError;

use crate::token::Tokens;

/// A validated, immutable variant table.
///
/// # Example
///
/// ```rust
/// use trellis::{Selection, StyleSpec};
///
/// let spec = StyleSpec::builder()
///     .axis("variant", |a| a.option("solid", "bg-a").option("outline", "border-a"))
///     .axis("size", |a| a.option("sm", "px-2").option("lg", "px-4"))
///     .compound(|r| r.when("variant", "solid").when("size", "lg").tokens("shadow-lg"))
///     .default_option("size", "sm")
///     .build()
///     .unwrap();
///
/// let tokens = spec
///     .resolve(&Selection::new().with("variant", "solid").with("size", "lg"))
///     .unwrap();
/// assert_eq!(tokens, vec!["bg-a", "px-4", "shadow-lg"]);
///
/// let tokens = spec.resolve(&Selection::new().with("variant", "solid")).unwrap();
/// assert_eq!(tokens, vec!["bg-a", "px-2"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpec<T = String> {
    pub(crate) name: Option<String>,
    pub(crate) base: Vec<T>,
    pub(crate) axes: Vec<Axis<T>>,
    pub(crate) compounds: Vec<CompoundRule<T>>,
    pub(crate) defaults: Vec<(String, String)>,
}

impl StyleSpec<String> {
    /// Starts building a spec over `String` class tokens.
    pub fn builder() -> StyleSpecBuilder<String> {
        StyleSpecBuilder::new()
    }
}

impl<T> StyleSpec<T> {
    /// Defines a spec from its parts, validating referential integrity.
    ///
    /// `axes` are kept in the given order; resolution contributes axis tokens in
    /// that order. `defaults` pairs an axis name with its default option.
    pub fn define<D, A, O>(
        base: impl Into<Tokens<T>>,
        axes: Vec<Axis<T>>,
        compounds: Vec<CompoundRule<T>>,
        defaults: D,
    ) -> Result<Self, SpecError>
    where
        D: IntoIterator<Item = (A, O)>,
        A: Into<String>,
        O: Into<String>,
    {
        let spec = StyleSpec {
            name: None,
            base: base.into().into_vec(),
            axes,
            compounds,
            defaults: defaults
                .into_iter()
                .map(|(a, o)| (a.into(), o.into()))
                .collect(),
        };
        spec.validate()?;
        tracing::debug!(
            axes = spec.axes.len(),
            compounds = spec.compounds.len(),
            "defined style spec"
        );
        Ok(spec)
    }

    /// Returns a copy of this spec carrying a name, used in diagnostics.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn base(&self) -> &[T] {
        &self.base
    }

    /// Axes in declaration order.
    pub fn axes(&self) -> &[Axis<T>] {
        &self.axes
    }

    pub fn axis(&self, name: &str) -> Option<&Axis<T>> {
        self.axes.iter().find(|a| a.name() == name)
    }

    /// Compound rules in declaration order.
    pub fn compounds(&self) -> &[CompoundRule<T>] {
        &self.compounds
    }

    /// Returns the default option of `axis`, if one is declared.
    pub fn default_for(&self, axis: &str) -> Option<&str> {
        self.defaults
            .iter()
            .find(|(a, _)| a == axis)
            .map(|(_, o)| o.as_str())
    }

    /// Declared defaults as `(axis, option)` pairs.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &str)> {
        self.defaults.iter().map(|(a, o)| (a.as_str(), o.as_str()))
    }

    /// Checks that every name referenced by compound rules and defaults exists.
    fn validate(&self) -> Result<(), SpecError> {
        let mut seen_axes = HashSet::new();
        for axis in &self.axes {
            if !seen_axes.insert(axis.name()) {
                return Err(SpecError::DuplicateAxis {
                    axis: axis.name().to_string(),
                });
            }
            if axis.options().is_empty() {
                return Err(SpecError::EmptyAxis {
                    axis: axis.name().to_string(),
                });
            }
            let mut seen_options = HashSet::new();
            for option in axis.option_names() {
                if !seen_options.insert(option) {
                    return Err(SpecError::DuplicateOption {
                        axis: axis.name().to_string(),
                        option: option.to_string(),
                    });
                }
            }
        }

        for (rule_index, rule) in self.compounds.iter().enumerate() {
            let mut constrained = HashSet::new();
            for constraint in rule.constraints() {
                let axis_name = constraint.axis();
                if !constrained.insert(axis_name) {
                    return Err(SpecError::DuplicateCompoundAxis {
                        rule: rule_index,
                        axis: axis_name.to_string(),
                    });
                }
                let axis = self
                    .axis(axis_name)
                    .ok_or_else(|| SpecError::UnknownCompoundAxis {
                        rule: rule_index,
                        axis: axis_name.to_string(),
                    })?;
                if constraint.allowed().is_empty() {
                    return Err(SpecError::EmptyCompoundConstraint {
                        rule: rule_index,
                        axis: axis_name.to_string(),
                    });
                }
                if let Some(unknown) = constraint.allowed().iter().find(|o| !axis.has_option(o)) {
                    return Err(SpecError::UnknownCompoundOption {
                        rule: rule_index,
                        axis: axis_name.to_string(),
                        option: unknown.clone(),
                    });
                }
            }
        }

        let mut defaulted = HashSet::new();
        for (axis_name, option) in &self.defaults {
            if !defaulted.insert(axis_name.as_str()) {
                return Err(SpecError::DuplicateDefault {
                    axis: axis_name.clone(),
                });
            }
            let axis = self
                .axis(axis_name)
                .ok_or_else(|| SpecError::UnknownDefaultAxis {
                    axis: axis_name.clone(),
                })?;
            if !axis.has_option(option) {
                return Err(SpecError::UnknownDefaultOption {
                    axis: axis_name.clone(),
                    option: option.clone(),
                });
            }
        }

        Ok(())
    }
}
