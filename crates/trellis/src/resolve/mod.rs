//! Variant resolution: turning a spec plus a selection into ordered tokens.
//!
//! Resolution is a pure function of `(StyleSpec, Selection)`. Tokens are
//! appended in a fixed precedence order:
//!
//! 1. base tokens
//! 2. each axis's option tokens, in the spec's axis declaration order
//! 3. every compound rule satisfied by the effective selection, in declaration order
//! 4. the selection's extra tokens
//!
//! Omitted axes fall back to the spec's declared default; an axis with neither
//! a selection nor a default contributes nothing. The resolver performs no
//! deduplication: conflicting utility classes are settled afterwards by a
//! [`ClassMerger`](crate::ClassMerger), where later tokens win.

mod error;
mod selection;

pub use error::ResolveError;
pub use selection::Selection;

use crate::spec::StyleSpec;

impl<T> StyleSpec<T> {
    /// Returns the selection after default substitution, as `(axis, option)`
    /// pairs in axis declaration order.
    ///
    /// Axes with neither a selection nor a default are absent. Axis names the
    /// spec does not declare are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidVariantOption`] for the first axis (in
    /// declaration order) whose selected option is not declared.
    pub fn effective_selection<'a, U>(
        &'a self,
        selection: &'a Selection<U>,
    ) -> Result<Vec<(&'a str, &'a str)>, ResolveError> {
        for (axis, option) in selection.choices() {
            if self.axis(axis).is_none() {
                tracing::debug!(
                    spec = self.name().unwrap_or("<unnamed>"),
                    axis,
                    option,
                    "ignoring selection for undeclared axis"
                );
            }
        }

        let mut effective = Vec::with_capacity(self.axes.len());
        for axis in &self.axes {
            let option = match selection.get(axis.name()) {
                Some(option) => {
                    if !axis.has_option(option) {
                        tracing::debug!(
                            spec = self.name().unwrap_or("<unnamed>"),
                            axis = axis.name(),
                            option,
                            "rejecting undeclared option"
                        );
                        return Err(ResolveError::InvalidVariantOption {
                            axis: axis.name().to_string(),
                            value: option.to_string(),
                            expected: axis.option_names().map(str::to_string).collect(),
                        });
                    }
                    option
                }
                None => match self.default_for(axis.name()) {
                    Some(default) => default,
                    None => continue,
                },
            };
            effective.push((axis.name(), option));
        }
        Ok(effective)
    }
}

impl<T: Clone> StyleSpec<T> {
    /// Resolves `selection` to the ordered token list for one render.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidVariantOption`] if the selection names an
    /// option its axis does not declare. No tokens are produced in that case.
    pub fn resolve(&self, selection: &Selection<T>) -> Result<Vec<T>, ResolveError> {
        self.resolve_with(selection, std::iter::empty())
    }

    /// Like [`resolve`](Self::resolve), appending `extra` after the
    /// selection's own extra tokens.
    pub fn resolve_with<I>(&self, selection: &Selection<T>, extra: I) -> Result<Vec<T>, ResolveError>
    where
        I: IntoIterator<Item = T>,
    {
        let effective = self.effective_selection(selection)?;
        let lookup = |axis: &str| {
            effective
                .iter()
                .find(|(a, _)| *a == axis)
                .map(|(_, o)| *o)
        };

        let mut tokens = self.base.clone();
        for (axis_name, option) in &effective {
            if let Some(axis_tokens) = self.axis(axis_name).and_then(|a| a.tokens_for(option)) {
                tokens.extend_from_slice(axis_tokens);
            }
        }
        for rule in &self.compounds {
            if rule.matches(lookup) {
                tokens.extend_from_slice(rule.token_list());
            }
        }
        tokens.extend_from_slice(selection.extra());
        tokens.extend(extra);

        tracing::trace!(
            spec = self.name().unwrap_or("<unnamed>"),
            tokens = tokens.len(),
            "resolved selection"
        );
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Axis, CompoundRule};

    fn example_spec() -> StyleSpec {
        StyleSpec::builder()
            .axis("variant", |a| {
                a.option("solid", "bg-a").option("outline", "border-a")
            })
            .axis("size", |a| a.option("sm", "px-2").option("lg", "px-4"))
            .compound(|r| {
                r.when("variant", "solid")
                    .when("size", "lg")
                    .tokens("shadow-lg")
            })
            .default_option("size", "sm")
            .build()
            .unwrap()
    }

    #[test]
    fn test_explicit_selection_with_compound() {
        let tokens = example_spec()
            .resolve(&Selection::new().with("variant", "solid").with("size", "lg"))
            .unwrap();
        assert_eq!(tokens, vec!["bg-a", "px-4", "shadow-lg"]);
    }

    #[test]
    fn test_omitted_axis_uses_default_and_compound_does_not_fire() {
        let tokens = example_spec()
            .resolve(&Selection::new().with("variant", "solid"))
            .unwrap();
        assert_eq!(tokens, vec!["bg-a", "px-2"]);
    }

    #[test]
    fn test_axis_order_follows_declaration_not_selection() {
        let spec = StyleSpec::builder()
            .axis("size", |a| a.option("sm", "px-2").option("lg", "px-4"))
            .axis("variant", |a| a.option("solid", "bg-a"))
            .build()
            .unwrap();
        let tokens = spec
            .resolve(&Selection::new().with("variant", "solid").with("size", "lg"))
            .unwrap();
        assert_eq!(tokens, vec!["px-4", "bg-a"]);
    }

    #[test]
    fn test_axis_without_default_contributes_nothing() {
        let tokens = example_spec().resolve(&Selection::new()).unwrap();
        assert_eq!(tokens, vec!["px-2"]);
    }

    #[test]
    fn test_invalid_option_names_axis_and_value() {
        let err = example_spec()
            .resolve(&Selection::new().with("variant", "ghots").with("size", "lg"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidVariantOption {
                axis: "variant".to_string(),
                value: "ghots".to_string(),
                expected: vec!["solid".to_string(), "outline".to_string()],
            }
        );
    }

    #[test]
    fn test_undeclared_axis_is_ignored() {
        let tokens = example_spec()
            .resolve(&Selection::new().with("variant", "outline").with("tone", "warm"))
            .unwrap();
        assert_eq!(tokens, vec!["border-a", "px-2"]);
    }

    #[test]
    fn test_full_precedence_order() {
        let spec = StyleSpec::builder()
            .base("base-1 base-2")
            .axis("variant", |a| a.option("solid", "v-solid"))
            .axis("state", |a| a.option("default", "").option("focused", "ring-2"))
            .compound(|r| r.when("state", "focused").tokens("c-first"))
            .compound(|r| {
                r.when("variant", "solid")
                    .when("state", ["default", "focused"])
                    .tokens("c-second")
            })
            .default_option("variant", "solid")
            .default_option("state", "default")
            .build()
            .unwrap();

        let tokens = spec
            .resolve_with(
                &Selection::new().with("state", "focused").class("extra-1"),
                vec!["extra-2".to_string()],
            )
            .unwrap();
        assert_eq!(
            tokens,
            vec!["base-1", "base-2", "v-solid", "ring-2", "c-first", "c-second", "extra-1", "extra-2"]
        );
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let spec = StyleSpec::builder()
            .base("px-2")
            .axis("size", |a| a.option("sm", "px-2"))
            .default_option("size", "sm")
            .build()
            .unwrap();
        let tokens = spec.resolve(&Selection::new().class("px-2")).unwrap();
        assert_eq!(tokens, vec!["px-2", "px-2", "px-2"]);
    }

    #[test]
    fn test_effective_selection_includes_defaults() {
        let spec = example_spec();
        let selection: Selection<String> = Selection::new().with("variant", "outline");
        let effective = spec.effective_selection(&selection).unwrap();
        assert_eq!(effective, vec![("variant", "outline"), ("size", "sm")]);
    }

    #[test]
    fn test_opaque_token_type() {
        let spec = StyleSpec::define(
            vec![0u16],
            vec![Axis::new("tone").option("warm", vec![10u16]).option("cool", vec![20])],
            vec![CompoundRule::new().when("tone", "cool").tokens(vec![21u16])],
            [("tone", "warm")],
        )
        .unwrap();

        assert_eq!(spec.resolve(&Selection::new()).unwrap(), vec![0, 10]);
        assert_eq!(
            spec.resolve(&Selection::new().with("tone", "cool")).unwrap(),
            vec![0, 20, 21]
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const VARIANTS: &[&str] = &["accent", "danger", "ghost"];
    const SIZES: &[&str] = &["sm", "md", "lg"];

    fn spec() -> StyleSpec {
        StyleSpec::builder()
            .base("inline-flex")
            .axis("variant", |a| {
                a.option("accent", "bg-cyan-500")
                    .option("danger", "bg-red-500")
                    .option("ghost", "bg-transparent")
            })
            .axis("size", |a| {
                a.option("sm", "h-8").option("md", "h-10").option("lg", "h-12")
            })
            .compound(|r| {
                r.when("variant", ["accent", "danger"])
                    .when("size", "lg")
                    .tokens("shadow-lg")
            })
            .default_option("size", "md")
            .build()
            .unwrap()
    }

    fn maybe(options: &'static [&'static str]) -> impl Strategy<Value = Option<&'static str>> {
        prop::option::of(prop::sample::select(options))
    }

    fn selection(variant: Option<&str>, size: Option<&str>) -> Selection {
        Selection::new()
            .with_opt("variant", variant)
            .with_opt("size", size)
    }

    proptest! {
        #[test]
        fn resolve_is_referentially_transparent(
            variant in maybe(VARIANTS),
            size in maybe(SIZES),
        ) {
            let spec = spec();
            let sel = selection(variant, size);
            prop_assert_eq!(spec.resolve(&sel), spec.resolve(&sel));
        }

        #[test]
        fn omitted_axis_equals_explicit_default(variant in maybe(VARIANTS)) {
            let spec = spec();
            let omitted = spec.resolve(&selection(variant, None)).unwrap();
            let explicit = spec.resolve(&selection(variant, Some("md"))).unwrap();
            prop_assert_eq!(omitted, explicit);
        }

        #[test]
        fn compound_fires_iff_all_constraints_hold(
            variant in maybe(VARIANTS),
            size in maybe(SIZES),
        ) {
            let tokens = spec().resolve(&selection(variant, size)).unwrap();
            let effective_size = size.unwrap_or("md");
            let expected = matches!(variant, Some("accent") | Some("danger"))
                && effective_size == "lg";
            prop_assert_eq!(tokens.iter().any(|t| t == "shadow-lg"), expected);
        }

        #[test]
        fn unknown_option_is_rejected(value in "[a-z]{1,8}") {
            prop_assume!(!VARIANTS.contains(&value.as_str()));
            let err = spec()
                .resolve(&Selection::new().with("variant", value.clone()))
                .unwrap_err();
            prop_assert_eq!(err.axis(), "variant");
            prop_assert_eq!(err.value(), value.as_str());
        }
    }
}
