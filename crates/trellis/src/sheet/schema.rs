//! Serde model of the sheet document.
//!
//! Mappings are read into [`Ordered`] rather than a hash map: the order of
//! axes, options and compound constraints is part of a component's meaning.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::spec::{Axis, CompoundRule, SpecError, StyleSpec};
use crate::token::Tokens;

/// A mapping that keeps its keys in document order.
#[derive(Debug)]
pub(crate) struct Ordered<V>(pub(crate) Vec<(String, V)>);

impl<V> Default for Ordered<V> {
    fn default() -> Self {
        Ordered(Vec::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Ordered<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = Ordered<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<Scalar, V>()? {
                    entries.push((key.into_string(), value));
                }
                Ok(Ordered(entries))
            }

            // `variants:` with nothing under it
            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Ordered::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Ordered::default())
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

/// Keys and option values may be written as bare YAML scalars
/// (`disabled: { true: ... }`, `space: { 0.5: ... }`). Numbers keep their
/// YAML spelling.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Bool(bool),
    Number(serde_yaml::Number),
    Str(String),
}

impl Scalar {
    pub(crate) fn into_string(self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => n.to_string(),
            Scalar::Str(s) => s,
        }
    }
}

/// `"a b"` or `["a b", "c"]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TokenSource {
    One(String),
    Many(Vec<String>),
}

impl From<TokenSource> for Tokens {
    fn from(source: TokenSource) -> Self {
        match source {
            TokenSource::One(s) => Tokens::from(s),
            TokenSource::Many(parts) => parts.iter().map(String::as_str).collect::<Vec<_>>().into(),
        }
    }
}

/// One option name or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OptionSource {
    One(Scalar),
    Many(Vec<Scalar>),
}

impl OptionSource {
    fn into_names(self) -> Vec<String> {
        match self {
            OptionSource::One(s) => vec![s.into_string()],
            OptionSource::Many(list) => list.into_iter().map(Scalar::into_string).collect(),
        }
    }
}

/// A component entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ComponentDef {
    #[serde(default)]
    base: Option<TokenSource>,
    #[serde(default)]
    variants: Ordered<Ordered<TokenSource>>,
    #[serde(default, alias = "compoundVariants")]
    compound: Vec<CompoundDef>,
    #[serde(default, alias = "defaultVariants")]
    defaults: Ordered<Scalar>,
}

/// A compound rule, either with an explicit `when:` mapping or with the
/// constraints written inline next to `class:`.
#[derive(Debug, Deserialize)]
pub(crate) struct CompoundDef {
    #[serde(default)]
    when: Ordered<OptionSource>,
    #[serde(alias = "tokens", alias = "className")]
    class: TokenSource,
    #[serde(flatten)]
    inline: Ordered<OptionSource>,
}

impl ComponentDef {
    /// Builds and validates the spec for component `name`.
    pub(crate) fn into_spec(self, name: &str) -> Result<StyleSpec, SpecError> {
        let axes: Vec<Axis> = self
            .variants
            .0
            .into_iter()
            .map(|(axis_name, options)| {
                options
                    .0
                    .into_iter()
                    .fold(Axis::new(axis_name), |axis, (option, tokens)| {
                        axis.option(option, tokens)
                    })
            })
            .collect();

        let compounds: Vec<CompoundRule> = self
            .compound
            .into_iter()
            .map(|def| {
                def.when
                    .0
                    .into_iter()
                    .chain(def.inline.0)
                    .fold(CompoundRule::new(), |rule, (axis, options)| {
                        rule.when(axis, options.into_names())
                    })
                    .tokens(def.class)
            })
            .collect();

        let defaults = self
            .defaults
            .0
            .into_iter()
            .map(|(axis, option)| (axis, option.into_string()));

        let base: Tokens = self.base.map(Tokens::from).unwrap_or_default();
        StyleSpec::define(base, axes, compounds, defaults).map(|spec| spec.with_name(name))
    }
}
