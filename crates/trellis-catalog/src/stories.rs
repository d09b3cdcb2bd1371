//! Stories: named, reviewable selections of a component.
//!
//! A stories file maps component names to lists of stories:
//!
//! ```yaml
//! button:
//!   - name: Primary
//!     args: { variant: accent }
//!   - name: Wide
//!     args: { variant: secondary, size: lg }
//!     class: w-full
//! ```
//!
//! Component order and story order follow the file.

use std::path::Path;

use anyhow::{bail, Context};
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use trellis::Selection;

const BUILTIN_STORIES: &str = include_str!("../stories/builtin.yaml");

/// One story of a component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Story {
    pub name: String,
    /// `(axis, option)` pairs, in file order.
    #[serde(default, deserialize_with = "deserialize_args")]
    pub args: Vec<(String, String)>,
    /// Extra classes applied after the resolved ones.
    #[serde(default)]
    pub class: Option<String>,
}

impl Story {
    pub fn selection(&self) -> Selection {
        let mut selection = Selection::new();
        for (axis, option) in &self.args {
            selection.set(axis.as_str(), option.as_str());
        }
        match &self.class {
            Some(class) => selection.class(class.as_str()),
            None => selection,
        }
    }

    /// Renders the args as `axis=option` pairs.
    pub fn label(&self) -> String {
        self.args
            .iter()
            .map(|(axis, option)| format!("{axis}={option}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Stories grouped by component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryBook {
    groups: Vec<(String, Vec<Story>)>,
}

impl StoryBook {
    /// The stories shipped with the catalog.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_yaml(BUILTIN_STORIES).context("built-in stories are malformed")
    }

    pub fn from_yaml(source: &str) -> anyhow::Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let doc: Value = serde_yaml::from_str(source)?;
        let mapping = match doc {
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            _ => bail!("expected a mapping of component names to story lists"),
        };

        let mut groups: Vec<(String, Vec<Story>)> = Vec::with_capacity(mapping.len());
        for (component, stories) in mapping {
            let component = scalar_to_string(&component)
                .context("component names must be strings")?;
            let stories: Vec<Story> = serde_yaml::from_value(stories)
                .with_context(|| format!("invalid stories for '{component}'"))?;
            groups.push((component, stories));
        }
        Ok(Self { groups })
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_yaml(&source).with_context(|| format!("failed to load {}", path.display()))
    }

    /// Stories of `component`, empty if it has none.
    pub fn stories_for(&self, component: &str) -> &[Story] {
        self.groups
            .iter()
            .find(|(name, _)| name == component)
            .map(|(_, stories)| stories.as_slice())
            .unwrap_or(&[])
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Story])> {
        self.groups
            .iter()
            .map(|(name, stories)| (name.as_str(), stories.as_slice()))
    }

    /// Total number of stories.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, stories)| stories.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn deserialize_args<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<(String, String)>, D::Error> {
    let mapping = Option::<Mapping>::deserialize(deserializer)?.unwrap_or_default();
    mapping
        .iter()
        .map(|(axis, option)| -> Result<(String, String), D::Error> {
            let axis = scalar_to_string(axis)
                .ok_or_else(|| D::Error::custom("axis names must be scalars"))?;
            let option = scalar_to_string(option)
                .ok_or_else(|| D::Error::custom(format!("option of '{axis}' must be a scalar")))?;
            Ok((axis, option))
        })
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
