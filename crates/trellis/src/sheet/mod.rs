//! Style sheets: component variant tables declared in YAML.
//!
//! A sheet maps component names to their variant tables. The format mirrors
//! how the tables are written in code: base classes, ordered axes of options,
//! compound rules and defaults. Either form of the token shorthand is accepted
//! wherever classes are expected.
//!
//! ```yaml
//! chip:
//!   base: inline-flex items-center rounded-full
//!   variants:
//!     tone:
//!       neutral: bg-gray-100 text-gray-800
//!       danger: [bg-red-100, text-red-800]
//!     size:
//!       sm: px-2 text-xs
//!       md: px-3 text-sm
//!   compound:
//!     - when: { tone: danger, size: md }
//!       class: font-semibold
//!   defaults:
//!     tone: neutral
//!     size: sm
//! ```
//!
//! `compoundVariants` and `defaultVariants` are accepted as aliases, and a
//! compound rule may list its constraints inline next to `class:` instead of
//! under `when:`. JSON documents load too, being valid YAML.
//!
//! Every component is validated when the sheet loads. A sheet with any invalid
//! component is rejected as a whole.

mod error;
mod registry;
mod schema;

use std::path::Path;

pub use error::SheetError;
pub use registry::{walk_sheet_dir, SheetFile, SheetRegistry, SHEET_EXTENSIONS};

use crate::spec::StyleSpec;
use schema::{ComponentDef, Ordered};

/// The components declared by one sheet document, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    specs: Vec<StyleSpec>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a sheet document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trellis::{Selection, StyleSheet};
    ///
    /// let sheet = StyleSheet::from_yaml(r#"
    /// chip:
    ///   base: rounded-full
    ///   variants:
    ///     tone: { neutral: bg-gray-100, danger: bg-red-100 }
    ///   defaults: { tone: neutral }
    /// "#).unwrap();
    ///
    /// let chip = sheet.get("chip").unwrap();
    /// assert_eq!(chip.resolve(&Selection::new()).unwrap(), vec!["rounded-full", "bg-gray-100"]);
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, SheetError> {
        let mut sheet = StyleSheet::new();
        if source.trim().is_empty() {
            return Ok(sheet);
        }

        let doc: Option<Ordered<ComponentDef>> =
            serde_yaml::from_str(source).map_err(|source| SheetError::Parse { path: None, source })?;
        for (name, def) in doc.unwrap_or_default().0 {
            let spec = def.into_spec(&name).map_err(|source| SheetError::Spec {
                component: name.clone(),
                path: None,
                source,
            })?;
            sheet.insert(spec)?;
        }
        tracing::debug!(components = sheet.len(), "loaded style sheet");
        Ok(sheet)
    }

    /// Reads and parses a sheet file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SheetError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source).map_err(|e| e.at(path))
    }

    /// Adds a named spec.
    ///
    /// # Errors
    ///
    /// [`SheetError::Duplicate`] if the sheet already has a component by that
    /// name. Unnamed specs are rejected the same way under the empty name.
    pub fn insert(&mut self, spec: StyleSpec) -> Result<(), SheetError> {
        let name = spec.name().unwrap_or_default();
        if name.is_empty() || self.get(name).is_some() {
            return Err(SheetError::Duplicate {
                name: name.to_string(),
            });
        }
        self.specs.push(spec);
        Ok(())
    }

    /// Moves every component of `other` into this sheet.
    ///
    /// Nothing is moved if any name is already taken.
    pub fn merge(&mut self, other: StyleSheet) -> Result<(), SheetError> {
        if let Some(taken) = other.names().find(|name| self.get(name).is_some()) {
            return Err(SheetError::Duplicate {
                name: taken.to_string(),
            });
        }
        self.specs.extend(other.specs);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&StyleSpec> {
        self.specs.iter().find(|s| s.name() == Some(name))
    }

    /// Component names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().filter_map(|s| s.name())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyleSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a StyleSheet {
    type Item = &'a StyleSpec;
    type IntoIter = std::slice::Iter<'a, StyleSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
