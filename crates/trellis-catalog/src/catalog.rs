//! The set of components a catalog run can see.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use trellis::{components, SheetRegistry, StyleSpec};

/// Where a component came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin<'a> {
    Builtin,
    Sheet(&'a Path),
}

/// Built-in components plus any loaded from sheets.
#[derive(Debug, Default)]
pub struct Catalog {
    sheets: SheetRegistry,
}

impl Catalog {
    /// A catalog of the built-in components only.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Adds the components of each sheet file or directory.
    ///
    /// A sheet component may not reuse a built-in name.
    pub fn load(sheet_paths: &[PathBuf]) -> anyhow::Result<Self> {
        let mut sheets = SheetRegistry::new();
        for path in sheet_paths {
            sheets
                .add_path(path)
                .with_context(|| format!("failed to load sheets from {}", path.display()))?;
        }

        for name in sheets.names() {
            if components::get(name).is_some() {
                let origin = sheets.origin(name).map(Path::display);
                match origin {
                    Some(path) => bail!("component '{name}' in {path} shadows a built-in component"),
                    None => bail!("component '{name}' shadows a built-in component"),
                }
            }
        }

        tracing::debug!(components = sheets.len(), "loaded sheet components");
        Ok(Self { sheets })
    }

    pub fn get(&self, name: &str) -> Option<&StyleSpec> {
        components::get(name).or_else(|| self.sheets.get(name))
    }

    /// Like [`get`](Self::get), with an error naming the known components.
    pub fn require(&self, name: &str) -> anyhow::Result<&StyleSpec> {
        match self.get(name) {
            Some(spec) => Ok(spec),
            None => bail!(
                "unknown component '{name}' (known: {})",
                self.names().collect::<Vec<_>>().join(", ")
            ),
        }
    }

    pub fn origin(&self, name: &str) -> Option<Origin<'_>> {
        if components::get(name).is_some() {
            Some(Origin::Builtin)
        } else {
            self.sheets.origin(name).map(Origin::Sheet)
        }
    }

    /// Built-in names first, then sheet components in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        components::names().iter().copied().chain(self.sheets.names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("badge").is_some());
        assert_eq!(catalog.origin("badge"), Some(Origin::Builtin));
        assert_eq!(catalog.names().next(), Some("button"));
        assert!(catalog.origin("chip").is_none());
    }

    #[test]
    fn test_require_lists_known_components() {
        let err = Catalog::builtin().require("tooltip").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("tooltip"));
        assert!(msg.contains("rect_button"));
    }

    #[test]
    fn test_sheet_cannot_shadow_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("badge.yaml");
        std::fs::write(&path, "badge:\n  base: rounded\n").unwrap();

        let err = Catalog::load(&[path]).unwrap_err();
        assert!(err.to_string().contains("shadows a built-in"));
    }

    #[test]
    fn test_sheet_components_follow_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chip.yaml");
        std::fs::write(&path, "chip:\n  base: rounded-full\n").unwrap();

        let catalog = Catalog::load(&[path.clone()]).unwrap();
        assert_eq!(catalog.names().last(), Some("chip"));
        assert_eq!(catalog.origin("chip"), Some(Origin::Sheet(path.as_path())));
    }
}
