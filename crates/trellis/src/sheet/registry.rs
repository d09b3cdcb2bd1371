//! Sheet discovery and cross-file collision detection.
//!
//! [`SheetRegistry`] collects components from any number of sheet files and
//! directories into one namespace.
//!
//! # Supported Extensions
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 (highest) | `.yaml` |
//! | 2 (lowest) | `.yml` |
//!
//! If one directory holds both `chip.yaml` and `chip.yml`, only `chip.yaml` is
//! loaded.
//!
//! # Collision Handling
//!
//! A component name belongs to exactly one file. When a second file declares a
//! name that is already registered, loading fails with
//! [`SheetError::Collision`] listing both files, and nothing from the second
//! file is registered.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::{SheetError, StyleSheet};
use crate::spec::StyleSpec;

/// Recognized sheet file extensions in priority order.
pub const SHEET_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// A sheet file discovered during directory walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetFile {
    /// Path relative to the walked root, without extension (e.g. `"forms/input"`)
    pub name: String,
    /// Path relative to the walked root, with extension
    pub name_with_ext: String,
    pub absolute_path: PathBuf,
    /// The directory the file was found in
    pub source_dir: PathBuf,
}

impl SheetFile {
    pub fn new(
        name: impl Into<String>,
        name_with_ext: impl Into<String>,
        absolute_path: impl Into<PathBuf>,
        source_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            name_with_ext: name_with_ext.into(),
            absolute_path: absolute_path.into(),
            source_dir: source_dir.into(),
        }
    }

    /// Returns the extension priority (lower is higher priority).
    ///
    /// Returns `usize::MAX` if the extension is not recognized.
    pub fn extension_priority(&self) -> usize {
        SHEET_EXTENSIONS
            .iter()
            .position(|ext| self.name_with_ext.ends_with(ext))
            .unwrap_or(usize::MAX)
    }
}

/// Components gathered from several sheet files.
///
/// # Example
///
/// ```rust,no_run
/// use trellis::{Selection, SheetRegistry};
///
/// let mut registry = SheetRegistry::new();
/// registry.add_dir("./styles")?;
/// registry.add_file("./extra/chip.yaml")?;
///
/// if let Some(chip) = registry.get("chip") {
///     let tokens = chip.resolve(&Selection::new().with("tone", "danger"));
/// }
/// # Ok::<(), trellis::SheetError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SheetRegistry {
    sheet: StyleSheet,
    /// Component name to the file that declared it.
    origins: HashMap<String, PathBuf>,
}

impl SheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads one sheet file, returning the number of components it added.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<usize, SheetError> {
        let path = path.as_ref();
        let sheet = StyleSheet::from_path(path)?;
        self.add_sheet(sheet, path)
    }

    /// Loads every sheet under `dir`, recursively.
    pub fn add_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, SheetError> {
        let dir = dir.as_ref();
        let files = walk_sheet_dir(dir).map_err(|source| SheetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        self.add_from_files(files)
    }

    /// Loads a file or, if `path` is a directory, everything under it.
    pub fn add_path(&mut self, path: impl AsRef<Path>) -> Result<usize, SheetError> {
        let path = path.as_ref();
        if path.is_dir() {
            self.add_dir(path)
        } else {
            self.add_file(path)
        }
    }

    /// Loads discovered sheet files.
    ///
    /// Files are processed in name order. Of several files sharing a name in
    /// the same directory, only the one with the highest-priority extension is
    /// read.
    pub fn add_from_files(&mut self, files: Vec<SheetFile>) -> Result<usize, SheetError> {
        let mut sorted_files = files;
        sorted_files.sort_by(|a, b| {
            (&a.name, a.extension_priority()).cmp(&(&b.name, b.extension_priority()))
        });

        let mut loaded: HashSet<(PathBuf, String)> = HashSet::new();
        let mut added = 0;
        for file in sorted_files {
            if !loaded.insert((file.source_dir.clone(), file.name.clone())) {
                tracing::debug!(
                    path = %file.absolute_path.display(),
                    "skipping sheet shadowed by a higher-priority extension"
                );
                continue;
            }
            added += self.add_file(&file.absolute_path)?;
        }
        Ok(added)
    }

    /// Registers every component of `sheet` as coming from `origin`.
    ///
    /// Nothing is registered if any component name is already taken.
    pub fn add_sheet(
        &mut self,
        sheet: StyleSheet,
        origin: impl Into<PathBuf>,
    ) -> Result<usize, SheetError> {
        let origin = origin.into();
        for name in sheet.names() {
            if let Some(first) = self.origins.get(name) {
                tracing::warn!(
                    component = name,
                    first = %first.display(),
                    second = %origin.display(),
                    "component defined in more than one sheet"
                );
                return Err(SheetError::Collision {
                    name: name.to_string(),
                    first: first.clone(),
                    second: origin,
                });
            }
        }

        let added = sheet.len();
        for name in sheet.names() {
            self.origins.insert(name.to_string(), origin.clone());
        }
        self.sheet.merge(sheet)?;
        tracing::debug!(path = %origin.display(), components = added, "registered sheet");
        Ok(added)
    }

    pub fn get(&self, name: &str) -> Option<&StyleSpec> {
        self.sheet.get(name)
    }

    /// The file that declared component `name`.
    pub fn origin(&self, name: &str) -> Option<&Path> {
        self.origins.get(name).map(PathBuf::as_path)
    }

    /// Component names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sheet.names()
    }

    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    pub fn into_sheet(self) -> StyleSheet {
        self.sheet
    }

    pub fn len(&self) -> usize {
        self.sheet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheet.is_empty()
    }
}

/// Walks a sheet directory and collects sheet files.
///
/// The result is not sorted by priority; see
/// [`SheetFile::extension_priority`].
pub fn walk_sheet_dir(root: impl AsRef<Path>) -> Result<Vec<SheetFile>, std::io::Error> {
    let root = root.as_ref().canonicalize()?;
    let mut files = Vec::new();
    walk_dir_recursive(&root, &root, &mut files)?;
    Ok(files)
}

fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    files: &mut Vec<SheetFile>,
) -> Result<(), std::io::Error> {
    for entry in std::fs::read_dir(current)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir_recursive(&path, root, files)?;
        } else if path.is_file() {
            if let Some(file) = try_parse_sheet_file(&path, root) {
                files.push(file);
            }
        }
    }
    Ok(())
}

fn try_parse_sheet_file(path: &Path, root: &Path) -> Option<SheetFile> {
    let relative = path.strip_prefix(root).ok()?;
    // Forward slashes on every platform.
    let name_with_ext = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    let ext = SHEET_EXTENSIONS
        .iter()
        .find(|ext| name_with_ext.ends_with(*ext))?;
    let name = name_with_ext[..name_with_ext.len() - ext.len()].to_string();

    Some(SheetFile::new(
        name,
        name_with_ext,
        path,
        path.parent().unwrap_or(root),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_priority() {
        let yaml = SheetFile::new("chip", "chip.yaml", "/s/chip.yaml", "/s");
        let yml = SheetFile::new("chip", "chip.yml", "/s/chip.yml", "/s");
        let other = SheetFile::new("chip", "chip.json", "/s/chip.json", "/s");
        assert!(yaml.extension_priority() < yml.extension_priority());
        assert_eq!(other.extension_priority(), usize::MAX);
    }

    #[test]
    fn test_try_parse_sheet_file_nested() {
        let file = try_parse_sheet_file(
            Path::new("/styles/forms/input.yml"),
            Path::new("/styles"),
        )
        .unwrap();
        assert_eq!(file.name, "forms/input");
        assert_eq!(file.name_with_ext, "forms/input.yml");
        assert_eq!(file.source_dir, PathBuf::from("/styles/forms"));

        assert!(try_parse_sheet_file(Path::new("/styles/README.md"), Path::new("/styles")).is_none());
    }

    #[test]
    fn test_add_sheet_collision_registers_nothing() {
        let mut registry = SheetRegistry::new();
        let first = StyleSheet::from_yaml("chip:\n  base: a\n").unwrap();
        registry.add_sheet(first, "one.yaml").unwrap();

        let second = StyleSheet::from_yaml("dot:\n  base: b\nchip:\n  base: c\n").unwrap();
        let err = registry.add_sheet(second, "two.yaml").unwrap_err();
        match err {
            SheetError::Collision {
                name,
                first,
                second,
            } => {
                assert_eq!(name, "chip");
                assert_eq!(first, PathBuf::from("one.yaml"));
                assert_eq!(second, PathBuf::from("two.yaml"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(registry.get("dot").is_none());
        assert_eq!(registry.origin("chip"), Some(Path::new("one.yaml")));
    }
}
