//! Errors raised while loading style sheets.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::spec::SpecError;

/// Error type for style sheet loading.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Failed to read a sheet file or walk a sheet directory.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid style sheet.
    #[error("failed to parse style sheet{}: {source}", located(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },

    /// A component parsed but its variant table is inconsistent.
    #[error("invalid component '{component}'{}: {source}", located(.path.as_deref()))]
    Spec {
        component: String,
        path: Option<PathBuf>,
        #[source]
        source: SpecError,
    },

    /// Two sheet files define the same component.
    #[error(
        "component '{name}' is defined in both {} and {}",
        first.display(),
        second.display()
    )]
    Collision {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// One sheet defines the same component twice.
    #[error("component '{name}' is defined more than once")]
    Duplicate { name: String },
}

impl SheetError {
    /// Attaches the file a parse or spec error came from.
    pub(crate) fn at(self, file: &Path) -> Self {
        match self {
            SheetError::Parse { source, .. } => SheetError::Parse {
                path: Some(file.to_path_buf()),
                source,
            },
            SheetError::Spec {
                component, source, ..
            } => SheetError::Spec {
                component,
                path: Some(file.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

fn located(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_error_display_names_component_and_file() {
        let err = SheetError::Spec {
            component: "chip".to_string(),
            path: None,
            source: SpecError::UnknownDefaultAxis {
                axis: "tone".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "invalid component 'chip': default references unknown axis 'tone'"
        );

        let err = err.at(Path::new("sheets/chip.yaml"));
        assert!(err.to_string().contains("in sheets/chip.yaml"));
    }

    #[test]
    fn test_collision_display_lists_both_paths() {
        let err = SheetError::Collision {
            name: "badge".to_string(),
            first: PathBuf::from("a/badge.yaml"),
            second: PathBuf::from("b/badge.yaml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("a/badge.yaml"));
        assert!(msg.contains("b/badge.yaml"));
    }
}
