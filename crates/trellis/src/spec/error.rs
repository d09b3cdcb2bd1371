//! Definition-time validation errors.

use thiserror::Error;

/// Error returned when a style spec is internally inconsistent.
///
/// These are raised by [`StyleSpec::define`](super::StyleSpec::define) and the
/// builder, never by resolution: once a spec has been defined, resolving it can
/// only fail because of the caller's selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// The same axis name is declared twice.
    #[error("axis '{axis}' is declared more than once")]
    DuplicateAxis { axis: String },

    /// The same option name is declared twice within one axis.
    #[error("axis '{axis}' declares option '{option}' more than once")]
    DuplicateOption { axis: String, option: String },

    /// An axis with no options can never be selected.
    #[error("axis '{axis}' declares no options")]
    EmptyAxis { axis: String },

    /// A compound rule constrains an axis that is not declared.
    #[error("compound rule #{rule} references unknown axis '{axis}'")]
    UnknownCompoundAxis { rule: usize, axis: String },

    /// A compound rule allows an option that its axis does not declare.
    #[error("compound rule #{rule} references unknown option '{option}' on axis '{axis}'")]
    UnknownCompoundOption {
        rule: usize,
        axis: String,
        option: String,
    },

    /// A compound rule constrains an axis to an empty set, so it can never fire.
    #[error("compound rule #{rule} allows no options on axis '{axis}'")]
    EmptyCompoundConstraint { rule: usize, axis: String },

    /// A compound rule constrains the same axis twice.
    #[error("compound rule #{rule} constrains axis '{axis}' more than once")]
    DuplicateCompoundAxis { rule: usize, axis: String },

    /// The same axis is given more than one default.
    #[error("axis '{axis}' has more than one default")]
    DuplicateDefault { axis: String },

    /// A default names an axis that is not declared.
    #[error("default references unknown axis '{axis}'")]
    UnknownDefaultAxis { axis: String },

    /// A default names an option that its axis does not declare.
    #[error("default '{option}' is not an option of axis '{axis}'")]
    UnknownDefaultOption { axis: String, option: String },

    /// Wraps another error with the name of the spec it was found in.
    #[error("style spec '{name}': {source}")]
    Named {
        name: String,
        #[source]
        source: Box<SpecError>,
    },
}

impl SpecError {
    /// Attaches a spec name to this error.
    pub fn named(self, name: impl Into<String>) -> Self {
        SpecError::Named {
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// Returns the underlying error, looking through any name wrapper.
    pub fn root(&self) -> &SpecError {
        match self {
            SpecError::Named { source, .. } => source.root(),
            other => other,
        }
    }
}
