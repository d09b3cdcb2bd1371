//! Output mode selection.

use clap::ValueEnum;

/// How command output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Styled when stdout is a colour terminal, plain otherwise.
    #[default]
    Auto,
    /// Always styled.
    Term,
    /// Never styled.
    Text,
    /// The command's data as JSON.
    Json,
}

impl OutputMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}
