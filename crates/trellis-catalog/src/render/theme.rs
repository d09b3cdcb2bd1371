//! Named console styles used by the templates.

use console::Style;

/// Appended to text styled with a name the theme does not define.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A named collection of console styles.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: Vec<(String, Style)>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        match self.styles.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = style,
            None => self.styles.push((name.to_string(), style)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Styles `text` with the named style, or returns it unchanged when colour
    /// is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        if !use_color {
            return text.to_string();
        }
        match self.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => format!("{text} {MISSING_STYLE_INDICATOR}"),
        }
    }
}

/// The catalog's built-in theme.
pub fn default_theme() -> Theme {
    Theme::new()
        .add("component", Style::new().cyan().bold())
        .add("axis", Style::new().yellow())
        .add("option", Style::new().magenta())
        .add("default", Style::new().green())
        .add("story", Style::new().bold())
        .add("muted", Style::new().dim())
        .add("ok", Style::new().green().bold())
        .add("error", Style::new().red().bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_without_color_is_plain() {
        let theme = default_theme();
        assert_eq!(theme.apply("component", "button", false), "button");
        assert_eq!(theme.apply("nope", "button", false), "button");
    }

    #[test]
    fn test_apply_with_color() {
        let theme = Theme::new().add("bold", Style::new().bold());
        let styled = theme.apply("bold", "hi", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("hi"));

        assert_eq!(theme.apply("missing", "hi", true), "hi (!?)");
    }

    #[test]
    fn test_add_replaces() {
        let theme = Theme::new()
            .add("x", Style::new().red())
            .add("x", Style::new().blue());
        assert!(theme.has("x"));
        assert_eq!(theme.styles.len(), 1);
    }
}
