//! Template rendering for text output.
//!
//! Every command builds a serializable view. In JSON mode the view is
//! serialized as is; otherwise it is rendered through the command's template,
//! where the `style` filter applies the [`Theme`].

mod filters;
mod theme;

use minijinja::{Environment, Error};
use serde::Serialize;

use crate::output::OutputMode;
use filters::register_filters;
pub use theme::{default_theme, Theme, MISSING_STYLE_INDICATOR};

/// The built-in templates, by name.
const TEMPLATES: &[(&str, &str)] = &[
    ("list", include_str!("../templates/list.jinja")),
    ("stories", include_str!("../templates/stories.jinja")),
    ("resolve", include_str!("../templates/resolve.jinja")),
    ("matrix", include_str!("../templates/matrix.jinja")),
    ("check", include_str!("../templates/check.jinja")),
];

/// A renderer with the catalog templates pre-registered.
pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl Renderer {
    pub fn new(theme: Theme, mode: OutputMode) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env, theme, mode);
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env, mode })
    }

    /// Registers an additional template, compiled immediately.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }

    /// Serializes `data` as JSON in JSON mode, renders template `name` otherwise.
    pub fn render_or_serialize<T: Serialize>(&self, name: &str, data: &T) -> anyhow::Result<String> {
        if self.mode.is_json() {
            let mut json = serde_json::to_string_pretty(data)?;
            json.push('\n');
            Ok(json)
        } else {
            Ok(self.render(name, data)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Data {
        name: String,
        count: usize,
    }

    fn data() -> Data {
        Data {
            name: "button".into(),
            count: 3,
        }
    }

    #[test]
    fn test_style_filter_plain_in_text_mode() {
        let mut renderer = Renderer::new(default_theme(), OutputMode::Text).unwrap();
        renderer
            .add_template("t", r#"{{ name | style("component") }}: {{ count | plural("rule") }}"#)
            .unwrap();
        assert_eq!(renderer.render("t", &data()).unwrap(), "button: 3 rules");
    }

    #[test]
    fn test_style_filter_colors_in_term_mode() {
        let mut renderer = Renderer::new(default_theme(), OutputMode::Term).unwrap();
        renderer
            .add_template("t", r#"{{ name | style("component") }}"#)
            .unwrap();
        let out = renderer.render("t", &data()).unwrap();
        assert!(out.contains("\u{1b}["));
    }

    #[test]
    fn test_render_or_serialize_json() {
        let renderer = Renderer::new(default_theme(), OutputMode::Json).unwrap();
        let out = renderer.render_or_serialize("list", &data()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 3);
    }

    #[test]
    fn test_unknown_template() {
        let renderer = Renderer::new(default_theme(), OutputMode::Text).unwrap();
        assert!(renderer.render("nope", &data()).is_err());
    }
}
