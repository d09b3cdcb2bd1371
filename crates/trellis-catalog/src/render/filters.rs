//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use super::theme::Theme;
use crate::output::OutputMode;

/// Registers the catalog's filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: Theme, mode: OutputMode) {
    let use_color = mode.should_use_color();

    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });

    // `{{ n | plural("rule") }}` renders "1 rule" or "3 rules".
    env.add_filter("plural", |count: usize, noun: String| -> String {
        if count == 1 {
            return format!("{count} {noun}");
        }
        match noun.strip_suffix('y') {
            Some(stem) => format!("{count} {stem}ies"),
            None => format!("{count} {noun}s"),
        }
    });
}
