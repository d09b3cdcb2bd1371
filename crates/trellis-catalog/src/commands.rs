//! Command handlers.
//!
//! Each handler gathers a serializable view and hands it to the renderer.

use serde::Serialize;
use trellis::{ClassMerger, ResolveError, Selection, StyleSpec, UtilityMerger};

use crate::catalog::{Catalog, Origin};
use crate::render::Renderer;
use crate::stories::{Story, StoryBook};

/// What a command printed and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: String,
    pub ok: bool,
}

impl Report {
    fn ok(output: String) -> Self {
        Self { output, ok: true }
    }
}

#[derive(Debug, Serialize)]
struct AxisView {
    name: String,
    options: Vec<String>,
    default: Option<String>,
}

#[derive(Debug, Serialize)]
struct ComponentView {
    name: String,
    origin: Option<String>,
    base: usize,
    axes: Vec<AxisView>,
    compounds: usize,
}

#[derive(Debug, Serialize)]
struct ListView {
    components: Vec<ComponentView>,
}

#[derive(Debug, Serialize)]
struct StoryView {
    name: String,
    args: String,
    class: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct StoryGroupView {
    component: String,
    stories: Vec<StoryView>,
}

#[derive(Debug, Serialize)]
struct StoriesView {
    groups: Vec<StoryGroupView>,
}

#[derive(Debug, Serialize)]
struct ResolveView {
    component: String,
    selection: Vec<(String, String)>,
    tokens: Vec<String>,
    class: String,
    raw: bool,
}

#[derive(Debug, Serialize)]
struct MatrixRow {
    label: String,
    options: Vec<String>,
    class: String,
}

#[derive(Debug, Serialize)]
struct MatrixView {
    component: String,
    axes: Vec<String>,
    rows: Vec<MatrixRow>,
}

#[derive(Debug, Serialize)]
struct InvalidStory {
    component: String,
    story: String,
    error: String,
}

#[derive(Debug, Serialize)]
struct CheckView {
    components: usize,
    stories: usize,
    invalid: Vec<InvalidStory>,
    ok: bool,
}

pub fn list(catalog: &Catalog, renderer: &Renderer) -> anyhow::Result<Report> {
    let components = catalog
        .names()
        .filter_map(|name| catalog.get(name).map(|spec| describe(catalog, name, spec)))
        .collect();
    let output = renderer.render_or_serialize("list", &ListView { components })?;
    Ok(Report::ok(output))
}

fn describe(catalog: &Catalog, name: &str, spec: &StyleSpec) -> ComponentView {
    let origin = match catalog.origin(name) {
        Some(Origin::Sheet(path)) => Some(path.display().to_string()),
        _ => None,
    };
    let axes = spec
        .axes()
        .iter()
        .map(|axis| AxisView {
            name: axis.name().to_string(),
            options: axis.option_names().map(String::from).collect(),
            default: spec.default_for(axis.name()).map(String::from),
        })
        .collect();
    ComponentView {
        name: name.to_string(),
        origin,
        base: spec.base().len(),
        axes,
        compounds: spec.compounds().len(),
    }
}

/// Evaluates one story: its merged class string, or why it does not resolve.
fn evaluate(
    catalog: &Catalog,
    component: &str,
    story: &Story,
    merger: &UtilityMerger,
) -> Result<String, String> {
    let spec = catalog
        .get(component)
        .ok_or_else(|| format!("unknown component '{component}'"))?;
    spec.class_name(&story.selection(), merger)
        .map_err(|e: ResolveError| e.to_string())
}

pub fn stories(
    catalog: &Catalog,
    book: &StoryBook,
    component: Option<&str>,
    renderer: &Renderer,
) -> anyhow::Result<Report> {
    if let Some(name) = component {
        catalog.require(name)?;
    }

    let merger = UtilityMerger::new();
    let groups = book
        .groups()
        .filter(|(name, _)| component.map_or(true, |c| c == *name))
        .map(|(name, stories)| StoryGroupView {
            component: name.to_string(),
            stories: stories
                .iter()
                .map(|story| {
                    let (class, error) = match evaluate(catalog, name, story, &merger) {
                        Ok(class) => (Some(class), None),
                        Err(error) => (None, Some(error)),
                    };
                    StoryView {
                        name: story.name.clone(),
                        args: story.label(),
                        class,
                        error,
                    }
                })
                .collect(),
        })
        .collect();

    let output = renderer.render_or_serialize("stories", &StoriesView { groups })?;
    Ok(Report::ok(output))
}

pub fn resolve(
    catalog: &Catalog,
    component: &str,
    choices: &[(String, String)],
    class: Option<&str>,
    raw: bool,
    renderer: &Renderer,
) -> anyhow::Result<Report> {
    let spec = catalog.require(component)?;

    let mut selection = Selection::new();
    for (axis, option) in choices {
        if spec.axis(axis).is_none() {
            tracing::warn!(component, axis = axis.as_str(), "ignoring unknown axis");
        }
        selection.set(axis.as_str(), option.as_str());
    }
    if let Some(class) = class {
        selection = selection.class(class);
    }

    let tokens = spec.resolve(&selection)?;
    let class = UtilityMerger::new().merge(&tokens);
    let view = ResolveView {
        component: component.to_string(),
        selection: spec
            .effective_selection(&selection)?
            .into_iter()
            .map(|(a, o)| (a.to_string(), o.to_string()))
            .collect(),
        tokens,
        class,
        raw,
    };
    let output = renderer.render_or_serialize("resolve", &view)?;
    Ok(Report::ok(output))
}

pub fn matrix(catalog: &Catalog, component: &str, renderer: &Renderer) -> anyhow::Result<Report> {
    let spec = catalog.require(component)?;
    let merger = UtilityMerger::new();

    let axes: Vec<String> = spec.axes().iter().map(|a| a.name().to_string()).collect();
    let mut rows = Vec::new();
    for combination in combinations(spec) {
        let selection = axes
            .iter()
            .zip(&combination)
            .fold(Selection::new(), |s, (axis, option)| s.with(axis.as_str(), option.as_str()));
        let class = spec.class_name(&selection, &merger)?;
        let label = axes
            .iter()
            .zip(&combination)
            .map(|(axis, option)| format!("{axis}={option}"))
            .collect::<Vec<_>>()
            .join(" ");
        rows.push(MatrixRow {
            label,
            options: combination,
            class,
        });
    }

    let view = MatrixView {
        component: component.to_string(),
        axes,
        rows,
    };
    let output = renderer.render_or_serialize("matrix", &view)?;
    Ok(Report::ok(output))
}

/// Every combination of options, one per axis, in declaration order. A spec
/// without axes has exactly one (empty) combination.
fn combinations(spec: &StyleSpec) -> Vec<Vec<String>> {
    spec.axes().iter().fold(vec![Vec::new()], |acc, axis| {
        acc.iter()
            .flat_map(|prefix| {
                axis.option_names().map(move |option| {
                    let mut next = prefix.clone();
                    next.push(option.to_string());
                    next
                })
            })
            .collect()
    })
}

pub fn check(catalog: &Catalog, book: &StoryBook, renderer: &Renderer) -> anyhow::Result<Report> {
    let merger = UtilityMerger::new();
    let mut invalid = Vec::new();
    for (component, stories) in book.groups() {
        for story in stories {
            if let Err(error) = evaluate(catalog, component, story, &merger) {
                tracing::debug!(component, story = story.name.as_str(), %error, "invalid story");
                invalid.push(InvalidStory {
                    component: component.to_string(),
                    story: story.name.clone(),
                    error,
                });
            }
        }
    }

    let ok = invalid.is_empty();
    let view = CheckView {
        components: catalog.names().count(),
        stories: book.len(),
        invalid,
        ok,
    };
    let output = renderer.render_or_serialize("check", &view)?;
    Ok(Report { output, ok })
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis::components;

    #[test]
    fn test_combinations_cover_every_option() {
        let button = components::get("button").unwrap();
        let all = combinations(button);
        assert_eq!(all.len(), 11 * 4 * 3);
        assert_eq!(all[0], vec!["accent", "xs", "default"]);

        let card = components::get("card").unwrap();
        assert_eq!(combinations(card), vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_evaluate_reports_axis_and_value() {
        let catalog = Catalog::builtin();
        let story = Story {
            name: "Ghost".to_string(),
            args: vec![("variant".to_string(), "ghots".to_string())],
            class: None,
        };
        let err = evaluate(&catalog, "button", &story, &UtilityMerger::new()).unwrap_err();
        assert!(err.contains("variant"));
        assert!(err.contains("ghots"));

        let err = evaluate(&catalog, "tooltip", &story, &UtilityMerger::new()).unwrap_err();
        assert!(err.contains("unknown component"));
    }
}
