//! End-to-end tests running catalog commands in text and JSON mode.

use std::path::{Path, PathBuf};

use trellis_catalog::run_from;

fn fixture(path: &str) -> String {
    let path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(path);
    path.display().to_string()
}

fn run_text(args: &[&str]) -> trellis_catalog::Report {
    let mut argv = vec!["trellis-catalog", "--output", "text"];
    argv.extend_from_slice(args);
    run_from(argv).unwrap()
}

#[test]
fn test_list_shows_axes_and_defaults() {
    let report = run_text(&["list"]);
    assert!(report.ok);

    let mut lines = report.output.lines();
    assert_eq!(lines.next(), Some("button"));
    assert_eq!(
        lines.next(),
        Some("  variant: accent, accent-light, accent-dark, danger, danger-light, danger-dark, secondary, muted, ghost, ghost-light, ghost-muted (default secondary)")
    );
    assert!(report.output.contains("  size: xs, sm, md, lg (default md)"));
    assert!(report.output.contains("  3 compound rules"));
    assert!(report.output.contains("\ncard_footer\n"));
}

#[test]
fn test_resolve_merges_classes() {
    let report = run_text(&["resolve", "rect_button", "variant=danger", "--class", "px-6"]);
    let class = report.output.trim_end();
    assert!(class.starts_with("relative inline-flex"));
    assert!(class.ends_with(" px-6"));
    assert!(!class.contains(" px-3 "));
    assert!(class.contains("bg-red-600"));
}

#[test]
fn test_resolve_raw_keeps_every_token() {
    let report = run_text(&["resolve", "card_content", "--class", "px-4", "--raw"]);
    assert_eq!(report.output, "px-6\npx-4\n");
}

#[test]
fn test_resolve_invalid_option_is_error() {
    let err = run_from(["trellis-catalog", "resolve", "button", "variant=ghots"]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("variant"), "{msg}");
    assert!(msg.contains("ghots"), "{msg}");
}

#[test]
fn test_resolve_json_reports_effective_selection() {
    let report = run_from(["trellis-catalog", "resolve", "button", "--output", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report.output).unwrap();

    assert_eq!(value["component"], "button");
    assert_eq!(
        value["selection"],
        serde_json::json!([["variant", "secondary"], ["size", "md"], ["state", "default"]])
    );
    assert!(value["tokens"].as_array().unwrap().len() > 10);
    assert!(value["class"].as_str().unwrap().contains("bg-white"));
}

#[test]
fn test_matrix_enumerates_options() {
    let report = run_text(&["matrix", "badge"]);
    let rows: Vec<&str> = report.output.lines().skip(1).collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[3].starts_with("  variant=outline: "));
    assert!(rows[3].ends_with("text-foreground"));

    let report = run_text(&["matrix", "card_title"]);
    assert_eq!(report.output, "card_title\n  (base): leading-none font-semibold\n");
}

#[test]
fn test_builtin_stories_all_resolve() {
    let report = run_text(&["check"]);
    assert!(report.ok, "{}", report.output);
    assert!(report.output.starts_with("ok: "));

    let report = run_text(&["stories", "badge"]);
    assert!(report.output.starts_with("badge\n  Default: "));
    assert!(!report.output.contains("button"));
}

#[test]
fn test_check_fails_on_invalid_story() {
    let stories = fixture("stories.yaml");
    let sheets = fixture("sheets");
    let report = run_text(&["--stories", &stories, "--sheet", &sheets, "check"]);

    assert!(!report.ok);
    assert!(report.output.contains("invalid button / Ghost"));
    assert!(report.output.contains("'ghots'"));
    assert!(report.output.contains("'variant'"));
    assert!(report.output.contains("failed: 1 of 3 stories invalid"));
}

#[test]
fn test_stories_show_diagnostic_instead_of_class() {
    let stories = fixture("stories.yaml");
    let sheets = fixture("sheets");
    let report = run_text(&["--stories", &stories, "--sheet", &sheets, "stories"]);

    assert!(report.ok);
    assert!(report.output.contains("  Ghost: invalid option 'ghots' for axis 'variant'"));
    assert!(report
        .output
        .contains("  Danger: inline-flex items-center rounded-full bg-red-100 text-red-800 px-3 text-sm"));
}

#[test]
fn test_sheet_components_are_listed_with_origin() {
    let sheets = fixture("sheets");
    let report = run_text(&["--sheet", &sheets, "list"]);
    assert!(report.output.contains("\nchip "));
    assert!(report.output.contains("chip.yaml"));
}

#[test]
fn test_unknown_component_is_error() {
    let err = run_from(["trellis-catalog", "matrix", "tooltip"]).unwrap_err();
    assert!(err.to_string().contains("unknown component 'tooltip'"));
}

#[test]
fn test_usage_error() {
    assert!(run_from(["trellis-catalog", "resolve", "button", "variant"]).is_err());
}
