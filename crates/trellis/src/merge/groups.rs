//! Built-in utility-class categories.
//!
//! Each utility (the part of a class after its modifiers) is assigned to at
//! most one category. Two classes conflict when they share modifiers and
//! category, or when one category overrides the other (`p` overrides `px`).

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "hidden",
    "table",
    "flow-root",
    "list-item",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const VISIBILITY: &[&str] = &["visible", "invisible", "collapse"];
const FLEX_DIRECTION: &[&str] = &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"];
const FLEX_WRAP: &[&str] = &["flex-wrap", "flex-wrap-reverse", "flex-nowrap"];
const FONT_STYLE: &[&str] = &["italic", "not-italic"];
const TEXT_DECORATION: &[&str] = &["underline", "overline", "line-through", "no-underline"];
const TEXT_TRANSFORM: &[&str] = &["uppercase", "lowercase", "capitalize", "normal-case"];
const SCREEN_READER: &[&str] = &["sr-only", "not-sr-only"];

const EXACT: &[(&[&str], &str)] = &[
    (DISPLAY, "display"),
    (POSITION, "position"),
    (VISIBILITY, "visibility"),
    (FLEX_DIRECTION, "flex-direction"),
    (FLEX_WRAP, "flex-wrap"),
    (FONT_STYLE, "font-style"),
    (TEXT_DECORATION, "text-decoration"),
    (TEXT_TRANSFORM, "text-transform"),
    (SCREEN_READER, "sr"),
    (&["truncate"], "truncate"),
];

/// `(prefix, category)`; a utility matches when it equals the prefix or
/// continues it with `-`. The longest matching prefix wins.
const PREFIXES: &[(&str, &str)] = &[
    ("p", "p"),
    ("px", "px"),
    ("py", "py"),
    ("pt", "pt"),
    ("pr", "pr"),
    ("pb", "pb"),
    ("pl", "pl"),
    ("ps", "ps"),
    ("pe", "pe"),
    ("m", "m"),
    ("mx", "mx"),
    ("my", "my"),
    ("mt", "mt"),
    ("mr", "mr"),
    ("mb", "mb"),
    ("ml", "ml"),
    ("ms", "ms"),
    ("me", "me"),
    ("w", "w"),
    ("min-w", "min-w"),
    ("max-w", "max-w"),
    ("h", "h"),
    ("min-h", "min-h"),
    ("max-h", "max-h"),
    ("size", "size"),
    ("gap", "gap"),
    ("gap-x", "gap-x"),
    ("gap-y", "gap-y"),
    ("space-x", "space-x"),
    ("space-y", "space-y"),
    ("inset", "inset"),
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("z", "z"),
    ("order", "order"),
    ("opacity", "opacity"),
    ("items", "align-items"),
    ("justify", "justify-content"),
    ("justify-items", "justify-items"),
    ("justify-self", "justify-self"),
    ("self", "align-self"),
    ("place-items", "place-items"),
    ("place-content", "place-content"),
    ("place-self", "place-self"),
    ("leading", "leading"),
    ("tracking", "tracking"),
    ("whitespace", "whitespace"),
    ("overflow", "overflow"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    ("cursor", "cursor"),
    ("pointer-events", "pointer-events"),
    ("select", "user-select"),
    ("transition", "transition"),
    ("duration", "duration"),
    ("ease", "ease"),
    ("delay", "delay"),
    ("animate", "animate"),
    ("from", "gradient-from"),
    ("via", "gradient-via"),
    ("to", "gradient-to"),
    ("fill", "fill"),
    ("stroke", "stroke"),
    ("grid-cols", "grid-cols"),
    ("grid-rows", "grid-rows"),
    ("grid-flow", "grid-flow"),
    ("auto-rows", "auto-rows"),
    ("auto-cols", "auto-cols"),
    ("col-span", "col-span"),
    ("col-start", "col-start"),
    ("col-end", "col-end"),
    ("row-span", "row-span"),
    ("row-start", "row-start"),
    ("row-end", "row-end"),
    ("flex", "flex"),
    ("basis", "basis"),
    ("shrink", "shrink"),
    ("grow", "grow"),
    ("aspect", "aspect"),
    ("object", "object"),
    ("scale", "scale"),
    ("rotate", "rotate"),
    ("translate-x", "translate-x"),
    ("translate-y", "translate-y"),
    ("origin", "origin"),
    ("blur", "blur"),
    ("backdrop-blur", "backdrop-blur"),
    ("line-clamp", "line-clamp"),
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];
const TEXT_OVERFLOW: &[&str] = &["ellipsis", "clip"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SIDES: &[&str] = &["x", "y", "t", "r", "b", "l", "s", "e"];
const CORNERS: &[&str] = &[
    "t", "r", "b", "l", "s", "e", "tl", "tr", "br", "bl", "ss", "se", "es", "ee",
];
const RADII: &[&str] = &["none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "full"];
const SHADOWS: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BG_SIZE: &[&str] = &["auto", "cover", "contain"];
const BG_REPEAT: &[&str] = &[
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "repeat-round",
    "repeat-space",
];
const BG_ATTACHMENT: &[&str] = &["fixed", "local", "scroll"];

const CONFLICTS: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"]),
    ("px", &["pr", "pl", "ps", "pe"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"]),
    ("mx", &["mr", "ml", "ms", "me"]),
    ("my", &["mt", "mb"]),
    ("size", &["w", "h"]),
    ("gap", &["gap-x", "gap-y"]),
    ("inset", &["inset-x", "inset-y", "top", "right", "bottom", "left"]),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("overflow", &["overflow-x", "overflow-y"]),
    (
        "border-w",
        &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
            "border-w-s",
            "border-w-e",
        ],
    ),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    (
        "rounded",
        &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-s",
            "rounded-e",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
            "rounded-ss",
            "rounded-se",
            "rounded-es",
            "rounded-ee",
        ],
    ),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
];

/// Returns the built-in category of `utility`, if any.
///
/// `utility` must already be stripped of modifiers, the important marker and a
/// leading `-`.
pub(crate) fn classify(utility: &str) -> Option<&'static str> {
    if let Some(group) = EXACT
        .iter()
        .find(|(names, _)| names.contains(&utility))
        .map(|(_, group)| *group)
    {
        return Some(group);
    }

    let (head, value) = match utility.split_once('-') {
        Some((head, value)) => (head, Some(value)),
        None => (utility, None),
    };
    match head {
        "text" => return value.map(classify_text),
        "font" => return value.map(classify_font),
        "border" => return Some(classify_border(value)),
        "rounded" => return Some(classify_rounded(value)),
        "shadow" => return Some(classify_shadow(value)),
        "ring" => return Some(classify_ring(value)),
        "outline" => return Some(classify_outline(value)),
        "bg" => return value.map(classify_bg),
        _ => {}
    }

    longest_prefix(utility)
}

/// Returns the categories that a class of `group` overrides.
pub(crate) fn conflicts(group: &str) -> &'static [&'static str] {
    CONFLICTS
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, overridden)| *overridden)
        .unwrap_or(&[])
}

/// `true` if `utility` is `prefix` or `prefix-...`.
pub(crate) fn has_prefix(utility: &str, prefix: &str) -> bool {
    match utility.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('-'),
        None => false,
    }
}

fn longest_prefix(utility: &str) -> Option<&'static str> {
    PREFIXES
        .iter()
        .filter(|(prefix, _)| has_prefix(utility, prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, group)| *group)
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn is_arbitrary_length(value: &str) -> bool {
    let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) else {
        return false;
    };
    let inner = inner.strip_prefix("length:").unwrap_or(inner);
    inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn classify_text(value: &str) -> &'static str {
    // `text-sm/6` carries a line height after the slash.
    let size = value.split('/').next().unwrap_or(value);
    if FONT_SIZES.contains(&size) || is_arbitrary_length(size) {
        "font-size"
    } else if TEXT_ALIGN.contains(&value) {
        "text-align"
    } else if TEXT_WRAP.contains(&value) {
        "text-wrap"
    } else if TEXT_OVERFLOW.contains(&value) {
        "text-overflow"
    } else {
        "text-color"
    }
}

fn classify_font(value: &str) -> &'static str {
    if FONT_WEIGHTS.contains(&value) {
        "font-weight"
    } else {
        "font-family"
    }
}

fn classify_border(value: Option<&str>) -> &'static str {
    let Some(value) = value else {
        return "border-w";
    };
    if is_number(value) || is_arbitrary_length(value) {
        return "border-w";
    }
    if LINE_STYLES.contains(&value) {
        return "border-style";
    }
    if value == "collapse" || value == "separate" {
        return "border-collapse";
    }
    let (side, width) = match value.split_once('-') {
        Some((side, width)) => (side, Some(width)),
        None => (value, None),
    };
    if SIDES.contains(&side) {
        match width {
            None => return side_group("border-w", side),
            Some(w) if is_number(w) || is_arbitrary_length(w) => {
                return side_group("border-w", side)
            }
            Some(_) => return "border-color",
        }
    }
    "border-color"
}

fn side_group(base: &str, side: &str) -> &'static str {
    match (base, side) {
        ("border-w", "x") => "border-w-x",
        ("border-w", "y") => "border-w-y",
        ("border-w", "t") => "border-w-t",
        ("border-w", "r") => "border-w-r",
        ("border-w", "b") => "border-w-b",
        ("border-w", "l") => "border-w-l",
        ("border-w", "s") => "border-w-s",
        ("border-w", "e") => "border-w-e",
        ("rounded", "t") => "rounded-t",
        ("rounded", "r") => "rounded-r",
        ("rounded", "b") => "rounded-b",
        ("rounded", "l") => "rounded-l",
        ("rounded", "s") => "rounded-s",
        ("rounded", "e") => "rounded-e",
        ("rounded", "tl") => "rounded-tl",
        ("rounded", "tr") => "rounded-tr",
        ("rounded", "br") => "rounded-br",
        ("rounded", "bl") => "rounded-bl",
        ("rounded", "ss") => "rounded-ss",
        ("rounded", "se") => "rounded-se",
        ("rounded", "es") => "rounded-es",
        ("rounded", "ee") => "rounded-ee",
        _ => "rounded",
    }
}

fn classify_rounded(value: Option<&str>) -> &'static str {
    let Some(value) = value else {
        return "rounded";
    };
    if RADII.contains(&value) || is_arbitrary_length(value) {
        return "rounded";
    }
    let corner = value.split('-').next().unwrap_or(value);
    if CORNERS.contains(&corner) {
        side_group("rounded", corner)
    } else {
        "rounded"
    }
}

fn classify_shadow(value: Option<&str>) -> &'static str {
    match value {
        None => "shadow",
        Some(v) if SHADOWS.contains(&v) || is_number(v) || v.starts_with('[') => "shadow",
        Some(_) => "shadow-color",
    }
}

fn classify_ring(value: Option<&str>) -> &'static str {
    let Some(value) = value else {
        return "ring-w";
    };
    if value == "inset" {
        return "ring-inset";
    }
    if is_number(value) || is_arbitrary_length(value) {
        return "ring-w";
    }
    if let Some(offset) = value.strip_prefix("offset-") {
        if is_number(offset) || is_arbitrary_length(offset) {
            return "ring-offset-w";
        }
        return "ring-offset-color";
    }
    "ring-color"
}

fn classify_outline(value: Option<&str>) -> &'static str {
    let Some(value) = value else {
        return "outline-style";
    };
    if value.starts_with("offset-") {
        return "outline-offset";
    }
    if LINE_STYLES.contains(&value) {
        "outline-style"
    } else if is_number(value) || is_arbitrary_length(value) {
        "outline-w"
    } else {
        "outline-color"
    }
}

fn classify_bg(value: &str) -> &'static str {
    if BG_SIZE.contains(&value) {
        "bg-size"
    } else if BG_REPEAT.contains(&value) {
        "bg-repeat"
    } else if BG_ATTACHMENT.contains(&value) {
        "bg-attachment"
    } else if value == "none" || value.starts_with("gradient-") || value.starts_with("linear-") {
        "bg-image"
    } else {
        "bg-color"
    }
}
