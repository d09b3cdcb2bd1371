//! Card and its parts.
//!
//! None of these have variant axes; they exist as specs so that callers
//! resolve and merge their extra classes the same way as for any other
//! component.

use once_cell::sync::Lazy;

use crate::spec::StyleSpec;

fn base_only(name: &str, base: &[&str]) -> StyleSpec {
    StyleSpec::builder()
        .name(name)
        .base(base)
        .build()
        .expect("base-only spec is valid")
}

pub static CARD: Lazy<StyleSpec> = Lazy::new(|| {
    base_only(
        "card",
        &[
            "dark:shadow-black-a12 shadow-2 border-gray-5 relative flex flex-col gap-6 rounded-2xl border py-6 dark:shadow-md",
            "bg-surface text-cnt-primary",
            "dark:border-white-a2",
        ],
    )
});

/// Lays out title and description, with room for an action in a second column.
pub static CARD_HEADER: Lazy<StyleSpec> = Lazy::new(|| {
    base_only(
        "card_header",
        &["@container/card-header grid auto-rows-min grid-rows-[auto_auto] items-start gap-1.5 px-6 has-data-[slot=card-action]:grid-cols-[1fr_auto] [.border-b]:pb-6"],
    )
});

pub static CARD_TITLE: Lazy<StyleSpec> =
    Lazy::new(|| base_only("card_title", &["leading-none font-semibold"]));

pub static CARD_DESCRIPTION: Lazy<StyleSpec> =
    Lazy::new(|| base_only("card_description", &["text-muted-foreground text-sm"]));

pub static CARD_ACTION: Lazy<StyleSpec> = Lazy::new(|| {
    base_only(
        "card_action",
        &["col-start-2 row-span-2 row-start-1 self-start justify-self-end"],
    )
});

pub static CARD_CONTENT: Lazy<StyleSpec> = Lazy::new(|| base_only("card_content", &["px-6"]));

pub static CARD_FOOTER: Lazy<StyleSpec> =
    Lazy::new(|| base_only("card_footer", &["flex items-center px-6 [.border-t]:pt-6"]));

/// The slot name a renderer puts in `data-slot` for each card part.
pub fn data_slot(component: &str) -> Option<&'static str> {
    match component {
        "card_header" => Some("card-header"),
        "card_title" => Some("card-title"),
        "card_description" => Some("card-description"),
        "card_action" => Some("card-action"),
        "card_content" => Some("card-content"),
        "card_footer" => Some("card-footer"),
        _ => None,
    }
}
