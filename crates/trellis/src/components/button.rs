//! Pill button.

use once_cell::sync::Lazy;

use crate::spec::StyleSpec;

/// Rounded pill button with colour, size and interaction-state axes.
///
/// | Axis | Options | Default |
/// |------|---------|---------|
/// | `variant` | `accent`, `accent-light`, `accent-dark`, `danger`, `danger-light`, `danger-dark`, `secondary`, `muted`, `ghost`, `ghost-light`, `ghost-muted` | `secondary` |
/// | `size` | `xs`, `sm`, `md`, `lg` | `md` |
/// | `state` | `default`, `focused`, `disabled` | `default` |
///
/// `state: focused` draws the ring explicitly (for static previews); its colour
/// comes from a compound rule per colour family.
pub static BUTTON: Lazy<StyleSpec> = Lazy::new(|| {
    StyleSpec::builder()
        .name("button")
        .base([
            "inline-flex items-center justify-center gap-2 rounded-full font-semibold transition-all duration-150",
            "focus-visible:ring-2 focus-visible:ring-offset-2 focus-visible:outline-none",
            "disabled:pointer-events-none disabled:opacity-50",
            "shadow-sm",
        ])
        .axis("variant", |a| {
            a.option(
                "accent",
                [
                    "border border-transparent bg-cyan-500 text-white",
                    "hover:bg-cyan-600 active:bg-cyan-700",
                    "focus-visible:ring-cyan-500/50",
                    "disabled:bg-cyan-300",
                ],
            )
            .option(
                "accent-light",
                [
                    "border border-transparent bg-cyan-400 text-white",
                    "hover:bg-cyan-500 active:bg-cyan-600",
                    "focus-visible:ring-cyan-400/50",
                    "disabled:bg-cyan-200",
                ],
            )
            .option(
                "accent-dark",
                [
                    "border border-transparent bg-cyan-600 text-white",
                    "hover:bg-cyan-700 active:bg-cyan-800",
                    "focus-visible:ring-cyan-600/50",
                    "disabled:bg-cyan-400",
                ],
            )
            .option(
                "danger",
                [
                    "border border-transparent bg-red-500 text-white",
                    "hover:bg-red-600 active:bg-red-700",
                    "focus-visible:ring-red-500/50",
                    "disabled:bg-red-300",
                ],
            )
            .option(
                "danger-light",
                [
                    "border border-transparent bg-red-400 text-white",
                    "hover:bg-red-500 active:bg-red-600",
                    "focus-visible:ring-red-400/50",
                    "disabled:bg-red-200",
                ],
            )
            .option(
                "danger-dark",
                [
                    "border border-transparent bg-red-600 text-white",
                    "hover:bg-red-700 active:bg-red-800",
                    "focus-visible:ring-red-600/50",
                    "disabled:bg-red-400",
                ],
            )
            .option(
                "secondary",
                [
                    "border border-gray-300 bg-white text-gray-900",
                    "hover:bg-gray-50 active:bg-gray-100",
                    "focus-visible:ring-gray-500/50",
                    "disabled:bg-gray-100 disabled:text-gray-400",
                ],
            )
            .option(
                "muted",
                [
                    "border border-gray-300 bg-gray-50 text-gray-900",
                    "hover:bg-gray-100 active:bg-gray-200",
                    "focus-visible:ring-gray-500/50",
                    "disabled:bg-gray-25 disabled:text-gray-400",
                ],
            )
            .option(
                "ghost",
                [
                    "border border-transparent bg-transparent text-gray-900",
                    "hover:bg-gray-100 active:bg-gray-200",
                    "focus-visible:ring-gray-500/50",
                    "disabled:text-gray-400",
                ],
            )
            .option(
                "ghost-light",
                [
                    "border border-transparent bg-gray-50/50 text-gray-900",
                    "hover:bg-gray-100 active:bg-gray-200",
                    "focus-visible:ring-gray-500/50",
                    "disabled:text-gray-400",
                ],
            )
            .option(
                "ghost-muted",
                [
                    "border border-transparent bg-gray-100/60 text-gray-900",
                    "hover:bg-gray-200 active:bg-gray-300",
                    "focus-visible:ring-gray-500/50",
                    "disabled:text-gray-400",
                ],
            )
        })
        .axis("size", |a| {
            a.option("xs", ["h-6 px-3 text-xs", "[&>svg]:size-3"])
                .option("sm", ["h-8 px-4 text-sm", "[&>svg]:size-4"])
                .option("md", ["h-10 px-5 text-base", "[&>svg]:size-5"])
                .option("lg", ["h-12 px-6 text-lg", "[&>svg]:size-6"])
        })
        .axis("state", |a| {
            a.option("default", "")
                .option("focused", "ring-2 ring-offset-2")
                .option("disabled", "pointer-events-none opacity-40")
        })
        .compound(|r| {
            r.when("variant", ["accent", "accent-light", "accent-dark"])
                .when("state", "focused")
                .tokens("ring-cyan-500/50")
        })
        .compound(|r| {
            r.when("variant", ["danger", "danger-light", "danger-dark"])
                .when("state", "focused")
                .tokens("ring-red-500/50")
        })
        .compound(|r| {
            r.when(
                "variant",
                ["secondary", "muted", "ghost", "ghost-light", "ghost-muted"],
            )
            .when("state", "focused")
            .tokens("ring-gray-500/50")
        })
        .default_option("variant", "secondary")
        .default_option("size", "md")
        .default_option("state", "default")
        .build()
        .expect("built-in button spec is valid")
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::UtilityMerger;
    use crate::resolve::Selection;

    #[test]
    fn test_defaults_resolve_secondary_md() {
        let tokens = BUTTON.resolve(&Selection::new()).unwrap();
        assert!(tokens.contains(&"bg-white".to_string()));
        assert!(tokens.contains(&"h-10".to_string()));
        assert!(!tokens.iter().any(|t| t.starts_with("ring-gray")));
    }

    #[test]
    fn test_focused_compound_per_family() {
        for (variant, ring) in [
            ("accent-dark", "ring-cyan-500/50"),
            ("danger-light", "ring-red-500/50"),
            ("ghost-muted", "ring-gray-500/50"),
        ] {
            let tokens = BUTTON
                .resolve(&Selection::new().with("variant", variant).with("state", "focused"))
                .unwrap();
            assert_eq!(tokens.last().map(String::as_str), Some(ring));
            assert_eq!(tokens.iter().filter(|t| t.starts_with("ring-") && t.contains('/')).count(), 1);
        }
    }

    #[test]
    fn test_accent_small_class_name() {
        let class = BUTTON
            .class_name(
                &Selection::new().with("variant", "accent").with("size", "xs"),
                &UtilityMerger::new(),
            )
            .unwrap();
        assert_eq!(
            class,
            "inline-flex items-center justify-center gap-2 rounded-full font-semibold \
             transition-all duration-150 focus-visible:ring-2 focus-visible:ring-offset-2 \
             focus-visible:outline-none disabled:pointer-events-none disabled:opacity-50 \
             shadow-sm border border-transparent bg-cyan-500 text-white hover:bg-cyan-600 \
             active:bg-cyan-700 focus-visible:ring-cyan-500/50 disabled:bg-cyan-300 \
             h-6 px-3 text-xs [&>svg]:size-3"
        );
    }

    #[test]
    fn test_typo_option_rejected() {
        let err = BUTTON
            .resolve(&Selection::new().with("variant", "ghots"))
            .unwrap_err();
        assert_eq!(err.axis(), "variant");
        assert_eq!(err.value(), "ghots");
    }
}
