//! Badge.

use once_cell::sync::Lazy;

use crate::spec::StyleSpec;

/// Small status label with a `variant` axis (`default`, `secondary`,
/// `destructive`, `outline`), defaulting to `default`.
pub static BADGE: Lazy<StyleSpec> = Lazy::new(|| {
    StyleSpec::builder()
        .name("badge")
        .base("focus:ring-ring inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:ring-2 focus:ring-offset-2 focus:outline-none")
        .axis("variant", |a| {
            a.option(
                "default",
                "bg-primary text-primary-foreground hover:bg-primary/80 border-transparent shadow",
            )
            .option(
                "secondary",
                "bg-secondary text-secondary-foreground hover:bg-secondary/80 border-transparent",
            )
            .option(
                "destructive",
                "bg-destructive text-destructive-foreground hover:bg-destructive/80 border-transparent shadow",
            )
            .option("outline", "text-foreground")
        })
        .default_option("variant", "default")
        .build()
        .expect("built-in badge spec is valid")
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Selection;

    #[test]
    fn test_outline_adds_only_text_colour() {
        let base = BADGE.base().len();
        let tokens = BADGE
            .resolve(&Selection::new().with("variant", "outline"))
            .unwrap();
        assert_eq!(tokens.len(), base + 1);
        assert_eq!(tokens.last().map(String::as_str), Some("text-foreground"));
    }

    #[test]
    fn test_default_variant() {
        let explicit = BADGE
            .resolve(&Selection::new().with("variant", "default"))
            .unwrap();
        assert_eq!(BADGE.resolve(&Selection::new()).unwrap(), explicit);
    }
}
