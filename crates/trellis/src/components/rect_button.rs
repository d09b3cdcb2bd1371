//! Rectangular button with a loading state.

use once_cell::sync::Lazy;

use super::RenderTarget;
use crate::merge::ClassList;
use crate::resolve::{ResolveError, Selection};
use crate::spec::StyleSpec;

/// Keyboard focus outline shared by focusable controls.
pub const FOCUS_RING: &[&str] = &[
    "outline outline-offset-2 outline-0 focus-visible:outline-2",
    "outline-blue-500 dark:outline-blue-500",
];

/// Wrapper around the spinner and label while a button is loading.
pub const BUSY_CLASS: &str = "pointer-events-none flex shrink-0 items-center justify-center gap-1.5";

/// The spinner icon shown while a button is loading.
pub const SPINNER_CLASS: &str = "size-4 shrink-0 animate-spin";

const DEFAULT_BUSY_LABEL: &str = "Loading";

/// Rectangular button, one `variant` axis (`primary`, `secondary`, `light`,
/// `ghost`, `danger`), defaulting to `light`.
pub static RECT_BUTTON: Lazy<StyleSpec> = Lazy::new(|| {
    StyleSpec::builder()
        .name("rect_button")
        .base([
            "relative inline-flex items-center justify-center rounded-md border px-3 py-2 text-center text-sm font-medium whitespace-nowrap shadow-xs transition-all duration-100 ease-in-out",
            "disabled:pointer-events-none disabled:shadow-none",
        ])
        .base(FOCUS_RING)
        .axis("variant", |a| {
            a.option(
                "primary",
                [
                    "border-transparent",
                    "text-white dark:text-white",
                    "bg-blue-500 dark:bg-blue-500",
                    "hover:bg-blue-600 dark:hover:bg-blue-600",
                    "disabled:bg-blue-300 disabled:text-white",
                    "dark:disabled:bg-blue-800 dark:disabled:text-blue-400",
                ],
            )
            .option(
                "secondary",
                [
                    "border-gray-300 dark:border-gray-800",
                    "text-gray-900 dark:text-gray-50",
                    "bg-white dark:bg-gray-950",
                    "hover:bg-gray-50 dark:hover:bg-gray-900/60",
                    "disabled:text-gray-400",
                    "dark:disabled:text-gray-600",
                ],
            )
            .option(
                "light",
                [
                    "shadow-none",
                    "border-transparent",
                    "text-gray-900 dark:text-gray-50",
                    "bg-gray-200 dark:bg-gray-900",
                    "hover:bg-gray-300/70 dark:hover:bg-gray-800/80",
                    "disabled:bg-gray-100 disabled:text-gray-400",
                    "dark:disabled:bg-gray-800 dark:disabled:text-gray-600",
                ],
            )
            .option(
                "ghost",
                [
                    "shadow-none",
                    "border-transparent",
                    "text-gray-900 dark:text-gray-50",
                    "bg-transparent hover:bg-gray-100 dark:hover:bg-gray-800/80",
                    "disabled:text-gray-400",
                    "dark:disabled:text-gray-600",
                ],
            )
            .option(
                "danger",
                [
                    "text-white",
                    "border-transparent",
                    "bg-red-600 dark:bg-red-700",
                    "hover:bg-red-700 dark:hover:bg-red-600",
                    "disabled:bg-red-300 disabled:text-white",
                    "dark:disabled:bg-red-950 dark:disabled:text-red-400",
                ],
            )
        })
        .default_option("variant", "light")
        .build()
        .expect("built-in rect_button spec is valid")
});

/// Caller-facing options of the rectangular button.
///
/// ```rust
/// use trellis::components::{ButtonProps, RenderTarget};
///
/// let render = ButtonProps::new()
///     .variant("primary")
///     .loading(true)
///     .render()
///     .unwrap();
/// assert!(render.disabled);
/// assert_eq!(render.busy.as_deref(), Some("Loading"));
/// assert_eq!(render.target, RenderTarget::Element("button"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub variant: Option<String>,
    /// Extra classes, applied after the variant classes.
    pub class: Option<String>,
    pub disabled: bool,
    pub loading: bool,
    pub loading_text: Option<String>,
    /// Render onto the caller's child element instead of a `<button>`.
    pub as_child: bool,
}

/// What a renderer needs to draw a [`ButtonProps`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonRender {
    pub target: RenderTarget,
    pub class: String,
    /// Set when the button is disabled or loading.
    pub disabled: bool,
    /// The accessible busy label, present only while loading.
    pub busy: Option<String>,
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = Some(text.into());
        self
    }

    pub fn as_child(mut self, as_child: bool) -> Self {
        self.as_child = as_child;
        self
    }

    /// Resolves the classes and the interaction state.
    ///
    /// # Errors
    ///
    /// [`ResolveError::InvalidVariantOption`] if `variant` is not one of the
    /// declared options.
    pub fn render(&self) -> Result<ButtonRender, ResolveError> {
        let selection = Selection::new().with_opt("variant", self.variant.as_deref());
        let tokens = RECT_BUTTON.resolve(&selection)?;
        let class = ClassList::new()
            .extend(tokens)
            .add_opt(self.class.as_deref())
            .build();

        let busy = self.loading.then(|| {
            self.loading_text
                .clone()
                .unwrap_or_else(|| DEFAULT_BUSY_LABEL.to_string())
        });

        Ok(ButtonRender {
            target: RenderTarget::element_or_child("button", self.as_child),
            class,
            disabled: self.disabled || self.loading,
            busy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_is_light() {
        let render = ButtonProps::new().render().unwrap();
        assert!(render.class.contains("bg-gray-200"));
        assert!(render.class.contains("shadow-none"));
        assert!(!render.class.contains("shadow-xs"));
        assert!(!render.disabled);
        assert_eq!(render.busy, None);
    }

    #[test]
    fn test_focus_ring_in_base() {
        let tokens = RECT_BUTTON.resolve(&Selection::new()).unwrap();
        assert!(tokens.contains(&"focus-visible:outline-2".to_string()));
        assert!(tokens.contains(&"outline-blue-500".to_string()));
    }

    #[test]
    fn test_loading_implies_disabled_and_label() {
        let render = ButtonProps::new()
            .loading(true)
            .loading_text("Saving")
            .render()
            .unwrap();
        assert!(render.disabled);
        assert_eq!(render.busy.as_deref(), Some("Saving"));

        let render = ButtonProps::new().disabled(true).render().unwrap();
        assert!(render.disabled);
        assert_eq!(render.busy, None);
    }

    #[test]
    fn test_caller_class_wins() {
        let render = ButtonProps::new()
            .variant("danger")
            .class("bg-red-500 px-6")
            .render()
            .unwrap();
        assert!(render.class.ends_with("bg-red-500 px-6"));
        assert!(!render.class.contains(" bg-red-600"));
        assert!(!render.class.contains(" px-3"));
    }

    #[test]
    fn test_as_child_target() {
        let render = ButtonProps::new().as_child(true).render().unwrap();
        assert_eq!(render.target, RenderTarget::Child);
    }

    #[test]
    fn test_unknown_variant_is_error() {
        let err = ButtonProps::new().variant("ghots").render().unwrap_err();
        assert_eq!(err.value(), "ghots");
    }
}
