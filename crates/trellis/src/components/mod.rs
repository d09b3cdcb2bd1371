//! Built-in component style tables.
//!
//! Each table is a process-wide [`StyleSpec`] defined on first use and
//! immutable afterwards:
//!
//! | Name | Axes |
//! |------|------|
//! | `button` | `variant`, `size`, `state` |
//! | `rect_button` | `variant` |
//! | `badge` | `variant` |
//! | `card`, `card_header`, `card_title`, `card_description`, `card_action`, `card_content`, `card_footer` | none |
//!
//! ```rust
//! use trellis::{components, Selection, UtilityMerger};
//!
//! let badge = components::get("badge").unwrap();
//! let class = badge
//!     .class_name(&Selection::new().with("variant", "outline"), &UtilityMerger::new())
//!     .unwrap();
//! assert!(class.ends_with("text-foreground"));
//! ```

mod badge;
mod button;
mod card;
mod rect_button;

pub use badge::BADGE;
pub use button::BUTTON;
pub use card::{
    data_slot, CARD, CARD_ACTION, CARD_CONTENT, CARD_DESCRIPTION, CARD_FOOTER, CARD_HEADER,
    CARD_TITLE,
};
pub use rect_button::{
    ButtonProps, ButtonRender, BUSY_CLASS, FOCUS_RING, RECT_BUTTON, SPINNER_CLASS,
};

use crate::spec::StyleSpec;

const NAMES: &[&str] = &[
    "button",
    "rect_button",
    "badge",
    "card",
    "card_header",
    "card_title",
    "card_description",
    "card_action",
    "card_content",
    "card_footer",
];

/// Names of the built-in components, in catalog order.
pub fn names() -> &'static [&'static str] {
    NAMES
}

/// Looks up a built-in component by name.
pub fn get(name: &str) -> Option<&'static StyleSpec> {
    let spec: &'static StyleSpec = match name {
        "button" => &*BUTTON,
        "rect_button" => &*RECT_BUTTON,
        "badge" => &*BADGE,
        "card" => &*CARD,
        "card_header" => &*CARD_HEADER,
        "card_title" => &*CARD_TITLE,
        "card_description" => &*CARD_DESCRIPTION,
        "card_action" => &*CARD_ACTION,
        "card_content" => &*CARD_CONTENT,
        "card_footer" => &*CARD_FOOTER,
        _ => return None,
    };
    Some(spec)
}

/// Where a component's classes end up.
///
/// Components render onto their own element by default. A caller that already
/// has an element (a link styled as a button, say) asks for [`Child`] and
/// applies the resolved classes to that element itself.
///
/// [`Child`]: RenderTarget::Child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    /// The component's own element, by tag name.
    Element(&'static str),
    /// The caller's single child element.
    Child,
}

impl RenderTarget {
    pub fn element_or_child(tag: &'static str, as_child: bool) -> Self {
        if as_child {
            RenderTarget::Child
        } else {
            RenderTarget::Element(tag)
        }
    }

    pub fn is_child(&self) -> bool {
        matches!(self, RenderTarget::Child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Selection;

    #[test]
    fn test_every_builtin_defines_and_resolves() {
        for name in names() {
            let spec = get(name).unwrap_or_else(|| panic!("missing built-in {name}"));
            assert_eq!(spec.name(), Some(*name));
            assert!(spec.resolve(&Selection::new()).is_ok(), "{name} failed to resolve");
        }
    }

    #[test]
    fn test_unknown_component() {
        assert!(get("tooltip").is_none());
    }

    #[test]
    fn test_render_target() {
        assert_eq!(
            RenderTarget::element_or_child("div", false),
            RenderTarget::Element("div")
        );
        assert!(RenderTarget::element_or_child("div", true).is_child());
    }
}
