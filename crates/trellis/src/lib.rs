//! Variant-driven style resolution for UI primitives.
//!
//! A UI primitive (button, badge, card) is styled by a *variant table*: base
//! classes, named axes such as `variant` or `size` whose options each map to
//! classes, compound rules that add classes when several options coincide, and
//! defaults for omitted axes. This crate turns such a table plus a caller's
//! selection into an ordered class list, and collapses that list into one
//! class string.
//!
//! # Modules
//!
//! - **Definition**: [`StyleSpec`], built with [`StyleSpec::builder`] or
//!   [`StyleSpec::define`], validated once when defined ([`SpecError`])
//! - **Resolution**: [`StyleSpec::resolve`] with a [`Selection`], failing only
//!   on an option the axis does not declare ([`ResolveError`])
//! - **Merging**: [`ClassMerger`] implementations ([`UtilityMerger`],
//!   [`PlainMerger`]) plus the [`cx`] and [`ClassList`] helpers
//! - **Sheets**: variant tables loaded from YAML ([`StyleSheet`],
//!   [`SheetRegistry`])
//! - **Components**: the built-in tables in [`components`]
//!
//! # Example
//!
//! ```rust
//! use trellis::{Selection, StyleSpec, UtilityMerger};
//!
//! let button = StyleSpec::builder()
//!     .base("inline-flex items-center rounded-full px-3")
//!     .axis("variant", |a| {
//!         a.option("accent", "bg-cyan-500 text-white")
//!             .option("ghost", "bg-transparent text-gray-900")
//!     })
//!     .axis("size", |a| a.option("sm", "h-6 text-xs").option("lg", "h-10 px-5 text-base"))
//!     .compound(|r| r.when("variant", "ghost").when("size", "lg").tokens("underline"))
//!     .default_option("variant", "accent")
//!     .default_option("size", "sm")
//!     .build()?;
//!
//! let class = button.class_name(
//!     &Selection::new().with("size", "lg").class("px-8"),
//!     &UtilityMerger::new(),
//! )?;
//! assert_eq!(class, "inline-flex items-center rounded-full bg-cyan-500 text-white h-10 text-base px-8");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod components;
mod merge;
mod resolve;
pub mod sheet;
mod spec;
mod token;

pub use merge::{cx, ClassList, ClassMerger, MergeConfig, PlainMerger, UtilityMerger};
pub use resolve::{ResolveError, Selection};
pub use sheet::{SheetError, SheetRegistry, StyleSheet};
pub use spec::{
    Axis, CompoundRule, Constraint, OptionSet, SpecError, StyleSpec, StyleSpecBuilder,
    VariantOption,
};
pub use token::Tokens;
