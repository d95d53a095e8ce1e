//! # Repaint Render - Stylesheet Token Substitution
//!
//! `repaint-render` rewrites values inside CSS text based on a mapping of
//! named fields to replacement values, using a comment-embedded marker
//! convention: a value token followed by `/*{field-name}*/` marks a
//! substitutable position.
//!
//! This crate is the substitution core for the `repaint` theme generator,
//! but has no opinion about where templates or field values come from.
//!
//! ## Core concepts
//!
//! - [`FieldMap`]: the set of theme-specific values used to fill placeholders
//! - [`Renderer`]: compiles one combined pattern over all field names and
//!   substitutes every placeholder in a single pass
//! - [`render`]: one-shot compile-and-render convenience
//!
//! ## Quick start
//!
//! ```rust
//! use repaint_render::{render, FieldMap};
//!
//! let fields = FieldMap::new()
//!     .set("global-radii-blocks", "0.4em")
//!     .set("a-bar-background-color", "#3c3c3c");
//!
//! let template = r#"
//! .ui-bar-a {
//!     background: #111 /*{a-bar-background-color}*/;
//!     border-radius: .6em  /*{global-radii-blocks}*/;
//! }
//! "#;
//!
//! let css = render(template, &fields).unwrap();
//! assert!(css.contains("background: #3c3c3c /*{a-bar-background-color}*/;"));
//! assert!(css.contains("border-radius: 0.4em  /*{global-radii-blocks}*/;"));
//! ```
//!
//! Placeholders whose field is not in the map are left untouched, and fields
//! that match nothing are ignored — substitution is lenient by design.

mod engine;
mod error;
mod fields;

pub use engine::{render, Renderer};
pub use error::{RenderError, Result};
pub use fields::FieldMap;
