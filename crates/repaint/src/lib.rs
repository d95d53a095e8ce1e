//! # Repaint - Themed Stylesheet Generator
//!
//! `repaint` produces a customized stylesheet bundle for a jQuery Mobile
//! widget framework version. Designers supply a small YAML settings
//! document; the tool substitutes its values into marker-comment
//! placeholders in a template stylesheet and writes the bundle (CSS, HTML
//! shell, versioned images) to disk.
//!
//! The substitution engine itself lives in [`repaint_render`]; this crate
//! adds the settings layer, the assembly driver and the bundle writer.
//!
//! ## Pipeline
//!
//! ```text
//! settings.yaml ─┐
//! base.yaml ─────┴─ merge ─ field map ─ substitute template ─ append extra
//!                                        css ─ write bundle
//! ```
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use repaint::assemble::assemble;
//! use repaint::output::write_bundle;
//!
//! let theme = assemble("themes/graphite.yaml")?;
//! let bundle = write_bundle(&theme)?;
//! println!("wrote {}", bundle.display());
//! ```
//!
//! Substitution is lenient by design: placeholders without a matching field
//! and fields without a matching placeholder are both silently ignored, so
//! themes can define any subset of a template's placeholders.

pub mod assemble;
pub mod cli;
pub mod output;
pub mod settings;

pub use assemble::{assemble, assemble_with_base, AssembleError, RenderedTheme};
pub use output::{write_bundle, write_bundle_under, OutputError};
pub use settings::{SettingsError, ThemeSettings};

// Re-export the engine types so driver users need only this crate.
pub use repaint_render::{render, FieldMap, RenderError, Renderer};
