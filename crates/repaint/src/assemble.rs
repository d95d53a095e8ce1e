//! Theme assembly: settings in, rendered CSS out.
//!
//! Assembly is a single-shot, stateless pipeline: load and merge the
//! settings documents, read the template stylesheet, substitute every
//! placeholder in one pass, then append the optional extra CSS verbatim.
//! Writing the bundle to disk is the [`output`](crate::output) module's job.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use repaint_render::{Renderer, RenderError};

use crate::settings::{SettingsError, ThemeSettings};

/// Errors that can occur during theme assembly.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// The settings documents could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The substitution pattern could not be compiled.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The template stylesheet or extra CSS file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, AssembleError>;

/// A fully rendered theme, ready to be written as a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTheme {
    /// Theme name; keys the bundle directory.
    pub name: String,
    /// Target jQuery Mobile version; keys the stylesheet filename and the
    /// images directory.
    pub jqm_version: String,
    /// The substituted stylesheet text, with any extra CSS appended.
    pub css: String,
}

/// Assembles a theme from a settings document, merging with the default
/// base document (`themes/base.yaml`).
pub fn assemble<P: AsRef<Path>>(settings_path: P) -> Result<RenderedTheme> {
    from_settings(ThemeSettings::load(settings_path)?)
}

/// Assembles a theme from a settings document with an explicit base
/// document path.
pub fn assemble_with_base<P: AsRef<Path>, B: AsRef<Path>>(
    settings_path: P,
    base_path: B,
) -> Result<RenderedTheme> {
    from_settings(ThemeSettings::load_with_base(settings_path, base_path)?)
}

/// Renders already-loaded settings into a theme.
///
/// Paths inside the settings (`source-theme`, `extra-css`) are resolved
/// relative to the process working directory.
pub fn from_settings(settings: ThemeSettings) -> Result<RenderedTheme> {
    let template = read_file(&settings.source_theme)?;

    let renderer = Renderer::new(settings.fields.clone())?;
    let mut css = renderer.render(&template);

    if let Some(extra_path) = &settings.extra_css {
        css.push_str(&read_file(extra_path)?);
    }

    Ok(RenderedTheme {
        name: settings.name,
        jqm_version: settings.jqm_version,
        css,
    })
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AssembleError::Io {
        path: path.to_path_buf(),
        source,
    })
}
