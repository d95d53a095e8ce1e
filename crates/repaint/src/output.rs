//! Bundle writer: lays a rendered theme out on disk.
//!
//! Plain filesystem glue around [`RenderedTheme`]. The bundle layout is
//! fixed by the widget framework's loader:
//!
//! ```text
//! <out_root>/<name>/
//!     jquery.mobile-<version>.css
//!     index.html                  (copied from <res_root>)
//!     images/                     (copied from <res_root>/jqm/<version>/images)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::assemble::RenderedTheme;

/// Default output root, relative to the working directory.
pub const DEFAULT_OUT_ROOT: &str = "generated";

/// Default resource root holding `index.html` and the per-version `jqm/`
/// asset tree.
pub const DEFAULT_RES_ROOT: &str = "res";

/// Errors that can occur while writing a bundle.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A file or directory could not be created, written or copied.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for bundle writing.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Writes a theme bundle under the default roots.
pub fn write_bundle(theme: &RenderedTheme) -> Result<PathBuf> {
    write_bundle_under(theme, DEFAULT_OUT_ROOT, DEFAULT_RES_ROOT)
}

/// Writes a theme bundle under explicit output and resource roots.
///
/// Returns the bundle directory. The images directory is only copied when
/// it does not already exist, so re-generating a theme refreshes the CSS
/// without re-copying assets.
pub fn write_bundle_under<O: AsRef<Path>, R: AsRef<Path>>(
    theme: &RenderedTheme,
    out_root: O,
    res_root: R,
) -> Result<PathBuf> {
    let res_root = res_root.as_ref();
    let bundle_dir = out_root.as_ref().join(&theme.name);
    create_dir_all(&bundle_dir)?;

    let css_path = bundle_dir.join(format!("jquery.mobile-{}.css", theme.jqm_version));
    fs::write(&css_path, &theme.css).map_err(|source| OutputError::Io {
        path: css_path.clone(),
        source,
    })?;

    let index_src = res_root.join("index.html");
    let index_dst = bundle_dir.join("index.html");
    fs::copy(&index_src, &index_dst).map_err(|source| OutputError::Io {
        path: index_src.clone(),
        source,
    })?;

    let images_dst = bundle_dir.join("images");
    if !images_dst.exists() {
        let images_src = res_root
            .join("jqm")
            .join(&theme.jqm_version)
            .join("images");
        copy_dir(&images_src, &images_dst)?;
    }

    Ok(bundle_dir)
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    create_dir_all(dst)?;
    let entries = fs::read_dir(src).map_err(|source| OutputError::Io {
        path: src.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| OutputError::Io {
            path: src.to_path_buf(),
            source,
        })?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|source| OutputError::Io {
                path: from.clone(),
                source,
            })?;
        }
    }
    Ok(())
}
