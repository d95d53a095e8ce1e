//! Theme settings documents: loading, base merging, and typed extraction.
//!
//! A settings document is a flat YAML mapping. Three administrative keys
//! drive the run (`name`, `jqm-version`, `source-theme`); every other key
//! becomes a substitutable field. A base document supplies fallback values
//! for fields the theme does not define, unless the theme opts out with
//! `use_base: "false"`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use repaint_render::FieldMap;

/// Default location of the base settings document, relative to the working
/// directory.
pub const DEFAULT_BASE_PATH: &str = "themes/base.yaml";

const KEY_NAME: &str = "name";
const KEY_JQM_VERSION: &str = "jqm-version";
const KEY_SOURCE_THEME: &str = "source-theme";
const KEY_USE_BASE: &str = "use_base";
const KEY_EXTRA_CSS: &str = "extra-css";

/// Errors that can occur while loading a settings document.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A settings file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid YAML.
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document parsed, but is not a key/value mapping.
    #[error("settings document is not a key/value mapping")]
    NotAMapping,

    /// A settings key is not a string.
    #[error("settings keys must be strings")]
    NonStringKey,

    /// A required administrative key is absent from the merged settings.
    #[error("missing required setting `{0}`")]
    MissingKey(&'static str),

    /// A field value is a list or nested mapping rather than a scalar.
    #[error("setting `{0}` must be a scalar value")]
    NotAScalar(String),
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Effective theme settings: the three administrative values plus the field
/// map handed to the substitution engine.
///
/// `extra-css` and `use_base` deliberately stay in [`fields`](Self::fields)
/// as well — only `name`, `jqm-version` and `source-theme` are withheld
/// from substitution.
#[derive(Debug, Clone)]
pub struct ThemeSettings {
    /// Theme name; keys the output bundle directory.
    pub name: String,
    /// Target jQuery Mobile version; keys the stylesheet filename and the
    /// images directory to copy.
    pub jqm_version: String,
    /// Path to the template stylesheet.
    pub source_theme: PathBuf,
    /// Raw CSS appended verbatim after substitution, when present.
    pub extra_css: Option<PathBuf>,
    /// All non-administrative keys, ready for the engine.
    pub fields: FieldMap,
}

impl ThemeSettings {
    /// Loads settings from a theme document, merging with the base document
    /// at [`DEFAULT_BASE_PATH`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_base(path, DEFAULT_BASE_PATH)
    }

    /// Loads settings from a theme document, merging with the base document
    /// at an explicit path.
    ///
    /// The base file is only read when merging is enabled, so a theme with
    /// `use_base: "false"` works without any base document on disk.
    pub fn load_with_base<P: AsRef<Path>, B: AsRef<Path>>(path: P, base_path: B) -> Result<Self> {
        let theme_yaml = read_file(path.as_ref())?;
        let theme_doc = parse_mapping(&theme_yaml)?;

        let merged = if base_disabled(&theme_doc) {
            theme_doc
        } else {
            let base_yaml = read_file(base_path.as_ref())?;
            let base_doc = parse_mapping(&base_yaml)?;
            merge_with_base(theme_doc, base_doc)
        };

        Self::from_mapping(merged)
    }

    /// Builds settings from in-memory documents.
    ///
    /// `base_yaml` is ignored when the theme document sets
    /// `use_base: "false"`. This is the testable core of
    /// [`load_with_base`](Self::load_with_base).
    pub fn from_documents(theme_yaml: &str, base_yaml: Option<&str>) -> Result<Self> {
        let theme_doc = parse_mapping(theme_yaml)?;

        let merged = match base_yaml {
            Some(base) if !base_disabled(&theme_doc) => {
                merge_with_base(theme_doc, parse_mapping(base)?)
            }
            _ => theme_doc,
        };

        Self::from_mapping(merged)
    }

    fn from_mapping(mut doc: Mapping) -> Result<Self> {
        let name = take_required(&mut doc, KEY_NAME)?;
        let jqm_version = take_required(&mut doc, KEY_JQM_VERSION)?;
        let source_theme = PathBuf::from(take_required(&mut doc, KEY_SOURCE_THEME)?);

        let mut fields = BTreeMap::new();
        for (key, value) in doc {
            let key = match key {
                Value::String(key) => key,
                _ => return Err(SettingsError::NonStringKey),
            };
            let value = scalar_to_string(&value).ok_or(SettingsError::NotAScalar(key.clone()))?;
            fields.insert(key, value);
        }
        let fields = FieldMap::from(fields);

        let extra_css = fields.get(KEY_EXTRA_CSS).map(PathBuf::from);

        Ok(ThemeSettings {
            name,
            jqm_version,
            source_theme,
            extra_css,
            fields,
        })
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_mapping(yaml: &str) -> Result<Mapping> {
    let value: Value = serde_yaml::from_str(yaml)?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(SettingsError::NotAMapping),
    }
}

/// True when the theme document opts out of base merging.
///
/// Only the literal string `"false"` disables merging; the YAML boolean
/// `false` does not, matching the original tool's string comparison. Quote
/// the value in the document: `use_base: "false"`.
fn base_disabled(theme_doc: &Mapping) -> bool {
    matches!(
        theme_doc.get(KEY_USE_BASE),
        Some(Value::String(flag)) if flag == "false"
    )
}

/// Merges base keys into the theme document as fallback defaults: a base
/// key contributes only when the theme does not define it.
fn merge_with_base(mut theme_doc: Mapping, base_doc: Mapping) -> Mapping {
    for (key, value) in base_doc {
        if !theme_doc.contains_key(&key) {
            theme_doc.insert(key, value);
        }
    }
    theme_doc
}

fn take_required(doc: &mut Mapping, key: &'static str) -> Result<String> {
    let value = doc.remove(key).ok_or(SettingsError::MissingKey(key))?;
    scalar_to_string(&value).ok_or(SettingsError::NotAScalar(key.to_string()))
}

/// Renders a YAML scalar as a field value; `None` for lists and mappings.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
