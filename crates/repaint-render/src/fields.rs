//! Field map: named replacement values for stylesheet placeholders.

use std::collections::BTreeMap;

/// A mapping from field name to replacement value.
///
/// Field names identify placeholders in a template stylesheet (the
/// `/*{field-name}*/` marker comments); values are the text substituted in
/// front of each marker. Keys are unique and order is irrelevant — the map
/// is backed by a `BTreeMap` so the compiled alternation pattern is
/// deterministic, but nothing about substitution depends on key order.
///
/// # Example
///
/// ```rust
/// use repaint_render::FieldMap;
///
/// let fields = FieldMap::new()
///     .set("global-radii-blocks", "0.4em")
///     .set("a-bar-background-color", "#3c3c3c");
///
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields.get("global-radii-blocks"), Some("0.4em"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    values: BTreeMap<String, String>,
}

impl FieldMap {
    /// Creates an empty field map.
    pub fn new() -> Self {
        FieldMap::default()
    }

    /// Adds a field, returning an updated map for chaining.
    ///
    /// Setting a name that already exists replaces its value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Returns the replacement value for a field, if defined.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns true if the field is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Removes a field, returning its value if it was defined.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// Returns the number of defined fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no fields are defined.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterates over `(name, value)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for FieldMap {
    fn from(values: BTreeMap<String, String>) -> Self {
        FieldMap { values }
    }
}

impl FromIterator<(String, String)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        FieldMap {
            values: iter.into_iter().collect(),
        }
    }
}
