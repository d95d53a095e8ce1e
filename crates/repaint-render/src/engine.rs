//! The token substitution engine.
//!
//! Templates mark substitutable positions with a comment of the form
//! `/*{field-name}*/` placed immediately after a value token:
//!
//! ```css
//! .ui-btn-corner-all {
//!     -webkit-border-radius: .6em  /*{global-radii-blocks}*/;
//! }
//! ```
//!
//! Rendering replaces the value token (`.6em` above) with the mapped value
//! for `global-radii-blocks`, leaving the surrounding whitespace and the
//! marker comment itself untouched.

use regex::{Captures, Regex};

use crate::error::Result;
use crate::fields::FieldMap;

/// A compiled substitution pass over a set of fields.
///
/// The renderer compiles one alternation pattern covering every field name
/// in the map, so a template is scanned exactly once regardless of how many
/// fields are defined. Each match looks up its own field name, which means
/// adjacent placeholders substitute independently.
///
/// # Leniency
///
/// Substitution never fails at render time:
///
/// - a marker naming a field that is not in the map is left exactly as-is;
/// - a field that matches nothing in the template is silently ignored.
///
/// Both are deliberate — themes routinely define only a subset of the
/// placeholders a template offers, and base settings routinely define
/// fields a given template never uses.
///
/// # Known limitation
///
/// Rendering is not guaranteed idempotent: if a substituted value happens to
/// end with text forming a `token /*{field}*/` shape for another field, a
/// second render pass would rewrite it. A single pass never re-examines its
/// own output, so this cannot occur within one `render` call.
///
/// # Example
///
/// ```rust
/// use repaint_render::{FieldMap, Renderer};
///
/// let fields = FieldMap::new().set("global-radii-blocks", "0.4em");
/// let renderer = Renderer::new(fields).unwrap();
///
/// let css = renderer.render("border-radius: 0.2em  /*{global-radii-blocks}*/;");
/// assert_eq!(css, "border-radius: 0.4em  /*{global-radii-blocks}*/;");
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    /// None when the field map is empty; rendering is then the identity.
    pattern: Option<Regex>,
    fields: FieldMap,
}

impl Renderer {
    /// Compiles a renderer for the given field map.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidPattern`](crate::RenderError) if the
    /// combined pattern does not compile. Field names are escaped first, so
    /// names that are plain identifiers (the expected case) cannot fail.
    pub fn new(fields: FieldMap) -> Result<Self> {
        let pattern = if fields.is_empty() {
            None
        } else {
            let alternation = fields
                .names()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join("|");
            // Group 1: leading whitespace, kept.
            // Group 2: the value token (maximal run of non-whitespace,
            //          possibly empty), replaced.
            // Group 3: whitespace plus the marker comment, kept.
            // Group 4: the field name inside the marker.
            let source = format!(r"(\s*)(\S*)(\s*/\*\{{({})\}}\*/)", alternation);
            Some(Regex::new(&source)?)
        };
        Ok(Renderer { pattern, fields })
    }

    /// Renders a template, substituting every recognized placeholder.
    ///
    /// One pass over the input; pure function of the template text and the
    /// fields this renderer was compiled with.
    pub fn render(&self, template: &str) -> String {
        let pattern = match &self.pattern {
            Some(pattern) => pattern,
            None => return template.to_string(),
        };

        pattern
            .replace_all(template, |caps: &Captures| {
                // The alternation is built from the map's own keys, so the
                // lookup always succeeds; the fallback keeps a broken
                // assumption from mangling the stylesheet.
                match self.fields.get(&caps[4]) {
                    Some(value) => format!("{}{}{}", &caps[1], value, &caps[3]),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Returns the fields this renderer substitutes.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

/// Compiles and renders in one step.
///
/// Convenience wrapper over [`Renderer`] for single-template use.
///
/// # Example
///
/// ```rust
/// use repaint_render::{render, FieldMap};
///
/// let fields = FieldMap::new().set("a-bar-background-color", "#3c3c3c");
/// let css = render("background: #111 /*{a-bar-background-color}*/;", &fields).unwrap();
/// assert_eq!(css, "background: #3c3c3c /*{a-bar-background-color}*/;");
/// ```
pub fn render(template: &str, fields: &FieldMap) -> Result<String> {
    Ok(Renderer::new(fields.clone())?.render(template))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_fields_is_identity() {
        let template = "a { color: red /*{color}*/; }";
        let out = render(template, &FieldMap::new()).unwrap();
        assert_eq!(out, template);
    }

    #[test]
    fn test_render_basic_substitution() {
        let fields = FieldMap::new().set("global-radii-blocks", "0.4em");
        let out = render("0.2em  /*{global-radii-blocks}*/", &fields).unwrap();
        assert_eq!(out, "0.4em  /*{global-radii-blocks}*/");
    }

    #[test]
    fn test_render_preserves_whitespace_run() {
        let fields = FieldMap::new().set("color", "ff0000");
        // Three spaces before the token, one tab before the marker.
        let out = render("x:   abc\t/*{color}*/;", &fields).unwrap();
        assert_eq!(out, "x:   ff0000\t/*{color}*/;");
    }

    #[test]
    fn test_render_preserves_newlines() {
        let fields = FieldMap::new().set("color", "ff0000");
        let out = render("x:\n  old\n  /*{color}*/;", &fields).unwrap();
        assert_eq!(out, "x:\n  ff0000\n  /*{color}*/;");
    }

    #[test]
    fn test_render_unknown_marker_untouched() {
        let fields = FieldMap::new().set("color", "ff0000");
        let template = "y: 1px /*{border-width}*/;";
        assert_eq!(render(template, &fields).unwrap(), template);
    }

    #[test]
    fn test_render_unused_field_is_noop() {
        let fields = FieldMap::new().set("never-referenced", "zzz");
        let template = "a { color: red; }";
        assert_eq!(render(template, &fields).unwrap(), template);
    }

    #[test]
    fn test_render_repeated_field() {
        let fields = FieldMap::new().set("radius", "0.4em");
        let out = render(
            "a: 1em /*{radius}*/; b: 2em /*{radius}*/;",
            &fields,
        )
        .unwrap();
        assert_eq!(out, "a: 0.4em /*{radius}*/; b: 0.4em /*{radius}*/;");
    }

    #[test]
    fn test_render_multiple_fields_single_pass() {
        let fields = FieldMap::new()
            .set("radius", "0.4em")
            .set("color", "#3c3c3c");
        let out = render(
            "r: 1em /*{radius}*/; c: #111 /*{color}*/;",
            &fields,
        )
        .unwrap();
        assert_eq!(out, "r: 0.4em /*{radius}*/; c: #3c3c3c /*{color}*/;");
    }

    #[test]
    fn test_render_adjacent_placeholders() {
        let fields = FieldMap::new().set("a", "X").set("b", "Y");
        let out = render("1 /*{a}*/ 2 /*{b}*/", &fields).unwrap();
        assert_eq!(out, "X /*{a}*/ Y /*{b}*/");
    }

    #[test]
    fn test_render_empty_value_token() {
        // A marker at the start of the text has an empty token; the value
        // is inserted in front of the comment.
        let fields = FieldMap::new().set("color", "red");
        let out = render("\n/*{color}*/;", &fields).unwrap();
        assert_eq!(out, "\nred/*{color}*/;");
    }

    #[test]
    fn test_render_token_is_maximal_nonwhitespace_run() {
        // The token extends left to the nearest whitespace, so a property
        // name glued to its value is consumed whole. Matches the original
        // marker convention: always leave whitespace before the token.
        let fields = FieldMap::new().set("color", "red");
        let out = render("x:old /*{color}*/;", &fields).unwrap();
        assert_eq!(out, "red /*{color}*/;");
    }

    #[test]
    fn test_render_hyphenated_field_names() {
        let fields = FieldMap::new().set("a-bar-background-color", "#3c3c3c");
        let out = render("bg: #000 /*{a-bar-background-color}*/;", &fields).unwrap();
        assert_eq!(out, "bg: #3c3c3c /*{a-bar-background-color}*/;");
    }

    #[test]
    fn test_render_marker_preserved_verbatim() {
        let fields = FieldMap::new().set("color", "ff0000");
        let out = render("v /*{color}*/", &fields).unwrap();
        assert!(out.contains("/*{color}*/"));
    }

    #[test]
    fn test_renderer_reuse_across_templates() {
        let renderer = Renderer::new(FieldMap::new().set("radius", "0.4em")).unwrap();
        assert_eq!(renderer.render("a /*{radius}*/"), "0.4em /*{radius}*/");
        assert_eq!(renderer.render("b /*{radius}*/"), "0.4em /*{radius}*/");
        assert_eq!(renderer.render("no markers"), "no markers");
    }

    #[test]
    fn test_renderer_fields_accessor() {
        let renderer = Renderer::new(FieldMap::new().set("radius", "0.4em")).unwrap();
        assert_eq!(renderer.fields().get("radius"), Some("0.4em"));
    }
}
