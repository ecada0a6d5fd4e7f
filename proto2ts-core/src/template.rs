//! `{{variable}}` template substitution.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
});

/// Substitute `{{name}}` placeholders in `template` and trim the result.
///
/// Whitespace inside the braces is tolerated (`{{ name }}`). Placeholders
/// without a matching variable are left untouched. With `pad` set, every
/// substituted value is surrounded by a single space so that adjacent
/// placeholders stay separate words for a later casing pass.
///
/// # Example
///
/// ```
/// use proto2ts_core::render_template;
///
/// let name = render_template(
///     "{{parentNodeNames}}{{typeName}}",
///     &[("parentNodeNames", "auth v1"), ("typeName", "User")],
///     true,
/// );
/// assert_eq!(name, "auth v1  User");
/// ```
pub fn render_template(template: &str, vars: &[(&str, &str)], pad: bool) -> String {
    let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        match vars.iter().find(|(name, _)| *name == &caps[1]) {
            Some((_, value)) if pad => format!(" {} ", value),
            Some((_, value)) => (*value).to_string(),
            None => caps[0].to_string(),
        }
    });

    rendered.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_padding() {
        let out = render_template(
            "DO NOT EDIT! Types generated from {{sourceFile}} at {{generationTimestamp}}.",
            &[("sourceFile", "a/b.proto"), ("generationTimestamp", "now")],
            false,
        );
        assert_eq!(out, "DO NOT EDIT! Types generated from a/b.proto at now.");
    }

    #[test]
    fn test_render_with_padding() {
        let out = render_template(
            "{{parentNodeNames}}{{typeName}}",
            &[("parentNodeNames", "auth v1"), ("typeName", "User")],
            true,
        );
        assert_eq!(out, "auth v1  User");
    }

    #[test]
    fn test_whitespace_inside_braces() {
        let out = render_template("I{{ typeName }}", &[("typeName", "User")], false);
        assert_eq!(out, "IUser");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let out = render_template("{{other}} {{typeName}}", &[("typeName", "User")], false);
        assert_eq!(out, "{{other}} User");
    }

    #[test]
    fn test_empty_value() {
        let out = render_template(
            "{{parentNodeNames}}{{typeName}}",
            &[("parentNodeNames", ""), ("typeName", "User")],
            true,
        );
        assert_eq!(out, "User");
    }
}
