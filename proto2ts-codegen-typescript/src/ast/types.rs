//! TypeScript type expressions and type aliases.

use proto2ts_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use super::Member;

/// A TypeScript type expression.
///
/// Multi-line expressions (inline object types) render with indentation
/// relative to their first line, so they can be embedded at any depth.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// Type text used verbatim (`string`, `boolean | null`, `Record<string, any>`).
    Raw(String),
    /// A named type (`AuthV1Role`).
    Reference(String),
    /// A single-quoted string literal type (`'ROLE_ADMIN'`).
    StringLiteral(String),
    /// `A | B | C`, or `never` when empty.
    Union(Vec<TypeExpr>),
    /// `T[]`.
    Array(Box<TypeExpr>),
    /// `Record<K, V>`.
    Record(Box<TypeExpr>, Box<TypeExpr>),
    /// An anonymous object type literal.
    Object(Vec<Member>),
}

impl TypeExpr {
    /// The universal unknown marker, `any`.
    pub fn any() -> Self {
        Self::Raw("any".to_string())
    }

    pub fn raw(ty: impl Into<String>) -> Self {
        Self::Raw(ty.into())
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// Union of string literals.
    pub fn literals<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Union(
            values
                .into_iter()
                .map(|v| Self::StringLiteral(v.into()))
                .collect(),
        )
    }

    pub fn array(self) -> Self {
        Self::Array(Box::new(self))
    }

    pub fn record(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Record(Box::new(key), Box::new(value))
    }

    /// Returns true if the expression is a union at its top level.
    pub fn is_union(&self) -> bool {
        match self {
            Self::Union(items) => items.len() > 1,
            Self::Raw(text) => has_top_level_pipe(text),
            _ => false,
        }
    }

    /// Append every type name this expression mentions, including names
    /// inside inline object members and raw type text.
    pub fn collect_references<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Reference(name) => names.push(name),
            Self::Raw(text) => names.extend(identifiers(text)),
            Self::StringLiteral(_) => {}
            Self::Union(items) => items.iter().for_each(|item| item.collect_references(names)),
            Self::Array(inner) => inner.collect_references(names),
            Self::Record(key, value) => {
                key.collect_references(names);
                value.collect_references(names);
            }
            Self::Object(members) => members
                .iter()
                .for_each(|member| member.ty.collect_references(names)),
        }
    }

    /// Render the expression with the default indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::default())
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        match self {
            Self::Raw(text) | Self::Reference(text) => text.clone(),
            Self::StringLiteral(value) => quote(value),
            Self::Union(items) if items.is_empty() => "never".to_string(),
            Self::Union(items) => items
                .iter()
                .map(|item| item.render_with_indent(indent))
                .collect::<Vec<_>>()
                .join(" | "),
            Self::Array(inner) if inner.is_union() => {
                format!("({})[]", inner.render_with_indent(indent))
            }
            Self::Array(inner) => format!("{}[]", inner.render_with_indent(indent)),
            Self::Record(key, value) => format!(
                "Record<{}, {}>",
                key.render_with_indent(indent),
                value.render_with_indent(indent)
            ),
            Self::Object(members) if members.is_empty() => "{}".to_string(),
            Self::Object(members) => {
                let mut out = String::from("{\n");
                for line in members.iter().flat_map(|m| m.lines(indent)) {
                    out.push_str(indent.as_str());
                    out.push_str(&line);
                    out.push('\n');
                }
                out.push('}');
                out
            }
        }
    }
}

/// Single-quote a string for use as a literal.
pub fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

/// Identifier-like words of a piece of type text (`Page<PkgB>` -> `Page`, `PkgB`).
pub(crate) fn identifiers(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .filter(|word| !word.is_empty())
}

fn has_top_level_pipe(text: &str) -> bool {
    let mut depth = 0i32;
    let mut in_quote: Option<char> = None;

    for c in text.chars() {
        match (in_quote, c) {
            (Some(q), c) if c == q => in_quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => in_quote = Some(c),
            (None, '{' | '<' | '(' | '[') => depth += 1,
            (None, '}' | '>' | ')' | ']') => depth -= 1,
            (None, '|') if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Builder for TypeScript type aliases (`export type Name = ...;`).
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: TypeExpr,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            exported: true,
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let text = format!("{}type {} = {};", export, self.name, self.ty.render());
        text.split('\n').map(CodeFragment::line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_of_union_is_parenthesized() {
        let ty = TypeExpr::literals(["A", "B"]).array();
        assert_eq!(ty.render(), "('A' | 'B')[]");

        let ty = TypeExpr::raw("boolean | null").array();
        assert_eq!(ty.render(), "(boolean | null)[]");
    }

    #[test]
    fn test_single_literal_is_not_parenthesized() {
        assert_eq!(TypeExpr::literals(["A"]).array().render(), "'A'[]");
        assert_eq!(TypeExpr::reference("AuthV1Team").array().render(), "AuthV1Team[]");
    }

    #[test]
    fn test_raw_pipe_inside_braces_is_not_a_union() {
        assert!(!TypeExpr::raw("{ a: 'x|y' }").is_union());
        assert!(!TypeExpr::raw("Record<string, a | b>").is_union());
        assert!(TypeExpr::raw("string | null").is_union());
    }

    #[test]
    fn test_empty_union_is_never() {
        assert_eq!(TypeExpr::Union(Vec::new()).render(), "never");
    }

    #[test]
    fn test_record() {
        let ty = TypeExpr::record(TypeExpr::raw("string"), TypeExpr::reference("AuthV1Team"));
        assert_eq!(ty.render(), "Record<string, AuthV1Team>");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("it's"), "'it\\'s'");
    }

    #[test]
    fn test_nested_object() {
        let inner = TypeExpr::Object(vec![Member::new("theme", TypeExpr::literals(["DARK"])).optional()]);
        let outer = TypeExpr::Object(vec![
            Member::new("language", TypeExpr::raw("string")).optional(),
            Member::new("display", inner).optional(),
        ]);

        assert_eq!(
            outer.render(),
            "{\n    language?: string;\n    display?: {\n        theme?: 'DARK';\n    };\n}"
        );
        assert_eq!(TypeExpr::Object(Vec::new()).render(), "{}");
    }

    #[test]
    fn test_union_alias() {
        let alias = TypeAlias::new("AuthV1Role", TypeExpr::literals(["ROLE_UNSPECIFIED", "ROLE_ADMIN"]));
        assert_eq!(
            alias.build(),
            "export type AuthV1Role = 'ROLE_UNSPECIFIED' | 'ROLE_ADMIN';\n"
        );
        assert_eq!(
            TypeAlias::new("Empty", TypeExpr::literals(Vec::<String>::new())).private().build(),
            "type Empty = never;\n"
        );
    }
}
