//! TypeScript interface builder.

use proto2ts_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use super::{TypeExpr, types::identifiers};

/// A property of an interface or inline object type.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub ty: TypeExpr,
    pub optional: bool,
    /// Comment lines emitted above the property, without the `// ` prefix.
    pub leading_comments: Vec<String>,
    /// Comment appended after the `;`, without the `// ` prefix.
    pub trailing_comment: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            leading_comments: Vec::new(),
            trailing_comment: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn leading_comment(mut self, comment: impl Into<String>) -> Self {
        self.leading_comments.push(comment.into());
        self
    }

    pub fn trailing_comment(mut self, comment: impl Into<String>) -> Self {
        self.trailing_comment = Some(comment.into());
        self
    }

    /// Type names used by this member's type.
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.ty.collect_references(&mut names);
        names
    }

    /// The lines of this member, relative to the enclosing block.
    pub fn lines(&self, indent: Indent) -> Vec<String> {
        let mut lines: Vec<String> = self
            .leading_comments
            .iter()
            .map(|comment| format!("// {}", comment))
            .collect();

        let optional = if self.optional { "?" } else { "" };
        let mut declaration = format!(
            "{}{}: {};",
            self.name,
            optional,
            self.ty.render_with_indent(indent)
        );
        if let Some(comment) = &self.trailing_comment {
            declaration.push_str(" // ");
            declaration.push_str(comment);
        }
        lines.extend(declaration.split('\n').map(str::to_string));
        lines
    }
}

/// A generic type parameter (`T extends Base = Default`).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParam {
    pub name: String,
    pub constraint: Option<TypeExpr>,
    pub default: Option<TypeExpr>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
            default: None,
        }
    }

    pub fn extends(mut self, constraint: TypeExpr) -> Self {
        self.constraint = Some(constraint);
        self
    }

    pub fn default(mut self, ty: TypeExpr) -> Self {
        self.default = Some(ty);
        self
    }

    fn render(&self) -> String {
        let mut out = self.name.clone();
        if let Some(constraint) = &self.constraint {
            out.push_str(" extends ");
            out.push_str(&constraint.render());
        }
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(&default.render());
        }
        out
    }
}

/// Builder for TypeScript interfaces.
///
/// Interface hooks receive the default `Interface` built for a message and
/// may return a modified copy, so every part of it is public.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub name: String,
    pub type_params: Vec<TypeParam>,
    pub extends: Vec<String>,
    pub members: Vec<Member>,
    pub exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            extends: Vec::new(),
            members: Vec::new(),
            exported: true,
        }
    }

    pub fn type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends.push(base.into());
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Type names used by the members, type parameters and base interfaces.
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for member in &self.members {
            member.ty.collect_references(&mut names);
        }
        for param in &self.type_params {
            for ty in param.constraint.iter().chain(&param.default) {
                ty.collect_references(&mut names);
            }
        }
        for base in &self.extends {
            names.extend(identifiers(base));
        }
        names
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let mut header = format!("{}interface {}", export, self.name);

        if !self.type_params.is_empty() {
            let params: Vec<String> = self.type_params.iter().map(TypeParam::render).collect();
            header.push_str(&format!("<{}>", params.join(", ")));
        }
        if !self.extends.is_empty() {
            header.push_str(" extends ");
            header.push_str(&self.extends.join(", "));
        }
        header.push_str(" {");
        header
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .members
            .iter()
            .flat_map(|member| member.lines(Indent::default()))
            .map(CodeFragment::Line)
            .collect();

        vec![CodeFragment::block(self.header(), body, Some("}".to_string()))]
    }
}
