//! CodeFile abstraction for structured TypeScript file generation.
//!
//! A file is rendered as four sections, each separated from the next by a
//! single blank line: the JSDoc header, imports, declarations and exports.

use proto2ts_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::{Export, Import};

/// A structured representation of a TypeScript file.
///
/// # Example
///
/// ```
/// use proto2ts_codegen_typescript::{
///     ast::{Import, Interface, Member, TypeExpr},
///     code_file::CodeFile,
/// };
///
/// let code = CodeFile::new()
///     .header("DO NOT EDIT!")
///     .import(Import::new("./role").named("AuthV1Role").type_only())
///     .add(Interface::new("AuthV1User").member(
///         Member::new("role", TypeExpr::reference("AuthV1Role")).optional(),
///     ))
///     .render();
///
/// assert_eq!(
///     code,
///     "/**\n * DO NOT EDIT!\n */\n\nimport type { AuthV1Role } from './role';\n\nexport interface AuthV1User {\n    role?: AuthV1Role;\n}\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    header: Option<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSDoc comment placed at the top of the file.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a declaration (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    pub fn exports(mut self, exports: impl IntoIterator<Item = Export>) -> Self {
        self.exports.extend(exports);
        self
    }

    pub fn render(&self) -> String {
        self.render_with_indent(Indent::default())
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        if let Some(header) = &self.header {
            builder.push_jsdoc(header);
            sections += 1;
        }

        if !self.imports.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.emit(import);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.push(fragment.clone());
            }
            sections += 1;
        }

        if !self.exports.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for export in &self.exports {
                builder.emit(export);
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.imports.is_empty()
            && self.body.is_empty()
            && self.exports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{EnumDecl, Interface, TypeAlias, TypeExpr};

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_blank_lines_between_declarations() {
        let code = CodeFile::new()
            .add(Interface::new("A"))
            .add(TypeAlias::new("B", TypeExpr::literals(["X"])))
            .add(EnumDecl::new("C").member("X", "X"))
            .render();

        assert_eq!(
            code,
            "export interface A {\n}\n\nexport type B = 'X';\n\nexport enum C {\n    X = 'X'\n}\n"
        );
    }

    #[test]
    fn test_header_and_exports_only() {
        let code = CodeFile::new()
            .header("Generated at now.")
            .exports([
                Export::all_from("./a"),
                Export::all_from("./b/c"),
            ])
            .render();

        assert_eq!(
            code,
            "/**\n * Generated at now.\n */\n\nexport * from './a';\nexport * from './b/c';\n"
        );
    }

    #[test]
    fn test_multi_line_header() {
        let code = CodeFile::new()
            .header("line one\n\nline three")
            .add(Interface::new("A"))
            .render();

        assert_eq!(
            code,
            "/**\n * line one\n *\n * line three\n */\n\nexport interface A {\n}\n"
        );
    }
}
