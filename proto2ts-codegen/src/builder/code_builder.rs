//! Text output for [`CodeFragment`]s.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated code, indenting nested blocks.
///
/// # Example
///
/// ```
/// use proto2ts_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::default();
/// builder.push(CodeFragment::block(
///     "export interface User {",
///     vec![CodeFragment::line("id?: string;")],
///     Some("}".to_string()),
/// ));
///
/// assert_eq!(builder.build(), "export interface User {\n    id?: string;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.buffer.push_str(&self.indent.repeat(self.depth));
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a JSDoc block. Empty lines of `text` become a bare ` *`.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        self.push_line("/**");
        for line in text.lines() {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */")
    }

    pub fn push(&mut self, fragment: CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(s) => self.push_line(&s),
            CodeFragment::Blank => self.push_blank(),
            CodeFragment::JsDoc(text) => self.push_jsdoc(&text),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.depth += 1;
                for f in body {
                    self.push(f);
                }
                self.depth -= 1;
                match close {
                    Some(close) => self.push_line(&close),
                    None => self,
                }
            }
        }
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.push(fragment);
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsdoc_block() {
        let mut builder = CodeBuilder::default();
        builder.push(CodeFragment::jsdoc("DO NOT EDIT!\n\nGenerated from user.proto"));
        assert_eq!(
            builder.build(),
            "/**\n * DO NOT EDIT!\n *\n * Generated from user.proto\n */\n"
        );
    }

    #[test]
    fn test_nested_blocks_with_two_spaces() {
        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder.push(CodeFragment::block(
            "export interface User {",
            vec![
                CodeFragment::line("// start oneof \"permission\""),
                CodeFragment::block("profile?: {", vec![CodeFragment::line("name?: string;")], Some("};".into())),
            ],
            Some("}".into()),
        ));
        assert_eq!(
            builder.build(),
            "export interface User {\n  // start oneof \"permission\"\n  profile?: {\n    name?: string;\n  };\n}\n"
        );
    }

    #[test]
    fn test_empty_line_has_no_indent() {
        let mut builder = CodeBuilder::default();
        builder.push(CodeFragment::block("{", vec![CodeFragment::line("")], None));
        assert_eq!(builder.build(), "{\n\n");
    }
}
