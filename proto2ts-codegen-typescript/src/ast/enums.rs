//! TypeScript enum builder.

use proto2ts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::types::quote;

/// Builder for string-valued TypeScript enums.
///
/// Keys are emitted verbatim, so callers quote keys that are not valid
/// identifiers. The last member carries no trailing comma.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    name: String,
    members: Vec<(String, String)>,
    exported: bool,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            exported: true,
        }
    }

    /// Add a `Key = 'value'` member.
    pub fn member(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((key.into(), value.into()));
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for EnumDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let last = self.members.len().saturating_sub(1);
        let body = self
            .members
            .iter()
            .enumerate()
            .map(|(i, (key, value))| {
                let comma = if i == last { "" } else { "," };
                CodeFragment::line(format!("{} = {}{}", key, quote(value), comma))
            })
            .collect();

        vec![CodeFragment::block(
            format!("{}enum {} {{", export, self.name),
            body,
            Some("}".to_string()),
        )]
    }
}
