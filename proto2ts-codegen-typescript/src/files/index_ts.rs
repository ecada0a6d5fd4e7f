//! The aggregating index.ts file.

use proto2ts_codegen::paths::strip_extension;

use crate::{ast::Export, code_file::CodeFile};

/// Re-exports every generated declaration file.
#[derive(Debug, Default)]
pub struct IndexTs<'a> {
    header: Option<String>,
    files: Vec<&'a str>,
}

impl<'a> IndexTs<'a> {
    /// Index over generated file paths, relative to the output root.
    pub fn new(files: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            header: None,
            files: files.into_iter().collect(),
        }
    }

    pub fn header(mut self, header: Option<String>) -> Self {
        self.header = header;
        self
    }

    pub fn render(&self) -> String {
        let exports = self
            .files
            .iter()
            .map(|file| Export::all_from(format!("./{}", strip_extension(file))));

        let file = CodeFile::new().exports(exports);
        match &self.header {
            Some(header) => file.header(header.clone()).render(),
            None => file.render(),
        }
    }
}
