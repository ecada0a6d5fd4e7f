//! Check command report data structures.

use std::path::PathBuf;

use proto2ts_config::EnumStyle;

use super::output::{Output, Report};

/// Report data from config validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file, `None` when running on defaults.
    pub config_path: Option<PathBuf>,
    pub output_path: String,
    pub enum_style: EnumStyle,
    /// Declared types per output file, when a schema was given.
    pub files: Option<Vec<FileSummary>>,
}

/// The types generated into one output file.
#[derive(Debug)]
pub struct FileSummary {
    pub path: String,
    pub types: Vec<TypeSummary>,
}

#[derive(Debug)]
pub struct TypeSummary {
    pub name: String,
    /// `interface`, `enum` or `type`.
    pub keyword: &'static str,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.config_path {
            Some(path) => out.preformatted(&format!("✓ {} is valid", path.display())),
            None => out.preformatted("✓ no proto2ts.toml found, using defaults"),
        }
        out.key_value("Output path", &self.output_path);
        out.key_value("Enum style", self.enum_style.as_str());

        let Some(files) = &self.files else {
            return;
        };
        for file in files {
            out.newline();
            out.section(&file.path);
            for ty in &file.types {
                out.list_item(&format!("{} {}", ty.keyword, ty.name));
            }
        }
    }
}
