//! Generate command report data structures.

use proto2ts_core::WriteResult;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output directory from the config.
    pub output_dir: String,
    /// Whether the output directory was removed before writing.
    pub cleaned: bool,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file written to disk.
#[derive(Debug)]
pub struct WrittenFile {
    pub path: String,
    pub result: WriteResult,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(files) => self.render_written(out, files),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, files: &[WrittenFile]) {
        if self.cleaned {
            out.key_value("Cleaned", &self.output_dir);
        }
        if files.is_empty() {
            out.preformatted("No types to generate");
            return;
        }

        out.section(&format!("Generated {} files", files.len()));
        for file in files {
            match file.result {
                WriteResult::Created => out.added_item(&file.path),
                WriteResult::Replaced => out.list_item(&file.path),
                WriteResult::Unchanged => out.list_item(&format!("{} (unchanged)", file.path)),
            }
        }
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(file.content.trim_end());
        out.newline();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::Recorder;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            output_dir: "out".into(),
            cleaned: true,
            result: GenerationResult::Written(vec![
                WrittenFile {
                    path: "out/auth/user.ts".into(),
                    result: WriteResult::Created,
                },
                WrittenFile {
                    path: "out/auth/role.ts".into(),
                    result: WriteResult::Replaced,
                },
                WrittenFile {
                    path: "out/index.ts".into(),
                    result: WriteResult::Unchanged,
                },
            ]),
        };
        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.text(),
            "Cleaned: out
Generated 3 files:
  + out/auth/user.ts
  - out/auth/role.ts
  - out/index.ts (unchanged)"
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            output_dir: "out".into(),
            cleaned: false,
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "out/index.ts".into(),
                content: "export * from './auth/user';\n".into(),
            }]),
        };
        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(out.text(), "── out/index.ts ──\nexport * from './auth/user';\n");
    }
}
