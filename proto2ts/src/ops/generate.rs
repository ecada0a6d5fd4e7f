//! Generate operation - TypeScript declarations from a schema descriptor.

use std::{fs, path::Path};

use eyre::{Context, Result};
use proto2ts_codegen_typescript::Generator;
use proto2ts_config::Config;
use proto2ts_core::File;
use proto2ts_schema::SchemaGraph;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenFile};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// JSON schema descriptor to load.
    pub schema: &'a Path,
    /// Whether to remove the output directory first.
    pub clean: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Every file is generated before anything is touched on disk, so a failed
/// run leaves the output directory as it was.
pub fn generate(config: &Config, opts: GenerateOptions) -> Result<GenerateReport> {
    let graph = SchemaGraph::from_file(opts.schema)
        .wrap_err_with(|| format!("Failed to load schema from {}", opts.schema.display()))?;

    let files = Generator::new(config, &graph)
        .generate()
        .wrap_err("Failed to generate TypeScript declarations")?;

    if opts.dry_run {
        let files = files
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        return Ok(GenerateReport {
            output_dir: config.output_path.clone(),
            cleaned: false,
            result: GenerationResult::Preview(files),
        });
    }

    let output_dir = Path::new(&config.output_path);
    let cleaned = opts.clean && output_dir.is_dir();
    if cleaned {
        fs::remove_dir_all(output_dir)
            .wrap_err_with(|| format!("Failed to clean {}", output_dir.display()))?;
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let result = File::new(&file.path, file.content)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", file.path))?;
        written.push(WrittenFile {
            path: file.path,
            result,
        });
    }

    Ok(GenerateReport {
        output_dir: config.output_path.clone(),
        cleaned,
        result: GenerationResult::Written(written),
    })
}

#[cfg(test)]
mod tests {
    use proto2ts_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    const DESCRIPTOR: &str = r#"{
        "nested": {
            "auth": {
                "filename": "auth/user.proto",
                "nested": {
                    "User": { "fields": { "team_id": { "type": "string", "id": 1 } } }
                }
            }
        }
    }"#;

    fn setup() -> (TempDir, Config) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("schema.json"), DESCRIPTOR).unwrap();
        let config = Config {
            output_path: temp.path().join("out").display().to_string(),
            ..Config::default()
        };
        (temp, config)
    }

    #[test]
    fn test_generate_writes_files() {
        let (temp, config) = setup();
        let schema = temp.path().join("schema.json");
        let report = generate(
            &config,
            GenerateOptions {
                schema: &schema,
                clean: false,
                dry_run: false,
            },
        )
        .unwrap();

        let GenerationResult::Written(files) = &report.result else {
            panic!("expected written files");
        };
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.result == WriteResult::Created));

        let user = fs::read_to_string(temp.path().join("out/auth/user.ts")).unwrap();
        assert_eq!(user, "export interface AuthUser {\n    teamId?: string;\n}\n");
        let index = fs::read_to_string(temp.path().join("out/index.ts")).unwrap();
        assert_eq!(index, "export * from './auth/user';\n");
    }

    #[test]
    fn test_regenerate_leaves_files_unchanged() {
        let (temp, config) = setup();
        let schema = temp.path().join("schema.json");
        let opts = || GenerateOptions {
            schema: &schema,
            clean: false,
            dry_run: false,
        };
        generate(&config, opts()).unwrap();
        let report = generate(&config, opts()).unwrap();

        let GenerationResult::Written(files) = &report.result else {
            panic!("expected written files");
        };
        assert!(files.iter().all(|f| f.result == WriteResult::Unchanged));
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let (temp, config) = setup();
        let stale = temp.path().join("out/old.ts");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "export {};\n").unwrap();

        let schema = temp.path().join("schema.json");
        let report = generate(
            &config,
            GenerateOptions {
                schema: &schema,
                clean: true,
                dry_run: false,
            },
        )
        .unwrap();

        assert!(report.cleaned);
        assert!(!stale.exists());
        assert!(temp.path().join("out/auth/user.ts").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (temp, config) = setup();
        let schema = temp.path().join("schema.json");
        let report = generate(
            &config,
            GenerateOptions {
                schema: &schema,
                clean: true,
                dry_run: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(files) = &report.result else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), 2);
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_missing_schema_is_an_error() {
        let (temp, config) = setup();
        let schema = temp.path().join("missing.json");
        let err = generate(
            &config,
            GenerateOptions {
                schema: &schema,
                clean: false,
                dry_run: false,
            },
        )
        .unwrap_err();

        assert!(err.to_string().starts_with("Failed to load schema from"));
    }
}
