//! The TypeScript declaration generator.

use chrono::{DateTime, SecondsFormat, Utc};
use proto2ts_codegen::{
    TypeCache,
    paths::{INDEX_FILE, join_output_path},
};
use proto2ts_config::Config;
use proto2ts_core::render_template;
use proto2ts_schema::SchemaGraph;

use crate::{
    Error, Result,
    files::{DeclarationTs, IndexTs},
    hooks::{FileContext, HookKind, HookOutput, Hooks, TypeLookup},
    well_known::WellKnownTypes,
};

/// A generated file: its path (including the output root) and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Generates TypeScript declaration files from a schema graph.
///
/// Generation is pure: nothing is written to disk, and two runs with the
/// same inputs and timestamp produce identical files.
#[derive(Debug)]
pub struct Generator<'a> {
    config: &'a Config,
    graph: &'a SchemaGraph,
    hooks: Hooks,
    timestamp: Option<DateTime<Utc>>,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config, graph: &'a SchemaGraph) -> Self {
        Self {
            config,
            graph,
            hooks: Hooks::default(),
            timestamp: None,
        }
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Use a fixed generation timestamp instead of the current time.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Generate every declaration file, the index and any custom files.
    ///
    /// Fails without output on a naming collision or a hook error.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>> {
        let cache = TypeCache::build(self.graph, self.config)?;
        let well_known = WellKnownTypes::with_overrides(&self.config.generated_type_overrides);
        let timestamp = self
            .timestamp
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        let mut files = Vec::new();
        let mut emitted = Vec::new();

        for (path, entries) in cache.entries_by_file() {
            let declarations = DeclarationTs {
                graph: self.graph,
                config: self.config,
                cache: &cache,
                well_known: &well_known,
                hooks: &self.hooks,
                path,
                entries: &entries,
                timestamp: &timestamp,
            };
            let content = declarations.render()?;

            let content = match &self.hooks.file {
                None => content,
                Some(hook) => {
                    let ctx = FileContext {
                        path,
                        entries: &entries,
                        content: &content,
                    };
                    match hook(&ctx).map_err(|e| Error::hook(HookKind::File, path, e))? {
                        HookOutput::Default => content,
                        HookOutput::Override(custom) => custom,
                        HookOutput::Suppress => {
                            tracing::debug!(path, "file suppressed by hook");
                            continue;
                        }
                    }
                }
            };

            tracing::debug!(path, types = entries.len(), "generated file");
            files.push(GeneratedFile::new(
                join_output_path(&self.config.output_path, path),
                content,
            ));
            emitted.push(path);
        }

        if self.config.generate_index_file && !emitted.is_empty() {
            let header = self.config.index_header_template.as_deref().map(|template| {
                render_template(template, &[("generationTimestamp", timestamp.as_str())], false)
            });
            let index = IndexTs::new(emitted.iter().copied()).header(header);
            files.push(GeneratedFile::new(
                join_output_path(&self.config.output_path, INDEX_FILE),
                index.render(),
            ));
        }

        if let Some(hook) = &self.hooks.custom_files {
            let custom = hook(self.graph, &TypeLookup::new(&cache))
                .map_err(|e| Error::hook(HookKind::CustomFiles, "schema root", e))?;
            tracing::debug!(files = custom.len(), "custom files added");
            files.extend(custom);
        }

        tracing::info!(
            types = cache.len(),
            files = files.len(),
            "generated TypeScript declarations"
        );
        Ok(files)
    }
}
