//! Check operation - config validation and a summary of the declared types.

use std::path::Path;

use eyre::{Context, Result};
use proto2ts_codegen::TypeCache;
use proto2ts_config::{Config, EnumStyle};
use proto2ts_schema::{NodeId, NodeKind, SchemaGraph};

use crate::reports::{CheckReport, FileSummary, TypeSummary};

/// Execute the check operation.
///
/// The config has already been parsed and validated when this runs. With a
/// schema, the types that would be generated are collected per output file.
pub fn check(config: &Config, config_path: Option<&Path>, schema: Option<&Path>) -> Result<CheckReport> {
    let files = match schema {
        Some(schema) => Some(summarize(config, schema)?),
        None => None,
    };

    Ok(CheckReport {
        config_path: config_path.map(Path::to_path_buf),
        output_path: config.output_path.clone(),
        enum_style: config.enum_style,
        files,
    })
}

fn summarize(config: &Config, schema: &Path) -> Result<Vec<FileSummary>> {
    let graph = SchemaGraph::from_file(schema)
        .wrap_err_with(|| format!("Failed to load schema from {}", schema.display()))?;
    let cache = TypeCache::build(&graph, config).wrap_err("Failed to collect types")?;

    let files = cache
        .entries_by_file()
        .into_iter()
        .map(|(path, entries)| FileSummary {
            path: path.to_string(),
            types: entries
                .iter()
                .map(|entry| TypeSummary {
                    name: entry.generated_name.clone(),
                    keyword: keyword(&graph, entry.node, config.enum_style),
                })
                .collect(),
        })
        .collect();
    Ok(files)
}

fn keyword(graph: &SchemaGraph, node: NodeId, style: EnumStyle) -> &'static str {
    match (&graph.node(node).kind, style) {
        (NodeKind::Enum(_), EnumStyle::Enum) => "enum",
        (NodeKind::Enum(_), EnumStyle::Union) => "type",
        _ => "interface",
    }
}
