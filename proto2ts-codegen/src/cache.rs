//! The registry of named types.
//!
//! Generation runs in two passes. [`TypeCache::collect`] walks the whole graph
//! first and registers every top-level message and enum with its generated
//! name and file; only then are files rendered, so a reference to a type in
//! another file can always be resolved.

use std::collections::HashMap;

use indexmap::IndexMap;
use proto2ts_config::Config;
use proto2ts_schema::{NodeId, NodeKind, SchemaGraph};

use crate::{
    Error, Result,
    naming::{NameResolver, canonical_name},
};

/// Identity of a registered type: its source file and canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub source_file: String,
    pub name: String,
}

impl CacheKey {
    pub fn for_node(graph: &SchemaGraph, node: NodeId) -> Self {
        Self {
            source_file: graph.source_file(node).unwrap_or_default().to_string(),
            name: canonical_name(graph, node),
        }
    }
}

/// A registered message or enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub node: NodeId,
    pub generated_name: String,
    /// Generated file path, relative to the output root.
    pub generated_path: String,
}

/// Registry of named types, in registration order.
#[derive(Debug, Clone, Default)]
pub struct TypeCache {
    entries: IndexMap<CacheKey, CacheEntry>,
    by_node: HashMap<NodeId, usize>,
}

impl TypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cache holding every named type of the graph.
    pub fn build(graph: &SchemaGraph, config: &Config) -> Result<Self> {
        let mut cache = Self::new();
        cache.collect(graph, config)?;
        Ok(cache)
    }

    /// Register every top-level message and enum reachable from the root.
    ///
    /// Namespaces listed in `namespaces_to_ignore` are skipped with their
    /// whole subtree. Types declared inside a message are never registered.
    /// Running this again on the same graph changes nothing.
    pub fn collect(&mut self, graph: &SchemaGraph, config: &Config) -> Result<()> {
        let names = NameResolver::new(graph, config);
        self.visit(graph, config, &names, graph.root())?;
        tracing::debug!(types = self.len(), "collected named types");
        Ok(())
    }

    fn visit(
        &mut self,
        graph: &SchemaGraph,
        config: &Config,
        names: &NameResolver<'_>,
        node: NodeId,
    ) -> Result<()> {
        match &graph.node(node).kind {
            NodeKind::Namespace(_) => {
                if node != graph.root() && config.ignores_namespace(graph.name(node)) {
                    tracing::debug!(namespace = %graph.full_name(node), "skipping ignored namespace");
                    return Ok(());
                }
                for &child in graph.children(node) {
                    self.visit(graph, config, names, child)?;
                }
            }
            NodeKind::Service(_) => {
                for &child in graph.children(node) {
                    self.visit(graph, config, names, child)?;
                }
            }
            NodeKind::Message(_) | NodeKind::Enum(_) if !graph.is_nested_in_message(node) => {
                let entry = CacheEntry {
                    node,
                    generated_name: names.type_name(node),
                    generated_path: names.output_path(node),
                };
                self.insert(CacheKey::for_node(graph, node), entry, graph)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Register an entry.
    ///
    /// Re-registering the same node under its key is a no-op; a different
    /// node under an existing key is a [`Error::DuplicateType`].
    pub fn insert(&mut self, key: CacheKey, entry: CacheEntry, graph: &SchemaGraph) -> Result<()> {
        if let Some(existing) = self.entries.get(&key) {
            if existing.node == entry.node {
                return Ok(());
            }
            return Err(Error::DuplicateType {
                name: key.name,
                file: key.source_file,
                first: graph.full_name(existing.node),
                second: graph.full_name(entry.node),
            });
        }

        tracing::debug!(
            name = %entry.generated_name,
            path = %entry.generated_path,
            "registered type"
        );
        let node = entry.node;
        let (index, _) = self.entries.insert_full(key, entry);
        self.by_node.insert(node, index);
        Ok(())
    }

    /// Entry for a node, if the node is a registered type.
    pub fn lookup(&self, node: NodeId) -> Option<&CacheEntry> {
        self.by_node
            .get(&node)
            .and_then(|&index| self.entries.get_index(index))
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.by_node.contains_key(&node)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CacheEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries grouped by generated file, files in first-seen order.
    pub fn entries_by_file(&self) -> IndexMap<&str, Vec<&CacheEntry>> {
        let mut files: IndexMap<&str, Vec<&CacheEntry>> = IndexMap::new();
        for entry in self.entries.values() {
            files.entry(entry.generated_path.as_str()).or_default().push(entry);
        }
        files
    }
}
