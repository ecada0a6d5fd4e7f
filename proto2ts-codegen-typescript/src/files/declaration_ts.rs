//! One generated declaration file.

use proto2ts_codegen::{
    CacheEntry, TypeCache,
    builder::Renderable,
    generation::ImportCollector,
    paths::{output_to_source, relative_import_path},
};
use proto2ts_config::{Config, EnumStyle};
use proto2ts_core::render_template;
use proto2ts_schema::{NodeId, NodeKind, SchemaGraph};

use crate::{
    Error, Result,
    ast::{EnumDecl, Import, Interface, TypeAlias, TypeExpr},
    code_file::CodeFile,
    hooks::{HookKind, HookOutput, Hooks, InterfaceContext},
    naming::enum_member_key,
    type_mapper::TypeMapper,
    well_known::WellKnownTypes,
};

/// The declarations of every registered type that maps to one output path.
pub struct DeclarationTs<'a> {
    pub graph: &'a SchemaGraph,
    pub config: &'a Config,
    pub cache: &'a TypeCache,
    pub well_known: &'a WellKnownTypes,
    pub hooks: &'a Hooks,
    /// Generated path relative to the output root.
    pub path: &'a str,
    pub entries: &'a [&'a CacheEntry],
    pub timestamp: &'a str,
}

impl DeclarationTs<'_> {
    pub fn render(&self) -> Result<String> {
        let mut imports = ImportCollector::new();
        let mut mapper = TypeMapper::new(
            self.graph,
            self.cache,
            self.well_known,
            self.hooks,
            self.path,
        );

        let mut declarations: Vec<Box<dyn Renderable>> = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            match &self.graph.node(entry.node).kind {
                NodeKind::Enum(_) => declarations.push(self.enum_declaration(entry)),
                NodeKind::Message(_) => {
                    if let Some(interface) = self.interface(&mut mapper, entry, &mut imports)? {
                        declarations.push(Box::new(interface));
                    }
                }
                _ => {}
            }
        }

        let imports = imports.iter().map(|(module, symbols)| {
            symbols.iter().fold(
                Import::new(relative_import_path(self.path, module)).type_only(),
                |import, symbol| import.named(symbol),
            )
        });

        let file = CodeFile::new().imports(imports).add_all(declarations);
        Ok(match self.header() {
            Some(header) => file.header(header).render(),
            None => file.render(),
        })
    }

    fn header(&self) -> Option<String> {
        let template = self.config.file_header_template.as_deref()?;
        let source = output_to_source(self.path);
        Some(render_template(
            template,
            &[
                ("generationTimestamp", self.timestamp),
                ("sourceFile", source.as_str()),
            ],
            false,
        ))
    }

    fn enum_declaration(&self, entry: &CacheEntry) -> Box<dyn Renderable> {
        let values = self
            .graph
            .as_enum(entry.node)
            .map(|e| e.values.as_slice())
            .unwrap_or_default();

        match self.config.enum_style {
            EnumStyle::Enum => {
                let enum_name = self.graph.name(entry.node);
                let decl = values.iter().fold(EnumDecl::new(&entry.generated_name), |decl, value| {
                    decl.member(enum_member_key(enum_name, &value.name), &value.name)
                });
                Box::new(decl)
            }
            EnumStyle::Union => Box::new(TypeAlias::new(
                &entry.generated_name,
                TypeExpr::literals(values.iter().map(|v| v.name.as_str())),
            )),
        }
    }

    /// The interface for a message, or `None` when the interface hook
    /// suppressed it. Imports of a suppressed interface are dropped.
    fn interface(
        &self,
        mapper: &mut TypeMapper<'_>,
        entry: &CacheEntry,
        imports: &mut ImportCollector,
    ) -> Result<Option<Interface>> {
        let mut scratch = ImportCollector::new();
        let mut interface = Interface::new(&entry.generated_name);

        for &field in self.graph.fields(entry.node) {
            if let Some(mut member) = mapper.build_member(field, &mut scratch)? {
                if let Some(comment) = self.type_comment(field) {
                    member.leading_comments.push(comment.to_string());
                }
                interface.members.push(member);
            }
        }

        let Some(hook) = &self.hooks.interface else {
            imports.merge(&scratch);
            return Ok(Some(interface));
        };

        let ctx = InterfaceContext {
            graph: self.graph,
            node: entry.node,
            name: &entry.generated_name,
            default: &interface,
        };
        let subject = || self.graph.full_name(entry.node);

        match hook(&ctx).map_err(|e| Error::hook(HookKind::Interface, subject(), e))? {
            HookOutput::Default => {
                imports.merge(&scratch);
                Ok(Some(interface))
            }
            HookOutput::Override(custom) if custom.name.is_empty() => Err(Error::hook(
                HookKind::Interface,
                subject(),
                "override has an empty interface name",
            )),
            HookOutput::Override(custom) => {
                let used = custom.references();
                scratch.retain(|symbol| used.contains(&symbol));
                imports.merge(&scratch);
                Ok(Some(custom))
            }
            HookOutput::Suppress => {
                tracing::debug!(interface = %entry.generated_name, "interface suppressed by hook");
                Ok(None)
            }
        }
    }

    /// Configured leading comment for a field, keyed by its schema type.
    fn type_comment(&self, field: NodeId) -> Option<&str> {
        let type_name = &self.graph.as_field(field)?.type_name;
        let comments = &self.config.generated_type_comments;
        comments
            .get(type_name.as_str())
            .or_else(|| comments.get(type_name.trim_start_matches('.')))
            .map(String::as_str)
    }
}
