//! Mapping of schema fields to TypeScript types and members.

use proto2ts_codegen::{TypeCache, generation::ImportCollector};
use proto2ts_schema::{Field, NodeId, SchemaGraph};

use crate::{
    Error, Result,
    ast::{Member, TypeExpr},
    hooks::{HookKind, HookOutput, Hooks, MemberContext},
    naming::member_name,
    well_known::WellKnownTypes,
};

/// Maps the fields of the messages declared in one output file.
///
/// Messages and enums that are not registered (types nested in a message)
/// are inlined at every use; registered types are referenced by name and
/// imported unless they live in the same file.
pub struct TypeMapper<'a> {
    graph: &'a SchemaGraph,
    cache: &'a TypeCache,
    well_known: &'a WellKnownTypes,
    hooks: &'a Hooks,
    current_file: &'a str,
    /// Messages currently being inlined, outermost first.
    inlining: Vec<NodeId>,
}

impl<'a> TypeMapper<'a> {
    pub fn new(
        graph: &'a SchemaGraph,
        cache: &'a TypeCache,
        well_known: &'a WellKnownTypes,
        hooks: &'a Hooks,
        current_file: &'a str,
    ) -> Self {
        Self {
            graph,
            cache,
            well_known,
            hooks,
            current_file,
            inlining: Vec::new(),
        }
    }

    /// The TypeScript type of a field, including `[]` for repeated fields.
    pub fn map_field_type(&mut self, field_id: NodeId, imports: &mut ImportCollector) -> Result<TypeExpr> {
        let graph = self.graph;
        let Some(field) = graph.as_field(field_id) else {
            return Ok(TypeExpr::any());
        };

        let ty = match graph.map_key_type(field_id) {
            Some(key_type) => {
                let key = self
                    .well_known
                    .get(key_type)
                    .map(TypeExpr::raw)
                    .unwrap_or_else(TypeExpr::any);
                let value = self.map_base_type(field_id, field, imports)?;
                TypeExpr::record(key, value)
            }
            None => self.map_base_type(field_id, field, imports)?,
        };

        Ok(if field.is_repeated() { ty.array() } else { ty })
    }

    fn map_base_type(
        &mut self,
        field_id: NodeId,
        field: &Field,
        imports: &mut ImportCollector,
    ) -> Result<TypeExpr> {
        let cache = self.cache;
        let registered = field.resolved.and_then(|target| cache.lookup(target));

        if let (Some(target), None) = (field.resolved, registered) {
            if let Some(values) = self.graph.as_enum(target) {
                return Ok(TypeExpr::literals(values.values.iter().map(|v| v.name.as_str())));
            }
        }

        if let Some(ts) = self.well_known.get(&field.type_name) {
            return Ok(TypeExpr::raw(ts));
        }

        if let (Some(target), None) = (field.resolved, registered) {
            if self.graph.as_message(target).is_some() {
                return self.inline_message(field_id, target, imports);
            }
        }

        if let Some(entry) = registered {
            if entry.generated_path != self.current_file {
                imports.add(&entry.generated_path, &entry.generated_name);
            }
            return Ok(TypeExpr::reference(&entry.generated_name));
        }

        tracing::warn!(
            field = %self.graph.full_name(field_id),
            type_name = %field.type_name,
            "no TypeScript type for field, using any"
        );
        Ok(TypeExpr::any())
    }

    fn inline_message(
        &mut self,
        field_id: NodeId,
        message: NodeId,
        imports: &mut ImportCollector,
    ) -> Result<TypeExpr> {
        if self.inlining.contains(&message) {
            tracing::warn!(
                field = %self.graph.full_name(field_id),
                message = %self.graph.full_name(message),
                "recursive nested message, using any"
            );
            return Ok(TypeExpr::any());
        }

        self.inlining.push(message);
        let members = self.build_members(message, imports);
        self.inlining.pop();

        Ok(TypeExpr::Object(members?))
    }

    /// Members for every field of a message, in declaration order.
    pub fn build_members(&mut self, message: NodeId, imports: &mut ImportCollector) -> Result<Vec<Member>> {
        let graph = self.graph;
        let mut members = Vec::new();
        for &field in graph.fields(message) {
            if let Some(member) = self.build_member(field, imports)? {
                members.push(member);
            }
        }
        Ok(members)
    }

    /// The member for one field, after the member hook ran.
    ///
    /// Returns `None` when the hook suppressed the member; the imports the
    /// member needed are dropped with it.
    pub fn build_member(&mut self, field_id: NodeId, imports: &mut ImportCollector) -> Result<Option<Member>> {
        let graph = self.graph;
        let Some(field) = graph.as_field(field_id) else {
            return Ok(None);
        };

        let mut scratch = ImportCollector::new();
        let ty = self.map_field_type(field_id, &mut scratch)?;

        let mut member = Member::new(member_name(graph.name(field_id)), ty);
        if !field.is_required() || field.proto3_optional {
            member = member.optional();
        }
        if let Some(oneof) = field.oneof.filter(|_| !field.proto3_optional) {
            let group = graph.name(oneof);
            let fields = graph.as_oneof(oneof).map(|o| o.fields.as_slice()).unwrap_or_default();
            if fields.first() == Some(&field_id) {
                member = member.leading_comment(format!("start oneof \"{}\"", group));
            }
            if fields.last() == Some(&field_id) {
                member = member.trailing_comment(format!("end oneof \"{}\"", group));
            }
        }

        let Some(hook) = &self.hooks.member else {
            imports.merge(&scratch);
            return Ok(Some(member));
        };

        let ctx = MemberContext {
            graph,
            field: field_id,
            message: graph.parent(field_id).unwrap_or(graph.root()),
            default: &member,
        };
        let subject = || graph.full_name(field_id);

        match hook(&ctx).map_err(|e| Error::hook(HookKind::Member, subject(), e))? {
            HookOutput::Default => {
                imports.merge(&scratch);
                Ok(Some(member))
            }
            HookOutput::Override(custom) if custom.name.is_empty() => Err(Error::hook(
                HookKind::Member,
                subject(),
                "override has an empty member name",
            )),
            HookOutput::Override(custom) => {
                let used = custom.references();
                scratch.retain(|symbol| used.contains(&symbol));
                imports.merge(&scratch);
                Ok(Some(custom))
            }
            HookOutput::Suppress => Ok(None),
        }
    }
}
