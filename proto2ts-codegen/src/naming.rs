//! Generated type names and file paths.

use proto2ts_config::{Config, DEFAULT_NAME_TEMPLATE};
use proto2ts_core::{Case, render_template};
use proto2ts_schema::{NodeId, NodeKind, SchemaGraph};

use crate::paths::{UNKNOWN_FILE_NAME, source_to_output};

/// Build a generated name for a node.
///
/// The names of the node's ancestors (outermost first, skipping the unnamed
/// root and anything in `ignored_parent_names`) are joined with spaces and
/// substituted for `{{parentNodeNames}}`, the node's own name for
/// `{{typeName}}`. The casing is applied to the whole substituted string, so
/// `auth v1 User` becomes `AuthV1User` in PascalCase.
///
/// ```
/// use proto2ts_codegen::naming::build_name;
/// use proto2ts_core::Case;
/// use proto2ts_schema::SchemaGraph;
///
/// let mut graph = SchemaGraph::new();
/// let app = graph.add_namespace(graph.root(), "app")?;
/// let auth = graph.add_namespace(app, "auth")?;
/// let user = graph.add_message(auth, "User")?;
///
/// let ignored = ["app".to_string()];
/// let name = build_name(&graph, user, "{{parentNodeNames}}{{typeName}}", Case::Pascal, &ignored);
/// assert_eq!(name, "AuthUser");
/// # Ok::<(), proto2ts_schema::Error>(())
/// ```
pub fn build_name(
    graph: &SchemaGraph,
    node: NodeId,
    template: &str,
    case: Case,
    ignored_parent_names: &[String],
) -> String {
    let mut parents: Vec<&str> = graph
        .ancestors(node)
        .map(|id| graph.name(id))
        .filter(|name| !name.is_empty() && !ignored_parent_names.iter().any(|n| n == *name))
        .collect();
    parents.reverse();
    let parents = parents.join(" ");

    let substituted = render_template(
        template,
        &[("parentNodeNames", parents.as_str()), ("typeName", graph.name(node))],
        true,
    );
    case.apply(&substituted)
}

/// Build the generated file path for a node from its (inherited) source file.
pub fn build_output_path(graph: &SchemaGraph, node: NodeId, input_root: &str) -> String {
    match graph.source_file(node) {
        Some(source) => source_to_output(source, input_root),
        None => UNKNOWN_FILE_NAME.to_string(),
    }
}

/// Configuration-independent name used to key the type cache.
pub fn canonical_name(graph: &SchemaGraph, node: NodeId) -> String {
    build_name(graph, node, DEFAULT_NAME_TEMPLATE, Case::Pascal, &[])
}

/// Names nodes according to a [`Config`].
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    graph: &'a SchemaGraph,
    config: &'a Config,
}

impl<'a> NameResolver<'a> {
    pub fn new(graph: &'a SchemaGraph, config: &'a Config) -> Self {
        Self { graph, config }
    }

    /// Generated name of a message or enum, using the enum or type template.
    pub fn type_name(&self, node: NodeId) -> String {
        let (template, case) = match self.graph.node(node).kind {
            NodeKind::Enum(_) => (&self.config.enum_name_template, self.config.enum_name_case),
            _ => (&self.config.type_name_template, self.config.type_name_case),
        };
        build_name(
            self.graph,
            node,
            template,
            case,
            &self.config.type_name_ignore_parent_names,
        )
    }

    pub fn output_path(&self, node: NodeId) -> String {
        build_output_path(self.graph, node, &self.config.input_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> (SchemaGraph, NodeId, NodeId) {
        let mut graph = SchemaGraph::new();
        let company = graph.add_namespace(graph.root(), "company_name").unwrap();
        let services = graph.add_namespace(company, "services").unwrap();
        let auth = graph.add_namespace(services, "auth").unwrap();
        let v1 = graph.add_namespace(auth, "v1").unwrap();
        graph.set_source_file(v1, "company_name/services/auth/v1/user.proto");
        let user = graph.add_message(v1, "User").unwrap();
        let role = graph.add_enum(v1, "Role", [("ROLE_ADMIN", 1)]).unwrap();
        (graph, user, role)
    }

    #[test]
    fn test_build_name_ignores_parents() {
        let (graph, user, _) = graph();
        let ignored = vec!["company_name".to_string(), "services".to_string()];
        assert_eq!(
            build_name(&graph, user, DEFAULT_NAME_TEMPLATE, Case::Pascal, &ignored),
            "AuthV1User"
        );
    }

    #[test]
    fn test_build_name_cases_whole_string() {
        let (graph, user, _) = graph();
        let ignored = vec!["company_name".to_string(), "services".to_string()];
        assert_eq!(
            build_name(&graph, user, DEFAULT_NAME_TEMPLATE, Case::Snake, &ignored),
            "auth_v1_user"
        );
        assert_eq!(
            build_name(&graph, user, "I {{ typeName }}", Case::Constant, &[]),
            "I_USER"
        );
    }

    #[test]
    fn test_canonical_name_keeps_all_parents() {
        let (graph, user, _) = graph();
        assert_eq!(canonical_name(&graph, user), "CompanyNameServicesAuthV1User");
    }

    #[test]
    fn test_output_path() {
        let (mut graph, user, _) = graph();
        assert_eq!(
            build_output_path(&graph, user, "company_name"),
            "services/auth/v1/user.ts"
        );

        let orphan = graph.add_message(graph.root(), "Orphan").unwrap();
        assert_eq!(build_output_path(&graph, orphan, ""), UNKNOWN_FILE_NAME);
    }

    #[test]
    fn test_resolver_uses_enum_template() {
        let (graph, user, role) = graph();
        let config = Config {
            type_name_template: "I{{typeName}}".into(),
            enum_name_template: "{{typeName}}Enum".into(),
            ..Config::default()
        };
        let resolver = NameResolver::new(&graph, &config);
        assert_eq!(resolver.type_name(user), "IUser");
        assert_eq!(resolver.type_name(role), "RoleEnum");
        assert_eq!(
            resolver.output_path(role),
            "company_name/services/auth/v1/user.ts"
        );
    }
}
