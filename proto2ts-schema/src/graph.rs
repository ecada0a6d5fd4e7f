//! Arena-backed schema graph.

use crate::{
    Error, Result,
    node::{Enum, EnumValue, Field, MapField, Message, Method, Namespace, Node, NodeId, NodeKind, OneOf, Service},
};

/// A fully-loaded schema graph.
///
/// Nodes are stored in an arena and never removed, so a [`NodeId`] stays valid
/// for the lifetime of the graph. The root is an unnamed namespace.
///
/// # Example
///
/// ```
/// use proto2ts_schema::{Field, SchemaGraph};
///
/// let mut graph = SchemaGraph::new();
/// let v1 = graph.add_namespace(graph.root(), "v1")?;
/// let user = graph.add_message(v1, "User")?;
/// graph.add_field(user, "team_id", Field::new("string").id(1))?;
///
/// assert_eq!(graph.full_name(user), "v1.User");
/// # Ok::<(), proto2ts_schema::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SchemaGraph {
    nodes: Vec<Node>,
}

impl Default for SchemaGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaGraph {
    /// Create a graph containing only the root namespace.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: String::new(),
                parent: None,
                source_file: None,
                kind: NodeKind::Namespace(Namespace::default()),
            }],
        }
    }

    /// The unnamed root namespace.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Get a node by id.
    ///
    /// # Panics
    ///
    /// Panics if the id was not produced by this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Get a node by id, if it exists.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Iterate over every node id in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Simple name of a node.
    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Walk the ownership chain from the immediate parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    /// Source file of the node, inherited from the nearest ancestor that has one.
    pub fn source_file(&self, id: NodeId) -> Option<&str> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find_map(|current| self.node(current).source_file.as_deref())
    }

    /// Dotted name from the root, e.g. `app.services.auth.v1.User`.
    pub fn full_name(&self, id: NodeId) -> String {
        let mut segments: Vec<&str> = std::iter::once(id)
            .chain(self.ancestors(id))
            .map(|current| self.name(current))
            .filter(|name| !name.is_empty())
            .collect();
        segments.reverse();
        segments.join(".")
    }

    /// Child declarations of a namespace, message or service.
    ///
    /// For messages these are the nested types, not the fields.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.node(id).kind {
            NodeKind::Namespace(ns) => &ns.children,
            NodeKind::Message(msg) => &msg.nested,
            NodeKind::Service(svc) => &svc.nested,
            NodeKind::Enum(_) | NodeKind::Field(_) | NodeKind::MapField(_) | NodeKind::OneOf(_) => {
                &[]
            }
        }
    }

    pub fn as_message(&self, id: NodeId) -> Option<&Message> {
        match &self.node(id).kind {
            NodeKind::Message(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn as_enum(&self, id: NodeId) -> Option<&Enum> {
        match &self.node(id).kind {
            NodeKind::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_oneof(&self, id: NodeId) -> Option<&OneOf> {
        match &self.node(id).kind {
            NodeKind::OneOf(group) => Some(group),
            _ => None,
        }
    }

    /// Field data of a plain or map field.
    pub fn as_field(&self, id: NodeId) -> Option<&Field> {
        match &self.node(id).kind {
            NodeKind::Field(field) => Some(field),
            NodeKind::MapField(map) => Some(&map.field),
            _ => None,
        }
    }

    /// Key type of a map field.
    pub fn map_key_type(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).kind {
            NodeKind::MapField(map) => Some(&map.key_type),
            _ => None,
        }
    }

    /// Fields of a message in declaration order (empty for other kinds).
    pub fn fields(&self, id: NodeId) -> &[NodeId] {
        self.as_message(id).map_or(&[], |msg| &msg.fields)
    }

    /// Returns true if the node's immediate parent is a message.
    pub fn is_nested_in_message(&self, id: NodeId) -> bool {
        self.parent(id)
            .is_some_and(|parent| self.as_message(parent).is_some())
    }

    // =========================================================================
    // Construction
    // =========================================================================

    fn push(&mut self, parent: Option<NodeId>, name: String, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            parent,
            source_file: None,
            kind,
        });
        id
    }

    fn invalid_parent(&self, parent: NodeId, child: &str, child_kind: &'static str) -> Error {
        Error::InvalidParent {
            parent: self.full_name(parent),
            parent_kind: self.node(parent).kind.as_str(),
            child: child.to_string(),
            child_kind,
        }
    }

    /// Attach a declaration (namespace, message, enum, service) to a container.
    fn add_declaration(&mut self, parent: NodeId, name: String, kind: NodeKind) -> Result<NodeId> {
        let allowed = match (&self.node(parent).kind, &kind) {
            (NodeKind::Namespace(_), _) => true,
            (NodeKind::Message(_) | NodeKind::Service(_), kind) => kind.is_type(),
            _ => false,
        };
        if !allowed {
            return Err(self.invalid_parent(parent, &name, kind.as_str()));
        }

        let id = self.push(Some(parent), name, kind);
        match &mut self.nodes[parent.0].kind {
            NodeKind::Namespace(ns) => ns.children.push(id),
            NodeKind::Message(msg) => msg.nested.push(id),
            NodeKind::Service(svc) => svc.nested.push(id),
            _ => unreachable!("parent kind checked above"),
        }
        Ok(id)
    }

    /// Add a namespace under the root or another namespace.
    pub fn add_namespace(&mut self, parent: NodeId, name: impl Into<String>) -> Result<NodeId> {
        self.add_declaration(parent, name.into(), NodeKind::Namespace(Namespace::default()))
    }

    /// Add a message under a namespace, service or message.
    pub fn add_message(&mut self, parent: NodeId, name: impl Into<String>) -> Result<NodeId> {
        self.add_declaration(parent, name.into(), NodeKind::Message(Message::default()))
    }

    /// Add an enum with its values.
    pub fn add_enum<I, S>(&mut self, parent: NodeId, name: impl Into<String>, values: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(name, number)| EnumValue::new(name, number))
            .collect();
        self.add_declaration(parent, name.into(), NodeKind::Enum(Enum { values }))
    }

    /// Add a service under a namespace.
    pub fn add_service(&mut self, parent: NodeId, name: impl Into<String>) -> Result<NodeId> {
        self.add_declaration(parent, name.into(), NodeKind::Service(Service::default()))
    }

    /// Add a method to a service.
    pub fn add_method(&mut self, service: NodeId, method: Method) -> Result<()> {
        match &mut self.nodes[service.0].kind {
            NodeKind::Service(svc) => {
                svc.methods.push(method);
                Ok(())
            }
            _ => Err(self.invalid_parent(service, &method.name, "method")),
        }
    }

    fn add_field_node(&mut self, message: NodeId, name: String, kind: NodeKind) -> Result<NodeId> {
        if self.as_message(message).is_none() {
            return Err(self.invalid_parent(message, &name, kind.as_str()));
        }

        let id = self.push(Some(message), name, kind);
        if let NodeKind::Message(msg) = &mut self.nodes[message.0].kind {
            msg.fields.push(id);
        }
        Ok(id)
    }

    /// Add a field to a message.
    pub fn add_field(&mut self, message: NodeId, name: impl Into<String>, field: Field) -> Result<NodeId> {
        self.add_field_node(message, name.into(), NodeKind::Field(field))
    }

    /// Add a `map<key_type, field.type_name>` field to a message.
    pub fn add_map_field(
        &mut self,
        message: NodeId,
        name: impl Into<String>,
        key_type: impl Into<String>,
        field: Field,
    ) -> Result<NodeId> {
        let map = MapField {
            key_type: key_type.into(),
            field,
        };
        self.add_field_node(message, name.into(), NodeKind::MapField(map))
    }

    /// Group existing fields of a message into a oneof.
    pub fn add_oneof(&mut self, message: NodeId, name: impl Into<String>, fields: &[NodeId]) -> Result<NodeId> {
        let name = name.into();
        if self.as_message(message).is_none() {
            return Err(self.invalid_parent(message, &name, "oneof"));
        }

        for &field in fields {
            let owned = self.parent(field) == Some(message) && self.as_field(field).is_some();
            if !owned {
                return Err(Error::UnknownOneOfMember {
                    message: self.full_name(message),
                    oneof: name,
                    field: self.full_name(field),
                });
            }
            if let Some(existing) = self.as_field(field).and_then(|f| f.oneof) {
                return Err(Error::AlreadyInOneOf {
                    field: self.full_name(field),
                    oneof: self.name(existing).to_string(),
                });
            }
        }

        let id = self.push(
            Some(message),
            name,
            NodeKind::OneOf(OneOf {
                fields: fields.to_vec(),
            }),
        );
        for &field in fields {
            if let Some(data) = self.field_mut(field) {
                data.oneof = Some(id);
            }
        }
        if let NodeKind::Message(msg) = &mut self.nodes[message.0].kind {
            msg.oneofs.push(id);
        }
        Ok(id)
    }

    fn field_mut(&mut self, id: NodeId) -> Option<&mut Field> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Field(field) => Some(field),
            NodeKind::MapField(map) => Some(&mut map.field),
            _ => None,
        }
    }

    /// Set the source file a node was declared in.
    pub fn set_source_file(&mut self, id: NodeId, file: impl Into<String>) {
        self.nodes[id.0].source_file = Some(file.into());
    }

    /// Point a field at the message or enum its type name refers to.
    pub fn resolve_field(&mut self, field: NodeId, target: NodeId) -> Result<()> {
        let target_kind = &self.node(target).kind;
        if !target_kind.is_type() {
            return Err(Error::NotAType {
                name: self.full_name(target),
                kind: target_kind.as_str(),
            });
        }

        match self.field_mut(field) {
            Some(data) => {
                data.resolved = Some(target);
                Ok(())
            }
            None => Err(Error::NotAType {
                name: self.full_name(field),
                kind: self.node(field).kind.as_str(),
            }),
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Follow a dotted path of child names starting at `start`.
    fn find_from(&self, start: NodeId, path: &str) -> Option<NodeId> {
        path.split('.').try_fold(start, |current, segment| {
            self.children(current)
                .iter()
                .copied()
                .find(|child| self.name(*child) == segment)
        })
    }

    /// Find a node by its full dotted name (a leading `.` is allowed).
    pub fn find(&self, full_name: &str) -> Option<NodeId> {
        let path = full_name.strip_prefix('.').unwrap_or(full_name);
        if path.is_empty() {
            return Some(self.root());
        }
        self.find_from(self.root(), path)
    }

    /// Resolve a type name the way protobuf scoping does.
    ///
    /// Absolute names (leading `.`) are looked up from the root. Relative
    /// names are tried in `scope`, then in each enclosing scope up to the
    /// root. Only messages and enums are returned.
    pub fn lookup_type(&self, scope: NodeId, type_name: &str) -> Option<NodeId> {
        let is_type = |id: &NodeId| self.node(*id).kind.is_type();

        if let Some(absolute) = type_name.strip_prefix('.') {
            return self.find_from(self.root(), absolute).filter(is_type);
        }

        std::iter::once(scope)
            .chain(self.ancestors(scope))
            .find_map(|current| self.find_from(current, type_name).filter(is_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_graph() -> (SchemaGraph, NodeId, NodeId) {
        let mut graph = SchemaGraph::new();
        let app = graph.add_namespace(graph.root(), "app").unwrap();
        let v1 = graph.add_namespace(app, "v1").unwrap();
        graph.set_source_file(v1, "app/v1/user.proto");
        let user = graph.add_message(v1, "User").unwrap();
        (graph, v1, user)
    }

    #[test]
    fn test_full_name_and_ancestors() {
        let (graph, v1, user) = auth_graph();
        assert_eq!(graph.full_name(user), "app.v1.User");

        let ancestors: Vec<_> = graph.ancestors(user).collect();
        assert_eq!(ancestors.len(), 3);
        assert_eq!(ancestors[0], v1);
        assert_eq!(ancestors[2], graph.root());
    }

    #[test]
    fn test_source_file_inherited() {
        let (mut graph, _, user) = auth_graph();
        let profile = graph.add_message(user, "Profile").unwrap();
        assert_eq!(graph.source_file(profile), Some("app/v1/user.proto"));
        assert_eq!(graph.source_file(graph.root()), None);
    }

    #[test]
    fn test_field_cannot_hold_types() {
        let (mut graph, v1, user) = auth_graph();
        let field = graph.add_field(user, "id", Field::new("string")).unwrap();

        assert!(matches!(
            graph.add_message(field, "Nope"),
            Err(Error::InvalidParent { .. })
        ));
        assert!(matches!(
            graph.add_field(v1, "loose", Field::new("string")),
            Err(Error::InvalidParent { .. })
        ));
    }

    #[test]
    fn test_messages_cannot_hold_namespaces() {
        let (mut graph, _, user) = auth_graph();
        assert!(graph.add_namespace(user, "inner").is_err());
    }

    #[test]
    fn test_oneof_membership() {
        let (mut graph, _, user) = auth_graph();
        let a = graph.add_field(user, "full_access", Field::new("bool")).unwrap();
        let b = graph.add_field(user, "scope", Field::new("string")).unwrap();
        let group = graph.add_oneof(user, "permission", &[a, b]).unwrap();

        assert_eq!(graph.as_field(a).unwrap().oneof, Some(group));
        assert_eq!(graph.as_oneof(group).unwrap().fields, vec![a, b]);
        assert!(matches!(
            graph.add_oneof(user, "again", &[a]),
            Err(Error::AlreadyInOneOf { .. })
        ));
    }

    #[test]
    fn test_lookup_type_scoping() {
        let (mut graph, v1, user) = auth_graph();
        let role = graph.add_enum(v1, "Role", [("ROLE_UNSPECIFIED", 0)]).unwrap();
        let inner = graph.add_message(user, "Role").unwrap();

        // the nested declaration shadows the package-level one
        assert_eq!(graph.lookup_type(user, "Role"), Some(inner));
        assert_eq!(graph.lookup_type(user, ".app.v1.Role"), Some(role));
        assert_eq!(graph.lookup_type(user, "v1.Role"), Some(role));
        assert_eq!(graph.lookup_type(user, "string"), None);
        // namespaces are not types
        assert_eq!(graph.lookup_type(user, "app"), None);
    }

    #[test]
    fn test_resolve_field_rejects_non_types() {
        let (mut graph, v1, user) = auth_graph();
        let field = graph.add_field(user, "role", Field::new("Role")).unwrap();
        assert!(matches!(
            graph.resolve_field(field, v1),
            Err(Error::NotAType { .. })
        ));
    }
}
