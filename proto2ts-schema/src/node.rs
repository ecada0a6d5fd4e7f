//! Schema node definitions.

use std::fmt;

/// Stable identity of a node inside a [`SchemaGraph`](crate::SchemaGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the graph arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the schema graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// Simple (unqualified) name.
    pub name: String,
    /// Owning parent; `None` only for the graph root.
    pub parent: Option<NodeId>,
    /// Source file this node was declared in, when known.
    ///
    /// Use [`SchemaGraph::source_file`](crate::SchemaGraph::source_file) to
    /// get the identifier inherited from the nearest ancestor.
    pub source_file: Option<String>,
    /// Variant-specific data.
    pub kind: NodeKind,
}

/// The variants a schema node can take.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Namespace(Namespace),
    Message(Message),
    Enum(Enum),
    Field(Field),
    MapField(MapField),
    OneOf(OneOf),
    Service(Service),
}

impl NodeKind {
    /// Human readable variant name, used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Namespace(_) => "namespace",
            NodeKind::Message(_) => "message",
            NodeKind::Enum(_) => "enum",
            NodeKind::Field(_) => "field",
            NodeKind::MapField(_) => "map field",
            NodeKind::OneOf(_) => "oneof",
            NodeKind::Service(_) => "service",
        }
    }

    /// Returns true for messages and enums, the kinds that become types.
    pub fn is_type(&self) -> bool {
        matches!(self, NodeKind::Message(_) | NodeKind::Enum(_))
    }
}

/// A package segment (or the unnamed root).
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    pub children: Vec<NodeId>,
}

/// A message type.
#[derive(Debug, Clone, Default)]
pub struct Message {
    /// Fields in declaration order.
    pub fields: Vec<NodeId>,
    /// Oneof groups in declaration order.
    pub oneofs: Vec<NodeId>,
    /// Messages and enums declared inside this message.
    pub nested: Vec<NodeId>,
}

/// An enum type.
#[derive(Debug, Clone, Default)]
pub struct Enum {
    /// Values in declaration order.
    pub values: Vec<EnumValue>,
}

/// A single enum value; its name doubles as the emitted string constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self {
            name: name.into(),
            number,
        }
    }
}

/// Field cardinality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldRule {
    /// Singular field that may be absent.
    #[default]
    Optional,
    /// Singular field that must be present.
    Required,
    /// Repeated field.
    Repeated,
}

/// A message field.
#[derive(Debug, Clone, Default)]
pub struct Field {
    /// Type name as written in the schema (`string`, `google.protobuf.Timestamp`, `Role`).
    pub type_name: String,
    /// Field number.
    pub id: u32,
    pub rule: FieldRule,
    /// Set for proto3 `optional` fields, which are modelled as a synthetic
    /// single-member oneof but must be treated as a plain optional field.
    pub proto3_optional: bool,
    /// The message or enum the type name refers to, once resolved.
    pub resolved: Option<NodeId>,
    /// The oneof group this field belongs to.
    pub oneof: Option<NodeId>,
}

impl Field {
    /// Create a singular optional field of the given type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Set the field number.
    pub fn id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Mark the field as repeated.
    pub fn repeated(mut self) -> Self {
        self.rule = FieldRule::Repeated;
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.rule = FieldRule::Required;
        self
    }

    /// Mark the field as a proto3 `optional` field.
    pub fn proto3_optional(mut self) -> Self {
        self.proto3_optional = true;
        self
    }

    pub fn is_repeated(&self) -> bool {
        self.rule == FieldRule::Repeated
    }

    pub fn is_required(&self) -> bool {
        self.rule == FieldRule::Required
    }
}

/// A `map<K, V>` field. The value type is the inner field's type.
#[derive(Debug, Clone, Default)]
pub struct MapField {
    pub key_type: String,
    pub field: Field,
}

/// A oneof group.
#[derive(Debug, Clone, Default)]
pub struct OneOf {
    /// Member fields in declaration order.
    pub fields: Vec<NodeId>,
}

/// A service definition.
#[derive(Debug, Clone, Default)]
pub struct Service {
    pub methods: Vec<Method>,
    /// Messages and enums declared under the service.
    pub nested: Vec<NodeId>,
}

/// An RPC method. Informational only; methods produce no declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub request_type: String,
    pub response_type: String,
    pub request_stream: bool,
    pub response_stream: bool,
}
