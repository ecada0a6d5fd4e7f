//! JSON schema descriptor loading.
//!
//! The descriptor is the JSON form produced by protobuf.js (`pbjs -t json`):
//! a tree of `nested` objects where the presence of `fields`, `values` or
//! `methods` decides whether a node is a message, an enum or a service.
//!
//! ```json
//! {
//!   "nested": {
//!     "auth": {
//!       "filename": "auth/user.proto",
//!       "nested": {
//!         "User": { "fields": { "name": { "type": "string", "id": 1 } } }
//!       }
//!     }
//!   }
//! }
//! ```

use std::{fs, path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Field, FieldRule, Method, NodeId, Result, SchemaGraph};

#[derive(Debug, Default, Deserialize)]
struct RawNode {
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    nested: IndexMap<String, RawNode>,
    #[serde(default)]
    fields: Option<IndexMap<String, RawField>>,
    #[serde(default)]
    oneofs: IndexMap<String, RawOneOf>,
    #[serde(default)]
    values: Option<IndexMap<String, i32>>,
    #[serde(default)]
    methods: Option<IndexMap<String, RawMethod>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    id: u32,
    #[serde(default)]
    rule: Option<String>,
    #[serde(default)]
    key_type: Option<String>,
    #[serde(default)]
    options: RawFieldOptions,
}

#[derive(Debug, Default, Deserialize)]
struct RawFieldOptions {
    #[serde(default)]
    proto3_optional: bool,
}

#[derive(Debug, Deserialize)]
struct RawOneOf {
    oneof: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMethod {
    request_type: String,
    response_type: String,
    #[serde(default)]
    request_stream: bool,
    #[serde(default)]
    response_stream: bool,
}

/// Load a schema graph from descriptor JSON text.
pub fn from_json(json: &str) -> Result<SchemaGraph> {
    let root: RawNode = serde_json::from_str(json)?;
    Loader::default().load(root)
}

/// Load a schema graph from a descriptor file.
pub fn from_file(path: impl AsRef<Path>) -> Result<SchemaGraph> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&json)
}

impl FromStr for SchemaGraph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        from_json(s)
    }
}

impl SchemaGraph {
    /// Load a schema graph from a descriptor file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        from_file(path)
    }
}

#[derive(Default)]
struct Loader {
    graph: SchemaGraph,
    /// Fields waiting for type resolution, with the message that owns them.
    pending: Vec<(NodeId, NodeId)>,
}

impl Loader {
    fn load(mut self, root: RawNode) -> Result<SchemaGraph> {
        let root_id = self.graph.root();
        if let Some(filename) = root.filename {
            self.graph.set_source_file(root_id, filename);
        }
        self.load_children(root_id, root.nested)?;
        self.resolve()?;

        tracing::debug!(
            nodes = self.graph.len(),
            fields = self.pending.len(),
            "loaded schema descriptor"
        );
        Ok(self.graph)
    }

    fn load_children(&mut self, parent: NodeId, nested: IndexMap<String, RawNode>) -> Result<()> {
        for (name, raw) in nested {
            self.load_node(parent, name, raw)?;
        }
        Ok(())
    }

    fn load_node(&mut self, parent: NodeId, name: String, raw: RawNode) -> Result<()> {
        let id = if let Some(fields) = raw.fields {
            let id = self.graph.add_message(parent, name)?;
            self.load_fields(id, fields)?;
            self.load_oneofs(id, raw.oneofs)?;
            id
        } else if let Some(values) = raw.values {
            self.graph.add_enum(parent, name, values)?
        } else if let Some(methods) = raw.methods {
            let id = self.graph.add_service(parent, name)?;
            for (method_name, method) in methods {
                self.graph.add_method(
                    id,
                    Method {
                        name: method_name,
                        request_type: method.request_type,
                        response_type: method.response_type,
                        request_stream: method.request_stream,
                        response_stream: method.response_stream,
                    },
                )?;
            }
            id
        } else {
            self.graph.add_namespace(parent, name)?
        };

        if let Some(filename) = raw.filename {
            self.graph.set_source_file(id, filename);
        }
        self.load_children(id, raw.nested)
    }

    fn load_fields(&mut self, message: NodeId, fields: IndexMap<String, RawField>) -> Result<()> {
        for (name, raw) in fields {
            let rule = match raw.rule.as_deref() {
                None | Some("optional") => FieldRule::Optional,
                Some("required") => FieldRule::Required,
                Some("repeated") => FieldRule::Repeated,
                Some(other) => {
                    return Err(Error::InvalidRule {
                        field: format!("{}.{}", self.graph.full_name(message), name),
                        rule: other.to_string(),
                    });
                }
            };

            let field = Field {
                type_name: raw.type_name,
                id: raw.id,
                rule,
                proto3_optional: raw.options.proto3_optional,
                ..Field::default()
            };

            let id = match raw.key_type {
                Some(key_type) => self.graph.add_map_field(message, name, key_type, field)?,
                None => self.graph.add_field(message, name, field)?,
            };
            self.pending.push((id, message));
        }
        Ok(())
    }

    fn load_oneofs(&mut self, message: NodeId, oneofs: IndexMap<String, RawOneOf>) -> Result<()> {
        for (name, raw) in oneofs {
            let mut members = Vec::with_capacity(raw.oneof.len());
            for field_name in &raw.oneof {
                let member = self
                    .graph
                    .fields(message)
                    .iter()
                    .copied()
                    .find(|field| self.graph.name(*field) == field_name)
                    .ok_or_else(|| Error::UnknownOneOfMember {
                        message: self.graph.full_name(message),
                        oneof: name.clone(),
                        field: field_name.clone(),
                    })?;
                members.push(member);
            }
            self.graph.add_oneof(message, name, &members)?;
        }
        Ok(())
    }

    fn resolve(&mut self) -> Result<()> {
        for &(field, scope) in &self.pending {
            let Some(type_name) = self.graph.as_field(field).map(|f| f.type_name.clone()) else {
                continue;
            };
            if let Some(target) = self.graph.lookup_type(scope, &type_name) {
                self.graph.resolve_field(field, target)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;

    const AUTH: &str = r#"{
        "nested": {
            "app": {
                "nested": {
                    "v1": {
                        "filename": "app/v1/user.proto",
                        "nested": {
                            "Role": {
                                "values": { "ROLE_UNSPECIFIED": 0, "ROLE_ADMIN": 1 }
                            },
                            "User": {
                                "oneofs": {
                                    "permission": { "oneof": ["full_access", "scope"] }
                                },
                                "fields": {
                                    "team_id": { "type": "string", "id": 1 },
                                    "role": { "type": "Role", "id": 2 },
                                    "tags": { "rule": "repeated", "type": "string", "id": 3 },
                                    "labels": { "keyType": "string", "type": "Label", "id": 4 },
                                    "full_access": { "type": "bool", "id": 5 },
                                    "scope": { "type": "string", "id": 6 },
                                    "nickname": {
                                        "type": "string",
                                        "id": 7,
                                        "options": { "proto3_optional": true }
                                    }
                                },
                                "nested": {
                                    "Label": {
                                        "fields": { "value": { "type": "string", "id": 1 } }
                                    }
                                }
                            },
                            "UserService": {
                                "methods": {
                                    "GetUser": { "requestType": "User", "responseType": "User" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }"#;

    fn field(graph: &SchemaGraph, message: NodeId, name: &str) -> NodeId {
        graph
            .fields(message)
            .iter()
            .copied()
            .find(|id| graph.name(*id) == name)
            .unwrap()
    }

    #[test]
    fn test_load_kinds() {
        let graph: SchemaGraph = AUTH.parse().unwrap();

        let user = graph.find("app.v1.User").unwrap();
        assert!(matches!(graph.node(user).kind, NodeKind::Message(_)));
        assert_eq!(graph.fields(user).len(), 7);

        let role = graph.find(".app.v1.Role").unwrap();
        let values = &graph.as_enum(role).unwrap().values;
        assert_eq!(values[1].name, "ROLE_ADMIN");
        assert_eq!(values[1].number, 1);

        let service = graph.find("app.v1.UserService").unwrap();
        assert!(matches!(&graph.node(service).kind, NodeKind::Service(svc) if svc.methods.len() == 1));
    }

    #[test]
    fn test_source_file_from_namespace() {
        let graph: SchemaGraph = AUTH.parse().unwrap();
        let label = graph.find("app.v1.User.Label").unwrap();
        assert_eq!(graph.source_file(label), Some("app/v1/user.proto"));
    }

    #[test]
    fn test_resolves_references() {
        let graph: SchemaGraph = AUTH.parse().unwrap();
        let user = graph.find("app.v1.User").unwrap();

        let role = field(&graph, user, "role");
        assert_eq!(graph.as_field(role).unwrap().resolved, graph.find("app.v1.Role"));

        let labels = field(&graph, user, "labels");
        assert_eq!(graph.map_key_type(labels), Some("string"));
        assert_eq!(
            graph.as_field(labels).unwrap().resolved,
            graph.find("app.v1.User.Label")
        );

        let team = field(&graph, user, "team_id");
        assert_eq!(graph.as_field(team).unwrap().resolved, None);
    }

    #[test]
    fn test_field_flags_and_oneofs() {
        let graph: SchemaGraph = AUTH.parse().unwrap();
        let user = graph.find("app.v1.User").unwrap();

        assert!(graph.as_field(field(&graph, user, "tags")).unwrap().is_repeated());
        assert!(graph.as_field(field(&graph, user, "nickname")).unwrap().proto3_optional);

        let oneofs = &graph.as_message(user).unwrap().oneofs;
        assert_eq!(oneofs.len(), 1);
        let scope = field(&graph, user, "scope");
        assert_eq!(graph.as_field(scope).unwrap().oneof, Some(oneofs[0]));
    }

    #[test]
    fn test_unknown_oneof_member() {
        let json = r#"{ "nested": { "M": {
            "fields": { "a": { "type": "string", "id": 1 } },
            "oneofs": { "choice": { "oneof": ["a", "b"] } }
        } } }"#;
        let err = from_json(json).unwrap_err();
        assert!(matches!(err, Error::UnknownOneOfMember { ref field, .. } if field == "b"));
    }

    #[test]
    fn test_invalid_rule() {
        let json = r#"{ "nested": { "M": {
            "fields": { "a": { "type": "string", "id": 1, "rule": "sometimes" } }
        } } }"#;
        let err = from_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "field 'M.a' has unknown rule 'sometimes', expected repeated, required or optional"
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(from_json("{ nested"), Err(Error::Json(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let err = from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
