//! Schema graph types for the proto2ts type generator.
//!
//! This crate provides the in-memory representation of a fully-resolved
//! protocol buffer schema: namespaces, messages, enums, fields, oneof groups
//! and services, stored in an arena and addressed by [`NodeId`].
//!
//! # Architecture
//!
//! ```text
//! descriptor.json → descriptor (loading + type resolution) → SchemaGraph → codegen
//! ```
//!
//! The graph is built once and only read afterwards. Parent links are plain
//! back-references, so any node can walk its ownership chain to the root.

pub mod descriptor;
mod error;
mod graph;
mod node;

pub use error::{Error, Result};
pub use graph::SchemaGraph;
pub use node::{
    Enum, EnumValue, Field, FieldRule, MapField, Message, Method, Namespace, Node, NodeId,
    NodeKind, OneOf, Service,
};
