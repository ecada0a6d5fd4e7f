//! TypeScript declaration generator for proto2ts.
//!
//! Turns a resolved [`SchemaGraph`](proto2ts_schema::SchemaGraph) into
//! TypeScript files holding one `interface` per message and one `enum` or
//! string-literal union per enum, plus an optional `index.ts`.
//!
//! # Usage
//!
//! ```
//! use proto2ts_codegen_typescript::Generator;
//! use proto2ts_config::Config;
//! use proto2ts_schema::{Field, SchemaGraph};
//!
//! let mut graph = SchemaGraph::new();
//! let auth = graph.add_namespace(graph.root(), "auth")?;
//! graph.set_source_file(auth, "auth/user.proto");
//! let user = graph.add_message(auth, "User")?;
//! graph.add_field(user, "team_id", Field::new("string"))?;
//!
//! let config = Config::default();
//! let files = Generator::new(&config, &graph).generate()?;
//!
//! assert_eq!(files[0].path, "generated_from_proto/auth/user.ts");
//! assert_eq!(files[0].content, "export interface AuthUser {\n    teamId?: string;\n}\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Generation
//!
//! - Messages and enums nested inside a message are inlined where they are
//!   used, everything else is declared in the file of its schema source.
//! - References to types declared in other files become `import type`
//!   statements.
//! - [`Hooks`] can replace or drop interfaces, members and files, and add
//!   custom files.

pub mod ast;
pub mod code_file;
mod error;
pub mod files;
mod generator;
pub mod hooks;
pub mod naming;
pub mod type_mapper;
mod well_known;

pub use error::{Error, Result};
pub use generator::{GeneratedFile, Generator};
pub use hooks::{
    BoxError, FileContext, HookKind, HookOutput, Hooks, InterfaceContext, MemberContext,
    TypeLookup, TypeRef,
};
pub use well_known::WellKnownTypes;
