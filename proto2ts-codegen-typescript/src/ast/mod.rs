//! TypeScript AST builders for declarations, imports and exports.
//!
//! These describe TypeScript syntax as values which render through
//! [`CodeBuilder`](proto2ts_codegen::builder::CodeBuilder).

mod enums;
mod exports;
mod imports;
mod interface;
mod types;

pub use enums::EnumDecl;
pub use exports::Export;
pub use imports::Import;
pub use interface::{Interface, Member, TypeParam};
pub use types::{TypeAlias, TypeExpr, quote};
