//! Core utilities and types for the proto2ts type generator.
//!
//! This crate provides the string casing rules, template substitution and
//! file writing primitives shared by the rest of the workspace.

mod case;
mod file;
mod template;

pub use case::{Case, split_words, to_camel_case, to_constant_case, to_pascal_case, to_snake_case};
pub use file::{File, WriteResult};
pub use template::render_template;
