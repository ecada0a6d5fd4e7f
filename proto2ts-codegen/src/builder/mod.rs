//! Rendering building blocks shared by the target language crates.
//!
//! Declarations implement [`Renderable`] and produce [`CodeFragment`]s,
//! which a [`CodeBuilder`] writes out at a configurable [`Indent`].

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
