//! Language-agnostic code generation infrastructure for proto2ts.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Per-file output bookkeeping (ImportCollector)
//! - [`naming`] - Generated type names and file paths
//! - [`paths`] - `/`-separated path helpers
//! - [`cache`] - The two-pass type registry (TypeCache)

pub mod builder;
pub mod cache;
mod error;
pub mod generation;
pub mod naming;
pub mod paths;

pub use cache::{CacheEntry, CacheKey, TypeCache};
pub use error::{Error, Result};
