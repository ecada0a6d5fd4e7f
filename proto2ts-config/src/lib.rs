//! Configuration for the proto2ts type generator.
//!
//! A [`Config`] is read from `proto2ts.toml`, with every key defaulted:
//!
//! ```
//! use proto2ts_config::{Case, Config, EnumStyle};
//!
//! let config: Config = r#"
//!     output_path = "src/generated"
//!     type_name_ignore_parent_names = ["app", "services"]
//!     enum_style = "enum"
//! "#
//! .parse()?;
//!
//! assert_eq!(config.enum_style, EnumStyle::Enum);
//! assert_eq!(config.type_name_case, Case::Pascal);
//! # Ok::<(), Box<proto2ts_config::Error>>(())
//! ```
//!
//! Errors implement [`miette::Diagnostic`] and point at the offending key.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parse;

pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_NAME_TEMPLATE, DEFAULT_OUTPUT_PATH, EnumStyle};
pub use error::{Error, Result, SourceContext};
pub use parse::{find_config_file, parse_config};
pub use proto2ts_core::Case;
