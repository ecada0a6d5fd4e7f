//! The generator configuration value object.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use proto2ts_core::Case;
use serde::{Deserialize, Serialize};

use crate::{Result, SourceContext};

/// Name of the configuration file looked up by [`Config::discover`].
pub const CONFIG_FILE_NAME: &str = "proto2ts.toml";

/// Template used when none is configured.
pub const DEFAULT_NAME_TEMPLATE: &str = "{{parentNodeNames}}{{typeName}}";

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "generated_from_proto";

/// How top-level enums are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumStyle {
    /// `export enum Role { Admin = 'ROLE_ADMIN' }`
    Enum,
    /// `export type Role = 'ROLE_UNSPECIFIED' | 'ROLE_ADMIN';`
    #[default]
    Union,
}

impl EnumStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnumStyle::Enum => "enum",
            EnumStyle::Union => "union",
        }
    }
}

impl fmt::Display for EnumStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EnumStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enum" => Ok(EnumStyle::Enum),
            "union" => Ok(EnumStyle::Union),
            _ => Err(format!("unknown enum style '{}', expected 'enum' or 'union'", s)),
        }
    }
}

/// Root schema for proto2ts.toml.
///
/// Every key is optional; a missing key takes the value from
/// [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prefix stripped from source file identifiers before computing output paths.
    pub input_root: String,

    /// Directory the generated files are placed under.
    pub output_path: String,

    /// Namespaces skipped entirely, with everything declared under them.
    pub namespaces_to_ignore: Vec<String>,

    /// Name template for interfaces (`{{parentNodeNames}}`, `{{typeName}}`).
    pub type_name_template: String,
    pub type_name_case: Case,

    /// Parent segments left out of `{{parentNodeNames}}`.
    pub type_name_ignore_parent_names: Vec<String>,

    /// Name template for enums.
    pub enum_name_template: String,
    pub enum_name_case: Case,

    /// Schema type name to TypeScript type, merged over the built-in table.
    pub generated_type_overrides: IndexMap<String, String>,

    /// Schema type name to a comment emitted above every member of that type.
    pub generated_type_comments: IndexMap<String, String>,

    pub generate_index_file: bool,

    pub enum_style: EnumStyle,

    /// JSDoc header for each generated file (`{{generationTimestamp}}`, `{{sourceFile}}`).
    pub file_header_template: Option<String>,

    /// JSDoc header for the index file (`{{generationTimestamp}}`).
    pub index_header_template: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_root: String::new(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            namespaces_to_ignore: Vec::new(),
            type_name_template: DEFAULT_NAME_TEMPLATE.to_string(),
            type_name_case: Case::Pascal,
            type_name_ignore_parent_names: Vec::new(),
            enum_name_template: DEFAULT_NAME_TEMPLATE.to_string(),
            enum_name_case: Case::Pascal,
            generated_type_overrides: IndexMap::new(),
            generated_type_comments: IndexMap::new(),
            generate_index_file: true,
            enum_style: EnumStyle::Union,
            file_header_template: None,
            index_header_template: None,
        }
    }
}

impl Config {
    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&SourceContext::detached())
    }

    pub(crate) fn validate_with(&self, ctx: &SourceContext) -> Result<()> {
        if self.output_path.trim().is_empty() {
            return Err(ctx.validation_error_at("output_path must not be empty", "output_path"));
        }

        for (key, template) in [
            ("type_name_template", &self.type_name_template),
            ("enum_name_template", &self.enum_name_template),
        ] {
            if !has_type_name_placeholder(template) {
                return Err(ctx.missing_placeholder_error(key, template));
            }
        }

        for (table, map) in [
            ("generated_type_overrides", &self.generated_type_overrides),
            ("generated_type_comments", &self.generated_type_comments),
        ] {
            if map.keys().any(|key| key.trim().is_empty()) {
                return Err(ctx.validation_error_at(format!("{} keys must not be empty", table), ""));
            }
        }

        Ok(())
    }

    /// Returns true if the namespace should be skipped during collection.
    pub fn ignores_namespace(&self, name: &str) -> bool {
        self.namespaces_to_ignore.iter().any(|ns| ns == name)
    }
}

fn has_type_name_placeholder(template: &str) -> bool {
    template.match_indices("{{").any(|(pos, _)| {
        let rest = &template[pos + 2..];
        rest.split_once("}}")
            .is_some_and(|(inner, _)| inner.trim() == "typeName")
    })
}
