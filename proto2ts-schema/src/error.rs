use std::path::PathBuf;

use thiserror::Error;

/// Result type for schema graph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read schema descriptor '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema descriptor")]
    Json(#[from] serde_json::Error),

    #[error("{parent_kind} '{parent}' cannot contain {child_kind} '{child}'")]
    InvalidParent {
        parent: String,
        parent_kind: &'static str,
        child: String,
        child_kind: &'static str,
    },

    #[error("field '{field}' has unknown rule '{rule}', expected repeated, required or optional")]
    InvalidRule { field: String, rule: String },

    #[error("oneof '{oneof}' in '{message}' references unknown field '{field}'")]
    UnknownOneOfMember {
        message: String,
        oneof: String,
        field: String,
    },

    #[error("field '{field}' already belongs to oneof '{oneof}'")]
    AlreadyInOneOf { field: String, oneof: String },

    #[error("'{name}' is a {kind}, expected a message or enum")]
    NotAType { name: String, kind: &'static str },
}
