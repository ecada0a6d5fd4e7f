use thiserror::Error;

/// Result type for code generation infrastructure.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Two different schema nodes map to the same cache key.
    #[error("'{first}' and '{second}' both resolve to type '{name}' in '{file}'")]
    DuplicateType {
        name: String,
        file: String,
        first: String,
        second: String,
    },
}
