use thiserror::Error;

use crate::hooks::HookKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Codegen(#[from] proto2ts_codegen::Error),

    #[error("{kind} hook failed for {subject}: {message}")]
    Hook {
        kind: HookKind,
        subject: String,
        message: String,
    },
}

impl Error {
    pub(crate) fn hook(kind: HookKind, subject: impl Into<String>, message: impl ToString) -> Self {
        Error::Hook {
            kind,
            subject: subject.into(),
            message: message.to_string(),
        }
    }
}
