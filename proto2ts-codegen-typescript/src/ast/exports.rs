//! TypeScript re-export statements.

use proto2ts_codegen::builder::{CodeFragment, Renderable};

/// `export * from '<module>';`
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
}

impl Export {
    /// Re-export everything from another module.
    pub fn all_from(module: impl Into<String>) -> Self {
        Self { from: module.into() }
    }

    pub fn build(&self) -> String {
        format!("export * from '{}';", self.from)
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}
