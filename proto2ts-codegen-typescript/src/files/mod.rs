//! TypeScript file generators.

mod declaration_ts;
mod index_ts;

pub use declaration_ts::DeclarationTs;
pub use index_ts::IndexTs;
