//! Extension hooks for customizing generated output.
//!
//! Every hook is optional. A hook returns [`HookOutput::Default`] to keep the
//! generated value, [`HookOutput::Override`] to replace it, or
//! [`HookOutput::Suppress`] to drop it. Returning an error aborts the run.
//!
//! ```
//! use proto2ts_codegen_typescript::{HookOutput, Hooks};
//!
//! // drop every member named `internal`
//! let hooks = Hooks::new().member(|ctx| {
//!     if ctx.default.name == "internal" {
//!         Ok(HookOutput::Suppress)
//!     } else {
//!         Ok(HookOutput::Default)
//!     }
//! });
//! assert!(hooks.has_member_hook());
//! ```

use std::{fmt, sync::Arc};

use proto2ts_codegen::{CacheEntry, TypeCache};
use proto2ts_schema::{NodeId, SchemaGraph};

use crate::{
    GeneratedFile,
    ast::{Interface, Member},
};

/// Error type hooks may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// What a hook wants done with the value it was offered.
#[derive(Debug, Clone, PartialEq)]
pub enum HookOutput<T> {
    /// Keep the generated value.
    Default,
    /// Replace the generated value. Imports the default needed are kept
    /// only for the type names the replacement still uses.
    Override(T),
    /// Omit the value from the output.
    Suppress,
}

/// Which hook produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    Interface,
    Member,
    File,
    CustomFiles,
}

impl HookKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookKind::Interface => "interface",
            HookKind::Member => "member",
            HookKind::File => "file",
            HookKind::CustomFiles => "custom files",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input of the interface hook.
pub struct InterfaceContext<'a> {
    pub graph: &'a SchemaGraph,
    /// The message being declared.
    pub node: NodeId,
    /// Its generated name.
    pub name: &'a str,
    /// The interface that is emitted on [`HookOutput::Default`].
    pub default: &'a Interface,
}

/// Input of the member hook.
///
/// Runs for every member, including members of inline object types.
pub struct MemberContext<'a> {
    pub graph: &'a SchemaGraph,
    /// The field (or map field) being mapped.
    pub field: NodeId,
    /// The message owning the field.
    pub message: NodeId,
    /// The member that is emitted on [`HookOutput::Default`]. Its `ty` is the
    /// mapped base type of the field.
    pub default: &'a Member,
}

/// Input of the file hook.
pub struct FileContext<'a> {
    /// Generated path relative to the output root.
    pub path: &'a str,
    /// The types declared in the file, in declaration order.
    pub entries: &'a [&'a CacheEntry],
    /// The rendered file.
    pub content: &'a str,
}

/// Name and generated path of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef<'a> {
    pub name: &'a str,
    pub path: &'a str,
}

/// Read access to the registered types, handed to the custom-files hook.
#[derive(Debug, Clone, Copy)]
pub struct TypeLookup<'a> {
    cache: &'a TypeCache,
}

impl<'a> TypeLookup<'a> {
    pub fn new(cache: &'a TypeCache) -> Self {
        Self { cache }
    }

    /// Generated name and path of a message or enum, if it is registered.
    pub fn get(&self, node: NodeId) -> Option<TypeRef<'a>> {
        self.cache.lookup(node).map(|entry| TypeRef {
            name: &entry.generated_name,
            path: &entry.generated_path,
        })
    }

    /// Every registered type, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, TypeRef<'a>)> + 'a {
        self.cache.iter().map(|entry| {
            (
                entry.node,
                TypeRef {
                    name: &entry.generated_name,
                    path: &entry.generated_path,
                },
            )
        })
    }
}

pub type InterfaceHook =
    Arc<dyn Fn(&InterfaceContext<'_>) -> Result<HookOutput<Interface>, BoxError> + Send + Sync>;
pub type MemberHook =
    Arc<dyn Fn(&MemberContext<'_>) -> Result<HookOutput<Member>, BoxError> + Send + Sync>;
pub type FileHook =
    Arc<dyn Fn(&FileContext<'_>) -> Result<HookOutput<String>, BoxError> + Send + Sync>;
pub type CustomFilesHook = Arc<
    dyn Fn(&SchemaGraph, &TypeLookup<'_>) -> Result<Vec<GeneratedFile>, BoxError> + Send + Sync,
>;

/// The set of installed hooks.
#[derive(Clone, Default)]
pub struct Hooks {
    pub(crate) interface: Option<InterfaceHook>,
    pub(crate) member: Option<MemberHook>,
    pub(crate) file: Option<FileHook>,
    pub(crate) custom_files: Option<CustomFilesHook>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Customize or drop the interface generated for a message.
    pub fn interface<F>(mut self, hook: F) -> Self
    where
        F: Fn(&InterfaceContext<'_>) -> Result<HookOutput<Interface>, BoxError> + Send + Sync + 'static,
    {
        self.interface = Some(Arc::new(hook));
        self
    }

    /// Customize or drop a member generated for a field.
    pub fn member<F>(mut self, hook: F) -> Self
    where
        F: Fn(&MemberContext<'_>) -> Result<HookOutput<Member>, BoxError> + Send + Sync + 'static,
    {
        self.member = Some(Arc::new(hook));
        self
    }

    /// Rewrite or drop a whole generated file.
    pub fn file<F>(mut self, hook: F) -> Self
    where
        F: Fn(&FileContext<'_>) -> Result<HookOutput<String>, BoxError> + Send + Sync + 'static,
    {
        self.file = Some(Arc::new(hook));
        self
    }

    /// Append extra files after the generated ones.
    pub fn custom_files<F>(mut self, hook: F) -> Self
    where
        F: Fn(&SchemaGraph, &TypeLookup<'_>) -> Result<Vec<GeneratedFile>, BoxError>
            + Send
            + Sync
            + 'static,
    {
        self.custom_files = Some(Arc::new(hook));
        self
    }

    pub fn has_interface_hook(&self) -> bool {
        self.interface.is_some()
    }

    pub fn has_member_hook(&self) -> bool {
        self.member.is_some()
    }

    pub fn has_file_hook(&self) -> bool {
        self.file.is_some()
    }

    pub fn has_custom_files_hook(&self) -> bool {
        self.custom_files.is_some()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("interface", &self.has_interface_hook())
            .field("member", &self.has_member_hook())
            .field("file", &self.has_file_hook())
            .field("custom_files", &self.has_custom_files_hook())
            .finish()
    }
}
