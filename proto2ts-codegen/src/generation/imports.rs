//! Import collection.

use indexmap::{IndexMap, IndexSet};

/// Tracks the names a generated file imports, grouped by the file they come from.
///
/// Both the files and the names within a file keep first-recorded order, and a
/// name recorded twice is kept once.
///
/// # Example
///
/// ```
/// use proto2ts_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("auth/v1/team.ts", "AuthV1Team");
/// imports.add("auth/v1/role.ts", "AuthV1Role");
/// imports.add("auth/v1/team.ts", "AuthV1TeamKind");
/// imports.add("auth/v1/team.ts", "AuthV1Team");
///
/// let files: Vec<&str> = imports.iter().map(|(file, _)| file).collect();
/// assert_eq!(files, ["auth/v1/team.ts", "auth/v1/role.ts"]);
/// assert_eq!(imports.symbols("auth/v1/team.ts").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Source file -> imported names
    imports: IndexMap<String, IndexSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `symbol` is imported from `module`.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Merge another collector into this one, keeping this one's order first.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    /// Keep only the names `keep` accepts. Files left without names are
    /// dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        for symbols in self.imports.values_mut() {
            symbols.retain(|symbol| keep(symbol));
        }
        self.imports.retain(|_, symbols| !symbols.is_empty());
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Names imported from a module, in first-recorded order.
    pub fn symbols(&self, module: &str) -> Option<&IndexSet<String>> {
        self.imports.get(module)
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Number of distinct source files.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_keep_first_recorded_order() {
        let mut imports = ImportCollector::new();
        imports.add("team.ts", "Zeta");
        imports.add("team.ts", "Alpha");
        imports.add("team.ts", "Zeta");

        let symbols: Vec<&str> = imports
            .symbols("team.ts")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(symbols, ["Zeta", "Alpha"]);
    }

    #[test]
    fn test_merge() {
        let mut a = ImportCollector::new();
        a.add("team.ts", "Team");

        let mut b = ImportCollector::new();
        b.add("role.ts", "Role");
        b.add("team.ts", "TeamKind");

        a.merge(&b);
        assert_eq!(a.len(), 2);
        assert!(a.has_symbol("team.ts", "TeamKind"));
        assert!(a.has_module("role.ts"));
        assert!(!a.has_symbol("role.ts", "Team"));
    }

    #[test]
    fn test_retain_drops_emptied_files() {
        let mut imports = ImportCollector::new();
        imports.add("b.ts", "PkgB");
        imports.add("b.ts", "PkgC");
        imports.add("sub/d.ts", "PkgD");

        imports.retain(|symbol| symbol != "PkgD" && symbol != "PkgB");

        assert!(!imports.has_module("sub/d.ts"));
        assert!(imports.has_symbol("b.ts", "PkgC"));
        assert!(!imports.has_symbol("b.ts", "PkgB"));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_empty() {
        let imports = ImportCollector::new();
        assert!(imports.is_empty());
        assert_eq!(imports.iter().count(), 0);
    }
}
