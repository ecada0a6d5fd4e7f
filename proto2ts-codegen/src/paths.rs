//! Path helpers for generated files.
//!
//! Every path handled here is a `/`-separated string, independent of the host
//! platform, so generated output is byte-identical everywhere.

/// File extension of generated files.
pub const FILE_EXTENSION: &str = "ts";

/// Extension of schema source files.
pub const SOURCE_EXTENSION: &str = "proto";

/// Name of the aggregating index file.
pub const INDEX_FILE: &str = "index.ts";

/// Output path for types whose source file is unknown.
pub const UNKNOWN_FILE_NAME: &str = "proto2ts_unknown_file_name.ts";

/// Replace `\` separators with `/`.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Map a schema source identifier to a generated file path.
///
/// The `input_root` prefix and any leading `/` are removed, and a trailing
/// `.proto` is swapped for `.ts` (other names just gain `.ts`).
///
/// ```
/// use proto2ts_codegen::paths::source_to_output;
///
/// assert_eq!(source_to_output("protos/auth/v1/user.proto", "protos"), "auth/v1/user.ts");
/// assert_eq!(source_to_output("/auth/user", ""), "auth/user.ts");
/// ```
pub fn source_to_output(source: &str, input_root: &str) -> String {
    let source = normalize_separators(source);
    let root = normalize_separators(input_root);
    let root = root.trim_end_matches('/');

    let relative = match source.strip_prefix(root) {
        Some(rest) if !root.is_empty() && (rest.is_empty() || rest.starts_with('/')) => rest,
        _ => source.as_str(),
    };
    let relative = relative.trim_start_matches('/');
    let stem = relative
        .strip_suffix(&format!(".{}", SOURCE_EXTENSION))
        .unwrap_or(relative);

    format!("{}.{}", stem, FILE_EXTENSION)
}

/// Map a generated file path back to the schema file it came from.
pub fn output_to_source(path: &str) -> String {
    format!("{}.{}", strip_extension(path), SOURCE_EXTENSION)
}

/// Drop a trailing `.ts`.
pub fn strip_extension(path: &str) -> &str {
    path.strip_suffix(".ts").unwrap_or(path)
}

/// Join the output root and a generated file path with `/`.
pub fn join_output_path(root: &str, relative: &str) -> String {
    let root = normalize_separators(root);
    let relative = relative.trim_start_matches('/');
    if !root.is_empty() && root.chars().all(|c| c == '/') {
        return format!("/{}", relative);
    }
    let root = root.trim_end_matches('/');
    let root = root.strip_prefix("./").unwrap_or(root);

    if root.is_empty() || root == "." {
        relative.to_string()
    } else {
        format!("{}/{}", root, relative)
    }
}

/// Module specifier that imports `to` from a file at `from`.
///
/// Both paths are generated file paths relative to the same root. The result
/// has no extension and always starts with `./` or `../`.
///
/// ```
/// use proto2ts_codegen::paths::relative_import_path;
///
/// assert_eq!(relative_import_path("auth/v1/user.ts", "auth/v1/team.ts"), "./team");
/// assert_eq!(relative_import_path("auth/v1/user.ts", "common/page.ts"), "../../common/page");
/// assert_eq!(relative_import_path("auth/user.ts", "auth/v1/role.ts"), "./v1/role");
/// ```
pub fn relative_import_path(from: &str, to: &str) -> String {
    let from_dir: Vec<&str> = dir_segments(from);
    let to_dir: Vec<&str> = dir_segments(to);
    let file_name = strip_extension(to.rsplit('/').next().unwrap_or(to));

    let common = from_dir
        .iter()
        .zip(&to_dir)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = std::iter::repeat_n("..", from_dir.len() - common).collect();
    segments.extend(&to_dir[common..]);
    segments.push(file_name);

    let joined = segments.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{}", joined)
    }
}

fn dir_segments(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    segments.pop();
    segments
}
