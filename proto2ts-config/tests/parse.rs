use std::fs;

use proto2ts_config::{Case, Config, EnumStyle, Error, find_config_file};
use tempfile::TempDir;

#[test]
fn parses_full_config() {
    let config: Config = r#"
input_root = "protos"
output_path = "src/types"
namespaces_to_ignore = ["google"]
type_name_template = "I{{typeName}}"
type_name_case = "camelCase"
type_name_ignore_parent_names = ["app", "services"]
enum_name_template = "{{ parentNodeNames }}{{ typeName }}"
enum_name_case = "constantCase"
generate_index_file = false
enum_style = "enum"
file_header_template = "Generated {{generationTimestamp}} from {{sourceFile}}"

[generated_type_overrides]
"google.protobuf.Timestamp" = "Date"

[generated_type_comments]
"google.protobuf.Timestamp" = "RFC 3339 timestamp"
"#
    .parse()
    .unwrap();

    assert_eq!(config.input_root, "protos");
    assert_eq!(config.type_name_case, Case::Camel);
    assert_eq!(config.enum_name_case, Case::Constant);
    assert_eq!(config.enum_style, EnumStyle::Enum);
    assert!(!config.generate_index_file);
    assert_eq!(
        config.generated_type_overrides.get("google.protobuf.Timestamp").map(String::as_str),
        Some("Date")
    );
    assert!(config.index_header_template.is_none());
}

#[test]
fn empty_config_is_default() {
    let config: Config = "".parse().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn unknown_case_is_parse_error() {
    let err = Config::from_str_with_filename("type_name_case = \"kebabCase\"\n", "custom.toml")
        .unwrap_err();
    assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
}

#[test]
fn unknown_key_is_parse_error() {
    let err = "outputPath = \"x\"\n".parse::<Config>().unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn template_without_type_name_is_rejected() {
    let src = "enum_name_template = \"{{parentNodeNames}}Enum\"\n";
    let err = src.parse::<Config>().unwrap_err();
    match *err {
        Error::MissingPlaceholder { ref key, span, .. } => {
            assert_eq!(key, "enum_name_template");
            assert_eq!(span.map(|s| s.offset()), Some(0));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_override_key_is_rejected() {
    let src = "[generated_type_overrides]\n\"\" = \"string\"\n";
    let err = src.parse::<Config>().unwrap_err();
    assert_eq!(err.to_string(), "generated_type_overrides keys must not be empty");
}

#[test]
fn from_file_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::from_file(dir.path().join("proto2ts.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn discover_walks_up_to_ancestor() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("proto2ts.toml"), "output_path = \"out\"\n").unwrap();
    let nested = dir.path().join("a/b/c");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_config_file(&nested), Some(dir.path().join("proto2ts.toml")));
    let config = Config::discover(&nested).unwrap();
    assert_eq!(config.output_path, "out");
}

#[test]
fn discover_prefers_nearest_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("proto2ts.toml"), "output_path = \"outer\"\n").unwrap();
    let inner = dir.path().join("inner");
    fs::create_dir_all(&inner).unwrap();
    fs::write(inner.join("proto2ts.toml"), "output_path = \"inner\"\n").unwrap();

    let config = Config::discover(&inner).unwrap();
    assert_eq!(config.output_path, "inner");
}
