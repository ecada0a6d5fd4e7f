//! The well-known type table.

use indexmap::IndexMap;

const BUILTIN: &[(&str, &str)] = &[
    ("bool", "boolean"),
    ("double", "number"),
    ("float", "number"),
    ("int32", "number"),
    ("uint32", "number"),
    ("sint32", "number"),
    ("fixed32", "number"),
    ("sfixed32", "number"),
    ("string", "string"),
    ("bytes", "string"),
    // 64-bit integers do not fit a JS number
    ("int64", "string"),
    ("uint64", "string"),
    ("sint64", "string"),
    ("fixed64", "string"),
    ("sfixed64", "string"),
    ("google.protobuf.Timestamp", "string"),
    ("google.protobuf.Duration", "string"),
    ("google.protobuf.FieldMask", "string"),
    ("google.protobuf.BoolValue", "boolean | null"),
    ("google.protobuf.StringValue", "string | null"),
    ("google.protobuf.Int64Value", "string | null"),
    ("google.protobuf.UInt64Value", "string | null"),
    ("google.protobuf.BytesValue", "string | null"),
    ("google.protobuf.Int32Value", "number | null"),
    ("google.protobuf.UInt32Value", "number | null"),
    ("google.protobuf.FloatValue", "number | null"),
    ("google.protobuf.DoubleValue", "number | null"),
    ("google.protobuf.NullValue", "null"),
    ("google.protobuf.Empty", "{}"),
    ("google.protobuf.ListValue", "any[]"),
    ("google.protobuf.Struct", "Record<string, any>"),
    ("google.protobuf.Any", "{ '@type': string, value: any }"),
];

/// Mapping from scalar and well-known schema types to TypeScript type text.
#[derive(Debug, Clone)]
pub struct WellKnownTypes {
    types: IndexMap<String, String>,
}

impl WellKnownTypes {
    /// The built-in table.
    pub fn new() -> Self {
        Self {
            types: BUILTIN
                .iter()
                .map(|(schema, ts)| (schema.to_string(), ts.to_string()))
                .collect(),
        }
    }

    /// The built-in table with `overrides` merged on top.
    ///
    /// ```
    /// use indexmap::IndexMap;
    /// use proto2ts_codegen_typescript::WellKnownTypes;
    ///
    /// let mut overrides = IndexMap::new();
    /// overrides.insert("google.protobuf.Timestamp".to_string(), "Date".to_string());
    ///
    /// let types = WellKnownTypes::with_overrides(&overrides);
    /// assert_eq!(types.get(".google.protobuf.Timestamp"), Some("Date"));
    /// assert_eq!(types.get("int64"), Some("string"));
    /// ```
    pub fn with_overrides(overrides: &IndexMap<String, String>) -> Self {
        let mut table = Self::new();
        for (schema, ts) in overrides {
            table
                .types
                .insert(schema.trim_start_matches('.').to_string(), ts.clone());
        }
        table
    }

    /// TypeScript type text for a schema type name, ignoring a leading `.`.
    pub fn get(&self, type_name: &str) -> Option<&str> {
        let key = type_name.strip_prefix('.').unwrap_or(type_name);
        self.types.get(key).map(String::as_str)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.get(type_name).is_some()
    }
}

impl Default for WellKnownTypes {
    fn default() -> Self {
        Self::new()
    }
}
