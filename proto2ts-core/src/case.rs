//! Casing transformations for generated identifiers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Casing applied to a generated type or enum name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Case {
    /// `camelCase`
    #[serde(rename = "camelCase")]
    Camel,
    /// `CONSTANT_CASE`
    #[serde(rename = "constantCase")]
    Constant,
    /// `PascalCase`
    #[default]
    #[serde(rename = "pascalCase")]
    Pascal,
    /// `snake_case`
    #[serde(rename = "snakeCase")]
    Snake,
}

impl Case {
    /// Returns the configuration name of this casing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Camel => "camelCase",
            Case::Constant => "constantCase",
            Case::Pascal => "pascalCase",
            Case::Snake => "snakeCase",
        }
    }

    /// Apply this casing to a string.
    pub fn apply(&self, s: &str) -> String {
        match self {
            Case::Camel => to_camel_case(s),
            Case::Constant => to_constant_case(s),
            Case::Pascal => to_pascal_case(s),
            Case::Snake => to_snake_case(s),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camelCase" => Ok(Case::Camel),
            "constantCase" => Ok(Case::Constant),
            "pascalCase" => Ok(Case::Pascal),
            "snakeCase" => Ok(Case::Snake),
            _ => Err(format!(
                "unknown case '{}', expected one of camelCase, constantCase, pascalCase, snakeCase",
                s
            )),
        }
    }
}

/// Split a string into words.
///
/// Any character that is not an ASCII letter or digit separates words. A word
/// also ends before an uppercase letter that follows a lowercase letter or a
/// digit (`fooBar`), and before the last uppercase letter of an acronym that
/// is followed by a lowercase letter (`HTTPServer` -> `HTTP`, `Server`).
/// Digits stay attached to the letters before them (`v1`).
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
            let lower_to_upper =
                (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && c.is_ascii_uppercase();
            let acronym_end = prev.is_ascii_uppercase()
                && c.is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase());

            if (lower_to_upper || acronym_end) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str, index: usize) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        // keep a separator before a digit-leading word
        Some(first) if index > 0 && first.is_ascii_digit() => {
            format!("_{}{}", first, chars.as_str().to_lowercase())
        }
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}

/// Convert a string to PascalCase (e.g., "auth v1 user" -> "AuthV1User")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| capitalize(word, i))
        .collect()
}

/// Convert a string to camelCase (e.g., "team_id" -> "teamId")
pub fn to_camel_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word, i)
            }
        })
        .collect()
}

/// Convert a string to CONSTANT_CASE (e.g., "AuthV1User" -> "AUTH_V1_USER")
pub fn to_constant_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert a string to snake_case (e.g., "AuthV1User" -> "auth_v1_user")
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("auth v1 User"), vec!["auth", "v1", "User"]);
        assert_eq!(split_words("ROLE_ADMIN"), vec!["ROLE", "ADMIN"]);
        assert_eq!(split_words("teamId"), vec!["team", "Id"]);
        assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(split_words("  --  "), Vec::<String>::new());
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case(" auth v1  User "), "AuthV1User");
        assert_eq!(to_pascal_case("ROLE_ADMIN"), "RoleAdmin");
        assert_eq!(to_pascal_case("role_1"), "Role_1");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("team_id"), "teamId");
        assert_eq!(to_camel_case("TeamId"), "teamId");
        assert_eq!(to_camel_case("full_access"), "fullAccess");
        assert_eq!(to_camel_case("field_2"), "field_2");
    }

    #[test]
    fn test_to_constant_case() {
        assert_eq!(to_constant_case("auth v1 User"), "AUTH_V1_USER");
        assert_eq!(to_constant_case("teamId"), "TEAM_ID");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("auth v1 User"), "auth_v1_user");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_case_apply() {
        assert_eq!(Case::Pascal.apply("auth v1 user"), "AuthV1User");
        assert_eq!(Case::Camel.apply("auth v1 user"), "authV1User");
        assert_eq!(Case::Constant.apply("auth v1 user"), "AUTH_V1_USER");
        assert_eq!(Case::Snake.apply("auth v1 user"), "auth_v1_user");
    }

    #[test]
    fn test_case_from_str() {
        assert_eq!("camelCase".parse::<Case>().unwrap(), Case::Camel);
        assert_eq!("snakeCase".parse::<Case>().unwrap(), Case::Snake);
        assert!("kebabCase".parse::<Case>().is_err());
        assert_eq!(Case::Constant.to_string(), "constantCase");
    }
}
