//! TypeScript-specific naming rules.

use proto2ts_core::{to_camel_case, to_pascal_case};

use crate::ast::quote;

/// Property name for a schema field (`team_id` -> `teamId`).
pub fn member_name(field_name: &str) -> String {
    to_camel_case(field_name)
}

/// Returns true if `name` can be used unquoted as an enum key or property.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => false,
        Some(first) if first.is_ascii_digit() => false,
        Some(_) => name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$'),
    }
}

/// Key of an enum member in `enum` mode.
///
/// The value is PascalCased and the PascalCased enum name is removed as a
/// prefix (`Role` / `ROLE_ADMIN` -> `Admin`). The prefix must end on a word
/// boundary (`ROLES_ALL` stays `RolesAll`), and if nothing would be left the
/// un-stripped form is kept. Keys that are not identifiers are quoted.
///
/// ```
/// use proto2ts_codegen_typescript::naming::enum_member_key;
///
/// assert_eq!(enum_member_key("Role", "ROLE_ADMIN"), "Admin");
/// assert_eq!(enum_member_key("Role", "ROLE"), "Role");
/// assert_eq!(enum_member_key("Size", "2XL"), "'2Xl'");
/// ```
pub fn enum_member_key(enum_name: &str, value: &str) -> String {
    let key = to_pascal_case(value);
    let prefix = to_pascal_case(enum_name);

    let key = match key.strip_prefix(prefix.as_str()) {
        Some(rest) if !prefix.is_empty() && starts_word(rest) => rest.to_string(),
        _ => key,
    };

    if is_identifier(&key) { key } else { quote(&key) }
}

fn starts_word(rest: &str) -> bool {
    rest.starts_with(|c: char| c.is_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_name() {
        assert_eq!(member_name("team_id"), "teamId");
        assert_eq!(member_name("teamId"), "teamId");
        assert_eq!(member_name("full_access"), "fullAccess");
    }

    #[test]
    fn test_enum_member_key_strips_prefix_only() {
        assert_eq!(enum_member_key("Role", "ROLE_UNSPECIFIED"), "Unspecified");
        assert_eq!(enum_member_key("Role", "ADMIN_ROLE"), "AdminRole");
        assert_eq!(enum_member_key("DisplayTheme", "DISPLAY_THEME_DARK"), "Dark");
    }

    #[test]
    fn test_enum_member_key_strips_whole_words_only() {
        assert_eq!(enum_member_key("Role", "ROLES_ALL"), "RolesAll");
        assert_eq!(enum_member_key("Status", "STATUSES"), "Statuses");
        assert_eq!(enum_member_key("Auth", "AUTH_2FA"), "_2Fa");
    }

    #[test]
    fn test_enum_member_key_quotes_digit_leading() {
        assert_eq!(enum_member_key("Period", "10_DAYS"), "'10Days'");
        assert_eq!(enum_member_key("Level", "1"), "'1'");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("Admin"));
        assert!(is_identifier("$ref"));
        assert!(!is_identifier("2fa"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier(""));
    }
}
