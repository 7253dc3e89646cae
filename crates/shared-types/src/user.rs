use serde::{Deserialize, Serialize};

/// Platform role carried in the token's `role` claim.
///
/// The set is closed; anything the client does not recognize degrades to
/// `Student` so a malformed or future role never grants elevated views and
/// never crashes the UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Student,
    Creator,
    Admin,
}

impl Role {
    /// Parse a role claim, degrading unknown values to `Student`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "creator" => Role::Creator,
            "admin" => Role::Admin,
            _ => Role::Student,
        }
    }

    /// Wire representation, matching what the backend stores.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Creator => "creator",
            Role::Admin => "admin",
        }
    }

    /// Human-facing label for headers and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Creator => "Creator",
            Role::Admin => "Admin",
        }
    }
}

/// A row in the admin user table. The role stays a raw string here because
/// the table both displays and writes it back verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    pub id: i64,
    pub email: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_parse_exactly() {
        assert_eq!(Role::from_str_or_default("student"), Role::Student);
        assert_eq!(Role::from_str_or_default("creator"), Role::Creator);
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(Role::from_str_or_default("Admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("CREATOR"), Role::Creator);
    }

    #[test]
    fn unknown_roles_degrade_to_student() {
        assert_eq!(Role::from_str_or_default("superuser"), Role::Student);
        assert_eq!(Role::from_str_or_default(""), Role::Student);
        assert_eq!(Role::from_str_or_default("customer"), Role::Student);
    }

    #[test]
    fn wire_roundtrip() {
        for role in [Role::Student, Role::Creator, Role::Admin] {
            assert_eq!(Role::from_str_or_default(role.as_str()), role);
        }
    }
}
