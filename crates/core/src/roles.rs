//! Well-known role name constants.
//!
//! These must match the `user_role` enum labels in
//! `20250901000001_create_users.sql`.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_STUDENT: &str = "STUDENT";

/// All roles a user may hold.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_STUDENT];

/// Returns `true` if `role` is one of [`VALID_ROLES`].
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        assert!(is_valid_role(ROLE_ADMIN));
        assert!(is_valid_role(ROLE_STUDENT));
    }

    #[test]
    fn role_names_are_case_sensitive() {
        assert!(!is_valid_role("admin"));
        assert!(!is_valid_role("student"));
        assert!(!is_valid_role(""));
    }
}
