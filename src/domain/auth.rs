use serde::{Deserialize, Serialize};

/// Identity shared by the external authentication service through the
/// session cookie. This crate never authenticates users itself; it only
/// reads the stored identity and checks roles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Stable subject identifier assigned by the auth service.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
}

/// Returns `true` when `roles` contains `role`.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|candidate| candidate == role)
}
