//! Read-only identity types.
//!
//! User accounts live in an external identity provider; this engine only
//! consumes the id, role, and affiliation it hands back.

use crate::core::ids::UserId;
use serde::{Deserialize, Serialize};

/// Role a user holds in the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Author,
    Reviewer,
    Chair,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Author => "author",
            Role::Reviewer => "reviewer",
            Role::Chair => "chair",
            Role::Admin => "admin",
        }
    }

    /// Chairs and admins may finalize decisions and read all discussions.
    pub fn is_chair_or_admin(&self) -> bool {
        matches!(self, Role::Chair | Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the identity provider knows about a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub role: Role,
    pub affiliation: String,
}

impl UserProfile {
    pub fn new(id: impl Into<UserId>, role: Role, affiliation: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            affiliation: affiliation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chair_or_admin() {
        assert!(Role::Chair.is_chair_or_admin());
        assert!(Role::Admin.is_chair_or_admin());
        assert!(!Role::Reviewer.is_chair_or_admin());
        assert!(!Role::Author.is_chair_or_admin());
    }
}
