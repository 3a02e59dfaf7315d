//! User account model and role definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::error::PlatformError;

/// User role
///
/// The role set is closed: adding a role means extending this enum and
/// the grant table together, which the exhaustive match in the grant
/// table enforces at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Enrolled student
    Student,
    /// Classroom teacher
    Teacher,
    /// Parent or homeschool guardian
    Parent,
    /// Platform administrator
    Admin,
    /// School counselor
    Counselor,
    /// Social worker
    SocialWorker,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 6] = [
        Role::Student,
        Role::Teacher,
        Role::Parent,
        Role::Admin,
        Role::Counselor,
        Role::SocialWorker,
    ];

    /// Stable wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Parent => "parent",
            Role::Admin => "admin",
            Role::Counselor => "counselor",
            Role::SocialWorker => "social_worker",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "parent" => Ok(Role::Parent),
            "admin" => Ok(Role::Admin),
            "counselor" => Ok(Role::Counselor),
            "social_worker" => Ok(Role::SocialWorker),
            other => Err(PlatformError::validation(format!(
                "unknown role: {}",
                other
            ))),
        }
    }
}

/// Platform user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Username
    pub username: String,
    /// Email address
    pub email: String,
    /// Assigned role
    pub role: Role,
    /// Whether the account is active
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with the given role.
    pub fn new(username: String, email: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            role,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&Role::SocialWorker).unwrap();
        assert_eq!(json, "\"social_worker\"");

        let role: Role = serde_json::from_str("\"counselor\"").unwrap();
        assert_eq!(role, Role::Counselor);
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result: Result<Role, _> = "principal".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_new_user_is_active() {
        let user = User::new(
            "amara".to_string(),
            "amara@example.edu".to_string(),
            Role::Student,
        );
        assert!(user.is_active);
        assert_eq!(user.role, Role::Student);
    }
}
