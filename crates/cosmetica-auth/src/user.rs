//! User types.

use std::fmt;
use std::str::FromStr;

use cosmetica_catalog::UserId;
use serde::{Deserialize, Serialize};

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer.
    #[default]
    Customer,
    /// Store administrator.
    Admin,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}', expected customer or admin", other)),
        }
    }
}

/// The logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Generated at login.
    pub id: UserId,
    /// As typed; not validated.
    pub email: String,
    pub role: Role,
    /// Display name, taken from the email's local part.
    pub name: String,
}

impl User {
    /// Build a user from a login form.
    pub fn login(email: impl Into<String>, role: Role) -> Self {
        let email = email.into();
        Self {
            id: UserId::generate(),
            name: display_name_for(&email),
            email,
            role,
        }
    }

    /// Check if this user sees the admin surface.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Everything before the first `@`, or the whole string if there is none.
fn display_name_for(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}
