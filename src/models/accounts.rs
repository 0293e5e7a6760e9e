use serde::{Deserialize, Serialize};

/// Closed role set. Every authorization check matches on this exhaustively;
/// raw role strings never travel past the row mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn parse(input: &str) -> Option<Role> {
        match input {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Account as exposed to admin endpoints. The password hash is deliberately
/// not part of this row so it can never end up in a JSON response.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct AccountRow {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub phone: Option<String>,
    pub joined_at: String,
}

/// Minimal row resolved per authenticated request.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthAccountRow {
    pub id: String,
    pub role: Role,
}

/// Row used only by the login path.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CredentialsRow {
    pub id: String,
    pub password_hash: String,
    pub role: Role,
}
