use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in account as exposed to the rest of the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,

    /// Simulated cash available for trades. Older stored records call
    /// this field `balance`.
    #[serde(alias = "balance")]
    pub virtual_balance: f64,

    pub created_at: DateTime<Utc>,
}

/// An authenticated session: bearer token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// A user record in the local fake user store (`mock_users`).
///
/// New records only carry `password_hash` (Argon2id, PHC string).
/// `password` exists so records written by older builds, which stored
/// the plaintext, can still sign in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAccount {
    pub id: String,
    pub name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

impl StoredAccount {
    /// The public view of this record (no credentials).
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            virtual_balance: self.balance,
            created_at: self.created_at,
        }
    }
}
