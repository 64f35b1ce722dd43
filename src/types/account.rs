use chrono::prelude::*;
use serde::{Deserialize, Serialize};

/// Login request body for the admin surface.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Login {
    pub password: String,
}

/// Claims carried by a session token.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Session {
    pub exp: DateTime<Utc>,
    pub nbf: DateTime<Utc>,
}

/// Admin credential material loaded from config: the argon2 hash of the
/// shared password and the key used to seal session tokens.
#[derive(Clone, Debug)]
pub struct AdminAuth {
    pub password_hash: String,
    pub token_key: String,
}
