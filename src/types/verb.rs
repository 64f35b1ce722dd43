use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A verb conjugation triple (base, past simple, past participle), each
/// form with an example sentence.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Verb {
    pub id: i32,
    pub v1: String,
    pub v1_example: String,
    pub v2: String,
    pub v2_example: String,
    pub v3: String,
    pub v3_example: String,
    pub created_at: DateTime<Utc>,
}

/// Insert/update payload for the `verbs` table. Only the six conjugation
/// columns survive deserialization; v1/v2/v3 are checked separately before
/// any insert.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewVerb {
    #[serde(default)]
    pub v1: String,
    #[serde(default)]
    pub v1_example: String,
    #[serde(default)]
    pub v2: String,
    #[serde(default)]
    pub v2_example: String,
    #[serde(default)]
    pub v3: String,
    #[serde(default)]
    pub v3_example: String,
}
