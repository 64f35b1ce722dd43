use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vocabulary word as stored, with its store-assigned id and creation
/// timestamp.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Word {
    pub id: i32,
    pub word: String,
    pub synonyms: Vec<String>,
    pub explanation: String,
    pub example: String,
    pub created_at: DateTime<Utc>,
}

/// Insert/update payload for the `words` table. Unrecognized keys are
/// dropped during deserialization, which keeps bulk-import columns
/// allow-listed to the table schema.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewWord {
    #[serde(default)]
    pub word: String,
    #[serde(default, deserialize_with = "crate::types::deserialize_term_list")]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub example: String,
}
