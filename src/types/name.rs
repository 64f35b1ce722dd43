use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A noun entry. `source_verb` is informational free text, not a foreign
/// key into `verbs`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Name {
    pub id: i32,
    pub name: String,
    pub synonym: Vec<String>,
    pub example: String,
    pub source_verb: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert/update payload for the `names` table.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewName {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "crate::types::deserialize_term_list")]
    pub synonym: Vec<String>,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub source_verb: Option<String>,
}
