use serde::{Deserialize, Serialize};

/// Body of a multi-delete request. Delete-all is the same operation with
/// every id of the collection listed.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct IdSet {
    pub ids: Vec<i32>,
}
