pub mod account;
pub mod name;
pub mod selection;
pub mod verb;
pub mod word;

use serde::{Deserialize, Deserializer};

/// Splits a comma-separated list into trimmed, non-empty entries.
pub fn split_term_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// Accepts either a JSON array of strings or a single comma-separated
/// string and normalizes both into trimmed, non-empty entries. Null and
/// missing values become an empty list.
pub fn deserialize_term_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Many(Vec<String>),
        One(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Raw::Many(items)) => items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
        Some(Raw::One(value)) => split_term_list(&value),
    })
}

#[cfg(test)]
mod tests {
    use super::split_term_list;

    #[test]
    fn term_lists_are_trimmed_and_split_on_commas() {
        assert_eq!(split_term_list("a, b , c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_entries_are_dropped() {
        assert_eq!(split_term_list("fast,, quick ,"), vec!["fast", "quick"]);
        assert!(split_term_list("").is_empty());
    }
}
