use std::str::FromStr;

use handle_errors::Error;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::types::name::NewName;
use crate::types::verb::NewVerb;
use crate::types::word::NewWord;

/// Target collection of an admin operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Words,
    Verbs,
    Names,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Words => "words",
            Table::Verbs => "verbs",
            Table::Names => "names",
        }
    }
}

impl FromStr for Table {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "words" => Ok(Table::Words),
            "verbs" => Ok(Table::Verbs),
            "names" => Ok(Table::Names),
            other => Err(Error::UnknownTable(other.to_string())),
        }
    }
}

/// Import file format, decided by the case-insensitive filename suffix.
/// Anything that is neither `.csv` nor `.json` is refused outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self, Error> {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".json") {
            Ok(ImportFormat::Json)
        } else if lower.ends_with(".csv") {
            Ok(ImportFormat::Csv)
        } else {
            Err(Error::UnsupportedImportFormat(file_name.to_string()))
        }
    }
}

/// A parsed and validated batch, ready for the store.
#[derive(Debug)]
pub enum ImportBatch {
    Words(Vec<NewWord>),
    Verbs(Vec<NewVerb>),
    Names(Vec<NewName>),
}

/// Row-level check run after deserialization and before any insert.
/// Deserializing into the `New*` payload types already drops columns
/// outside the table schema; this adds the required-field checks.
pub trait ImportRecord: DeserializeOwned {
    fn validate(&self) -> Result<(), String>;
}

impl ImportRecord for NewWord {
    fn validate(&self) -> Result<(), String> {
        if self.word.trim().is_empty() {
            return Err("missing required field: word".to_string());
        }
        Ok(())
    }
}

impl ImportRecord for NewVerb {
    fn validate(&self) -> Result<(), String> {
        for (field, value) in [("v1", &self.v1), ("v2", &self.v2), ("v3", &self.v3)] {
            if value.trim().is_empty() {
                return Err(format!("missing required field: {}", field));
            }
        }
        Ok(())
    }
}

impl ImportRecord for NewName {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("missing required field: name".to_string());
        }
        Ok(())
    }
}

/// Parses a whole import file into a validated batch. Fail-fast: any parse
/// or validation error rejects the entire file before a single row reaches
/// the store.
pub fn parse_batch(table: Table, format: ImportFormat, data: &[u8]) -> Result<ImportBatch, Error> {
    match (table, format) {
        (Table::Words, ImportFormat::Json) => Ok(ImportBatch::Words(json_rows(data)?)),
        (Table::Words, ImportFormat::Csv) => Ok(ImportBatch::Words(csv_rows(data)?)),
        (Table::Verbs, ImportFormat::Json) => Ok(ImportBatch::Verbs(json_rows(data)?)),
        (Table::Verbs, ImportFormat::Csv) => Ok(ImportBatch::Verbs(csv_rows(data)?)),
        (Table::Names, ImportFormat::Json) => Ok(ImportBatch::Names(json_rows(data)?)),
        (Table::Names, ImportFormat::Csv) => Ok(ImportBatch::Names(csv_rows(data)?)),
    }
}

fn json_rows<T: ImportRecord>(data: &[u8]) -> Result<Vec<T>, Error> {
    let rows: Vec<T> = serde_json::from_slice(data).map_err(Error::JsonParseError)?;
    validate_rows(&rows)?;
    Ok(rows)
}

fn csv_rows<T: ImportRecord>(data: &[u8]) -> Result<Vec<T>, Error> {
    let mut reader = csv::Reader::from_reader(data);
    let headers = reader.headers().map_err(Error::CsvParseError)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(Error::CsvParseError)?;
        // Rows that carry no values at all are dropped, not validated.
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let mut object = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            object.insert(header.trim().to_string(), Value::String(field.to_string()));
        }
        let row: T =
            serde_json::from_value(Value::Object(object)).map_err(Error::JsonParseError)?;
        rows.push(row);
    }
    validate_rows(&rows)?;
    Ok(rows)
}

fn validate_rows<T: ImportRecord>(rows: &[T]) -> Result<(), Error> {
    for (index, row) in rows.iter().enumerate() {
        row.validate().map_err(|message| Error::InvalidRow {
            row: index + 1,
            message,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(table: Table, format: ImportFormat, data: &str) -> Result<ImportBatch, Error> {
        parse_batch(table, format, data.as_bytes())
    }

    fn words(batch: ImportBatch) -> Vec<NewWord> {
        match batch {
            ImportBatch::Words(rows) => rows,
            other => panic!("expected a words batch, got {:?}", other),
        }
    }

    fn verbs(batch: ImportBatch) -> Vec<NewVerb> {
        match batch {
            ImportBatch::Verbs(rows) => rows,
            other => panic!("expected a verbs batch, got {:?}", other),
        }
    }

    fn names(batch: ImportBatch) -> Vec<NewName> {
        match batch {
            ImportBatch::Names(rows) => rows,
            other => panic!("expected a names batch, got {:?}", other),
        }
    }

    #[test]
    fn extension_dispatch_is_case_insensitive() {
        assert_eq!(
            ImportFormat::from_file_name("WORDS.CSV").unwrap(),
            ImportFormat::Csv
        );
        assert_eq!(
            ImportFormat::from_file_name("batch.Json").unwrap(),
            ImportFormat::Json
        );
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = ImportFormat::from_file_name("list.txt").unwrap_err();
        assert!(matches!(err, Error::UnsupportedImportFormat(_)));
    }

    #[test]
    fn unknown_table_is_an_error() {
        let err = "accounts".parse::<Table>().unwrap_err();
        assert!(matches!(err, Error::UnknownTable(_)));
    }

    #[test]
    fn json_words_normalize_comma_separated_synonyms() {
        let data = r#"[{"word":"brisk","synonyms":"fast, quick","explanation":"e","example":"e"}]"#;
        let rows = words(parse(Table::Words, ImportFormat::Json, data).unwrap());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].word, "brisk");
        assert_eq!(rows[0].synonyms, vec!["fast", "quick"]);
    }

    #[test]
    fn json_words_accept_synonym_arrays() {
        let data = r#"[{"word":"brisk","synonyms":[" fast ","","quick"],"explanation":"e","example":"e"}]"#;
        let rows = words(parse(Table::Words, ImportFormat::Json, data).unwrap());
        assert_eq!(rows[0].synonyms, vec!["fast", "quick"]);
    }

    #[test]
    fn json_words_tolerate_null_synonyms() {
        let data = r#"[{"word":"brisk","synonyms":null,"explanation":"e","example":"e"}]"#;
        let rows = words(parse(Table::Words, ImportFormat::Json, data).unwrap());
        assert!(rows[0].synonyms.is_empty());
    }

    #[test]
    fn json_verbs_drop_unknown_keys() {
        let data = r#"[{"v1":"run","v2":"ran","v3":"run","note":"ignore me","id":99}]"#;
        let rows = verbs(parse(Table::Verbs, ImportFormat::Json, data).unwrap());
        assert_eq!(
            rows[0],
            NewVerb {
                v1: "run".to_string(),
                v2: "ran".to_string(),
                v3: "run".to_string(),
                ..NewVerb::default()
            }
        );
    }

    #[test]
    fn json_verbs_missing_field_rejects_whole_batch() {
        let data = r#"[
            {"v1":"run","v2":"ran","v3":"run"},
            {"v1":"go","v2":"went"}
        ]"#;
        let err = parse(Table::Verbs, ImportFormat::Json, data).unwrap_err();
        assert!(matches!(err, Error::InvalidRow { row: 2, .. }));
    }

    #[test]
    fn json_verbs_empty_conjugation_counts_as_missing() {
        let data = r#"[{"v1":"run","v2":"  ","v3":"run"}]"#;
        let err = parse(Table::Verbs, ImportFormat::Json, data).unwrap_err();
        assert!(matches!(err, Error::InvalidRow { row: 1, .. }));
    }

    #[test]
    fn json_top_level_must_be_a_list() {
        let err = parse(Table::Words, ImportFormat::Json, r#"{"word":"brisk"}"#).unwrap_err();
        assert!(matches!(err, Error::JsonParseError(_)));
    }

    #[test]
    fn json_names_require_name() {
        let data = r#"[{"synonym":["x"],"example":"e"}]"#;
        let err = parse(Table::Names, ImportFormat::Json, data).unwrap_err();
        assert!(matches!(err, Error::InvalidRow { row: 1, .. }));
    }

    #[test]
    fn csv_words_split_synonyms() {
        let data = "word,synonyms,explanation,example\nbrisk,\"a, b , c\",e1,e2\n";
        let rows = words(parse(Table::Words, ImportFormat::Csv, data).unwrap());
        assert_eq!(rows[0].synonyms, vec!["a", "b", "c"]);
    }

    #[test]
    fn csv_drops_fully_empty_rows() {
        let data = "word,synonyms,explanation,example\nbrisk,fast,e1,e2\n,,,\nswift,quick,e3,e4\n";
        let rows = words(parse(Table::Words, ImportFormat::Csv, data).unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].word, "brisk");
        assert_eq!(rows[1].word, "swift");
    }

    #[test]
    fn csv_words_missing_word_rejected() {
        let data = "word,synonyms,explanation,example\nbrisk,fast,e1,e2\n,quick,e3,e4\n";
        let err = parse(Table::Words, ImportFormat::Csv, data).unwrap_err();
        assert!(matches!(err, Error::InvalidRow { row: 2, .. }));
    }

    #[test]
    fn csv_verbs_missing_v3_rejected() {
        let data = "v1,v1_example,v2,v2_example,v3\nrun,\"I run\",ran,\"I ran\",\n";
        let err = parse(Table::Verbs, ImportFormat::Csv, data).unwrap_err();
        assert!(matches!(err, Error::InvalidRow { row: 1, .. }));
    }

    #[test]
    fn csv_verbs_drop_unknown_columns() {
        let data = "v1,v2,v3,comment\nrun,ran,run,left over\n";
        let rows = verbs(parse(Table::Verbs, ImportFormat::Csv, data).unwrap());
        assert_eq!(rows[0].v1, "run");
        assert_eq!(rows[0].v1_example, "");
    }

    #[test]
    fn csv_names_handle_optional_source_verb() {
        let data = "name,synonym,example\nrunner,\"jogger, sprinter\",e1\n";
        let rows = names(parse(Table::Names, ImportFormat::Csv, data).unwrap());
        assert_eq!(rows[0].synonym, vec!["jogger", "sprinter"]);
        assert_eq!(rows[0].source_verb, None);
    }

    #[test]
    fn reparsing_the_same_file_yields_the_same_batch() {
        // No content dedup anywhere in the pipeline: importing a file twice
        // produces two identical, independent batches.
        let data = r#"[{"word":"brisk","synonyms":["fast"],"explanation":"e","example":"e"}]"#;
        let first = words(parse(Table::Words, ImportFormat::Json, data).unwrap());
        let second = words(parse(Table::Words, ImportFormat::Json, data).unwrap());
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }
}
