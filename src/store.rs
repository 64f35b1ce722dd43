use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::types::name::{Name, NewName};
use crate::types::verb::{NewVerb, Verb};
use crate::types::word::{NewWord, Word};

#[derive(Clone)]
pub struct Store {
    pub connection: PgPool,
}

impl Store {
    pub async fn new(db_url: &str) -> Self {
        let db_pool = match PgPoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await
        {
            Ok(pool) => pool,
            Err(e) => panic!("cannot connect to database: {e}"),
        };
        Store {
            connection: db_pool,
        }
    }

    pub async fn get_words(&self) -> Result<Vec<Word>, handle_errors::Error> {
        match sqlx::query("SELECT * FROM words ORDER BY created_at DESC")
            .map(|row: PgRow| Word {
                id: row.get("id"),
                word: row.get("word"),
                synonyms: row.get("synonyms"),
                explanation: row.get("explanation"),
                example: row.get("example"),
                created_at: row.get("created_at"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(words) => Ok(words),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn get_word(&self, id: i32) -> Result<Word, handle_errors::Error> {
        match sqlx::query("SELECT * FROM words WHERE id = $1")
            .bind(id)
            .map(|row: PgRow| Word {
                id: row.get("id"),
                word: row.get("word"),
                synonyms: row.get("synonyms"),
                explanation: row.get("explanation"),
                example: row.get("example"),
                created_at: row.get("created_at"),
            })
            .fetch_one(&self.connection)
            .await
        {
            Ok(word) => Ok(word),
            Err(sqlx::Error::RowNotFound) => Err(handle_errors::Error::ItemNotFound),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn add_word(&self, new_word: NewWord) -> Result<Word, handle_errors::Error> {
        match sqlx::query(
            "INSERT INTO words (word, synonyms, explanation, example)
            VALUES ($1, $2, $3, $4)
            RETURNING id, word, synonyms, explanation, example, created_at",
        )
        .bind(new_word.word)
        .bind(new_word.synonyms)
        .bind(new_word.explanation)
        .bind(new_word.example)
        .map(|row: PgRow| Word {
            id: row.get("id"),
            word: row.get("word"),
            synonyms: row.get("synonyms"),
            explanation: row.get("explanation"),
            example: row.get("example"),
            created_at: row.get("created_at"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(word) => Ok(word),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    /// Inserts rows one by one, without a transaction. A mid-batch failure
    /// aborts the remainder and leaves earlier rows in place.
    pub async fn add_words(&self, rows: Vec<NewWord>) -> Result<usize, handle_errors::Error> {
        let mut inserted = 0;
        for row in rows {
            self.add_word(row).await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    pub async fn update_word(
        &self,
        id: i32,
        new_word: NewWord,
    ) -> Result<Word, handle_errors::Error> {
        match sqlx::query(
            "UPDATE words
            SET word = $1, synonyms = $2, explanation = $3, example = $4
            WHERE id = $5
            RETURNING id, word, synonyms, explanation, example, created_at",
        )
        .bind(new_word.word)
        .bind(new_word.synonyms)
        .bind(new_word.explanation)
        .bind(new_word.example)
        .bind(id)
        .map(|row: PgRow| Word {
            id: row.get("id"),
            word: row.get("word"),
            synonyms: row.get("synonyms"),
            explanation: row.get("explanation"),
            example: row.get("example"),
            created_at: row.get("created_at"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(word) => Ok(word),
            Err(sqlx::Error::RowNotFound) => Err(handle_errors::Error::ItemNotFound),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn delete_word(&self, id: i32) -> Result<(), handle_errors::Error> {
        match sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(id)
            .execute(&self.connection)
            .await
        {
            Ok(result) if result.rows_affected() == 0 => Err(handle_errors::Error::ItemNotFound),
            Ok(_) => Ok(()),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn delete_words(&self, ids: Vec<i32>) -> Result<u64, handle_errors::Error> {
        match sqlx::query("DELETE FROM words WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.connection)
            .await
        {
            Ok(result) => Ok(result.rows_affected()),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn get_verbs(&self) -> Result<Vec<Verb>, handle_errors::Error> {
        match sqlx::query("SELECT * FROM verbs ORDER BY created_at DESC")
            .map(|row: PgRow| Verb {
                id: row.get("id"),
                v1: row.get("v1"),
                v1_example: row.get("v1_example"),
                v2: row.get("v2"),
                v2_example: row.get("v2_example"),
                v3: row.get("v3"),
                v3_example: row.get("v3_example"),
                created_at: row.get("created_at"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(verbs) => Ok(verbs),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn get_verb(&self, id: i32) -> Result<Verb, handle_errors::Error> {
        match sqlx::query("SELECT * FROM verbs WHERE id = $1")
            .bind(id)
            .map(|row: PgRow| Verb {
                id: row.get("id"),
                v1: row.get("v1"),
                v1_example: row.get("v1_example"),
                v2: row.get("v2"),
                v2_example: row.get("v2_example"),
                v3: row.get("v3"),
                v3_example: row.get("v3_example"),
                created_at: row.get("created_at"),
            })
            .fetch_one(&self.connection)
            .await
        {
            Ok(verb) => Ok(verb),
            Err(sqlx::Error::RowNotFound) => Err(handle_errors::Error::ItemNotFound),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn add_verb(&self, new_verb: NewVerb) -> Result<Verb, handle_errors::Error> {
        match sqlx::query(
            "INSERT INTO verbs (v1, v1_example, v2, v2_example, v3, v3_example)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, v1, v1_example, v2, v2_example, v3, v3_example, created_at",
        )
        .bind(new_verb.v1)
        .bind(new_verb.v1_example)
        .bind(new_verb.v2)
        .bind(new_verb.v2_example)
        .bind(new_verb.v3)
        .bind(new_verb.v3_example)
        .map(|row: PgRow| Verb {
            id: row.get("id"),
            v1: row.get("v1"),
            v1_example: row.get("v1_example"),
            v2: row.get("v2"),
            v2_example: row.get("v2_example"),
            v3: row.get("v3"),
            v3_example: row.get("v3_example"),
            created_at: row.get("created_at"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(verb) => Ok(verb),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    /// Same batch semantics as `add_words`.
    pub async fn add_verbs(&self, rows: Vec<NewVerb>) -> Result<usize, handle_errors::Error> {
        let mut inserted = 0;
        for row in rows {
            self.add_verb(row).await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    pub async fn update_verb(
        &self,
        id: i32,
        new_verb: NewVerb,
    ) -> Result<Verb, handle_errors::Error> {
        match sqlx::query(
            "UPDATE verbs
            SET v1 = $1, v1_example = $2, v2 = $3, v2_example = $4, v3 = $5, v3_example = $6
            WHERE id = $7
            RETURNING id, v1, v1_example, v2, v2_example, v3, v3_example, created_at",
        )
        .bind(new_verb.v1)
        .bind(new_verb.v1_example)
        .bind(new_verb.v2)
        .bind(new_verb.v2_example)
        .bind(new_verb.v3)
        .bind(new_verb.v3_example)
        .bind(id)
        .map(|row: PgRow| Verb {
            id: row.get("id"),
            v1: row.get("v1"),
            v1_example: row.get("v1_example"),
            v2: row.get("v2"),
            v2_example: row.get("v2_example"),
            v3: row.get("v3"),
            v3_example: row.get("v3_example"),
            created_at: row.get("created_at"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(verb) => Ok(verb),
            Err(sqlx::Error::RowNotFound) => Err(handle_errors::Error::ItemNotFound),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn delete_verb(&self, id: i32) -> Result<(), handle_errors::Error> {
        match sqlx::query("DELETE FROM verbs WHERE id = $1")
            .bind(id)
            .execute(&self.connection)
            .await
        {
            Ok(result) if result.rows_affected() == 0 => Err(handle_errors::Error::ItemNotFound),
            Ok(_) => Ok(()),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn delete_verbs(&self, ids: Vec<i32>) -> Result<u64, handle_errors::Error> {
        match sqlx::query("DELETE FROM verbs WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.connection)
            .await
        {
            Ok(result) => Ok(result.rows_affected()),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn get_names(&self) -> Result<Vec<Name>, handle_errors::Error> {
        match sqlx::query("SELECT * FROM names ORDER BY created_at DESC")
            .map(|row: PgRow| Name {
                id: row.get("id"),
                name: row.get("name"),
                synonym: row.get("synonym"),
                example: row.get("example"),
                source_verb: row.get("source_verb"),
                created_at: row.get("created_at"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(names) => Ok(names),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn get_name(&self, id: i32) -> Result<Name, handle_errors::Error> {
        match sqlx::query("SELECT * FROM names WHERE id = $1")
            .bind(id)
            .map(|row: PgRow| Name {
                id: row.get("id"),
                name: row.get("name"),
                synonym: row.get("synonym"),
                example: row.get("example"),
                source_verb: row.get("source_verb"),
                created_at: row.get("created_at"),
            })
            .fetch_one(&self.connection)
            .await
        {
            Ok(name) => Ok(name),
            Err(sqlx::Error::RowNotFound) => Err(handle_errors::Error::ItemNotFound),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn add_name(&self, new_name: NewName) -> Result<Name, handle_errors::Error> {
        match sqlx::query(
            "INSERT INTO names (name, synonym, example, source_verb)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, synonym, example, source_verb, created_at",
        )
        .bind(new_name.name)
        .bind(new_name.synonym)
        .bind(new_name.example)
        .bind(new_name.source_verb)
        .map(|row: PgRow| Name {
            id: row.get("id"),
            name: row.get("name"),
            synonym: row.get("synonym"),
            example: row.get("example"),
            source_verb: row.get("source_verb"),
            created_at: row.get("created_at"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(name) => Ok(name),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    /// Same batch semantics as `add_words`.
    pub async fn add_names(&self, rows: Vec<NewName>) -> Result<usize, handle_errors::Error> {
        let mut inserted = 0;
        for row in rows {
            self.add_name(row).await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    pub async fn update_name(
        &self,
        id: i32,
        new_name: NewName,
    ) -> Result<Name, handle_errors::Error> {
        match sqlx::query(
            "UPDATE names
            SET name = $1, synonym = $2, example = $3, source_verb = $4
            WHERE id = $5
            RETURNING id, name, synonym, example, source_verb, created_at",
        )
        .bind(new_name.name)
        .bind(new_name.synonym)
        .bind(new_name.example)
        .bind(new_name.source_verb)
        .bind(id)
        .map(|row: PgRow| Name {
            id: row.get("id"),
            name: row.get("name"),
            synonym: row.get("synonym"),
            example: row.get("example"),
            source_verb: row.get("source_verb"),
            created_at: row.get("created_at"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(name) => Ok(name),
            Err(sqlx::Error::RowNotFound) => Err(handle_errors::Error::ItemNotFound),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn delete_name(&self, id: i32) -> Result<(), handle_errors::Error> {
        match sqlx::query("DELETE FROM names WHERE id = $1")
            .bind(id)
            .execute(&self.connection)
            .await
        {
            Ok(result) if result.rows_affected() == 0 => Err(handle_errors::Error::ItemNotFound),
            Ok(_) => Ok(()),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }

    pub async fn delete_names(&self, ids: Vec<i32>) -> Result<u64, handle_errors::Error> {
        match sqlx::query("DELETE FROM names WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.connection)
            .await
        {
            Ok(result) => Ok(result.rows_affected()),
            Err(e) => Err(handle_errors::Error::DatabaseQueryError(e)),
        }
    }
}
