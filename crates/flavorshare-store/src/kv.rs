//! Raw key-value access plus JSON (de)serialization on top of it.

use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::Database;
use crate::error::{Result, StoreError};

impl Database {
    // ------------------------------------------------------------------
    // Raw
    // ------------------------------------------------------------------

    /// Fetch the serialized value stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn()
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        tracing::debug!(key, found = value.is_some(), "kv get");
        Ok(value)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        tracing::debug!(key, bytes = value.len(), "kv set");
        Ok(())
    }

    /// Delete `key`.  Returns `true` if a value was removed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        tracing::debug!(key, removed = affected > 0, "kv remove");
        Ok(affected > 0)
    }

    // ------------------------------------------------------------------
    // JSON
    // ------------------------------------------------------------------

    /// Decode the JSON document under `key`.  Fails on malformed data.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Json {
                key: key.to_string(),
                source,
            })
    }

    /// Encode `value` as JSON and store it under `key`.
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Json {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &json)
    }

    /// Decode the JSON document under `key`, falling back to `T::default()`
    /// when it is missing or corrupt.
    ///
    /// Corrupt documents are logged and left in place; the next write
    /// replaces them.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match self.get_json(key) {
            Ok(value) => Ok(value.unwrap_or_default()),
            Err(StoreError::Json { source, .. }) => {
                tracing::warn!(key, error = %source, "corrupt stored value, using default");
                Ok(T::default())
            }
            Err(other) => Err(other),
        }
    }
}
