//! v001 -- Initial schema creation.
//!
//! Creates the `kv` table that holds every persisted document.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY NOT NULL,   -- e.g. recipes, currentUser, favorites_<id>
    value TEXT NOT NULL                -- JSON document, or raw text for the theme
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
