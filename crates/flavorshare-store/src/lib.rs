//! # flavorshare-store
//!
//! Local persistent storage for FlavorShare, backed by SQLite.
//!
//! The store is a plain key-value table holding JSON documents. The crate
//! exposes a synchronous `Database` handle that wraps a `rusqlite::Connection`
//! and provides raw `get`/`set`/`remove` plus typed helpers for each
//! persisted collection (recipes, current user, favorites, theme).

pub mod collections;
pub mod database;
pub mod kv;
pub mod migrations;

mod error;

pub use database::Database;
pub use error::{Result, StoreError};
