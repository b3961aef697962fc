//! Tab Session Lite database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key-value store the session repository persists into.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use tab_session_lite::database::{Database, KeyValueStore, SqliteStore};
//!
//! let db = Arc::new(Database::open("sessions.db").expect("failed to open database"));
//! let store = SqliteStore::new(db);
//! store.set("sessions", "[]").expect("write failed");
//! ```

pub mod connection;
pub mod kv_store;
pub mod migrations;

pub use connection::Database;
pub use kv_store::{KeyValueStore, SqliteStore};
