//! Session Repository for Tab Session Lite.
//!
//! Owns the persisted collection of sessions. The whole collection lives as
//! one JSON document under a fixed key in a [`KeyValueStore`]; every write
//! replaces that document, so no partial write is ever observable.

use std::collections::HashSet;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::database::KeyValueStore;
use crate::types::errors::StorageError;
use crate::types::session::{
    EditOutcome, ExportDocument, ImportResult, Session, EXPORT_FORMAT_VERSION,
};

/// Storage key holding the session collection.
pub const SESSIONS_KEY: &str = "sessions";

/// Trait defining session persistence and edit operations.
pub trait SessionRepositoryTrait {
    fn load(&self) -> Vec<Session>;
    fn get(&self, id: &str) -> Option<Session>;
    fn save(&self, session: Session) -> Result<(), StorageError>;
    fn update(&self, session: Session) -> Result<bool, StorageError>;
    fn delete(&self, id: &str) -> Result<bool, StorageError>;
    fn clear_all(&self) -> Result<(), StorageError>;
    fn export(&self) -> Result<String, StorageError>;
    fn import(&self, json: &str, overwrite: bool) -> ImportResult;
    fn rename(&self, id: &str, name: &str) -> Result<EditOutcome, StorageError>;
    fn delete_tab(&self, id: &str, window_index: usize, tab_id: &str) -> Result<EditOutcome, StorageError>;
    fn delete_window(&self, id: &str, window_index: usize) -> Result<EditOutcome, StorageError>;
}

/// Session repository over any key-value store.
pub struct SessionRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn write_all(&self, sessions: &[Session]) -> Result<(), StorageError> {
        let json = serde_json::to_string(sessions)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.store.set(SESSIONS_KEY, &json)
    }

    /// Applies `edit` to the stored session with `id` and persists the result.
    fn edit<F>(&self, id: &str, edit: F) -> Result<EditOutcome, StorageError>
    where
        F: FnOnce(&mut Session) -> bool,
    {
        let mut sessions = self.load();
        let Some(index) = sessions.iter().position(|s| s.id == id) else {
            return Ok(EditOutcome::NotFound);
        };

        if !edit(&mut sessions[index]) {
            return Ok(EditOutcome::NotFound);
        }

        if sessions[index].is_empty() {
            sessions.remove(index);
            self.write_all(&sessions)?;
            info!(session_id = id, "Session has no windows left, removed");
            return Ok(EditOutcome::SessionRemoved);
        }

        sessions[index].recompute_total_tabs();
        let updated = sessions[index].clone();
        self.write_all(&sessions)?;
        Ok(EditOutcome::Updated(updated))
    }

    /// Parses an import document down to its normalized session list.
    fn parse_import(json: &str) -> Result<Vec<Session>, String> {
        let document: Value =
            serde_json::from_str(json).map_err(|e| format!("Invalid JSON: {}", e))?;

        let sessions = document
            .get("sessions")
            .filter(|v| v.is_array())
            .cloned()
            .ok_or_else(|| "Invalid format: missing sessions array".to_string())?;

        let sessions: Vec<Session> = serde_json::from_value(sessions)
            .map_err(|e| format!("Invalid format: {}", e))?;

        Ok(sessions
            .into_iter()
            .filter_map(|mut session| {
                session.normalize();
                (!session.is_empty()).then_some(session)
            })
            .collect())
    }
}

impl<S: KeyValueStore> SessionRepositoryTrait for SessionRepository<S> {
    /// Loads the stored collection. Missing or unreadable data yields an empty list.
    fn load(&self) -> Vec<Session> {
        let raw = match self.store.get(SESSIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read sessions, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(sessions) => sessions,
            Err(e) => {
                warn!(error = %e, "Stored sessions are unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    fn get(&self, id: &str) -> Option<Session> {
        self.load().into_iter().find(|s| s.id == id)
    }

    /// Prepends a new session to the collection. Windows without tabs are
    /// dropped first.
    fn save(&self, mut session: Session) -> Result<(), StorageError> {
        session.normalize();
        if session.is_empty() {
            return Err(StorageError::InvalidSession(format!(
                "session {} has no windows",
                session.id
            )));
        }

        let mut sessions = self.load();
        debug!(session_id = %session.id, tabs = session.total_tabs, "Saving session");
        sessions.insert(0, session);
        self.write_all(&sessions)
    }

    /// Replaces the stored session with the same id.
    ///
    /// Returns false when no session matches. Windows without tabs are
    /// dropped; an update left without windows deletes the stored session.
    fn update(&self, mut session: Session) -> Result<bool, StorageError> {
        let mut sessions = self.load();
        let Some(index) = sessions.iter().position(|s| s.id == session.id) else {
            return Ok(false);
        };

        session.normalize();
        if session.is_empty() {
            sessions.remove(index);
        } else {
            sessions[index] = session;
        }
        self.write_all(&sessions)?;
        Ok(true)
    }

    /// Removes the session with `id`. Succeeds even if nothing matched.
    fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let mut sessions = self.load();
        sessions.retain(|s| s.id != id);
        self.write_all(&sessions)?;
        Ok(true)
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        self.write_all(&[])
    }

    fn export(&self) -> Result<String, StorageError> {
        let document = ExportDocument {
            version: EXPORT_FORMAT_VERSION.to_string(),
            exported_at: Utc::now(),
            sessions: self.load(),
        };
        serde_json::to_string_pretty(&document)
            .map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Imports sessions from an export document.
    ///
    /// Overwrite mode replaces the collection. Merge mode prepends only
    /// sessions whose id is not already stored.
    fn import(&self, json: &str, overwrite: bool) -> ImportResult {
        let incoming = match Self::parse_import(json) {
            Ok(sessions) => sessions,
            Err(msg) => {
                warn!(error = %msg, "Rejected import document");
                return ImportResult::failed(msg);
            }
        };

        if overwrite {
            let count = incoming.len();
            return match self.write_all(&incoming) {
                Ok(()) => {
                    info!(count, "Imported sessions, replacing collection");
                    ImportResult::ok(count)
                }
                Err(e) => ImportResult::failed(e.to_string()),
            };
        }

        let existing = self.load();
        let mut seen: HashSet<String> = existing.iter().map(|s| s.id.clone()).collect();
        let mut merged: Vec<Session> = incoming
            .into_iter()
            .filter(|s| seen.insert(s.id.clone()))
            .collect();
        let count = merged.len();

        if count == 0 {
            return ImportResult::ok(0);
        }

        merged.extend(existing);
        match self.write_all(&merged) {
            Ok(()) => {
                info!(count, "Merged imported sessions");
                ImportResult::ok(count)
            }
            Err(e) => ImportResult::failed(e.to_string()),
        }
    }

    fn rename(&self, id: &str, name: &str) -> Result<EditOutcome, StorageError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StorageError::InvalidSession(
                "session name cannot be empty".to_string(),
            ));
        }
        self.edit(id, |session| {
            session.name = name.to_string();
            true
        })
    }

    fn delete_tab(&self, id: &str, window_index: usize, tab_id: &str) -> Result<EditOutcome, StorageError> {
        self.edit(id, |session| session.remove_tab(window_index, tab_id))
    }

    fn delete_window(&self, id: &str, window_index: usize) -> Result<EditOutcome, StorageError> {
        self.edit(id, |session| session.remove_window(window_index))
    }
}
