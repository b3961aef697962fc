//! App Core for Tab Session Lite.
//!
//! Central struct holding storage, the session repository, and settings, and
//! wiring the capture and restore engines to a browser host.

use std::sync::Arc;

use tracing::info;

use crate::database::connection::Database;
use crate::database::kv_store::SqliteStore;
use crate::managers::session_repository::{SessionRepository, SessionRepositoryTrait};
use crate::services::browser_host::BrowserHost;
use crate::services::capture_engine::CaptureEngine;
use crate::services::restore_engine::{RestoreEngine, RestoreReport};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::CaptureError;
use crate::types::session::Session;

/// Central application struct.
pub struct App {
    pub db: Arc<Database>,
    pub sessions: SessionRepository<SqliteStore>,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Opens the database at `db_path` and loads settings from the platform config dir.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_settings(db_path, SettingsEngine::new(None))
    }

    /// Like [`App::new`] with an explicit settings engine.
    pub fn with_settings(
        db_path: &str,
        mut settings_engine: SettingsEngine,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let sessions = SessionRepository::new(SqliteStore::new(db.clone()));

        if let Err(e) = settings_engine.load() {
            tracing::warn!(error = %e, "Settings unreadable, using defaults");
        }

        info!(db_path, "Tab Session Lite initialized");
        Ok(Self {
            db,
            sessions,
            settings_engine,
        })
    }

    /// Captures the live browser state and prepends it to the collection.
    ///
    /// Returns `Ok(None)` when there was nothing to save.
    pub async fn save_current_session<H: BrowserHost + ?Sized>(
        &self,
        host: &H,
    ) -> Result<Option<Session>, CaptureError> {
        let existing = self.sessions.load();
        let Some(session) = CaptureEngine::new(host).capture(&existing).await? else {
            return Ok(None);
        };
        self.sessions.save(session.clone())?;
        Ok(Some(session))
    }

    /// Replaces the content of session `id` with the live browser state.
    ///
    /// Returns `Ok(None)` and leaves storage untouched when nothing
    /// restorable is open.
    pub async fn overwrite_session<H: BrowserHost + ?Sized>(
        &self,
        host: &H,
        id: &str,
    ) -> Result<Option<Session>, CaptureError> {
        let existing = self
            .sessions
            .get(id)
            .ok_or_else(|| CaptureError::SessionNotFound(id.to_string()))?;

        let Some(session) = CaptureEngine::new(host).overwrite(&existing).await? else {
            return Ok(None);
        };

        if !self.sessions.update(session.clone())? {
            return Err(CaptureError::SessionNotFound(id.to_string()));
        }
        Ok(Some(session))
    }

    /// Restore engine configured from the current settings.
    pub fn restore_engine<'a, H: BrowserHost + ?Sized>(&self, host: &'a H) -> RestoreEngine<'a, H> {
        RestoreEngine::new(host, self.settings_engine.get_settings().clone())
    }

    /// Restores the stored session `id`, if it exists.
    pub async fn restore_session<H: BrowserHost + ?Sized>(
        &self,
        host: &H,
        id: &str,
    ) -> Option<RestoreReport> {
        let session = self.sessions.get(id)?;
        Some(self.restore_engine(host).restore_session(&session).await)
    }
}
