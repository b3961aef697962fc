//! Capture Engine.
//!
//! Turns live host windows, tabs, and tab groups into a [`Session`] record.
//! Capture has no side effects on the host and does not persist anything;
//! callers hand the result to the session repository.

use std::collections::HashMap;

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use crate::services::browser_host::BrowserHost;
use crate::types::errors::HostError;
use crate::types::host::{HostTab, HostWindow};
use crate::types::session::{Session, TabGroupInfo, TabRecord, WindowRecord};

/// Title stored for tabs the host reports without one.
pub const UNTITLED_TAB: &str = "Untitled";

/// Schemes that cannot be reopened from a saved URL.
const NON_RESTORABLE_SCHEMES: &[&str] = &[
    "about",
    "chrome",
    "chrome-extension",
    "chrome-search",
    "chrome-untrusted",
    "chrome-devtools",
    "devtools",
    "edge",
    "brave",
    "opera",
    "vivaldi",
    "moz-extension",
    "extension",
    "data",
    "javascript",
    "view-source",
];

/// Whether a tab URL can be saved and reopened later.
pub fn is_restorable_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    match Url::parse(url) {
        Ok(parsed) => !NON_RESTORABLE_SCHEMES.contains(&parsed.scheme()),
        Err(_) => false,
    }
}

/// Default display name for a session captured at `at`.
pub fn default_session_name(at: DateTime<Utc>) -> String {
    format!("Session {}", at.with_timezone(&Local).format("%Y/%m/%d %H:%M:%S"))
}

/// Time-derived session id that is not already taken by `existing`.
pub fn unique_session_id(at: DateTime<Utc>, existing: &[Session]) -> String {
    let mut candidate = at.timestamp_millis();
    while existing.iter().any(|s| s.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

pub struct CaptureEngine<'a, H: BrowserHost + ?Sized> {
    host: &'a H,
}

impl<'a, H: BrowserHost + ?Sized> CaptureEngine<'a, H> {
    pub fn new(host: &'a H) -> Self {
        Self { host }
    }

    /// Captures all restorable windows as a new session.
    ///
    /// Returns `Ok(None)` when nothing restorable is open.
    pub async fn capture(&self, existing: &[Session]) -> Result<Option<Session>, HostError> {
        let windows = self.capture_windows().await?;
        if windows.is_empty() {
            info!("No restorable tabs open, nothing to capture");
            return Ok(None);
        }

        let now = Utc::now();
        let mut session = Session {
            id: unique_session_id(now, existing),
            name: default_session_name(now),
            created_at: now,
            updated_at: None,
            total_tabs: 0,
            windows,
        };
        session.recompute_total_tabs();
        info!(session_id = %session.id, windows = session.windows.len(), tabs = session.total_tabs, "Captured session");
        Ok(Some(session))
    }

    /// Re-captures live state into `existing`, keeping its id, name, and
    /// creation time.
    ///
    /// Returns `Ok(None)` when nothing restorable is open; the caller must
    /// then leave the stored session untouched.
    pub async fn overwrite(&self, existing: &Session) -> Result<Option<Session>, HostError> {
        let windows = self.capture_windows().await?;
        if windows.is_empty() {
            info!(session_id = %existing.id, "No restorable tabs open, keeping session as is");
            return Ok(None);
        }

        let mut session = Session {
            id: existing.id.clone(),
            name: existing.name.clone(),
            created_at: existing.created_at,
            updated_at: Some(Utc::now()),
            total_tabs: 0,
            windows,
        };
        session.recompute_total_tabs();
        info!(session_id = %session.id, tabs = session.total_tabs, "Overwrote session content");
        Ok(Some(session))
    }

    async fn capture_windows(&self) -> Result<Vec<WindowRecord>, HostError> {
        let host_windows = self.host.get_all_windows().await?;
        let groups = self.snapshot_groups().await;

        Ok(host_windows
            .iter()
            .filter(|w| !w.incognito)
            .filter_map(|w| window_record(w, &groups))
            .collect())
    }

    async fn snapshot_groups(&self) -> HashMap<i64, TabGroupInfo> {
        match self.host.query_tab_groups().await {
            Ok(groups) => groups
                .into_iter()
                .map(|g| {
                    (
                        g.id,
                        TabGroupInfo {
                            title: g.title.unwrap_or_default(),
                            color: g.color,
                            collapsed: g.collapsed,
                        },
                    )
                })
                .collect(),
            Err(e) => {
                warn!(error = %e, "Tab groups unavailable, capturing tabs ungrouped");
                HashMap::new()
            }
        }
    }
}

/// Builds the record for one host window, or `None` when none of its tabs
/// can be restored.
fn window_record(window: &HostWindow, groups: &HashMap<i64, TabGroupInfo>) -> Option<WindowRecord> {
    let kept: Vec<&HostTab> = window
        .tabs
        .iter()
        .filter(|t| t.url.as_deref().is_some_and(is_restorable_url))
        .collect();

    if kept.is_empty() {
        debug!(window_id = window.id, "Dropping window without restorable tabs");
        return None;
    }

    let active_tab_index = kept.iter().position(|t| t.active).unwrap_or(0);
    let tabs = kept.into_iter().map(|t| tab_record(t, groups)).collect();

    Some(WindowRecord {
        window_id: window.id,
        left: window.left,
        top: window.top,
        width: window.width,
        height: window.height,
        state: window.state,
        active_tab_index,
        tabs,
    })
}

fn tab_record(tab: &HostTab, groups: &HashMap<i64, TabGroupInfo>) -> TabRecord {
    let group_info = tab.group_id.and_then(|id| groups.get(&id).cloned());
    TabRecord {
        id: Uuid::new_v4().to_string(),
        title: tab
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED_TAB.to_string()),
        url: tab.url.clone().unwrap_or_default(),
        fav_icon_url: tab.fav_icon_url.clone().unwrap_or_default(),
        group_id: tab.group_id,
        group_info,
    }
}
