use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format version written into every export document.
pub const EXPORT_FORMAT_VERSION: &str = "1.0.0";

/// A persisted snapshot of one or more windows and their tabs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_tabs: usize,
    pub windows: Vec<WindowRecord>,
}

impl Session {
    /// Live sum of tab counts across all windows.
    pub fn count_tabs(&self) -> usize {
        self.windows.iter().map(|w| w.tabs.len()).sum()
    }

    /// Recomputes `total_tabs` from the current windows.
    pub fn recompute_total_tabs(&mut self) {
        self.total_tabs = self.count_tabs();
    }

    /// Drops windows without tabs and recomputes the tab total.
    pub fn normalize(&mut self) {
        self.windows.retain(|w| !w.tabs.is_empty());
        self.recompute_total_tabs();
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Removes a tab by its local token from the window at `window_index`.
    ///
    /// A window left without tabs is removed as well. Returns false when the
    /// window or tab does not exist.
    pub fn remove_tab(&mut self, window_index: usize, tab_id: &str) -> bool {
        let Some(window) = self.windows.get_mut(window_index) else {
            return false;
        };
        let before = window.tabs.len();
        window.tabs.retain(|t| t.id != tab_id);
        if window.tabs.len() == before {
            return false;
        }
        if window.tabs.is_empty() {
            self.windows.remove(window_index);
        } else if window.active_tab_index >= window.tabs.len() {
            window.active_tab_index = 0;
        }
        self.recompute_total_tabs();
        true
    }

    /// Removes the window at `window_index`. Returns false when out of range.
    pub fn remove_window(&mut self, window_index: usize) -> bool {
        if window_index >= self.windows.len() {
            return false;
        }
        self.windows.remove(window_index);
        self.recompute_total_tabs();
        true
    }
}

/// Host window state at capture time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Fullscreen,
}

/// One captured window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    /// Host id at capture time; not valid after the window closes.
    pub window_id: i64,
    #[serde(default)]
    pub left: Option<i32>,
    #[serde(default)]
    pub top: Option<i32>,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub state: WindowState,
    #[serde(default)]
    pub active_tab_index: usize,
    pub tabs: Vec<TabRecord>,
}

impl WindowRecord {
    /// The recorded active index, or 0 when it no longer points at a tab.
    pub fn effective_active_index(&self) -> usize {
        if self.active_tab_index < self.tabs.len() {
            self.active_tab_index
        } else {
            0
        }
    }
}

/// One captured tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabRecord {
    /// Local token used by edit operations, unrelated to the host tab id.
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub fav_icon_url: String,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub group_info: Option<TabGroupInfo>,
}

/// Tab group colors offered by the host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TabGroupColor {
    #[default]
    Grey,
    Blue,
    Red,
    Yellow,
    Green,
    Pink,
    Purple,
    Cyan,
    Orange,
}

/// Group descriptor stored on each grouped tab.
///
/// Equal descriptors mean "same group" at restore time; the host group id is
/// not reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TabGroupInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub color: TabGroupColor,
    #[serde(default)]
    pub collapsed: bool,
}

/// Document produced by export and accepted by import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub sessions: Vec<Session>,
}

/// Outcome of an import, reported instead of an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportResult {
    pub success: bool,
    pub imported: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImportResult {
    pub fn ok(imported: usize) -> Self {
        Self {
            success: true,
            imported,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            imported: 0,
            error: Some(error.into()),
        }
    }
}

/// Result of a session-edit operation.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The edited session was persisted.
    Updated(Session),
    /// The edit left the session without windows, so it was deleted.
    SessionRemoved,
    /// No session, window, or tab matched.
    NotFound,
}
