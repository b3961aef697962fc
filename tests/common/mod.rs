//! Shared fixtures for integration tests: an in-memory browser host and
//! small builders for sessions and host objects.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use tab_session_lite::services::browser_host::BrowserHost;
use tab_session_lite::types::errors::HostError;
use tab_session_lite::types::host::{
    Bounds, CreateTabOptions, CreateWindowOptions, DisplayInfo, HostTab, HostTabGroup, HostWindow,
    TabGroupUpdate,
};
use tab_session_lite::types::session::{
    Session, TabGroupColor, TabGroupInfo, TabRecord, WindowRecord, WindowState,
};

/// Everything the fake host knows and everything it was asked to do.
#[derive(Default)]
pub struct FakeState {
    // configuration
    pub windows: Vec<HostWindow>,
    pub groups: Vec<HostTabGroup>,
    pub displays: Vec<DisplayInfo>,
    pub groups_unsupported: bool,
    pub displays_unavailable: bool,
    /// Zero-based `create_window` calls that fail.
    pub fail_window_calls: Vec<usize>,
    /// `create_tab` fails when the requested URL contains one of these.
    pub fail_tab_urls: Vec<String>,
    /// `create_window` succeeds but returns a window without tabs.
    pub omit_initial_tab: bool,

    // recorded calls
    pub window_calls: usize,
    pub created_windows: Vec<CreateWindowOptions>,
    pub created_tabs: Vec<CreateTabOptions>,
    pub group_calls: Vec<(Vec<i64>, Option<i64>)>,
    pub group_updates: Vec<(i64, TabGroupUpdate)>,
    pub activated: Vec<i64>,
    pub state_updates: Vec<(i64, WindowState)>,
    /// Call names in order, for sequencing assertions.
    pub log: Vec<String>,

    // live objects created through the fake
    pub live_tabs: HashMap<i64, Vec<HostTab>>,
    pub tab_groups: HashMap<i64, i64>,
    next_id: i64,
}

impl FakeState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        1000 + self.next_id
    }

    /// Number of distinct groups the created tabs ended up in.
    pub fn distinct_groups(&self) -> usize {
        let mut ids: Vec<i64> = self.tab_groups.values().copied().collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}

pub struct FakeHost {
    state: Mutex<FakeState>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState::default()),
        }
    }

    pub fn with_windows(windows: Vec<HostWindow>) -> Self {
        let host = Self::new();
        host.state().windows = windows;
        host
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl BrowserHost for FakeHost {
    async fn get_all_windows(&self) -> Result<Vec<HostWindow>, HostError> {
        Ok(self.state().windows.clone())
    }

    async fn query_tab_groups(&self) -> Result<Vec<HostTabGroup>, HostError> {
        let state = self.state();
        if state.groups_unsupported {
            return Err(HostError::Unsupported("tabGroups".to_string()));
        }
        Ok(state.groups.clone())
    }

    async fn create_window(&self, options: CreateWindowOptions) -> Result<HostWindow, HostError> {
        let mut state = self.state();
        let call = state.window_calls;
        state.window_calls += 1;
        state.log.push("create_window".to_string());
        state.created_windows.push(options.clone());

        if state.fail_window_calls.contains(&call) {
            return Err(HostError::Rejected(format!("window call {}", call)));
        }

        let window_id = state.next_id();
        let tabs = if state.omit_initial_tab {
            Vec::new()
        } else {
            let tab = HostTab {
                id: state.next_id(),
                window_id,
                index: 0,
                url: options.url.clone(),
                active: true,
                ..HostTab::default()
            };
            vec![tab]
        };
        state.live_tabs.insert(window_id, tabs.clone());

        Ok(HostWindow {
            id: window_id,
            tabs,
            ..HostWindow::default()
        })
    }

    async fn update_window_state(&self, window_id: i64, state: WindowState) -> Result<(), HostError> {
        let mut s = self.state();
        s.log.push("update_window_state".to_string());
        s.state_updates.push((window_id, state));
        Ok(())
    }

    async fn create_tab(&self, options: CreateTabOptions) -> Result<HostTab, HostError> {
        let mut state = self.state();
        state.log.push("create_tab".to_string());
        state.created_tabs.push(options.clone());

        if state.fail_tab_urls.iter().any(|u| options.url.contains(u.as_str())) {
            return Err(HostError::Rejected(format!("tab {}", options.url)));
        }

        let window_id = options.window_id.unwrap_or(1);
        let tab_id = state.next_id();
        let tabs = state.live_tabs.entry(window_id).or_default();
        let position = options.index.unwrap_or(tabs.len()).min(tabs.len());
        tabs.insert(
            position,
            HostTab {
                id: tab_id,
                window_id,
                url: Some(options.url.clone()),
                active: options.active,
                ..HostTab::default()
            },
        );
        for (index, tab) in tabs.iter_mut().enumerate() {
            tab.index = index;
        }

        Ok(tabs[position].clone())
    }

    async fn get_window_tabs(&self, window_id: i64) -> Result<Vec<HostTab>, HostError> {
        self.state()
            .live_tabs
            .get(&window_id)
            .cloned()
            .ok_or_else(|| HostError::NotFound(format!("window {}", window_id)))
    }

    async fn activate_tab(&self, tab_id: i64) -> Result<(), HostError> {
        let mut state = self.state();
        state.log.push("activate_tab".to_string());
        state.activated.push(tab_id);
        Ok(())
    }

    async fn group_tabs(&self, tab_ids: &[i64], group_id: Option<i64>) -> Result<i64, HostError> {
        let mut state = self.state();
        state.log.push("group_tabs".to_string());
        state.group_calls.push((tab_ids.to_vec(), group_id));
        if state.groups_unsupported {
            return Err(HostError::Unsupported("tabGroups".to_string()));
        }

        let group_id = match group_id {
            Some(id) => id,
            None => state.next_id(),
        };
        for tab_id in tab_ids {
            state.tab_groups.insert(*tab_id, group_id);
        }
        Ok(group_id)
    }

    async fn update_tab_group(&self, group_id: i64, update: TabGroupUpdate) -> Result<(), HostError> {
        let mut state = self.state();
        let entry = if update.collapsed == Some(true) {
            "collapse_group"
        } else {
            "update_tab_group"
        };
        state.log.push(entry.to_string());
        state.group_updates.push((group_id, update));
        if state.groups_unsupported {
            return Err(HostError::Unsupported("tabGroups".to_string()));
        }
        Ok(())
    }

    async fn get_displays(&self) -> Result<Vec<DisplayInfo>, HostError> {
        let state = self.state();
        if state.displays_unavailable {
            return Err(HostError::Unsupported("system.display".to_string()));
        }
        Ok(state.displays.clone())
    }
}

// --- builders ---

pub fn host_tab(id: i64, window_id: i64, index: usize, url: &str, active: bool) -> HostTab {
    HostTab {
        id,
        window_id,
        index,
        url: Some(url.to_string()),
        title: Some(format!("Title {}", id)),
        fav_icon_url: None,
        active,
        group_id: None,
    }
}

pub fn host_window(id: i64, tabs: Vec<HostTab>) -> HostWindow {
    HostWindow {
        id,
        incognito: false,
        left: Some(0),
        top: Some(0),
        width: Some(1200),
        height: Some(800),
        state: WindowState::Normal,
        tabs,
    }
}

pub fn display(id: &str, primary: bool, left: i32, top: i32, width: i32, height: i32) -> DisplayInfo {
    DisplayInfo {
        id: id.to_string(),
        is_primary: primary,
        work_area: Bounds { left, top, width, height },
    }
}

pub fn tab_record(id: &str, url: &str) -> TabRecord {
    TabRecord {
        id: id.to_string(),
        title: format!("Page {}", id),
        url: url.to_string(),
        fav_icon_url: String::new(),
        group_id: None,
        group_info: None,
    }
}

pub fn group_info(title: &str, color: TabGroupColor, collapsed: bool) -> TabGroupInfo {
    TabGroupInfo {
        title: title.to_string(),
        color,
        collapsed,
    }
}

/// A window record with `count` tabs named `<prefix>-<n>`.
pub fn window_record(prefix: &str, count: usize, active_tab_index: usize) -> WindowRecord {
    WindowRecord {
        window_id: 1,
        left: None,
        top: None,
        width: None,
        height: None,
        state: WindowState::Normal,
        active_tab_index,
        tabs: (0..count)
            .map(|n| {
                tab_record(
                    &format!("{}-{}", prefix, n),
                    &format!("https://example.com/{}/{}", prefix, n),
                )
            })
            .collect(),
    }
}

pub fn session(id: &str, windows: Vec<WindowRecord>) -> Session {
    let mut session = Session {
        id: id.to_string(),
        name: format!("Session {}", id),
        created_at: Utc::now(),
        updated_at: None,
        total_tabs: 0,
        windows,
    };
    session.recompute_total_tabs();
    session
}
