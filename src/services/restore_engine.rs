//! Restore Engine.
//!
//! Rebuilds windows, tabs, tab groups, focus, and placement from a saved
//! [`Session`]. Only each window's active tab loads its real URL; every
//! other tab opens on the placeholder page and loads when first viewed.
//!
//! Host calls are awaited one at a time in record order. Failures are
//! contained: a bad tab is skipped, a bad window is counted, and group or
//! focus problems only degrade the result.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::services::browser_host::BrowserHost;
use crate::services::geometry_resolver::GeometryResolver;
use crate::services::pacing::{pause, PacingStrategy};
use crate::services::placeholder_page::placeholder_url_for;
use crate::types::errors::{HostError, RestoreError};
use crate::types::host::{CreateTabOptions, CreateWindowOptions, HostTab, TabGroupUpdate};
use crate::types::session::{Session, TabGroupInfo, WindowRecord, WindowState};
use crate::types::settings::EngineSettings;

/// Per-window outcome of a session restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestoreReport {
    pub success: usize,
    pub failed: usize,
    pub pacing: PacingStrategy,
}

pub struct RestoreEngine<'a, H: BrowserHost + ?Sized> {
    host: &'a H,
    settings: EngineSettings,
}

impl<'a, H: BrowserHost + ?Sized> RestoreEngine<'a, H> {
    pub fn new(host: &'a H, settings: EngineSettings) -> Self {
        Self { host, settings }
    }

    /// Pacing used for a restore of `total_tabs` tabs.
    pub fn pacing_for(&self, total_tabs: usize) -> PacingStrategy {
        PacingStrategy::for_tab_count(total_tabs, &self.settings.restore)
    }

    /// Restores every window of `session` in order, counting failures.
    pub async fn restore_session(&self, session: &Session) -> RestoreReport {
        let pacing = self.pacing_for(session.count_tabs());
        info!(
            session_id = %session.id,
            windows = session.windows.len(),
            tier = ?pacing.tier,
            "Restoring session"
        );

        let mut report = RestoreReport {
            success: 0,
            failed: 0,
            pacing,
        };

        for (index, window) in session.windows.iter().enumerate() {
            if index > 0 {
                pause(pacing.window_delay).await;
            }
            match self.restore_window(window, &pacing).await {
                Ok(()) => report.success += 1,
                Err(e) => {
                    error!(session_id = %session.id, window_index = index, error = %e, "Window restore failed");
                    report.failed += 1;
                }
            }
        }

        info!(success = report.success, failed = report.failed, "Session restore finished");
        report
    }

    /// Restores one window on its own, paced by its own tab count.
    pub async fn restore_single_window(&self, window: &WindowRecord) -> Result<(), RestoreError> {
        let pacing = self.pacing_for(window.tabs.len());
        self.restore_window(window, &pacing).await
    }

    /// Opens one saved URL as a tab in the focused window.
    pub async fn open_single_tab(&self, url: &str) -> Result<HostTab, HostError> {
        self.host
            .create_tab(CreateTabOptions {
                window_id: None,
                url: url.to_string(),
                index: None,
                active: true,
            })
            .await
    }

    /// Restores a single window record.
    pub async fn restore_window(
        &self,
        window: &WindowRecord,
        pacing: &PacingStrategy,
    ) -> Result<(), RestoreError> {
        if window.tabs.is_empty() {
            return Err(RestoreError::EmptyWindow);
        }
        let active_index = window.effective_active_index();
        let active_tab = &window.tabs[active_index];

        let placement = GeometryResolver::new(self.host, self.settings.geometry.clone())
            .resolve(window.left, window.top, window.width, window.height)
            .await;

        let created = self
            .host
            .create_window(CreateWindowOptions {
                url: Some(active_tab.url.clone()),
                placement,
                focused: true,
            })
            .await
            .map_err(RestoreError::WindowCreation)?;
        let window_id = created.id;
        let first_tab = created
            .tabs
            .first()
            .ok_or(RestoreError::MissingInitialTab(window_id))?;

        let mut groups: HashMap<TabGroupInfo, i64> = HashMap::new();
        if let Some(info) = &active_tab.group_info {
            self.join_group(&mut groups, first_tab.id, info).await;
        }

        let mut created_count = 0usize;
        for (index, tab) in window.tabs.iter().enumerate() {
            if index == active_index {
                continue;
            }

            let result = self
                .host
                .create_tab(CreateTabOptions {
                    window_id: Some(window_id),
                    url: placeholder_url_for(&self.settings.placeholder, tab),
                    index: Some(index),
                    active: false,
                })
                .await;

            match result {
                Ok(host_tab) => {
                    if let Some(info) = &tab.group_info {
                        self.join_group(&mut groups, host_tab.id, info).await;
                    }
                }
                Err(e) => warn!(window_id, tab_index = index, error = %e, "Tab creation failed, skipping"),
            }

            created_count += 1;
            pause(pacing.tab_delay).await;
            if pacing.batch_boundary(created_count) {
                pause(pacing.batch_delay).await;
            }
        }

        for (info, group_id) in &groups {
            if info.collapsed {
                let update = TabGroupUpdate {
                    collapsed: Some(true),
                    ..TabGroupUpdate::default()
                };
                if let Err(e) = self.host.update_tab_group(*group_id, update).await {
                    warn!(group_id, error = %e, "Collapsing tab group failed");
                }
            }
        }

        self.focus_tab(window_id, first_tab.id, active_index).await;

        if matches!(window.state, WindowState::Maximized | WindowState::Fullscreen) {
            if let Err(e) = self.host.update_window_state(window_id, window.state).await {
                warn!(window_id, state = ?window.state, error = %e, "Re-applying window state failed");
            }
        }

        debug!(window_id, tabs = window.tabs.len(), groups = groups.len(), "Window restored");
        Ok(())
    }

    /// Adds `tab_id` to the group for `info`, creating the group on first use.
    /// Collapse is applied separately once membership is final.
    async fn join_group(&self, groups: &mut HashMap<TabGroupInfo, i64>, tab_id: i64, info: &TabGroupInfo) {
        if let Some(&group_id) = groups.get(info) {
            if let Err(e) = self.host.group_tabs(&[tab_id], Some(group_id)).await {
                warn!(tab_id, group_id, error = %e, "Joining tab group failed");
            }
            return;
        }

        let group_id = match self.host.group_tabs(&[tab_id], None).await {
            Ok(id) => id,
            Err(e) => {
                warn!(tab_id, error = %e, "Creating tab group failed, tab stays ungrouped");
                return;
            }
        };
        groups.insert(info.clone(), group_id);

        let update = TabGroupUpdate {
            title: Some(info.title.clone()),
            color: Some(info.color),
            collapsed: None,
        };
        if let Err(e) = self.host.update_tab_group(group_id, update).await {
            warn!(group_id, error = %e, "Styling tab group failed");
        }
    }

    /// Activates the window's initial tab, which holds the recorded active
    /// tab. Falls back to `active_index` in final tab order when that tab is
    /// gone.
    async fn focus_tab(&self, window_id: i64, active_tab_id: i64, active_index: usize) {
        let mut tabs = match self.host.get_window_tabs(window_id).await {
            Ok(tabs) => tabs,
            Err(e) => {
                warn!(window_id, error = %e, "Could not re-query tabs to restore focus");
                return;
            }
        };
        tabs.sort_by_key(|t| t.index);

        let Some(tab) = tabs
            .iter()
            .find(|t| t.id == active_tab_id)
            .or_else(|| tabs.get(active_index))
            .or_else(|| tabs.first())
        else {
            return;
        };
        if let Err(e) = self.host.activate_tab(tab.id).await {
            warn!(window_id, tab_id = tab.id, error = %e, "Restoring active tab failed");
        }
    }
}
