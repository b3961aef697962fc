//! Browser host capability surface.
//!
//! Everything the engine needs from the running browser goes through
//! [`BrowserHost`]. Each call may be slow or fail independently; the engines
//! decide per call whether a failure is fatal or degrades gracefully.

use async_trait::async_trait;

use crate::types::errors::HostError;
use crate::types::host::{
    CreateTabOptions, CreateWindowOptions, DisplayInfo, HostTab, HostTabGroup, HostWindow,
    TabGroupUpdate,
};
use crate::types::session::WindowState;

#[async_trait]
pub trait BrowserHost: Send + Sync {
    /// All open windows, each populated with its tabs.
    async fn get_all_windows(&self) -> Result<Vec<HostWindow>, HostError>;

    /// All tab groups across windows. Hosts without group support return `Unsupported`.
    async fn query_tab_groups(&self) -> Result<Vec<HostTabGroup>, HostError>;

    /// Creates a window; the returned window carries its initial tab.
    async fn create_window(&self, options: CreateWindowOptions) -> Result<HostWindow, HostError>;

    async fn update_window_state(&self, window_id: i64, state: WindowState) -> Result<(), HostError>;

    async fn create_tab(&self, options: CreateTabOptions) -> Result<HostTab, HostError>;

    async fn get_window_tabs(&self, window_id: i64) -> Result<Vec<HostTab>, HostError>;

    async fn activate_tab(&self, tab_id: i64) -> Result<(), HostError>;

    /// Groups `tab_ids`, into `group_id` when given or a new group otherwise.
    /// Returns the id of the group the tabs ended up in.
    async fn group_tabs(&self, tab_ids: &[i64], group_id: Option<i64>) -> Result<i64, HostError>;

    async fn update_tab_group(&self, group_id: i64, update: TabGroupUpdate) -> Result<(), HostError>;

    async fn get_displays(&self) -> Result<Vec<DisplayInfo>, HostError>;
}
