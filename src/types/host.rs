use serde::{Deserialize, Serialize};

use super::session::{TabGroupColor, WindowState};

/// A live window as reported by the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HostWindow {
    pub id: i64,
    pub incognito: bool,
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub state: WindowState,
    pub tabs: Vec<HostTab>,
}

/// A live tab as reported by the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HostTab {
    pub id: i64,
    pub window_id: i64,
    pub index: usize,
    pub url: Option<String>,
    pub title: Option<String>,
    pub fav_icon_url: Option<String>,
    pub active: bool,
    /// `None` when the tab is not in a group.
    pub group_id: Option<i64>,
}

/// A live tab group as reported by the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostTabGroup {
    pub id: i64,
    pub title: Option<String>,
    pub color: TabGroupColor,
    pub collapsed: bool,
}

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// A connected display and its usable work area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayInfo {
    pub id: String,
    pub is_primary: bool,
    pub work_area: Bounds,
}

/// Where a restored window should be placed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WindowPlacement {
    /// When false the host picks the position and size.
    pub use_position: bool,
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl WindowPlacement {
    /// Leave placement entirely to the host.
    pub fn host_default() -> Self {
        Self::default()
    }
}

/// Arguments for creating a window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateWindowOptions {
    pub url: Option<String>,
    pub placement: WindowPlacement,
    pub focused: bool,
}

/// Arguments for creating a tab.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateTabOptions {
    /// `None` targets the currently focused window.
    pub window_id: Option<i64>,
    pub url: String,
    pub index: Option<usize>,
    pub active: bool,
}

/// Property changes for an existing tab group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabGroupUpdate {
    pub title: Option<String>,
    pub color: Option<TabGroupColor>,
    pub collapsed: Option<bool>,
}
