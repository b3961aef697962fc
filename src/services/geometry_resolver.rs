//! Window Geometry Resolver.
//!
//! Maps a saved window rectangle onto the displays that exist now. A window
//! saved on a since-disconnected monitor is moved to the primary display
//! instead of being created off-screen.

use tracing::{debug, warn};

use crate::services::browser_host::BrowserHost;
use crate::types::host::{Bounds, DisplayInfo, WindowPlacement};
use crate::types::settings::GeometrySettings;

pub struct GeometryResolver<'a, H: BrowserHost + ?Sized> {
    host: &'a H,
    settings: GeometrySettings,
}

impl<'a, H: BrowserHost + ?Sized> GeometryResolver<'a, H> {
    pub fn new(host: &'a H, settings: GeometrySettings) -> Self {
        Self { host, settings }
    }

    /// Resolves a placement for a saved rectangle. Never fails: when displays
    /// cannot be enumerated the host chooses the placement.
    pub async fn resolve(
        &self,
        left: Option<i32>,
        top: Option<i32>,
        width: Option<i32>,
        height: Option<i32>,
    ) -> WindowPlacement {
        let displays = match self.host.get_displays().await {
            Ok(displays) => displays,
            Err(e) => {
                warn!(error = %e, "Display info unavailable, leaving placement to host");
                return WindowPlacement::host_default();
            }
        };

        place_on_displays(&displays, &self.settings, left, top, width, height)
    }
}

/// Pure placement computation over a known display list.
pub fn place_on_displays(
    displays: &[DisplayInfo],
    settings: &GeometrySettings,
    left: Option<i32>,
    top: Option<i32>,
    width: Option<i32>,
    height: Option<i32>,
) -> WindowPlacement {
    if let (Some(left), Some(top)) = (left, top) {
        if let Some(on_screen) = displays
            .iter()
            .find(|d| contains_point(&d.work_area, left, top, settings.slack))
        {
            let area = on_screen.work_area;
            return WindowPlacement {
                use_position: true,
                left: Some(left),
                top: Some(top),
                width: Some(width.unwrap_or(settings.default_width).min(area.width)),
                height: Some(height.unwrap_or(settings.default_height).min(area.height)),
            };
        }
    }

    let Some(fallback) = displays
        .iter()
        .find(|d| d.is_primary)
        .or_else(|| displays.first())
    else {
        return WindowPlacement::host_default();
    };

    let area = fallback.work_area;
    debug!(display = %fallback.id, "Saved position is off-screen, using fallback display");
    WindowPlacement {
        use_position: true,
        left: Some(area.left + settings.fallback_offset),
        top: Some(area.top + settings.fallback_offset),
        width: Some(width.unwrap_or(settings.default_width).min(area.width)),
        height: Some(height.unwrap_or(settings.default_height).min(area.height)),
    }
}

fn contains_point(area: &Bounds, x: i32, y: i32, slack: i32) -> bool {
    x >= area.left - slack
        && x < area.left + area.width + slack
        && y >= area.top - slack
        && y < area.top + area.height + slack
}
