use serde::{Deserialize, Serialize};

/// Top-level engine settings, persisted as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EngineSettings {
    #[serde(default)]
    pub restore: RestoreSettings,
    #[serde(default)]
    pub geometry: GeometrySettings,
    #[serde(default)]
    pub placeholder: PlaceholderSettings,
}

/// Pacing thresholds and delays used while restoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestoreSettings {
    /// Sessions with fewer tabs than this restore without any delay.
    pub low_threshold: usize,
    /// Sessions with more tabs than this use the high pacing tier.
    pub high_threshold: usize,
    pub medium_window_delay_ms: u64,
    pub medium_batch_size: usize,
    pub medium_batch_delay_ms: u64,
    pub high_window_delay_ms: u64,
    pub high_batch_size: usize,
    pub high_batch_delay_ms: u64,
    pub high_tab_delay_ms: u64,
}

impl Default for RestoreSettings {
    fn default() -> Self {
        Self {
            low_threshold: 50,
            high_threshold: 100,
            medium_window_delay_ms: 300,
            medium_batch_size: 10,
            medium_batch_delay_ms: 100,
            high_window_delay_ms: 1000,
            high_batch_size: 5,
            high_batch_delay_ms: 300,
            high_tab_delay_ms: 50,
        }
    }
}

/// Window placement tolerances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeometrySettings {
    /// Pixels of tolerance around a display's work area.
    pub slack: i32,
    /// Offset from the fallback display's corner.
    pub fallback_offset: i32,
    pub default_width: i32,
    pub default_height: i32,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            slack: 10,
            fallback_offset: 50,
            default_width: 1280,
            default_height: 800,
        }
    }
}

/// Placeholder page location and favicon fallback service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceholderSettings {
    pub page_url: String,
    /// Queried with `?domain=<host>` when a tab has no favicon.
    pub favicon_service_url: String,
}

impl Default for PlaceholderSettings {
    fn default() -> Self {
        Self {
            page_url: "chrome-extension://tab-session-lite/lazy.html".to_string(),
            favicon_service_url: "https://www.google.com/s2/favicons".to_string(),
        }
    }
}
