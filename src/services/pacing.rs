//! Throughput-adaptive pacing for restores.
//!
//! Placeholder pages already make unviewed tabs nearly free, so small
//! sessions restore with no delay at all. Larger sessions are throttled on
//! the rate of window and tab creation calls.

use std::time::Duration;

use serde::Serialize;

use crate::types::settings::RestoreSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PacingTier {
    Low,
    Medium,
    High,
}

/// Delay parameters for one restore run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PacingStrategy {
    pub tier: PacingTier,
    /// Pause before every window after the first.
    pub window_delay: Duration,
    /// Number of tab creations between batch pauses; 0 disables batching.
    pub batch_size: usize,
    pub batch_delay: Duration,
    /// Pause after every single tab creation.
    pub tab_delay: Duration,
}

impl PacingStrategy {
    pub fn immediate() -> Self {
        Self {
            tier: PacingTier::Low,
            window_delay: Duration::ZERO,
            batch_size: 0,
            batch_delay: Duration::ZERO,
            tab_delay: Duration::ZERO,
        }
    }

    /// Picks the strategy for a restore of `total_tabs` tabs.
    pub fn for_tab_count(total_tabs: usize, settings: &RestoreSettings) -> Self {
        if total_tabs < settings.low_threshold {
            Self::immediate()
        } else if total_tabs <= settings.high_threshold {
            Self {
                tier: PacingTier::Medium,
                window_delay: Duration::from_millis(settings.medium_window_delay_ms),
                batch_size: settings.medium_batch_size,
                batch_delay: Duration::from_millis(settings.medium_batch_delay_ms),
                tab_delay: Duration::ZERO,
            }
        } else {
            Self {
                tier: PacingTier::High,
                window_delay: Duration::from_millis(settings.high_window_delay_ms),
                batch_size: settings.high_batch_size,
                batch_delay: Duration::from_millis(settings.high_batch_delay_ms),
                tab_delay: Duration::from_millis(settings.high_tab_delay_ms),
            }
        }
    }

    /// True when a batch pause is due after `created` tab creations.
    pub fn batch_boundary(&self, created: usize) -> bool {
        self.batch_size > 0 && !self.batch_delay.is_zero() && created % self.batch_size == 0
    }
}

/// Sleeps for `delay` unless it is zero.
pub async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
