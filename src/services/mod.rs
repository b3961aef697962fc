// Tab Session Lite services
// Services provide the engine: host access, capture, restore, placement, pacing, placeholder pages, settings.

pub mod browser_host;
pub mod capture_engine;
pub mod geometry_resolver;
pub mod pacing;
pub mod placeholder_page;
pub mod restore_engine;
pub mod settings_engine;
