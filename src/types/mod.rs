// Tab Session Lite shared type definitions
// Each submodule defines types used across the engine.

pub mod errors;
pub mod host;
pub mod session;
pub mod settings;
