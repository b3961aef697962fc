use std::fmt;

// === StorageError ===

/// Errors related to the persisted session collection.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize or deserialize the stored collection.
    SerializationError(String),
    /// The session is not valid for persistence (e.g. it has no windows).
    InvalidSession(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
            StorageError::InvalidSession(msg) => write!(f, "Invalid session: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === HostError ===

/// Errors reported by the browser host capability surface.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// The host rejected the call.
    Rejected(String),
    /// The capability is not available on this host (e.g. no tab groups).
    Unsupported(String),
    /// The referenced window, tab, or group does not exist.
    NotFound(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Rejected(msg) => write!(f, "Host rejected call: {}", msg),
            HostError::Unsupported(msg) => write!(f, "Host capability unsupported: {}", msg),
            HostError::NotFound(msg) => write!(f, "Host object not found: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

// === CaptureError ===

/// Errors related to capturing live browser state.
#[derive(Debug)]
pub enum CaptureError {
    /// Enumerating windows failed.
    Host(HostError),
    /// Persisting the captured session failed.
    Storage(StorageError),
    /// The session to overwrite does not exist.
    SessionNotFound(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Host(err) => write!(f, "Capture failed: {}", err),
            CaptureError::Storage(err) => write!(f, "Capture could not be saved: {}", err),
            CaptureError::SessionNotFound(id) => write!(f, "Session not found: {}", id),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Host(err) => Some(err),
            CaptureError::Storage(err) => Some(err),
            CaptureError::SessionNotFound(_) => None,
        }
    }
}

impl From<HostError> for CaptureError {
    fn from(err: HostError) -> Self {
        CaptureError::Host(err)
    }
}

impl From<StorageError> for CaptureError {
    fn from(err: StorageError) -> Self {
        CaptureError::Storage(err)
    }
}

// === RestoreError ===

/// Errors related to restoring a window.
#[derive(Debug)]
pub enum RestoreError {
    /// The window record has no tabs.
    EmptyWindow,
    /// The host refused to create the window.
    WindowCreation(HostError),
    /// The created window came back without its initial tab.
    MissingInitialTab(i64),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreError::EmptyWindow => write!(f, "Window record has no tabs"),
            RestoreError::WindowCreation(err) => write!(f, "Window creation failed: {}", err),
            RestoreError::MissingInitialTab(id) => {
                write!(f, "Window {} was created without a tab", id)
            }
        }
    }
}

impl std::error::Error for RestoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RestoreError::WindowCreation(err) => Some(err),
            _ => None,
        }
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
