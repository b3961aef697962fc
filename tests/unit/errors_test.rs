use tab_session_lite::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_display_variants() {
    assert_eq!(
        StorageError::DatabaseError("disk full".to_string()).to_string(),
        "Storage database error: disk full"
    );
    assert_eq!(
        StorageError::SerializationError("eof".to_string()).to_string(),
        "Storage serialization error: eof"
    );
    assert_eq!(
        StorageError::InvalidSession("no windows".to_string()).to_string(),
        "Invalid session: no windows"
    );
}

#[test]
fn storage_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StorageError::DatabaseError("x".to_string()));
    assert!(err.source().is_none());
}

// === HostError Tests ===

#[test]
fn host_error_display_variants() {
    assert_eq!(
        HostError::Rejected("quota".to_string()).to_string(),
        "Host rejected call: quota"
    );
    assert_eq!(
        HostError::Unsupported("tabGroups".to_string()).to_string(),
        "Host capability unsupported: tabGroups"
    );
    assert_eq!(
        HostError::NotFound("window 7".to_string()).to_string(),
        "Host object not found: window 7"
    );
}

// === CaptureError Tests ===

#[test]
fn capture_error_wraps_host_error_as_source() {
    let err = CaptureError::from(HostError::Rejected("denied".to_string()));
    assert_eq!(err.to_string(), "Capture failed: Host rejected call: denied");

    let source = std::error::Error::source(&err).expect("host error should be the source");
    assert_eq!(source.to_string(), "Host rejected call: denied");
}

#[test]
fn capture_error_wraps_storage_error() {
    let err: CaptureError = StorageError::DatabaseError("locked".to_string()).into();
    assert_eq!(
        err.to_string(),
        "Capture could not be saved: Storage database error: locked"
    );
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn capture_error_session_not_found_has_no_source() {
    let err = CaptureError::SessionNotFound("1700000000000".to_string());
    assert_eq!(err.to_string(), "Session not found: 1700000000000");
    assert!(std::error::Error::source(&err).is_none());
}

// === RestoreError Tests ===

#[test]
fn restore_error_display_variants() {
    assert_eq!(RestoreError::EmptyWindow.to_string(), "Window record has no tabs");
    assert_eq!(
        RestoreError::WindowCreation(HostError::Rejected("busy".to_string())).to_string(),
        "Window creation failed: Host rejected call: busy"
    );
    assert_eq!(
        RestoreError::MissingInitialTab(42).to_string(),
        "Window 42 was created without a tab"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::InvalidKey("restore.nope".to_string()).to_string(),
        "Invalid settings key: restore.nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("expected u64".to_string()).to_string(),
        "Invalid settings value: expected u64"
    );
}
