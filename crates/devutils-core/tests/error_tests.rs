// Rust guideline compliant 2026-10-17

//! Unit tests for error types and messages.

use devutils_core::Error;

#[test]
fn test_io_error_formatting() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let msg = Error::Io(io_err).to_string();
    assert!(msg.contains("IO error"), "IO error should contain 'IO error' prefix");
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let msg = Error::Json(json_err).to_string();
    assert!(msg.contains("JSON error"));
}

#[test]
fn test_malformed_event_formatting() {
    let error = Error::MalformedEvent {
        event_id: "16".to_string(),
        reason: "link event has no detail".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Malformed event 16: link event has no detail"
    );
}

#[test]
fn test_not_found_formatting() {
    let error = Error::NotFound("user42".to_string());
    assert_eq!(error.to_string(), "Not found: user42");
}

#[test]
fn test_registry_error_formatting() {
    assert_eq!(
        Error::DuplicateRegistration("random".to_string()).to_string(),
        "Already registered: random"
    );
    assert_eq!(
        Error::UnknownUtility("nope".to_string()).to_string(),
        "Unknown utility: nope"
    );
}

#[test]
fn test_io_error_conversion() {
    fn fails() -> devutils_core::Result<()> {
        std::fs::read_to_string("/definitely/not/here/config.toml")?;
        Ok(())
    }
    assert!(matches!(fails(), Err(Error::Io(_))));
}
