//! Tests for runtime managers.
//!
//! Validates the inspect-output parsers against captured runtime output
//! and the best-effort degradation when a runtime is missing entirely.

use sdm_container::{PodmanManager, RuntimeManager, UdockerManager, SHORT_HASH_LEN};

// =============================================================================
// udocker Inspect Parsing Tests
// =============================================================================

#[test]
fn test_udocker_extracts_short_hash_from_diff_ids() {
    let json = br#"{"rootfs": {"diff_ids": ["sha256:aded1e1a5b37ff0011223344556677889900aabbccddeeff0011223344556677"]}}"#;

    let hash = UdockerManager.parse_inspect_output(json).unwrap();

    assert_eq!(hash, "aded1e1a5b37");
    assert_eq!(hash.len(), SHORT_HASH_LEN);
}

#[test]
fn test_udocker_accepts_diff_id_without_prefix() {
    let json = br#"{"rootfs": {"diff_ids": ["aded1e1a5b37ff00"]}}"#;

    assert_eq!(
        UdockerManager.parse_inspect_output(json),
        Some("aded1e1a5b37".to_string())
    );
}

#[test]
fn test_udocker_rejects_empty_diff_ids() {
    let json = br#"{"rootfs": {"diff_ids": []}}"#;
    assert_eq!(UdockerManager.parse_inspect_output(json), None);
}

#[test]
fn test_udocker_rejects_missing_rootfs() {
    let json = br#"{"config": {"Cmd": ["/bin/sh"]}}"#;
    assert_eq!(UdockerManager.parse_inspect_output(json), None);
}

#[test]
fn test_udocker_rejects_malformed_json() {
    assert_eq!(UdockerManager.parse_inspect_output(b"{truncated"), None);
}

// =============================================================================
// podman Inspect Parsing Tests
// =============================================================================

#[test]
fn test_podman_extracts_short_hash_from_first_id() {
    let json = br#"[{"Id": "abcdef012345678"}]"#;

    let hash = PodmanManager.parse_inspect_output(json).unwrap();

    assert_eq!(hash, "abcdef012345");
    assert_eq!(hash.len(), SHORT_HASH_LEN);
}

#[test]
fn test_podman_short_input_is_not_padded() {
    let json = br#"[{"Id": "abc"}]"#;
    assert_eq!(PodmanManager.parse_inspect_output(json), Some("abc".to_string()));
}

#[test]
fn test_podman_rejects_empty_array() {
    assert_eq!(PodmanManager.parse_inspect_output(b"[]"), None);
}

#[test]
fn test_podman_rejects_object_output() {
    let json = br#"{"Id": "abcdef012345678"}"#;
    assert_eq!(PodmanManager.parse_inspect_output(json), None);
}

#[test]
fn test_podman_rejects_missing_id() {
    let json = br#"[{"Digest": "sha256:abcdef"}]"#;
    assert_eq!(PodmanManager.parse_inspect_output(json), None);
}

// =============================================================================
// Missing Runtime Degradation Tests
// =============================================================================

/// A manager whose executable is guaranteed not to exist.
struct MissingRuntimeManager;

impl RuntimeManager for MissingRuntimeManager {
    fn name(&self) -> &'static str {
        "sdm-container-no-such-runtime"
    }

    fn parse_inspect_output(&self, _stdout: &[u8]) -> Option<String> {
        None
    }
}

#[test]
fn test_missing_runtime_is_unavailable() {
    let manager = MissingRuntimeManager;

    assert!(!manager.is_available());

    let reason = manager.unavailable_reason().unwrap();
    assert!(reason.contains("sdm-container-no-such-runtime"));
}

#[test]
fn test_missing_runtime_inspection_degrades_to_empty() {
    // Spawn failure must be swallowed, never raised
    let hash = MissingRuntimeManager.image_short_hash("alpine:latest");
    assert_eq!(hash, "");
}
