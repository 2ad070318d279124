//! Tests for image reference parsing.
//!
//! Validates repository/tag splitting, the `latest` default, and the
//! configuration errors for malformed references.

use sdm_container::{Error, ImageRef, DEFAULT_TAG};

// =============================================================================
// Tag Extraction Tests
// =============================================================================

#[test]
fn test_no_colon_defaults_to_latest() {
    let image = ImageRef::parse("alpine").unwrap();

    assert_eq!(image.repository, "alpine");
    assert_eq!(image.tag, DEFAULT_TAG);
}

#[test]
fn test_single_colon_splits_repository_and_tag() {
    let image = ImageRef::parse("alpine:3.18").unwrap();

    assert_eq!(image.repository, "alpine");
    assert_eq!(image.tag, "3.18");
}

#[test]
fn test_tag_is_taken_verbatim() {
    let image = ImageRef::parse("busybox:musl").unwrap();
    assert_eq!(image.tag, "musl");

    // Everything after the colon, even an empty string
    let image = ImageRef::parse("busybox:").unwrap();
    assert_eq!(image.tag, "");
}

#[test]
fn test_namespaced_repository() {
    let image = ImageRef::parse("library/nginx:1.25").unwrap();

    assert_eq!(image.repository, "library/nginx");
    assert_eq!(image.tag, "1.25");
}

// =============================================================================
// Malformed Reference Tests
// =============================================================================

#[test]
fn test_empty_reference_is_a_config_error() {
    let result = ImageRef::parse("");

    assert!(matches!(result, Err(Error::EmptyImageUri)));
}

#[test]
fn test_two_colons_is_a_config_error() {
    let result = ImageRef::parse("registry.example.com:5000/alpine:latest");

    match result {
        Err(Error::InvalidImageUri { reference, .. }) => {
            assert_eq!(reference, "registry.example.com:5000/alpine:latest");
        }
        other => panic!("expected InvalidImageUri, got {:?}", other),
    }
}

#[test]
fn test_many_colons_is_a_config_error() {
    let result = ImageRef::parse("a:b:c:d");

    assert!(matches!(result, Err(Error::InvalidImageUri { .. })));
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_display_rejoins_repository_and_tag() {
    let image = ImageRef::parse("alpine:3.18").unwrap();
    assert_eq!(image.to_string(), "alpine:3.18");

    let image = ImageRef::parse("alpine").unwrap();
    assert_eq!(image.to_string(), "alpine:latest");
}
