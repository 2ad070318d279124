//! Environment spec: the image reference and its parsed form.
//!
//! The host constructs a [`ContainerSpec`] from the workflow definition and
//! hands it to [`ContainerEnv::new`]. The spec is passive data; parsing
//! into repository and tag happens once, at environment construction.
//!
//! [`ContainerEnv::new`]: crate::env::ContainerEnv::new

use crate::constants::DEFAULT_TAG;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Spec describing the environment jobs run in: a container image.
///
/// Identity is the image reference alone. Two specs with the same
/// `image_uri` describe the same environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    /// Image reference in `repository[:tag]` form.
    pub image_uri: String,
}

impl ContainerSpec {
    /// Creates a spec from an image reference.
    pub fn new(image_uri: impl Into<String>) -> Self {
        Self {
            image_uri: image_uri.into(),
        }
    }

    /// Attributes that uniquely identify this spec.
    ///
    /// Consumed by the host's hashing and equality contract.
    pub fn identity_attributes() -> &'static [&'static str] {
        &["image_uri"]
    }
}

/// An image reference split into repository and tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Repository part, everything before the colon.
    pub repository: String,
    /// Tag part, `latest` when the reference carries none.
    pub tag: String,
}

impl ImageRef {
    /// Parses a `repository[:tag]` reference.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyImageUri`] if the reference is empty
    /// - [`Error::InvalidImageUri`] if the reference contains more than one
    ///   `:` separator
    pub fn parse(reference: &str) -> Result<Self> {
        if reference.is_empty() {
            return Err(Error::EmptyImageUri);
        }

        let parts: Vec<&str> = reference.split(':').collect();
        match parts.as_slice() {
            [repository] => Ok(Self {
                repository: (*repository).to_string(),
                tag: DEFAULT_TAG.to_string(),
            }),
            [repository, tag] => Ok(Self {
                repository: (*repository).to_string(),
                tag: (*tag).to_string(),
            }),
            _ => Err(Error::InvalidImageUri {
                reference: reference.to_string(),
                reason: "more than one ':' separator".to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.repository, self.tag)
    }
}
