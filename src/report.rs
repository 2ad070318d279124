//! Software provenance reporting.

use serde::{Deserialize, Serialize};

/// One piece of software present in an environment.
///
/// The host aggregates these entries into its provenance report. For
/// container environments the name is the image repository and the version
/// is the tag, suffixed with `/` and a short image hash when one is known
/// (e.g., `latest/aded1e1a5b37`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareReport {
    /// Software name.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Marks less important technical dependencies the host may hide
    /// from its report for clarity.
    #[serde(default)]
    pub is_secondary: bool,
}

impl SoftwareReport {
    /// Creates a primary (non-secondary) report entry.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            is_secondary: false,
        }
    }
}
