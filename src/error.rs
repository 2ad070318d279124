//! Error types for the container deployment layer.

/// Result type alias for container deployment operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or using a container environment.
///
/// Every variant is a configuration error in the sense of the host
/// contract: it surfaces to the workflow engine as a user-facing error and
/// is never retried. Best-effort paths (image inspection) produce no errors
/// at all; they degrade to empty output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Image reference is empty.
    #[error("image URI is empty")]
    EmptyImageUri,

    /// Image reference could not be parsed.
    #[error("invalid image URI '{reference}': {reason}")]
    InvalidImageUri { reference: String, reason: String },

    /// Runtime name is not one of the supported container kinds.
    #[error("unsupported container kind '{0}' (expected 'udocker' or 'podman')")]
    UnsupportedKind(String),

    /// The selected runtime executable is not on the search path.
    #[error("container runtime '{runtime}' is not available: {reason}")]
    RuntimeUnavailable { runtime: String, reason: String },

    // =========================================================================
    // Environment Errors
    // =========================================================================
    /// Operation not supported by this plugin.
    #[error("operation not supported: {0}")]
    NotSupported(String),

    /// Host-side cache directory could not be prepared.
    #[error("failed to prepare cache directory: {0}")]
    CacheDirFailed(#[source] std::io::Error),

    /// Workflow working directory could not be determined.
    #[error("failed to resolve workflow directory: {0}")]
    WorkdirUnavailable(#[source] std::io::Error),
}
