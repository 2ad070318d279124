//! Runtime managers: one adapter per supported container runtime.
//!
//! A manager knows how to check that its runtime executable is present on
//! the search path and how to extract a short image content hash from the
//! runtime's `inspect` output. Managers are stateless unit structs; the
//! active one is selected by [`ContainerKind::manager`].
//!
//! Inspection is best-effort metadata, not a correctness-critical path:
//! every failure mode (process spawn failure, nonzero exit, malformed
//! JSON, missing fields) degrades to an empty hash and is logged at debug
//! level, never raised to the caller.
//!
//! [`ContainerKind::manager`]: crate::settings::ContainerKind::manager

pub mod podman;
pub mod udocker;

pub use self::podman::PodmanManager;
pub use self::udocker::UdockerManager;

use crate::constants::SHORT_HASH_LEN;
use std::process::Command;
use tracing::debug;

/// Adapter for one container runtime.
pub trait RuntimeManager: Send + Sync {
    /// Returns the runtime executable name.
    fn name(&self) -> &'static str;

    /// Checks whether the runtime executable is on the search path.
    fn is_available(&self) -> bool {
        which::which(self.name()).is_ok()
    }

    /// Returns the reason why this runtime is unavailable (if any).
    fn unavailable_reason(&self) -> Option<String> {
        match which::which(self.name()) {
            Ok(_) => None,
            Err(err) => Some(format!("{} not found in PATH ({})", self.name(), err)),
        }
    }

    /// Extracts the short image hash from raw `inspect` stdout.
    ///
    /// Returns `None` when the output does not match this runtime's
    /// inspect schema. Pure; exposed on the trait so it can be tested
    /// against captured inspect output without the runtime installed.
    fn parse_inspect_output(&self, stdout: &[u8]) -> Option<String>;

    /// Returns a short content hash for `image_ref`, or an empty string.
    ///
    /// Runs `<runtime> inspect <image_ref>` and parses its stdout. A
    /// single blocking subprocess; no timeout, no retry.
    fn image_short_hash(&self, image_ref: &str) -> String {
        let output = match Command::new(self.name())
            .args(["inspect", image_ref])
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                debug!(
                    runtime = self.name(),
                    image = image_ref,
                    error = %err,
                    "inspect could not be spawned"
                );
                return String::new();
            }
        };

        if !output.status.success() {
            debug!(
                runtime = self.name(),
                image = image_ref,
                status = %output.status,
                "inspect exited with failure"
            );
            return String::new();
        }

        match self.parse_inspect_output(&output.stdout) {
            Some(hash) => hash,
            None => {
                debug!(
                    runtime = self.name(),
                    image = image_ref,
                    "inspect output carries no usable image hash"
                );
                String::new()
            }
        }
    }
}

/// Truncates a content hash to the reported length.
pub(crate) fn short_hash(digest: &str) -> String {
    digest.chars().take(SHORT_HASH_LEN).collect()
}
