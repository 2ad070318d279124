//! podman runtime manager.
//!
//! podman's `inspect` prints a JSON array with one object per inspected
//! image; the content hash is the `Id` field of the first element:
//!
//! ```json
//! [{"Id": "abcdef012345..."}]
//! ```

use super::{short_hash, RuntimeManager};
use serde_json::Value;

/// Manager for the podman runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct PodmanManager;

impl RuntimeManager for PodmanManager {
    fn name(&self) -> &'static str {
        "podman"
    }

    fn parse_inspect_output(&self, stdout: &[u8]) -> Option<String> {
        let value: Value = serde_json::from_slice(stdout).ok()?;
        let id = value.get(0)?.get("Id")?.as_str()?;
        Some(short_hash(id))
    }
}
