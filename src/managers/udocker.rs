//! udocker runtime manager.
//!
//! udocker's `inspect` prints a single JSON object describing the image.
//! The content hash lives at `rootfs.diff_ids[0]`, usually carrying a
//! `sha256:` prefix:
//!
//! ```json
//! {"rootfs": {"diff_ids": ["sha256:aded1e1a5b37..."]}}
//! ```

use super::{short_hash, RuntimeManager};
use serde_json::Value;

/// Manager for the udocker runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdockerManager;

impl RuntimeManager for UdockerManager {
    fn name(&self) -> &'static str {
        "udocker"
    }

    fn parse_inspect_output(&self, stdout: &[u8]) -> Option<String> {
        let value: Value = serde_json::from_slice(stdout).ok()?;
        let diff_id = value
            .get("rootfs")?
            .get("diff_ids")?
            .get(0)?
            .as_str()?;
        let digest = diff_id.strip_prefix("sha256:").unwrap_or(diff_id);
        Some(short_hash(digest))
    }
}
