//! Plugin settings: the container runtime selector.
//!
//! The host surfaces these settings to users as CLI flags or profile
//! entries and deserializes them before constructing environments. Unknown
//! runtime names are rejected at this boundary; the rest of the crate only
//! ever sees a valid [`ContainerKind`].

use crate::error::Error;
use crate::managers::{PodmanManager, RuntimeManager, UdockerManager};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported container runtimes.
///
/// A closed set: each variant carries its own command name and inspection
/// strategy instead of deriving the executable from a string label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// udocker, a user-space runtime that needs no daemon or privileges.
    #[default]
    Udocker,
    /// podman, a daemonless OCI runtime.
    Podman,
}

impl ContainerKind {
    /// Returns the runtime executable name.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Udocker => "udocker",
            Self::Podman => "podman",
        }
    }

    /// Returns the manager implementing this runtime's availability check
    /// and inspection strategy.
    pub fn manager(&self) -> &'static dyn RuntimeManager {
        match self {
            Self::Udocker => &UdockerManager,
            Self::Podman => &PodmanManager,
        }
    }
}

impl FromStr for ContainerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "udocker" => Ok(Self::Udocker),
            "podman" => Ok(Self::Podman),
            _ => Err(Error::UnsupportedKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.command())
    }
}

/// Settings the host passes to this plugin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSettings {
    /// Container runtime used to execute job commands (udocker by default).
    #[serde(default)]
    pub kind: ContainerKind,
}

impl ContainerSettings {
    /// Creates settings for the given runtime.
    pub fn new(kind: ContainerKind) -> Self {
        Self { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_known_runtimes() {
        assert_eq!("udocker".parse::<ContainerKind>().unwrap(), ContainerKind::Udocker);
        assert_eq!("podman".parse::<ContainerKind>().unwrap(), ContainerKind::Podman);
        assert_eq!("PODMAN".parse::<ContainerKind>().unwrap(), ContainerKind::Podman);
    }

    #[test]
    fn kind_rejects_unknown_runtime() {
        let err = "docker".parse::<ContainerKind>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedKind(ref name) if name == "docker"));
    }

    #[test]
    fn default_kind_is_udocker() {
        assert_eq!(ContainerSettings::default().kind, ContainerKind::Udocker);
    }
}
