//! # sdm-container
//!
//! **Container Software-Deployment Plugin**
//!
//! Lets a workflow-execution engine run job shell commands inside a
//! container (via udocker or podman) instead of natively. The crate is a
//! thin translation layer: validate configuration, wrap a shell command
//! string with the matching container invocation, and parse the runtime's
//! `inspect` output to report image identity.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       sdm-container                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ContainerSettings ─┐                                       │
//! │                     ├──► ContainerEnv (validated once)      │
//! │  ContainerSpec ─────┘        │                              │
//! │                              ├── decorate_shellcmd(cmd)     │
//! │                              └── report_software()          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     Runtime Managers                        │
//! │  ┌────────────────────┐      ┌────────────────────┐         │
//! │  │   UdockerManager   │      │   PodmanManager    │         │
//! │  │ inspect → rootfs.  │      │ inspect → [0].Id   │         │
//! │  │   diff_ids[0]      │      │                    │         │
//! │  └────────────────────┘      └────────────────────┘         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Error Model
//!
//! Configuration problems (empty or malformed image reference, missing
//! runtime executable) fail environment construction immediately and
//! surface to the host as user-facing errors. Image inspection is
//! best-effort: every failure degrades to an empty hash and is only
//! logged, never raised.
//!
//! # Example
//!
//! ```rust,ignore
//! use sdm_container::{ContainerEnv, ContainerSettings, ContainerSpec, DeploymentEnv};
//!
//! let env = ContainerEnv::new(
//!     ContainerSettings::default(),
//!     ContainerSpec::new("alpine:latest"),
//! )?;
//!
//! let cmd = env.decorate_shellcmd("echo hello")?;
//! // udocker run --rm -e HOME=/mnt/snakemake -w /mnt/snakemake ...
//! # Ok::<(), sdm_container::Error>(())
//! ```

pub mod constants;
pub mod env;
pub mod error;
pub mod managers;
pub mod report;
pub mod settings;
pub mod spec;

// Re-exports
pub use constants::{CACHE_MOUNTPOINT, DEFAULT_TAG, SHORT_HASH_LEN, SNAKEMAKE_MOUNTPOINT};
pub use env::{ContainerEnv, DeploymentEnv};
pub use error::{Error, Result};
pub use managers::{PodmanManager, RuntimeManager, UdockerManager};
pub use report::SoftwareReport;
pub use settings::{ContainerKind, ContainerSettings};
pub use spec::{ContainerSpec, ImageRef};
