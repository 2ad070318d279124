//! Container environment: validation, command decoration, reporting.
//!
//! [`ContainerEnv`] is the unit the host works with. It is constructed
//! from settings and a spec, validates itself exactly once, and then
//! offers two operations through the [`DeploymentEnv`] contract:
//!
//! - [`decorate_shellcmd`]: wrap a job command so it runs inside a
//!   container of the configured image
//! - [`report_software`]: report the image as a (name, version) entry,
//!   with a short content hash when the runtime can provide one
//!
//! [`decorate_shellcmd`]: DeploymentEnv::decorate_shellcmd
//! [`report_software`]: DeploymentEnv::report_software

use crate::constants::{
    CACHE_MOUNTPOINT, CONTAINER_SHELL, HOST_CACHE_SUBDIR, SNAKEMAKE_MOUNTPOINT,
};
use crate::error::{Error, Result};
use crate::report::SoftwareReport;
use crate::settings::ContainerSettings;
use crate::spec::{ContainerSpec, ImageRef};
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

// =============================================================================
// Host Contract
// =============================================================================

/// Environment contract consumed by the workflow engine.
///
/// Required operations plus optional lifecycle hooks. The hooks default to
/// [`Error::NotSupported`]; this plugin leaves them at their defaults
/// because it neither deploys nor archives containers itself.
pub trait DeploymentEnv {
    /// Wraps a shell command so it executes inside the environment.
    fn decorate_shellcmd(&self, cmd: &str) -> Result<String>;

    /// Reports the software contained in the environment.
    fn report_software(&self) -> Vec<SoftwareReport>;

    /// Deploys the environment. Optional.
    fn deploy(&self) -> Result<()> {
        Err(Error::NotSupported("deploy".to_string()))
    }

    /// Removes a deployed environment. Optional.
    fn remove(&self) -> Result<()> {
        Err(Error::NotSupported("remove".to_string()))
    }

    /// Archives the environment. Optional.
    fn archive(&self) -> Result<()> {
        Err(Error::NotSupported("archive".to_string()))
    }
}

// =============================================================================
// Container Environment
// =============================================================================

/// A validated container environment.
///
/// Identity attributes (settings, spec, parsed image reference) are
/// immutable after construction. Instances are independent; nothing is
/// shared between environments.
#[derive(Debug)]
pub struct ContainerEnv {
    settings: ContainerSettings,
    spec: ContainerSpec,
    image: ImageRef,
    /// Set once the executable-presence check has passed.
    checked: OnceLock<()>,
    /// Host side of the cache mount, resolved at most once.
    cache_dir: OnceLock<PathBuf>,
}

impl ContainerEnv {
    /// Builds and validates an environment.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyImageUri`] / [`Error::InvalidImageUri`] if the
    ///   spec's image reference cannot be parsed
    /// - [`Error::RuntimeUnavailable`] if the selected runtime executable
    ///   is not on the search path
    pub fn new(settings: ContainerSettings, spec: ContainerSpec) -> Result<Self> {
        let image = ImageRef::parse(&spec.image_uri)?;
        let env = Self {
            settings,
            spec,
            image,
            checked: OnceLock::new(),
            cache_dir: OnceLock::new(),
        };
        env.check()?;
        Ok(env)
    }

    /// Validates that the selected runtime executable is present.
    ///
    /// Idempotent: the PATH lookup runs at most once per instance; once it
    /// has passed, later calls return immediately.
    pub fn check(&self) -> Result<()> {
        if self.checked.get().is_some() {
            return Ok(());
        }

        let manager = self.settings.kind.manager();
        if let Some(reason) = manager.unavailable_reason() {
            return Err(Error::RuntimeUnavailable {
                runtime: manager.name().to_string(),
                reason,
            });
        }

        debug!(
            runtime = manager.name(),
            image = %self.spec.image_uri,
            "container environment validated"
        );
        let _ = self.checked.set(());
        Ok(())
    }

    /// Returns the plugin settings.
    pub fn settings(&self) -> &ContainerSettings {
        &self.settings
    }

    /// Returns the environment spec.
    pub fn spec(&self) -> &ContainerSpec {
        &self.spec
    }

    /// Returns the parsed image reference.
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// Returns the host side of the cache mount.
    ///
    /// Prefers the user cache directory's `snakemake` subdirectory when it
    /// already exists; otherwise falls back to a freshly created temporary
    /// directory. The result is memoized so repeated decoration never
    /// creates a second temp directory.
    fn host_cache_dir(&self) -> Result<&PathBuf> {
        if let Some(dir) = self.cache_dir.get() {
            return Ok(dir);
        }
        let dir = resolve_host_cache()?;
        Ok(self.cache_dir.get_or_init(|| dir))
    }
}

impl DeploymentEnv for ContainerEnv {
    /// Wraps `cmd` into a container invocation:
    ///
    /// ```text
    /// <runtime> run --rm -e HOME=<mount> -w <mount> -v <cwd>:<mount>
    ///     -v <hostcache>:<cachemount> <image> /bin/sh -c '<escaped-cmd>'
    /// ```
    ///
    /// Single quotes in `cmd` are escaped as `'\''` so arbitrary embedded
    /// quoting survives the outer quoting.
    fn decorate_shellcmd(&self, cmd: &str) -> Result<String> {
        self.check()?;

        let workdir = std::env::current_dir().map_err(Error::WorkdirUnavailable)?;
        let cache = self.host_cache_dir()?;
        let escaped = cmd.replace('\'', r"'\''");

        Ok(format!(
            "{service} run --rm -e HOME={mount} -w {mount} -v {hostdir}:{mount} \
             -v {hostcache}:{cachemount} {image} {shell} -c '{escaped}'",
            service = self.settings.kind.command(),
            mount = SNAKEMAKE_MOUNTPOINT,
            hostdir = workdir.display(),
            hostcache = cache.display(),
            cachemount = CACHE_MOUNTPOINT,
            image = self.spec.image_uri,
            shell = CONTAINER_SHELL,
        ))
    }

    /// Reports the container image as one software entry.
    ///
    /// Version is the tag, suffixed with `/` and the runtime's short image
    /// hash when inspection succeeds (e.g., `latest/aded1e1a5b37`).
    fn report_software(&self) -> Vec<SoftwareReport> {
        let hash = self
            .settings
            .kind
            .manager()
            .image_short_hash(&self.spec.image_uri);

        let version = if hash.is_empty() {
            self.image.tag.clone()
        } else {
            format!("{}/{}", self.image.tag, hash)
        };

        vec![SoftwareReport::new(self.image.repository.clone(), version)]
    }
}

/// Resolves the host-side cache directory for the cache bind mount.
fn resolve_host_cache() -> Result<PathBuf> {
    if let Some(base) = dirs::cache_dir() {
        let shared = base.join(HOST_CACHE_SUBDIR);
        if shared.is_dir() {
            return Ok(shared);
        }
    }

    // No shared cache on this host; the mount must still point somewhere
    // that outlives decoration, so keep the temp directory.
    let tmp = tempfile::Builder::new()
        .prefix("snakemake-container-cache-")
        .tempdir()
        .map_err(Error::CacheDirFailed)?;
    Ok(tmp.keep())
}
