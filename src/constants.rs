//! Constants for the container deployment layer.
//!
//! Mount points and formatting rules here are part of the generated shell
//! invocation, so changing any of them changes the exact command line the
//! host executes.

// =============================================================================
// Mount Points
// =============================================================================

/// Mount point for the workflow working directory inside the container.
///
/// The decorated command also sets `HOME` and the container working
/// directory to this path, so relative paths in job commands resolve the
/// same way they would on the host.
pub const SNAKEMAKE_MOUNTPOINT: &str = "/mnt/snakemake";

/// Mount point for the shared cache directory inside the container.
pub const CACHE_MOUNTPOINT: &str = "/mnt/snakemake-cache";

/// Subdirectory of the user cache directory used as the host side of the
/// cache mount, when it exists.
pub const HOST_CACHE_SUBDIR: &str = "snakemake";

// =============================================================================
// Image References
// =============================================================================

/// Tag assumed when an image reference carries no explicit tag.
pub const DEFAULT_TAG: &str = "latest";

/// Number of hex characters kept from an image content hash.
///
/// Both runtime backends truncate to the same length so reported versions
/// are comparable across runtimes.
pub const SHORT_HASH_LEN: usize = 12;

// =============================================================================
// Command Generation
// =============================================================================

/// Shell used to execute the decorated command inside the container.
pub const CONTAINER_SHELL: &str = "/bin/sh";
