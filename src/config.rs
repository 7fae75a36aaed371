use crate::version::value::Version;

// =============================================================================
// Remote endpoints
// =============================================================================

/// Base URL under which CrateDB and crash release artifacts are published
pub const DEFAULT_RELEASES_URL: &str = "https://cdn.crate.io/downloads/releases";

/// JSON document listing the latest published versions
pub const DEFAULT_VERSIONS_URL: &str = "https://crate.io/versions.json";

/// Field of the versions document naming the latest crash release
pub const LATEST_CRASH_FIELD: &str = "crash";

// =============================================================================
// Templates
// =============================================================================

/// Directory templates are loaded from unless overridden
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Template used when no version-specific template exists
pub const DEFAULT_TEMPLATE: &str = "Dockerfile.hbs";

/// Remote locations consulted while resolving releases
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseEndpoints {
    pub releases_url: String,
    pub versions_url: String,
}

impl Default for ReleaseEndpoints {
    fn default() -> Self {
        Self {
            releases_url: DEFAULT_RELEASES_URL.to_string(),
            versions_url: DEFAULT_VERSIONS_URL.to_string(),
        }
    }
}

impl ReleaseEndpoints {
    pub fn cratedb_tarball_url(&self, version: &Version) -> String {
        format!(
            "{}/crate-{}.tar.gz",
            self.releases_url.trim_end_matches('/'),
            version
        )
    }

    pub fn crash_standalone_url(&self, version: &Version) -> String {
        format!(
            "{}/crash_standalone_{}",
            self.releases_url.trim_end_matches('/'),
            version
        )
    }
}
