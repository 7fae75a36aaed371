//! Release version resolution
//!
//! Validates the requested CrateDB, crash and JDK versions against the
//! published artifacts and fills in defaults for the optional ones.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{LATEST_CRASH_FIELD, ReleaseEndpoints};
use crate::version::error::{Product, ResolveError};
use crate::version::jdk::{JdkTable, default_jdk_version};
use crate::version::probe::Probe;
use crate::version::value::Version;

/// Versions requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    pub cratedb: Version,
    pub crash: Option<Version>,
    pub jdk: Option<Version>,
}

/// A JDK release with its download location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdkRelease {
    pub version: Version,
    pub url: String,
    pub sha256: String,
}

/// Versions that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersions {
    pub cratedb: Version,
    pub crash: Version,
    pub jdk: JdkRelease,
}

pub struct ReleaseResolver {
    probe: Arc<dyn Probe>,
    endpoints: ReleaseEndpoints,
    jdk_table: JdkTable,
}

impl ReleaseResolver {
    pub fn new(probe: Arc<dyn Probe>, endpoints: ReleaseEndpoints, jdk_table: JdkTable) -> Self {
        Self {
            probe,
            endpoints,
            jdk_table,
        }
    }

    /// Resolve all three versions, stopping at the first failure.
    pub async fn resolve(&self, request: &ReleaseRequest) -> Result<ResolvedVersions, ResolveError> {
        let cratedb = self.resolve_cratedb(request.cratedb).await?;
        let crash = self.resolve_crash(request.crash).await?;
        let jdk = self.resolve_jdk(cratedb, request.jdk).await?;

        Ok(ResolvedVersions {
            cratedb,
            crash,
            jdk,
        })
    }

    /// Ensure the CrateDB tarball for `version` is published.
    pub async fn resolve_cratedb(&self, version: Version) -> Result<Version, ResolveError> {
        let url = self.endpoints.cratedb_tarball_url(&version);

        if !self.probe.exists(&url).await {
            return Err(ResolveError::NotFound {
                product: Product::CrateDb,
                version,
            });
        }

        info!("Using CrateDB {}", version);
        Ok(version)
    }

    /// Ensure the requested crash release is published, or look up the latest
    /// one when none was requested.
    pub async fn resolve_crash(&self, version: Option<Version>) -> Result<Version, ResolveError> {
        let Some(version) = version else {
            let latest = self.latest_crash().await?;
            info!("Using latest crash {}", latest);
            return Ok(latest);
        };

        let url = self.endpoints.crash_standalone_url(&version);

        if !self.probe.exists(&url).await {
            return Err(ResolveError::NotFound {
                product: Product::Crash,
                version,
            });
        }

        info!("Using crash {}", version);
        Ok(version)
    }

    /// Pick the JDK for `cratedb` (or the requested one) and fetch its checksum.
    pub async fn resolve_jdk(
        &self,
        cratedb: Version,
        requested: Option<Version>,
    ) -> Result<JdkRelease, ResolveError> {
        let version = requested.unwrap_or_else(|| default_jdk_version(cratedb.major));

        let Some(url) = self.jdk_table.url(&version).map(str::to_string) else {
            let known: Vec<String> = self.jdk_table.versions().map(Version::to_string).collect();
            warn!("JDK {} is not in the table (known: {})", version, known.join(", "));
            return Err(ResolveError::UnknownJdk(version));
        };

        let sha256 = self.probe.fetch_checksum(&url).await?;

        info!("Using JDK {} from {}", version, url);
        Ok(JdkRelease {
            version,
            url,
            sha256,
        })
    }

    async fn latest_crash(&self) -> Result<Version, ResolveError> {
        let document = self.probe.fetch_json(&self.endpoints.versions_url).await?;

        let latest = document
            .get(LATEST_CRASH_FIELD)
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ResolveError::InvalidMetadata(format!(
                    "missing string field '{}' in {}",
                    LATEST_CRASH_FIELD, self.endpoints.versions_url
                ))
            })?;

        Ok(Version::parse(latest)?)
    }
}
