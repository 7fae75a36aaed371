//! Probe trait for checking release artifacts and fetching release metadata

#[cfg(test)]
use mockall::automock;

use crate::version::error::ProbeError;

/// Trait for the HTTP operations the resolver needs
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Probe: Send + Sync {
    /// Checks whether `url` resolves with a successful response.
    ///
    /// Transport failures are reported as `false`, so an unreachable host is
    /// indistinguishable from a missing artifact.
    async fn exists(&self, url: &str) -> bool;

    /// Fetches the body of `{url}.sha256`
    async fn fetch_checksum(&self, url: &str) -> Result<String, ProbeError>;

    /// Fetches `url` and parses the body as JSON
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, ProbeError>;
}
