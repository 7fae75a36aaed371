//! Shared test helpers

#![allow(dead_code)]

pub mod probe;

use std::path::PathBuf;
use std::sync::Arc;

use crate_dockerfile::config::ReleaseEndpoints;
use crate_dockerfile::version::jdk::JdkTable;
use crate_dockerfile::version::resolver::ReleaseResolver;

pub use probe::FakeProbe;

pub const RELEASES_URL: &str = "https://cdn.test/releases";
pub const VERSIONS_URL: &str = "https://cdn.test/versions.json";

pub const JDK_12_URL: &str = "https://download.java.net/java/GA/jdk12.0.1/69cfe15208a647278a19ef0990eea691/12/GPL/openjdk-12.0.1_linux-x64_bin.tar.gz";
pub const JDK_11_URL: &str =
    "https://download.java.net/java/GA/jdk11/13/GPL/openjdk-11.0.1_linux-x64_bin.tar.gz";

/// Create a resolver over `probe` with test endpoints and the built-in JDK table
pub fn create_test_resolver(probe: Arc<FakeProbe>) -> ReleaseResolver {
    ReleaseResolver::new(
        probe,
        ReleaseEndpoints {
            releases_url: RELEASES_URL.to_string(),
            versions_url: VERSIONS_URL.to_string(),
        },
        JdkTable::builtin(),
    )
}

/// Directory holding the templates shipped with the crate
pub fn shipped_template_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}
