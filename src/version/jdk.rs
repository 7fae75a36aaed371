//! JDK download table and default JDK selection

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::version::value::Version;

/// JDK bundled with CrateDB 4.x and newer
pub const JDK_DEFAULT_CRATEDB_4: Version = Version::new(12, 0, 1);

/// JDK bundled with CrateDB releases before 4.0
pub const JDK_DEFAULT_LEGACY: Version = Version::new(11, 0, 1);

/// Returns the JDK version used when none is requested explicitly.
pub fn default_jdk_version(cratedb_major: u32) -> Version {
    if cratedb_major >= 4 {
        JDK_DEFAULT_CRATEDB_4
    } else {
        JDK_DEFAULT_LEGACY
    }
}

#[derive(Debug, Error)]
pub enum JdkTableError {
    #[error("Failed to read JDK table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JDK table {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Download URLs of supported JDK releases, keyed by exact version.
///
/// Supporting a new JDK release means adding an entry to [`JdkTable::builtin`]
/// or passing a table file with `--jdk-table`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JdkTable {
    urls: BTreeMap<Version, String>,
}

impl JdkTable {
    pub fn new(urls: BTreeMap<Version, String>) -> Self {
        Self { urls }
    }

    /// The table compiled into the binary
    pub fn builtin() -> Self {
        Self::new(BTreeMap::from([
            (
                Version::new(12, 0, 1),
                "https://download.java.net/java/GA/jdk12.0.1/69cfe15208a647278a19ef0990eea691/12/GPL/openjdk-12.0.1_linux-x64_bin.tar.gz"
                    .to_string(),
            ),
            (
                Version::new(11, 0, 1),
                "https://download.java.net/java/GA/jdk11/13/GPL/openjdk-11.0.1_linux-x64_bin.tar.gz"
                    .to_string(),
            ),
        ]))
    }

    /// Load a table from a JSON object mapping version strings to URLs,
    /// e.g. `{"12.0.1": "https://..."}`.
    pub fn from_json_file(path: &Path) -> Result<Self, JdkTableError> {
        let content = std::fs::read_to_string(path).map_err(|source| JdkTableError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let urls: BTreeMap<Version, String> =
            serde_json::from_str(&content).map_err(|source| JdkTableError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(urls))
    }

    pub fn url(&self, version: &Version) -> Option<&str> {
        self.urls.get(version).map(String::as_str)
    }

    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.urls.keys()
    }
}
