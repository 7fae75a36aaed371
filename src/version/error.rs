use std::fmt;

use thiserror::Error;

use crate::version::value::Version;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid version '{input}': expected <major>.<minor>.<hotfix>")]
pub struct VersionParseError {
    pub input: String,
}

impl VersionParseError {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid JSON from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Which release a [`ResolveError::NotFound`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    CrateDb,
    Crash,
    Jdk,
}

impl Product {
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::CrateDb => "CrateDB",
            Product::Crash => "crash",
            Product::Jdk => "JDK",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No release found for {product} {version}")]
    NotFound { product: Product, version: Version },

    #[error("No URL for JDK version {0} found")]
    UnknownJdk(Version),

    #[error("Invalid versions metadata: {0}")]
    InvalidMetadata(String),

    #[error(transparent)]
    Format(#[from] VersionParseError),

    #[error(transparent)]
    Probe(#[from] ProbeError),
}

impl ResolveError {
    /// True when the requested release or JDK table entry does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ResolveError::NotFound { .. } | ResolveError::UnknownJdk(_)
        )
    }
}
