//! Probe test utilities

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate_dockerfile::version::error::ProbeError;
use crate_dockerfile::version::probe::Probe;

/// In-memory probe serving a fixed set of URLs
#[derive(Default)]
pub struct FakeProbe {
    existing: HashSet<String>,
    checksums: HashMap<String, String>,
    documents: HashMap<String, serde_json::Value>,
    requests: Mutex<Vec<String>>,
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing(mut self, url: &str) -> Self {
        self.existing.insert(url.to_string());
        self
    }

    pub fn with_checksum(mut self, url: &str, checksum: &str) -> Self {
        self.checksums.insert(url.to_string(), checksum.to_string());
        self
    }

    pub fn with_json(mut self, url: &str, document: serde_json::Value) -> Self {
        self.documents.insert(url.to_string(), document);
        self
    }

    /// Every URL requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, url: &str) {
        self.requests.lock().unwrap().push(url.to_string());
    }
}

fn not_found(url: &str) -> ProbeError {
    ProbeError::Status {
        url: url.to_string(),
        status: reqwest::StatusCode::NOT_FOUND,
    }
}

#[async_trait]
impl Probe for FakeProbe {
    async fn exists(&self, url: &str) -> bool {
        self.record(url);
        self.existing.contains(url)
    }

    async fn fetch_checksum(&self, url: &str) -> Result<String, ProbeError> {
        self.record(url);
        self.checksums
            .get(url)
            .cloned()
            .ok_or_else(|| not_found(&format!("{}.sha256", url)))
    }

    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, ProbeError> {
        self.record(url);
        self.documents.get(url).cloned().ok_or_else(|| not_found(url))
    }
}
