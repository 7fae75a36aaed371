//! reqwest-backed probe for release artifacts and metadata

use tracing::{debug, warn};

use crate::version::error::ProbeError;
use crate::version::probe::Probe;

/// Suffix of the checksum file published next to each download
const CHECKSUM_SUFFIX: &str = ".sha256";

/// Probe implementation issuing real HTTP requests
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("crate-dockerfile/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, ProbeError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status {}", url, status);
            return Err(ProbeError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response)
    }
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Probe for HttpProbe {
    async fn exists(&self, url: &str) -> bool {
        debug!("HEAD {}", url);
        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status();
                debug!("HEAD {} returned status {}", url, status);
                status.is_success()
            }
            Err(e) => {
                // Reported as absent; the caller cannot tell this from a 404.
                debug!("HEAD {} failed: {}", url, e);
                false
            }
        }
    }

    async fn fetch_checksum(&self, url: &str) -> Result<String, ProbeError> {
        let checksum_url = format!("{}{}", url, CHECKSUM_SUFFIX);
        let response = self.get(&checksum_url).await?;
        Ok(response.text().await?)
    }

    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, ProbeError> {
        let body = self.get(url).await?.text().await?;
        serde_json::from_str(&body).map_err(|source| {
            warn!("Failed to parse JSON from {}: {}", url, source);
            ProbeError::Parse {
                url: url.to_string(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const UNREACHABLE_URL: &str = "http://invalid.localhost.test:99999";

    #[tokio::test]
    async fn exists_returns_true_for_successful_head() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("HEAD", "/crate-4.1.0.tar.gz")
            .with_status(200)
            .create_async()
            .await;

        let probe = HttpProbe::new();
        let url = format!("{}/crate-4.1.0.tar.gz", server.url());

        assert!(probe.exists(&url).await);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn exists_returns_false_for_not_found() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("HEAD", "/crate-9.9.9.tar.gz")
            .with_status(404)
            .create_async()
            .await;

        let probe = HttpProbe::new();
        let url = format!("{}/crate-9.9.9.tar.gz", server.url());

        assert!(!probe.exists(&url).await);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn exists_returns_false_on_network_error() {
        let probe = HttpProbe::new();
        let url = format!("{}/crate-4.1.0.tar.gz", UNREACHABLE_URL);

        assert!(!probe.exists(&url).await);
    }

    #[tokio::test]
    async fn fetch_checksum_reads_sha256_file_next_to_url() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/jdk.tar.gz.sha256")
            .with_status(200)
            .with_body("ddb0d25c6fb8ac1c7e8d0a2c4f5b0d2c")
            .create_async()
            .await;

        let probe = HttpProbe::new();
        let url = format!("{}/jdk.tar.gz", server.url());
        let checksum = probe.fetch_checksum(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(checksum, "ddb0d25c6fb8ac1c7e8d0a2c4f5b0d2c");
    }

    #[tokio::test]
    async fn fetch_checksum_returns_status_error_for_missing_file() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/jdk.tar.gz.sha256")
            .with_status(404)
            .create_async()
            .await;

        let probe = HttpProbe::new();
        let url = format!("{}/jdk.tar.gz", server.url());
        let result = probe.fetch_checksum(&url).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(ProbeError::Status { status, .. }) if status == reqwest::StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn fetch_checksum_returns_network_error_for_unreachable_host() {
        let probe = HttpProbe::new();
        let url = format!("{}/jdk.tar.gz", UNREACHABLE_URL);
        let result = probe.fetch_checksum(&url).await;

        assert!(matches!(result, Err(ProbeError::Network(_))));
    }

    #[tokio::test]
    async fn fetch_json_parses_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/versions.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"crate": "4.1.0", "crash": "0.24.2"}"#)
            .create_async()
            .await;

        let probe = HttpProbe::new();
        let url = format!("{}/versions.json", server.url());
        let value = probe.fetch_json(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(value["crash"], "0.24.2");
    }

    #[tokio::test]
    async fn fetch_json_returns_parse_error_for_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/versions.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{not json")
            .create_async()
            .await;

        let probe = HttpProbe::new();
        let url = format!("{}/versions.json", server.url());
        let result = probe.fetch_json(&url).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ProbeError::Parse { .. })));
    }
}
