use std::time::Duration;

use async_trait::async_trait;
use range_core::model::HandColorEntry;
use url::Url;

use crate::csv::parse_catalog;
use crate::repository::{CatalogSource, StorageError};

/// Whole-request bound applied by the default client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Catalog fetched as CSV over HTTP(S), e.g. a `hands.csv` served next to the UI.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    url: Url,
    client: reqwest::Client,
}

impl HttpCatalog {
    /// Build a source for `url`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidUrl` if `url` does not parse or is not
    /// http(s), and `StorageError::Connection` if the client cannot be built.
    pub fn new(url: &str) -> Result<Self, StorageError> {
        let url = Url::parse(url).map_err(|e| StorageError::InvalidUrl(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(StorageError::InvalidUrl(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(Self { url, client })
    }

    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_entries(&self) -> Result<Vec<HandColorEntry>, StorageError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::Connection(format!("http status {status}")));
        }
        let text = response
            .text()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        parse_catalog(&text)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_url() {
        assert!(matches!(
            HttpCatalog::new("not a url"),
            Err(StorageError::InvalidUrl(_))
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(matches!(
            HttpCatalog::new("ftp://example.com/hands.csv"),
            Err(StorageError::InvalidUrl(_))
        ));
    }

    #[test]
    fn keeps_parsed_url() {
        let source = HttpCatalog::new("https://example.com/poker-training/hands.csv").unwrap();
        assert_eq!(source.url().path(), "/poker-training/hands.csv");
        assert_eq!(
            source.describe(),
            "https://example.com/poker-training/hands.csv"
        );
    }
}
