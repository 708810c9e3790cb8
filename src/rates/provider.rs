//! Outbound rate fetching
//!
//! The provider trait is the seam for testing the refresh protocol without a
//! network. The production implementation talks to an exchangerate-api style
//! endpoint: `GET {base_url}/{base}` returning `{"rates": {"USD": 0.054}}`.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// Source of fresh base-anchored exchange rates
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the latest rates anchored at `base`, as a code → rate map.
    async fn latest(&self, base: &str) -> Result<HashMap<String, f64>>;
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

/// HTTP client for the public exchangerate-api service
pub struct ExchangeRateApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ExchangeRateApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiClient {
    async fn latest(&self, base: &str) -> Result<HashMap<String, f64>> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), base);
        tracing::debug!(%url, "Fetching exchange rates");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("Exchange-rate request failed")?
            .error_for_status()
            .context("Exchange-rate request returned an error status")?;

        let body: LatestRatesResponse = response
            .json()
            .await
            .context("Failed to parse exchange-rate response")?;

        Ok(body.rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let json = r#"{"base":"ZAR","date":"2025-08-26","rates":{"USD":0.054,"EUR":0.049}}"#;
        let parsed: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.rates.len(), 2);
        assert_eq!(parsed.rates["USD"], 0.054);
    }

    #[test]
    fn test_response_missing_rates_is_an_error() {
        let json = r#"{"base":"ZAR"}"#;
        assert!(serde_json::from_str::<LatestRatesResponse>(json).is_err());
    }
}
