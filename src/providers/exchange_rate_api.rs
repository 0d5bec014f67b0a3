//! Client for the ExchangeRate-API v6 pair conversion endpoint.
//! See <https://www.exchangerate-api.com/docs/pair-conversion-requests>.

use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::currency::{ConversionError, ConversionResult, ExchangeRateProvider};

pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ExchangeRateApiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ExchangeRateApiClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let api_key = api_key.trim();
        ensure!(!api_key.is_empty(), "The API key must not be blank");

        let client = reqwest::Client::builder()
            .user_agent(concat!("conversor/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    fn pair_path(&self, key: &str, base_code: &str, target_code: &str, amount: f64) -> String {
        format!("/v6/{key}/pair/{base_code}/{target_code}/{amount}")
    }
}

#[derive(Debug, Deserialize)]
struct PairResponse {
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    base_code: Option<String>,
    target_code: Option<String>,
    conversion_rate: Option<f64>,
    conversion_result: Option<f64>,
}

impl PairResponse {
    fn into_result(
        self,
        base_code: &str,
        target_code: &str,
    ) -> Result<ConversionResult, ConversionError> {
        if self.result == "error" {
            return Err(ConversionError::Api {
                error_type: self.error_type.unwrap_or_else(|| "unknown".to_string()),
            });
        }

        let missing = |field: &str| ConversionError::MalformedResponse(format!("missing {field}"));
        let base = self.base_code.ok_or_else(|| missing("base_code"))?;
        let target = self.target_code.ok_or_else(|| missing("target_code"))?;
        let rate = self.conversion_rate.ok_or_else(|| missing("conversion_rate"))?;
        let converted = self
            .conversion_result
            .ok_or_else(|| missing("conversion_result"))?;

        if !base.eq_ignore_ascii_case(base_code) || !target.eq_ignore_ascii_case(target_code) {
            return Err(ConversionError::MalformedResponse(format!(
                "expected {base_code}/{target_code}, got {base}/{target}"
            )));
        }
        if rate < 0.0 || converted < 0.0 {
            return Err(ConversionError::MalformedResponse(format!(
                "negative conversion values: rate {rate}, result {converted}"
            )));
        }

        Ok(ConversionResult {
            base_code: base.to_ascii_uppercase(),
            target_code: target.to_ascii_uppercase(),
            conversion_rate: rate,
            conversion_result: converted,
        })
    }
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateApiClient {
    #[instrument(
        name = "PairConversion",
        skip(self),
        fields(base = %base_code, target = %target_code)
    )]
    async fn convert(
        &self,
        base_code: &str,
        target_code: &str,
        amount: f64,
    ) -> Result<ConversionResult, ConversionError> {
        let url = format!(
            "{}{}",
            self.base_url,
            self.pair_path(&self.api_key, base_code, target_code, amount)
        );
        debug!(
            "Requesting pair conversion from {}{}",
            self.base_url,
            self.pair_path("***", base_code, target_code, amount)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ConversionError::Network(e.without_url()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            debug!(%status, "Pair conversion returned non-OK status");
            return Err(ConversionError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ConversionError::Network(e.without_url()))?;

        let data: PairResponse = serde_json::from_str(&text).map_err(|e| {
            debug!(error = %e, response = %text, "Failed to parse pair conversion response");
            ConversionError::MalformedResponse(e.to_string())
        })?;

        let result = data.into_result(base_code, target_code)?;
        debug!(
            rate = result.conversion_rate,
            converted = result.conversion_result,
            "Pair conversion succeeded"
        );
        Ok(result)
    }
}
