use crate::core::prediction::{PredictedReturns, PredictionRequest, ReturnPredictor};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the remote return prediction service.
pub struct PredictionClient {
    base_url: String,
    client: reqwest::Client,
}

impl PredictionClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("navcandle/0.1")
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl ReturnPredictor for PredictionClient {
    #[instrument(
        name = "PredictReturns",
        skip(self, request),
        fields(amc = %request.amc_name)
    )]
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictedReturns> {
        let url = format!("{}/predict", self.base_url);
        debug!("Requesting prediction from {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} from prediction service",
                response.status()
            ));
        }

        let text = response.text().await?;
        let returns: PredictedReturns = serde_json::from_str(&text)
            .with_context(|| format!("Invalid prediction response: '{text}'"))?;
        debug!(?returns, "Received prediction");
        Ok(returns)
    }
}
