use crate::core::error::ResolveError;
use crate::core::scheme::{
    HistorySource, InstrumentMeta, RawHistory, RawPricePoint, SchemeSearch, SchemeSummary,
};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

/// Scheme search and NAV history over the mfapi.in HTTP API.
pub struct MfApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl MfApiProvider {
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

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "schemeCode")]
    scheme_code: u32,
    #[serde(rename = "schemeName")]
    scheme_name: String,
}

#[derive(Debug, Deserialize)]
struct SchemeResponse {
    meta: SchemeMeta,
    #[serde(default)]
    data: Vec<NavEntry>,
}

#[derive(Debug, Deserialize)]
struct SchemeMeta {
    #[serde(default)]
    fund_house: String,
    #[serde(default)]
    scheme_type: String,
    #[serde(default)]
    scheme_category: String,
    scheme_code: u32,
    scheme_name: String,
}

#[derive(Debug, Deserialize)]
struct NavEntry {
    #[serde(default)]
    date: serde_json::Value,
    #[serde(default)]
    nav: serde_json::Value,
}

/// Upstream fields arrive as strings or bare numbers, sometimes null.
fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl NavEntry {
    fn into_raw(self) -> RawPricePoint {
        // An unusable date is left empty and rejected per point downstream.
        RawPricePoint {
            date: scalar_text(self.date).unwrap_or_default(),
            value: scalar_text(self.nav),
        }
    }
}

#[async_trait]
impl SchemeSearch for MfApiProvider {
    async fn search(&self, query: &str) -> Result<Vec<SchemeSummary>, ResolveError> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/mf/search", self.base_url),
            &[("q", query)],
        )
        .map_err(|e| ResolveError::NetworkFailure(format!("Invalid search URL: {e}")))?;
        debug!("Searching schemes at {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::NetworkFailure(format!(
                "HTTP {status} searching for '{query}'"
            )));
        }

        let response_text = response.text().await?;
        let hits: Vec<SearchHit> = serde_json::from_str(&response_text).map_err(|e| {
            error!(
                error = ?e,
                response = %response_text,
                "Failed to parse search response"
            );
            ResolveError::from(e)
        })?;

        Ok(hits
            .into_iter()
            .map(|hit| SchemeSummary {
                id: hit.scheme_code,
                display_name: hit.scheme_name,
            })
            .collect())
    }
}

#[async_trait]
impl HistorySource for MfApiProvider {
    async fn fetch_history(&self, id: u32) -> Result<RawHistory> {
        let url = format!("{}/mf/{}", self.base_url, id);
        debug!("Requesting NAV history from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send request for scheme: {id}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP error: {} for scheme: {}", status, id));
        }

        let response_text = response
            .text()
            .await
            .with_context(|| format!("Failed to get response text for scheme: {id}"))?;

        if response_text.trim().is_empty() {
            return Err(anyhow!("Received empty response for scheme: {}", id));
        }

        let scheme: SchemeResponse = serde_json::from_str(&response_text)
            .with_context(|| format!("Failed to parse NAV history for scheme: {id}"))?;

        Ok(RawHistory {
            meta: InstrumentMeta {
                house_name: scheme.meta.fund_house,
                instrument_type: scheme.meta.scheme_type,
                category: scheme.meta.scheme_category,
                id: scheme.meta.scheme_code,
                display_name: scheme.meta.scheme_name,
            },
            points: scheme.data.into_iter().map(NavEntry::into_raw).collect(),
        })
    }
}
