//! Return prediction abstractions.
//!
//! The model lives behind a remote service; parameters pass through unchanged.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub min_sip: f64,
    pub min_lumpsum: f64,
    pub expense_ratio: f64,
    pub fund_size_cr: f64,
    pub fund_age_yr: f64,
    pub sortino: f64,
    pub alpha: f64,
    pub sd: f64,
    pub beta: f64,
    pub sharpe: f64,
    pub risk_level: u8,
    pub amc_name: String,
    pub rating: f64,
    pub category: String,
    pub sub_category: String,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            min_sip: 5000.0,
            min_lumpsum: 10000.0,
            expense_ratio: 1.5,
            fund_size_cr: 2000.0,
            fund_age_yr: 5.0,
            sortino: 0.5,
            alpha: 2.0,
            sd: 10.0,
            beta: 1.0,
            sharpe: 0.8,
            risk_level: 3,
            amc_name: String::new(),
            rating: 4.5,
            category: String::new(),
            sub_category: String::new(),
        }
    }
}

/// Predicted yields in percent. A yield the service omits, or returns as a
/// non-number, is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictedReturns {
    #[serde(default, deserialize_with = "lenient_number")]
    pub returns_1yr: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub returns_3yr: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub returns_5yr: Option<f64>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

#[async_trait]
pub trait ReturnPredictor: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictedReturns>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_service_field_names() {
        let request = PredictionRequest {
            amc_name: "HDFC Mutual Fund".to_string(),
            category: "Equity".to_string(),
            sub_category: "Large Cap".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["min_sip"], 5000.0);
        assert_eq!(json["risk_level"], 3);
        assert_eq!(json["amc_name"], "HDFC Mutual Fund");
        assert_eq!(json["sub_category"], "Large Cap");
        assert_eq!(json.as_object().unwrap().len(), 15);
    }

    #[test]
    fn test_returns_tolerate_missing_and_non_numeric() {
        let returns: PredictedReturns = serde_json::from_str(
            r#"{"returns_1yr": 12.5, "returns_3yr": "n/a", "model": "v2"}"#,
        )
        .unwrap();

        assert_eq!(returns.returns_1yr, Some(12.5));
        assert_eq!(returns.returns_3yr, None);
        assert_eq!(returns.returns_5yr, None);
    }
}
