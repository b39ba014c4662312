//! Scheme and NAV history types, and the capabilities that produce them

use crate::core::error::ResolveError;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum number of schemes kept from one search.
pub const MAX_SCHEMES: usize = 12;

/// Number of most recent NAV points retained per instrument.
pub const RETENTION_POINTS: usize = 180;

/// A search hit: the scheme code and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeSummary {
    pub id: u32,
    pub display_name: String,
}

/// A single NAV observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentMeta {
    pub house_name: String,
    pub instrument_type: String,
    pub category: String,
    pub id: u32,
    pub display_name: String,
}

/// A fetched instrument with its retained NAV series in ascending date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentRecord {
    pub meta: InstrumentMeta,
    pub series: Vec<PricePoint>,
}

impl InstrumentRecord {
    /// Most recent NAV, if the series has any points.
    pub fn latest(&self) -> Option<&PricePoint> {
        self.series.last()
    }
}

/// Raw NAV entry as delivered upstream. Either field may be unusable.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPricePoint {
    pub date: String,
    pub value: Option<String>,
}

impl RawPricePoint {
    pub fn new(date: &str, value: Option<&str>) -> Self {
        Self {
            date: date.to_string(),
            value: value.map(str::to_string),
        }
    }
}

/// Undecoded instrument history, upstream order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHistory {
    pub meta: InstrumentMeta,
    pub points: Vec<RawPricePoint>,
}

/// Searches schemes by free text.
#[async_trait]
pub trait SchemeSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SchemeSummary>, ResolveError>;
}

/// Fetches the complete NAV history of one scheme.
#[async_trait]
pub trait HistorySource: Send + Sync {
    async fn fetch_history(&self, id: u32) -> Result<RawHistory>;
}
