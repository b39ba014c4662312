//! Candlestick types shared by the bucketizer and the synthetic generator

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub label: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub index: usize,
    pub timestamp_ms: i64,
}

impl Candle {
    /// Builds a candle closing on `date`. Label and timestamp derive from the date.
    pub fn closing_on(
        date: NaiveDate,
        index: usize,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    ) -> Self {
        Self {
            label: date.format("%-d %b").to_string(),
            open,
            high,
            low,
            close,
            index,
            timestamp_ms: date.and_time(NaiveTime::MIN).and_utc().timestamp_millis(),
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// True when high and low bracket both open and close.
    pub fn is_well_formed(&self) -> bool {
        self.high >= self.open.max(self.close) && self.low <= self.open.min(self.close)
    }
}

/// Output of a bucketing request. `synthetic` marks fallback data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    pub candles: Vec<Candle>,
    pub synthetic: bool,
}

/// Percentage move from the first open to the last close.
///
/// Returns 0 with fewer than two candles or a zero starting open.
pub fn period_return(candles: &[Candle]) -> f64 {
    match (candles.first(), candles.last()) {
        (Some(first), Some(last)) if candles.len() >= 2 && first.open != 0.0 => {
            (last.close - first.open) / first.open * 100.0
        }
        _ => 0.0,
    }
}
