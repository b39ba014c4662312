//! Placeholder candles for instruments without usable NAV history.
//!
//! The series drifts upward along a slow sine wave with uniform noise on top.
//! It is only ever used as a fallback and is never mixed into real data.

use crate::core::candle::Candle;
use crate::core::period::Period;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BASELINE: f64 = 100.0;
const MAX_WICK: f64 = 0.015;

pub struct SyntheticSeriesGenerator<R: Rng = StdRng> {
    rng: R,
}

impl SyntheticSeriesGenerator<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> SyntheticSeriesGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates `period.synthetic_points()` daily candles starting at the
    /// period's lookback date.
    pub fn generate(&mut self, period: Period, today: NaiveDate) -> Vec<Candle> {
        let start = period.synthetic_start(today);
        let mut open = BASELINE;

        (0..period.synthetic_points())
            .map(|i| {
                let trend = (i as f64 / 20.0).sin() * 0.5 + 0.3;
                let noise: f64 = self.rng.random_range(-1.0..1.0);
                let change = trend + noise;

                let close = open * (1.0 + change / 100.0);
                let high = open.max(close) * (1.0 + self.rng.random::<f64>() * MAX_WICK);
                let low = open.min(close) * (1.0 - self.rng.random::<f64>() * MAX_WICK);

                let candle = Candle::closing_on(
                    start + Duration::days(i as i64),
                    i,
                    open,
                    high,
                    low,
                    close,
                );
                open = close;
                candle
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_lengths_match_period() {
        let mut generator = SyntheticSeriesGenerator::from_seed(7);
        for (period, expected) in [
            (Period::OneYear, 52),
            (Period::ThreeYears, 156),
            (Period::FiveYears, 260),
            (Period::All, 260),
        ] {
            assert_eq!(generator.generate(period, today()).len(), expected);
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = SyntheticSeriesGenerator::from_seed(42).generate(Period::ThreeYears, today());
        let b = SyntheticSeriesGenerator::from_seed(42).generate(Period::ThreeYears, today());
        assert_eq!(a, b);

        let c = SyntheticSeriesGenerator::from_seed(43).generate(Period::ThreeYears, today());
        assert_ne!(a, c);
    }

    #[test]
    fn test_candles_chain_and_stay_well_formed() {
        let candles = SyntheticSeriesGenerator::from_seed(1).generate(Period::All, today());

        assert_eq!(candles[0].open, BASELINE);
        for (i, candle) in candles.iter().enumerate() {
            assert_eq!(candle.index, i);
            assert!(candle.is_well_formed(), "{candle:?}");
            assert!(candle.high <= candle.open.max(candle.close) * (1.0 + MAX_WICK));
            assert!(candle.low >= candle.open.min(candle.close) * (1.0 - MAX_WICK));
        }
        for pair in candles.windows(2) {
            assert_eq!(pair[1].open, pair[0].close);
            assert_eq!(pair[1].timestamp_ms - pair[0].timestamp_ms, 86_400_000);
        }
    }

    #[test]
    fn test_series_starts_at_lookback_date() {
        let candles = SyntheticSeriesGenerator::from_seed(3).generate(Period::OneYear, today());
        let start = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
        assert_eq!(candles[0].label, "19 Oct");
        assert_eq!(
            candles[0].timestamp_ms,
            start.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis()
        );
    }
}
