//! Buckets a NAV series into OHLC candles for a lookback period

use crate::core::candle::{Candle, CandleSeries};
use crate::core::period::Period;
use crate::core::scheme::PricePoint;
use crate::core::synthetic::SyntheticSeriesGenerator;
use chrono::NaiveDate;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

pub struct CandleBucketizer<R: Rng = StdRng> {
    today: NaiveDate,
    fallback: SyntheticSeriesGenerator<R>,
}

impl CandleBucketizer<StdRng> {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_generator(today, SyntheticSeriesGenerator::from_os_rng())
    }
}

impl<R: Rng> CandleBucketizer<R> {
    pub fn with_generator(today: NaiveDate, fallback: SyntheticSeriesGenerator<R>) -> Self {
        Self { today, fallback }
    }

    /// Filters `series` to the period window and folds it into candles.
    ///
    /// Always returns at least one candle: when nothing survives the filter
    /// the synthetic series for `period` is returned with `synthetic` set.
    pub fn bucketize(&mut self, series: &[PricePoint], period: Period) -> CandleSeries {
        let mut points: Vec<PricePoint> = match period.cutoff(self.today) {
            Some(cutoff) => series
                .iter()
                .filter(|point| point.date >= cutoff)
                .copied()
                .collect(),
            None => series.to_vec(),
        };
        points.sort_by_key(|point| point.date);

        let candles = bucket(&points, period.bucket_size());
        if candles.is_empty() {
            warn!(
                %period,
                input_points = series.len(),
                "No NAV points in window, using synthetic candles"
            );
            return CandleSeries {
                candles: self.fallback.generate(period, self.today),
                synthetic: true,
            };
        }

        debug!(
            %period,
            points = points.len(),
            candles = candles.len(),
            "Bucketed NAV series"
        );
        CandleSeries {
            candles,
            synthetic: false,
        }
    }
}

fn bucket(points: &[PricePoint], size: usize) -> Vec<Candle> {
    points
        .chunks(size.max(1))
        .filter_map(|group| {
            let first = group.first()?;
            let last = group.last()?;
            let high = group.iter().map(|p| p.value).fold(f64::MIN, f64::max);
            let low = group.iter().map(|p| p.value).fold(f64::MAX, f64::min);
            Some((last.date, first.value, high, low, last.value))
        })
        .enumerate()
        .map(|(index, (date, open, high, low, close))| {
            Candle::closing_on(date, index, open, high, low, close)
        })
        .collect()
}
