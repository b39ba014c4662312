use crate::core::scheme::{
    HistorySource, InstrumentRecord, PricePoint, RETENTION_POINTS, RawHistory, RawPricePoint,
};
use chrono::NaiveDate;
use tracing::{debug, warn};

const DATE_FORMATS: [&str; 2] = ["%d-%m-%Y", "%Y-%m-%d"];

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_str.trim(), format).ok())
}

fn parse_point(raw: &RawPricePoint) -> Option<PricePoint> {
    let date = parse_date(&raw.date)?;
    let value = raw
        .value
        .as_deref()?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())?;
    Some(PricePoint::new(date, value))
}

/// Cleans a raw history into the retained series, ascending by date.
///
/// Unparseable points are dropped. Duplicate dates keep the first upstream
/// entry. Only the [`RETENTION_POINTS`] most recent dates survive.
pub fn normalize_series(points: &[RawPricePoint]) -> Vec<PricePoint> {
    let mut series: Vec<PricePoint> = points.iter().filter_map(parse_point).collect();
    let dropped = points.len() - series.len();
    if dropped > 0 {
        debug!("Dropped {} unparseable NAV points", dropped);
    }

    series.sort_by(|a, b| b.date.cmp(&a.date));
    series.dedup_by_key(|point| point.date);
    series.truncate(RETENTION_POINTS);
    series.reverse();
    series
}

pub struct HistoryFetcher<'a> {
    source: &'a dyn HistorySource,
}

impl<'a> HistoryFetcher<'a> {
    pub fn new(source: &'a dyn HistorySource) -> Self {
        Self { source }
    }

    /// Fetches one scheme. Every failure degrades to `None`.
    pub async fn fetch(&self, id: u32) -> Option<InstrumentRecord> {
        let RawHistory { meta, points } = match self.source.fetch_history(id).await {
            Ok(history) => history,
            Err(e) => {
                warn!(scheme = id, error = %e, "NAV history fetch failed");
                return None;
            }
        };

        let series = normalize_series(&points);
        if series.is_empty() {
            warn!(scheme = id, "NAV history has no usable points");
            return None;
        }

        debug!(
            scheme = id,
            name = %meta.display_name,
            points = series.len(),
            "Fetched NAV history"
        );
        Some(InstrumentRecord { meta, series })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheme::InstrumentMeta;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use chrono::Duration;

    fn meta(id: u32) -> InstrumentMeta {
        InstrumentMeta {
            house_name: "Test Mutual Fund".to_string(),
            instrument_type: "Open Ended Schemes".to_string(),
            category: "Equity Scheme - Large Cap Fund".to_string(),
            id,
            display_name: format!("Test Fund {id}"),
        }
    }

    struct MockSource {
        points: Vec<RawPricePoint>,
        fail: bool,
    }

    #[async_trait]
    impl HistorySource for MockSource {
        async fn fetch_history(&self, id: u32) -> Result<RawHistory> {
            if self.fail {
                return Err(anyhow!("connection reset"));
            }
            Ok(RawHistory {
                meta: meta(id),
                points: self.points.clone(),
            })
        }
    }

    fn daily_points(n: usize) -> Vec<RawPricePoint> {
        let end = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        (0..n)
            .map(|i| {
                let date = end - Duration::days(i as i64);
                let value = format!("{:.4}", 100.0 + i as f64);
                RawPricePoint::new(&date.format("%d-%m-%Y").to_string(), Some(&value))
            })
            .collect()
    }

    #[test]
    fn test_normalize_drops_bad_points() {
        let points = vec![
            RawPricePoint::new("16-10-2026", Some("101.5")),
            RawPricePoint::new("15-10-2026", Some("N.A.")),
            RawPricePoint::new("14-10-2026", None),
            RawPricePoint::new("2026/10/13", Some("99.0")),
            RawPricePoint::new("2026-10-12", Some(" 98.25 ")),
            RawPricePoint::new("11-10-2026", Some("NaN")),
        ];

        let series = normalize_series(&points);
        assert_eq!(
            series,
            vec![
                PricePoint::new(NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(), 98.25),
                PricePoint::new(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(), 101.5),
            ]
        );
    }

    #[test]
    fn test_normalize_keeps_most_recent_by_date() {
        let mut points = daily_points(400);
        // Scramble upstream order; retention must not depend on position.
        points.rotate_left(123);
        points.swap(0, 399);

        let series = normalize_series(&points);
        assert_eq!(series.len(), RETENTION_POINTS);
        assert_eq!(
            series.last().unwrap().date,
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
        assert_eq!(
            series[0].date,
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap() - Duration::days(179)
        );
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_normalize_removes_duplicate_dates() {
        let points = vec![
            RawPricePoint::new("16-10-2026", Some("10")),
            RawPricePoint::new("16-10-2026", Some("11")),
            RawPricePoint::new("15-10-2026", Some("9")),
        ];
        let series = normalize_series(&points);
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].value, 10.0);
    }

    #[tokio::test]
    async fn test_fetch_returns_record() {
        let source = MockSource {
            points: daily_points(5),
            fail: false,
        };
        let record = HistoryFetcher::new(&source).fetch(42).await.unwrap();
        assert_eq!(record.meta.id, 42);
        assert_eq!(record.series.len(), 5);
        assert_eq!(record.latest().unwrap().value, 100.0);
    }

    #[tokio::test]
    async fn test_fetch_degrades_to_none() {
        let failing = MockSource {
            points: daily_points(5),
            fail: true,
        };
        assert!(HistoryFetcher::new(&failing).fetch(1).await.is_none());

        let empty = MockSource {
            points: vec![RawPricePoint::new("16-10-2026", Some("-"))],
            fail: false,
        };
        assert!(HistoryFetcher::new(&empty).fetch(1).await.is_none());
    }
}
