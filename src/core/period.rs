//! Lookback windows for candle charts

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Period {
    OneYear,
    ThreeYears,
    FiveYears,
    All,
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Period::OneYear => "1y",
                Period::ThreeYears => "3y",
                Period::FiveYears => "5y",
                Period::All => "all",
            }
        )
    }
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::OneYear,
        Period::ThreeYears,
        Period::FiveYears,
        Period::All,
    ];

    fn years(&self) -> Option<u32> {
        match self {
            Period::OneYear => Some(1),
            Period::ThreeYears => Some(3),
            Period::FiveYears => Some(5),
            Period::All => None,
        }
    }

    /// Earliest date included in the window, `None` when unbounded.
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.years()
            .and_then(|years| today.checked_sub_months(Months::new(12 * years)))
    }

    /// Number of consecutive points folded into one candle.
    pub fn bucket_size(&self) -> usize {
        match self {
            Period::OneYear => 1,
            Period::ThreeYears => 2,
            Period::FiveYears => 4,
            Period::All => 1,
        }
    }

    /// Length of the synthetic fallback series.
    pub fn synthetic_points(&self) -> usize {
        match self {
            Period::OneYear => 52,
            Period::ThreeYears => 156,
            Period::FiveYears | Period::All => 260,
        }
    }

    /// First date of the synthetic fallback series. `all` reuses the 5y window.
    pub fn synthetic_start(&self, today: NaiveDate) -> NaiveDate {
        let years = self.years().unwrap_or(5);
        today
            .checked_sub_months(Months::new(12 * years))
            .unwrap_or(today)
    }
}

impl FromStr for Period {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1y" => Ok(Period::OneYear),
            "3y" => Ok(Period::ThreeYears),
            "5y" => Ok(Period::FiveYears),
            "all" => Ok(Period::All),
            _ => Err(anyhow::anyhow!("Invalid period: {}", s)),
        }
    }
}
