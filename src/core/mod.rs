//! Core business logic abstractions

pub mod aggregator;
pub mod bucketizer;
pub mod candle;
pub mod config;
pub mod error;
pub mod history;
pub mod log;
pub mod period;
pub mod prediction;
pub mod resolver;
pub mod scheme;
pub mod synthetic;

// Re-export main types for cleaner imports
pub use aggregator::{Aggregator, load_fund_house};
pub use bucketizer::CandleBucketizer;
pub use candle::{Candle, CandleSeries, period_return};
pub use error::ResolveError;
pub use history::HistoryFetcher;
pub use period::Period;
pub use prediction::{PredictedReturns, PredictionRequest, ReturnPredictor};
pub use resolver::SchemeResolver;
pub use scheme::{
    HistorySource, InstrumentMeta, InstrumentRecord, PricePoint, SchemeSearch, SchemeSummary,
};
pub use synthetic::SyntheticSeriesGenerator;
