pub mod mfapi;
pub mod prediction;

pub use mfapi::MfApiProvider;
pub use prediction::PredictionClient;
