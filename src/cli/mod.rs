pub mod candles;
pub mod funds;
pub mod predict;
pub mod setup;
pub mod ui;
