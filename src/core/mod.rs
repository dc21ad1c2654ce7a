pub mod errors;
pub mod services;
pub mod tracker;
pub mod utils;

pub use errors::{Result, TrackerError};
pub use tracker::{ChartData, Tracker};
