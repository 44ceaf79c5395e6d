pub mod config;
pub mod report;

pub use config::{AppConfig, SegmentationConfig, CONFIG_ENV};
pub use report::{CentroidRecord, SegmentationReport};
