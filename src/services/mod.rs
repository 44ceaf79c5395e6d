pub mod segment_pipeline;

pub use segment_pipeline::{write_report, PipelineError, PipelineOutcome, SegmentPipeline};
