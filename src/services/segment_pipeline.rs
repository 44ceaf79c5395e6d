use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use slic_superpixels::{PixelBuffer, SegmentError, Segmentation, SlicOptions, Superpixels};

use crate::codec::ppm;
use crate::error::PpmError;
use crate::models::{SegmentationConfig, SegmentationReport};

/// Error from the segmentation pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: PpmError,
    },

    #[error("Segmentation failed: {0}")]
    Segment(#[from] SegmentError),

    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: PpmError,
    },

    #[error("Failed to encode report: {0}")]
    ReportEncode(#[from] serde_json::Error),

    #[error("Failed to write report {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of one pipeline run
pub struct PipelineOutcome {
    pub segmentation: Segmentation,
    /// Input recolored with each superpixel's mean color
    pub rendered: PixelBuffer,
    /// Clustering time, excluding file I/O
    pub elapsed: Duration,
}

impl PipelineOutcome {
    pub fn report(&self) -> SegmentationReport {
        SegmentationReport::new(&self.segmentation, self.elapsed)
    }
}

/// Pipeline that orchestrates load → segment → render → save
pub struct SegmentPipeline {
    superpixels: Superpixels,
}

impl SegmentPipeline {
    pub fn new(options: SlicOptions) -> Self {
        Self {
            superpixels: Superpixels::with_options(options),
        }
    }

    pub fn from_config(config: &SegmentationConfig) -> Self {
        Self::new(config.to_options())
    }

    pub fn options(&self) -> &SlicOptions {
        self.superpixels.options()
    }

    /// Cluster an in-memory image and recolor it
    pub fn process(&self, image: &PixelBuffer) -> Result<PipelineOutcome, PipelineError> {
        let started = Instant::now();
        let segmentation = self.superpixels.segment(image)?;
        let elapsed = started.elapsed();
        let rendered = segmentation.render();

        tracing::info!(
            centroids = segmentation.centroids().len(),
            iterations = segmentation.iterations(),
            termination = ?segmentation.termination(),
            empty_clusters = segmentation.empty_clusters(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Segmented image"
        );

        Ok(PipelineOutcome {
            segmentation,
            rendered,
            elapsed,
        })
    }

    /// Load `input`, segment it and save the recolored image to `output`
    pub fn run(&self, input: &Path, output: &Path) -> Result<PipelineOutcome, PipelineError> {
        let image = ppm::load(input).map_err(|source| PipelineError::Load {
            path: input.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %input.display(),
            width = image.width(),
            height = image.height(),
            "Loaded image"
        );

        let outcome = self.process(&image)?;

        ppm::save(&outcome.rendered, output).map_err(|source| PipelineError::Save {
            path: output.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %output.display(), "Saved image");

        Ok(outcome)
    }
}

/// Write the JSON report for `outcome` to `path`
pub fn write_report(outcome: &PipelineOutcome, path: &Path) -> Result<(), PipelineError> {
    let json = outcome.report().to_json()?;
    std::fs::write(path, json).map_err(|source| PipelineError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Wrote report");
    Ok(())
}
