use serde::Serialize;
use std::time::Duration;

use slic_superpixels::Segmentation;

/// Segmentation metadata written as JSON next to the recolored image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentationReport {
    pub width: usize,
    pub height: usize,
    pub iterations: u32,
    pub converged: bool,
    pub empty_clusters: usize,
    /// Wall-clock clustering time
    pub elapsed_ms: f64,
    pub centroids: Vec<CentroidRecord>,
}

/// One final centroid and the number of pixels it owns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentroidRecord {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub members: u32,
}

impl SegmentationReport {
    pub fn new(segmentation: &Segmentation, elapsed: Duration) -> Self {
        let members = segmentation.member_counts();
        let centroids = segmentation
            .centroids()
            .iter()
            .zip(members)
            .enumerate()
            .map(|(index, (c, members))| CentroidRecord {
                index,
                x: c.x,
                y: c.y,
                r: c.color.r,
                g: c.color.g,
                b: c.color.b,
                members,
            })
            .collect();

        Self {
            width: segmentation.width(),
            height: segmentation.height(),
            iterations: segmentation.iterations(),
            converged: segmentation.converged(),
            empty_clusters: segmentation.empty_clusters(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
            centroids,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
