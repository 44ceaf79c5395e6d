//! The iterative clustering engine.
//!
//! [`ClusteringEngine`] owns all mutable state of a run: the centroid grid,
//! the per-pixel label map and the per-pixel distance map. One iteration is
//!
//! 1. **Sweep**: for every centroid, in ascending index order, compare the
//!    pixels in its [`SearchWindow`] against their stored distance and take
//!    over those it strictly improves.
//! 2. **Update**: rebuild the centroid means from the label map.
//!
//! The distance map is only ever lowered, so every pixel's stored cost is
//! non-increasing over the whole run and the loop reaches a sweep without
//! reassignments in a finite number of iterations. An optional cap in
//! [`SlicOptions`] bounds it further.
//!
//! Ties are broken by processing order: a pixel moves only on a strict
//! improvement, so the first centroid reaching a given cost keeps it.

mod options;
mod window;

pub use options::{SlicOptions, DEFAULT_COMPACTNESS, DEFAULT_NUM_SUPERPIXELS};
pub use window::SearchWindow;

use crate::api::ConfigError;
use crate::grid::{Centroid, CentroidGrid, GridLayout};
use crate::image::PixelBuffer;
use crate::metric::DistanceMetric;
use crate::output::{Segmentation, Termination};

/// Lifecycle of a clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// The last sweep changed at least one label (or none has run yet).
    Running,
    /// A full sweep left every label unchanged.
    Converged,
}

/// Bounded-window iterative clustering over one image.
///
/// # Example
///
/// ```
/// use slic_superpixels::{ClusteringEngine, PixelBuffer, SlicOptions};
///
/// let image = PixelBuffer::filled(8, 8, [10, 20, 30]).unwrap();
/// let options = SlicOptions::new().num_superpixels(4);
///
/// let mut engine = ClusteringEngine::new(&image, options).unwrap();
/// while engine.iterate() {}
///
/// let segmentation = engine.finish();
/// assert_eq!(segmentation.centroids().len(), 4);
/// ```
pub struct ClusteringEngine<'a> {
    image: &'a PixelBuffer,
    options: SlicOptions,
    metric: DistanceMetric,
    grid: CentroidGrid,
    labels: Vec<u32>,
    distances: Vec<f32>,
    state: EngineState,
    iterations: u32,
    empty_clusters: usize,
}

impl<'a> ClusteringEngine<'a> {
    /// Validate `options`, seed and bootstrap the centroid grid, and fill
    /// the distance map for the bootstrap assignment.
    ///
    /// Parameters are checked before anything is allocated.
    pub fn new(image: &'a PixelBuffer, options: SlicOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        let layout = GridLayout::new(image.width(), image.height(), options.num_superpixels)?;

        let metric = DistanceMetric::new(&layout, options.compactness);
        let mut grid = CentroidGrid::seed(layout);
        let labels = grid.bootstrap(image);

        let mut distances = Vec::with_capacity(image.len());
        for y in 0..image.height() {
            for x in 0..image.width() {
                let index = image.index_of(x, y);
                let centroid = grid.get(labels[index] as usize);
                distances.push(metric.distance(centroid, x, y, image.pixel(index)));
            }
        }

        tracing::debug!(
            width = image.width(),
            height = image.height(),
            centroids = grid.len(),
            cell_width = layout.cell_width(),
            cell_height = layout.cell_height(),
            "Bootstrapped centroid grid"
        );

        Ok(Self {
            image,
            options,
            metric,
            grid,
            labels,
            distances,
            state: EngineState::Running,
            iterations: 0,
            empty_clusters: 0,
        })
    }

    /// One assignment pass over every centroid's search window.
    ///
    /// Returns the number of reassigned pixels. A pixel can be taken over
    /// more than once within a sweep, each time by a strictly lower cost.
    pub fn sweep(&mut self) -> usize {
        let layout = *self.grid.layout();
        let mut reassigned = 0;

        for (n, centroid) in self.grid.centroids().iter().enumerate() {
            let window = SearchWindow::around(centroid, &layout);
            for y in window.min_y..=window.max_y {
                for x in window.min_x..=window.max_x {
                    let index = self.image.index_of(x, y);
                    let distance = self
                        .metric
                        .distance(centroid, x, y, self.image.pixel(index));
                    if distance < self.distances[index] {
                        self.distances[index] = distance;
                        self.labels[index] = n as u32;
                        reassigned += 1;
                    }
                }
            }
        }

        reassigned
    }

    /// Recompute every centroid from the current label map.
    ///
    /// Centroids without members keep their previous values.
    pub fn update_centroids(&mut self) {
        self.empty_clusters = self.grid.update(self.image, &self.labels);
        if self.empty_clusters > 0 {
            tracing::debug!(
                empty = self.empty_clusters,
                "Centroids without members kept their previous values"
            );
        }
    }

    /// Run one sweep followed by a centroid update.
    ///
    /// Returns `true` when another iteration should follow: something
    /// changed and the iteration cap has not been reached. Calling this
    /// after the engine has converged does nothing and returns `false`.
    pub fn iterate(&mut self) -> bool {
        if self.state == EngineState::Converged {
            return false;
        }

        let reassigned = self.sweep();
        self.update_centroids();
        self.iterations += 1;

        tracing::debug!(iteration = self.iterations, reassigned, "Sweep complete");

        if reassigned == 0 {
            self.state = EngineState::Converged;
            return false;
        }
        !self.options.cap_reached(self.iterations)
    }

    /// Iterate until convergence or the cap, then package the result.
    pub fn run(mut self) -> Segmentation {
        while self.iterate() {}
        self.finish()
    }

    /// Package the current state as a [`Segmentation`] without iterating
    /// further.
    pub fn finish(self) -> Segmentation {
        let termination = match self.state {
            EngineState::Converged => Termination::Converged,
            EngineState::Running => Termination::IterationLimit,
        };

        tracing::debug!(
            iterations = self.iterations,
            ?termination,
            empty_clusters = self.empty_clusters,
            "Clustering finished"
        );

        Segmentation::new(
            self.image.width(),
            self.image.height(),
            self.labels,
            self.grid.into_centroids(),
            self.iterations,
            termination,
            self.empty_clusters,
        )
    }

    /// Current owner of every pixel, row-major.
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Cost of every pixel's current assignment, row-major.
    #[inline]
    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    #[inline]
    pub fn centroids(&self) -> &[Centroid] {
        self.grid.centroids()
    }

    #[inline]
    pub fn layout(&self) -> &GridLayout {
        self.grid.layout()
    }

    #[inline]
    pub fn metric(&self) -> &DistanceMetric {
        &self.metric
    }

    #[inline]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Completed sweeps; the bootstrap pass counts as iteration 0.
    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Centroids left without members by the last update.
    #[inline]
    pub fn empty_clusters(&self) -> usize {
        self.empty_clusters
    }
}
