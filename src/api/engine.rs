use tracing::debug;

use crate::core::{
    Domain, FitResult, Point, PointStore, PresetCatalog, SampleRow, fit, sample_fit_line,
};
use crate::error::LabResult;
use crate::render::{RenderFrame, Renderer};

use super::LabConfig;
use super::validation::validate_lab_config;

/// Points the lab starts with when `seed_initial_points` is enabled.
pub const SEED_POINTS: [Point; 4] = [
    Point::new(2.0, 3.0),
    Point::new(4.0, 5.0),
    Point::new(6.0, 7.0),
    Point::new(8.0, 9.0),
];

/// Main orchestration facade consumed by host applications.
///
/// `RegressionLab` owns the single point store and re-runs the
/// store -> fit -> sample pipeline after every mutation, so `fit()` and
/// `samples()` always describe the points currently held.
pub struct RegressionLab<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: LabConfig,
    pub(super) store: PointStore,
    pub(super) presets: PresetCatalog,
    pub(super) fit: FitResult,
    pub(super) samples: Vec<SampleRow>,
}

impl<R: Renderer> RegressionLab<R> {
    pub fn new(renderer: R, config: LabConfig) -> LabResult<Self> {
        let config = validate_lab_config(config)?;
        let domain = Domain::new(config.domain_max)?;
        let mut store = PointStore::new(domain, config.snap_step);
        if config.seed_initial_points {
            store.replace_all(SEED_POINTS.to_vec());
        }

        let mut lab = Self {
            renderer,
            config,
            store,
            presets: PresetCatalog::builtin(),
            fit: fit(&[]),
            samples: Vec::new(),
        };
        lab.recompute();
        debug!(
            domain_max = config.domain_max,
            points = lab.store.len(),
            "regression lab initialized"
        );
        Ok(lab)
    }

    #[must_use]
    pub fn config(&self) -> LabConfig {
        self.config
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        self.store.points()
    }

    #[must_use]
    pub fn store(&self) -> &PointStore {
        &self.store
    }

    #[must_use]
    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    /// Fit of the current points.
    #[must_use]
    pub fn fit(&self) -> FitResult {
        self.fit
    }

    /// Render-ready rows for the current points and fit.
    #[must_use]
    pub fn samples(&self) -> &[SampleRow] {
        &self.samples
    }

    /// Builds the frame for the current state without drawing it.
    #[must_use]
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame::new(self.config.domain_max, self.fit, self.samples.clone())
    }

    pub fn render(&mut self) -> LabResult<()> {
        let frame = self.render_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Re-derives fit and samples from one snapshot of the store.
    pub(super) fn recompute(&mut self) {
        let snapshot = self.store.snapshot();
        self.fit = fit(&snapshot);
        self.samples = sample_fit_line(&snapshot, self.fit, self.config.sampler);
    }
}
