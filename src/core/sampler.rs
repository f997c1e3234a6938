use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::grid_step_count;
use crate::core::{FitResult, Point};
use crate::error::{LabError, LabResult};

/// One render-ready row: a real data point or a synthetic fill sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    pub x: f64,
    pub actual_y: Option<f64>,
    pub fitted_y: Option<f64>,
    pub is_data_point: bool,
}

impl SampleRow {
    #[must_use]
    pub fn data_point(point: Point, fitted_y: Option<f64>) -> Self {
        Self {
            x: point.x,
            actual_y: Some(point.y),
            fitted_y,
            is_data_point: true,
        }
    }

    #[must_use]
    pub fn fill(x: f64, fitted_y: f64) -> Self {
        Self {
            x,
            actual_y: None,
            fitted_y: Some(fitted_y),
            is_data_point: false,
        }
    }
}

/// Controls how far past the data the line extends and how dense it is.
///
/// `tolerance_ratio` scales `step` into the distance under which a fill
/// sample is considered to sit on top of a data point and is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerTuning {
    pub domain_padding: f64,
    pub step: f64,
    pub tolerance_ratio: f64,
}

impl SamplerTuning {
    pub fn new(domain_padding: f64, step: f64) -> LabResult<Self> {
        Self {
            domain_padding,
            step,
            ..Self::default()
        }
        .validated()
    }

    #[must_use]
    pub fn with_tolerance_ratio(mut self, tolerance_ratio: f64) -> Self {
        self.tolerance_ratio = tolerance_ratio;
        self
    }

    pub fn validated(self) -> LabResult<Self> {
        if !self.domain_padding.is_finite() || self.domain_padding < 0.0 {
            return Err(LabError::InvalidConfig(
                "sampler domain padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(LabError::InvalidConfig(
                "sampler step must be finite and > 0".to_owned(),
            ));
        }
        if !self.tolerance_ratio.is_finite()
            || self.tolerance_ratio <= 0.0
            || self.tolerance_ratio > 1.0
        {
            return Err(LabError::InvalidConfig(
                "sampler tolerance ratio must be in (0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn tolerance(self) -> f64 {
        self.step * self.tolerance_ratio
    }
}

impl Default for SamplerTuning {
    fn default() -> Self {
        Self {
            domain_padding: 1.0,
            step: 0.5,
            tolerance_ratio: 0.2,
        }
    }
}

/// Upper bound on fill samples for one line; wider spans get a coarser step.
pub const MAX_FILL_STEPS: usize = 4_096;

fn fill_grid(start: f64, end: f64, step: f64) -> (f64, usize) {
    let steps = grid_step_count(start, end, step);
    if steps <= MAX_FILL_STEPS {
        return (step, steps);
    }
    let coarse = (end - start) / MAX_FILL_STEPS as f64;
    debug!(requested = steps, coarse_step = coarse, "coarsening fill grid");
    (coarse, MAX_FILL_STEPS)
}

/// Builds the x-sorted row sequence used to draw points and the fitted line.
///
/// Every input point yields one data row. With two or more points the line
/// is densified with fill rows across `[min_x - padding, max_x + padding]`,
/// skipping grid positions that coincide with a data point.
#[must_use]
pub fn sample_fit_line(points: &[Point], fit: FitResult, tuning: SamplerTuning) -> Vec<SampleRow> {
    if points.is_empty() {
        return Vec::new();
    }

    let has_line = points.len() >= 2;
    let mut rows: Vec<SampleRow> = points
        .iter()
        .map(|point| SampleRow::data_point(*point, has_line.then(|| fit.predict(point.x))))
        .collect();

    if has_line {
        let (min_x, max_x) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), point| {
                (lo.min(point.x), hi.max(point.x))
            });
        let start = min_x - tuning.domain_padding;
        let end = max_x + tuning.domain_padding;
        let tolerance = tuning.tolerance();

        let (step, steps) = fill_grid(start, end, tuning.step);
        rows.reserve(steps + 1);
        for i in 0..=steps {
            let x = start + i as f64 * step;
            let occupied = points.iter().any(|point| (x - point.x).abs() < tolerance);
            if !occupied {
                rows.push(SampleRow::fill(x, fit.predict(x)));
            }
        }
    }

    // `sort_by_key` is stable, so equal x keep insertion order.
    rows.sort_by_key(|row| OrderedFloat(row.x));
    rows
}
