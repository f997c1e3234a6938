use serde::{Deserialize, Serialize};

use crate::core::{FitResult, FitStrength, Point, SampleRow};
use crate::error::{LabError, LabResult};
use crate::render::Renderer;

use super::RegressionLab;

/// Precision used for the equation label in snapshots.
const EQUATION_PRECISION: usize = 2;

/// Deterministic view of the lab, suitable for fixtures and host panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabSnapshot {
    pub domain_max: f64,
    pub points: Vec<Point>,
    pub fit: FitResult,
    pub strength: FitStrength,
    pub equation: String,
    pub samples: Vec<SampleRow>,
}

impl<R: Renderer> RegressionLab<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> LabSnapshot {
        LabSnapshot {
            domain_max: self.config.domain_max,
            points: self.store.snapshot(),
            fit: self.fit,
            strength: self.fit.strength(),
            equation: self.fit.equation_label(EQUATION_PRECISION),
            samples: self.samples.clone(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> LabResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| LabError::InvalidInput(format!("failed to serialize snapshot: {e}")))
    }
}
