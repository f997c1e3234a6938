use serde::{Deserialize, Serialize};

use crate::core::SamplerTuning;
use crate::error::{LabError, LabResult};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load lab setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabConfig {
    #[serde(default = "default_domain_max")]
    pub domain_max: f64,
    #[serde(default = "default_snap_step")]
    pub snap_step: f64,
    #[serde(default)]
    pub sampler: SamplerTuning,
    #[serde(default = "default_random_min")]
    pub random_min: f64,
    #[serde(default = "default_random_span")]
    pub random_span: f64,
    #[serde(default = "default_seed_initial_points")]
    pub seed_initial_points: bool,
}

impl LabConfig {
    /// Creates a config with the reference `[0, 15]` domain and half-unit grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            domain_max: default_domain_max(),
            snap_step: default_snap_step(),
            sampler: SamplerTuning::default(),
            random_min: default_random_min(),
            random_span: default_random_span(),
            seed_initial_points: default_seed_initial_points(),
        }
    }

    /// Sets the upper bound of the square `[0, max]` domain.
    #[must_use]
    pub fn with_domain_max(mut self, domain_max: f64) -> Self {
        self.domain_max = domain_max;
        self
    }

    /// Sets the grid step used for interactive placement.
    #[must_use]
    pub fn with_snap_step(mut self, snap_step: f64) -> Self {
        self.snap_step = snap_step;
        self
    }

    #[must_use]
    pub fn with_sampler(mut self, sampler: SamplerTuning) -> Self {
        self.sampler = sampler;
        self
    }

    /// Sets the half-open range `[min, min + span)` random points are drawn from.
    #[must_use]
    pub fn with_random_range(mut self, random_min: f64, random_span: f64) -> Self {
        self.random_min = random_min;
        self.random_span = random_span;
        self
    }

    /// Controls whether a new engine starts with the demo seed points.
    #[must_use]
    pub fn with_seed_initial_points(mut self, seed: bool) -> Self {
        self.seed_initial_points = seed;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> LabResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| LabError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> LabResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| LabError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

impl Default for LabConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_domain_max() -> f64 {
    15.0
}

fn default_snap_step() -> f64 {
    0.5
}

fn default_random_min() -> f64 {
    1.0
}

fn default_random_span() -> f64 {
    12.0
}

fn default_seed_initial_points() -> bool {
    true
}
