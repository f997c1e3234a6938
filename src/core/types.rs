use serde::{Deserialize, Serialize};

use crate::core::primitives::clamp_finite;
use crate::error::{LabError, LabResult};

/// One data point in chart space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Square visible domain `[0, max]` shared by both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    max: f64,
}

impl Domain {
    pub fn new(max: f64) -> LabResult<Self> {
        if !max.is_finite() || max <= 0.0 {
            return Err(LabError::InvalidConfig(
                "domain max must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        0.0
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (0.0..=self.max).contains(&value)
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        clamp_finite(value, 0.0, self.max)
    }

    #[must_use]
    pub fn clamp_point(self, point: Point) -> Point {
        Point::new(self.clamp(point.x), self.clamp(point.y))
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self { max: 15.0 }
    }
}
