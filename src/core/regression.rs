use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::Point;

/// Reason a fit collapsed to a trivial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Degeneracy {
    /// Fewer than two points.
    InsufficientPoints,
    /// All x values identical (vertical scatter); slope is undefined.
    ZeroXVariance,
    /// All y values identical; R² is reported as zero.
    ZeroYVariance,
}

/// Qualitative reading of R² for statistics panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitStrength {
    Perfect,
    Strong,
    Moderate,
    Weak,
}

impl FitStrength {
    const PERFECT_TOLERANCE: f64 = 1e-12;

    #[must_use]
    pub fn from_r_squared(r_squared: f64) -> Self {
        if (1.0 - r_squared).abs() <= Self::PERFECT_TOLERANCE {
            Self::Perfect
        } else if r_squared > 0.8 {
            Self::Strong
        } else if r_squared > 0.5 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// Ordinary least-squares line `y = slope * x + intercept` plus R².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    #[serde(default)]
    pub degeneracy: Option<Degeneracy>,
}

impl FitResult {
    #[must_use]
    pub const fn zero(degeneracy: Degeneracy) -> Self {
        Self {
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
            degeneracy: Some(degeneracy),
        }
    }

    #[must_use]
    pub fn predict(self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.degeneracy.is_some()
    }

    #[must_use]
    pub fn strength(self) -> FitStrength {
        FitStrength::from_r_squared(self.r_squared)
    }

    /// Human-readable equation, e.g. `y = 1.00x + 1.00`.
    ///
    /// Values that round to zero at `precision` print without a minus sign.
    #[must_use]
    pub fn equation_label(self, precision: usize) -> String {
        let (slope_negative, slope) = signed_label(self.slope, precision);
        let (intercept_negative, intercept) = signed_label(self.intercept, precision);
        let slope_sign = if slope_negative { "-" } else { "" };
        let sign = if intercept_negative { '-' } else { '+' };
        format!("y = {slope_sign}{slope}x {sign} {intercept}")
    }
}

/// Fits an OLS line through `points`.
///
/// Slope and intercept come from sums centered on the means, which stay
/// accurate when every x sits close together. Never fails: fewer than two
/// points, identical x values and identical y values map to defined outputs
/// tagged with a `Degeneracy`. The result is a pure function of the input, so
/// repeated calls are bit-identical.
#[must_use]
pub fn fit(points: &[Point]) -> FitResult {
    let count = points.len();
    let Some(first) = points.first().copied().filter(|_| count >= 2) else {
        return FitResult::zero(Degeneracy::InsufficientPoints);
    };

    // Exact comparison: any spread at all defines a slope.
    if points.iter().all(|point| point.x == first.x) {
        warn!(count, x = first.x, "zero x variance; clamping fit to zero");
        return FitResult::zero(Degeneracy::ZeroXVariance);
    }
    if points.iter().all(|point| point.y == first.y) {
        trace!(count, y = first.y, "zero y variance; flat fit");
        return FitResult {
            slope: 0.0,
            intercept: first.y,
            r_squared: 0.0,
            degeneracy: Some(Degeneracy::ZeroYVariance),
        };
    }

    let n = count as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), point| (sx + point.x, sy + point.y));
    let (x_mean, y_mean) = (sum_x / n, sum_y / n);

    let (mut ss_xx, mut ss_xy) = (0.0, 0.0);
    for point in points {
        let dx = point.x - x_mean;
        ss_xx += dx * dx;
        ss_xy += dx * (point.y - y_mean);
    }

    let slope = ss_xy / ss_xx;
    let intercept = y_mean - slope * x_mean;
    if ss_xx <= 0.0 || !slope.is_finite() || !intercept.is_finite() {
        warn!(count, ss_xx, "unusable x spread; clamping fit to zero");
        return FitResult::zero(Degeneracy::ZeroXVariance);
    }

    let (mut ss_total, mut ss_residual) = (0.0, 0.0);
    for point in points {
        let centered = point.y - y_mean;
        let residual = point.y - (slope * point.x + intercept);
        ss_total += centered * centered;
        ss_residual += residual * residual;
    }

    // OLS keeps ss_residual <= ss_total; clamping only absorbs rounding.
    let (r_squared, degeneracy) = if ss_total > 0.0 {
        ((1.0 - ss_residual / ss_total).clamp(0.0, 1.0), None)
    } else {
        (0.0, Some(Degeneracy::ZeroYVariance))
    };

    trace!(count, slope, intercept, r_squared, "fit line");
    FitResult {
        slope,
        intercept,
        r_squared,
        degeneracy,
    }
}

/// Formats `value` at `precision`, reporting whether it reads as negative.
fn signed_label(value: f64, precision: usize) -> (bool, String) {
    let text = format!("{:.precision$}", value.abs());
    let reads_as_zero = text.chars().all(|c| c == '0' || c == '.');
    (value < 0.0 && !reads_as_zero, text)
}

#[cfg(test)]
mod tests {
    use super::{FitResult, FitStrength};

    #[test]
    fn strength_thresholds_follow_r_squared_bands() {
        assert_eq!(FitStrength::from_r_squared(1.0), FitStrength::Perfect);
        assert_eq!(FitStrength::from_r_squared(0.81), FitStrength::Strong);
        assert_eq!(FitStrength::from_r_squared(0.8), FitStrength::Moderate);
        assert_eq!(FitStrength::from_r_squared(0.5), FitStrength::Weak);
        assert_eq!(FitStrength::from_r_squared(-0.2), FitStrength::Weak);
    }

    #[test]
    fn equation_label_renders_sign_of_intercept() {
        let fit = FitResult {
            slope: 0.5,
            intercept: -1.25,
            r_squared: 0.9,
            degeneracy: None,
        };
        assert_eq!(fit.equation_label(2), "y = 0.50x - 1.25");

        let fit = FitResult {
            intercept: 2.0,
            ..fit
        };
        assert_eq!(fit.equation_label(3), "y = 0.500x + 2.000");
    }

    #[test]
    fn equation_label_drops_sign_of_values_rounding_to_zero() {
        let fit = FitResult {
            slope: -0.0,
            intercept: -0.001,
            r_squared: 0.0,
            degeneracy: None,
        };
        assert_eq!(fit.equation_label(2), "y = 0.00x + 0.00");

        let fit = FitResult {
            slope: -0.004,
            intercept: 7.0,
            ..fit
        };
        assert_eq!(fit.equation_label(2), "y = 0.00x + 7.00");

        let fit = FitResult {
            slope: -0.5,
            ..fit
        };
        assert_eq!(fit.equation_label(2), "y = -0.50x + 7.00");
    }
}
