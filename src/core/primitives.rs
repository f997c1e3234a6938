/// Rounds `value` to the nearest multiple of `step`.
///
/// Halfway values round away from zero. A non-positive or non-finite step
/// leaves the value untouched.
#[must_use]
pub fn snap_to_step(value: f64, step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Clamps `value` into `[min, max]`, mapping NaN to `min`.
#[must_use]
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

/// Number of whole `step`s that fit in `[start, end]`, tolerating float noise.
#[must_use]
pub fn grid_step_count(start: f64, end: f64, step: f64) -> usize {
    if start.is_nan() || end.is_nan() || end < start || !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let steps = ((end - start) / step + 1e-9).floor();
    if steps.is_finite() { steps as usize } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::{clamp_finite, grid_step_count, snap_to_step};

    #[test]
    fn snap_rounds_to_half_grid() {
        assert_eq!(snap_to_step(3.2, 0.5), 3.0);
        assert_eq!(snap_to_step(3.3, 0.5), 3.5);
        assert_eq!(snap_to_step(3.25, 0.5), 3.5);
        assert_eq!(snap_to_step(-0.3, 0.5), -0.5);
    }

    #[test]
    fn snap_ignores_invalid_step() {
        assert_eq!(snap_to_step(3.2, 0.0), 3.2);
        assert_eq!(snap_to_step(3.2, f64::NAN), 3.2);
    }

    #[test]
    fn clamp_maps_nan_to_lower_bound() {
        assert_eq!(clamp_finite(f64::NAN, 0.0, 15.0), 0.0);
        assert_eq!(clamp_finite(f64::INFINITY, 0.0, 15.0), 15.0);
        assert_eq!(clamp_finite(f64::NEG_INFINITY, 0.0, 15.0), 0.0);
        assert_eq!(clamp_finite(7.25, 0.0, 15.0), 7.25);
    }

    #[test]
    fn grid_count_includes_endpoint_despite_noise() {
        assert_eq!(grid_step_count(0.0, 10.0, 0.5), 20);
        assert_eq!(grid_step_count(0.1, 0.7, 0.1), 6);
        assert_eq!(grid_step_count(1.0, 0.0, 0.5), 0);
    }
}
