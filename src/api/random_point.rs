use rand::Rng;

use crate::core::Point;
use crate::core::primitives::snap_to_step;

use super::LabConfig;

/// Draws a point from `[random_min, random_min + random_span)` on both axes,
/// snapped to the placement grid.
///
/// Expects a config that already passed validation.
pub fn random_grid_point<G: Rng>(rng: &mut G, config: &LabConfig) -> Point {
    let mut draw = || {
        let raw = config.random_min + rng.gen_range(0.0..config.random_span);
        snap_to_step(raw, config.snap_step)
    };
    let x = draw();
    let y = draw();
    Point::new(x, y)
}
