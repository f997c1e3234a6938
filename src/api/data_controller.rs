use rand::Rng;
use tracing::{debug, trace};

use crate::core::Point;
use crate::error::LabResult;
use crate::render::Renderer;

use super::{ManualEntry, RegressionLab, random_grid_point};

impl<R: Renderer> RegressionLab<R> {
    /// Appends a point clamped into the domain. Returns its index.
    pub fn add_point(&mut self, point: Point) -> usize {
        let index = self.store.add(point);
        self.recompute_after("add point");
        index
    }

    /// Appends a point snapped to the placement grid, then clamped.
    pub fn add_point_at_position(&mut self, x: f64, y: f64) -> usize {
        let index = self.store.add_at_position(x, y);
        self.recompute_after("add point at position");
        index
    }

    /// Appends a random grid point drawn from the configured range.
    pub fn add_random_point<G: Rng>(&mut self, rng: &mut G) -> usize {
        let point = random_grid_point(rng, &self.config);
        self.add_point_at_position(point.x, point.y)
    }

    /// Parses raw X/Y field text and places the point on the grid.
    ///
    /// Invalid text leaves the store untouched.
    pub fn add_manual_entry(&mut self, x_text: &str, y_text: &str) -> LabResult<usize> {
        let entry = ManualEntry::parse(x_text, y_text)?;
        Ok(self.add_point_at_position(entry.x, entry.y))
    }

    /// Moves an existing point, clamping without snapping.
    pub fn update_point(&mut self, index: usize, x: f64, y: f64) -> LabResult<()> {
        self.store.update(index, x, y)?;
        self.recompute_after("update point");
        Ok(())
    }

    pub fn remove_point(&mut self, index: usize) -> LabResult<Point> {
        let removed = self.store.remove(index)?;
        self.recompute_after("remove point");
        Ok(removed)
    }

    pub fn clear_points(&mut self) {
        self.store.clear();
        self.recompute_after("clear points");
    }

    /// Replaces all points verbatim.
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.store.replace_all(points);
        self.recompute_after("set points");
    }

    /// Replaces all points with the named preset.
    ///
    /// Unknown names leave the store untouched.
    pub fn load_preset(&mut self, name: &str) -> LabResult<()> {
        let points = self.presets.get(name)?.points.clone();
        debug!(preset = name, count = points.len(), "load preset");
        self.set_points(points);
        Ok(())
    }

    fn recompute_after(&mut self, action: &'static str) {
        self.recompute();
        trace!(
            action,
            points = self.store.len(),
            slope = self.fit.slope,
            intercept = self.fit.intercept,
            r_squared = self.fit.r_squared,
            rows = self.samples.len(),
            "recomputed fit"
        );
    }
}
