use tracing::{debug, trace, warn};

use crate::core::primitives::snap_to_step;
use crate::core::{Domain, Point};
use crate::error::{LabError, LabResult};

/// Authoritative ordered point collection.
///
/// Insertion order is the identity used by `update` and `remove`. Every
/// mutation except `replace_all` keeps coordinates inside the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct PointStore {
    domain: Domain,
    snap_step: f64,
    points: Vec<Point>,
}

impl PointStore {
    /// Creates an empty store. `snap_step` only affects `add_at_position`.
    #[must_use]
    pub fn new(domain: Domain, snap_step: f64) -> Self {
        Self {
            domain,
            snap_step,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn snap_step(&self) -> f64 {
        self.snap_step
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Appends a point clamped into the domain and returns its index.
    pub fn add(&mut self, point: Point) -> usize {
        let clamped = self.domain.clamp_point(point);
        self.points.push(clamped);
        trace!(x = clamped.x, y = clamped.y, count = self.points.len(), "add point");
        self.points.len() - 1
    }

    /// Appends a point snapped to the step grid, then clamped.
    pub fn add_at_position(&mut self, x: f64, y: f64) -> usize {
        let snapped = Point::new(
            snap_to_step(x, self.snap_step),
            snap_to_step(y, self.snap_step),
        );
        self.add(snapped)
    }

    /// Replaces the point at `index` with clamped, unsnapped coordinates.
    pub fn update(&mut self, index: usize, x: f64, y: f64) -> LabResult<()> {
        let len = self.points.len();
        let domain = self.domain;
        let slot = self
            .points
            .get_mut(index)
            .ok_or(LabError::IndexOutOfRange { index, len })?;
        *slot = domain.clamp_point(Point::new(x, y));
        trace!(index, x = slot.x, y = slot.y, "update point");
        Ok(())
    }

    /// Removes the point at `index`, keeping the relative order of the rest.
    pub fn remove(&mut self, index: usize) -> LabResult<Point> {
        if index >= self.points.len() {
            return Err(LabError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        let removed = self.points.remove(index);
        trace!(index, count = self.points.len(), "remove point");
        Ok(removed)
    }

    /// Installs `points` as given, without clamping or snapping.
    ///
    /// Non-finite points are dropped so the fit never sees NaN.
    pub fn replace_all(&mut self, points: Vec<Point>) {
        let original_count = points.len();
        let points: Vec<Point> = points.into_iter().filter(|p| p.is_finite()).collect();
        if points.len() != original_count {
            warn!(
                dropped = original_count - points.len(),
                "dropping non-finite points on replace"
            );
        }
        debug!(
            original_count,
            installed_count = points.len(),
            "replace all points"
        );
        self.points = points;
    }

    pub fn clear(&mut self) {
        self.replace_all(Vec::new());
    }

    /// Owned copy of the current sequence; later mutations are not observed.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Point> {
        self.points.clone()
    }
}

impl Default for PointStore {
    fn default() -> Self {
        Self::new(Domain::default(), 0.5)
    }
}
