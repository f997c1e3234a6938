use serde::Serialize;

use crate::core::{FitResult, SampleRow};
use crate::error::{LabError, LabResult};

/// Backend-agnostic scene for one draw pass: the fitted line and the rows
/// that trace it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub domain_max: f64,
    pub fit: FitResult,
    pub rows: Vec<SampleRow>,
    pub data_point_count: usize,
}

impl RenderFrame {
    #[must_use]
    pub fn new(domain_max: f64, fit: FitResult, rows: Vec<SampleRow>) -> Self {
        let data_point_count = rows.iter().filter(|row| row.is_data_point).count();
        Self {
            domain_max,
            fit,
            rows,
            data_point_count,
        }
    }

    /// Whether the fitted line should be drawn at all.
    #[must_use]
    pub fn has_line(&self) -> bool {
        self.data_point_count >= 2
    }

    pub fn validate(&self) -> LabResult<()> {
        if !self.domain_max.is_finite() || self.domain_max <= 0.0 {
            return Err(LabError::InvalidConfig(
                "frame domain max must be finite and > 0".to_owned(),
            ));
        }

        let mut previous_x = f64::NEG_INFINITY;
        let mut data_rows = 0usize;
        for row in &self.rows {
            if !row.x.is_finite() {
                return Err(LabError::InvalidInput(
                    "frame row x must be finite".to_owned(),
                ));
            }
            if row.x < previous_x {
                return Err(LabError::InvalidInput(
                    "frame rows must be sorted ascending by x".to_owned(),
                ));
            }
            if row.is_data_point != row.actual_y.is_some() {
                return Err(LabError::InvalidInput(
                    "only data rows may carry an actual y".to_owned(),
                ));
            }
            previous_x = row.x;
            data_rows += usize::from(row.is_data_point);
        }

        if data_rows != self.data_point_count {
            return Err(LabError::InvalidInput(format!(
                "frame declares {} data rows but carries {data_rows}",
                self.data_point_count
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
