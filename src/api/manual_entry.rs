use crate::error::{LabError, LabResult};

/// Validated coordinates typed by a user into X/Y fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualEntry {
    pub x: f64,
    pub y: f64,
}

impl ManualEntry {
    /// Parses raw field text. Both fields must hold a finite number.
    pub fn parse(x_text: &str, y_text: &str) -> LabResult<Self> {
        Ok(Self {
            x: parse_coordinate("x", x_text)?,
            y: parse_coordinate("y", y_text)?,
        })
    }
}

fn parse_coordinate(axis: &str, text: &str) -> LabResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LabError::InvalidInput(format!("{axis} value is empty")));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|e| LabError::InvalidInput(format!("{axis} value `{trimmed}`: {e}")))?;
    if !value.is_finite() {
        return Err(LabError::InvalidInput(format!(
            "{axis} value must be finite"
        )));
    }
    Ok(value)
}
