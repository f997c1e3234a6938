use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{LabError, LabResult};

/// Read-only named dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub points: Vec<Point>,
}

impl Preset {
    fn from_pairs(name: &str, pairs: &[(f64, f64)]) -> Self {
        Self {
            name: name.to_owned(),
            points: pairs.iter().copied().map(Point::from).collect(),
        }
    }
}

pub const LINEAR: &str = "linear";
pub const SCATTERED: &str = "scattered";
pub const NO_CORRELATION: &str = "noCorrelation";

const LINEAR_POINTS: [(f64, f64); 5] =
    [(1.0, 2.0), (3.0, 4.0), (5.0, 6.0), (7.0, 8.0), (9.0, 10.0)];
const SCATTERED_POINTS: [(f64, f64); 5] =
    [(2.0, 3.0), (4.0, 7.0), (6.0, 5.0), (8.0, 11.0), (10.0, 9.0)];
const NO_CORRELATION_POINTS: [(f64, f64); 5] =
    [(2.0, 8.0), (4.0, 3.0), (6.0, 12.0), (8.0, 5.0), (10.0, 9.0)];

/// Fixed lookup of named presets.
///
/// `IndexMap` keeps declaration order so hosts can lay out preset buttons
/// deterministically.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCatalog {
    presets: IndexMap<String, Preset>,
}

impl PresetCatalog {
    /// Catalog with `linear`, `scattered` and `noCorrelation`.
    #[must_use]
    pub fn builtin() -> Self {
        let presets = [
            Preset::from_pairs(LINEAR, &LINEAR_POINTS),
            Preset::from_pairs(SCATTERED, &SCATTERED_POINTS),
            Preset::from_pairs(NO_CORRELATION, &NO_CORRELATION_POINTS),
        ]
        .into_iter()
        .map(|preset| (preset.name.clone(), preset))
        .collect();
        Self { presets }
    }

    pub fn get(&self, name: &str) -> LabResult<&Preset> {
        self.presets
            .get(name)
            .ok_or_else(|| LabError::UnknownPreset(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
