pub mod point_store;
pub mod presets;
pub mod primitives;
pub mod regression;
pub mod sampler;
pub mod types;

pub use point_store::PointStore;
pub use presets::{Preset, PresetCatalog};
pub use regression::{Degeneracy, FitResult, FitStrength, fit};
pub use sampler::{SampleRow, SamplerTuning, sample_fit_line};
pub use types::{Domain, Point};
