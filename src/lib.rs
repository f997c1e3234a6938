//! regression-lab: interactive least-squares line fitting engine.
//!
//! The crate keeps an ordered point set, fits an ordinary-least-squares line
//! with R², and resamples the line into render-ready rows. Drawing is left to
//! the host through the `render::Renderer` contract.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{LabConfig, RegressionLab};
pub use error::{LabError, LabResult};
