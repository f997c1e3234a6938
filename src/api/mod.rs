mod data_controller;
mod engine;
mod engine_config;
mod manual_entry;
mod random_point;
mod snapshot_controller;
mod validation;

pub use engine::{RegressionLab, SEED_POINTS};
pub use engine_config::LabConfig;
pub use manual_entry::ManualEntry;
pub use random_point::random_grid_point;
pub use snapshot_controller::LabSnapshot;
