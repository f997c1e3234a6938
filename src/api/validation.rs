use crate::core::Domain;
use crate::error::{LabError, LabResult};

use super::LabConfig;

pub(super) fn validate_lab_config(config: LabConfig) -> LabResult<LabConfig> {
    let domain = Domain::new(config.domain_max)?;

    if !config.snap_step.is_finite() || config.snap_step <= 0.0 {
        return Err(LabError::InvalidConfig(
            "snap step must be finite and > 0".to_owned(),
        ));
    }
    if config.snap_step > domain.max() {
        return Err(LabError::InvalidConfig(
            "snap step must not exceed the domain".to_owned(),
        ));
    }

    config.sampler.validated()?;
    validate_random_range(config.random_min, config.random_span, domain)?;

    Ok(config)
}

fn validate_random_range(random_min: f64, random_span: f64, domain: Domain) -> LabResult<()> {
    if !random_min.is_finite() || !random_span.is_finite() || random_span <= 0.0 {
        return Err(LabError::InvalidConfig(
            "random range must be finite with span > 0".to_owned(),
        ));
    }
    if !domain.contains(random_min) || !domain.contains(random_min + random_span) {
        return Err(LabError::InvalidConfig(format!(
            "random range [{random_min}, {}] must lie inside [0, {}]",
            random_min + random_span,
            domain.max()
        )));
    }
    Ok(())
}
