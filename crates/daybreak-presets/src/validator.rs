use daybreak_core::constants::{MAX_DENSITY, MIN_DENSITY};
use daybreak_core::error::GradientError;
use daybreak_core::gradient::Gradient;
use daybreak_core::preset::WeatherPreset;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Preset '{name}' {field} = {value} is outside [0, 1]")]
    BandOutOfRange {
        name: String,
        field: &'static str,
        value: f32,
    },
    #[error("Preset '{name}' transition_start {start} must be below transition_end {end}")]
    BandInverted { name: String, start: f32, end: f32 },
    #[error("Preset '{name}' {field} = {value} is outside (0, 1]")]
    DensityOutOfRange {
        name: String,
        field: &'static str,
        value: f32,
    },
    #[error("Preset '{name}' duration_min must be at least one day")]
    ZeroDuration { name: String },
    #[error("Preset '{name}' duration_min {min} exceeds duration_max {max}")]
    DurationInverted { name: String, min: u32, max: u32 },
    #[error("Preset '{name}' gradient '{field}' has no color keys")]
    EmptyGradient { name: String, field: &'static str },
    #[error("Preset '{name}' gradient '{field}': {source}")]
    BadGradient {
        name: String,
        field: &'static str,
        source: GradientError,
    },
    #[error("Preset '{name}' wind_direction must be finite")]
    NonFiniteWind { name: String },
    #[error("Preset '{name}' cloud_stratification {value} must be finite and non-negative")]
    BadStratification { name: String, value: f32 },
}

/// Validate a preset's range-constrained fields. Collects every violation.
pub fn validate_preset(preset: &WeatherPreset) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let name = &preset.name;

    // Transition band
    for (field, value) in [
        ("transition_start", preset.transition_start),
        ("transition_end", preset.transition_end),
    ] {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ValidationError::BandOutOfRange {
                name: name.clone(),
                field,
                value,
            });
        }
    }
    if preset.transition_start >= preset.transition_end {
        errors.push(ValidationError::BandInverted {
            name: name.clone(),
            start: preset.transition_start,
            end: preset.transition_end,
        });
    }

    // Densities divide the cloud strata, so zero is never allowed
    for (field, value) in [
        ("cloud_density_day", preset.cloud_density_day),
        ("cloud_density_night", preset.cloud_density_night),
        ("fog_density_day", preset.fog_density_day),
        ("fog_density_night", preset.fog_density_night),
    ] {
        if !(MIN_DENSITY..=MAX_DENSITY).contains(&value) {
            errors.push(ValidationError::DensityOutOfRange {
                name: name.clone(),
                field,
                value,
            });
        }
    }

    // Scheduler durations
    if preset.duration_min == 0 {
        errors.push(ValidationError::ZeroDuration { name: name.clone() });
    }
    if preset.duration_min > preset.duration_max {
        errors.push(ValidationError::DurationInverted {
            name: name.clone(),
            min: preset.duration_min,
            max: preset.duration_max,
        });
    }

    // Gradients
    for (field, gradient) in [("sunlight", &preset.sunlight), ("fog", &preset.fog)] {
        if gradient.is_empty() {
            errors.push(ValidationError::EmptyGradient {
                name: name.clone(),
                field,
            });
        }
    }
    let gradients: [(&'static str, &Gradient); 6] = [
        ("sunlight", &preset.sunlight),
        ("fog", &preset.fog),
        ("clouds_high", &preset.clouds_high),
        ("clouds_low", &preset.clouds_low),
        ("city_diffuse", &preset.city_diffuse),
        ("water_diffuse", &preset.water_diffuse),
    ];
    for (field, gradient) in gradients {
        if let Err(source) = gradient.check() {
            errors.push(ValidationError::BadGradient {
                name: name.clone(),
                field,
                source,
            });
        }
    }

    if !preset.wind_direction.is_finite() {
        errors.push(ValidationError::NonFiniteWind { name: name.clone() });
    }
    if !preset.cloud_stratification.is_finite() || preset.cloud_stratification < 0.0 {
        errors.push(ValidationError::BadStratification {
            name: name.clone(),
            value: preset.cloud_stratification,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
