use daybreak_core::preset::WeatherPreset;
use thiserror::Error;

use crate::validator::{validate_preset, ValidationError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse weather preset RON: {0}")]
    PresetParseError(String),
    #[error("Weather preset '{name}' failed validation: {errors:?}")]
    Invalid {
        name: String,
        errors: Vec<ValidationError>,
    },
}

/// Parse a single weather preset RON string. Does not validate.
pub fn parse_preset(ron_str: &str) -> Result<WeatherPreset, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::PresetParseError(e.to_string()))
}

/// Parse and validate a single weather preset.
pub fn load_preset_from_str(ron_str: &str) -> Result<WeatherPreset, LoadError> {
    let preset = parse_preset(ron_str)?;
    validate_preset(&preset).map_err(|errors| LoadError::Invalid {
        name: preset.name.clone(),
        errors,
    })?;
    log::debug!("Loaded weather preset '{}'", preset.name);
    Ok(preset)
}

/// Load and validate multiple preset sources, keeping their order.
pub fn load_all_presets(sources: &[&str]) -> Result<Vec<WeatherPreset>, LoadError> {
    sources.iter().map(|s| load_preset_from_str(s)).collect()
}
