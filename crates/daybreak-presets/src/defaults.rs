//! Built-in weather presets embedded from `data/weather/`.

use daybreak_core::preset::WeatherPreset;

use crate::loader::{load_all_presets, LoadError};

pub const CLEAR_RON: &str = include_str!("../../../data/weather/clear.ron");
pub const OVERCAST_RON: &str = include_str!("../../../data/weather/overcast.ron");
pub const STORM_RON: &str = include_str!("../../../data/weather/storm.ron");

/// Names accepted by [`builtin_preset`], in load order.
pub const BUILTIN_NAMES: [&str; 3] = ["clear", "overcast", "storm"];

/// Load every built-in preset.
pub fn builtin_presets() -> Result<Vec<WeatherPreset>, LoadError> {
    load_all_presets(&[CLEAR_RON, OVERCAST_RON, STORM_RON])
}

/// Load a built-in preset by its lowercase name.
pub fn builtin_preset(name: &str) -> Option<Result<WeatherPreset, LoadError>> {
    let source = match name {
        "clear" => CLEAR_RON,
        "overcast" => OVERCAST_RON,
        "storm" => STORM_RON,
        _ => return None,
    };
    Some(crate::loader::load_preset_from_str(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets_load_and_validate() {
        let presets = builtin_presets().expect("built-in presets must be valid");
        assert_eq!(presets.len(), BUILTIN_NAMES.len());
        for (preset, name) in presets.iter().zip(BUILTIN_NAMES) {
            assert_eq!(preset.name.to_lowercase(), name);
        }
    }

    #[test]
    fn test_builtin_by_name() {
        let storm = builtin_preset("storm")
            .expect("known name")
            .expect("valid preset");
        assert!(storm.has_clouds);
        assert!(storm.fog_density_night > storm.fog_density_day);
        assert!(builtin_preset("sandstorm").is_none());
    }

    #[test]
    fn test_clear_gradient_keys_sorted() {
        let clear = builtin_preset("clear")
            .expect("known name")
            .expect("valid preset");
        let keys = clear.sunlight.color_keys();
        assert!(keys.windows(2).all(|w| w[0].time <= w[1].time));
        assert_eq!(clear.city_light_range.evaluate(1.0), 0.0);
    }
}
