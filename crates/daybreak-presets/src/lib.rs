pub mod defaults;
pub mod loader;
pub mod scheduler;
pub mod validator;

mod rng;

pub use defaults::builtin_presets;
pub use loader::{load_all_presets, load_preset_from_str, LoadError};
pub use scheduler::{WeatherChange, WeatherScheduler};
pub use validator::{validate_preset, ValidationError};
