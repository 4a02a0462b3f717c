pub mod color;
pub mod constants;
pub mod curve;
pub mod error;
pub mod gradient;
pub mod math;
pub mod preset;

pub use color::Color;
pub use curve::{Curve, CurveKey};
pub use error::GradientError;
pub use gradient::{AlphaKey, ColorKey, Gradient, GradientMode};
pub use preset::WeatherPreset;
