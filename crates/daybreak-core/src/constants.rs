//! Single source of truth for shared constants.
//! Material property names must match the cloud shader's uniform names.

/// Day fraction separating the night side (`t < NOON_SPLIT`) from the day side.
pub const NOON_SPLIT: f32 = 0.5;

/// Default start of the day/night transition band.
pub const DEFAULT_TRANSITION_START: f32 = 0.49;

/// Default end of the day/night transition band.
pub const DEFAULT_TRANSITION_END: f32 = 0.51;

/// Smallest density a preset may author. Densities are in (0, 1].
pub const MIN_DENSITY: f32 = 0.000_000_1;

/// Largest density a preset may author.
pub const MAX_DENSITY: f32 = 1.0;

/// Maximum number of color keys or alpha keys in a single gradient.
pub const MAX_GRADIENT_KEYS: usize = 8;

/// Length of one full day cycle in real seconds when the host does not override it.
pub const DEFAULT_DAY_LENGTH_SECONDS: f32 = 600.0;

/// Cloud texture property scrolled by the wind.
pub const PROP_MAIN_TEX: &str = "_MainTex";

/// Cloud layer color property written on transition frames.
pub const PROP_COLOR: &str = "_Color";

/// Cloud layer sun color property written on transition frames.
pub const PROP_SUN: &str = "_Sun";

/// Cloud tint property cleared when a preset has no clouds.
pub const PROP_TINT_COLOR: &str = "_TintColor";
