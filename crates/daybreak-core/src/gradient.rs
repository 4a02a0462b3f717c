//! Color ramps keyed by a normalized scalar.
//!
//! A [`Gradient`] holds color keys and alpha keys on independent timelines,
//! the way artists author sky ramps: the alpha channel often needs fewer
//! keys than the hue. Both timelines live in [0, 1] and sampling clamps `t`
//! into that range, so the first/last key extends to the edges.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::MAX_GRADIENT_KEYS;
use crate::error::GradientError;

/// How values between two keys are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GradientMode {
    /// Linear blend between the surrounding keys.
    #[default]
    Blend,
    /// Hold the next key's value until `t` passes it.
    Fixed,
}

/// RGB key on the color timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorKey {
    pub time: f32,
    pub color: (f32, f32, f32),
}

/// Key on the alpha timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaKey {
    pub time: f32,
    pub alpha: f32,
}

/// Continuous color ramp. Keys are kept sorted by time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "GradientDef")]
pub struct Gradient {
    pub mode: GradientMode,
    color_keys: Vec<ColorKey>,
    alpha_keys: Vec<AlphaKey>,
}

/// Wire form of a gradient. Deserialized keys may arrive in any order.
#[derive(Deserialize)]
struct GradientDef {
    #[serde(default)]
    mode: GradientMode,
    #[serde(default)]
    color_keys: Vec<ColorKey>,
    #[serde(default)]
    alpha_keys: Vec<AlphaKey>,
}

impl From<GradientDef> for Gradient {
    fn from(def: GradientDef) -> Self {
        Gradient::from_keys_unchecked(def.mode, def.color_keys, def.alpha_keys)
    }
}

impl Gradient {
    /// Build a gradient, rejecting key times outside [0, 1] and more than
    /// `MAX_GRADIENT_KEYS` keys on either timeline.
    pub fn new(
        mode: GradientMode,
        color_keys: Vec<ColorKey>,
        alpha_keys: Vec<AlphaKey>,
    ) -> Result<Self, GradientError> {
        let gradient = Self::from_keys_unchecked(mode, color_keys, alpha_keys);
        gradient.check()?;
        Ok(gradient)
    }

    fn from_keys_unchecked(
        mode: GradientMode,
        mut color_keys: Vec<ColorKey>,
        mut alpha_keys: Vec<AlphaKey>,
    ) -> Self {
        color_keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        alpha_keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self {
            mode,
            color_keys,
            alpha_keys,
        }
    }

    /// Single opaque color everywhere.
    pub fn solid(color: Color) -> Self {
        Self::from_keys_unchecked(
            GradientMode::Blend,
            vec![ColorKey {
                time: 0.0,
                color: (color.r, color.g, color.b),
            }],
            vec![AlphaKey {
                time: 0.0,
                alpha: color.a,
            }],
        )
    }

    /// Opaque blend from `from` at t=0 to `to` at t=1.
    pub fn two_stop(from: Color, to: Color) -> Self {
        Self::from_keys_unchecked(
            GradientMode::Blend,
            vec![
                ColorKey {
                    time: 0.0,
                    color: (from.r, from.g, from.b),
                },
                ColorKey {
                    time: 1.0,
                    color: (to.r, to.g, to.b),
                },
            ],
            vec![
                AlphaKey {
                    time: 0.0,
                    alpha: from.a,
                },
                AlphaKey {
                    time: 1.0,
                    alpha: to.a,
                },
            ],
        )
    }

    /// Verify the authoring constraints (key count and key range).
    pub fn check(&self) -> Result<(), GradientError> {
        if self.color_keys.len() > MAX_GRADIENT_KEYS {
            return Err(GradientError::TooManyKeys {
                channel: "color",
                count: self.color_keys.len(),
                max: MAX_GRADIENT_KEYS,
            });
        }
        if self.alpha_keys.len() > MAX_GRADIENT_KEYS {
            return Err(GradientError::TooManyKeys {
                channel: "alpha",
                count: self.alpha_keys.len(),
                max: MAX_GRADIENT_KEYS,
            });
        }
        let times = self
            .color_keys
            .iter()
            .map(|k| k.time)
            .chain(self.alpha_keys.iter().map(|k| k.time));
        for time in times {
            if !(0.0..=1.0).contains(&time) {
                return Err(GradientError::KeyOutOfRange(time));
            }
        }
        Ok(())
    }

    pub fn color_keys(&self) -> &[ColorKey] {
        &self.color_keys
    }

    pub fn alpha_keys(&self) -> &[AlphaKey] {
        &self.alpha_keys
    }

    /// True when no color key has been authored.
    pub fn is_empty(&self) -> bool {
        self.color_keys.is_empty()
    }

    /// Sample the ramp at `t` (clamped to [0, 1]).
    ///
    /// No color keys evaluates to white, no alpha keys to opaque.
    pub fn evaluate(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);

        let (r, g, b) = match bracket(&self.color_keys, t, self.mode, |k| k.time) {
            Some((lo, hi, f)) => {
                let a = self.color_keys[lo].color;
                let b = self.color_keys[hi].color;
                (
                    a.0 + (b.0 - a.0) * f,
                    a.1 + (b.1 - a.1) * f,
                    a.2 + (b.2 - a.2) * f,
                )
            }
            None => (1.0, 1.0, 1.0),
        };

        let alpha = match bracket(&self.alpha_keys, t, self.mode, |k| k.time) {
            Some((lo, hi, f)) => {
                let a = self.alpha_keys[lo].alpha;
                a + (self.alpha_keys[hi].alpha - a) * f
            }
            None => 1.0,
        };

        Color::rgba(r, g, b, alpha)
    }
}

/// Find the keys surrounding `t` and the blend factor between them.
/// Returns `None` for an empty timeline.
fn bracket<K>(
    keys: &[K],
    t: f32,
    mode: GradientMode,
    time: impl Fn(&K) -> f32,
) -> Option<(usize, usize, f32)> {
    let last = keys.len().checked_sub(1)?;
    if t <= time(&keys[0]) {
        return Some((0, 0, 0.0));
    }
    if t >= time(&keys[last]) {
        return Some((last, last, 0.0));
    }

    match mode {
        GradientMode::Fixed => {
            let next = keys.iter().position(|k| time(k) >= t).unwrap_or(last);
            Some((next, next, 0.0))
        }
        GradientMode::Blend => {
            let upper = keys.iter().position(|k| time(k) > t).unwrap_or(last);
            let lower = upper.saturating_sub(1);
            let span = time(&keys[upper]) - time(&keys[lower]);
            if span <= f32::EPSILON {
                return Some((lower, lower, 0.0));
            }
            Some((lower, upper, (t - time(&keys[lower])) / span))
        }
    }
}
