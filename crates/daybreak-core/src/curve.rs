use serde::{Deserialize, Serialize};

/// Single keyframe of a [`Curve`]. Tangents are slopes (value per unit time).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub in_tangent: f32,
    #[serde(default)]
    pub out_tangent: f32,
}

impl CurveKey {
    pub fn flat(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }
}

/// Scalar animation curve with cubic Hermite segments.
/// Outside the key range the first/last value is held.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "CurveDef")]
pub struct Curve {
    keys: Vec<CurveKey>,
}

#[derive(Deserialize)]
struct CurveDef {
    #[serde(default)]
    keys: Vec<CurveKey>,
}

impl From<CurveDef> for Curve {
    fn from(def: CurveDef) -> Self {
        Curve::new(def.keys)
    }
}

impl Curve {
    /// Build a curve from unsorted keys.
    pub fn new(mut keys: Vec<CurveKey>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    pub fn constant(value: f32) -> Self {
        Self {
            keys: vec![CurveKey::flat(0.0, value)],
        }
    }

    /// Straight line from `(0, from)` to `(1, to)`.
    pub fn linear(from: f32, to: f32) -> Self {
        let slope = to - from;
        Self {
            keys: vec![
                CurveKey {
                    time: 0.0,
                    value: from,
                    in_tangent: slope,
                    out_tangent: slope,
                },
                CurveKey {
                    time: 1.0,
                    value: to,
                    in_tangent: slope,
                    out_tangent: slope,
                },
            ],
        }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Sample the curve. An empty curve evaluates to 0.
    pub fn evaluate(&self, t: f32) -> f32 {
        let Some(last) = self.keys.len().checked_sub(1) else {
            return 0.0;
        };
        if t <= self.keys[0].time {
            return self.keys[0].value;
        }
        if t >= self.keys[last].time {
            return self.keys[last].value;
        }

        let upper = self
            .keys
            .iter()
            .position(|k| k.time > t)
            .unwrap_or(last);
        let k0 = &self.keys[upper.saturating_sub(1)];
        let k1 = &self.keys[upper];

        let dt = k1.time - k0.time;
        if dt <= f32::EPSILON {
            return k0.value;
        }
        let s = (t - k0.time) / dt;
        let s2 = s * s;
        let s3 = s2 * s;

        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;

        h00 * k0.value + h10 * dt * k0.out_tangent + h01 * k1.value + h11 * dt * k1.in_tangent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_curve() {
        let c = Curve::constant(0.7);
        assert_eq!(c.evaluate(0.0), 0.7);
        assert_eq!(c.evaluate(0.5), 0.7);
        assert_eq!(c.evaluate(1.0), 0.7);
    }

    #[test]
    fn test_linear_curve_is_straight() {
        let c = Curve::linear(0.0, 2.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((c.evaluate(t) - 2.0 * t).abs() < 1e-5, "t={t}");
        }
    }

    #[test]
    fn test_flat_tangents_ease() {
        let c = Curve::new(vec![CurveKey::flat(0.0, 0.0), CurveKey::flat(1.0, 1.0)]);
        assert!((c.evaluate(0.5) - 0.5).abs() < 1e-5);
        // Smoothstep shape: slower than linear near the start
        assert!(c.evaluate(0.1) < 0.1);
    }

    #[test]
    fn test_holds_outside_key_range() {
        let c = Curve::new(vec![CurveKey::flat(0.8, 3.0), CurveKey::flat(0.2, 1.0)]);
        assert_eq!(c.evaluate(0.0), 1.0);
        assert_eq!(c.evaluate(1.0), 3.0);
    }

    #[test]
    fn test_empty_curve_is_zero() {
        assert_eq!(Curve::default().evaluate(0.3), 0.0);
    }
}
