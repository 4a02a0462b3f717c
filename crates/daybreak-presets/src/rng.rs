//! Deterministic weather PRNG.
//!
//! Pure function: `weather_hash(seed, draw) -> u32`. No state; the
//! scheduler advances `draw` itself so a replay with the same seed
//! reproduces the same forecast.

/// Hash a seed and draw counter into a deterministic pseudo-random u32.
pub(crate) fn weather_hash(seed: u32, draw: u32) -> u32 {
    let mut state = seed
        .wrapping_mul(0x9E3779B9)
        .wrapping_add(draw.wrapping_mul(0x2545F491));

    // PCG-style mixing rounds
    state ^= state >> 16;
    state = state.wrapping_mul(0x45D9F3B);
    state ^= state >> 16;
    state = state.wrapping_mul(0x45D9F3B);
    state ^= state >> 16;

    state
}

/// Map a hash onto the inclusive range `[min, max]`.
pub(crate) fn hash_to_range(hash: u32, min: u32, max: u32) -> u32 {
    if max <= min {
        return min;
    }
    let span = (max - min) as u64 + 1;
    min + (hash as u64 % span) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(weather_hash(7, 3), weather_hash(7, 3));
    }

    #[test]
    fn test_draws_differ() {
        let vals: Vec<u32> = (0..5).map(|d| weather_hash(1, d)).collect();
        for i in 0..vals.len() {
            for j in (i + 1)..vals.len() {
                assert_ne!(vals[i], vals[j], "hash collision at draws {i}, {j}");
            }
        }
    }

    #[test]
    fn test_hash_to_range_inclusive() {
        let mut seen_min = false;
        let mut seen_max = false;
        for d in 0..1000 {
            let v = hash_to_range(weather_hash(42, d), 2, 5);
            assert!((2..=5).contains(&v), "out of range: {v}");
            seen_min |= v == 2;
            seen_max |= v == 5;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(hash_to_range(12345, 3, 3), 3);
        assert_eq!(hash_to_range(12345, 4, 1), 4);
    }
}
