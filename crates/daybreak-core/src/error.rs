use thiserror::Error;

/// Errors raised while building color ramps.
#[derive(Debug, Error, PartialEq)]
pub enum GradientError {
    #[error("Gradient key time {0} outside [0, 1]")]
    KeyOutOfRange(f32),

    #[error("Gradient has {count} {channel} keys, maximum is {max}")]
    TooManyKeys {
        channel: &'static str,
        count: usize,
        max: usize,
    },
}
