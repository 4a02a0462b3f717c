use thiserror::Error;

/// Errors raised at the evaluator's call boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkyError {
    #[error("Evaluator for '{0}' updated before start()")]
    NotStarted(String),

    #[error("Preset '{0}' has clouds but the scene bound no cloud layers")]
    NoCloudLayers(String),

    #[error("Preset '{name}' is invalid: {reason}")]
    InvalidPreset { name: String, reason: String },
}
